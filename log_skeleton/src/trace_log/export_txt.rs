use std::{
    fs::File,
    io::{BufWriter, Error, ErrorKind, Write},
    path::Path,
};

use super::trace_log_struct::TraceLog;

/// Export a [`TraceLog`] in the text format to a writer
///
/// Every trace is written on its own line as `<frequency>x Case<index> <activities...>`,
/// using zero-based case indices in the (sorted) order of the log.
///
/// Fails with [`ErrorKind::InvalidInput`] if an activity is empty or contains whitespace, as it could not be read back.
pub fn export_txt<W: Write>(log: &TraceLog, writer: W) -> Result<(), Error> {
    let mut writer = BufWriter::new(writer);
    for (i, (trace, frequency)) in log.iter().enumerate() {
        if let Some(act) = trace
            .iter()
            .find(|a| a.is_empty() || a.chars().any(char::is_whitespace))
        {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Activity {act:?} cannot be exported to the text format"),
            ));
        }
        write!(writer, "{frequency}x Case{i}")?;
        for act in trace {
            write!(writer, " {act}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// Export a [`TraceLog`] in the text format to a file path
pub fn export_txt_file_path<P: AsRef<Path>>(log: &TraceLog, path: P) -> Result<(), Error> {
    let file = File::create(path)?;
    export_txt(log, file)
}
