use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

use super::trace_log_struct::{Trace, TraceLog, TraceLogError};

///
/// Error encountered while importing a [`TraceLog`] from the text format
///
#[derive(Debug, Clone)]
pub enum TxtParseError {
    /// IO error
    IOError(Rc<std::io::Error>),
    /// A line could not be turned into a trace (with the 1-based line number included)
    InvalidLine {
        /// 1-based line number
        line: usize,
        /// Cause
        error: TraceLogError,
    },
}

impl TxtParseError {
    /// The underlying [`TraceLogError`], if this error was caused by the content of a line
    pub fn trace_log_error(&self) -> Option<&TraceLogError> {
        match self {
            TxtParseError::InvalidLine { error, .. } => Some(error),
            TxtParseError::IOError(_) => None,
        }
    }
}

impl std::fmt::Display for TxtParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxtParseError::IOError(e) => write!(f, "Failed to read trace log: {e}"),
            TxtParseError::InvalidLine { line, error } => {
                write!(f, "Failed to parse trace log (line {line}): {error}")
            }
        }
    }
}

impl std::error::Error for TxtParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TxtParseError::IOError(e) => Some(e.as_ref()),
            TxtParseError::InvalidLine { error, .. } => Some(error),
        }
    }
}

impl From<std::io::Error> for TxtParseError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(Rc::new(e))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
///
/// Options for importing the text format
///
/// Every non-empty line describes one trace, e.g., `3x Case1 a b c d`:
/// a frequency field (with an optional `x` marker), a case name, followed by the activities.
pub struct TxtImportOptions {
    /// Field delimiter. If `None`, fields are separated by any amount of whitespace
    ///
    /// With an explicit delimiter every field is kept verbatim: `a;;b` yields the activities `a`, `""` and `b`,
    /// and whitespace around activities is part of their label.
    pub delimiter: Option<String>,
    /// Index of the frequency field
    pub frequency_idx: usize,
    /// Index of the first activity field; all following fields are activities as well
    pub first_activity_idx: usize,
}

impl Default for TxtImportOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            frequency_idx: 0,
            first_activity_idx: 2,
        }
    }
}

fn parse_line(line: &str, options: &TxtImportOptions) -> Result<(Trace, i128), TraceLogError> {
    let fields: Vec<&str> = match &options.delimiter {
        Some(delimiter) => line.split(delimiter.as_str()).collect(),
        None => line.split_whitespace().collect(),
    };
    let trace: Trace = fields
        .get(options.first_activity_idx..)
        .unwrap_or_default()
        .iter()
        .map(|a| a.to_string())
        .collect();
    // Wide enough for every u64 frequency and its negation
    let frequency = fields
        .get(options.frequency_idx)
        .and_then(|f| f.trim().replace('x', "").parse::<i128>().ok());
    match frequency {
        Some(frequency) => Ok((trace, frequency)),
        None => Err(TraceLogError::MissingFrequency(trace)),
    }
}

/// Import a [`TraceLog`] in the text format from the given reader
///
/// Empty lines are skipped. A trace occurring on more than one line is rejected with [`TraceLogError::DuplicateTrace`].
pub fn import_txt<R>(reader: R, options: &TxtImportOptions) -> Result<TraceLog, TxtParseError>
where
    R: BufRead,
{
    let mut log = TraceLog::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let invalid = |error: TraceLogError| TxtParseError::InvalidLine { line: i + 1, error };
        let (trace, frequency) = parse_line(line, options).map_err(invalid)?;
        if log.contains(&trace) {
            return Err(invalid(TraceLogError::DuplicateTrace(trace)));
        }
        log.set(trace, frequency).map_err(invalid)?;
    }
    Ok(log)
}

///
/// Import a [`TraceLog`] in the text format directly from a string
///
pub fn import_txt_str(txt: &str, options: &TxtImportOptions) -> Result<TraceLog, TxtParseError> {
    import_txt(BufReader::new(txt.as_bytes()), options)
}

///
/// Import a [`TraceLog`] in the text format from a file path
///
pub fn import_txt_file<P: AsRef<Path>>(
    path: P,
    options: &TxtImportOptions,
) -> Result<TraceLog, TxtParseError> {
    let file = File::open(path)?;
    import_txt(BufReader::new(file), options)
}
