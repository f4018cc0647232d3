use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    rc::Rc,
};

use flate2::bufread::GzDecoder;
use quick_xml::{events::Event, Error as QuickXMLError, Reader};
use serde::{Deserialize, Serialize};

use super::{
    constants::ACTIVITY_NAME,
    trace_log_struct::{Activity, Trace, TraceLog},
};
use crate::utils::xml_utils::get_attribute_string;

///
/// Error encountered while parsing XES
///
#[derive(Debug, Clone)]
pub enum XESParseError {
    /// IO errror
    IOError(Rc<std::io::Error>),
    /// XML error (e.g., incorrect XML format )
    XMLParsingError(QuickXMLError),
    /// There is not top-level `<log>`
    NoTopLevelLog,
}

impl std::fmt::Display for XESParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse XES: {:?}", self)
    }
}

impl std::error::Error for XESParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XESParseError::IOError(e) => Some(e.as_ref()),
            XESParseError::XMLParsingError(e) => Some(e),
            XESParseError::NoTopLevelLog => None,
        }
    }
}

impl From<std::io::Error> for XESParseError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(Rc::new(e))
    }
}

impl From<QuickXMLError> for XESParseError {
    fn from(e: QuickXMLError) -> Self {
        Self::XMLParsingError(e)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
///
/// Options for XES Import
///
pub struct XESImportOptions {
    /// Event attribute used as activity label
    pub activity_key: String,
}

impl Default for XESImportOptions {
    fn default() -> Self {
        Self {
            activity_key: ACTIVITY_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    None,
    Log,
    Trace,
    Event,
}

/// Parser state while walking through the XML events
#[derive(Debug)]
struct XESTraceCollector<'a> {
    options: &'a XESImportOptions,
    mode: Mode,
    encountered_log: bool,
    /// Depth of currently open (nested) attribute tags
    attribute_depth: usize,
    current_trace: Trace,
    current_activity: Option<Activity>,
    /// Number of events skipped in the current trace
    skipped_events: usize,
    counts: HashMap<Trace, u64>,
}

impl<'a> XESTraceCollector<'a> {
    fn new(options: &'a XESImportOptions) -> Self {
        Self {
            options,
            mode: Mode::None,
            encountered_log: false,
            attribute_depth: 0,
            current_trace: Vec::new(),
            current_activity: None,
            skipped_events: 0,
            counts: HashMap::new(),
        }
    }

    fn open(&mut self, name: &[u8]) -> Result<(), XESParseError> {
        match name {
            b"log" => {
                self.encountered_log = true;
                self.mode = Mode::Log;
            }
            _ if !self.encountered_log => return Err(XESParseError::NoTopLevelLog),
            _ if self.attribute_depth > 0 => self.attribute_depth += 1,
            b"trace" if self.mode == Mode::Log => {
                self.mode = Mode::Trace;
                self.current_trace = Vec::new();
                self.skipped_events = 0;
            }
            b"event" if self.mode == Mode::Trace => {
                self.mode = Mode::Event;
                self.current_activity = None;
            }
            // Attributes with own child attributes, globals, ...
            _ => self.attribute_depth += 1,
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        if self.attribute_depth > 0 {
            self.attribute_depth -= 1;
            return;
        }
        match (name, self.mode) {
            (b"event", Mode::Event) => {
                match self.current_activity.take() {
                    Some(activity) => self.current_trace.push(activity),
                    None => self.skipped_events += 1,
                }
                self.mode = Mode::Trace;
            }
            (b"trace", Mode::Trace) => {
                if self.skipped_events > 0 {
                    log::warn!(
                        "Skipped {} event(s) without {:?} attribute",
                        self.skipped_events,
                        self.options.activity_key
                    );
                }
                let trace = std::mem::take(&mut self.current_trace);
                *self.counts.entry(trace).or_default() += 1;
                self.mode = Mode::Log;
            }
            (b"log", _) => self.mode = Mode::None,
            _ => {}
        }
    }

    /// Handle a self-closing tag, i.e., a leaf attribute or an empty element
    fn empty(&mut self, t: &quick_xml::events::BytesStart<'_>) -> Result<(), XESParseError> {
        let name = t.name();
        match name.as_ref() {
            b"log" => {
                self.encountered_log = true;
                self.mode = Mode::None;
            }
            _ if !self.encountered_log => return Err(XESParseError::NoTopLevelLog),
            b"trace" if self.attribute_depth == 0 && self.mode == Mode::Log => {
                *self.counts.entry(Vec::new()).or_default() += 1;
            }
            b"event" if self.attribute_depth == 0 && self.mode == Mode::Trace => {
                self.skipped_events += 1;
            }
            _ if self.attribute_depth == 0 && self.mode == Mode::Event => {
                if get_attribute_string(t, "key").as_deref() == Some(self.options.activity_key.as_str()) {
                    self.current_activity = get_attribute_string(t, "value");
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Parse XES from the given reader into a [`TraceLog`]
///
/// Traces with identical activity sequences are aggregated, i.e., the frequency of a trace is the number of
/// XES traces with this sequence. Events without the configured activity attribute are skipped.
pub fn import_xes<T>(reader: T, options: &XESImportOptions) -> Result<TraceLog, XESParseError>
where
    T: BufRead,
{
    let mut reader = Reader::from_reader(reader);
    reader.config_mut().trim_text(true);
    let mut collector = XESTraceCollector::new(options);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(t) => collector.open(t.name().as_ref())?,
            Event::Empty(t) => collector.empty(&t)?,
            Event::End(t) => collector.close(t.name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    if !collector.encountered_log {
        return Err(XESParseError::NoTopLevelLog);
    }
    Ok(collector.counts.into_iter().collect())
}

///
/// Import a XES file as [`TraceLog`] from a file path
///
/// Files ending in `.gz` are decompressed.
///
pub fn import_xes_file<P: AsRef<Path>>(
    path: P,
    options: &XESImportOptions,
) -> Result<TraceLog, XESParseError> {
    let is_compressed_gz = path
        .as_ref()
        .to_str()
        .is_some_and(|p| p.ends_with(".gz"));
    let file = File::open(path)?;
    if is_compressed_gz {
        let dec = GzDecoder::new(BufReader::new(file));
        import_xes(BufReader::new(dec), options)
    } else {
        import_xes(BufReader::new(file), options)
    }
}

///
/// Import a XES file as [`TraceLog`] directly from a string
///
pub fn import_xes_str(xes_str: &str, options: &XESImportOptions) -> Result<TraceLog, XESParseError> {
    import_xes(BufReader::new(xes_str.as_bytes()), options)
}

///
/// Import a XES file as [`TraceLog`] from a byte slice (&\[u8\])
///
/// * `is_compressed_gz`: Parse the passed `xes_data` as a compressed .gz archive
///
pub fn import_xes_slice(
    xes_data: &[u8],
    is_compressed_gz: bool,
    options: &XESImportOptions,
) -> Result<TraceLog, XESParseError> {
    if is_compressed_gz {
        let gz: GzDecoder<&[u8]> = GzDecoder::new(xes_data);
        return import_xes(BufReader::new(gz), options);
    }
    import_xes(BufReader::new(xes_data), options)
}
