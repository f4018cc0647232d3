/// Reserved label prepended to every trace by [`TraceLog::augmented`](crate::TraceLog::augmented)
///
/// Not a valid activity name in raw logs: it is only introduced through augmentation.
pub const START_ACTIVITY: &str = "[>";
/// Reserved label appended to every trace by [`TraceLog::augmented`](crate::TraceLog::augmented)
///
/// See also [`START_ACTIVITY`]
pub const END_ACTIVITY: &str = "[]";
/// Common identifying field for event identities (i.e., activities) in XES
///
/// Used as the default activity key of [`XESImportOptions`](crate::XESImportOptions)
pub const ACTIVITY_NAME: &str = "concept:name";
