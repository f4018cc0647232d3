#![warn(
    clippy::doc_markdown,
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs
)]

#![doc = include_str!("../README.md")]

///
/// Trace logs (multisets of activity sequences) and their import/export
///
pub mod trace_log {
    /// Reserved activity labels and attribute keys
    pub mod constants;
    /// Export of [`TraceLog`] to the line-oriented text format
    pub mod export_txt;
    /// Restricting a [`TraceLog`] to traces with required/forbidden activities
    pub mod filter;
    /// Import of [`TraceLog`] from the line-oriented text format
    pub mod import_txt;
    /// Import of [`TraceLog`] from XES event logs
    pub mod import_xes;
    /// [`TraceLog`] struct
    pub mod trace_log_struct;

    pub use trace_log_struct::{Activity, ActivityPair, Frequency, Trace, TraceLog, TraceLogError};

    #[cfg(test)]
    mod tests;
}

///
/// Relations derived from a single trace
///
pub mod relations {
    /// Follows pairs, successor/predecessor sets and activity frequency histograms of one trace
    pub mod primitives;
}

///
/// Log Skeleton discovery
///
pub mod log_skeleton {
    /// Frequency-weighted directly-follows counts
    pub mod directly_follows;
    /// Equivalence relation
    pub mod equivalence;
    /// [`LogSkeleton`] struct and sub-structs
    pub mod log_skeleton_struct;
    /// [`Miner`] capability and the Log Skeleton miner
    pub mod miner;
    /// Never-together relation
    pub mod never_together;
    /// Always-after and always-before relations
    pub mod ordering;
    /// Per-activity sum/max/min counters
    pub mod statistics;

    #[doc(inline)]
    pub use log_skeleton_struct::{LogSkeleton, Relationships, Statistics, SymmetricRelation};

    #[doc(inline)]
    pub use miner::{mine_log_skeleton, LogSkeletonMiner, Miner, MinerConfig};

    #[cfg(test)]
    mod tests;
}

/// Util module with smaller helper functions
pub mod utils;

#[doc(inline)]
pub use trace_log::TraceLog;

#[doc(inline)]
pub use trace_log::TraceLogError;

#[doc(inline)]
pub use trace_log::import_txt::import_txt_file;

#[doc(inline)]
pub use trace_log::import_txt::TxtImportOptions;

#[doc(inline)]
pub use trace_log::export_txt::export_txt_file_path;

#[doc(inline)]
pub use trace_log::import_xes::import_xes_file;

#[doc(inline)]
pub use trace_log::import_xes::import_xes_slice;

#[doc(inline)]
pub use trace_log::import_xes::XESImportOptions;

#[doc(inline)]
pub use log_skeleton::LogSkeleton;

#[doc(inline)]
pub use log_skeleton::mine_log_skeleton;

#[doc(inline)]
pub use log_skeleton::LogSkeletonMiner;

#[doc(inline)]
pub use log_skeleton::Miner;

#[doc(inline)]
pub use log_skeleton::MinerConfig;
