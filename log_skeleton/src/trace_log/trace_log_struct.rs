use std::{
    collections::{btree_map, BTreeMap, BTreeSet},
    fmt::Display,
};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::constants::{END_ACTIVITY, START_ACTIVITY};
use crate::log_skeleton::{
    directly_follows::directly_follows, equivalence::equivalence, never_together::never_together,
    ordering::{always_after, always_before},
    statistics::{max_counter, min_counter, sum_counter},
    SymmetricRelation,
};

/// Activity label (e.g., `"Register Request"`)
pub type Activity = String;

/// A trace: the ordered sequence of activities of one process execution
pub type Trace = Vec<Activity>;

/// Ordered pair of activities
pub type ActivityPair = (Activity, Activity);

///
/// Error encountered while modifying, importing or querying a [`TraceLog`]
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceLogError {
    /// Frequency is not a non-negative integer (with the offending trace and value included)
    IllegalFrequency {
        /// Trace the frequency was supposed to be assigned to
        trace: Trace,
        /// Rejected frequency value
        frequency: String,
    },
    /// The same trace was encountered twice during import
    DuplicateTrace(Trace),
    /// No (parsable) frequency available for a trace during import
    MissingFrequency(Trace),
    /// A distance parameter was not a positive integer
    InvalidDistance(usize),
}

impl TraceLogError {
    /// Whether this error is caused by an illegal action on the log (i.e., invalid frequencies or duplicated traces)
    ///
    /// Returns `false` for invalid parameters passed to relation computations.
    pub fn is_illegal_log_action(&self) -> bool {
        !matches!(self, TraceLogError::InvalidDistance(_))
    }
}

impl std::fmt::Display for TraceLogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceLogError::IllegalFrequency { trace, frequency } => {
                write!(f, "Cannot set frequency of trace {trace:?} equal to {frequency}")
            }
            TraceLogError::DuplicateTrace(trace) => {
                write!(f, "Attempting to add trace {trace:?} twice")
            }
            TraceLogError::MissingFrequency(trace) => write!(f, "No frequency for trace {trace:?}"),
            TraceLogError::InvalidDistance(distance) => write!(
                f,
                "Distance has to be greater or equal to 1 (got {distance})"
            ),
        }
    }
}

impl std::error::Error for TraceLogError {}

///
/// Numeric values that can be used as trace frequencies
///
/// Integer values are accepted if non-negative.
/// Floating point values are accepted if they are finite, non-negative and integral (e.g., `3.0`).
///
pub trait Frequency: Copy + Display {
    /// Convert into a frequency count, or `None` if the value is not a non-negative integer
    fn to_frequency(self) -> Option<u64>;
}

macro_rules! integer_frequency {
    ($($t:ty),*) => {
        $(
            impl Frequency for $t {
                fn to_frequency(self) -> Option<u64> {
                    u64::try_from(self).ok()
                }
            }
        )*
    };
}

integer_frequency!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Frequency for f64 {
    fn to_frequency(self) -> Option<u64> {
        if self.is_finite() && self >= 0.0 && self.fract() == 0.0 && self < u64::MAX as f64 {
            Some(self as u64)
        } else {
            None
        }
    }
}

impl Frequency for f32 {
    fn to_frequency(self) -> Option<u64> {
        f64::from(self).to_frequency()
    }
}

///
/// A trace log: mapping from [`Trace`]s to how often they were observed
///
/// All writes go through [`TraceLog::set`], which validates the frequency and keeps the
/// (sorted) set of activity labels up to date.
///
/// _Note_: Removing a trace via [`TraceLog::remove`] does __not__ retract its activities from [`TraceLog::labels`].
///
/// Two trace logs are equal if they map the same traces to the same frequencies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(Trace, u64)>", into = "Vec<(Trace, u64)>")]
pub struct TraceLog {
    traces: BTreeMap<Trace, u64>,
    labels: BTreeSet<Activity>,
}

impl TraceLog {
    /// Create new empty [`TraceLog`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frequency of a trace
    ///
    /// If the trace is already contained in the log, its frequency is overwritten (__not__ added up).
    /// Returns the previous frequency of the trace (if any).
    ///
    /// Fails with [`TraceLogError::IllegalFrequency`] if `frequency` is not a non-negative integer.
    pub fn set<F: Frequency>(
        &mut self,
        trace: Trace,
        frequency: F,
    ) -> Result<Option<u64>, TraceLogError> {
        let Some(count) = frequency.to_frequency() else {
            return Err(TraceLogError::IllegalFrequency {
                trace,
                frequency: frequency.to_string(),
            });
        };
        Ok(self.store(trace, count))
    }

    fn store(&mut self, trace: Trace, frequency: u64) -> Option<u64> {
        for activity in &trace {
            if !self.labels.contains(activity) {
                self.labels.insert(activity.clone());
            }
        }
        self.traces.insert(trace, frequency)
    }

    /// Get the frequency of a trace
    pub fn get(&self, trace: &[Activity]) -> Option<u64> {
        self.traces.get(trace).copied()
    }

    /// Checks if a trace is contained in the log
    pub fn contains(&self, trace: &[Activity]) -> bool {
        self.traces.contains_key(trace)
    }

    /// Remove a trace, returning its frequency
    ///
    /// The activities of the removed trace stay part of [`TraceLog::labels`].
    pub fn remove(&mut self, trace: &[Activity]) -> Option<u64> {
        self.traces.remove(trace)
    }

    /// Number of distinct traces
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Checks if the log contains no traces
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Iterate over all traces and their frequencies (in ascending trace order)
    pub fn iter(&self) -> btree_map::Iter<'_, Trace, u64> {
        self.traces.iter()
    }

    /// Iterate over all (distinct) traces
    pub fn traces(&self) -> btree_map::Keys<'_, Trace, u64> {
        self.traces.keys()
    }

    pub(crate) fn par_iter(&self) -> impl ParallelIterator<Item = (&Trace, &u64)> {
        self.traces.par_iter()
    }

    /// All activity labels ever added to the log, in ascending order
    pub fn labels(&self) -> &BTreeSet<Activity> {
        &self.labels
    }

    /// Total number of recorded cases (i.e., the sum over all trace frequencies)
    pub fn total_frequency(&self) -> u64 {
        self.traces.values().fold(0, |total, f| total.saturating_add(*f))
    }

    /// Construct a new [`TraceLog`] where every trace is wrapped by the `start` and `end` activity
    ///
    /// Frequencies are kept. The log itself is not modified.
    pub fn augment(&self, start: &str, end: &str) -> TraceLog {
        self.traces
            .iter()
            .map(|(trace, frequency)| {
                let mut augmented_trace: Trace = Vec::with_capacity(trace.len() + 2);
                augmented_trace.push(start.to_string());
                augmented_trace.extend(trace.iter().cloned());
                augmented_trace.push(end.to_string());
                (augmented_trace, *frequency)
            })
            .collect()
    }

    /// [`TraceLog::augment`] with the reserved [`START_ACTIVITY`] and [`END_ACTIVITY`] markers
    pub fn augmented(&self) -> TraceLog {
        self.augment(START_ACTIVITY, END_ACTIVITY)
    }

    /// Frequency-weighted counts of activity pairs `(trace[i], trace[i + distance])`
    ///
    /// See [`directly_follows`]
    pub fn directly_follows(
        &self,
        distance: usize,
    ) -> Result<BTreeMap<ActivityPair, u64>, TraceLogError> {
        directly_follows(self, distance)
    }

    /// See [`equivalence`]
    pub fn equivalence(&self) -> SymmetricRelation {
        equivalence(self)
    }

    /// See [`never_together`]
    pub fn never_together(&self) -> SymmetricRelation {
        never_together(self)
    }

    /// See [`always_after`]
    pub fn always_after(&self) -> BTreeSet<ActivityPair> {
        always_after(self)
    }

    /// See [`always_before`]
    pub fn always_before(&self) -> BTreeSet<ActivityPair> {
        always_before(self)
    }

    /// See [`sum_counter`]
    pub fn sum_counter(&self) -> BTreeMap<Activity, u64> {
        sum_counter(self)
    }

    /// See [`max_counter`]
    pub fn max_counter(&self) -> BTreeMap<Activity, u64> {
        max_counter(self)
    }

    /// See [`min_counter`]
    pub fn min_counter(&self) -> BTreeMap<Activity, u64> {
        min_counter(self)
    }
}

impl PartialEq for TraceLog {
    fn eq(&self, other: &Self) -> bool {
        self.traces == other.traces
    }
}

impl Eq for TraceLog {}

impl FromIterator<(Trace, u64)> for TraceLog {
    fn from_iter<T: IntoIterator<Item = (Trace, u64)>>(iter: T) -> Self {
        let mut log = TraceLog::new();
        for (trace, frequency) in iter {
            log.store(trace, frequency);
        }
        log
    }
}

impl From<Vec<(Trace, u64)>> for TraceLog {
    fn from(value: Vec<(Trace, u64)>) -> Self {
        value.into_iter().collect()
    }
}

impl From<TraceLog> for Vec<(Trace, u64)> {
    fn from(value: TraceLog) -> Self {
        value.traces.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a TraceLog {
    type Item = (&'a Trace, &'a u64);
    type IntoIter = btree_map::Iter<'a, Trace, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.iter()
    }
}
