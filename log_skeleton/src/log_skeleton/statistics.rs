use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    relations::primitives::activity_frequency,
    trace_log::{Activity, TraceLog},
};

/// Per-activity occurrence counters of a log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCounters {
    /// Occurrences summed over all traces, weighted by trace frequency
    pub sum: BTreeMap<Activity, u64>,
    /// Maximal number of occurrences in a single trace
    pub max: BTreeMap<Activity, u64>,
    /// Minimal number of occurrences in a single trace
    pub min: BTreeMap<Activity, u64>,
}

impl ActivityCounters {
    fn merge(mut self, other: Self) -> Self {
        for (act, count) in other.sum {
            let entry = self.sum.entry(act).or_default();
            *entry = entry.saturating_add(count);
        }
        for (act, count) in other.max {
            let entry = self.max.entry(act).or_default();
            *entry = (*entry).max(count);
        }
        for (act, count) in other.min {
            self.min
                .entry(act)
                .and_modify(|c| *c = (*c).min(count))
                .or_insert(count);
        }
        self
    }
}

/// Compute sum, max and min counters in a single pass over the log
///
/// Every activity of the log is counted in every trace, contributing `0` where it is absent.
/// Thus, an activity missing from any trace has a min counter of `0`.
pub fn activity_counters(log: &TraceLog) -> ActivityCounters {
    let labels = log.labels();
    log.par_iter()
        .map(|(trace, w)| {
            let counts = activity_frequency(trace);
            let mut counters = ActivityCounters::default();
            for label in labels {
                let count = counts.get(label.as_str()).copied().unwrap_or(0);
                counters.sum.insert(label.clone(), count.saturating_mul(*w));
                counters.max.insert(label.clone(), count);
                counters.min.insert(label.clone(), count);
            }
            counters
        })
        .reduce_with(ActivityCounters::merge)
        .unwrap_or_default()
}

/// Total number of occurrences of each activity, weighted by trace frequency
///
/// Sums saturate at `u64::MAX`.
pub fn sum_counter(log: &TraceLog) -> BTreeMap<Activity, u64> {
    activity_counters(log).sum
}

/// Maximal number of occurrences of each activity in a single trace
pub fn max_counter(log: &TraceLog) -> BTreeMap<Activity, u64> {
    activity_counters(log).max
}

/// Minimal number of occurrences of each activity in a single trace
///
/// Activities absent from at least one trace have a minimum of `0`.
pub fn min_counter(log: &TraceLog) -> BTreeMap<Activity, u64> {
    activity_counters(log).min
}
