use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use rayon::prelude::*;

use super::log_skeleton_struct::SymmetricRelation;
use crate::{
    relations::primitives::{activity_frequency, frequency_to_activities},
    trace_log::{Activity, TraceLog},
    utils::merge_sets,
};

/// Mine the equivalence relation of a log
///
/// Two activities are equivalent if they occur equally often in every trace in which at least one of them occurs.
/// Traces containing neither of the two activities do not affect the pair.
///
/// Candidate pairs range over [`TraceLog::labels`], which keeps the activities of removed traces
/// (see [`TraceLog::remove`]). Two such activities are vacuously equivalent.
pub fn equivalence(log: &TraceLog) -> SymmetricRelation {
    let labels = log.labels();
    let violated: HashSet<(&str, &str)> = log
        .par_iter()
        .map(|(trace, _)| unequal_frequency_pairs(trace, labels))
        .reduce(HashSet::new, merge_sets);
    labels
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| !violated.contains(&(a.as_str(), b.as_str())))
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

/// Ascending pairs `(a, b)` where `a` or `b` occurs in the trace, but the two do not share the same frequency
fn unequal_frequency_pairs<'a>(
    trace: &'a [Activity],
    labels: &'a BTreeSet<Activity>,
) -> HashSet<(&'a str, &'a str)> {
    let groups = frequency_to_activities(trace);
    let mut pairs = HashSet::new();
    for (act, count) in activity_frequency(trace) {
        let Some(same_frequency) = groups.get(&count) else {
            continue;
        };
        for label in labels.iter().map(|l| l.as_str()) {
            if label != act && !same_frequency.contains(label) {
                pairs.insert(if act < label { (act, label) } else { (label, act) });
            }
        }
    }
    pairs
}
