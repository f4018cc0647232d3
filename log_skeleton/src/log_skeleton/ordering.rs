use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    relations::primitives::{predecessors, successors},
    trace_log::{Activity, ActivityPair, TraceLog},
    utils::merge_sets,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    After,
    Before,
}

/// Mine the always-after relation of a log
///
/// `(a, b)` is contained if in every trace containing `a`, `b` occurs after `a`.
/// Pairs ending in the first activity of a trace, or starting with its last activity, are excluded.
///
/// Should be mined on an augmented log (see [`TraceLog::augmented`]), so that the boundary exclusions only
/// concern the start/end markers.
///
/// Candidate pairs range over [`TraceLog::labels`], which keeps the activities of removed traces
/// (see [`TraceLog::remove`]). Such an activity occurs in no trace and thus takes part in vacuous pairs.
pub fn always_after(log: &TraceLog) -> BTreeSet<ActivityPair> {
    ordering_relation(log, Direction::After)
}

/// Mine the always-before relation of a log
///
/// `(a, b)` is contained if in every trace containing `a`, `b` occurs before `a`.
/// Mirror of [`always_after`]: pairs ending in the last activity of a trace, or starting with its first
/// activity, are excluded.
///
/// Candidate pairs range over [`TraceLog::labels`], which keeps the activities of removed traces
/// (see [`TraceLog::remove`]). Such an activity occurs in no trace and thus takes part in vacuous pairs.
pub fn always_before(log: &TraceLog) -> BTreeSet<ActivityPair> {
    ordering_relation(log, Direction::Before)
}

fn ordering_relation(log: &TraceLog, direction: Direction) -> BTreeSet<ActivityPair> {
    let labels = log.labels();
    let violated: HashSet<(&str, &str)> = log
        .par_iter()
        .map(|(trace, _)| ordering_violations(trace, labels, direction))
        .reduce(HashSet::new, merge_sets);
    labels
        .iter()
        .cartesian_product(labels.iter())
        .filter(|(a, b)| a != b && !violated.contains(&(a.as_str(), b.as_str())))
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

/// All pairs `(a, b)` ruled out by a single trace
fn ordering_violations<'a>(
    trace: &'a [Activity],
    labels: &'a BTreeSet<Activity>,
    direction: Direction,
) -> HashSet<(&'a str, &'a str)> {
    let mut violations = HashSet::new();
    let (Some(first), Some(last)) = (trace.first(), trace.last()) else {
        return violations;
    };
    let (related, entry, exit) = match direction {
        Direction::After => (successors(trace), first, last),
        Direction::Before => (predecessors(trace), last, first),
    };
    for label in labels.iter().map(|l| l.as_str()) {
        violations.insert((label, entry.as_str()));
        violations.insert((exit.as_str(), label));
    }
    let acts: BTreeSet<&str> = trace.iter().map(|a| a.as_str()).collect();
    for a in acts {
        let related_to_a = related.get(a);
        for b in labels.iter().map(|l| l.as_str()) {
            if !related_to_a.is_some_and(|r| r.contains(b)) {
                violations.insert((a, b));
            }
        }
    }
    violations
}
