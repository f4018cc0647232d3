//! Relations derived from a single trace
//!
//! All functions borrow the activity labels from the passed trace.
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::trace_log::{Activity, TraceLogError};

/// Count pairs `(trace[i], trace[i + distance])`
///
/// With `distance = 1` these are the directly-follows pairs of the trace.
/// Fails with [`TraceLogError::InvalidDistance`] if `distance` is zero.
pub fn follows(
    trace: &[Activity],
    distance: usize,
) -> Result<HashMap<(&str, &str), u64>, TraceLogError> {
    if distance < 1 {
        return Err(TraceLogError::InvalidDistance(distance));
    }
    let mut pairs: HashMap<(&str, &str), u64> = HashMap::new();
    for (a, b) in trace.iter().zip(trace.iter().skip(distance)) {
        *pairs.entry((a.as_str(), b.as_str())).or_default() += 1;
    }
    Ok(pairs)
}

/// Collect, for every activity, all activities occurring at a later position than
/// one of its occurrences
///
/// `order` yields the trace positions such that later positions come first.
fn later_activities<'a, I>(order: I) -> HashMap<&'a str, BTreeSet<&'a str>>
where
    I: Iterator<Item = &'a Activity>,
{
    let mut result: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    for act in order {
        if !seen.is_empty() {
            result
                .entry(act.as_str())
                .or_default()
                .extend(seen.iter().copied());
        }
        seen.insert(act.as_str());
    }
    result
}

/// Successor sets of a trace: maps `a` to every `b` which occurs after (some occurrence of) `a`
///
/// Activities without any successor (e.g., one only occurring as last activity) have no entry.
pub fn successors(trace: &[Activity]) -> HashMap<&str, BTreeSet<&str>> {
    later_activities(trace.iter().rev())
}

/// Predecessor sets of a trace: maps `a` to every `b` which occurs before (some occurrence of) `a`
///
/// Mirror of [`successors`] (i.e., the successors of the reversed trace).
pub fn predecessors(trace: &[Activity]) -> HashMap<&str, BTreeSet<&str>> {
    later_activities(trace.iter())
}

/// Number of occurrences of each activity in the trace
pub fn activity_frequency(trace: &[Activity]) -> HashMap<&str, u64> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for act in trace {
        *counts.entry(act.as_str()).or_default() += 1;
    }
    counts
}

/// Inverse of [`activity_frequency`]: maps a number of occurrences to the set of activities
/// occurring exactly that often in the trace
pub fn frequency_to_activities(trace: &[Activity]) -> BTreeMap<u64, BTreeSet<&str>> {
    let mut groups: BTreeMap<u64, BTreeSet<&str>> = BTreeMap::new();
    for (act, count) in activity_frequency(trace) {
        groups.entry(count).or_default().insert(act);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(acts: &str) -> Vec<Activity> {
        acts.split_whitespace().map(|a| a.to_string()).collect()
    }

    fn set<'a>(acts: &[&'a str]) -> BTreeSet<&'a str> {
        acts.iter().copied().collect()
    }

    #[test]
    fn follows_distance_1() {
        let t = trace("a1 a2 a4 a5 a6 a2");
        let f = follows(&t, 1).unwrap();
        let expected: HashMap<(&str, &str), u64> = [
            (("a1", "a2"), 1),
            (("a2", "a4"), 1),
            (("a4", "a5"), 1),
            (("a5", "a6"), 1),
            (("a6", "a2"), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(f, expected);
    }

    #[test]
    fn follows_distance_2() {
        let t = trace("a1 a2 a4 a5 a6 a2");
        let f = follows(&t, 2).unwrap();
        let expected: HashMap<(&str, &str), u64> = [
            (("a1", "a4"), 1),
            (("a2", "a5"), 1),
            (("a4", "a6"), 1),
            (("a5", "a2"), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(f, expected);
    }

    #[test]
    fn follows_loop_of_length_1() {
        let t = trace("a1 a2 a4 a5 a6 a2 a2 a2");
        let f = follows(&t, 1).unwrap();
        assert_eq!(f.get(&("a2", "a2")), Some(&2));
        assert_eq!(f.get(&("a6", "a2")), Some(&1));
        assert_eq!(f.len(), 6);
    }

    #[test]
    fn follows_distance_beyond_trace_length() {
        let t = trace("a b");
        assert!(follows(&t, 2).unwrap().is_empty());
        assert!(follows(&[], 1).unwrap().is_empty());
    }

    #[test]
    fn follows_rejects_zero_distance() {
        let t = trace("a b");
        let err = follows(&t, 0).unwrap_err();
        assert_eq!(err, TraceLogError::InvalidDistance(0));
        assert!(!err.is_illegal_log_action());
    }

    #[test]
    fn successors_of_trace() {
        let t = trace("a1 a2 a4 a5 a6 a2");
        let s = successors(&t);
        let expected: HashMap<&str, BTreeSet<&str>> = [
            ("a1", set(&["a2", "a4", "a5", "a6"])),
            ("a2", set(&["a2", "a4", "a5", "a6"])),
            ("a4", set(&["a2", "a5", "a6"])),
            ("a5", set(&["a2", "a6"])),
            ("a6", set(&["a2"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(s, expected);
    }

    #[test]
    fn predecessors_of_trace() {
        let t = trace("a1 a2 a4 a5 a6 a2");
        let p = predecessors(&t);
        let expected: HashMap<&str, BTreeSet<&str>> = [
            ("a2", set(&["a1", "a2", "a4", "a5", "a6"])),
            ("a6", set(&["a1", "a2", "a4", "a5"])),
            ("a5", set(&["a1", "a2", "a4"])),
            ("a4", set(&["a1", "a2"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(p, expected);
    }

    #[test]
    fn successors_of_trivial_traces() {
        assert!(successors(&[]).is_empty());
        assert!(successors(&trace("a")).is_empty());
        assert!(predecessors(&trace("a")).is_empty());
    }

    const LONG_TRACE: &str = "a1 a2 a4 a5 a6 a3 a4 a5 a6 a4 a3 a5 a6 a2 a4 a5 a7";

    #[test]
    fn activity_frequency_of_trace() {
        let t = trace(LONG_TRACE);
        let expected: HashMap<&str, u64> = [
            ("a1", 1),
            ("a2", 2),
            ("a3", 2),
            ("a4", 4),
            ("a5", 4),
            ("a6", 3),
            ("a7", 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(activity_frequency(&t), expected);
    }

    #[test]
    fn frequency_to_activities_of_trace() {
        let t = trace(LONG_TRACE);
        let expected: BTreeMap<u64, BTreeSet<&str>> = [
            (1, set(&["a1", "a7"])),
            (2, set(&["a2", "a3"])),
            (3, set(&["a6"])),
            (4, set(&["a4", "a5"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(frequency_to_activities(&t), expected);
    }
}
