use std::collections::{BTreeSet, HashSet};

use itertools::Itertools;
use rayon::prelude::*;

use super::log_skeleton_struct::SymmetricRelation;
use crate::{trace_log::TraceLog, utils::merge_sets};

/// Mine the never-together relation of a log
///
/// Two distinct activities are never-together if no trace contains both of them.
pub fn never_together(log: &TraceLog) -> SymmetricRelation {
    let co_occurring: HashSet<(&str, &str)> = log
        .par_iter()
        .map(|(trace, _)| {
            let acts: BTreeSet<&str> = trace.iter().map(|a| a.as_str()).collect();
            acts.iter().copied().tuple_combinations().collect::<HashSet<_>>()
        })
        .reduce(HashSet::new, merge_sets);
    log.labels()
        .iter()
        .tuple_combinations()
        .filter(|(a, b)| !co_occurring.contains(&(a.as_str(), b.as_str())))
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace_log::{ActivityPair, Trace};

    fn trace(acts: &str) -> Trace {
        acts.split_whitespace().map(|a| a.to_string()).collect()
    }

    fn pair(a: &str, b: &str) -> ActivityPair {
        (a.to_string(), b.to_string())
    }

    fn example_log() -> TraceLog {
        vec![
            (trace("a b c"), 2),
            (trace("b c a"), 1),
            (trace("a c"), 1),
            (trace("f a"), 1),
            (trace("a"), 2),
        ]
        .into()
    }

    #[test]
    fn never_together_pairs() {
        let nt = never_together(&example_log());
        let expected: SymmetricRelation = vec![pair("b", "f"), pair("c", "f")].into_iter().collect();
        assert_eq!(nt, expected);
        assert!(nt.contains("f", "b"));
    }

    #[test]
    fn repeated_activities_in_a_trace() {
        let log: TraceLog = vec![(trace("a b a b"), 1), (trace("c c"), 1)].into();
        let nt = never_together(&log);
        let expected: SymmetricRelation = vec![pair("a", "c"), pair("b", "c")].into_iter().collect();
        assert_eq!(nt, expected);
    }

    #[test]
    fn never_together_shrinks_when_traces_are_added() {
        let mut log = example_log();
        let before = log.never_together();
        log.set(trace("f c"), 1).unwrap();
        let after = log.never_together();
        assert!(after.iter().all(|(a, b)| before.contains(a, b)));
        assert!(!after.contains("c", "f"));
        assert!(after.contains("b", "f"));
    }

    #[test]
    fn never_together_with_new_activity() {
        let mut log = example_log();
        log.set(trace("z"), 1).unwrap();
        let nt = log.never_together();
        for other in ["a", "b", "c", "f"] {
            assert!(nt.contains("z", other));
        }
        assert_eq!(nt.len(), 6);
    }
}
