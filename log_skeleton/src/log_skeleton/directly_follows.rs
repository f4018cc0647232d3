use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use crate::{
    relations::primitives::follows,
    trace_log::{ActivityPair, TraceLog, TraceLogError},
};

/// Frequency-weighted counts of activity pairs `(trace[i], trace[i + distance])`, summed over all traces
///
/// `distance = 1` yields the classical directly-follows relation.
/// Counts saturate at `u64::MAX`.
/// Fails with [`TraceLogError::InvalidDistance`] if `distance` is zero.
pub fn directly_follows(
    log: &TraceLog,
    distance: usize,
) -> Result<BTreeMap<ActivityPair, u64>, TraceLogError> {
    if distance < 1 {
        return Err(TraceLogError::InvalidDistance(distance));
    }
    let counts = log
        .par_iter()
        .map(|(trace, w)| (follows(trace, distance).unwrap_or_default(), *w))
        .fold(
            HashMap::<(&str, &str), u64>::new,
            |mut map, (trace_pairs, w)| {
                for (pair, count) in trace_pairs {
                    let entry = map.entry(pair).or_insert(0);
                    *entry = entry.saturating_add(count.saturating_mul(w));
                }
                map
            },
        )
        .reduce(HashMap::new, |mut m1, mut m2| {
            if m1.len() < m2.len() {
                std::mem::swap(&mut m1, &mut m2);
            }
            for (k, v) in m2 {
                let entry = m1.entry(k).or_default();
                *entry = entry.saturating_add(v);
            }
            m1
        });
    Ok(counts
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|((a, b), count)| ((a.to_string(), b.to_string()), count))
        .collect())
}
