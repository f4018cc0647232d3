use std::{collections::HashSet, hash::Hash};

/// Helper utils regarding XML import
pub mod xml_utils;

/// Union of two sets, re-using the allocation of the larger one
///
/// Used as (associative, commutative) reduction operator when combining per-trace results.
pub fn merge_sets<T: Eq + Hash>(mut s1: HashSet<T>, mut s2: HashSet<T>) -> HashSet<T> {
    if s1.len() < s2.len() {
        std::mem::swap(&mut s1, &mut s2);
    }
    s1.extend(s2);
    s1
}
