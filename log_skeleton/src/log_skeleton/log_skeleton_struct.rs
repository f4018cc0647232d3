use std::collections::{btree_set, BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::trace_log::{Activity, ActivityPair};

///
/// Symmetric relation between activities (e.g., equivalence or never-together)
///
/// Every pair is stored once in canonical (ascending) order, so `(a, b)` is contained if and only if
/// `(b, a)` is contained. Pairs of an activity with itself are never part of the relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeSet<ActivityPair>", into = "BTreeSet<ActivityPair>")]
pub struct SymmetricRelation {
    pairs: BTreeSet<ActivityPair>,
}

impl SymmetricRelation {
    /// Create new empty [`SymmetricRelation`]
    pub fn new() -> Self {
        Self::default()
    }

    fn canonical(a: Activity, b: Activity) -> ActivityPair {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Add the (unordered) pair of `a` and `b`
    ///
    /// Returns `false` if the pair was already contained or `a == b`.
    pub fn insert(&mut self, a: Activity, b: Activity) -> bool {
        if a == b {
            return false;
        }
        self.pairs.insert(Self::canonical(a, b))
    }

    /// Checks if `a` and `b` are related (in either order)
    pub fn contains(&self, a: &str, b: &str) -> bool {
        a != b
            && self
                .pairs
                .contains(&Self::canonical(a.to_string(), b.to_string()))
    }

    /// Remove the (unordered) pair of `a` and `b`
    pub fn remove(&mut self, a: &str, b: &str) -> bool {
        let pair = Self::canonical(a.to_string(), b.to_string());
        self.pairs.remove(&pair)
    }

    /// Number of (unordered) pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Checks if the relation contains no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over all pairs in canonical order (i.e., with `a < b` for every yielded `(a, b)`)
    pub fn iter(&self) -> btree_set::Iter<'_, ActivityPair> {
        self.pairs.iter()
    }
}

impl FromIterator<ActivityPair> for SymmetricRelation {
    fn from_iter<T: IntoIterator<Item = ActivityPair>>(iter: T) -> Self {
        let mut relation = SymmetricRelation::new();
        for (a, b) in iter {
            relation.insert(a, b);
        }
        relation
    }
}

impl From<BTreeSet<ActivityPair>> for SymmetricRelation {
    fn from(value: BTreeSet<ActivityPair>) -> Self {
        value.into_iter().collect()
    }
}

impl From<SymmetricRelation> for BTreeSet<ActivityPair> {
    fn from(value: SymmetricRelation) -> Self {
        value.pairs
    }
}

impl<'a> IntoIterator for &'a SymmetricRelation {
    type Item = &'a ActivityPair;
    type IntoIter = btree_set::Iter<'a, ActivityPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Behavioral relations of a [`LogSkeleton`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    /// Activities which occur equally often in every trace in which one of them occurs
    pub equivalence: SymmetricRelation,
    /// `(a, b)`: every trace containing `a` contains `b` after it
    pub always_after: BTreeSet<ActivityPair>,
    /// `(a, b)`: every trace containing `a` contains `b` before it
    pub always_before: BTreeSet<ActivityPair>,
    /// Activities which never occur in the same trace
    pub never_together: SymmetricRelation,
    /// Directly-follows pairs observed with non-zero frequency
    pub dependency: BTreeSet<ActivityPair>,
}

/// Frequency statistics of a [`LogSkeleton`]
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Frequency-weighted directly-follows counts
    #[serde_as(as = "Vec<(_, _)>")]
    pub directly_follows: BTreeMap<ActivityPair, u64>,
    /// Total number of occurrences per activity (weighted by trace frequency)
    pub sum: BTreeMap<Activity, u64>,
    /// Maximal number of occurrences of an activity within a single trace
    pub max: BTreeMap<Activity, u64>,
    /// Minimal number of occurrences of an activity within a single trace (`0` if it is absent from some trace)
    pub min: BTreeMap<Activity, u64>,
}

/// A log skeleton: behavioral relations and statistics mined from a trace log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSkeleton {
    /// Mined relations
    pub relationships: Relationships,
    /// Mined statistics
    pub statistics: Statistics,
}

impl LogSkeleton {
    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
