use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{
    directly_follows::directly_follows,
    equivalence::equivalence,
    log_skeleton_struct::{LogSkeleton, Relationships, Statistics},
    never_together::never_together,
    ordering::{always_after, always_before},
    statistics::activity_counters,
};
use crate::trace_log::{
    constants::{END_ACTIVITY, START_ACTIVITY},
    Activity, TraceLog,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Parameters of a mining run: which traces of the log are taken into account
pub struct MinerConfig {
    /// Only traces containing all of these activities are mined (empty: no constraint)
    pub required_activities: BTreeSet<Activity>,
    /// Only traces containing none of these activities are mined (empty: no constraint)
    pub forbidden_activities: BTreeSet<Activity>,
}

impl MinerConfig {
    /// Serialize miner parameters to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
    /// Deserialize miner parameters from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

///
/// A mining strategy operating on a [`TraceLog`]
///
pub trait Miner {
    /// Result of a mining run
    type Output;

    /// Mine the traces of `log` selected by `config`
    ///
    /// `log` itself is never modified.
    fn mine(&self, log: &TraceLog, config: &MinerConfig) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
///
/// Log skeleton miner
///
/// Filters the log according to the [`MinerConfig`], wraps every remaining trace with the
/// configured start/end activities and mines all relations and statistics of a [`LogSkeleton`].
pub struct LogSkeletonMiner {
    /// Artificial activity prepended to every trace
    pub start_activity: Activity,
    /// Artificial activity appended to every trace
    pub end_activity: Activity,
}

impl Default for LogSkeletonMiner {
    fn default() -> Self {
        Self {
            start_activity: START_ACTIVITY.to_string(),
            end_activity: END_ACTIVITY.to_string(),
        }
    }
}

impl Miner for LogSkeletonMiner {
    type Output = LogSkeleton;

    fn mine(&self, log: &TraceLog, config: &MinerConfig) -> LogSkeleton {
        for marker in [&self.start_activity, &self.end_activity] {
            if log.labels().contains(marker) {
                log::warn!("Activity {marker:?} is reserved as boundary marker but already occurs in the log");
            }
        }
        let filtered = log.filter_traces(&config.required_activities, &config.forbidden_activities);
        let augmented = filtered.augment(&self.start_activity, &self.end_activity);
        log::debug!(
            "Mining log skeleton on {} of {} traces ({} activities)",
            augmented.len(),
            log.len(),
            augmented.labels().len()
        );

        let (equivalence, (never_together, (always_after, always_before))) = rayon::join(
            || equivalence(&augmented),
            || {
                rayon::join(
                    || never_together(&augmented),
                    || rayon::join(|| always_after(&augmented), || always_before(&augmented)),
                )
            },
        );
        // Distance 1 is always valid
        let df = directly_follows(&augmented, 1).unwrap_or_default();
        let counters = activity_counters(&augmented);

        let skeleton = LogSkeleton {
            relationships: Relationships {
                equivalence,
                always_after,
                always_before,
                never_together,
                dependency: df.keys().cloned().collect(),
            },
            statistics: Statistics {
                directly_follows: df,
                sum: counters.sum,
                max: counters.max,
                min: counters.min,
            },
        };
        log::debug!(
            "Mined log skeleton with {} equivalence, {} always-after, {} always-before, {} never-together and {} dependency pairs",
            skeleton.relationships.equivalence.len(),
            skeleton.relationships.always_after.len(),
            skeleton.relationships.always_before.len(),
            skeleton.relationships.never_together.len(),
            skeleton.relationships.dependency.len()
        );
        skeleton
    }
}

///
/// Mine a [`LogSkeleton`] from the traces of `log` which contain all `required` and none of the `forbidden` activities
///
/// Uses the reserved [`START_ACTIVITY`] and [`END_ACTIVITY`] markers (see [`LogSkeletonMiner`]).
///
pub fn mine_log_skeleton(
    log: &TraceLog,
    required: &BTreeSet<Activity>,
    forbidden: &BTreeSet<Activity>,
) -> LogSkeleton {
    let config = MinerConfig {
        required_activities: required.clone(),
        forbidden_activities: forbidden.clone(),
    };
    LogSkeletonMiner::default().mine(log, &config)
}
