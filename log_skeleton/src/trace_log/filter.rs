use std::collections::BTreeSet;

use super::trace_log_struct::{Activity, TraceLog};

impl TraceLog {
    /// Construct a new [`TraceLog`] containing only the traces which include every activity of `required`
    /// and none of the activities of `forbidden`
    ///
    /// Frequencies of retained traces are copied unchanged. Empty sets do not constrain the result.
    pub fn filter_traces(
        &self,
        required: &BTreeSet<Activity>,
        forbidden: &BTreeSet<Activity>,
    ) -> TraceLog {
        self.iter()
            .filter(|(trace, _)| {
                let acts: BTreeSet<&str> = trace.iter().map(|a| a.as_str()).collect();
                required.iter().all(|a| acts.contains(a.as_str()))
                    && !forbidden.iter().any(|a| acts.contains(a.as_str()))
            })
            .map(|(trace, frequency)| (trace.clone(), *frequency))
            .collect()
    }
}
