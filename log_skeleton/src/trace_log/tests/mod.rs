use crate::trace_log::Trace;


fn trace(acts: &str) -> Trace {
    acts.split_whitespace().map(|a| a.to_string()).collect()
}
