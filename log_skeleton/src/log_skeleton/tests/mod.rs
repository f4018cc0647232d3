use std::collections::{BTreeMap, BTreeSet};

use crate::{
    trace_log::{
        import_txt::{import_txt_file, TxtImportOptions},
        Activity, ActivityPair, TraceLog,
    },
    utils::test_utils::get_test_data_path,
};

use super::SymmetricRelation;


fn import_fixture(name: &str) -> TraceLog {
    let path = get_test_data_path().join("txt").join(name);
    import_txt_file(path, &TxtImportOptions::default()).unwrap()
}

fn pairs(pairs: &[(&str, &str)]) -> BTreeSet<ActivityPair> {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

fn symmetric(pairs: &[(&str, &str)]) -> SymmetricRelation {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

fn counter(entries: &[(&str, u64)]) -> BTreeMap<Activity, u64> {
    entries.iter().map(|(a, c)| (a.to_string(), *c)).collect()
}

fn pair_counter(entries: &[(&str, &str, u64)]) -> BTreeMap<ActivityPair, u64> {
    entries
        .iter()
        .map(|(a, b, c)| ((a.to_string(), b.to_string()), *c))
        .collect()
}
