//! The chosen source is the only one exercised, exactly once per script.

use plutus_fixtures_core::{load_script, ScriptSet, CATALOG, ALWAYS_SUCCEEDS};
use plutus_fixtures_test_helpers::sources::{FailingSource, RecordingSource};

#[test]
fn test_single_load_fetches_exactly_once() {
    let source = RecordingSource::new().with_catalog();

    load_script(&source, &ALWAYS_SUCCEEDS).unwrap();
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(source.fetched(), vec!["AlwaysSucceeds"]);
}

#[test]
fn test_set_load_fetches_each_script_exactly_once() {
    let source = RecordingSource::new().with_catalog();

    ScriptSet::load(&source).expect("catalog replies configured");

    let expected: Vec<&str> = CATALOG.iter().map(|id| id.name).collect();
    assert_eq!(source.fetched(), expected, "one fetch per script, in order");
}

#[test]
fn test_unchosen_source_is_never_invoked() {
    let chosen = RecordingSource::new().with_catalog();
    let unchosen = FailingSource::new();

    ScriptSet::load(&chosen).unwrap();

    assert_eq!(chosen.fetch_count(), CATALOG.len());
    assert_eq!(
        unchosen.fetch_count(),
        0,
        "the alternate strategy must not run"
    );
}

#[test]
fn test_no_fallback_after_failure() {
    // A failing chosen source must not cause any other source to be tried;
    // the error is terminal.
    let chosen = FailingSource::new();
    let alternate = RecordingSource::new().with_catalog();

    let result = load_script(&chosen, &ALWAYS_SUCCEEDS);
    assert!(result.is_err());
    assert_eq!(chosen.fetch_count(), 1, "no retry against the same source");
    assert_eq!(alternate.fetch_count(), 0, "no fallback to the alternate");
}
