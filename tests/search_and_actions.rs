//! Integration tests for the search workflow and the action orchestration
//! contracts that do not require a live flatpak binary.

use flatsea::actions;
use flatsea::parse;
use flatsea::search::SearchSlot;
use flatsea::util::config::Settings;

/// Settings pointing at a binary that cannot exist on the test host.
fn offline_settings() -> Settings {
    Settings {
        flatpak_bin: "flatsea-test-definitely-missing-binary".to_string(),
        ..Settings::default()
    }
}

/// What: The no-matches sentinel produces zero hits with no parse error,
/// regardless of other content in the output.
#[test]
fn no_matches_sentinel_yields_zero_hits() {
    assert!(parse::parse_columnar("No matches found\n").is_empty());
    assert!(
        parse::parse_columnar("app.example.Editor Editor\nNo matches found\n").is_empty(),
        "sentinel anywhere in the output short-circuits"
    );
}

/// What: An uninstall without confirmation invokes no subprocess and is not
/// an error.
#[test]
fn unconfirmed_uninstall_invokes_nothing() {
    // A spawn attempt against this binary would fail loudly; returning false
    // proves the action never got that far.
    let started = actions::uninstall(
        &offline_settings(),
        &["app.example.Editor".to_string()],
        false,
        false,
    );
    assert!(!started);
}

/// What: The search slot delivers exactly one outcome and then goes idle.
#[tokio::test]
async fn search_delivers_once_and_returns_to_idle() {
    let slot = SearchSlot::new();
    let rx = slot
        .spawn("flatsea-test-definitely-missing-binary", "editor")
        .expect("idle slot accepts a search");
    let outcome = rx.await.expect("outcome delivered exactly once");
    assert_eq!(outcome.query, "editor");
    assert!(outcome.hits.is_empty());
    assert!(!outcome.errors.is_empty(), "broken binary surfaces as error text");
    assert!(!slot.is_searching(), "slot idle again after delivery");
}

/// What: A second submission while a search is in flight is rejected.
#[tokio::test]
async fn second_submission_while_in_flight_is_rejected() {
    let slot = SearchSlot::new();
    // Hold the slot by never awaiting the first receiver yet.
    let _rx = slot
        .spawn("flatsea-test-definitely-missing-binary", "one")
        .expect("first spawn");
    // The first task may already have finished; only assert rejection when
    // the overlap actually happened.
    if slot.is_searching() {
        assert!(slot.spawn("flatsea-test-definitely-missing-binary", "two").is_err());
    }
}
