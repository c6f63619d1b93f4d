//! Background remote search workflow.
//!
//! At most one search runs at a time. The subprocess call happens on a
//! blocking worker thread and the parsed outcome is delivered exactly once
//! through a oneshot channel; the slot then returns to idle. The worker never
//! touches the inventory, so a search can overlap foreground activity without
//! any shared mutable state beyond the one-shot payload. Cancellation is not
//! supported; searches are fast and user-initiated, so they run to
//! completion.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::oneshot;

use crate::parse;
use crate::state::SearchOutcome;
use crate::util::flatpak::run_flatpak;

/// Crate-standard boxed error result.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Single-slot coordinator enforcing at most one in-flight search.
///
/// The tokio runtime does not serialize submissions for us, so the
/// in-flight invariant is held explicitly with an atomic flag.
#[derive(Clone, Debug, Default)]
pub struct SearchSlot {
    /// Set while a search task is running; cleared before delivery.
    in_flight: Arc<AtomicBool>,
}

impl SearchSlot {
    /// Create an idle search slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` while a search is in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// What: Claim the slot for a new search.
    ///
    /// Output:
    /// - `true` when the slot was idle and is now claimed; `false` when a
    ///   search is already in flight.
    fn begin(&self) -> bool {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Release the slot back to idle.
    fn finish(&self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }

    /// What: Start a background remote search.
    ///
    /// Inputs:
    /// - `flatpak_bin`: Binary name or path to invoke.
    /// - `query`: Raw query text.
    ///
    /// Output:
    /// - A receiver that yields the [`SearchOutcome`] exactly once. An empty
    ///   hit list (including the no-matches sentinel case) is a normal
    ///   outcome, not an error.
    ///
    /// # Errors
    /// - Returns `Err` when a search is already in flight. Submitting while
    ///   searching is a caller error; callers are expected to disable their
    ///   trigger while [`Self::is_searching`] holds.
    pub fn spawn(&self, flatpak_bin: &str, query: &str) -> Result<oneshot::Receiver<SearchOutcome>> {
        if !self.begin() {
            return Err("a search is already in flight".into());
        }
        let (tx, rx) = oneshot::channel();
        let slot = self.clone();
        let bin = flatpak_bin.to_string();
        let query = query.to_string();
        tokio::spawn(async move {
            let outcome = run_search(&bin, query).await;
            slot.finish();
            // Receiver may have been dropped; a discarded outcome is fine.
            let _ = tx.send(outcome);
        });
        Ok(rx)
    }
}

/// What: Execute the search subprocess off the async runtime and parse it.
///
/// Inputs:
/// - `bin`: Flatpak binary name or path.
/// - `query`: Raw query text.
///
/// Output:
/// - Outcome with parsed hits on success, or with the invocation failure
///   recorded in `errors` and an empty hit list.
async fn run_search(bin: &str, query: String) -> SearchOutcome {
    let mut outcome = SearchOutcome {
        query: query.clone(),
        ..SearchOutcome::default()
    };
    let bin_owned = bin.to_string();
    let ret = tokio::task::spawn_blocking(move || {
        run_flatpak(
            &bin_owned,
            &["search", "--columns=application,name", &query],
        )
    })
    .await;
    match ret {
        Ok(Ok(raw)) => outcome.hits = parse::parse_columnar(&raw),
        Ok(Err(e)) => outcome.errors.push(format!("flatpak search unavailable: {e}")),
        Err(e) => outcome.errors.push(format!("flatpak search failed: {e}")),
    }
    outcome
}
