//! Command-line search functionality.

use flatsea::app::App;

/// What: Handle command-line search mode via the background search workflow.
///
/// Inputs:
/// - `app`: Application core.
/// - `search_query`: The query text to search the remote catalog for.
///
/// Output:
/// - Exits the process: 0 with one `id<TAB>name` line per hit (or a
///   no-matches notice), 1 when the search could not be run.
///
/// Details:
/// - Awaits the one-shot outcome; an empty hit list is a normal result.
/// - Always exits the process; it never returns to the dispatcher.
pub async fn handle_search(app: &App, search_query: &str) {
    tracing::info!(query = %search_query, "Search mode requested from CLI");

    let rx = match app.search(search_query) {
        Ok(rx) => rx,
        Err(e) => {
            eprintln!("search failed to start: {e}");
            tracing::error!(error = %e, "Failed to start search");
            std::process::exit(1);
        }
    };
    let outcome = match rx.await {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("search worker dropped without a result: {e}");
            tracing::error!(error = %e, "Search outcome never delivered");
            std::process::exit(1);
        }
    };

    for err in &outcome.errors {
        eprintln!("{err}");
        tracing::warn!(error = %err, "search error");
    }
    if outcome.hits.is_empty() && outcome.errors.is_empty() {
        println!("No applications match '{}'", outcome.query);
    }
    for hit in &outcome.hits {
        println!("{}\t{}", hit.app_id, hit.name);
    }

    tracing::info!(hits = outcome.hits.len(), "Search finished");
    std::process::exit(i32::from(!outcome.errors.is_empty()));
}
