//! Command-line list installed applications functionality.

use flatsea::app::App;

/// What: Refresh the inventory and print the installed applications.
///
/// Inputs:
/// - `app`: Application core.
/// - `json`: Print the entries as a JSON array instead of columns.
///
/// Output:
/// - Exits the process after printing; 0 on success, 1 when JSON encoding
///   fails.
///
/// Details:
/// - Output is sorted by display name (case-sensitive ordinal order).
/// - A failed refresh prints an empty list, matching the degrade-to-empty
///   contract of the inventory.
pub fn handle_list(app: &mut App, json: bool) -> ! {
    tracing::info!(json, "List installed applications requested from CLI");
    app.refresh();
    let entries = app.list_installed();

    if json {
        match serde_json::to_string_pretty(&entries) {
            Ok(body) => println!("{body}"),
            Err(e) => {
                eprintln!("failed to encode inventory as JSON: {e}");
                tracing::error!(error = %e, "JSON encoding failed");
                std::process::exit(1);
            }
        }
        std::process::exit(0);
    }

    for entry in &entries {
        println!("{}\t{}\t{}", entry.name, entry.app_id, entry.installed_size);
    }
    tracing::info!(count = entries.len(), "Listed installed applications");
    std::process::exit(0);
}
