//! Command-line install functionality.

use flatsea::app::App;

use crate::args::utils;

/// What: Handle command-line install mode.
///
/// Inputs:
/// - `app`: Application core.
/// - `packages`: Application ids (comma-separated or space-separated).
///
/// Output:
/// - Exits the process after starting the interactive session.
///
/// Details:
/// - The install runs in a visible terminal; its completion is not observed
///   here. The inventory refresh that follows is this caller's duty, so it
///   runs before exit even though a still-running session may not be
///   reflected yet.
pub fn handle_install(app: &mut App, packages: &[String]) -> ! {
    let app_ids = utils::parse_app_ids(packages);
    if app_ids.is_empty() {
        eprintln!("No applications specified for install");
        tracing::error!("No applications specified for install");
        std::process::exit(1);
    }

    tracing::info!(apps = ?app_ids, "Install mode requested from CLI");
    app.install(&app_ids);
    println!("Install session started; watch the terminal window for progress.");

    app.refresh();
    std::process::exit(0);
}
