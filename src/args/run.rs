//! Command-line app launch functionality.

use flatsea::app::App;

/// What: Launch an installed application detached and exit.
///
/// Inputs:
/// - `app`: Application core.
/// - `app_id`: Identifier of the application to launch.
///
/// Output:
/// - Exits 0 once the app has been spawned, 1 when the spawn failed. The
///   launched app keeps running on its own.
pub fn handle_run(app: &App, app_id: &str) -> ! {
    tracing::info!(app = %app_id, "Run mode requested from CLI");
    match app.run_app(app_id) {
        Ok(()) => {
            println!("Launched {app_id}");
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("failed to launch {app_id}: {e}");
            tracing::error!(error = %e, "Failed to launch app");
            std::process::exit(1);
        }
    }
}
