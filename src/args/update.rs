//! Command-line update functionality.

use flatsea::app::App;

/// What: Update all installed applications in an interactive session.
///
/// Inputs:
/// - `app`: Application core.
///
/// Output:
/// - Exits 0 once the session was started.
///
/// Details:
/// - Update does not change the set of installed apps, so no inventory
///   refresh follows; failures stay visible in the terminal session only.
pub fn handle_update(app: &App) -> ! {
    tracing::info!("System update requested from CLI");
    app.update();
    println!("Update session started; watch the terminal window for progress.");
    std::process::exit(0);
}
