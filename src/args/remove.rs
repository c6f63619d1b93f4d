//! Command-line uninstall functionality.

use flatsea::app::App;

use crate::args::utils;

/// What: Handle command-line uninstall mode with explicit confirmation.
///
/// Inputs:
/// - `app`: Application core.
/// - `packages`: Application ids (comma-separated or space-separated).
/// - `assume_yes`: Skip the prompt (`--yes`).
///
/// Output:
/// - Exits the process: 0 after starting the session or after a clean
///   cancel, 1 when no ids were given.
///
/// Details:
/// - Prompts with `[y/N]` (No is the default) unless `assume_yes` is set.
/// - Cancelling is a no-op by design: no subprocess runs and the inventory
///   stays untouched.
/// - A confirmed uninstall is followed unconditionally by a full refresh
///   inside [`App::uninstall`].
pub fn handle_remove(app: &mut App, packages: &[String], assume_yes: bool) -> ! {
    let app_ids = utils::parse_app_ids(packages);
    if app_ids.is_empty() {
        eprintln!("No applications specified for removal");
        tracing::error!("No applications specified for removal");
        std::process::exit(1);
    }

    tracing::info!(apps = ?app_ids, "Remove mode requested from CLI");

    eprintln!("\nThe following applications will be uninstalled:");
    for id in &app_ids {
        eprintln!("  {id}");
    }
    eprintln!();

    let confirmed = assume_yes || utils::prompt_user_no_default("Proceed with uninstall?");
    let started = app.uninstall(&app_ids, confirmed);
    if started {
        println!("Uninstall session started; watch the terminal window for progress.");
    } else {
        tracing::info!("User cancelled removal");
        println!("Cancelled; nothing was uninstalled.");
    }
    std::process::exit(0);
}
