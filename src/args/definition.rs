//! Command-line argument definition and processing.

use clap::Parser;

use flatsea::app::App;

/// flatsea - a fast, friendly manager for Flatpak applications
#[derive(Parser, Debug)]
#[command(name = "flatsea")]
#[command(version)]
#[command(about = "Manage Flatpak applications: synchronized inventory, remote search and install", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Perform a dry run without making actual changes
    #[arg(long)]
    pub dry_run: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Search the remote catalog for applications
    #[arg(short, long)]
    pub search: Option<String>,

    /// Install applications by id (e.g. flatsea -i org.example.App)
    #[arg(short, long, num_args = 1..)]
    pub install: Vec<String>,

    /// Uninstall applications by id (e.g. flatsea -r org.example.App)
    #[arg(short = 'r', long, num_args = 1..)]
    pub remove: Vec<String>,

    /// Launch an installed application by id
    #[arg(long = "run", value_name = "APP_ID")]
    pub run_app: Option<String>,

    /// Update all installed applications
    #[arg(short = 'u', long)]
    pub update: bool,

    /// List installed applications (the default when no mode is given)
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print the installed list as JSON (use with --list)
    #[arg(long)]
    pub json: bool,

    /// Assume yes for confirmation prompts (use with --remove)
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// What: Process all command-line arguments and dispatch the selected mode.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `app`: Application core built from the loaded settings.
///
/// Output:
/// - Never returns when a mode flag was given (each handler exits); returns
///   the core unchanged when no mode was selected so the caller can fall
///   back to the default listing.
///
/// Details:
/// - Exactly one mode runs per invocation, checked in a fixed order:
///   search, install, remove, run, update, list.
pub async fn process_args(args: &Args, mut app: App) -> App {
    // Handle command-line search mode
    if let Some(search_query) = &args.search {
        crate::args::search::handle_search(&app, search_query).await;
    }

    // Handle command-line install mode
    if !args.install.is_empty() {
        crate::args::install::handle_install(&mut app, &args.install);
    }

    // Handle uninstall mode (-r / --remove)
    if !args.remove.is_empty() {
        crate::args::remove::handle_remove(&mut app, &args.remove, args.yes);
    }

    // Handle app launch (--run)
    if let Some(app_id) = &args.run_app {
        crate::args::run::handle_run(&app, app_id);
    }

    // Handle update-all (-u / --update)
    if args.update {
        crate::args::update::handle_update(&app);
    }

    // Handle list installed applications flag
    if args.list {
        crate::args::list::handle_list(&mut app, args.json);
    }

    app
}

/// Fallback when no mode flag was given: print the installed list.
pub fn handle_default(app: &mut App) -> ! {
    crate::args::list::handle_list(app, false)
}
