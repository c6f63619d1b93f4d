//! Caller-facing application core.
//!
//! [`App`] owns the inventory snapshot and the single background search slot
//! and exposes the operations a presentation layer consumes: list, search,
//! install, uninstall, run, update. All inventory mutation happens on the
//! caller's context; the search worker is the only concurrent piece and it
//! never touches the inventory.

use tokio::sync::oneshot;

use crate::actions;
use crate::index::Inventory;
use crate::search::SearchSlot;
use crate::state::{AppEntry, SearchOutcome};
use crate::util::config::Settings;

/// Crate-standard boxed error result.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Application core tying the inventory, search slot and actions together.
#[derive(Debug)]
pub struct App {
    /// Runtime settings (binary, remote, terminal preference).
    settings: Settings,
    /// Owned snapshot of installed applications.
    inventory: Inventory,
    /// Single-slot background search coordinator.
    search: SearchSlot,
    /// When set, mutating commands echo themselves instead of executing.
    dry_run: bool,
}

impl App {
    /// What: Build the core and perform startup registration.
    ///
    /// Inputs:
    /// - `settings`: Loaded runtime settings.
    /// - `dry_run`: Forwarded to every mutating action.
    ///
    /// Output:
    /// - A core with an empty inventory; call [`App::refresh`] to populate.
    ///
    /// Details:
    /// - Registers the configured remote once per process lifetime
    ///   (idempotent). A failed registration is logged and tolerated: search
    ///   and listing still work against already-configured remotes.
    #[must_use]
    pub fn new(settings: Settings, dry_run: bool) -> Self {
        if dry_run {
            tracing::info!(remote = %settings.remote_name, "dry run; skipping remote registration");
        } else if let Err(e) = actions::ensure_remote(&settings) {
            tracing::warn!(error = %e, "remote registration failed; continuing");
        }
        Self {
            settings,
            inventory: Inventory::new(),
            search: SearchSlot::new(),
            dry_run,
        }
    }

    /// Runtime settings in use.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rebuild the inventory snapshot from the live flatpak state.
    pub fn refresh(&mut self) {
        self.inventory.refresh(&self.settings);
    }

    /// Installed applications sorted by display name.
    #[must_use]
    pub fn list_installed(&self) -> Vec<&AppEntry> {
        self.inventory.list()
    }

    /// Look up an installed application by display name.
    #[must_use]
    pub fn installed(&self, name: &str) -> Option<&AppEntry> {
        self.inventory.get(name)
    }

    /// `true` while a background search is in flight.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.search.is_searching()
    }

    /// What: Start a background remote search for `query`.
    ///
    /// Output:
    /// - A receiver delivering the [`SearchOutcome`] exactly once.
    ///
    /// # Errors
    /// - Returns `Err` when a search is already in flight.
    pub fn search(&self, query: &str) -> Result<oneshot::Receiver<SearchOutcome>> {
        self.search.spawn(&self.settings.flatpak_bin, query)
    }

    /// Install `app_ids` interactively; trigger [`App::refresh`] afterwards.
    pub fn install(&self, app_ids: &[String]) {
        actions::install(&self.settings, app_ids, self.dry_run);
    }

    /// What: Uninstall `app_ids` if `confirmed`, then resync the inventory.
    ///
    /// Output:
    /// - `true` when the uninstall session was started. An unconfirmed call
    ///   is a no-op and leaves the inventory byte-identical.
    pub fn uninstall(&mut self, app_ids: &[String], confirmed: bool) -> bool {
        let started = actions::uninstall(&self.settings, app_ids, confirmed, self.dry_run);
        if started {
            self.refresh();
        }
        started
    }

    /// Launch an installed application detached.
    ///
    /// # Errors
    /// - Returns `Err` when the spawn fails.
    pub fn run_app(&self, app_id: &str) -> Result<()> {
        actions::run_app(&self.settings, app_id)
    }

    /// Update all installed applications interactively.
    pub fn update(&self) {
        actions::update(&self.settings, self.dry_run);
    }
}
