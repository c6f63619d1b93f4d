//! Inventory of installed applications.
//!
//! The [`Inventory`] owns the current snapshot of installed apps, keyed by
//! display name for presentation. It is rebuilt wholesale on every
//! [`Inventory::refresh`]: one `flatpak list` call for the identifiers, then
//! one `flatpak info` call per identifier. No incremental update path exists;
//! every mutating action is followed by a full resync.

use std::collections::BTreeMap;

use crate::parse;
use crate::state::AppEntry;
use crate::util::config::Settings;
use crate::util::flatpak::run_flatpak;

/// Crate-standard boxed error result.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Snapshot of installed applications keyed by display name.
///
/// Display name is the lookup key even though the app id is the true primary
/// key; if two installed packages ever report the same display name, the
/// later one wins. Known limitation, kept deliberate rather than silently
/// deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    /// Current snapshot, replaced wholesale on every refresh.
    apps: BTreeMap<String, AppEntry>,
}

impl Inventory {
    /// Create an empty inventory; call [`Inventory::refresh`] to populate it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Rebuild the snapshot from the live flatpak state.
    ///
    /// Inputs:
    /// - `settings`: Binary name and remote configuration.
    ///
    /// Output:
    /// - None; the snapshot is replaced in place.
    ///
    /// Details:
    /// - Runs `flatpak list --columns=application,name`, then `flatpak info`
    ///   per surviving identifier. O(n) subprocess calls; n is desktop-scale
    ///   and refresh is post-mutation only, never polled.
    /// - A failed list call degrades to an empty inventory with a warning.
    /// - Entries with malformed detail blocks are dropped with a warning
    ///   instead of aborting the rebuild.
    pub fn refresh(&mut self, settings: &Settings) {
        let raw = match run_flatpak(&settings.flatpak_bin, &["list", "--columns=application,name"])
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "listing installed apps failed; inventory is empty");
                self.apps.clear();
                return;
            }
        };
        let entries = collect_entries(&raw, |app_id| {
            run_flatpak(&settings.flatpak_bin, &["info", app_id])
        });
        self.replace_with(entries);
        tracing::info!(count = self.apps.len(), "inventory refreshed");
    }

    /// Replace the snapshot with `entries`; later duplicates of a display
    /// name win.
    pub fn replace_with(&mut self, entries: Vec<AppEntry>) {
        self.apps = entries
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect();
    }

    /// Installed apps sorted by display name (case-sensitive ordinal order).
    #[must_use]
    pub fn list(&self) -> Vec<&AppEntry> {
        self.apps.values().collect()
    }

    /// Look up an installed app by display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.apps.get(name)
    }

    /// Number of installed apps in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// `true` when the snapshot holds no apps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// What: Turn a columnar list output into detail-backed entries.
///
/// Inputs:
/// - `list_output`: Raw stdout of the columnar list command.
/// - `info`: Callback producing the raw detail block for one identifier
///   (the live path runs `flatpak info`; tests substitute canned text).
///
/// Output:
/// - Parsed entries for every identifier whose detail block was readable;
///   runtimes and malformed entries are filtered out along the way.
pub fn collect_entries<F>(list_output: &str, mut info: F) -> Vec<AppEntry>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut entries = Vec::new();
    for hit in parse::parse_columnar(list_output) {
        let raw = match info(&hit.app_id) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(app_id = %hit.app_id, error = %e, "detail query failed; entry skipped");
                continue;
            }
        };
        match parse::parse_app_details(&hit.app_id, &raw) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                tracing::warn!(app_id = %hit.app_id, error = %e, "malformed detail block; entry skipped");
            }
        }
    }
    entries
}
