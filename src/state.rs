//! Core data types shared across flatsea.
//!
//! This module defines the typed records produced by the output parser and
//! carried through the inventory and search layers: installed application
//! entries, remote search hits, and the one-shot search outcome payload
//! handed back from the background search worker.

use std::collections::BTreeMap;

/// A single installed application as reconstructed from `flatpak info`.
///
/// `name` and `installed_size` are mandatory fields validated at parse time;
/// every other `Key: value` pair from the detail block lands in [`attrs`]
/// untouched so fields flatpak adds later remain accessible.
///
/// [`attrs`]: AppEntry::attrs
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppEntry {
    /// Reverse-DNS application identifier (e.g. `org.mozilla.firefox`).
    pub app_id: String,
    /// Display name recovered from the detail block's title lines.
    pub name: String,
    /// Human-readable installed size as reported by flatpak (e.g. `12.3 MB`).
    pub installed_size: String,
    /// Open key→value bag with every parsed detail field, `Name` and
    /// `Installed` included.
    pub attrs: BTreeMap<String, String>,
}

/// One row of columnar flatpak output: a remote search hit or an installed
/// unit listing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchHit {
    /// Application identifier from the first column.
    pub app_id: String,
    /// Display name from the remaining columns, single-space joined.
    pub name: String,
}

/// What: Result payload delivered exactly once per background search.
///
/// Details:
/// - `hits` is empty (not an error) when nothing matched.
/// - `errors` carries human-readable invocation failures; the search worker
///   never panics the caller over a broken subprocess.
#[derive(Clone, Debug, Default)]
pub struct SearchOutcome {
    /// The query text that produced this outcome.
    pub query: String,
    /// Matching applications in the order flatpak reported them.
    pub hits: Vec<SearchHit>,
    /// Invocation failures encountered while searching, if any.
    pub errors: Vec<String>,
}
