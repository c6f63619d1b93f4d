//! Parsers for flatpak's semi-structured textual output.
//!
//! Two line-oriented algorithms live here: a columnar parser for
//! `flatpak list`/`flatpak search` output (first column identifier, the rest
//! a display name) and a detail-block parser for `flatpak info` output (a
//! three-line title followed by `Key: value` pairs). Both tolerate trailing
//! whitespace, decorative separator lines and empty output; neither is
//! allowed to abort a whole refresh over one odd line.

use std::collections::BTreeMap;

use crate::state::{AppEntry, SearchHit};

/// Crate-standard boxed error result.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Identifier prefixes belonging to platform runtimes and desktop base
/// components. Entries under these namespaces are never surfaced as
/// user-installable or removable applications.
pub const RESERVED_PREFIXES: [&str; 3] = ["org.freedesktop.", "org.gnome.", "org.kde."];

/// Literal substring flatpak prints when a remote search matches nothing.
pub const NO_MATCHES_SENTINEL: &str = "No matches found";

/// What: Decide whether `app_id` falls in a reserved runtime namespace.
///
/// Inputs:
/// - `app_id`: Candidate identifier token.
///
/// Output:
/// - `true` when the identifier starts with any prefix in
///   [`RESERVED_PREFIXES`] and must be filtered from user-facing lists.
#[must_use]
pub fn is_reserved(app_id: &str) -> bool {
    RESERVED_PREFIXES.iter().any(|p| app_id.starts_with(p))
}

/// What: Parse columnar flatpak output into identifier/name records.
///
/// Inputs:
/// - `raw`: Raw stdout from `flatpak list` or `flatpak search` with
///   `--columns=application,name`.
///
/// Output:
/// - One [`SearchHit`] per data line, in input order. Empty vector for empty
///   output or when the no-matches sentinel appears anywhere in `raw`.
///
/// Details:
/// - Blank lines are skipped; lines whose first token is empty or reserved
///   (platform runtimes, desktop base packages) are skipped as noise.
/// - The first whitespace-delimited token is the identifier; the remaining
///   tokens rejoined with single spaces form the display name.
#[must_use]
pub fn parse_columnar(raw: &str) -> Vec<SearchHit> {
    if raw.contains(NO_MATCHES_SENTINEL) {
        return Vec::new();
    }
    let mut hits = Vec::new();
    for line in raw.lines() {
        let mut tokens = line.split_whitespace();
        let Some(app_id) = tokens.next() else {
            continue;
        };
        if is_reserved(app_id) {
            continue;
        }
        let name = tokens.collect::<Vec<_>>().join(" ");
        hits.push(SearchHit {
            app_id: app_id.to_string(),
            name,
        });
    }
    hits
}

/// What: Parse a `flatpak info` detail block into an [`AppEntry`].
///
/// Inputs:
/// - `app_id`: Identifier the block was requested for.
/// - `raw`: Raw stdout of `flatpak info <app_id>`.
///
/// Output:
/// - `Ok(AppEntry)` with the recovered display name, installed size and the
///   full attribute bag; `Err` when the mandatory `Name` or `Installed` key
///   is missing from the block.
///
/// # Errors
/// - Returns `Err` when the block lacks a `Name` or `Installed` field.
///
/// Details:
/// - The display name is the first three lines, each trimmed, concatenated
///   and cut at the first `-`; this folds flatpak's multi-line title back
///   into one string.
/// - Subsequent lines split on the first `:` into trimmed key/value pairs;
///   the value keeps any later colons. Lines without a colon (decorative
///   separators) are skipped silently.
pub fn parse_app_details(app_id: &str, raw: &str) -> Result<AppEntry> {
    let lines: Vec<&str> = raw.lines().collect();

    let title: String = lines.iter().take(3).map(|l| l.trim()).collect();
    let name = title
        .split('-')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();

    let mut attrs: BTreeMap<String, String> = BTreeMap::new();
    for line in lines.iter().skip(3) {
        if let Some((k, v)) = line.split_once(':') {
            attrs.insert(k.trim().to_string(), v.trim().to_string());
        }
    }

    if !attrs.contains_key("Name") {
        return Err(format!("flatpak info for {app_id}: missing Name field").into());
    }
    let Some(installed_size) = attrs.get("Installed").cloned() else {
        return Err(format!("flatpak info for {app_id}: missing Installed field").into());
    };

    // A block too short for a title still carries a Name attribute.
    let name = if name.is_empty() {
        attrs.get("Name").cloned().unwrap_or_default()
    } else {
        name
    };

    Ok(AppEntry {
        app_id: app_id.to_string(),
        name,
        installed_size,
        attrs,
    })
}
