//! Settings file parsing.
//!
//! flatsea reads an optional `flatsea.conf` (plain `key = value` lines) from
//! the config directory. Unknown keys are warned about and ignored so older
//! binaries keep working against newer config files.

use std::path::Path;

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Trims whitespace from both key and value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if !trimmed.contains('=') {
        return None;
    }
    let mut parts = trimmed.splitn(2, '=');
    let key = parts.next()?.trim().to_string();
    let value = parts.next()?.trim().to_string();
    Some((key, value))
}

/// Runtime settings controlling how flatsea drives flatpak.
///
/// All fields have working defaults; the config file only overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Flatpak binary name or absolute path.
    pub flatpak_bin: String,
    /// Remote name registered at startup and used for installs.
    pub remote_name: String,
    /// Repository URL behind the remote; registration is idempotent.
    pub remote_url: String,
    /// Preferred terminal emulator for interactive sessions, if any.
    pub terminal: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flatpak_bin: "flatpak".to_string(),
            remote_name: "flathub".to_string(),
            remote_url: "https://dl.flathub.org/repo/flathub.flatpakrepo".to_string(),
            terminal: None,
        }
    }
}

impl Settings {
    /// What: Parse settings from config-file text, starting from defaults.
    ///
    /// Inputs:
    /// - `text`: Full contents of a `flatsea.conf`-style file.
    ///
    /// Output:
    /// - A `Settings` with every recognized `key = value` applied on top of
    ///   the defaults.
    ///
    /// Details:
    /// - Comments and blank lines are skipped; unknown keys and empty values
    ///   log a warning and change nothing.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        for line in text.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, value)) = parse_key_value(line) else {
                continue;
            };
            if value.is_empty() {
                tracing::warn!(key = %key, "empty value in settings; keeping default");
                continue;
            }
            match key.as_str() {
                "flatpak_bin" => settings.flatpak_bin = value,
                "remote_name" => settings.remote_name = value,
                "remote_url" => settings.remote_url = value,
                "terminal" => settings.terminal = Some(value),
                _ => tracing::warn!(key = %key, "unknown settings key ignored"),
            }
        }
        settings
    }

    /// What: Load settings from `path`, falling back to defaults.
    ///
    /// Inputs:
    /// - `path`: Settings file location (usually `config_dir()/flatsea.conf`).
    ///
    /// Output:
    /// - Parsed settings, or plain defaults when the file is absent or
    ///   unreadable (missing config is the normal first-run case).
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(_) => Self::default(),
        }
    }

    /// Load settings from the default location under the config directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&super::config_dir().join("flatsea.conf"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_skip_comment_or_empty_variants() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# comment"));
        assert!(skip_comment_or_empty("// comment"));
        assert!(skip_comment_or_empty("; comment"));
        assert!(!skip_comment_or_empty("key = value"));
    }

    #[test]
    fn config_parse_key_value_trims_and_splits_once() {
        assert_eq!(
            parse_key_value("  remote_url = https://example.org/x=1 "),
            Some(("remote_url".into(), "https://example.org/x=1".into()))
        );
        assert_eq!(parse_key_value("no separator"), None);
    }

    /// What: Unknown keys and empty values fall back to defaults.
    #[test]
    fn settings_parse_applies_known_keys_only() {
        let text = "\
# flatsea settings
flatpak_bin = /usr/bin/flatpak
remote_name = testhub
remote_url =
terminal = kitty
mystery_key = 1
";
        let s = Settings::parse(text);
        assert_eq!(s.flatpak_bin, "/usr/bin/flatpak");
        assert_eq!(s.remote_name, "testhub");
        assert_eq!(s.remote_url, Settings::default().remote_url);
        assert_eq!(s.terminal.as_deref(), Some("kitty"));
    }

    /// What: A missing file loads clean defaults.
    #[test]
    fn settings_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = Settings::load_from(&dir.path().join("flatsea.conf"));
        assert_eq!(s, Settings::default());
    }

    /// What: A present file overrides defaults.
    #[test]
    fn settings_load_from_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("flatsea.conf");
        std::fs::write(&path, "remote_name = corphub\n").expect("write");
        let s = Settings::load_from(&path);
        assert_eq!(s.remote_name, "corphub");
    }
}
