//! Shared utilities: flatpak process execution, settings parsing, config
//! paths, PATH lookups, shell quoting and timestamp formatting.

pub mod config;
pub mod flatpak;

use std::path::{Path, PathBuf};

/// What: Resolve the flatsea config directory, creating it when needed.
///
/// Inputs:
/// - None (reads `HOME` / `XDG_CONFIG_HOME`).
///
/// Output:
/// - `$HOME/.config/flatsea` when `HOME` is set, otherwise the
///   `XDG_CONFIG_HOME` base (defaulting to `~/.config`), ensured to exist.
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = std::env::var_os("HOME").map_or_else(
        || {
            std::env::var_os("XDG_CONFIG_HOME")
                .map_or_else(|| PathBuf::from(".config"), PathBuf::from)
        },
        |home| PathBuf::from(home).join(".config"),
    );
    let dir = base.join("flatsea");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/flatsea/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Return `true` if an executable named `cmd` can be found in the current `PATH`.
///
/// Inputs: `cmd` program name or absolute/relative path.
///
/// Output: `true` when an executable file is found (Unix executable bit respected).
#[must_use]
pub fn command_on_path(cmd: &str) -> bool {
    /// Check a concrete candidate path for an executable regular file.
    fn is_exec(p: &Path) -> bool {
        if !p.is_file() {
            return false;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Ok(meta) = std::fs::metadata(p) {
                return meta.permissions().mode() & 0o111 != 0;
            }
            false
        }
        #[cfg(not(unix))]
        {
            true
        }
    }

    if cmd.contains(std::path::MAIN_SEPARATOR) {
        return is_exec(Path::new(cmd));
    }
    which::which(cmd).is_ok()
}

/// Safely single-quote an arbitrary string for POSIX shells.
///
/// Inputs: `s` string to quote.
///
/// Output: New string wrapped in single quotes, with inner quotes escaped via
/// the `'"'"'` pattern.
#[must_use]
pub fn shell_single_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

/// What: Convert an optional Unix timestamp (seconds) to a UTC date-time string.
///
/// Inputs:
/// - `ts`: Optional Unix timestamp in seconds since epoch.
///
/// Output:
/// - Returns a formatted string `YYYY-MM-DD HH:MM:SS` (UTC), or empty string
///   for `None`, or numeric string for negative timestamps.
///
/// Details:
/// - Simple loop-based conversion; ignores leap seconds.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    if t < 0 {
        return t.to_string();
    }

    // Split into days and seconds-of-day
    let mut days = t / 86_400;
    let sod = t % 86_400; // 0..86399

    let hour = u32::try_from(sod / 3600).unwrap_or(0);
    let minute = u32::try_from((sod % 3600) / 60).unwrap_or(0);
    let second = u32::try_from(sod % 60).unwrap_or(0);

    // Convert days since 1970-01-01 to Y-M-D (UTC) using simple loops
    let mut year: i32 = 1970;
    loop {
        let diy = i64::from(if is_leap(year) { 366 } else { 365 });
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let leap = is_leap(year);
    let mut month: u32 = 1;
    let mdays = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    for &len in &mdays {
        if days >= i64::from(len) {
            days -= i64::from(len);
            month += 1;
        } else {
            break;
        }
    }
    let day = u32::try_from(days + 1).unwrap_or(1);

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

/// Leap year predicate for the proleptic Gregorian calendar.
///
/// Inputs:
/// - `y`: Year (Gregorian calendar)
///
/// Output:
/// - `true` when `y` is a leap year; `false` otherwise.
const fn is_leap(y: i32) -> bool {
    (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0)
}
