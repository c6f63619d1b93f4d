//! Flatpak command execution utilities.
//!
//! This module is the only place that spawns the flatpak binary directly:
//! synchronous capture for data-gathering calls and detached spawns for
//! fire-and-forget application launches. No parsing happens here.

use std::process::{Command, Stdio};

/// Crate-standard boxed error result.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Execute the flatpak binary with `args` and capture stdout.
///
/// Inputs:
/// - `bin`: Flatpak binary name or path (settings may override the default).
/// - `args`: CLI arguments passed through unchanged.
///
/// Output:
/// - The command's stdout as a UTF-8 string, or an error carrying the exit
///   status and captured stderr.
///
/// # Errors
/// - Returns `Err` when the binary cannot be spawned (missing or I/O error).
/// - Returns `Err` when the command exits non-zero; the message includes the
///   captured stderr so callers can surface it.
/// - Returns `Err` when stdout is not valid UTF-8.
///
/// Details:
/// - Forces the C locale so the columnar and detail output stays parseable
///   regardless of the user's language settings.
/// - No retry logic; a failing invocation is the caller's decision to absorb
///   (e.g. a failed list call means an empty inventory, not a crash).
pub fn run_flatpak(bin: &str, args: &[&str]) -> Result<String> {
    let out = Command::new(bin)
        .env("LC_ALL", "C")
        .env("LANG", "C")
        .args(args)
        .stdin(Stdio::null())
        .output()?;
    if !out.status.success() {
        let stderr = String::from_utf8_lossy(&out.stderr);
        return Err(format!(
            "{bin} {args:?} exited with {:?}: {}",
            out.status,
            stderr.trim()
        )
        .into());
    }
    Ok(String::from_utf8(out.stdout)?)
}

/// What: Launch flatpak with `args` detached, without awaiting completion.
///
/// Inputs:
/// - `bin`: Flatpak binary name or path.
/// - `args`: CLI arguments (e.g. `run <app-id>`).
///
/// Output:
/// - `Ok(())` once the child process has been spawned; no output is
///   captured and the child is never waited on.
///
/// # Errors
/// - Returns `Err` only when the spawn itself fails.
pub fn spawn_flatpak_detached(bin: &str, args: &[&str]) -> Result<()> {
    Command::new(bin)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    /// What: A missing binary surfaces as an error, not a panic.
    #[test]
    fn run_flatpak_missing_binary_errors() {
        let err = super::run_flatpak("flatsea-test-definitely-missing-binary", &["list"]);
        assert!(err.is_err());
    }

    /// What: Non-zero exits propagate with the status in the message.
    #[test]
    fn run_flatpak_nonzero_exit_errors() {
        let err = super::run_flatpak("false", &[]);
        let msg = err.expect_err("false exits non-zero").to_string();
        assert!(msg.contains("exited with"));
    }

    /// What: Detached spawns return immediately on success.
    #[test]
    fn spawn_detached_spawns_without_waiting() {
        assert!(super::spawn_flatpak_detached("true", &[]).is_ok());
        assert!(super::spawn_flatpak_detached("flatsea-test-definitely-missing-binary", &[]).is_err());
    }
}
