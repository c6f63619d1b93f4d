//! Action orchestration: install, uninstall, run, update and remote setup.
//!
//! Each action is a thin state transition over the external flatpak store.
//! Mutating actions run in an interactive terminal session whose exit status
//! is deliberately not consumed; failures stay visible to the user in the
//! session itself and are not re-reported here. None of the actions retries.

pub mod command;
pub mod terminal;

use crate::util::config::Settings;
use crate::util::flatpak::{run_flatpak, spawn_flatpak_detached};

/// Crate-standard boxed error result.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Register the configured remote if it is not present yet.
///
/// Inputs:
/// - `settings`: Remote name and repository URL.
///
/// Output:
/// - `Ok(())` when registration succeeded or the remote already existed.
///
/// # Errors
/// - Returns `Err` when the flatpak invocation itself fails.
///
/// Details:
/// - Uses `remote-add --if-not-exists`, so running this once per process
///   lifetime is both required and safe to repeat.
pub fn ensure_remote(settings: &Settings) -> Result<()> {
    run_flatpak(
        &settings.flatpak_bin,
        &[
            "remote-add",
            "--if-not-exists",
            &settings.remote_name,
            &settings.remote_url,
        ],
    )?;
    tracing::info!(remote = %settings.remote_name, "remote registered");
    Ok(())
}

/// What: Install `app_ids` from the configured remote in a visible terminal.
///
/// Details:
/// - The session's completion is not observed; the caller triggers an
///   inventory refresh afterwards.
pub fn install(settings: &Settings, app_ids: &[String], dry_run: bool) {
    tracing::info!(apps = ?app_ids, dry_run, "install requested");
    let cmd = command::build_install_command(
        &settings.flatpak_bin,
        &settings.remote_name,
        app_ids,
        dry_run,
    );
    terminal::spawn_shell_commands_in_terminal(settings.terminal.as_deref(), &[cmd]);
}

/// What: Uninstall `app_ids` after explicit confirmation.
///
/// Inputs:
/// - `confirmed`: The caller's yes/cancel answer. `false` is a no-op by
///   design, not an error: no subprocess is invoked and the inventory is
///   untouched.
///
/// Output:
/// - `true` when the interactive uninstall session was started; callers must
///   follow a `true` return with an unconditional inventory refresh.
pub fn uninstall(settings: &Settings, app_ids: &[String], confirmed: bool, dry_run: bool) -> bool {
    if !confirmed {
        tracing::info!(apps = ?app_ids, "uninstall not confirmed; nothing done");
        return false;
    }
    tracing::info!(apps = ?app_ids, dry_run, "uninstall confirmed");
    let cmd = command::build_uninstall_command(&settings.flatpak_bin, app_ids, dry_run);
    terminal::spawn_shell_commands_in_terminal(settings.terminal.as_deref(), &[cmd]);
    true
}

/// What: Launch an installed application detached.
///
/// Output:
/// - `Ok(())` once spawned; no waiting, no output captured, no inventory
///   effect.
///
/// # Errors
/// - Returns `Err` when the spawn itself fails.
pub fn run_app(settings: &Settings, app_id: &str) -> Result<()> {
    tracing::info!(app = %app_id, "launching app");
    spawn_flatpak_detached(&settings.flatpak_bin, &["run", app_id])
}

/// What: Update all installed applications in a visible terminal.
///
/// Details:
/// - Update does not change the set of installed apps, so no refresh
///   contract is implied.
pub fn update(settings: &Settings, dry_run: bool) {
    tracing::info!(dry_run, "update requested");
    let cmd = command::build_update_command(&settings.flatpak_bin, dry_run);
    terminal::spawn_shell_commands_in_terminal(settings.terminal.as_deref(), &[cmd]);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Unconfirmed uninstalls invoke nothing at all.
    ///
    /// Inputs:
    /// - Settings pointing at a binary that would fail loudly if spawned.
    ///
    /// Output:
    /// - `false`, with no subprocess attempted.
    #[test]
    fn uninstall_unconfirmed_is_a_noop() {
        let settings = Settings {
            flatpak_bin: "flatsea-test-definitely-missing-binary".to_string(),
            ..Settings::default()
        };
        let started = uninstall(&settings, &["app.example.Editor".to_string()], false, false);
        assert!(!started);
    }

    /// What: A broken binary makes remote registration fail, not panic.
    #[test]
    fn ensure_remote_propagates_invocation_failure() {
        let settings = Settings {
            flatpak_bin: "flatsea-test-definitely-missing-binary".to_string(),
            ..Settings::default()
        };
        assert!(ensure_remote(&settings).is_err());
    }
}
