//! Shell command builders for interactive flatpak sessions.
//!
//! Builders only produce the command strings; spawning them in a visible
//! terminal is `actions::terminal`'s job. Every builder takes `dry_run`,
//! which swaps the command for an echo of itself.

use crate::util::shell_single_quote;

/// What: Build the interactive install command for `app_id`.
///
/// Inputs:
/// - `bin`: Flatpak binary name or path.
/// - `remote`: Remote name to install from (e.g. `flathub`).
/// - `app_ids`: One or more application identifiers.
/// - `dry_run`: When `true`, echoes the command instead of executing.
///
/// Output:
/// - A shell-ready command string.
#[must_use]
pub fn build_install_command(bin: &str, remote: &str, app_ids: &[String], dry_run: bool) -> String {
    let ids = quoted_ids(app_ids);
    let base = format!("{bin} install -y {remote} {ids}");
    if dry_run {
        format!("echo DRY RUN: {base}")
    } else {
        base
    }
}

/// What: Build the interactive uninstall command for `app_ids`.
///
/// Inputs and output mirror [`build_install_command`]; no remote is involved
/// because uninstall operates on the local installation.
#[must_use]
pub fn build_uninstall_command(bin: &str, app_ids: &[String], dry_run: bool) -> String {
    let ids = quoted_ids(app_ids);
    let base = format!("{bin} uninstall -y {ids}");
    if dry_run {
        format!("echo DRY RUN: {base}")
    } else {
        base
    }
}

/// What: Build the interactive update-all command.
///
/// Details:
/// - Updates everything; the set of installed apps does not change, so no
///   inventory refresh is implied afterwards.
#[must_use]
pub fn build_update_command(bin: &str, dry_run: bool) -> String {
    let base = format!("{bin} update -y");
    if dry_run {
        format!("echo DRY RUN: {base}")
    } else {
        base
    }
}

/// Single-quote each id and join with single spaces.
fn quoted_ids(app_ids: &[String]) -> String {
    app_ids
        .iter()
        .map(|id| shell_single_quote(id))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Install commands carry the remote, the ids and the dry-run echo.
    #[test]
    fn actions_build_install_command_variants() {
        let ids = vec!["app.example.Editor".to_string()];
        let cmd = build_install_command("flatpak", "flathub", &ids, false);
        assert_eq!(cmd, "flatpak install -y flathub 'app.example.Editor'");

        let dry = build_install_command("flatpak", "flathub", &ids, true);
        assert!(dry.starts_with("echo DRY RUN: flatpak install -y flathub"));
    }

    /// What: Uninstall commands skip the remote and quote every id.
    #[test]
    fn actions_build_uninstall_command_variants() {
        let ids = vec!["app.one.A".to_string(), "app.two.B".to_string()];
        let cmd = build_uninstall_command("flatpak", &ids, false);
        assert_eq!(cmd, "flatpak uninstall -y 'app.one.A' 'app.two.B'");

        let dry = build_uninstall_command("flatpak", &ids, true);
        assert!(dry.starts_with("echo DRY RUN: "));
    }

    /// What: Update has no ids and still honours dry-run.
    #[test]
    fn actions_build_update_command_variants() {
        assert_eq!(build_update_command("flatpak", false), "flatpak update -y");
        assert_eq!(
            build_update_command("flatpak", true),
            "echo DRY RUN: flatpak update -y"
        );
    }
}
