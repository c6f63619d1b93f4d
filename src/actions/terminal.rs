//! Spawning interactive sessions in a visible terminal.
//!
//! Mutating flatpak actions run where the user can watch the live output;
//! the session's exit status is never consumed programmatically. The terminal
//! is chosen from the user's `terminal` setting first, then a fixed probe
//! table, then a bare `bash -lc` fallback.

use std::process::Command;

use crate::util::command_on_path;

/// Probe table of terminal emulators and the arguments that make them run a
/// bash command line.
const TERMINALS: &[(&str, &[&str])] = &[
    ("alacritty", &["-e", "bash", "-lc"]),
    ("kitty", &["bash", "-lc"]),
    ("xterm", &["-hold", "-e", "bash", "-lc"]),
    ("gnome-terminal", &["--", "bash", "-lc"]),
    ("konsole", &["-e", "bash", "-lc"]),
    ("xfce4-terminal", &["-e", "bash", "-lc"]),
    ("tilix", &["-e", "bash", "-lc"]),
    ("mate-terminal", &["-e", "bash", "-lc"]),
];

/// Suffix keeping the spawned terminal open until the user reacts.
const HOLD_TAIL: &str = "; echo; echo 'Finished.'; echo 'Press any key to close...'; read -rn1 -s _ || (echo; echo 'Press Ctrl+C to close'; sleep infinity)";

/// What: Compose the full command line handed to the terminal.
///
/// Inputs:
/// - `cmds`: Shell commands to run in sequence.
///
/// Output:
/// - Commands joined with `&&` plus the hold tail.
#[must_use]
pub fn terminal_command_string(cmds: &[String]) -> String {
    let joined = cmds.join(" && ");
    format!("{joined}{HOLD_TAIL}")
}

/// What: Run `cmds` inside the first available terminal emulator.
///
/// Inputs:
/// - `preferred`: Terminal name from settings, tried before the probe table.
/// - `cmds`: Shell commands to run in sequence.
///
/// Output:
/// - None. The session is fire-and-forget; its completion is observed only
///   by the user watching the terminal.
///
/// Details:
/// - Falls back to a plain `bash -lc` child when no emulator is found, so
///   the commands still run even on a headless setup.
pub fn spawn_shell_commands_in_terminal(preferred: Option<&str>, cmds: &[String]) {
    if cmds.is_empty() {
        return;
    }
    let cmd_str = terminal_command_string(cmds);

    let chosen = preferred
        .and_then(|name| {
            TERMINALS
                .iter()
                .find(|(term, _)| *term == name && command_on_path(term))
        })
        .or_else(|| TERMINALS.iter().find(|(term, _)| command_on_path(term)));

    if let Some((term, args)) = chosen {
        tracing::info!(terminal = %term, "spawning interactive session");
        let _ = Command::new(term)
            .args(args.iter().copied())
            .arg(&cmd_str)
            .spawn();
    } else {
        tracing::warn!("no terminal emulator found; running via bash");
        let _ = Command::new("bash").args(["-lc", &cmd_str]).spawn();
    }
}
