//! flatsea binary entrypoint kept minimal. The core lives in the library.

mod args;

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

use flatsea::app::App;
use flatsea::util;
use flatsea::util::config::Settings;

/// Timestamp formatter rendering `YYYY-MM-DD-T HH:MM:SS` log lines.
struct FlatseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for FlatseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = match SystemTime::now().duration_since(std::time::UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_secs()).unwrap_or(0),
            Err(_) => 0,
        };
        let s = util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-T HH:MM:SS"
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking appender alive for the process lifetime.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing to a log file, with stderr fallback.
///
/// Inputs:
/// - `level`: Default level directive when `RUST_LOG` is unset.
///
/// Details:
/// - Writes to `~/.config/flatsea/logs/flatsea.log` through a non-blocking
///   appender; when the file cannot be opened, falls back to stderr so
///   startup is never blocked on logging.
fn init_logging(level: &str) {
    let log_path = util::logs_dir().join("flatsea.log");
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(FlatseaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(FlatseaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let parsed = args::definition::Args::parse();
    let level = if parsed.verbose {
        "debug"
    } else {
        parsed.log_level.as_str()
    };
    init_logging(level);

    tracing::info!(dry_run = parsed.dry_run, "flatsea starting");
    let settings = Settings::load();
    let mut app = App::new(settings, parsed.dry_run);

    app = args::definition::process_args(&parsed, app).await;

    // No mode flag given: default to listing the inventory.
    args::definition::handle_default(&mut app);
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn flatsea_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::FlatseaTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
