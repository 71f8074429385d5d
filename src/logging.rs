//! Sets up `tracing` for the process.
//!
//! Events go to a per-run log file (info and above) and to stderr, where `RUST_LOG`
//! decides the level (warn by default) so stdout stays free for user-facing output.

use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Keeps the file writer alive; dropping it flushes buffered log lines.
pub struct LogHandle {
    pub file: Option<PathBuf>,
    _guard: Option<WorkerGuard>,
}

/// Installs the global subscriber. Falls back to stderr only if the log file cannot be created.
pub fn init(log_dir: &Path, program: &str) -> LogHandle {
    let stderr_layer = fmt::layer().with_writer(io::stderr).with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    );

    let file_name = log_file_name(program, Local::now());
    match prepare_log_dir(log_dir) {
        Ok(()) => {
            let appender = tracing_appender::rolling::never(log_dir, &file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("info"));

            tracing_subscriber::registry()
                .with(stderr_layer)
                .with(file_layer)
                .init();

            LogHandle {
                file: Some(log_dir.join(file_name)),
                _guard: Some(guard),
            }
        },
        Err(e) => {
            tracing_subscriber::registry().with(stderr_layer).init();
            warn!(
                "Could not create log directory {}: {}. Logging to stderr only.",
                log_dir.display(),
                e
            );
            LogHandle {
                file: None,
                _guard: None,
            }
        },
    }
}

fn prepare_log_dir(log_dir: &Path) -> io::Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)?;
        println!(
            "\nPath '{}' for log files didn't exist, so it was created\n",
            log_dir.display()
        );
    }
    Ok(())
}

/// `<program>-YYYY-MM-DD-HH-MM-SS.log`
fn log_file_name(program: &str, now: DateTime<Local>) -> String {
    format!("{}-{}.log", program, now.format("%Y-%m-%d-%H-%M-%S"))
}
