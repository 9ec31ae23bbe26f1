//! Structured logging for the topology analyzer
//!
//! File-based logging with daily rotation plus a compact console layer.
//! The analysis pipeline itself is pure; logging exists for the host
//! application embedding this crate.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// Writes daily rotating JSON logs under the platform config directory
/// (`netviz/logs`). Honors `RUST_LOG` for level filtering, defaulting to
/// `info`.
pub fn init_logging() -> anyhow::Result<PathBuf> {
    let log_dir = log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "netviz.log");

    let console_layer = fmt::layer().with_target(false).compact();
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .json();

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let init_result = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Err(e) = init_result {
        // Tolerate a subscriber installed earlier by the host or by tests
        if e.to_string().contains("already been set") {
            return Ok(log_dir);
        }
        return Err(anyhow::anyhow!(e));
    }

    tracing::info!("logging initialized, directory {}", log_dir.display());
    Ok(log_dir)
}

fn log_directory() -> anyhow::Result<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        dirs::config_dir()
    };
    let base = base.ok_or_else(|| anyhow::anyhow!("could not resolve config directory"))?;
    Ok(base.join("netviz").join("logs"))
}
