//! Logging setup shared by the CLI and the API server.
//!
//! Log lines go to two places: stderr for the console (stdout stays
//! clean for CLI output) and a daily-rotated file under `logs/`.

use std::path::Path;

use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

use crate::Result;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "careerrag.log";

/// Install the global subscriber at the given level.
///
/// `RUST_LOG` takes priority over `level` when set, so a one-off
/// `RUST_LOG=careerrag=trace careerrag chat` works without touching the
/// config file. Calling this twice panics (tracing allows one global
/// subscriber), so only binary entry points should call it.
pub fn init_logging_with_level(level: &str) -> Result<()> {
    if !Path::new(LOG_DIR).exists() {
        std::fs::create_dir_all(LOG_DIR)?;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},careerrag={level}")));

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Console stays terse; the file keeps source locations for debugging.
    let console_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(file_writer)
        .with_ansi(false);

    Registry::default()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized at level {level}");
    tracing::debug!("Log files rotate daily at {LOG_DIR}/{LOG_FILE}.YYYY-MM-DD");

    // The guard must outlive the process or the file writer stops flushing.
    std::mem::forget(guard);

    Ok(())
}

/// Default initialization at info level.
pub fn init_logging() -> Result<()> {
    init_logging_with_level("info")
}

/// Console-only logging for test binaries.
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| crate::CareerRagError::Custom(format!("failed to set subscriber: {e}")))?;
    Ok(())
}
