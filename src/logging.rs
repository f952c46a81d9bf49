use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Initialize file-backed diagnostics. Everything down to DEBUG goes into the
/// log file; stdout/stderr stay reserved for operator-facing progress output.
pub fn init_logging(log_path: &Path) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("amictl=debug"));

    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(())
}
