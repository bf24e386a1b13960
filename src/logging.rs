//! Logging setup for the binary.
//!
//! The terminal is in raw mode on the alternate screen while playing, so log
//! records go to a file instead of stderr.

use std::path::Path;

use anyhow::{Context, Result};
use flexi_logger::{opt_format, FileSpec, Logger, LoggerHandle};

/// Start file logging in `dir`. Level comes from `RUST_LOG`, default `info`.
///
/// Keep the returned handle alive for the lifetime of the program.
pub fn setup_logging(dir: &Path) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str("info")
        .context("invalid log specification")?
        .log_to_file(FileSpec::default().directory(dir).basename("tui-2048"))
        .format(opt_format)
        .start()
        .with_context(|| format!("could not start logging in {}", dir.display()))
}
