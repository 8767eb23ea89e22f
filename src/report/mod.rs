//! Report sinks.
//!
//! - [`DiffReport`]: grouped and sorted reconciliation results, as text or JSON
//! - [`render_table`]: the delimited per-movie listing consumed by spreadsheets

mod diff;
mod table;

pub use diff::{DiffGroup, DiffReport};
pub use table::render_table;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write a fully rendered report to `path`, or to stdout when `path` is `-`.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if path == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .context("Failed to write report to stdout")?;
        return Ok(());
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report: {:?}", path))?;
    tracing::info!("Report written to {:?}", path);
    Ok(())
}
