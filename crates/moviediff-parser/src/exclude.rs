//! Exclusion list loading.
//!
//! One `Title (Year)` or bare `Title` entry per line. Lines that yield
//! neither a title nor a year are skipped.

use crate::title_year::parse_title_year;
use moviediff_common::{Error, ExcludeEntry, Result};
use std::path::Path;

/// Read an exclusion list. The file must be UTF-8.
pub fn read_exclude_list(path: &Path) -> Result<Vec<ExcludeEntry>> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|_| Error::ExcludeListEncoding {
        path: path.to_path_buf(),
    })?;

    let entries = parse_exclude_list(&content);
    tracing::debug!("Loaded {} exclusion entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Parse exclusion-list text already in memory.
pub fn parse_exclude_list(content: &str) -> Vec<ExcludeEntry> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content
        .lines()
        .filter_map(parse_title_year)
        .map(ExcludeEntry::from)
        .collect()
}
