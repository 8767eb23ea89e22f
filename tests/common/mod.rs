//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Expected text report for `mine.xml` against `theirs.xml` without exclusions.
pub const FULL_DIFF: &str = "\
DUPLICATE
  Alien (1979)  [Alien (1979).mkv]
NEW
  Amélie (2001)  [Amelie.mkv]
  Blade Runner (1982)  [Blade Runner.mkv]
  Metropolis (1927)  [Metropolis.avi]
RESOLUTION
  Heat (1995)  [Heat (1995).mkv]
";

/// Expected text report with `exclude.txt` applied.
pub const EXCLUDED_DIFF: &str = "\
DUPLICATE
  Alien (1979)  [Alien (1979).mkv]
NEW
  Blade Runner (1982)  [Blade Runner.mkv]
  Metropolis (1927)  [Metropolis.avi]
";
