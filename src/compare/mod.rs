//! Catalog reconciliation.
//!
//! Compares a reference collection ("mine") against another collection
//! ("theirs") and reports, for each film in theirs, whether it is missing
//! from mine, available in a better resolution, or ambiguous because mine
//! holds it more than once.

mod classifier;
mod matcher;
mod reconcile;

pub use classifier::classify;
pub use matcher::find_by_title_year;
pub use reconcile::reconcile;

use moviediff_common::Movie;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relationship of a movie to the reference collection.
///
/// Variants are declared in alphabetical order so the derived `Ord` sorts
/// report groups by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiffKind {
    /// The reference collection holds this film more than once.
    Duplicate,
    /// The reference collection does not have this film.
    New,
    /// The reference copy has a smaller pixel area.
    Resolution,
}

impl DiffKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duplicate => "DUPLICATE",
            Self::New => "NEW",
            Self::Resolution => "RESOLUTION",
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification outcome for one candidate movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindResult {
    pub kind: DiffKind,
    pub movie: Movie,
}

impl FindResult {
    pub fn new(kind: DiffKind, movie: Movie) -> Self {
        Self { kind, movie }
    }
}

impl fmt::Display for FindResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.movie)
    }
}
