//! Core type definitions for catalog records.
//!
//! A [`Movie`] is built once by the catalog parser (or the title/year line
//! parser) and treated as a read-only value afterwards.

use crate::paths;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse quality label derived from pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionSymbol {
    /// Either dimension is unknown (zero).
    #[serde(rename = "?")]
    Unknown,
    /// At least 1920x1080.
    #[serde(rename = "FullHD")]
    FullHd,
    /// At least 1280x720.
    #[serde(rename = "HD")]
    Hd,
    /// Anything smaller.
    #[serde(rename = "SD")]
    Sd,
}

impl ResolutionSymbol {
    /// Classify a pair of dimensions. FullHD is checked before HD before SD.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            return Self::Unknown;
        }
        if width >= 1920 && height >= 1080 {
            return Self::FullHd;
        }
        if width >= 1280 && height >= 720 {
            return Self::Hd;
        }
        Self::Sd
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "?",
            Self::FullHd => "FullHD",
            Self::Hd => "HD",
            Self::Sd => "SD",
        }
    }
}

impl fmt::Display for ResolutionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One movie record from a library catalog.
///
/// Two movies are the same film when their `(title, year)` pairs are equal;
/// every other field is ignored for matching. Resolution dimensions of `0`
/// mean "unknown" and rank below every known resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title, empty when the record had none.
    pub title: String,
    /// Original-language title.
    pub original_title: Option<String>,
    /// Release year exactly as written in the source (not validated).
    pub year: Option<String>,
    /// Base name of the media file.
    pub filename: String,
    /// Full path as reported by the catalog; may refer to a remote share.
    pub file_path: String,
    pub resolution_width: u32,
    pub resolution_height: u32,
}

impl Movie {
    /// Create a movie with only the matching key set.
    pub fn new(title: impl Into<String>, year: Option<&str>) -> Self {
        Self {
            title: title.into(),
            year: year.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_original_title(mut self, original_title: impl Into<String>) -> Self {
        self.original_title = Some(original_title.into());
        self
    }

    /// Set the full path and derive `filename` from its last segment.
    pub fn with_file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = file_path.into();
        self.filename = paths::base_name(&self.file_path).to_string();
        self
    }

    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution_width = width;
        self.resolution_height = height;
        self
    }

    /// Whether `other` refers to the same film (exact, case-sensitive).
    pub fn same_film(&self, other: &Movie) -> bool {
        self.title == other.title && self.year == other.year
    }

    /// Pixel area, `0` when either dimension is unknown.
    pub fn pixel_area(&self) -> u64 {
        u64::from(self.resolution_width) * u64::from(self.resolution_height)
    }

    pub fn resolution_symbol(&self) -> ResolutionSymbol {
        ResolutionSymbol::from_dimensions(self.resolution_width, self.resolution_height)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) [{}]  {}x{} {}",
            self.title,
            self.original_title.as_deref().unwrap_or(""),
            self.year.as_deref().unwrap_or(""),
            self.resolution_width,
            self.resolution_height,
            self.resolution_symbol()
        )
    }
}

/// A `(title, year)` pair from the exclusion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludeEntry {
    pub title: String,
    pub year: Option<String>,
}

impl ExcludeEntry {
    /// Whether `movie` is the excluded film, using the same rule as [`Movie::same_film`].
    pub fn matches(&self, movie: &Movie) -> bool {
        self.title == movie.title && self.year == movie.year
    }
}

impl From<Movie> for ExcludeEntry {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            year: movie.year,
        }
    }
}
