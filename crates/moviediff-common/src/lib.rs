//! Moviediff-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across moviediff:
//!
//! - **Movie**: The normalized catalog record shared by parsing and reconciliation
//! - **Resolution Symbols**: Coarse display labels derived from pixel dimensions
//! - **Path Utilities**: Base-name and stem/extension helpers for catalog paths
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use moviediff_common::{Movie, ResolutionSymbol, Error, Result};
//!
//! let movie = Movie::new("Inception", Some("2010")).with_resolution(1920, 1080);
//! assert_eq!(movie.resolution_symbol(), ResolutionSymbol::FullHd);
//!
//! fn example() -> Result<()> {
//!     Err(Error::BasePathMissing("/mnt/filme".into()))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
