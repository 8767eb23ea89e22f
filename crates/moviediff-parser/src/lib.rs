//! # moviediff-parser
//!
//! Parsers that turn external inputs into [`Movie`] records:
//!
//! - [`catalog`]: movie library exports (XML) written by the media center
//! - [`title_year`]: free-text `Title (Year)` lines such as exclusion-list
//!   entries or file names
//! - [`exclude`]: the plain-text exclusion list built on [`title_year`]
//!
//! ## Quick Start
//!
//! ```
//! use moviediff_parser::parse_title_year;
//!
//! let movie = parse_title_year("127 Hours (2010)").unwrap();
//! assert_eq!(movie.title, "127 Hours");
//! assert_eq!(movie.year.as_deref(), Some("2010"));
//! ```
//!
//! ## Catalogs
//!
//! ```
//! use moviediff_parser::catalog::parse_catalog_str;
//! use std::path::Path;
//!
//! let xml = r#"<videodb>
//!   <movie>
//!     <title>Heat</title>
//!     <originaltitle>Heat</originaltitle>
//!     <year>1995</year>
//!     <filenameandpath>smb://nas/movies/Heat.mkv</filenameandpath>
//!   </movie>
//! </videodb>"#;
//!
//! let movies = parse_catalog_str(xml, Path::new("inline.xml")).unwrap();
//! assert_eq!(movies.len(), 1);
//! assert_eq!(movies[0].filename, "Heat.mkv");
//! ```

pub mod catalog;
pub mod exclude;
pub mod title_year;

pub use catalog::parse_catalog;
pub use exclude::read_exclude_list;
pub use title_year::parse_title_year;

pub use moviediff_common::{ExcludeEntry, Movie};
