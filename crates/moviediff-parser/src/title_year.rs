//! `Title (Year)` line parser.
//!
//! Used for exclusion-list entries and for recovering the year embedded in a
//! local file name such as `Shutter Island (2010).mkv`.

use moviediff_common::Movie;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Exactly four digits wrapped in parentheses.
static YEAR_IN_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([0-9]{4})\)").expect("year pattern is valid"));

/// Extract a `(title, year)` pair from a free-text line.
///
/// The first parenthesized four-digit group supplies the year. Every such
/// group is removed from the line and the remainder, trimmed, becomes the
/// title. A remainder made only of parentheses and whitespace counts as no
/// title. Returns `None` when the line yields neither a title nor a year;
/// callers skip such lines.
///
/// # Examples
///
/// ```
/// use moviediff_parser::parse_title_year;
///
/// let movie = parse_title_year("Inception (2012)").unwrap();
/// assert_eq!(movie.title, "Inception");
/// assert_eq!(movie.year.as_deref(), Some("2012"));
///
/// let bare = parse_title_year("  Metropolis \n").unwrap();
/// assert_eq!(bare.title, "Metropolis");
/// assert!(bare.year.is_none());
///
/// assert!(parse_title_year("()").is_none());
/// ```
pub fn parse_title_year(line: &str) -> Option<Movie> {
    let year = YEAR_IN_PARENS
        .captures(line)
        .map(|caps| caps[1].to_string());

    let remainder = if year.is_some() {
        YEAR_IN_PARENS.replace_all(line, "")
    } else {
        Cow::Borrowed(line)
    };

    let mut title = remainder.trim();
    if title.chars().all(|c| c == '(' || c == ')' || c.is_whitespace()) {
        title = "";
    }
    if title.is_empty() && year.is_none() {
        return None;
    }

    Some(Movie {
        title: title.to_string(),
        year,
        ..Movie::default()
    })
}
