//! Path utilities for catalog file references.
//!
//! Catalog paths come from another machine (network shares, Windows drive
//! letters, `smb://` URLs), so they are handled as plain strings rather than
//! through [`std::path::Path`], which only understands the local separator.

/// Return the last segment of a catalog path.
///
/// Both `/` and `\` are treated as separators.
///
/// # Examples
///
/// ```
/// use moviediff_common::paths::base_name;
///
/// assert_eq!(base_name("smb://nas/movies/Heat.mkv"), "Heat.mkv");
/// assert_eq!(base_name(r"D:\Filme\Heat.mkv"), "Heat.mkv");
/// assert_eq!(base_name("Heat.mkv"), "Heat.mkv");
/// ```
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Split a file name into stem and extension, keeping the dot on the extension.
///
/// A leading dot (hidden file) is part of the stem, matching the usual
/// "splitext" convention.
///
/// # Examples
///
/// ```
/// use moviediff_common::paths::split_extension;
///
/// assert_eq!(split_extension("Heat (1995).mkv"), ("Heat (1995)", ".mkv"));
/// assert_eq!(split_extension("README"), ("README", ""));
/// assert_eq!(split_extension(".hidden"), (".hidden", ""));
/// ```
pub fn split_extension(file_name: &str) -> (&str, &str) {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading_dots..].rfind('.') {
        Some(idx) => file_name.split_at(leading_dots + idx),
        None => (file_name, ""),
    }
}
