//! Catalog (library export) parser.
//!
//! A catalog is an XML document with any number of `<movie>` elements at any
//! depth. Each element becomes one [`Movie`] in document order. Missing or
//! malformed fields inside a record never fail the parse; only a document
//! that cannot be read or is not well-formed XML does.
//!
//! Files are decoded according to their byte-order mark or the `encoding`
//! attribute of the XML declaration, defaulting to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use moviediff_common::{Error, Movie, Result};
use regex::bytes::Regex;
use roxmltree::{Document, Node};
use std::path::Path;
use std::sync::LazyLock;

static XML_DECL_ENCODING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?-u:\xEF\xBB\xBF)?\s*<\?xml[^>]*?\sencoding\s*=\s*["']([A-Za-z0-9._:-]+)["']"#)
        .expect("declaration pattern is valid")
});

/// Read and parse a catalog file.
pub fn parse_catalog(path: &Path) -> Result<Vec<Movie>> {
    let bytes = std::fs::read(path).map_err(|e| Error::malformed_catalog(path, e.to_string()))?;
    let xml = decode_catalog(&bytes, path)?;

    parse_catalog_str(&xml, path)
}

/// Decode raw catalog bytes. A byte-order mark takes precedence over the
/// declared encoding.
fn decode_catalog(bytes: &[u8], origin: &Path) -> Result<String> {
    let encoding = match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label.as_bytes()).ok_or_else(|| {
            Error::malformed_catalog(origin, format!("unsupported encoding {label:?}"))
        })?,
        None => UTF_8,
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(Error::malformed_catalog(
            origin,
            format!("not valid {}", used.name()),
        ));
    }
    if used != UTF_8 {
        tracing::debug!("Decoded {:?} as {}", origin, used.name());
    }

    Ok(text.into_owned())
}

fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(256)];
    let caps = XML_DECL_ENCODING.captures(head)?;
    Some(String::from_utf8_lossy(&caps[1]).into_owned())
}

/// Parse catalog XML already in memory. `origin` is only used in errors and logs.
pub fn parse_catalog_str(xml: &str, origin: &Path) -> Result<Vec<Movie>> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let doc = Document::parse(xml).map_err(|e| Error::malformed_catalog(origin, e.to_string()))?;

    let movies: Vec<Movie> = doc
        .descendants()
        .filter(|node| node.has_tag_name("movie"))
        .map(movie_from_node)
        .collect();

    tracing::debug!("Parsed {} movies from {:?}", movies.len(), origin);
    Ok(movies)
}

fn movie_from_node(node: Node<'_, '_>) -> Movie {
    let mut movie = Movie::default();

    // Records without <originaltitle> keep an empty title; the sort title is
    // only reported.
    match child(node, "originaltitle") {
        Some(original) => {
            movie.original_title = original.text().filter(|t| !t.is_empty()).map(str::to_string);
            movie.title = child_text(node, "title").unwrap_or_default().to_string();
        }
        None => {
            let sort_title = child_text(node, "sorttitle").unwrap_or_default();
            tracing::warn!(
                "No <originaltitle> present, falling back to defaults (sorttitle: {:?})",
                sort_title
            );
        }
    }

    movie.year = child_text(node, "year")
        .filter(|y| !y.is_empty())
        .map(str::to_string);

    if let Some(path) = child_text(node, "filenameandpath") {
        movie = movie.with_file_path(path);
    }

    match stream_resolution(node) {
        Some((width, height)) => movie = movie.with_resolution(width, height),
        None => tracing::debug!("No resolution data for {:?}", movie.title),
    }

    movie
}

/// Width and height from `fileinfo/streamdetails/video`, if both are present
/// and numeric. Only the first element at each level is consulted.
fn stream_resolution(node: Node<'_, '_>) -> Option<(u32, u32)> {
    let video = child(node, "fileinfo")
        .and_then(|n| child(n, "streamdetails"))
        .and_then(|n| child(n, "video"))?;

    let width = child_text(video, "width")?.trim().parse().ok()?;
    let height = child_text(video, "height")?.trim().parse().ok()?;
    Some((width, height))
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name).and_then(|n| n.text())
}
