use anyhow::Result;
use moviediff_common::Movie;

/// Render one row per movie, sorted by title, with the columns
/// `title, original title, year, resolution symbol`.
///
/// Fields are written as-is, without quoting. A field containing the
/// delimiter or a line break is an error.
pub fn render_table(movies: &[Movie], delimiter: char) -> Result<String> {
    let mut sorted: Vec<&Movie> = movies.iter().collect();
    sorted.sort_by(|a, b| a.title.cmp(&b.title));

    let delimiter_str = delimiter.to_string();
    let mut out = String::new();
    for movie in sorted {
        let row = [
            movie.title.as_str(),
            movie.original_title.as_deref().unwrap_or(""),
            movie.year.as_deref().unwrap_or(""),
            movie.resolution_symbol().as_str(),
        ];
        if let Some(field) = row
            .iter()
            .find(|f| f.contains(|c: char| c == delimiter || c == '\n' || c == '\r'))
        {
            anyhow::bail!(
                "Cannot export {:?}: field {:?} contains the delimiter or a line break",
                movie.title,
                field
            );
        }
        out.push_str(&row.join(&delimiter_str));
        out.push('\n');
    }
    Ok(out)
}
