use crate::compare::{DiffKind, FindResult};
use moviediff_common::Movie;
use serde::Serialize;
use std::fmt::Write;

/// Results grouped by kind (alphabetical) with movies sorted by title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiffReport {
    pub groups: Vec<DiffGroup>,
}

/// All results of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffGroup {
    pub kind: DiffKind,
    pub movies: Vec<Movie>,
}

impl DiffReport {
    /// Group and order reconciliation results.
    ///
    /// Titles are compared by code point. Movies with equal titles keep their
    /// reconciliation order.
    pub fn from_results(results: Vec<FindResult>) -> Self {
        let mut results = results;
        results.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| a.movie.title.cmp(&b.movie.title)));

        let mut groups: Vec<DiffGroup> = Vec::new();
        for result in results {
            match groups.last_mut() {
                Some(group) if group.kind == result.kind => group.movies.push(result.movie),
                _ => groups.push(DiffGroup {
                    kind: result.kind,
                    movies: vec![result.movie],
                }),
            }
        }

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Render as text: one header line per kind, one indented line per movie.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            let _ = writeln!(out, "{}", group.kind);
            for movie in &group.movies {
                let _ = writeln!(out, "  {}", entry_line(movie));
            }
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn entry_line(movie: &Movie) -> String {
    let mut line = movie.title.clone();
    if let Some(year) = &movie.year {
        let _ = write!(line, " ({})", year);
    }
    if !movie.filename.is_empty() {
        let _ = write!(line, "  [{}]", movie.filename);
    }
    line
}
