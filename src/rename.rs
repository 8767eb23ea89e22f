//! Local file renaming.
//!
//! Catalog paths usually point at a network share, so local files are found
//! by base name inside a user-supplied directory. When the year embedded in a
//! local file name differs from the catalog year, a rename to
//! `Title (Year).ext` is proposed. Whether a proposal is applied is decided
//! by a [`Confirm`] implementation supplied by the caller.

use anyhow::Result;
use moviediff_common::{paths, Error, Movie};
use moviediff_parser::parse_title_year;
use std::path::{Path, PathBuf};

/// A proposed rename of one local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameProposal {
    pub movie: Movie,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Answer to a rename confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// Stop processing the remaining proposals.
    Cancel,
}

impl Answer {
    /// Parse a typed answer. English and German short and long forms are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" | "j" | "ja" => Some(Self::Yes),
            "n" | "no" | "nein" => Some(Self::No),
            "c" | "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }
}

/// Decides whether a proposed rename is carried out.
pub trait Confirm {
    fn confirm(&mut self, proposal: &RenameProposal) -> Result<Answer>;
}

/// Accepts every proposal.
#[derive(Debug, Default)]
pub struct AcceptAll;

impl Confirm for AcceptAll {
    fn confirm(&mut self, _proposal: &RenameProposal) -> Result<Answer> {
        Ok(Answer::Yes)
    }
}

/// Counts from [`apply_renames`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
    pub cancelled: bool,
}

/// File name a local file should have for `movie`, or `None` if it already
/// carries the catalog year. Catalog years that are not four digits give no
/// proposal, since the result could not be parsed back.
///
/// # Examples
///
/// ```
/// use moviediff::rename::proposed_file_name;
/// use moviediff_common::Movie;
///
/// let movie = Movie::new("Shutter Island", Some("2010"));
/// assert_eq!(
///     proposed_file_name(&movie, "Shutter Island.mkv").as_deref(),
///     Some("Shutter Island (2010).mkv")
/// );
/// assert_eq!(proposed_file_name(&movie, "Shutter Island (2010).mkv"), None);
/// ```
pub fn proposed_file_name(movie: &Movie, local_file_name: &str) -> Option<String> {
    let year = movie
        .year
        .as_deref()
        .filter(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))?;
    let (stem, extension) = paths::split_extension(local_file_name);

    let local = parse_title_year(stem);
    let local_year = local.as_ref().and_then(|m| m.year.as_deref());
    if local_year == Some(year) {
        return None;
    }

    let base = local
        .as_ref()
        .map(|m| m.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| stem.trim());

    Some(format!("{} ({}){}", base, year, extension))
}

/// Find local files for `movies` under `base_path` and propose renames.
///
/// Fails only when `base_path` does not exist. Movies whose file is not
/// present locally are skipped with a warning.
pub fn plan_renames(movies: &[Movie], base_path: &Path) -> Result<Vec<RenameProposal>> {
    if !base_path.is_dir() {
        return Err(Error::BasePathMissing(base_path.to_path_buf()).into());
    }

    let mut proposals = Vec::new();
    for movie in movies {
        if movie.filename.is_empty() {
            tracing::debug!("No file name in catalog for {:?}", movie.title);
            continue;
        }

        let local_path = base_path.join(&movie.filename);
        if !local_path.is_file() {
            tracing::warn!("Movie file does not exist: {:?}", local_path);
            continue;
        }

        let Some(new_name) = proposed_file_name(movie, &movie.filename) else {
            continue;
        };

        let target = base_path.join(&new_name);
        if target.exists() {
            tracing::warn!(
                "Not renaming {:?}: target already exists: {:?}",
                local_path,
                target
            );
            continue;
        }

        proposals.push(RenameProposal {
            movie: movie.clone(),
            from: local_path,
            to: target,
        });
    }

    Ok(proposals)
}

/// Ask `confirm` about each proposal and rename the accepted ones.
///
/// A failed rename is logged and counted; it does not stop the remaining
/// proposals. [`Answer::Cancel`] stops immediately.
pub fn apply_renames<C: Confirm>(
    proposals: &[RenameProposal],
    confirm: &mut C,
) -> Result<RenameSummary> {
    let mut summary = RenameSummary::default();

    for proposal in proposals {
        match confirm.confirm(proposal)? {
            Answer::Yes => match std::fs::rename(&proposal.from, &proposal.to) {
                Ok(()) => {
                    tracing::info!("Renamed {:?} -> {:?}", proposal.from, proposal.to);
                    summary.renamed += 1;
                }
                Err(e) => {
                    tracing::error!("Could not rename {:?}: {}", proposal.from, e);
                    summary.failed += 1;
                }
            },
            Answer::No => summary.skipped += 1,
            Answer::Cancel => {
                summary.cancelled = true;
                break;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;

    struct Scripted(VecDeque<Answer>);

    impl Confirm for Scripted {
        fn confirm(&mut self, _proposal: &RenameProposal) -> Result<Answer> {
            Ok(self.0.pop_front().unwrap_or(Answer::No))
        }
    }

    fn catalog_movie(title: &str, year: Option<&str>, file: &str) -> Movie {
        Movie::new(title, year).with_file_path(format!("smb://nas/movies/{}", file))
    }

    #[test]
    fn test_answer_parse() {
        assert_eq!(Answer::parse("y"), Some(Answer::Yes));
        assert_eq!(Answer::parse("JA\n"), Some(Answer::Yes));
        assert_eq!(Answer::parse("j"), Some(Answer::Yes));
        assert_eq!(Answer::parse("Nein"), Some(Answer::No));
        assert_eq!(Answer::parse("n"), Some(Answer::No));
        assert_eq!(Answer::parse("cancel"), Some(Answer::Cancel));
        assert_eq!(Answer::parse("c"), Some(Answer::Cancel));
        assert_eq!(Answer::parse("maybe"), None);
        assert_eq!(Answer::parse(""), None);
    }

    #[test]
    fn test_proposed_file_name() {
        let movie = Movie::new("Heat", Some("1995"));
        assert_eq!(proposed_file_name(&movie, "Heat.mkv").as_deref(), Some("Heat (1995).mkv"));
        assert_eq!(
            proposed_file_name(&movie, "Heat (1996).mkv").as_deref(),
            Some("Heat (1995).mkv")
        );
        assert_eq!(proposed_file_name(&movie, "Heat (1995).mkv"), None);
        assert_eq!(proposed_file_name(&movie, "Heat").as_deref(), Some("Heat (1995)"));
    }

    #[test]
    fn test_proposed_file_name_without_catalog_year() {
        let movie = Movie::new("Heat", None);
        assert_eq!(proposed_file_name(&movie, "Heat.mkv"), None);
    }

    #[test]
    fn test_proposed_file_name_needs_four_digit_year() {
        assert_eq!(proposed_file_name(&Movie::new("Heat", Some("19xx")), "Heat.mkv"), None);
        assert_eq!(proposed_file_name(&Movie::new("Heat", Some("995")), "Heat.mkv"), None);
    }

    #[test]
    fn test_plan_renames_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Heat")).unwrap();

        let movies = vec![catalog_movie("Heat", Some("1995"), "Heat")];
        assert!(plan_renames(&movies, dir.path()).unwrap().is_empty());
        assert!(dir.path().join("Heat").is_dir());
    }

    #[test]
    fn test_plan_renames_missing_base_path() {
        let err = plan_renames(&[], Path::new("/nonexistent/movies")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::BasePathMissing(_))
        ));
    }

    #[test]
    fn test_plan_renames() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Heat.mkv"), b"").unwrap();
        fs::write(dir.path().join("Alien (1979).avi"), b"").unwrap();
        fs::write(dir.path().join("Ronin (1999).mkv"), b"").unwrap();

        let movies = vec![
            catalog_movie("Heat", Some("1995"), "Heat.mkv"),
            catalog_movie("Alien", Some("1979"), "Alien (1979).avi"),
            catalog_movie("Ronin", Some("1998"), "Ronin (1999).mkv"),
            catalog_movie("Zodiac", Some("2007"), "Zodiac.mkv"),
            Movie::new("No File", Some("2000")),
        ];

        let proposals = plan_renames(&movies, dir.path()).unwrap();
        let names: Vec<_> = proposals
            .iter()
            .map(|p| p.to.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Heat (1995).mkv", "Ronin (1998).mkv"]);
        assert_eq!(proposals[0].from, dir.path().join("Heat.mkv"));
    }

    #[test]
    fn test_plan_renames_skips_existing_target() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Heat.mkv"), b"").unwrap();
        fs::write(dir.path().join("Heat (1995).mkv"), b"").unwrap();

        let movies = vec![catalog_movie("Heat", Some("1995"), "Heat.mkv")];
        assert!(plan_renames(&movies, dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_apply_renames_yes_no() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Heat.mkv"), b"").unwrap();
        fs::write(dir.path().join("Ronin.mkv"), b"").unwrap();

        let movies = vec![
            catalog_movie("Heat", Some("1995"), "Heat.mkv"),
            catalog_movie("Ronin", Some("1998"), "Ronin.mkv"),
        ];
        let proposals = plan_renames(&movies, dir.path()).unwrap();

        let mut confirm = Scripted(VecDeque::from([Answer::Yes, Answer::No]));
        let summary = apply_renames(&proposals, &mut confirm).unwrap();

        assert_eq!(
            summary,
            RenameSummary {
                renamed: 1,
                skipped: 1,
                failed: 0,
                cancelled: false,
            }
        );
        assert!(dir.path().join("Heat (1995).mkv").exists());
        assert!(!dir.path().join("Heat.mkv").exists());
        assert!(dir.path().join("Ronin.mkv").exists());
    }

    #[test]
    fn test_apply_renames_cancel_stops() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Heat.mkv"), b"").unwrap();
        fs::write(dir.path().join("Ronin.mkv"), b"").unwrap();

        let movies = vec![
            catalog_movie("Heat", Some("1995"), "Heat.mkv"),
            catalog_movie("Ronin", Some("1998"), "Ronin.mkv"),
        ];
        let proposals = plan_renames(&movies, dir.path()).unwrap();

        let mut confirm = Scripted(VecDeque::from([Answer::Cancel, Answer::Yes]));
        let summary = apply_renames(&proposals, &mut confirm).unwrap();

        assert!(summary.cancelled);
        assert_eq!(summary.renamed, 0);
        assert!(dir.path().join("Heat.mkv").exists());
        assert!(dir.path().join("Ronin.mkv").exists());
    }

    #[test]
    fn test_apply_renames_failure_continues() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Ronin.mkv"), b"").unwrap();

        let proposals = vec![
            RenameProposal {
                movie: Movie::new("Heat", Some("1995")),
                from: dir.path().join("Heat.mkv"),
                to: dir.path().join("Heat (1995).mkv"),
            },
            RenameProposal {
                movie: Movie::new("Ronin", Some("1998")),
                from: dir.path().join("Ronin.mkv"),
                to: dir.path().join("Ronin (1998).mkv"),
            },
        ];

        let summary = apply_renames(&proposals, &mut AcceptAll).unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.renamed, 1);
        assert!(dir.path().join("Ronin (1998).mkv").exists());
    }
}
