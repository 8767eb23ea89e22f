use super::{find_by_title_year, DiffKind, FindResult};
use moviediff_common::Movie;

/// Decide how `candidate` relates to the reference collection.
///
/// - no counterpart: [`DiffKind::New`]
/// - one counterpart with a strictly smaller pixel area: [`DiffKind::Resolution`]
/// - one counterpart otherwise: `None`, ties keep the existing copy
/// - several counterparts: [`DiffKind::Duplicate`], the reference itself is ambiguous
pub fn classify(candidate: &Movie, reference: &[Movie]) -> Option<FindResult> {
    let matches = find_by_title_year(candidate, reference);

    match matches.as_slice() {
        [] => Some(FindResult::new(DiffKind::New, candidate.clone())),
        [existing] => {
            if candidate.pixel_area() > existing.pixel_area() {
                Some(FindResult::new(DiffKind::Resolution, candidate.clone()))
            } else {
                None
            }
        }
        _ => {
            tracing::warn!(
                "Movie is present {} times in collection: {}",
                matches.len(),
                candidate
            );
            Some(FindResult::new(DiffKind::Duplicate, candidate.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn x(width: u32, height: u32) -> Movie {
        Movie::new("X", Some("2000")).with_resolution(width, height)
    }

    #[test]
    fn test_higher_resolution() {
        let reference = vec![x(1280, 720)];
        let result = classify(&x(1920, 1080), &reference);
        assert_matches!(result, Some(FindResult { kind: DiffKind::Resolution, .. }));
        assert_eq!(result.unwrap().movie, x(1920, 1080));
    }

    #[test]
    fn test_lower_resolution_is_silent() {
        let reference = vec![x(1280, 720)];
        assert_eq!(classify(&x(640, 480), &reference), None);
    }

    #[test]
    fn test_equal_resolution_is_silent() {
        assert_eq!(classify(&x(1280, 720), &[x(1280, 720)]), None);
        assert_eq!(classify(&x(0, 0), &[x(0, 0)]), None);
    }

    #[test]
    fn test_unknown_reference_resolution_is_lowest() {
        let result = classify(&x(720, 576), &[x(0, 0)]);
        assert_matches!(result, Some(FindResult { kind: DiffKind::Resolution, .. }));
    }

    #[test]
    fn test_unknown_candidate_resolution_is_silent() {
        assert_eq!(classify(&x(0, 0), &[x(720, 576)]), None);
    }

    #[test]
    fn test_area_not_dimensions() {
        // 1440x1080 has a larger area than 1920x720
        let result = classify(&x(1440, 1080), &[x(1920, 720)]);
        assert_matches!(result, Some(FindResult { kind: DiffKind::Resolution, .. }));
    }

    #[test]
    fn test_new() {
        let reference = vec![Movie::new("Y", Some("2000"))];
        let result = classify(&x(1920, 1080), &reference);
        assert_matches!(result, Some(FindResult { kind: DiffKind::New, .. }));
    }

    #[test]
    fn test_new_against_empty_reference() {
        let result = classify(&x(0, 0), &[]);
        assert_matches!(result, Some(FindResult { kind: DiffKind::New, .. }));
    }

    #[test]
    fn test_duplicate_in_reference() {
        let reference = vec![x(1280, 720), Movie::new("Y", None), x(640, 480)];
        let result = classify(&x(320, 240), &reference);
        assert_matches!(result, Some(FindResult { kind: DiffKind::Duplicate, .. }));
    }
}
