use super::{classify, FindResult};
use moviediff_common::{ExcludeEntry, Movie};

/// Classify every movie in `theirs` against `mine`, in input order.
///
/// Movies matching an exclusion entry are dropped before classification and
/// never appear in the result, whatever their outcome would have been.
pub fn reconcile(mine: &[Movie], theirs: &[Movie], exclude: &[ExcludeEntry]) -> Vec<FindResult> {
    let mut results = Vec::new();

    for movie in theirs {
        if exclude.iter().any(|entry| entry.matches(movie)) {
            tracing::info!("excluded: {}", movie.title);
            continue;
        }

        if let Some(result) = classify(movie, mine) {
            results.push(result);
        }
    }

    tracing::debug!(
        "Reconciled {} movies against {} ({} results)",
        theirs.len(),
        mine.len(),
        results.len()
    );
    results
}
