use moviediff_common::Movie;

/// Every movie in `collection` with the same `(title, year)` as `movie`.
///
/// Comparison is exact and case-sensitive; results keep collection order.
pub fn find_by_title_year<'a>(movie: &Movie, collection: &'a [Movie]) -> Vec<&'a Movie> {
    collection.iter().filter(|m| m.same_film(movie)).collect()
}
