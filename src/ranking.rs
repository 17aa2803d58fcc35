//! Popularity ordering for films.

use crate::model::FilmId;
use std::cmp::Reverse;

/// Orders films by like count, most liked first, breaking ties by the lower
/// id. `limit` of `None` keeps every film.
///
/// The result depends only on the `(id, likes)` pairs, never on the order in
/// which they are supplied.
pub fn rank<I>(films: I, limit: Option<usize>) -> Vec<FilmId>
where
    I: IntoIterator<Item = (FilmId, usize)>,
{
    let mut ranked: Vec<(FilmId, usize)> = films.into_iter().collect();
    ranked.sort_unstable_by_key(|&(id, likes)| (Reverse(likes), id));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked.into_iter().map(|(id, _)| id).collect()
}
