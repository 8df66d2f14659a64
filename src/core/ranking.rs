use crate::core::{
    distance::listing_distance,
    filters::{matches_normalized_text, normalize_query},
    sorting::cmp_valid_first,
};
use crate::models::{Coordinate, Listing, RankedResult, SearchCriteria};

/// Default number of cards shown after a search is submitted
pub const DEFAULT_TOP_N: usize = 3;

/// Attach the distance from `origin` to each listing, keeping order
pub fn with_distances<'a, I>(listings: I, origin: Option<Coordinate>) -> Vec<RankedResult>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .map(|listing| RankedResult {
            distance_km: listing_distance(origin, listing),
            listing: listing.clone(),
        })
        .collect()
}

/// Nearest matches for an explicitly submitted text search
///
/// Searches the whole catalog by text only: the category and radius parts of
/// `criteria` are ignored. With an origin the matches are ordered nearest
/// first (ties and unlocated listings keep input order, unlocated last);
/// without one the input order is kept. At most `n` results, never padded.
pub fn top_matches(listings: &[Listing], criteria: &SearchCriteria, n: usize) -> Vec<RankedResult> {
    let query = normalize_query(&criteria.text);
    let pool = listings
        .iter()
        .filter(|l| query.as_deref().map_or(true, |q| matches_normalized_text(l, q)));

    let mut ranked = with_distances(pool, criteria.origin);

    if criteria.origin.is_some() {
        ranked.sort_by(|a, b| cmp_valid_first(a.distance_km, b.distance_km));
    }

    ranked.truncate(n);
    ranked
}
