use crate::core::{category::CategoryRef, distance::haversine_distance};
use crate::models::{CategorySelector, Coordinate, Listing, SearchCriteria};

/// Normalize a free-text query: trimmed and lowercased, `None` when blank
#[inline]
pub fn normalize_query(text: &str) -> Option<String> {
    let q = text.trim();
    if q.is_empty() {
        None
    } else {
        Some(q.to_lowercase())
    }
}

/// Check the listing against the category selector
#[inline]
pub fn matches_category(listing: &Listing, selector: &CategorySelector) -> bool {
    CategoryRef::of(listing).matches(selector)
}

/// Check the listing's name, address and category name against an already
/// normalized query (see [`normalize_query`])
///
/// Plain lowercase substring containment, no tokenization.
#[inline]
pub fn matches_normalized_text(listing: &Listing, query: &str) -> bool {
    listing.name.to_lowercase().contains(query)
        || listing.address.to_lowercase().contains(query)
        || listing
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(query))
}

/// Text predicate. A blank query matches everything.
#[inline]
pub fn matches_text(listing: &Listing, text: &str) -> bool {
    match normalize_query(text) {
        Some(q) => matches_normalized_text(listing, &q),
        None => true,
    }
}

/// Radius predicate. No origin means no radius constraint.
///
/// With an origin, listings without a finite coordinate never match.
#[inline]
pub fn matches_radius(listing: &Listing, origin: Option<Coordinate>, radius_km: f64) -> bool {
    let Some(origin) = origin else {
        return true;
    };

    match listing.usable_coordinate() {
        // NaN radius or distance compares false and drops the listing
        Some(coordinate) => haversine_distance(origin, coordinate) <= radius_km,
        None => false,
    }
}

/// Combined predicate: category AND text AND radius
#[inline]
pub fn matches(listing: &Listing, criteria: &SearchCriteria) -> bool {
    matches_category(listing, &criteria.category)
        && matches_text(listing, &criteria.text)
        && matches_radius(listing, criteria.origin, criteria.radius_km)
}
