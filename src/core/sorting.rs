use std::cmp::Ordering;

use feruca::Collator;

use crate::core::distance::listing_distance;
use crate::models::{Coordinate, Listing, SortKey};

#[inline]
fn valid(v: Option<f64>) -> Option<f64> {
    v.filter(|v| !v.is_nan())
}

/// Compare two optional keys, ascending, with missing or NaN keys after
/// every valid one. Two invalid keys compare equal so a stable sort keeps
/// their input order.
#[inline]
pub fn cmp_valid_first(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (valid(a), valid(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending for valid keys; missing or NaN keys still go last
#[inline]
pub fn cmp_valid_first_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (valid(a), valid(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Locale-aware name comparison for user-facing lists
///
/// Unicode Collation Algorithm with the CLDR root tailoring: accents and
/// case only break ties (`"Éclair" < "Zebra"`, `"kopi" < "Kopi"`), the way a
/// browser's default `localeCompare` orders them.
pub fn collate(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// Stable in-place sort of `items` by `key`
///
/// `origin` is only consulted for [`SortKey::Distance`]; without one that key
/// leaves the input order untouched on purpose, since there is nothing to
/// measure from.
pub fn sort_listings(items: &mut [Listing], key: SortKey, origin: Option<Coordinate>) {
    match key {
        SortKey::PriceAsc => items.sort_by(|a, b| {
            cmp_valid_first(
                a.price.map(|p| p.ascending_key()),
                b.price.map(|p| p.ascending_key()),
            )
        }),
        SortKey::PriceDesc => items.sort_by(|a, b| {
            cmp_valid_first_desc(
                a.price.map(|p| p.descending_key()),
                b.price.map(|p| p.descending_key()),
            )
        }),
        SortKey::Distance => {
            if origin.is_none() {
                return;
            }
            // Distances are finite and non-negative, so their bit patterns
            // order like the values. Unlocated listings get the max class.
            items.sort_by_cached_key(|l| match listing_distance(origin, l) {
                Some(d) => (0u8, d.to_bits()),
                None => (1u8, 0),
            });
        }
        SortKey::NameAsc => {
            let mut collator = Collator::default();
            items.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
        }
        SortKey::None => {}
    }
}
