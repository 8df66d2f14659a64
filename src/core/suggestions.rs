use std::collections::HashSet;

use crate::core::filters::normalize_query;
use crate::models::{Listing, Suggestion};

/// Caps for the suggestion dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionLimits {
    /// Max entries from each source (names, addresses, categories)
    pub per_group: usize,
    /// Max entries overall
    pub total: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            per_group: 10,
            total: 12,
        }
    }
}

fn listing_suggestion(listing: &Listing) -> Suggestion {
    Suggestion::Listing {
        id: listing.id.clone(),
        label: listing.name.clone(),
        coordinate: listing.usable_coordinate(),
        address: listing.address.clone(),
        category: listing.category.clone(),
    }
}

/// Suggestions for a partially typed query
///
/// Listings matched by name come first, then listings matched by address that
/// were not already suggested, then matching category names. Blank query
/// gives no suggestions.
pub fn suggestions(
    listings: &[Listing],
    category_names: &[String],
    text: &str,
    limits: SuggestionLimits,
) -> Vec<Suggestion> {
    let Some(q) = normalize_query(text) else {
        return Vec::new();
    };

    let by_name: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.name.to_lowercase().contains(&q))
        .take(limits.per_group)
        .collect();

    let mut seen: HashSet<&str> = by_name.iter().map(|l| l.id.as_str()).collect();
    let mut by_address: Vec<&Listing> = Vec::new();
    for listing in listings {
        if by_address.len() >= limits.per_group {
            break;
        }
        let address = listing.address.trim();
        if address.is_empty() || !address.to_lowercase().contains(&q) {
            continue;
        }
        if seen.insert(listing.id.as_str()) {
            by_address.push(listing);
        }
    }

    let by_category = category_names
        .iter()
        .filter(|name| name.to_lowercase().contains(&q))
        .take(limits.per_group)
        .map(|name| Suggestion::Category { name: name.clone() });

    by_name
        .into_iter()
        .chain(by_address)
        .map(listing_suggestion)
        .chain(by_category)
        .take(limits.total)
        .collect()
}
