use crate::core::{
    filters::matches,
    pagination::{paginate, DEFAULT_PAGE_SIZE},
    ranking::{top_matches, with_distances, DEFAULT_TOP_N},
    sorting::sort_listings,
    suggestions::{suggestions, SuggestionLimits},
};
use crate::models::{Listing, Page, RankedResult, SearchCriteria, SortKey, Suggestion};

/// Filter `listings` by `criteria` and stable-sort the survivors by `sort`
///
/// Listings without a usable coordinate survive when no origin is given and
/// are dropped by the radius check otherwise. The input is not modified.
pub fn filter_and_sort(listings: &[Listing], criteria: &SearchCriteria, sort: SortKey) -> Vec<Listing> {
    let mut items: Vec<Listing> = listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .cloned()
        .collect();

    sort_listings(&mut items, sort, criteria.origin);
    items
}

/// Discovery orchestrator - the view-level entry points over the pure pipeline
///
/// # Pipeline Stages
/// 1. Category, text and radius predicates
/// 2. Stable sort by the requested key
/// 3. Pagination
/// 4. Distance decoration for rendering
///
/// Holds only presentation sizes; every call is a pure function of its
/// arguments.
#[derive(Debug, Clone, Copy)]
pub struct DiscoveryEngine {
    page_size: usize,
    top_n: usize,
    suggestion_limits: SuggestionLimits,
}

impl DiscoveryEngine {
    pub fn new(page_size: usize, top_n: usize, suggestion_limits: SuggestionLimits) -> Self {
        Self {
            page_size: page_size.max(1),
            top_n,
            suggestion_limits,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_TOP_N, SuggestionLimits::default())
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Live-filtered list for one page of the view
    ///
    /// # Arguments
    /// * `listings` - Catalog snapshot for this request
    /// * `criteria` - Text, category, radius and optional origin
    /// * `sort` - Requested ordering
    /// * `page` - 1-based page, clamped into range
    pub fn discover(
        &self,
        listings: &[Listing],
        criteria: &SearchCriteria,
        sort: SortKey,
        page: usize,
    ) -> Page<RankedResult> {
        let filtered = filter_and_sort(listings, criteria, sort);

        tracing::trace!(
            "Filtered {} of {} listings (sort: {:?}, origin: {})",
            filtered.len(),
            listings.len(),
            sort,
            criteria.origin.is_some()
        );

        let page = paginate(filtered, page, self.page_size);
        Page {
            items: with_distances(&page.items, criteria.origin),
            page: page.page,
            page_count: page.page_count,
            total: page.total,
        }
    }

    /// Cards for a submitted search, see [`top_matches`]
    pub fn top_matches(&self, listings: &[Listing], criteria: &SearchCriteria) -> Vec<RankedResult> {
        top_matches(listings, criteria, self.top_n)
    }

    /// Dropdown suggestions while typing
    pub fn suggestions(&self, listings: &[Listing], category_names: &[String], text: &str) -> Vec<Suggestion> {
        suggestions(listings, category_names, text, self.suggestion_limits)
    }
}

impl Default for DiscoveryEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
