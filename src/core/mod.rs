// Core algorithm exports
pub mod category;
pub mod distance;
pub mod engine;
pub mod filters;
pub mod highlight;
pub mod pagination;
pub mod price;
pub mod ranking;
pub mod session;
pub mod sorting;
pub mod suggestions;

pub use category::{categories_to_show, CategoryRef};
pub use distance::{haversine_distance, listing_distance, try_distance};
pub use engine::{filter_and_sort, DiscoveryEngine};
pub use filters::{matches, matches_category, matches_radius, matches_text};
pub use highlight::{highlight, Segment};
pub use pagination::paginate;
pub use ranking::top_matches;
pub use sorting::{collate, sort_listings};
pub use suggestions::{suggestions, SuggestionLimits};
