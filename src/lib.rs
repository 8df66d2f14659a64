//! UMKM Nearby - location-aware discovery service for small-business listings
//!
//! Filters a catalog snapshot by free text, category and distance from the
//! user, sorts and pages the survivors, and ranks the nearest matches for a
//! submitted search.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{filter_and_sort, haversine_distance, top_matches, DiscoveryEngine};
pub use crate::models::{CategorySelector, Coordinate, Listing, Page, RankedResult, SearchCriteria, SortKey};
