use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CategorySelector, Coordinate, SortKey};

/// Request for the filtered, sorted and paginated listing view
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoverRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub text: String,
    #[serde(default)]
    pub category: CategorySelector,
    #[serde(rename = "radiusKm", default)]
    #[validate(range(min = 0.0))]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub origin: Option<Coordinate>,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// Request for the nearest-match cards of a submitted search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub text: String,
    #[serde(default)]
    pub origin: Option<Coordinate>,
    #[serde(default)]
    #[validate(range(min = 1, max = 50))]
    pub limit: Option<usize>,
}

/// Request for live suggestions while typing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestionsRequest {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub text: String,
}

/// Request to open a search session
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateSessionRequest {
    #[serde(default)]
    pub origin: Option<Coordinate>,
    #[serde(default)]
    pub category: Option<CategorySelector>,
    #[serde(rename = "radiusKm", default)]
    #[validate(range(min = 0.0))]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub sort: Option<SortKey>,
}

/// Event applied to an open session
///
/// `event` is one of `input`, `submit`, `dismiss`. The optional context fields
/// update the session's filter context before the event is applied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SessionEventRequest {
    #[validate(length(min = 1))]
    pub event: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub text: Option<String>,
    #[serde(default)]
    pub origin: Option<Coordinate>,
    #[serde(default)]
    pub category: Option<CategorySelector>,
    #[serde(rename = "radiusKm", default)]
    #[validate(range(min = 0.0))]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: usize,
}
