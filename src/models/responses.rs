use serde::{Deserialize, Serialize};
use crate::models::domain::{Page, RankedResult, Suggestion};
use crate::models::session::SearchSession;

/// Response for the discovery search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub results: Vec<RankedResult>,
    pub page: usize,
    #[serde(rename = "pageCount")]
    pub page_count: usize,
    pub total: usize,
}

impl From<Page<RankedResult>> for DiscoverResponse {
    fn from(page: Page<RankedResult>) -> Self {
        Self {
            results: page.items,
            page: page.page,
            page_count: page.page_count,
            total: page.total,
        }
    }
}

/// Response for the top matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMatchesResponse {
    pub cards: Vec<RankedResult>,
}

/// Response for the suggestions endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Category names offered in the filter selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Session state plus the live-filtered page while the user is searching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: SearchSession,
    pub results: Option<DiscoverResponse>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
