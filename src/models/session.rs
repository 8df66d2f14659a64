use serde::{Deserialize, Serialize};

use super::domain::{RankedResult, SearchCriteria, SortKey};

/// Where a search session is in the type / submit / dismiss cycle
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Idle,
    Typing,
    /// Search was submitted; the nearest-match cards are on screen
    Submitted { cards: Vec<RankedResult> },
}

/// User input driving a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Input(String),
    Submit,
    Dismiss,
}

/// Search session persisted between requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSession {
    pub id: String,
    pub state: SessionState,
    pub criteria: SearchCriteria,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
