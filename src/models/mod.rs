// Model exports
pub mod domain;
pub mod requests;
pub mod responses;
pub mod session;

pub use domain::{Category, CategorySelector, Coordinate, Listing, Page, Price, RankedResult, SearchCriteria, SortKey, Suggestion};
pub use requests::{CreateSessionRequest, DiscoverRequest, SessionEventRequest, SuggestionsRequest, TopMatchesRequest};
pub use responses::{CategoriesResponse, DiscoverResponse, ErrorResponse, HealthResponse, SessionResponse, SuggestionsResponse, TopMatchesResponse};
pub use session::{SearchSession, SessionEvent, SessionState};
