// Route exports
pub mod discovery;
pub mod sessions;

use actix_web::{web, HttpResponse};
use std::sync::Arc;
use std::time::Duration;

use crate::config::{DiscoverySettings, Settings};
use crate::core::DiscoveryEngine;
use crate::models::{Coordinate, ErrorResponse, Listing};
use crate::services::{CatalogClient, CatalogError, MemoryStore, SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub sessions: SessionStore,
    pub engine: DiscoveryEngine,
    pub discovery: Arc<DiscoverySettings>,
}

impl AppState {
    /// Wire the catalog client, session store and engine from settings
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(
            settings.catalog.base_url.clone(),
            Duration::from_secs(settings.catalog.timeout_secs),
        )?;

        let store = MemoryStore::new(settings.sessions.capacity, settings.sessions.ttl_secs);
        let discovery = &settings.discovery;
        let engine = DiscoveryEngine::new(
            discovery.page_size,
            discovery.top_matches,
            discovery.suggestion_limits(),
        );

        Ok(Self {
            catalog: Arc::new(catalog),
            sessions: SessionStore::new(Arc::new(store)),
            engine,
            discovery: Arc::new(discovery.clone()),
        })
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(discovery::configure)
            .configure(sessions::configure),
    );
}

/// Fetch the catalog snapshot for one request, mapping failure to a 502
pub(crate) async fn load_listings(
    state: &AppState,
    origin: Option<Coordinate>,
) -> Result<Vec<Listing>, HttpResponse> {
    state.catalog.fetch_listings(origin).await.map_err(|e| {
        tracing::error!("Failed to fetch listings: {}", e);
        HttpResponse::BadGateway().json(ErrorResponse {
            error: "Catalog unavailable".to_string(),
            message: e.to_string(),
            status_code: 502,
        })
    })
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    tracing::info!("Validation failed: field_errors={:?}", errors);
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}
