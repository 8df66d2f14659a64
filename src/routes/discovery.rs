use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{categories_to_show, top_matches};
use crate::models::{
    CategoriesResponse, DiscoverRequest, DiscoverResponse, HealthResponse, SearchCriteria, SuggestionsRequest,
    SuggestionsResponse, TopMatchesRequest, TopMatchesResponse,
};
use crate::routes::{load_listings, validation_failed, AppState};

/// Configure discovery routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/categories", web::get().to(list_categories))
        .route("/discovery/search", web::post().to(search))
        .route("/discovery/top", web::post().to(top))
        .route("/discovery/suggestions", web::post().to(suggest));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Category names for the filter selector
///
/// A failing category provider is not fatal: the configured allowed list is
/// shown instead.
pub(crate) async fn category_names(state: &AppState) -> Vec<String> {
    let from_api = match state.catalog.fetch_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::warn!("Failed to fetch categories, using allowed list: {}", e);
            Vec::new()
        }
    };

    categories_to_show(&from_api, &state.discovery.allowed_categories)
}

/// GET /api/v1/categories
async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    let categories = category_names(&state).await;
    HttpResponse::Ok().json(CategoriesResponse { categories })
}

/// Filtered, sorted and paginated listings
///
/// POST /api/v1/discovery/search
///
/// Request body:
/// ```json
/// {
///   "text": "kopi",
///   "category": "all",
///   "radiusKm": 5,
///   "origin": { "latitude": 5.54, "longitude": 95.34 },
///   "sort": "distance",
///   "page": 1
/// }
/// ```
async fn search(state: web::Data<AppState>, req: web::Json<DiscoverRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let criteria = SearchCriteria {
        text: req.text,
        category: req.category,
        radius_km: state.discovery.clamp_radius(req.radius_km),
        origin: req.origin,
    };

    tracing::info!(
        "Discovery search: text={:?}, category={:?}, radius={}km, sort={:?}, page={}",
        criteria.text,
        criteria.category,
        criteria.radius_km,
        req.sort,
        req.page
    );

    let listings = match load_listings(&state, criteria.origin).await {
        Ok(listings) => listings,
        Err(response) => return response,
    };

    let page = state.engine.discover(&listings, &criteria, req.sort, req.page);
    tracing::debug!("Returning {} of {} results", page.items.len(), page.total);

    HttpResponse::Ok().json(DiscoverResponse::from(page))
}

/// Nearest matches for a submitted search
///
/// POST /api/v1/discovery/top
async fn top(state: web::Data<AppState>, req: web::Json<TopMatchesRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let limit = req.limit.unwrap_or_else(|| state.engine.top_n());
    let criteria = SearchCriteria {
        text: req.text,
        origin: req.origin,
        ..SearchCriteria::default()
    };

    tracing::info!("Top matches: text={:?}, limit={}", criteria.text, limit);

    let listings = match load_listings(&state, criteria.origin).await {
        Ok(listings) => listings,
        Err(response) => return response,
    };

    HttpResponse::Ok().json(TopMatchesResponse {
        cards: top_matches(&listings, &criteria, limit),
    })
}

/// Live suggestions while typing
///
/// POST /api/v1/discovery/suggestions
async fn suggest(state: web::Data<AppState>, req: web::Json<SuggestionsRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    if req.text.trim().is_empty() {
        return HttpResponse::Ok().json(SuggestionsResponse { suggestions: Vec::new() });
    }

    let listings = match load_listings(&state, None).await {
        Ok(listings) => listings,
        Err(response) => return response,
    };
    let categories = category_names(&state).await;

    HttpResponse::Ok().json(SuggestionsResponse {
        suggestions: state.engine.suggestions(&listings, &categories, &req.text),
    })
}
