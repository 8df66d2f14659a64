use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    CreateSessionRequest, DiscoverResponse, ErrorResponse, SearchCriteria, SearchSession, SessionEvent,
    SessionEventRequest, SessionResponse,
};
use crate::routes::{load_listings, validation_failed, AppState};
use crate::services::SessionError;

/// Configure search session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions", web::post().to(create_session))
        .route("/sessions/{id}", web::get().to(get_session))
        .route("/sessions/{id}", web::delete().to(delete_session))
        .route("/sessions/{id}/events", web::post().to(apply_event));
}

fn session_error(e: SessionError) -> HttpResponse {
    match e {
        SessionError::NotFound(id) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Session not found".to_string(),
            message: format!("No session with id {}", id),
            status_code: 404,
        }),
        SessionError::Store(e) => {
            tracing::error!("Session store failure: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Session store failure".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Open a search session
///
/// POST /api/v1/sessions
async fn create_session(state: web::Data<AppState>, req: web::Json<CreateSessionRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let criteria = SearchCriteria {
        text: String::new(),
        category: req.category.unwrap_or_default(),
        radius_km: state.discovery.clamp_radius(req.radius_km),
        origin: req.origin,
    };

    match state.sessions.create(criteria, req.sort.unwrap_or_default()) {
        Ok(session) => {
            tracing::info!("Opened search session {}", session.id);
            HttpResponse::Created().json(SessionResponse { session, results: None })
        }
        Err(e) => session_error(e),
    }
}

/// GET /api/v1/sessions/{id}
async fn get_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.sessions.load(&path) {
        Ok(session) => HttpResponse::Ok().json(SessionResponse { session, results: None }),
        Err(e) => session_error(e),
    }
}

/// DELETE /api/v1/sessions/{id}
async fn delete_session(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    state.sessions.remove(&path);
    tracing::info!("Closed search session {}", path);
    HttpResponse::NoContent().finish()
}

/// Fold the optional filter context of an event request into the session
fn update_context(state: &AppState, session: &mut SearchSession, req: &SessionEventRequest) {
    if let Some(origin) = req.origin {
        session.criteria.origin = Some(origin);
    }
    if let Some(category) = &req.category {
        session.criteria.category = category.clone();
    }
    if req.radius_km.is_some() {
        session.criteria.radius_km = state.discovery.clamp_radius(req.radius_km);
    }
    if let Some(sort) = req.sort {
        session.sort = sort;
    }
}

/// Apply an `input`, `submit` or `dismiss` event
///
/// POST /api/v1/sessions/{id}/events
///
/// Request body:
/// ```json
/// { "event": "input", "text": "kopi", "radiusKm": 3, "page": 1 }
/// ```
///
/// While the session is searching, the response also carries the requested
/// page of the live-filtered list.
async fn apply_event(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SessionEventRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let Some(event) = SessionEvent::parse(&req.event, req.text.clone()) else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Unknown event".to_string(),
            message: format!("Expected input, submit or dismiss, got {:?}", req.event),
            status_code: 400,
        });
    };

    // Load, apply, save is not atomic: concurrent events on one session are
    // last-write-wins.
    let mut session = match state.sessions.load(&path) {
        Ok(session) => session,
        Err(e) => return session_error(e),
    };
    update_context(&state, &mut session, &req);

    let listings = if event == SessionEvent::Dismiss {
        Vec::new()
    } else {
        match load_listings(&state, session.criteria.origin).await {
            Ok(listings) => listings,
            Err(response) => return response,
        }
    };

    session.apply(event, &listings, state.engine.top_n());

    if let Err(e) = state.sessions.save(&session) {
        return session_error(e);
    }

    let results = session.is_searching().then(|| {
        DiscoverResponse::from(state.engine.discover(&listings, &session.criteria, session.sort, req.page))
    });

    tracing::info!("Session {} handled {:?} event", session.id, req.event);

    HttpResponse::Ok().json(SessionResponse { session, results })
}
