use std::path::Path;

use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::{auth, errors::JsonApiError, openapi::ApiDoc, state::ServerState};

pub mod images;
pub mod skills;
pub mod projects;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Presence check shared by the handlers: absent and blank both count as missing.
pub(crate) fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str, JsonApiError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(JsonApiError::bad_request(format!("'{field}' is required"))),
    }
}

/// Where the single-page frontend lives, if it should be served at all.
#[derive(Clone, Debug)]
pub struct Frontend {
    pub dir: String,
    /// Unknown paths fall back to `index.html` for client-side routing
    pub spa_fallback: bool,
}

/// Build the full application router: public reads, key-protected writes,
/// API docs and the static frontend.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend: Option<Frontend>) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/images", get(images::list))
        .route("/api/skills", get(skills::list))
        .route("/api/projects", get(projects::list))
        .route("/api/projects/:id", get(projects::get));

    let protected = Router::new()
        .route("/api/images", post(images::create).delete(images::delete))
        .route("/api/skills", post(skills::create).delete(skills::delete))
        .route("/api/skills/:id", patch(skills::update))
        .route("/api/projects", post(projects::create))
        .route("/api/projects/:id", patch(projects::update).delete(projects::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_api_key));

    let mut router = public
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state);

    if let Some(frontend) = frontend {
        router = if frontend.spa_fallback {
            let index = Path::new(&frontend.dir).join("index.html");
            router.fallback_service(ServeDir::new(&frontend.dir).fallback(ServeFile::new(index)))
        } else {
            router.fallback_service(ServeDir::new(&frontend.dir))
        };
    }

    router
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
