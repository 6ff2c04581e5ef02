use super::{
    handlers::{docs, geojson, gsdp, health, tags},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post, put},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Map data
        .route("/api/data/geojson", get(geojson::get_geojson))
        .route("/api/data/gsdp/years", get(gsdp::list_years))
        .route("/api/data/gsdp/{year}", get(gsdp::get_year_records))
        // Tags
        .route("/api/tags", post(tags::create_tag))
        .route("/api/tags/upvote/{tag_id}", put(tags::upvote_tag))
        .route("/api/tags/{state_code}", get(tags::list_tags))
        // Docs
        .route("/api/docs", get(docs::api_docs))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
