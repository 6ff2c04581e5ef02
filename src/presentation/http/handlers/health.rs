use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    gsdp_loaded: bool,
    tag_store: &'static str,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let tag_store = match state.tags.ping().await {
        Ok(()) => "up",
        Err(e) => {
            tracing::error!("Health check failed: tag store unreachable: {}", e);
            "down"
        }
    };

    let status = if tag_store == "up" {
        "healthy"
    } else {
        "unhealthy"
    };

    let response = HealthResponse {
        status,
        gsdp_loaded: state.gsdp.is_loaded(),
        tag_store,
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}
