use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{Json, extract::State};

pub async fn get_geojson(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    Ok(Json(state.geojson.load().await?))
}
