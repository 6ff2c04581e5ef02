use crate::{
    domain::gsdp::record::GsdpRecord,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn list_years(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.gsdp.list_years().await?))
}

/// Records for an exact year label or the first label starting with it.
/// An unknown year is an empty list, not an error.
pub async fn get_year_records(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<GsdpRecord>>, AppError> {
    let records = state.gsdp.records_for_year(&year).await?;
    tracing::debug!(year = %year, records = records.len(), "GSDP lookup");
    Ok(Json(records))
}
