use crate::{
    application::tags::dto::{CreateTagRequest, TAG_FIELDS_REQUIRED},
    domain::tag::entity::Tag,
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

pub async fn create_tag(
    State(state): State<AppState>,
    body: Result<Json<CreateTagRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Tag>), AppError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection.body_text(), "Rejected tag body");
        AppError::ValidationError(TAG_FIELDS_REQUIRED.into())
    })?;
    let tag = state.tags.create(body).await?;
    tracing::info!(tag_id = %tag.id, state_code = %tag.state_code, "Tag created");
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn list_tags(
    State(state): State<AppState>,
    Path(state_code): Path<String>,
) -> Result<Json<Vec<Tag>>, AppError> {
    Ok(Json(state.tags.list_for_state(&state_code).await?))
}

pub async fn upvote_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
) -> Result<Json<Tag>, AppError> {
    let id = Uuid::parse_str(&tag_id)
        .map_err(|_| AppError::BadRequest("Invalid tag id".into()))?;
    Ok(Json(state.tags.upvote(id).await?))
}
