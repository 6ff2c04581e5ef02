use super::dto::{CreateTagRequest, TAG_FIELDS_REQUIRED};
use crate::domain::{
    shared::errors::DomainError,
    tag::{entity::Tag, repository::TagRepository},
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct TagUseCase {
    repository: Arc<dyn TagRepository>,
}

impl TagUseCase {
    pub fn new(repository: Arc<dyn TagRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateTagRequest) -> Result<Tag, DomainError> {
        request
            .validate()
            .map_err(|_| DomainError::ValidationError(TAG_FIELDS_REQUIRED.into()))?;

        let tag = Tag::new(request.state_code, request.tag_name);
        self.repository.create(&tag).await
    }

    pub async fn list_for_state(&self, state_code: &str) -> Result<Vec<Tag>, DomainError> {
        self.repository.find_by_state(state_code).await
    }

    pub async fn upvote(&self, id: Uuid) -> Result<Tag, DomainError> {
        self.repository
            .upvote(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("Tag not found".into()))
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}
