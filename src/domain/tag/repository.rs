use super::entity::Tag;
use crate::domain::shared::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create(&self, tag: &Tag) -> Result<Tag, DomainError>;
    /// Tags for a state, most upvoted first.
    async fn find_by_state(&self, state_code: &str) -> Result<Vec<Tag>, DomainError>;
    /// Atomically add one upvote. `None` when no tag has this id.
    async fn upvote(&self, id: Uuid) -> Result<Option<Tag>, DomainError>;
    async fn ping(&self) -> Result<(), DomainError>;
}
