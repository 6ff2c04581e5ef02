use crate::domain::{
    shared::errors::DomainError,
    tag::{entity::Tag, repository::TagRepository},
};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local tag store, used when no database is configured.
#[derive(Default)]
pub struct InMemoryTagRepository {
    tags: RwLock<Vec<Tag>>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn create(&self, tag: &Tag) -> Result<Tag, DomainError> {
        self.tags.write().await.push(tag.clone());
        Ok(tag.clone())
    }

    async fn find_by_state(&self, state_code: &str) -> Result<Vec<Tag>, DomainError> {
        let mut tags: Vec<Tag> = self
            .tags
            .read()
            .await
            .iter()
            .filter(|tag| tag.state_code == state_code)
            .cloned()
            .collect();
        // stable: equal upvotes stay in creation order
        tags.sort_by(|a, b| b.upvotes.cmp(&a.upvotes));
        Ok(tags)
    }

    async fn upvote(&self, id: Uuid) -> Result<Option<Tag>, DomainError> {
        let mut tags = self.tags.write().await;
        Ok(tags.iter_mut().find(|tag| tag.id == id).map(|tag| {
            tag.upvotes += 1;
            tag.clone()
        }))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
