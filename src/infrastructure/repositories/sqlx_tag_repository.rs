use crate::domain::{
    shared::errors::DomainError,
    tag::{entity::Tag, repository::TagRepository},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

const TAG_COLUMNS: &str = "id, state_code, tag_name, upvotes, created_at";

pub struct SqlxTagRepository {
    pub pool: PgPool,
}

impl SqlxTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for SqlxTagRepository {
    #[instrument(skip(self, tag), fields(state_code = %tag.state_code))]
    async fn create(&self, tag: &Tag) -> Result<Tag, DomainError> {
        sqlx::query_as::<_, Tag>(&format!(
            "INSERT INTO tags (id, state_code, tag_name, upvotes, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {TAG_COLUMNS}"
        ))
        .bind(tag.id)
        .bind(&tag.state_code)
        .bind(&tag.tag_name)
        .bind(tag.upvotes)
        .bind(tag.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn find_by_state(&self, state_code: &str) -> Result<Vec<Tag>, DomainError> {
        sqlx::query_as::<_, Tag>(&format!(
            "SELECT {TAG_COLUMNS} FROM tags \
             WHERE state_code = $1 \
             ORDER BY upvotes DESC, created_at ASC"
        ))
        .bind(state_code)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn upvote(&self, id: Uuid) -> Result<Option<Tag>, DomainError> {
        sqlx::query_as::<_, Tag>(&format!(
            "UPDATE tags SET upvotes = upvotes + 1 WHERE id = $1 RETURNING {TAG_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }
}
