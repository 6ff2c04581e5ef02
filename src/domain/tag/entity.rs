use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A crowd-sourced label attached to a state, ranked by upvotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub state_code: String,
    pub tag_name: String,
    pub upvotes: i32,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(state_code: String, tag_name: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            state_code,
            tag_name,
            upvotes: 0,
            created_at: Utc::now(),
        }
    }
}
