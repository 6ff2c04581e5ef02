use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// Returned for any create body that is not two non-empty strings.
pub const TAG_FIELDS_REQUIRED: &str = "State code and tag name are required";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateTagRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub state_code: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub tag_name: String,
}
