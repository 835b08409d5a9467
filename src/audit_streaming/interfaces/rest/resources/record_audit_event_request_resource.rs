use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

lazy_static! {
    static ref EVENT_TYPE_REGEX: Regex = Regex::new(r"^[a-z0-9_]+$").expect("valid regex");
    static ref SCOPE_TYPE_REGEX: Regex =
        Regex::new(r"^(instance|group|project|user)$").expect("valid regex");
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct RecordAuditEventRequestResource {
    #[validate(length(min = 1, max = 255), regex(path = *EVENT_TYPE_REGEX))]
    pub event_type: String,
    #[validate(regex(path = *SCOPE_TYPE_REGEX))]
    pub scope_type: String,
    pub scope_id: Option<i64>,
    pub author_id: i64,
    #[validate(length(min = 1))]
    pub author_name: String,
    pub entity_path: Option<String>,
    pub target_id: Option<i64>,
    pub target_type: Option<String>,
    pub target_details: Option<String>,
    pub ip_address: Option<String>,
    #[schema(value_type = Object)]
    #[serde(default)]
    pub details: Value,
    #[serde(default)]
    pub stream_only: bool,
}
