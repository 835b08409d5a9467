use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct StreamAuditEventRequestResource {
    #[validate(length(min = 1, max = 255))]
    pub event_type: String,
    pub audit_event_id: Option<i64>,
    #[schema(value_type = Option<Object>)]
    pub audit_event_json: Option<Value>,
    pub model_class: Option<String>,
}
