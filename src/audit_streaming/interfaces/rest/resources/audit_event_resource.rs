use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuditEventResource {
    pub id: String,
    pub persisted: bool,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub author_id: i64,
    pub author_name: String,
    pub target_type: Option<String>,
    pub target_details: Option<String>,
    #[schema(value_type = Object)]
    pub details: Value,
    pub created_at: String,
}
