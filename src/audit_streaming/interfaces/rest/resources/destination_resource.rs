use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StreamingHeaderResource {
    pub key: String,
    pub value: String,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct NamespaceFilterResource {
    pub namespace_type: String,
    pub namespace_id: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct DestinationResource {
    pub id: String,
    pub level: String,
    pub group_id: Option<i64>,
    pub name: String,
    pub destination_url: String,
    pub verification_token: String,
    pub active: bool,
    pub headers: Vec<StreamingHeaderResource>,
    pub event_type_filters: Vec<String>,
    pub namespace_filter: Option<NamespaceFilterResource>,
    pub created_at: String,
}
