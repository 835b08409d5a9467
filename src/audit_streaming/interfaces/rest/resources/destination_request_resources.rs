use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateDestinationRequestResource {
    #[validate(length(min = 1, max = 72))]
    pub name: Option<String>,
    #[validate(url, length(max = 255))]
    pub destination_url: String,
    #[validate(length(min = 16, max = 24))]
    pub verification_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateDestinationRequestResource {
    #[validate(length(min = 1, max = 72))]
    pub name: Option<String>,
    #[validate(url, length(max = 255))]
    pub destination_url: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct AddStreamingHeaderRequestResource {
    #[validate(length(min = 1, max = 255))]
    pub key: String,
    #[validate(length(min = 1, max = 2000))]
    pub value: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EventTypeFiltersRequestResource {
    #[validate(length(min = 1))]
    pub event_type_filters: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct NamespaceFilterRequestResource {
    #[validate(range(min = 1))]
    pub group_id: Option<i64>,
    #[validate(range(min = 1))]
    pub project_id: Option<i64>,
}

fn default_active() -> bool {
    true
}
