use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SeatAssignmentErrorResponseResource {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub user_ids: Vec<i64>,
}
