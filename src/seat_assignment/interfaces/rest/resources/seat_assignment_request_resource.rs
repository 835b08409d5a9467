use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SeatAssignmentRequestResource {
    #[validate(length(min = 1, max = 1000))]
    pub user_ids: Vec<i64>,
}
