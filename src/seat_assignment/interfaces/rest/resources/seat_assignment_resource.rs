use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::seat_assignment::domain::model::value_objects::seat_usage::SeatUsage;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SeatAssignmentResource {
    pub add_on_purchase_id: i64,
    pub user_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SeatUsageResource {
    pub add_on_purchase_id: i64,
    pub add_on: String,
    pub namespace_id: Option<i64>,
    pub quantity: i64,
    pub assigned_count: usize,
    pub available: i64,
    pub assigned_user_ids: Vec<i64>,
}

impl From<SeatUsage> for SeatUsageResource {
    fn from(usage: SeatUsage) -> Self {
        Self {
            add_on_purchase_id: usage.purchase.id().value(),
            add_on: usage.purchase.add_on().as_str().to_string(),
            namespace_id: usage.purchase.namespace_id(),
            quantity: usage.purchase.quantity(),
            assigned_count: usage.assigned_count(),
            available: usage.available(),
            assigned_user_ids: usage.assigned_user_ids,
        }
    }
}
