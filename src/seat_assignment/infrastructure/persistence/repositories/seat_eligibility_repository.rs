use async_trait::async_trait;

use crate::seat_assignment::domain::model::{
    entities::add_on_purchase::AddOnPurchase,
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
};

#[async_trait]
pub trait SeatEligibilityRepository: Send + Sync {
    /// Returns the subset of `user_ids` that may hold a seat of `purchase`.
    async fn eligible_user_ids(
        &self,
        purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<Vec<i64>, SeatAssignmentDomainError>;
}
