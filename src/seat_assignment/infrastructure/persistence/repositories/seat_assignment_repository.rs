use async_trait::async_trait;

use crate::seat_assignment::domain::model::{
    entities::add_on_purchase::AddOnPurchase,
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    value_objects::add_on_purchase_id::AddOnPurchaseId,
};

#[async_trait]
pub trait SeatAssignmentRepository: Send + Sync {
    /// Assigned user ids in ascending order.
    async fn assigned_user_ids(
        &self,
        purchase_id: AddOnPurchaseId,
    ) -> Result<Vec<i64>, SeatAssignmentDomainError>;

    /// Inserts the assignments atomically.
    ///
    /// Fails with `NotEnoughSeats` when the purchase row, read under a row lock, no longer has
    /// room for the ids that are not yet assigned.
    async fn insert_assignments(
        &self,
        purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<(), SeatAssignmentDomainError>;

    /// Returns the user ids whose assignment was deleted.
    async fn delete_assignments(
        &self,
        purchase_id: AddOnPurchaseId,
        user_ids: &[i64],
    ) -> Result<Vec<i64>, SeatAssignmentDomainError>;
}
