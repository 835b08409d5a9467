use async_trait::async_trait;

use crate::seat_assignment::domain::model::{
    entities::add_on_purchase::AddOnPurchase,
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    value_objects::add_on_purchase_id::AddOnPurchaseId,
};

#[async_trait]
pub trait AddOnPurchaseRepository: Send + Sync {
    async fn find_by_id(
        &self,
        id: AddOnPurchaseId,
    ) -> Result<Option<AddOnPurchase>, SeatAssignmentDomainError>;
}
