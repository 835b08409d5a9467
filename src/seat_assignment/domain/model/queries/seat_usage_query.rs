use crate::seat_assignment::domain::model::{
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    value_objects::add_on_purchase_id::AddOnPurchaseId,
};

#[derive(Clone, Debug)]
pub struct SeatUsageQuery {
    add_on_purchase_id: AddOnPurchaseId,
}

impl SeatUsageQuery {
    pub fn new(add_on_purchase_id: i64) -> Result<Self, SeatAssignmentDomainError> {
        Ok(Self {
            add_on_purchase_id: AddOnPurchaseId::new(add_on_purchase_id)?,
        })
    }

    pub fn add_on_purchase_id(&self) -> AddOnPurchaseId {
        self.add_on_purchase_id
    }
}
