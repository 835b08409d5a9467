use crate::seat_assignment::domain::model::{
    commands::bulk_assign_seats_command::normalize_user_ids,
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    value_objects::add_on_purchase_id::AddOnPurchaseId,
};

#[derive(Clone, Debug)]
pub struct BulkUnassignSeatsCommand {
    add_on_purchase_id: AddOnPurchaseId,
    user_ids: Vec<i64>,
}

impl BulkUnassignSeatsCommand {
    pub fn new(add_on_purchase_id: i64, user_ids: Vec<i64>) -> Result<Self, SeatAssignmentDomainError> {
        Ok(Self {
            add_on_purchase_id: AddOnPurchaseId::new(add_on_purchase_id)?,
            user_ids: normalize_user_ids(user_ids)?,
        })
    }

    pub fn add_on_purchase_id(&self) -> AddOnPurchaseId {
        self.add_on_purchase_id
    }
    pub fn user_ids(&self) -> &[i64] {
        &self.user_ids
    }
}
