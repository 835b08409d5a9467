use crate::seat_assignment::domain::model::{
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    value_objects::add_on_purchase_id::AddOnPurchaseId,
};

#[derive(Clone, Debug)]
pub struct BulkAssignSeatsCommand {
    add_on_purchase_id: AddOnPurchaseId,
    user_ids: Vec<i64>,
}

impl BulkAssignSeatsCommand {
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

/// Rejects empty or non-positive ids and drops duplicates, keeping first-seen order.
pub(crate) fn normalize_user_ids(user_ids: Vec<i64>) -> Result<Vec<i64>, SeatAssignmentDomainError> {
    if user_ids.is_empty() {
        return Err(SeatAssignmentDomainError::EmptyUserIds);
    }
    if user_ids.iter().any(|id| *id <= 0) {
        return Err(SeatAssignmentDomainError::InvalidUserId);
    }

    let mut unique = Vec::with_capacity(user_ids.len());
    for id in user_ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    Ok(unique)
}
