use crate::seat_assignment::domain::model::enums::seat_assignment_domain_error::SeatAssignmentDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AddOnPurchaseId(i64);

impl AddOnPurchaseId {
    pub fn new(value: i64) -> Result<Self, SeatAssignmentDomainError> {
        if value <= 0 {
            return Err(SeatAssignmentDomainError::InvalidAddOnPurchaseId);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
