use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeatAssignmentDomainError {
    #[error("INCOMPATIBLE_ADD_ON")]
    IncompatibleAddOn,

    #[error("INVALID_USER_ID_PRESENT")]
    InvalidUserIdPresent(Vec<i64>),

    #[error("NOT_ENOUGH_SEATS")]
    NotEnoughSeats,

    #[error("ASSIGNMENT_LOCKED")]
    AssignmentLocked,

    #[error("add-on purchase not found")]
    AddOnPurchaseNotFound,

    #[error("user_ids must not be empty")]
    EmptyUserIds,

    #[error("user id must be positive")]
    InvalidUserId,

    #[error("add-on purchase id must be positive")]
    InvalidAddOnPurchaseId,

    #[error("add-on name is invalid: {0}")]
    InvalidAddOnName(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
