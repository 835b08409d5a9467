use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComplianceControlsDomainError {
    #[error("Invalid compliance controls registry: {}", .0.join("; "))]
    InvalidRegistry(Vec<String>),

    #[error("compliance controls manifest is invalid: {0}")]
    InvalidManifest(String),

    #[error("control id is invalid")]
    InvalidControlId,

    #[error("control '{0}' not found")]
    ControlNotFound(String),

    #[error("Expression does not match the name of the predefined control.")]
    ExpressionMismatch,

    #[error("expected a {expected} value for control '{control_id}'")]
    ValueTypeMismatch {
        control_id: String,
        expected: &'static str,
    },

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
