use thiserror::Error;

/// Failure of a single delivery attempt to one destination.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum AuditEventDeliveryError {
    #[error("destination uri is invalid: {0}")]
    InvalidUri(String),

    #[error("destination header is invalid: {0}")]
    InvalidHeader(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("destination responded with status {0}")]
    Status(u16),
}
