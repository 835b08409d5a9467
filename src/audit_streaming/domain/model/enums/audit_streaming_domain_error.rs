use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditStreamingDomainError {
    #[error("audit_event_id and audit_event_json cannot be passed together")]
    AmbiguousAuditEventSource,

    #[error("audit_event_id or audit_event_json must be provided")]
    MissingAuditEventSource,

    #[error("event type is invalid")]
    InvalidEventType,

    #[error("audit event model class is invalid: {0}")]
    InvalidModelClass(String),

    #[error("destination url is invalid")]
    InvalidDestinationUrl,

    #[error("destination name is invalid")]
    InvalidDestinationName,

    #[error("verification token must be between 16 and 24 characters")]
    InvalidVerificationToken,

    #[error("header is invalid: {0}")]
    InvalidHeader(String),

    #[error("Headers are limited to 20 per destination.")]
    HeadersLimitExceeded,

    #[error("header key is already taken")]
    DuplicateHeaderKey,

    #[error("header not found")]
    HeaderNotFound,

    #[error("Couldn't find event type filters where audit event type(s): {}", .0.join(", "))]
    EventTypeFiltersNotFound(Vec<String>),

    #[error("destinations are limited to 5 per owner")]
    DestinationLimitExceeded,

    #[error("destination url is already taken")]
    DestinationUrlTaken,

    #[error("destination not found")]
    DestinationNotFound,

    #[error("group not found")]
    GroupNotFound,

    #[error("group must be a root group")]
    GroupIsNotRootGroup,

    #[error("namespace filter must belong to the destination group hierarchy")]
    NamespaceFilterOutsideHierarchy,

    #[error("namespace filter not found")]
    NamespaceFilterNotFound,

    #[error("x-gitlab-user-id and x-gitlab-user-name headers are required")]
    MissingActor,

    #[error("audit event is invalid: {0}")]
    InvalidAuditEvent(String),

    #[error("streaming queue unavailable: {0}")]
    QueueUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
