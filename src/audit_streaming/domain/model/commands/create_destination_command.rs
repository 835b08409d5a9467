use crate::audit_streaming::domain::model::{
    enums::{
        audit_streaming_domain_error::AuditStreamingDomainError, destination_level::DestinationLevel,
    },
    value_objects::{
        audit_actor::AuditActor, destination_name::DestinationName,
        destination_url::DestinationUrl, verification_token::VerificationToken,
    },
};

#[derive(Clone, Debug)]
pub struct CreateDestinationCommand {
    level: DestinationLevel,
    name: Option<DestinationName>,
    destination_url: DestinationUrl,
    verification_token: Option<VerificationToken>,
    actor: AuditActor,
}

pub struct CreateDestinationCommandParts {
    pub level: DestinationLevel,
    pub name: Option<String>,
    pub destination_url: String,
    pub verification_token: Option<String>,
    pub actor: AuditActor,
}

impl CreateDestinationCommand {
    pub fn new(parts: CreateDestinationCommandParts) -> Result<Self, AuditStreamingDomainError> {
        Ok(Self {
            level: parts.level,
            name: parts.name.map(DestinationName::new).transpose()?,
            destination_url: DestinationUrl::new(parts.destination_url)?,
            verification_token: parts
                .verification_token
                .map(VerificationToken::new)
                .transpose()?,
            actor: parts.actor,
        })
    }

    pub fn level(&self) -> DestinationLevel {
        self.level
    }
    pub fn name(&self) -> Option<&DestinationName> {
        self.name.as_ref()
    }
    pub fn destination_url(&self) -> &DestinationUrl {
        &self.destination_url
    }
    pub fn verification_token(&self) -> Option<&VerificationToken> {
        self.verification_token.as_ref()
    }
    pub fn actor(&self) -> &AuditActor {
        &self.actor
    }
}
