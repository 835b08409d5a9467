use rand::{Rng, distributions::Alphanumeric};

use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

const MINIMUM_TOKEN_LENGTH: usize = 16;
const MAXIMUM_TOKEN_LENGTH: usize = 24;

#[derive(Clone, Eq, PartialEq)]
pub struct VerificationToken(String);

impl VerificationToken {
    pub fn new(value: String) -> Result<Self, AuditStreamingDomainError> {
        let length = value.chars().count();
        if !(MINIMUM_TOKEN_LENGTH..=MAXIMUM_TOKEN_LENGTH).contains(&length)
            || value.chars().any(char::is_whitespace)
        {
            return Err(AuditStreamingDomainError::InvalidVerificationToken);
        }
        Ok(Self(value))
    }

    pub fn generate() -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(MAXIMUM_TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("VerificationToken([FILTERED])")
    }
}
