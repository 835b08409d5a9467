use lazy_static::lazy_static;
use regex::Regex;

use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

lazy_static! {
    static ref DESTINATION_URL_REGEX: Regex =
        Regex::new(r"^https?://[^\s/?#:]+(:\d{1,5})?([/?#]\S*)?$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DestinationUrl(String);

impl DestinationUrl {
    pub fn new(value: String) -> Result<Self, AuditStreamingDomainError> {
        let trimmed = value.trim();
        if trimmed.len() > 255 || !DESTINATION_URL_REGEX.is_match(trimmed) {
            return Err(AuditStreamingDomainError::InvalidDestinationUrl);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
