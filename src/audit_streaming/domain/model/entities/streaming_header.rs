use lazy_static::lazy_static;
use regex::Regex;

use crate::audit_streaming::domain::model::enums::audit_streaming_domain_error::AuditStreamingDomainError;

const MAXIMUM_KEY_LENGTH: usize = 255;
const MAXIMUM_VALUE_LENGTH: usize = 2000;

lazy_static! {
    static ref HEADER_KEY_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9!#$%&'*+.^_`|~-]+$").expect("valid regex");
}

/// Custom HTTP header sent with every delivery to a destination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StreamingHeader {
    key: String,
    value: String,
    active: bool,
}

impl StreamingHeader {
    pub fn new(key: String, value: String, active: bool) -> Result<Self, AuditStreamingDomainError> {
        let key = key.trim().to_string();
        if key.is_empty() || key.len() > MAXIMUM_KEY_LENGTH {
            return Err(AuditStreamingDomainError::InvalidHeader(
                "key must be between 1 and 255 characters".to_string(),
            ));
        }
        if !HEADER_KEY_REGEX.is_match(&key) {
            return Err(AuditStreamingDomainError::InvalidHeader(format!(
                "key '{key}' contains invalid characters"
            )));
        }
        if value.is_empty() || value.len() > MAXIMUM_VALUE_LENGTH {
            return Err(AuditStreamingDomainError::InvalidHeader(
                "value must be between 1 and 2000 characters".to_string(),
            ));
        }
        if value.contains(['\r', '\n']) {
            return Err(AuditStreamingDomainError::InvalidHeader(format!(
                "value of '{key}' contains a line break"
            )));
        }

        Ok(Self { key, value, active })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
    pub fn value(&self) -> &str {
        &self.value
    }
    pub fn active(&self) -> bool {
        self.active
    }

    pub fn same_key(&self, key: &str) -> bool {
        self.key.eq_ignore_ascii_case(key.trim())
    }
}
