use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::audit_streaming::domain::model::{
    entities::streaming_header::StreamingHeader,
    enums::{
        audit_streaming_domain_error::AuditStreamingDomainError, destination_level::DestinationLevel,
    },
    value_objects::{
        destination_id::DestinationId, destination_name::DestinationName,
        destination_url::DestinationUrl, event_type_name::EventTypeName,
        namespace_filter::NamespaceFilter, verification_token::VerificationToken,
    },
};

pub const MAXIMUM_HEADERS_PER_DESTINATION: usize = 20;

pub struct ExternalDestinationParts {
    pub id: DestinationId,
    pub level: DestinationLevel,
    pub name: DestinationName,
    pub destination_url: DestinationUrl,
    pub verification_token: VerificationToken,
    pub active: bool,
    pub headers: Vec<StreamingHeader>,
    pub event_type_filters: BTreeSet<EventTypeName>,
    pub namespace_filter: Option<NamespaceFilter>,
    pub created_at: DateTime<Utc>,
}

/// HTTP endpoint receiving streamed audit events, owned by the instance or by a root group.
#[derive(Clone, Debug)]
pub struct ExternalDestination {
    id: DestinationId,
    level: DestinationLevel,
    name: DestinationName,
    destination_url: DestinationUrl,
    verification_token: VerificationToken,
    active: bool,
    headers: Vec<StreamingHeader>,
    event_type_filters: BTreeSet<EventTypeName>,
    namespace_filter: Option<NamespaceFilter>,
    created_at: DateTime<Utc>,
}

impl ExternalDestination {
    pub fn new(
        level: DestinationLevel,
        name: Option<DestinationName>,
        destination_url: DestinationUrl,
        verification_token: Option<VerificationToken>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: DestinationId::generate(),
            level,
            name: name.unwrap_or_else(DestinationName::generate),
            destination_url,
            verification_token: verification_token.unwrap_or_else(VerificationToken::generate),
            active: true,
            headers: Vec::new(),
            event_type_filters: BTreeSet::new(),
            namespace_filter: None,
            created_at,
        }
    }

    /// Rebuilds a destination from storage and checks it against the header rules.
    pub fn restore(parts: ExternalDestinationParts) -> Result<Self, AuditStreamingDomainError> {
        let destination = Self {
            id: parts.id,
            level: parts.level,
            name: parts.name,
            destination_url: parts.destination_url,
            verification_token: parts.verification_token,
            active: parts.active,
            headers: parts.headers,
            event_type_filters: parts.event_type_filters,
            namespace_filter: parts.namespace_filter,
            created_at: parts.created_at,
        };
        destination.validate()?;
        Ok(destination)
    }

    pub fn validate(&self) -> Result<(), AuditStreamingDomainError> {
        if self.headers.len() > MAXIMUM_HEADERS_PER_DESTINATION {
            return Err(AuditStreamingDomainError::HeadersLimitExceeded);
        }
        for (index, header) in self.headers.iter().enumerate() {
            if self.headers[..index]
                .iter()
                .any(|other| other.same_key(header.key()))
            {
                return Err(AuditStreamingDomainError::DuplicateHeaderKey);
            }
        }
        Ok(())
    }

    pub fn update(
        &mut self,
        name: Option<DestinationName>,
        destination_url: Option<DestinationUrl>,
        active: Option<bool>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(destination_url) = destination_url {
            self.destination_url = destination_url;
        }
        if let Some(active) = active {
            self.active = active;
        }
    }

    pub fn add_header(&mut self, header: StreamingHeader) -> Result<(), AuditStreamingDomainError> {
        if self.headers.iter().any(|h| h.same_key(header.key())) {
            return Err(AuditStreamingDomainError::DuplicateHeaderKey);
        }
        if self.headers.len() >= MAXIMUM_HEADERS_PER_DESTINATION {
            return Err(AuditStreamingDomainError::HeadersLimitExceeded);
        }
        self.headers.push(header);
        Ok(())
    }

    pub fn remove_header(&mut self, key: &str) -> Result<StreamingHeader, AuditStreamingDomainError> {
        let position = self
            .headers
            .iter()
            .position(|h| h.same_key(key))
            .ok_or(AuditStreamingDomainError::HeaderNotFound)?;
        Ok(self.headers.remove(position))
    }

    /// Returns the filters that were not already present.
    pub fn add_event_type_filters(&mut self, event_types: Vec<EventTypeName>) -> Vec<EventTypeName> {
        event_types
            .into_iter()
            .filter(|event_type| self.event_type_filters.insert(event_type.clone()))
            .collect()
    }

    /// Removes every requested filter, or none of them if any is missing.
    pub fn remove_event_type_filters(
        &mut self,
        event_types: &[EventTypeName],
    ) -> Result<(), AuditStreamingDomainError> {
        let mut missing: Vec<String> = Vec::new();
        for event_type in event_types {
            if !self.event_type_filters.contains(event_type)
                && !missing.iter().any(|m| m == event_type.value())
            {
                missing.push(event_type.value().to_string());
            }
        }
        if !missing.is_empty() {
            return Err(AuditStreamingDomainError::EventTypeFiltersNotFound(missing));
        }

        for event_type in event_types {
            self.event_type_filters.remove(event_type);
        }
        Ok(())
    }

    pub fn set_namespace_filter(&mut self, filter: NamespaceFilter) {
        self.namespace_filter = Some(filter);
    }

    pub fn clear_namespace_filter(&mut self) -> Result<NamespaceFilter, AuditStreamingDomainError> {
        self.namespace_filter
            .take()
            .ok_or(AuditStreamingDomainError::NamespaceFilterNotFound)
    }

    pub fn accepts_event_type(&self, event_type: &str) -> bool {
        self.event_type_filters.is_empty()
            || self
                .event_type_filters
                .iter()
                .any(|filter| filter.value() == event_type)
    }

    pub fn active_headers(&self) -> impl Iterator<Item = &StreamingHeader> {
        self.headers.iter().filter(|header| header.active())
    }

    pub fn id(&self) -> DestinationId {
        self.id
    }
    pub fn level(&self) -> DestinationLevel {
        self.level
    }
    pub fn name(&self) -> &DestinationName {
        &self.name
    }
    pub fn destination_url(&self) -> &DestinationUrl {
        &self.destination_url
    }
    pub fn verification_token(&self) -> &VerificationToken {
        &self.verification_token
    }
    pub fn active(&self) -> bool {
        self.active
    }
    pub fn headers(&self) -> &[StreamingHeader] {
        &self.headers
    }
    pub fn event_type_filters(&self) -> &BTreeSet<EventTypeName> {
        &self.event_type_filters
    }
    pub fn namespace_filter(&self) -> Option<NamespaceFilter> {
        self.namespace_filter
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
