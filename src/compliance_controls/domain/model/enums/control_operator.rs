use std::{cmp::Ordering, str::FromStr};

use super::compliance_controls_domain_error::ComplianceControlsDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ControlOperator {
    Equal,
    NotEqual,
    GreaterThanOrEqual,
    LessThanOrEqual,
    GreaterThan,
    LessThan,
}

impl ControlOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        }
    }

    /// Applies the operator to `observed.cmp(compliant)`.
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::NotEqual => ordering != Ordering::Equal,
            Self::GreaterThanOrEqual => ordering != Ordering::Less,
            Self::LessThanOrEqual => ordering != Ordering::Greater,
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::LessThan => ordering == Ordering::Less,
        }
    }
}

impl FromStr for ControlOperator {
    type Err = ComplianceControlsDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "=" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            ">=" => Ok(Self::GreaterThanOrEqual),
            "<=" => Ok(Self::LessThanOrEqual),
            ">" => Ok(Self::GreaterThan),
            "<" => Ok(Self::LessThan),
            other => Err(ComplianceControlsDomainError::InvalidManifest(format!(
                "unknown operator '{other}'"
            ))),
        }
    }
}
