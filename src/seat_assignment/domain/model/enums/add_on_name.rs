use std::str::FromStr;

use super::seat_assignment_domain_error::SeatAssignmentDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum AddOnName {
    CodeSuggestions,
    DuoEnterprise,
    DuoAmazonQ,
    DuoCore,
    ProductAnalytics,
}

impl AddOnName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CodeSuggestions => "code_suggestions",
            Self::DuoEnterprise => "duo_enterprise",
            Self::DuoAmazonQ => "duo_amazon_q",
            Self::DuoCore => "duo_core",
            Self::ProductAnalytics => "product_analytics",
        }
    }

    /// Only Duo add-ons are seat-assignable.
    pub fn is_duo(&self) -> bool {
        !matches!(self, Self::ProductAnalytics)
    }
}

impl FromStr for AddOnName {
    type Err = SeatAssignmentDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "code_suggestions" => Ok(Self::CodeSuggestions),
            "duo_enterprise" => Ok(Self::DuoEnterprise),
            "duo_amazon_q" => Ok(Self::DuoAmazonQ),
            "duo_core" => Ok(Self::DuoCore),
            "product_analytics" => Ok(Self::ProductAnalytics),
            other => Err(SeatAssignmentDomainError::InvalidAddOnName(other.to_string())),
        }
    }
}
