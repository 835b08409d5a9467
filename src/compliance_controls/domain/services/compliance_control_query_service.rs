use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::compliance_controls::domain::model::{
    entities::control_definition::ControlDefinition,
    enums::{
        compliance_controls_domain_error::ComplianceControlsDomainError,
        compliance_status::ComplianceStatus, control_type::ControlType,
    },
    queries::{
        evaluate_control_query::EvaluateControlQuery,
        validate_expression_query::ValidateExpressionQuery,
    },
};

#[async_trait]
pub trait ComplianceControlQueryService: Send + Sync {
    async fn handle_list_controls(&self) -> Vec<ControlDefinition>;

    async fn handle_enum_definitions(&self) -> BTreeMap<String, u32>;

    async fn handle_field_mappings(&self) -> BTreeMap<String, ControlType>;

    async fn handle_expression_schema(&self) -> Value;

    async fn handle_validate_expression(
        &self,
        query: ValidateExpressionQuery,
    ) -> Result<(), ComplianceControlsDomainError>;

    async fn handle_evaluate(
        &self,
        query: EvaluateControlQuery,
    ) -> Result<ComplianceStatus, ComplianceControlsDomainError>;
}
