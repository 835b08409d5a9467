use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::compliance_controls::domain::{
    model::{
        entities::control_definition::ControlDefinition,
        enums::{
            compliance_controls_domain_error::ComplianceControlsDomainError,
            compliance_status::ComplianceStatus, control_type::ControlType,
        },
        queries::{
            evaluate_control_query::EvaluateControlQuery,
            validate_expression_query::ValidateExpressionQuery,
        },
    },
    services::{
        compliance_control_query_service::ComplianceControlQueryService,
        compliance_control_registry::ComplianceControlRegistry,
    },
};

pub struct ComplianceControlQueryServiceImpl {
    registry: Arc<ComplianceControlRegistry>,
}

impl ComplianceControlQueryServiceImpl {
    pub fn new(registry: Arc<ComplianceControlRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl ComplianceControlQueryService for ComplianceControlQueryServiceImpl {
    async fn handle_list_controls(&self) -> Vec<ControlDefinition> {
        self.registry.controls().values().cloned().collect()
    }

    async fn handle_enum_definitions(&self) -> BTreeMap<String, u32> {
        self.registry.enum_definitions()
    }

    async fn handle_field_mappings(&self) -> BTreeMap<String, ControlType> {
        self.registry.field_mappings()
    }

    async fn handle_expression_schema(&self) -> Value {
        self.registry.expression_schema()
    }

    async fn handle_validate_expression(
        &self,
        query: ValidateExpressionQuery,
    ) -> Result<(), ComplianceControlsDomainError> {
        self.registry
            .validate_expression(query.control_id().value(), query.expression())
    }

    async fn handle_evaluate(
        &self,
        query: EvaluateControlQuery,
    ) -> Result<ComplianceStatus, ComplianceControlsDomainError> {
        self.registry
            .evaluate(query.control_id().value(), query.observed())
    }
}
