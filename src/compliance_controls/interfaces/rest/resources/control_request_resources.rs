use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ValidateExpressionRequestResource {
    #[schema(value_type = Object)]
    pub expression: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct EvaluateControlRequestResource {
    #[schema(value_type = Object)]
    pub value: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ValidateExpressionResponseResource {
    pub valid: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct EvaluateControlResponseResource {
    pub control_id: String,
    pub status: String,
}
