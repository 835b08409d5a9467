use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;
use validator::Validate;

use crate::compliance_controls::{
    domain::{
        model::{
            enums::compliance_controls_domain_error::ComplianceControlsDomainError,
            queries::{
                evaluate_control_query::EvaluateControlQuery,
                validate_expression_query::ValidateExpressionQuery,
            },
        },
        services::compliance_control_query_service::ComplianceControlQueryService,
    },
    interfaces::rest::resources::{
        compliance_controls_error_response_resource::ComplianceControlsErrorResponseResource,
        control_request_resources::{
            EvaluateControlRequestResource, EvaluateControlResponseResource,
            ValidateExpressionRequestResource, ValidateExpressionResponseResource,
        },
        control_resource::ControlResource,
    },
};

type ErrorResponse = (StatusCode, Json<ComplianceControlsErrorResponseResource>);

#[derive(Clone)]
pub struct ComplianceControlsRestControllerState {
    pub query_service: Arc<dyn ComplianceControlQueryService>,
}

pub fn router(state: ComplianceControlsRestControllerState) -> Router {
    Router::new()
        .route("/compliance/controls", get(list_controls))
        .route(
            "/compliance/controls/enum-definitions",
            get(list_enum_definitions),
        )
        .route("/compliance/controls/field-mappings", get(list_field_mappings))
        .route("/compliance/controls/schema", get(get_expression_schema))
        .route(
            "/compliance/controls/:control_id/validate-expression",
            post(validate_expression),
        )
        .route("/compliance/controls/:control_id/evaluate", post(evaluate_control))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/compliance/controls",
    tag = "compliance-controls",
    responses(
        (status = 200, description = "Predefined controls ordered by id", body = [ControlResource])
    )
)]
pub async fn list_controls(
    State(state): State<ComplianceControlsRestControllerState>,
) -> Json<Vec<ControlResource>> {
    let controls = state.query_service.handle_list_controls().await;
    Json(controls.iter().map(ControlResource::from).collect())
}

#[utoipa::path(
    get,
    path = "/compliance/controls/enum-definitions",
    tag = "compliance-controls",
    responses(
        (status = 200, description = "Control id to persisted enum value", body = Object)
    )
)]
pub async fn list_enum_definitions(
    State(state): State<ComplianceControlsRestControllerState>,
) -> Json<BTreeMap<String, u32>> {
    Json(state.query_service.handle_enum_definitions().await)
}

#[utoipa::path(
    get,
    path = "/compliance/controls/field-mappings",
    tag = "compliance-controls",
    responses(
        (status = 200, description = "Field id to value type", body = Object)
    )
)]
pub async fn list_field_mappings(
    State(state): State<ComplianceControlsRestControllerState>,
) -> Json<BTreeMap<String, String>> {
    let mappings = state.query_service.handle_field_mappings().await;
    Json(
        mappings
            .into_iter()
            .map(|(field, control_type)| (field, control_type.as_str().to_string()))
            .collect(),
    )
}

#[utoipa::path(
    get,
    path = "/compliance/controls/schema",
    tag = "compliance-controls",
    responses(
        (status = 200, description = "JSON Schema of control expressions", body = Object)
    )
)]
pub async fn get_expression_schema(
    State(state): State<ComplianceControlsRestControllerState>,
) -> Json<Value> {
    Json(state.query_service.handle_expression_schema().await)
}

#[utoipa::path(
    post,
    path = "/compliance/controls/{control_id}/validate-expression",
    tag = "compliance-controls",
    params(("control_id" = String, Path, description = "Control id")),
    request_body = ValidateExpressionRequestResource,
    responses(
        (status = 200, description = "Expression matches the control", body = ValidateExpressionResponseResource),
        (status = 404, description = "Unknown control", body = ComplianceControlsErrorResponseResource),
        (status = 422, description = "Expression mismatch", body = ComplianceControlsErrorResponseResource)
    )
)]
pub async fn validate_expression(
    State(state): State<ComplianceControlsRestControllerState>,
    Path(control_id): Path<String>,
    Json(request): Json<ValidateExpressionRequestResource>,
) -> Result<Json<ValidateExpressionResponseResource>, ErrorResponse> {
    validate_request(&request)?;

    let query =
        ValidateExpressionQuery::new(control_id, request.expression).map_err(map_domain_error)?;
    state
        .query_service
        .handle_validate_expression(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ValidateExpressionResponseResource { valid: true }))
}

#[utoipa::path(
    post,
    path = "/compliance/controls/{control_id}/evaluate",
    tag = "compliance-controls",
    params(("control_id" = String, Path, description = "Control id")),
    request_body = EvaluateControlRequestResource,
    responses(
        (status = 200, description = "Compliance status", body = EvaluateControlResponseResource),
        (status = 400, description = "Value type mismatch", body = ComplianceControlsErrorResponseResource),
        (status = 404, description = "Unknown control", body = ComplianceControlsErrorResponseResource)
    )
)]
pub async fn evaluate_control(
    State(state): State<ComplianceControlsRestControllerState>,
    Path(control_id): Path<String>,
    Json(request): Json<EvaluateControlRequestResource>,
) -> Result<Json<EvaluateControlResponseResource>, ErrorResponse> {
    validate_request(&request)?;

    let query = EvaluateControlQuery::new(control_id, &request.value).map_err(map_domain_error)?;
    let control_id = query.control_id().value().to_string();
    let status = state
        .query_service
        .handle_evaluate(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EvaluateControlResponseResource {
        control_id,
        status: status.as_str().to_string(),
    }))
}

fn validate_request(request: &impl Validate) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(ComplianceControlsErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: ComplianceControlsDomainError) -> ErrorResponse {
    let status = match error {
        ComplianceControlsDomainError::ControlNotFound(_)
        | ComplianceControlsDomainError::InvalidControlId => StatusCode::NOT_FOUND,
        ComplianceControlsDomainError::ExpressionMismatch => StatusCode::UNPROCESSABLE_ENTITY,
        ComplianceControlsDomainError::ValueTypeMismatch { .. } => StatusCode::BAD_REQUEST,
        ComplianceControlsDomainError::InvalidRegistry(_)
        | ComplianceControlsDomainError::InvalidManifest(_)
        | ComplianceControlsDomainError::InfrastructureError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ComplianceControlsErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
