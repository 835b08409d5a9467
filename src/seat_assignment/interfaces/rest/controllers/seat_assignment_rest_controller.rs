use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::seat_assignment::{
    domain::{
        model::{
            commands::{
                bulk_assign_seats_command::BulkAssignSeatsCommand,
                bulk_unassign_seats_command::BulkUnassignSeatsCommand,
            },
            enums::seat_assignment_domain_error::SeatAssignmentDomainError,
            queries::seat_usage_query::SeatUsageQuery,
        },
        services::{
            seat_assignment_command_service::SeatAssignmentCommandService,
            seat_assignment_query_service::SeatAssignmentQueryService,
        },
    },
    interfaces::rest::resources::{
        seat_assignment_error_response_resource::SeatAssignmentErrorResponseResource,
        seat_assignment_request_resource::SeatAssignmentRequestResource,
        seat_assignment_resource::{SeatAssignmentResource, SeatUsageResource},
    },
};

type ErrorResponse = (StatusCode, Json<SeatAssignmentErrorResponseResource>);

#[derive(Clone)]
pub struct SeatAssignmentRestControllerState {
    pub command_service: Arc<dyn SeatAssignmentCommandService>,
    pub query_service: Arc<dyn SeatAssignmentQueryService>,
}

pub fn router(state: SeatAssignmentRestControllerState) -> Router {
    Router::new()
        .route(
            "/subscriptions/add-on-purchases/:add_on_purchase_id/assignments",
            post(bulk_assign_seats).delete(bulk_unassign_seats),
        )
        .route(
            "/subscriptions/add-on-purchases/:add_on_purchase_id/seat-usage",
            get(get_seat_usage),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/subscriptions/add-on-purchases/{add_on_purchase_id}/assignments",
    tag = "seat-assignment",
    params(("add_on_purchase_id" = i64, Path, description = "Add-on purchase id")),
    request_body = SeatAssignmentRequestResource,
    responses(
        (status = 200, description = "Every requested user now holds a seat", body = SeatAssignmentResource),
        (status = 400, description = "Invalid request", body = SeatAssignmentErrorResponseResource),
        (status = 404, description = "Add-on purchase not found", body = SeatAssignmentErrorResponseResource),
        (status = 409, description = "Purchase is locked by another assignment", body = SeatAssignmentErrorResponseResource),
        (status = 422, description = "INCOMPATIBLE_ADD_ON, INVALID_USER_ID_PRESENT or NOT_ENOUGH_SEATS", body = SeatAssignmentErrorResponseResource)
    )
)]
pub async fn bulk_assign_seats(
    State(state): State<SeatAssignmentRestControllerState>,
    Path(add_on_purchase_id): Path<i64>,
    Json(request): Json<SeatAssignmentRequestResource>,
) -> Result<Json<SeatAssignmentResource>, ErrorResponse> {
    validate_request(&request)?;

    let command = BulkAssignSeatsCommand::new(add_on_purchase_id, request.user_ids)
        .map_err(map_domain_error)?;
    let user_ids = state
        .command_service
        .handle_bulk_assign(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SeatAssignmentResource {
        add_on_purchase_id,
        user_ids,
    }))
}

#[utoipa::path(
    delete,
    path = "/subscriptions/add-on-purchases/{add_on_purchase_id}/assignments",
    tag = "seat-assignment",
    params(("add_on_purchase_id" = i64, Path, description = "Add-on purchase id")),
    request_body = SeatAssignmentRequestResource,
    responses(
        (status = 200, description = "Users whose seat was removed", body = SeatAssignmentResource),
        (status = 400, description = "Invalid request", body = SeatAssignmentErrorResponseResource),
        (status = 404, description = "Add-on purchase not found", body = SeatAssignmentErrorResponseResource)
    )
)]
pub async fn bulk_unassign_seats(
    State(state): State<SeatAssignmentRestControllerState>,
    Path(add_on_purchase_id): Path<i64>,
    Json(request): Json<SeatAssignmentRequestResource>,
) -> Result<Json<SeatAssignmentResource>, ErrorResponse> {
    validate_request(&request)?;

    let command = BulkUnassignSeatsCommand::new(add_on_purchase_id, request.user_ids)
        .map_err(map_domain_error)?;
    let user_ids = state
        .command_service
        .handle_bulk_unassign(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SeatAssignmentResource {
        add_on_purchase_id,
        user_ids,
    }))
}

#[utoipa::path(
    get,
    path = "/subscriptions/add-on-purchases/{add_on_purchase_id}/seat-usage",
    tag = "seat-assignment",
    params(("add_on_purchase_id" = i64, Path, description = "Add-on purchase id")),
    responses(
        (status = 200, description = "Seat usage", body = SeatUsageResource),
        (status = 404, description = "Add-on purchase not found", body = SeatAssignmentErrorResponseResource)
    )
)]
pub async fn get_seat_usage(
    State(state): State<SeatAssignmentRestControllerState>,
    Path(add_on_purchase_id): Path<i64>,
) -> Result<Json<SeatUsageResource>, ErrorResponse> {
    let query = SeatUsageQuery::new(add_on_purchase_id).map_err(map_domain_error)?;
    let usage = state
        .query_service
        .handle_seat_usage(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SeatUsageResource::from(usage)))
}

fn validate_request(request: &impl Validate) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(SeatAssignmentErrorResponseResource {
                message: validation_error.to_string(),
                user_ids: Vec::new(),
            }),
        )
    })
}

fn map_domain_error(error: SeatAssignmentDomainError) -> ErrorResponse {
    let status = match error {
        SeatAssignmentDomainError::IncompatibleAddOn
        | SeatAssignmentDomainError::InvalidUserIdPresent(_)
        | SeatAssignmentDomainError::NotEnoughSeats => StatusCode::UNPROCESSABLE_ENTITY,
        SeatAssignmentDomainError::AssignmentLocked => StatusCode::CONFLICT,
        SeatAssignmentDomainError::EmptyUserIds
        | SeatAssignmentDomainError::InvalidUserId
        | SeatAssignmentDomainError::InvalidAddOnPurchaseId => StatusCode::BAD_REQUEST,
        SeatAssignmentDomainError::AddOnPurchaseNotFound => StatusCode::NOT_FOUND,
        SeatAssignmentDomainError::InvalidAddOnName(_)
        | SeatAssignmentDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let user_ids = match &error {
        SeatAssignmentDomainError::InvalidUserIdPresent(ids) => ids.clone(),
        _ => Vec::new(),
    };

    (
        status,
        Json(SeatAssignmentErrorResponseResource {
            message: error.to_string(),
            user_ids,
        }),
    )
}
