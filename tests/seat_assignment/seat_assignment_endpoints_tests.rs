use audit_stream_service::seat_assignment::interfaces::rest::{
    controllers::seat_assignment_rest_controller::{
        SeatAssignmentRestControllerState, bulk_assign_seats, bulk_unassign_seats, get_seat_usage,
    },
    resources::seat_assignment_request_resource::SeatAssignmentRequestResource,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::support::{
    DUO_PURCHASE_ID, PRODUCT_ANALYTICS_PURCHASE_ID, SINGLE_SEAT_PURCHASE_ID, SeatHarness,
    create_seat_harness,
};

fn controller_state(harness: &SeatHarness) -> SeatAssignmentRestControllerState {
    SeatAssignmentRestControllerState {
        command_service: harness.command_service.clone(),
        query_service: harness.query_service.clone(),
    }
}

fn request(user_ids: Vec<i64>) -> Json<SeatAssignmentRequestResource> {
    Json(SeatAssignmentRequestResource { user_ids })
}

#[tokio::test]
async fn assign_endpoint_returns_every_requested_user() {
    let harness = create_seat_harness();
    let state = controller_state(&harness);

    let Json(response) = bulk_assign_seats(
        State(state),
        Path(DUO_PURCHASE_ID),
        request(vec![1, 2]),
    )
    .await
    .expect("assignment succeeds");

    assert_eq!(response.add_on_purchase_id, DUO_PURCHASE_ID);
    assert_eq!(response.user_ids, vec![1, 2]);
}

#[tokio::test]
async fn invalid_users_map_to_unprocessable_entity_with_their_ids() {
    let harness = create_seat_harness();
    let state = controller_state(&harness);

    let (status, Json(body)) = bulk_assign_seats(
        State(state),
        Path(DUO_PURCHASE_ID),
        request(vec![1, 404]),
    )
    .await
    .expect_err("ineligible user");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.message, "INVALID_USER_ID_PRESENT");
    assert_eq!(body.user_ids, vec![404]);
}

#[tokio::test]
async fn incompatible_add_on_and_full_purchase_are_unprocessable() {
    let harness = create_seat_harness();
    harness
        .seat_assignment_repository
        .seed(SINGLE_SEAT_PURCHASE_ID, &[1]);
    let state = controller_state(&harness);

    let (incompatible_status, Json(incompatible)) = bulk_assign_seats(
        State(state.clone()),
        Path(PRODUCT_ANALYTICS_PURCHASE_ID),
        request(vec![1]),
    )
    .await
    .expect_err("incompatible add-on");
    let (full_status, Json(full)) = bulk_assign_seats(
        State(state),
        Path(SINGLE_SEAT_PURCHASE_ID),
        request(vec![2]),
    )
    .await
    .expect_err("no seats left");

    assert_eq!(incompatible_status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(incompatible.message, "INCOMPATIBLE_ADD_ON");
    assert_eq!(full_status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(full.message, "NOT_ENOUGH_SEATS");
}

#[tokio::test]
async fn empty_user_list_is_a_bad_request() {
    let harness = create_seat_harness();
    let state = controller_state(&harness);

    let (status, _) = bulk_unassign_seats(State(state), Path(DUO_PURCHASE_ID), request(Vec::new()))
        .await
        .expect_err("empty list");

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn seat_usage_of_unknown_purchase_is_not_found() {
    let harness = create_seat_harness();
    let state = controller_state(&harness);

    let (status, Json(body)) = get_seat_usage(State(state), Path(999))
        .await
        .expect_err("unknown purchase");

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.message, "add-on purchase not found");
}
