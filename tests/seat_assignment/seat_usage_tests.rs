use audit_stream_service::seat_assignment::domain::{
    model::{
        enums::seat_assignment_domain_error::SeatAssignmentDomainError,
        queries::seat_usage_query::SeatUsageQuery,
    },
    services::seat_assignment_query_service::SeatAssignmentQueryService,
};

use crate::support::{DUO_PURCHASE_ID, create_seat_harness};

#[tokio::test]
async fn usage_reports_assigned_and_available_seats() {
    let harness = create_seat_harness();
    harness
        .seat_assignment_repository
        .seed(DUO_PURCHASE_ID, &[7, 2]);

    let usage = harness
        .query_service
        .handle_seat_usage(SeatUsageQuery::new(DUO_PURCHASE_ID).expect("valid query"))
        .await
        .expect("usage loaded");

    assert_eq!(usage.purchase.quantity(), 5);
    assert_eq!(usage.assigned_user_ids, vec![2, 7]);
    assert_eq!(usage.assigned_count(), 2);
    assert_eq!(usage.available(), 3);
}

#[tokio::test]
async fn usage_of_unknown_purchase_is_not_found() {
    let harness = create_seat_harness();

    let result = harness
        .query_service
        .handle_seat_usage(SeatUsageQuery::new(999).expect("valid query"))
        .await;

    assert!(matches!(
        result,
        Err(SeatAssignmentDomainError::AddOnPurchaseNotFound)
    ));
}
