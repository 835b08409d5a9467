use std::{sync::Arc, time::Duration};

use audit_stream_service::seat_assignment::{
    application::{
        command_services::seat_assignment_command_service_impl::SeatAssignmentCommandServiceImpl,
        query_services::seat_assignment_query_service_impl::SeatAssignmentQueryServiceImpl,
    },
    domain::model::{
        entities::add_on_purchase::AddOnPurchase, enums::add_on_name::AddOnName,
        value_objects::add_on_purchase_id::AddOnPurchaseId,
    },
    infrastructure::locking::add_on_purchase_lock_registry::AddOnPurchaseLockRegistry,
};

use super::fakes::{
    FakeAddOnPurchaseRepository, FakeSeatAssignmentRepository, FakeSeatEligibilityRepository,
};

pub const DUO_PURCHASE_ID: i64 = 1;
pub const SINGLE_SEAT_PURCHASE_ID: i64 = 2;
pub const PRODUCT_ANALYTICS_PURCHASE_ID: i64 = 3;

/// Users 1 to 10 are eligible; anything else is not.
const ELIGIBLE_USER_IDS: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

pub struct SeatHarness {
    pub seat_assignment_repository: Arc<FakeSeatAssignmentRepository>,
    pub locks: Arc<AddOnPurchaseLockRegistry>,
    pub command_service: Arc<SeatAssignmentCommandServiceImpl>,
    pub query_service: Arc<SeatAssignmentQueryServiceImpl>,
}

fn purchase(id: i64, add_on: AddOnName, quantity: i64) -> AddOnPurchase {
    AddOnPurchase::new(
        AddOnPurchaseId::new(id).expect("valid purchase id"),
        add_on,
        Some(100),
        quantity,
    )
}

/// Seeds a five-seat Duo Enterprise purchase, a one-seat Duo Core purchase and a
/// product analytics purchase.
pub fn create_seat_harness() -> SeatHarness {
    let add_on_purchase_repository = Arc::new(FakeAddOnPurchaseRepository::new());
    add_on_purchase_repository.insert(purchase(DUO_PURCHASE_ID, AddOnName::DuoEnterprise, 5));
    add_on_purchase_repository.insert(purchase(SINGLE_SEAT_PURCHASE_ID, AddOnName::DuoCore, 1));
    add_on_purchase_repository.insert(purchase(
        PRODUCT_ANALYTICS_PURCHASE_ID,
        AddOnName::ProductAnalytics,
        5,
    ));

    let seat_assignment_repository = Arc::new(FakeSeatAssignmentRepository::new());
    let eligibility_repository = Arc::new(FakeSeatEligibilityRepository::new(&ELIGIBLE_USER_IDS));
    let locks = Arc::new(AddOnPurchaseLockRegistry::new(Duration::from_millis(200)));

    let command_service = Arc::new(SeatAssignmentCommandServiceImpl::new(
        add_on_purchase_repository.clone(),
        seat_assignment_repository.clone(),
        eligibility_repository,
        locks.clone(),
    ));
    let query_service = Arc::new(SeatAssignmentQueryServiceImpl::new(
        add_on_purchase_repository,
        seat_assignment_repository.clone(),
    ));

    SeatHarness {
        seat_assignment_repository,
        locks,
        command_service,
        query_service,
    }
}
