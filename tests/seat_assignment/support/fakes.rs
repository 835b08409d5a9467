use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;
use audit_stream_service::seat_assignment::{
    domain::model::{
        entities::add_on_purchase::AddOnPurchase,
        enums::seat_assignment_domain_error::SeatAssignmentDomainError,
        value_objects::add_on_purchase_id::AddOnPurchaseId,
    },
    infrastructure::persistence::repositories::{
        add_on_purchase_repository::AddOnPurchaseRepository,
        seat_assignment_repository::SeatAssignmentRepository,
        seat_eligibility_repository::SeatEligibilityRepository,
    },
};

const INSERT_LATENCY: Duration = Duration::from_millis(25);

pub struct FakeAddOnPurchaseRepository {
    purchases: Mutex<HashMap<i64, AddOnPurchase>>,
}

impl FakeAddOnPurchaseRepository {
    pub fn new() -> Self {
        Self {
            purchases: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert(&self, purchase: AddOnPurchase) {
        self.purchases
            .lock()
            .expect("mutex poisoned")
            .insert(purchase.id().value(), purchase);
    }
}

#[async_trait]
impl AddOnPurchaseRepository for FakeAddOnPurchaseRepository {
    async fn find_by_id(
        &self,
        id: AddOnPurchaseId,
    ) -> Result<Option<AddOnPurchase>, SeatAssignmentDomainError> {
        Ok(self
            .purchases
            .lock()
            .expect("mutex poisoned")
            .get(&id.value())
            .cloned())
    }
}

/// Enforces the purchased quantity on insert, like the row-locked database check.
pub struct FakeSeatAssignmentRepository {
    assignments: Mutex<BTreeMap<i64, BTreeSet<i64>>>,
}

impl FakeSeatAssignmentRepository {
    pub fn new() -> Self {
        Self {
            assignments: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn seed(&self, purchase_id: i64, user_ids: &[i64]) {
        self.assignments
            .lock()
            .expect("mutex poisoned")
            .entry(purchase_id)
            .or_default()
            .extend(user_ids.iter().copied());
    }

    pub fn assigned(&self, purchase_id: i64) -> Vec<i64> {
        self.assignments
            .lock()
            .expect("mutex poisoned")
            .get(&purchase_id)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SeatAssignmentRepository for FakeSeatAssignmentRepository {
    async fn assigned_user_ids(
        &self,
        purchase_id: AddOnPurchaseId,
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        Ok(self.assigned(purchase_id.value()))
    }

    async fn insert_assignments(
        &self,
        purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<(), SeatAssignmentDomainError> {
        // Unchecked write with a window for other requests to read stale counts.
        tokio::time::sleep(INSERT_LATENCY).await;
        self.assignments
            .lock()
            .expect("mutex poisoned")
            .entry(purchase.id().value())
            .or_default()
            .extend(user_ids.iter().copied());
        Ok(())
    }

    async fn delete_assignments(
        &self,
        purchase_id: AddOnPurchaseId,
        user_ids: &[i64],
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        let mut assignments = self.assignments.lock().expect("mutex poisoned");
        let Some(assigned) = assignments.get_mut(&purchase_id.value()) else {
            return Ok(Vec::new());
        };
        Ok(user_ids
            .iter()
            .copied()
            .filter(|id| assigned.remove(id))
            .collect())
    }
}

pub struct FakeSeatEligibilityRepository {
    eligible: Mutex<HashSet<i64>>,
}

impl FakeSeatEligibilityRepository {
    pub fn new(eligible: &[i64]) -> Self {
        Self {
            eligible: Mutex::new(eligible.iter().copied().collect()),
        }
    }
}

#[async_trait]
impl SeatEligibilityRepository for FakeSeatEligibilityRepository {
    async fn eligible_user_ids(
        &self,
        _purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        let eligible = self.eligible.lock().expect("mutex poisoned");
        Ok(user_ids
            .iter()
            .copied()
            .filter(|id| eligible.contains(id))
            .collect())
    }
}
