use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::seat_assignment::domain::model::{
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    value_objects::add_on_purchase_id::AddOnPurchaseId,
};

/// One async mutex per add-on purchase, created on first use and pruned once unused.
pub struct AddOnPurchaseLockRegistry {
    locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
    timeout: Duration,
}

impl AddOnPurchaseLockRegistry {
    pub fn new(timeout: Duration) -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
            timeout,
        }
    }

    /// Waits up to the configured timeout; the returned guard releases the lock on drop.
    pub async fn acquire(
        &self,
        purchase_id: AddOnPurchaseId,
    ) -> Result<OwnedMutexGuard<()>, SeatAssignmentDomainError> {
        let lock = {
            let mut locks = self.locks.lock().await;
            // Only the map holds an idle lock; guards and waiters keep their own clone.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry(purchase_id.value())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };

        tokio::time::timeout(self.timeout, lock.lock_owned())
            .await
            .map_err(|_| SeatAssignmentDomainError::AssignmentLocked)
    }

    pub async fn tracked_purchases(&self) -> usize {
        self.locks.lock().await.len()
    }
}
