use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use tracing::{error, info};

use crate::seat_assignment::{
    domain::{
        model::{
            commands::{
                bulk_assign_seats_command::BulkAssignSeatsCommand,
                bulk_unassign_seats_command::BulkUnassignSeatsCommand,
            },
            entities::add_on_purchase::AddOnPurchase,
            enums::seat_assignment_domain_error::SeatAssignmentDomainError,
            value_objects::add_on_purchase_id::AddOnPurchaseId,
        },
        services::seat_assignment_command_service::SeatAssignmentCommandService,
    },
    infrastructure::{
        locking::add_on_purchase_lock_registry::AddOnPurchaseLockRegistry,
        persistence::repositories::{
            add_on_purchase_repository::AddOnPurchaseRepository,
            seat_assignment_repository::SeatAssignmentRepository,
            seat_eligibility_repository::SeatEligibilityRepository,
        },
    },
};

pub struct SeatAssignmentCommandServiceImpl {
    add_on_purchase_repository: Arc<dyn AddOnPurchaseRepository>,
    seat_assignment_repository: Arc<dyn SeatAssignmentRepository>,
    seat_eligibility_repository: Arc<dyn SeatEligibilityRepository>,
    locks: Arc<AddOnPurchaseLockRegistry>,
}

impl SeatAssignmentCommandServiceImpl {
    pub fn new(
        add_on_purchase_repository: Arc<dyn AddOnPurchaseRepository>,
        seat_assignment_repository: Arc<dyn SeatAssignmentRepository>,
        seat_eligibility_repository: Arc<dyn SeatEligibilityRepository>,
        locks: Arc<AddOnPurchaseLockRegistry>,
    ) -> Self {
        Self {
            add_on_purchase_repository,
            seat_assignment_repository,
            seat_eligibility_repository,
            locks,
        }
    }

    async fn find_purchase(
        &self,
        id: AddOnPurchaseId,
    ) -> Result<AddOnPurchase, SeatAssignmentDomainError> {
        self.add_on_purchase_repository
            .find_by_id(id)
            .await?
            .ok_or(SeatAssignmentDomainError::AddOnPurchaseNotFound)
    }

    async fn unassigned_ids(
        &self,
        purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<(usize, Vec<i64>), SeatAssignmentDomainError> {
        let assigned: HashSet<i64> = self
            .seat_assignment_repository
            .assigned_user_ids(purchase.id())
            .await?
            .into_iter()
            .collect();

        let new_ids = user_ids
            .iter()
            .copied()
            .filter(|id| !assigned.contains(id))
            .collect();

        Ok((assigned.len(), new_ids))
    }

    async fn assign(
        &self,
        purchase: &AddOnPurchase,
        user_ids: &[i64],
    ) -> Result<(), SeatAssignmentDomainError> {
        if !purchase.add_on().is_duo() {
            return Err(SeatAssignmentDomainError::IncompatibleAddOn);
        }

        let eligible: HashSet<i64> = self
            .seat_eligibility_repository
            .eligible_user_ids(purchase, user_ids)
            .await?
            .into_iter()
            .collect();
        let invalid: Vec<i64> = user_ids
            .iter()
            .copied()
            .filter(|id| !eligible.contains(id))
            .collect();
        if !invalid.is_empty() {
            return Err(SeatAssignmentDomainError::InvalidUserIdPresent(invalid));
        }

        let (assigned, new_ids) = self.unassigned_ids(purchase, user_ids).await?;
        if !purchase.has_capacity_for(assigned, new_ids.len()) {
            return Err(SeatAssignmentDomainError::NotEnoughSeats);
        }

        let _guard = self.locks.acquire(purchase.id()).await?;

        let (assigned, new_ids) = self.unassigned_ids(purchase, user_ids).await?;
        if !purchase.has_capacity_for(assigned, new_ids.len()) {
            return Err(SeatAssignmentDomainError::NotEnoughSeats);
        }

        self.seat_assignment_repository
            .insert_assignments(purchase, &new_ids)
            .await
    }
}

#[async_trait]
impl SeatAssignmentCommandService for SeatAssignmentCommandServiceImpl {
    async fn handle_bulk_assign(
        &self,
        command: BulkAssignSeatsCommand,
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        let purchase_id = command.add_on_purchase_id();
        let purchase = self.find_purchase(purchase_id).await?;

        match self.assign(&purchase, command.user_ids()).await {
            Ok(()) => {
                info!(
                    add_on_purchase_id = purchase_id.value(),
                    response_type = "success",
                    users = ?command.user_ids(),
                    "Duo Bulk User Assignment"
                );
                Ok(command.user_ids().to_vec())
            }
            Err(assign_error) => {
                let offending = match &assign_error {
                    SeatAssignmentDomainError::InvalidUserIdPresent(ids) => ids.as_slice(),
                    _ => &[][..],
                };
                error!(
                    add_on_purchase_id = purchase_id.value(),
                    response_type = "error",
                    errors = %assign_error,
                    user_ids = ?offending,
                    "Duo Bulk User Assignment"
                );
                Err(assign_error)
            }
        }
    }

    async fn handle_bulk_unassign(
        &self,
        command: BulkUnassignSeatsCommand,
    ) -> Result<Vec<i64>, SeatAssignmentDomainError> {
        let purchase = self.find_purchase(command.add_on_purchase_id()).await?;
        let _guard = self.locks.acquire(purchase.id()).await?;

        let removed = self
            .seat_assignment_repository
            .delete_assignments(purchase.id(), command.user_ids())
            .await?;

        info!(
            add_on_purchase_id = purchase.id().value(),
            removed = removed.len(),
            "Duo Bulk User Unassignment"
        );
        Ok(removed)
    }
}
