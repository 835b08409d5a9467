use std::sync::Arc;

use async_trait::async_trait;

use crate::seat_assignment::{
    domain::{
        model::{
            enums::seat_assignment_domain_error::SeatAssignmentDomainError,
            queries::seat_usage_query::SeatUsageQuery, value_objects::seat_usage::SeatUsage,
        },
        services::seat_assignment_query_service::SeatAssignmentQueryService,
    },
    infrastructure::persistence::repositories::{
        add_on_purchase_repository::AddOnPurchaseRepository,
        seat_assignment_repository::SeatAssignmentRepository,
    },
};

pub struct SeatAssignmentQueryServiceImpl {
    add_on_purchase_repository: Arc<dyn AddOnPurchaseRepository>,
    seat_assignment_repository: Arc<dyn SeatAssignmentRepository>,
}

impl SeatAssignmentQueryServiceImpl {
    pub fn new(
        add_on_purchase_repository: Arc<dyn AddOnPurchaseRepository>,
        seat_assignment_repository: Arc<dyn SeatAssignmentRepository>,
    ) -> Self {
        Self {
            add_on_purchase_repository,
            seat_assignment_repository,
        }
    }
}

#[async_trait]
impl SeatAssignmentQueryService for SeatAssignmentQueryServiceImpl {
    async fn handle_seat_usage(
        &self,
        query: SeatUsageQuery,
    ) -> Result<SeatUsage, SeatAssignmentDomainError> {
        let purchase = self
            .add_on_purchase_repository
            .find_by_id(query.add_on_purchase_id())
            .await?
            .ok_or(SeatAssignmentDomainError::AddOnPurchaseNotFound)?;

        let assigned_user_ids = self
            .seat_assignment_repository
            .assigned_user_ids(purchase.id())
            .await?;

        Ok(SeatUsage {
            purchase,
            assigned_user_ids,
        })
    }
}
