use async_trait::async_trait;

use crate::seat_assignment::domain::model::{
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
    queries::seat_usage_query::SeatUsageQuery, value_objects::seat_usage::SeatUsage,
};

#[async_trait]
pub trait SeatAssignmentQueryService: Send + Sync {
    async fn handle_seat_usage(
        &self,
        query: SeatUsageQuery,
    ) -> Result<SeatUsage, SeatAssignmentDomainError>;
}
