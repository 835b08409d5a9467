use async_trait::async_trait;

use crate::seat_assignment::domain::model::{
    commands::{
        bulk_assign_seats_command::BulkAssignSeatsCommand,
        bulk_unassign_seats_command::BulkUnassignSeatsCommand,
    },
    enums::seat_assignment_domain_error::SeatAssignmentDomainError,
};

#[async_trait]
pub trait SeatAssignmentCommandService: Send + Sync {
    /// Returns every requested user id, including those already holding a seat.
    async fn handle_bulk_assign(
        &self,
        command: BulkAssignSeatsCommand,
    ) -> Result<Vec<i64>, SeatAssignmentDomainError>;

    /// Returns the ids whose assignment was removed.
    async fn handle_bulk_unassign(
        &self,
        command: BulkUnassignSeatsCommand,
    ) -> Result<Vec<i64>, SeatAssignmentDomainError>;
}
