pub mod bulk_assign_seats_command;
pub mod bulk_unassign_seats_command;
