pub mod seat_assignment_command_service;
pub mod seat_assignment_query_service;
