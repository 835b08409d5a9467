pub mod seat_assignment_command_service_impl;
