pub mod seat_assignment_error_response_resource;
pub mod seat_assignment_request_resource;
pub mod seat_assignment_resource;
