pub mod add_on_name;
pub mod seat_assignment_domain_error;
