mod support;

mod seat_assignment_endpoints_tests;
mod seat_usage_tests;
