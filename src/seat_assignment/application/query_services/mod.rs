pub mod seat_assignment_query_service_impl;
