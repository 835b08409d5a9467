
mod control_query_service_tests;
