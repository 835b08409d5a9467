pub mod compliance_control_query_service_impl;
