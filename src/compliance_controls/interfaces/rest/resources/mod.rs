pub mod compliance_controls_error_response_resource;
pub mod control_request_resources;
pub mod control_resource;
