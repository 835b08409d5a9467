pub mod compliance_controls_domain_error;
pub mod compliance_status;
pub mod control_operator;
pub mod control_type;
