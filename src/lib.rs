pub mod audit_streaming;
pub mod compliance_controls;
pub mod config;
pub mod seat_assignment;
