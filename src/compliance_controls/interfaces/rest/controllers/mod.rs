pub mod compliance_controls_rest_controller;
