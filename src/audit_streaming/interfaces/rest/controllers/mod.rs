pub mod audit_streaming_rest_controller;
