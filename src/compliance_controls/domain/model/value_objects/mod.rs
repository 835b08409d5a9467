pub mod control_expression;
pub mod control_id;
pub mod control_manifest;
pub mod control_value;
