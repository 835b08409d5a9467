pub mod control_definition;
