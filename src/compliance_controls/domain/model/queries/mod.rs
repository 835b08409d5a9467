pub mod evaluate_control_query;
pub mod validate_expression_query;
