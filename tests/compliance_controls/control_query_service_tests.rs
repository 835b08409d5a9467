use audit_stream_service::compliance_controls::domain::{
    model::{
        enums::{
            compliance_controls_domain_error::ComplianceControlsDomainError,
            compliance_status::ComplianceStatus,
        },
        queries::{
            evaluate_control_query::EvaluateControlQuery,
            validate_expression_query::ValidateExpressionQuery,
        },
    },
    services::compliance_control_query_service::ComplianceControlQueryService,
};
use serde_json::json;

use crate::support::create_query_service;

async fn evaluate(
    control_id: &str,
    observed: serde_json::Value,
) -> Result<ComplianceStatus, ComplianceControlsDomainError> {
    let query = EvaluateControlQuery::new(control_id.to_string(), &observed)?;
    create_query_service().handle_evaluate(query).await
}

#[tokio::test]
async fn list_controls_is_sorted_by_id() {
    let controls = create_query_service().handle_list_controls().await;

    let ids: Vec<&str> = controls.iter().map(|control| control.id().value()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn boolean_control_passes_on_the_compliant_value() {
    assert_eq!(
        evaluate("scanner_sast_running", json!(true)).await.expect("evaluated"),
        ComplianceStatus::Pass
    );
    assert_eq!(
        evaluate("scanner_sast_running", json!(false)).await.expect("evaluated"),
        ComplianceStatus::Fail
    );
}

#[tokio::test]
async fn numeric_control_compares_against_the_threshold() {
    assert_eq!(
        evaluate("minimum_approvals_required_2", json!(3)).await.expect("evaluated"),
        ComplianceStatus::Pass
    );
    assert_eq!(
        evaluate("minimum_approvals_required_2", json!(2)).await.expect("evaluated"),
        ComplianceStatus::Pass
    );
    assert_eq!(
        evaluate("minimum_approvals_required_2", json!(1)).await.expect("evaluated"),
        ComplianceStatus::Fail
    );
}

#[tokio::test]
async fn string_control_rejects_the_forbidden_value() {
    assert_eq!(
        evaluate("project_visibility_not_internal", json!("private"))
            .await
            .expect("evaluated"),
        ComplianceStatus::Pass
    );
    assert_eq!(
        evaluate("project_visibility_not_internal", json!("internal"))
            .await
            .expect("evaluated"),
        ComplianceStatus::Fail
    );
}

#[tokio::test]
async fn negative_boolean_control_expects_false() {
    assert_eq!(
        evaluate("default_branch_users_can_push", json!(false))
            .await
            .expect("evaluated"),
        ComplianceStatus::Pass
    );
}

#[tokio::test]
async fn value_of_the_wrong_type_is_rejected() {
    let result = evaluate("minimum_approvals_required_2", json!("two")).await;

    let Err(ComplianceControlsDomainError::ValueTypeMismatch {
        control_id,
        expected,
    }) = result
    else {
        panic!("expected a type mismatch");
    };
    assert_eq!(control_id, "minimum_approvals_required_2");
    assert_eq!(expected, "number");
}

#[tokio::test]
async fn unknown_control_is_not_found() {
    let result = evaluate("no_such_control", json!(true)).await;

    assert!(matches!(
        result,
        Err(ComplianceControlsDomainError::ControlNotFound(id)) if id == "no_such_control"
    ));
}

#[tokio::test]
async fn matching_expression_is_valid() {
    let query = ValidateExpressionQuery::new(
        "minimum_approvals_required_2".to_string(),
        json!({ "field": "minimum_approvals_required", "operator": ">=", "value": 2 }),
    )
    .expect("valid query");

    create_query_service()
        .handle_validate_expression(query)
        .await
        .expect("expression matches");
}

#[tokio::test]
async fn expression_without_field_id_uses_the_control_id() {
    let query = ValidateExpressionQuery::new(
        "scanner_sast_running".to_string(),
        json!({ "field": "scanner_sast_running", "operator": "=", "value": true }),
    )
    .expect("valid query");

    create_query_service()
        .handle_validate_expression(query)
        .await
        .expect("expression matches");
}

#[tokio::test]
async fn expression_with_another_threshold_is_a_mismatch() {
    let query = ValidateExpressionQuery::new(
        "minimum_approvals_required_2".to_string(),
        json!({ "field": "minimum_approvals_required", "operator": ">=", "value": 1 }),
    )
    .expect("valid query");

    let error = create_query_service()
        .handle_validate_expression(query)
        .await
        .expect_err("mismatch");

    assert_eq!(
        error.to_string(),
        "Expression does not match the name of the predefined control."
    );
}

#[tokio::test]
async fn malformed_expression_is_a_mismatch() {
    let query = ValidateExpressionQuery::new(
        "scanner_sast_running".to_string(),
        json!({ "field": "scanner_sast_running", "operator": "~=", "value": true }),
    )
    .expect("valid query");

    let result = create_query_service().handle_validate_expression(query).await;

    assert!(matches!(
        result,
        Err(ComplianceControlsDomainError::ExpressionMismatch)
    ));
}

#[test]
fn non_object_expression_is_rejected_up_front() {
    let result = ValidateExpressionQuery::new("scanner_sast_running".to_string(), json!("x"));

    assert!(matches!(
        result,
        Err(ComplianceControlsDomainError::ExpressionMismatch)
    ));
}
