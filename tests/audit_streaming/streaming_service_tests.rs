use audit_stream_service::audit_streaming::domain::{
    model::{
        commands::stream_audit_event_command::StreamAuditEventCommand,
        enums::{
            audit_event_model_class::AuditEventModelClass,
            audit_event_scope::AuditEventScope,
            audit_streaming_domain_error::AuditStreamingDomainError,
            destination_level::DestinationLevel,
            streaming_outcome::{SkipReason, StreamingOutcome},
        },
        value_objects::streaming_feature_toggles::StreamingFeatureToggles,
    },
    services::audit_event_streaming_service::AuditEventStreamingService,
};
use serde_json::{Value, json};

use crate::support::{
    OTHER_ROOT_GROUP_ID, PROJECT_ID, ROOT_GROUP_ID, audit_event, event_type,
    filtered_destination, group_destination, instance_destination, capture_logs,
    create_streaming_harness,
};

fn stream_by_id(event_type_name: &str, audit_event_id: i64) -> StreamAuditEventCommand {
    StreamAuditEventCommand::for_event_id(
        event_type(event_type_name),
        audit_event_id,
        AuditEventModelClass::AuditEvent,
    )
}

fn delivered(attempted: usize, failed: usize) -> StreamingOutcome {
    StreamingOutcome::Delivered {
        attempted,
        succeeded: attempted - failed,
        failed,
    }
}

#[tokio::test]
async fn unfiltered_destination_receives_exactly_one_post() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));
    let id = harness
        .audit_event_repository
        .insert(audit_event(AuditEventScope::Instance), "user_created");

    let outcome = harness
        .service
        .handle_stream(stream_by_id("user_created", id))
        .await
        .expect("streaming succeeds");

    assert_eq!(outcome, delivered(1, 0));
    let deliveries = harness.gateway.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].event_type, "user_created");

    let body: Value = serde_json::from_slice(&deliveries[0].body).expect("json body");
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["event_type"], json!("user_created"));
    assert_eq!(body["entity_type"], json!("Gitlab::Audit::InstanceScope"));
    assert_eq!(body["details"]["custom_message"], json!("Changed access level"));
}

#[tokio::test]
async fn destination_whose_filter_lacks_the_type_receives_nothing() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness.destination_repository.insert(filtered_destination(
        DestinationLevel::Instance,
        "https://siem.example.com/audit",
        &["project_deleted"],
        None,
    ));
    let id = harness
        .audit_event_repository
        .insert(audit_event(AuditEventScope::Instance), "user_created");

    let outcome = harness
        .service
        .handle_stream(stream_by_id("user_created", id))
        .await
        .expect("streaming succeeds");

    assert_eq!(outcome, delivered(0, 0));
    assert_eq!(harness.gateway.delivery_count(), 0);
}

#[tokio::test]
async fn every_eligible_destination_receives_one_post() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));
    harness
        .destination_repository
        .insert(group_destination(ROOT_GROUP_ID, "https://root.example.com/audit"));
    harness.destination_repository.insert(group_destination(
        OTHER_ROOT_GROUP_ID,
        "https://other.example.com/audit",
    ));
    let id = harness
        .audit_event_repository
        .insert(audit_event(AuditEventScope::Project(PROJECT_ID)), "project_renamed");

    let outcome = harness
        .service
        .handle_stream(stream_by_id("project_renamed", id))
        .await
        .expect("streaming succeeds");

    assert_eq!(outcome, delivered(2, 0));
    assert_eq!(harness.gateway.delivery_count(), 2);
}

#[tokio::test]
async fn failing_destination_does_not_block_the_others() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://down.example.com/audit"));
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));
    harness.gateway.fail_for("https://down.example.com/audit");
    let id = harness
        .audit_event_repository
        .insert(audit_event(AuditEventScope::Instance), "user_created");

    let outcome = harness
        .service
        .handle_stream(stream_by_id("user_created", id))
        .await
        .expect("delivery failures are not job failures");

    assert_eq!(outcome, delivered(2, 1));
    assert_eq!(harness.gateway.delivery_count(), 2);
}

#[tokio::test]
async fn silent_mode_skips_before_any_lookup() {
    let harness = create_streaming_harness(StreamingFeatureToggles {
        silent_mode_enabled: true,
        ..StreamingFeatureToggles::default()
    });
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));

    let outcome = harness
        .service
        .handle_stream(stream_by_id("user_created", 999))
        .await
        .expect("skip is not an error");

    assert_eq!(outcome, StreamingOutcome::Skipped(SkipReason::SilentMode));
    assert_eq!(harness.gateway.delivery_count(), 0);
}

#[tokio::test]
async fn disabled_or_unlicensed_streaming_is_skipped() {
    let disabled = create_streaming_harness(StreamingFeatureToggles {
        streaming_enabled: false,
        ..StreamingFeatureToggles::default()
    });
    let unlicensed = create_streaming_harness(StreamingFeatureToggles {
        licensed: false,
        ..StreamingFeatureToggles::default()
    });

    let disabled_outcome = disabled
        .service
        .handle_stream(stream_by_id("user_created", 1))
        .await
        .expect("skip");
    let unlicensed_outcome = unlicensed
        .service
        .handle_stream(stream_by_id("user_created", 1))
        .await
        .expect("skip");

    assert_eq!(
        disabled_outcome,
        StreamingOutcome::Skipped(SkipReason::StreamingDisabled)
    );
    assert_eq!(
        unlicensed_outcome,
        StreamingOutcome::Skipped(SkipReason::Unlicensed)
    );
}

#[tokio::test]
async fn missing_audit_event_is_unresolved_without_delivery() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));

    let outcome = harness
        .service
        .handle_stream(stream_by_id("user_created", 404))
        .await
        .expect("unresolved events are not retried");

    assert_eq!(outcome, StreamingOutcome::Unresolved);
    assert_eq!(harness.gateway.delivery_count(), 0);
}

#[tokio::test]
async fn unresolved_event_logs_a_single_fetch_error() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    let (logs, _guard) = capture_logs();

    let outcome = harness
        .service
        .handle_stream(stream_by_id("user_created", 404))
        .await
        .expect("unresolved events are not retried");

    assert_eq!(outcome, StreamingOutcome::Unresolved);
    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["fields"]["error"], json!("Failed to fetch audit event"));
    assert_eq!(errors[0]["fields"]["audit_event_type"], json!("user_created"));
}

#[tokio::test]
async fn unknown_model_class_is_logged_and_unresolved() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));
    let id = harness
        .audit_event_repository
        .insert(audit_event(AuditEventScope::Instance), "user_created");
    let command = StreamAuditEventCommand::new(
        "user_created".to_string(),
        Some(id),
        None,
        Some("NonExistentClass".to_string()),
    )
    .expect("model class is checked when the event is fetched");
    let (logs, _guard) = capture_logs();

    let outcome = harness
        .service
        .handle_stream(command)
        .await
        .expect("resolution failure is not an error");

    assert_eq!(outcome, StreamingOutcome::Unresolved);
    assert_eq!(harness.gateway.delivery_count(), 0);
    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["fields"]["error"], json!("Failed to fetch audit event"));
    assert!(
        errors[0]["fields"]["reason"]
            .as_str()
            .is_some_and(|reason| reason.contains("NonExistentClass"))
    );
}

#[tokio::test]
async fn storage_failure_is_returned_for_retry() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness.audit_event_repository.fail_find();

    let result = harness
        .service
        .handle_stream(stream_by_id("user_created", 1))
        .await;

    assert!(matches!(
        result,
        Err(AuditStreamingDomainError::InfrastructureError(_))
    ));
}

#[tokio::test]
async fn scoped_model_class_does_not_match_other_scopes() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));
    let id = harness
        .audit_event_repository
        .insert(audit_event(AuditEventScope::Instance), "user_created");

    let outcome = harness
        .service
        .handle_stream(StreamAuditEventCommand::for_event_id(
            event_type("user_created"),
            id,
            AuditEventModelClass::ProjectAuditEvent,
        ))
        .await
        .expect("resolution failure is not an error");

    assert_eq!(outcome, StreamingOutcome::Unresolved);
}

#[tokio::test]
async fn json_event_is_streamed_to_its_root_group() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(group_destination(ROOT_GROUP_ID, "https://root.example.com/audit"));

    let command = StreamAuditEventCommand::new(
        "member_added".to_string(),
        None,
        Some(json!({
            "author_id": 7,
            "author_name": "Jane",
            "group_id": ROOT_GROUP_ID,
            "details": "Added a member",
            "created_at": "2026-02-03T04:05:06.000Z"
        })),
        None,
    )
    .expect("valid command");

    let outcome = harness
        .service
        .handle_stream(command)
        .await
        .expect("streaming succeeds");

    assert_eq!(outcome, delivered(1, 0));
    let body: Value =
        serde_json::from_slice(&harness.gateway.deliveries()[0].body).expect("json body");
    assert_eq!(body["group_id"], json!(ROOT_GROUP_ID));
    assert_eq!(body["details"]["custom_message"], json!("Added a member"));
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn serialized_json_string_is_streamed_like_an_object() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(group_destination(ROOT_GROUP_ID, "https://root.example.com/audit"));
    let serialized = json!({
        "id": 55,
        "author_id": 7,
        "author_name": "Jane",
        "group_id": ROOT_GROUP_ID,
        "details": { "custom_message": "Added a member" },
        "created_at": "2026-02-03T04:05:06.000Z"
    })
    .to_string();

    let command = StreamAuditEventCommand::new(
        "member_added".to_string(),
        None,
        Some(Value::String(serialized)),
        None,
    )
    .expect("valid command");

    let outcome = harness
        .service
        .handle_stream(command)
        .await
        .expect("streaming succeeds");

    assert_eq!(outcome, delivered(1, 0));
    let body: Value =
        serde_json::from_slice(&harness.gateway.deliveries()[0].body).expect("json body");
    assert_eq!(body["id"], json!(55));
    assert_eq!(body["group_id"], json!(ROOT_GROUP_ID));
}

#[tokio::test]
async fn malformed_json_string_is_unresolved() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));

    let command = StreamAuditEventCommand::new(
        "member_added".to_string(),
        None,
        Some(json!("{invalid_json")),
        None,
    )
    .expect("valid command");

    let outcome = harness
        .service
        .handle_stream(command)
        .await
        .expect("resolution failure is not an error");

    assert_eq!(outcome, StreamingOutcome::Unresolved);
    assert_eq!(harness.gateway.delivery_count(), 0);
}

#[tokio::test]
async fn event_for_unknown_group_only_reaches_instance_destinations() {
    let harness = create_streaming_harness(StreamingFeatureToggles::default());
    harness
        .destination_repository
        .insert(instance_destination("https://siem.example.com/audit"));
    harness
        .destination_repository
        .insert(group_destination(ROOT_GROUP_ID, "https://root.example.com/audit"));
    let id = harness
        .audit_event_repository
        .insert(audit_event(AuditEventScope::Group(9_999)), "group_deleted");

    let outcome = harness
        .service
        .handle_stream(stream_by_id("group_deleted", id))
        .await
        .expect("streaming succeeds");

    assert_eq!(outcome, delivered(1, 0));
}

#[test]
fn passing_both_sources_is_rejected() {
    let error = StreamAuditEventCommand::new(
        "user_created".to_string(),
        Some(1),
        Some(json!({ "author_id": 1 })),
        None,
    )
    .expect_err("ambiguous source");

    assert_eq!(
        error.to_string(),
        "audit_event_id and audit_event_json cannot be passed together"
    );
}

#[test]
fn passing_no_source_is_rejected() {
    let result = StreamAuditEventCommand::new("user_created".to_string(), None, None, None);

    assert!(matches!(
        result,
        Err(AuditStreamingDomainError::MissingAuditEventSource)
    ));
}
