use audit_stream_service::audit_streaming::domain::{
    model::{
        commands::{
            record_audit_event_command::{RecordAuditEventCommand, RecordAuditEventCommandParts},
            stream_audit_event_command::AuditEventSource,
        },
        enums::{
            audit_event_model_class::AuditEventModelClass, audit_event_scope::AuditEventScope,
            audit_streaming_domain_error::AuditStreamingDomainError,
        },
        value_objects::audit_event_id::AuditEventId,
    },
    services::audit_event_command_service::AuditEventCommandService,
};
use serde_json::{Value, json};

use crate::support::{PROJECT_ID, create_record_harness};

fn record_command(stream_only: bool) -> RecordAuditEventCommand {
    RecordAuditEventCommand::new(RecordAuditEventCommandParts {
        event_type: "project_renamed".to_string(),
        scope: AuditEventScope::Project(PROJECT_ID),
        author_id: 7,
        author_name: "Jane".to_string(),
        entity_path: Some("root-group/sub/app".to_string()),
        target_id: Some(PROJECT_ID),
        target_type: Some("Project".to_string()),
        target_details: Some("app".to_string()),
        ip_address: Some("10.0.0.1".to_string()),
        details: json!({ "custom_message": "Renamed project" }),
        stream_only,
    })
    .expect("valid record command")
}

#[tokio::test]
async fn persisted_event_is_queued_by_id() {
    let harness = create_record_harness();

    let event = harness
        .service
        .handle_record(record_command(false))
        .await
        .expect("event recorded");

    assert_eq!(event.id(), AuditEventId::Persisted(1));
    assert_eq!(
        harness.audit_event_repository.saved_event_types(),
        vec!["project_renamed".to_string()]
    );

    let commands = harness.dispatcher.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].event_type().value(), "project_renamed");
    assert!(matches!(
        commands[0].source(),
        AuditEventSource::Id {
            audit_event_id: 1,
            model_class,
        } if model_class == AuditEventModelClass::AuditEvent.as_str()
    ));
}

#[tokio::test]
async fn stream_only_event_is_queued_as_json_without_saving() {
    let harness = create_record_harness();

    let event = harness
        .service
        .handle_record(record_command(true))
        .await
        .expect("event recorded");

    assert!(matches!(event.id(), AuditEventId::StreamOnly(_)));
    assert!(harness.audit_event_repository.saved_event_types().is_empty());

    let commands = harness.dispatcher.commands();
    assert_eq!(commands.len(), 1);
    let AuditEventSource::Json(payload) = commands[0].source() else {
        panic!("expected a json source");
    };
    assert_eq!(payload["project_id"], json!(PROJECT_ID));
    assert_eq!(payload["entity_type"], json!("Project"));
    assert_eq!(payload["details"]["custom_message"], json!("Renamed project"));
    assert!(matches!(payload["id"], Value::String(_)));
}

#[tokio::test]
async fn unavailable_queue_does_not_fail_the_record() {
    let harness = create_record_harness();
    harness.dispatcher.make_unavailable();

    let event = harness
        .service
        .handle_record(record_command(false))
        .await
        .expect("recording succeeds without the queue");

    assert_eq!(event.id(), AuditEventId::Persisted(1));
    assert!(harness.dispatcher.commands().is_empty());
}

#[test]
fn non_object_details_are_rejected() {
    let result = RecordAuditEventCommand::new(RecordAuditEventCommandParts {
        event_type: "project_renamed".to_string(),
        scope: AuditEventScope::Instance,
        author_id: 7,
        author_name: "Jane".to_string(),
        entity_path: None,
        target_id: None,
        target_type: None,
        target_details: None,
        ip_address: None,
        details: json!(["not", "an", "object"]),
        stream_only: false,
    });

    assert!(matches!(
        result,
        Err(AuditStreamingDomainError::InvalidAuditEvent(_))
    ));
}

#[test]
fn blank_event_type_is_rejected() {
    let result = RecordAuditEventCommand::new(RecordAuditEventCommandParts {
        event_type: "  ".to_string(),
        scope: AuditEventScope::Instance,
        author_id: 7,
        author_name: "Jane".to_string(),
        entity_path: None,
        target_id: None,
        target_type: None,
        target_details: None,
        ip_address: None,
        details: Value::Null,
        stream_only: false,
    });

    assert!(matches!(result, Err(AuditStreamingDomainError::InvalidEventType)));
}
