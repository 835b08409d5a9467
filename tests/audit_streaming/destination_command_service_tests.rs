use audit_stream_service::audit_streaming::domain::{
    model::{
        commands::{
            add_streaming_header_command::AddStreamingHeaderCommand,
            create_destination_command::{CreateDestinationCommand, CreateDestinationCommandParts},
            destination_reference_command::DestinationReferenceCommand,
            event_type_filters_command::EventTypeFiltersCommand,
            remove_streaming_header_command::RemoveStreamingHeaderCommand,
            set_namespace_filter_command::SetNamespaceFilterCommand,
            stream_audit_event_command::AuditEventSource,
            update_destination_command::UpdateDestinationCommand,
        },
        entities::external_destination::ExternalDestination,
        enums::{
            audit_streaming_domain_error::AuditStreamingDomainError,
            destination_level::DestinationLevel,
        },
        queries::list_destinations_query::ListDestinationsQuery,
        value_objects::{destination_id::DestinationId, namespace_filter::NamespaceFilter},
    },
    services::{
        audit_event_destination_command_service::AuditEventDestinationCommandService,
        audit_event_destination_query_service::AuditEventDestinationQueryService,
    },
};

use crate::support::{
    OTHER_ROOT_GROUP_ID, PROJECT_ID, ROOT_GROUP_ID, SUBGROUP_ID, VERIFICATION_TOKEN, actor,
    create_destination_harness,
};

fn create_command(level: DestinationLevel, url: &str) -> CreateDestinationCommand {
    CreateDestinationCommand::new(CreateDestinationCommandParts {
        level,
        name: None,
        destination_url: url.to_string(),
        verification_token: Some(VERIFICATION_TOKEN.to_string()),
        actor: actor(),
    })
    .expect("valid create command")
}

async fn create_group_destination(
    service: &dyn AuditEventDestinationCommandService,
    url: &str,
) -> ExternalDestination {
    service
        .handle_create(create_command(DestinationLevel::Group(ROOT_GROUP_ID), url))
        .await
        .expect("destination created")
}

#[tokio::test]
async fn create_group_destination_persists_and_records_an_audit_event() {
    let harness = create_destination_harness();

    let destination =
        create_group_destination(&harness.service, "https://siem.example.com/audit").await;

    assert_eq!(destination.level(), DestinationLevel::Group(ROOT_GROUP_ID));
    assert!(destination.active());
    assert!(destination.name().value().starts_with("Destination_"));
    assert_eq!(destination.verification_token().value(), VERIFICATION_TOKEN);
    assert!(harness.destination_repository.get(destination.id()).is_some());

    assert_eq!(
        harness.audit_event_repository.saved_event_types(),
        vec!["audit_event_destination_created".to_string()]
    );
    let commands = harness.dispatcher.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(
        commands[0].event_type().value(),
        "audit_event_destination_created"
    );
    assert!(matches!(commands[0].source(), AuditEventSource::Id { .. }));
}

#[tokio::test]
async fn create_instance_destination_generates_a_token() {
    let harness = create_destination_harness();

    let destination = harness
        .service
        .handle_create(
            CreateDestinationCommand::new(CreateDestinationCommandParts {
                level: DestinationLevel::Instance,
                name: Some("Primary SIEM".to_string()),
                destination_url: "https://siem.example.com/audit".to_string(),
                verification_token: None,
                actor: actor(),
            })
            .expect("valid create command"),
        )
        .await
        .expect("destination created");

    assert_eq!(destination.name().value(), "Primary SIEM");
    assert_eq!(destination.verification_token().value().chars().count(), 24);
}

#[tokio::test]
async fn subgroup_cannot_own_a_destination() {
    let harness = create_destination_harness();

    let result = harness
        .service
        .handle_create(create_command(
            DestinationLevel::Group(SUBGROUP_ID),
            "https://siem.example.com/audit",
        ))
        .await;

    assert!(matches!(
        result,
        Err(AuditStreamingDomainError::GroupIsNotRootGroup)
    ));
    assert_eq!(harness.destination_repository.count(), 0);
}

#[tokio::test]
async fn unknown_group_cannot_own_a_destination() {
    let harness = create_destination_harness();

    let result = harness
        .service
        .handle_create(create_command(
            DestinationLevel::Group(404),
            "https://siem.example.com/audit",
        ))
        .await;

    assert!(matches!(result, Err(AuditStreamingDomainError::GroupNotFound)));
}

#[tokio::test]
async fn sixth_destination_for_one_owner_is_rejected() {
    let harness = create_destination_harness();
    for index in 0..5 {
        create_group_destination(
            &harness.service,
            &format!("https://siem{index}.example.com/audit"),
        )
        .await;
    }

    let result = harness
        .service
        .handle_create(create_command(
            DestinationLevel::Group(ROOT_GROUP_ID),
            "https://siem5.example.com/audit",
        ))
        .await;

    assert!(matches!(
        result,
        Err(AuditStreamingDomainError::DestinationLimitExceeded)
    ));

    harness
        .service
        .handle_create(create_command(
            DestinationLevel::Group(OTHER_ROOT_GROUP_ID),
            "https://siem5.example.com/audit",
        ))
        .await
        .expect("limit is per owner");
}

#[tokio::test]
async fn duplicate_url_within_one_owner_is_rejected() {
    let harness = create_destination_harness();
    create_group_destination(&harness.service, "https://siem.example.com/audit").await;

    let result = harness
        .service
        .handle_create(create_command(
            DestinationLevel::Group(ROOT_GROUP_ID),
            "https://siem.example.com/audit",
        ))
        .await;

    assert!(matches!(
        result,
        Err(AuditStreamingDomainError::DestinationUrlTaken)
    ));
}

#[tokio::test]
async fn update_changes_only_the_given_fields() {
    let harness = create_destination_harness();
    let destination =
        create_group_destination(&harness.service, "https://siem.example.com/audit").await;

    let updated = harness
        .service
        .handle_update(
            UpdateDestinationCommand::new(
                destination.id(),
                None,
                None,
                Some(false),
                actor(),
            )
            .expect("valid update"),
        )
        .await
        .expect("destination updated");

    assert!(!updated.active());
    assert_eq!(updated.name(), destination.name());
    assert_eq!(
        updated.destination_url().value(),
        "https://siem.example.com/audit"
    );
}

#[tokio::test]
async fn headers_can_be_added_and_removed() {
    let harness = create_destination_harness();
    let destination =
        create_group_destination(&harness.service, "https://siem.example.com/audit").await;

    let with_header = harness
        .service
        .handle_add_header(
            AddStreamingHeaderCommand::new(
                destination.id(),
                "X-Tenant".to_string(),
                "acme".to_string(),
                true,
                actor(),
            )
            .expect("valid header"),
        )
        .await
        .expect("header added");
    assert_eq!(with_header.headers().len(), 1);

    let duplicate = harness
        .service
        .handle_add_header(
            AddStreamingHeaderCommand::new(
                destination.id(),
                "x-tenant".to_string(),
                "other".to_string(),
                true,
                actor(),
            )
            .expect("valid header"),
        )
        .await;
    assert!(matches!(
        duplicate,
        Err(AuditStreamingDomainError::DuplicateHeaderKey)
    ));

    let without_header = harness
        .service
        .handle_remove_header(
            RemoveStreamingHeaderCommand::new(destination.id(), "X-Tenant".to_string(), actor())
                .expect("valid key"),
        )
        .await
        .expect("header removed");
    assert!(without_header.headers().is_empty());

    assert_eq!(
        harness.audit_event_repository.saved_event_types(),
        vec![
            "audit_event_destination_created".to_string(),
            "audit_event_streaming_header_created".to_string(),
            "audit_event_streaming_header_destroyed".to_string(),
        ]
    );
}

#[tokio::test]
async fn removing_unknown_filters_names_every_missing_type() {
    let harness = create_destination_harness();
    let destination =
        create_group_destination(&harness.service, "https://siem.example.com/audit").await;
    harness
        .service
        .handle_add_event_type_filters(
            EventTypeFiltersCommand::new(
                destination.id(),
                vec!["user_created".to_string()],
                actor(),
            )
            .expect("valid filters"),
        )
        .await
        .expect("filters added");

    let error = harness
        .service
        .handle_remove_event_type_filters(
            EventTypeFiltersCommand::new(
                destination.id(),
                vec![
                    "user_created".to_string(),
                    "project_deleted".to_string(),
                    "group_created".to_string(),
                ],
                actor(),
            )
            .expect("valid filters"),
        )
        .await
        .expect_err("missing filters");

    assert_eq!(
        error.to_string(),
        "Couldn't find event type filters where audit event type(s): project_deleted, group_created"
    );
    let stored = harness
        .destination_repository
        .get(destination.id())
        .expect("stored destination");
    assert_eq!(stored.event_type_filters().len(), 1);
}

#[tokio::test]
async fn namespace_filter_must_stay_inside_the_root_group() {
    let harness = create_destination_harness();
    let destination =
        create_group_destination(&harness.service, "https://siem.example.com/audit").await;

    let filtered = harness
        .service
        .handle_set_namespace_filter(
            SetNamespaceFilterCommand::new(destination.id(), None, Some(PROJECT_ID), actor())
                .expect("valid filter"),
        )
        .await
        .expect("project filter accepted");
    assert_eq!(
        filtered.namespace_filter(),
        Some(NamespaceFilter::Project(PROJECT_ID))
    );

    let outside = harness
        .service
        .handle_set_namespace_filter(
            SetNamespaceFilterCommand::new(
                destination.id(),
                Some(OTHER_ROOT_GROUP_ID),
                None,
                actor(),
            )
            .expect("valid filter"),
        )
        .await;
    assert!(matches!(
        outside,
        Err(AuditStreamingDomainError::NamespaceFilterOutsideHierarchy)
    ));

    let cleared = harness
        .service
        .handle_remove_namespace_filter(DestinationReferenceCommand::new(destination.id(), actor()))
        .await
        .expect("filter removed");
    assert_eq!(cleared.namespace_filter(), None);
}

#[tokio::test]
async fn delete_removes_the_destination() {
    let harness = create_destination_harness();
    let destination =
        create_group_destination(&harness.service, "https://siem.example.com/audit").await;

    harness
        .service
        .handle_delete(DestinationReferenceCommand::new(destination.id(), actor()))
        .await
        .expect("destination deleted");

    let lookup = harness.query_service.handle_find(destination.id()).await;
    assert!(matches!(
        lookup,
        Err(AuditStreamingDomainError::DestinationNotFound)
    ));
    let second_delete = harness
        .service
        .handle_delete(DestinationReferenceCommand::new(destination.id(), actor()))
        .await;
    assert!(matches!(
        second_delete,
        Err(AuditStreamingDomainError::DestinationNotFound)
    ));
}

#[tokio::test]
async fn list_returns_only_the_requested_owner() {
    let harness = create_destination_harness();
    create_group_destination(&harness.service, "https://siem.example.com/audit").await;
    harness
        .service
        .handle_create(create_command(
            DestinationLevel::Instance,
            "https://instance.example.com/audit",
        ))
        .await
        .expect("destination created");

    let group = harness
        .query_service
        .handle_list(ListDestinationsQuery::for_group(ROOT_GROUP_ID).expect("valid group"))
        .await
        .expect("listed");
    let instance = harness
        .query_service
        .handle_list(ListDestinationsQuery::for_instance())
        .await
        .expect("listed");

    assert_eq!(group.len(), 1);
    assert_eq!(instance.len(), 1);
    assert_eq!(
        instance[0].destination_url().value(),
        "https://instance.example.com/audit"
    );
}

#[tokio::test]
async fn unknown_destination_is_not_found() {
    let harness = create_destination_harness();

    let result = harness
        .service
        .handle_add_event_type_filters(
            EventTypeFiltersCommand::new(
                DestinationId::generate(),
                vec!["user_created".to_string()],
                actor(),
            )
            .expect("valid filters"),
        )
        .await;

    assert!(matches!(
        result,
        Err(AuditStreamingDomainError::DestinationNotFound)
    ));
}
