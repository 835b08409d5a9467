use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, post, put},
};
use chrono::SecondsFormat;
use validator::Validate;

use crate::audit_streaming::{
    domain::{
        model::{
            commands::{
                add_streaming_header_command::AddStreamingHeaderCommand,
                create_destination_command::{
                    CreateDestinationCommand, CreateDestinationCommandParts,
                },
                destination_reference_command::DestinationReferenceCommand,
                event_type_filters_command::EventTypeFiltersCommand,
                record_audit_event_command::{
                    RecordAuditEventCommand, RecordAuditEventCommandParts,
                },
                remove_streaming_header_command::RemoveStreamingHeaderCommand,
                set_namespace_filter_command::SetNamespaceFilterCommand,
                stream_audit_event_command::StreamAuditEventCommand,
                update_destination_command::UpdateDestinationCommand,
            },
            entities::{audit_event::AuditEvent, external_destination::ExternalDestination},
            enums::{
                audit_event_scope::AuditEventScope,
                audit_streaming_domain_error::AuditStreamingDomainError,
                destination_level::DestinationLevel,
            },
            queries::list_destinations_query::ListDestinationsQuery,
            value_objects::{audit_actor::AuditActor, destination_id::DestinationId},
        },
        services::{
            audit_event_command_service::AuditEventCommandService,
            audit_event_destination_command_service::AuditEventDestinationCommandService,
            audit_event_destination_query_service::AuditEventDestinationQueryService,
        },
    },
    infrastructure::jobs::streaming_job_dispatcher::StreamingJobDispatcher,
    interfaces::rest::resources::{
        audit_event_resource::AuditEventResource,
        audit_streaming_error_response_resource::AuditStreamingErrorResponseResource,
        destination_request_resources::{
            AddStreamingHeaderRequestResource, CreateDestinationRequestResource,
            EventTypeFiltersRequestResource, NamespaceFilterRequestResource,
            UpdateDestinationRequestResource,
        },
        destination_resource::{
            DestinationResource, NamespaceFilterResource, StreamingHeaderResource,
        },
        record_audit_event_request_resource::RecordAuditEventRequestResource,
        stream_audit_event_request_resource::StreamAuditEventRequestResource,
    },
};

type ErrorResponse = (StatusCode, Json<AuditStreamingErrorResponseResource>);

#[derive(Clone)]
pub struct AuditStreamingRestControllerState {
    pub audit_event_command_service: Arc<dyn AuditEventCommandService>,
    pub destination_command_service: Arc<dyn AuditEventDestinationCommandService>,
    pub destination_query_service: Arc<dyn AuditEventDestinationQueryService>,
    pub job_dispatcher: Arc<dyn StreamingJobDispatcher>,
}

pub fn router(state: AuditStreamingRestControllerState) -> Router {
    Router::new()
        .route("/audit-events", post(record_audit_event))
        .route("/audit-events/stream", post(stream_audit_event))
        .route(
            "/groups/:group_id/audit-event-destinations",
            get(list_group_destinations).post(create_group_destination),
        )
        .route(
            "/admin/audit-event-destinations",
            get(list_instance_destinations).post(create_instance_destination),
        )
        .route(
            "/audit-event-destinations/:destination_id",
            get(get_destination)
                .patch(update_destination)
                .delete(delete_destination),
        )
        .route(
            "/audit-event-destinations/:destination_id/headers",
            post(add_streaming_header),
        )
        .route(
            "/audit-event-destinations/:destination_id/headers/:key",
            delete(remove_streaming_header),
        )
        .route(
            "/audit-event-destinations/:destination_id/event-type-filters",
            post(add_event_type_filters).delete(remove_event_type_filters),
        )
        .route(
            "/audit-event-destinations/:destination_id/namespace-filter",
            put(set_namespace_filter).delete(remove_namespace_filter),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/audit-events",
    tag = "audit-streaming",
    request_body = RecordAuditEventRequestResource,
    responses(
        (status = 201, description = "Audit event recorded and queued for streaming", body = AuditEventResource),
        (status = 400, description = "Invalid request", body = AuditStreamingErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn record_audit_event(
    State(state): State<AuditStreamingRestControllerState>,
    Json(request): Json<RecordAuditEventRequestResource>,
) -> Result<(StatusCode, Json<AuditEventResource>), ErrorResponse> {
    validate_request(&request)?;

    let scope = match (request.scope_type.as_str(), request.scope_id) {
        ("instance", _) => AuditEventScope::Instance,
        ("group", Some(id)) => AuditEventScope::Group(id),
        ("project", Some(id)) => AuditEventScope::Project(id),
        ("user", Some(id)) => AuditEventScope::User(id),
        _ => {
            return Err(map_domain_error(
                AuditStreamingDomainError::InvalidAuditEvent(
                    "scope_id is required for group, project and user scopes".to_string(),
                ),
            ));
        }
    };

    let command = RecordAuditEventCommand::new(RecordAuditEventCommandParts {
        event_type: request.event_type,
        scope,
        author_id: request.author_id,
        author_name: request.author_name,
        entity_path: request.entity_path,
        target_id: request.target_id,
        target_type: request.target_type,
        target_details: request.target_details,
        ip_address: request.ip_address,
        details: request.details,
        stream_only: request.stream_only,
    })
    .map_err(map_domain_error)?;

    let event = state
        .audit_event_command_service
        .handle_record(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(to_audit_event_resource(&event))))
}

#[utoipa::path(
    post,
    path = "/audit-events/stream",
    tag = "audit-streaming",
    request_body = StreamAuditEventRequestResource,
    responses(
        (status = 202, description = "Streaming job queued"),
        (status = 400, description = "Invalid request", body = AuditStreamingErrorResponseResource),
        (status = 503, description = "Streaming queue full", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn stream_audit_event(
    State(state): State<AuditStreamingRestControllerState>,
    Json(request): Json<StreamAuditEventRequestResource>,
) -> Result<StatusCode, ErrorResponse> {
    validate_request(&request)?;

    let command = StreamAuditEventCommand::new(
        request.event_type,
        request.audit_event_id,
        request.audit_event_json,
        request.model_class,
    )
    .map_err(map_domain_error)?;

    state
        .job_dispatcher
        .dispatch(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::ACCEPTED)
}

#[utoipa::path(
    get,
    path = "/groups/{group_id}/audit-event-destinations",
    tag = "audit-streaming",
    params(("group_id" = i64, Path, description = "Root group id")),
    responses(
        (status = 200, description = "Group destinations", body = [DestinationResource]),
        (status = 404, description = "Group not found", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn list_group_destinations(
    State(state): State<AuditStreamingRestControllerState>,
    Path(group_id): Path<i64>,
) -> Result<Json<Vec<DestinationResource>>, ErrorResponse> {
    let query = ListDestinationsQuery::for_group(group_id).map_err(map_domain_error)?;
    list_destinations(&state, query).await
}

#[utoipa::path(
    post,
    path = "/groups/{group_id}/audit-event-destinations",
    tag = "audit-streaming",
    params(
        ("group_id" = i64, Path, description = "Root group id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    request_body = CreateDestinationRequestResource,
    responses(
        (status = 201, description = "Destination created", body = DestinationResource),
        (status = 400, description = "Invalid request", body = AuditStreamingErrorResponseResource),
        (status = 404, description = "Group not found", body = AuditStreamingErrorResponseResource),
        (status = 409, description = "Destination url taken", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn create_group_destination(
    State(state): State<AuditStreamingRestControllerState>,
    Path(group_id): Path<i64>,
    headers: HeaderMap,
    Json(request): Json<CreateDestinationRequestResource>,
) -> Result<(StatusCode, Json<DestinationResource>), ErrorResponse> {
    create_destination(&state, DestinationLevel::Group(group_id), &headers, request).await
}

#[utoipa::path(
    get,
    path = "/admin/audit-event-destinations",
    tag = "audit-streaming",
    responses(
        (status = 200, description = "Instance destinations", body = [DestinationResource])
    )
)]
pub async fn list_instance_destinations(
    State(state): State<AuditStreamingRestControllerState>,
) -> Result<Json<Vec<DestinationResource>>, ErrorResponse> {
    list_destinations(&state, ListDestinationsQuery::for_instance()).await
}

#[utoipa::path(
    post,
    path = "/admin/audit-event-destinations",
    tag = "audit-streaming",
    params(
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    request_body = CreateDestinationRequestResource,
    responses(
        (status = 201, description = "Destination created", body = DestinationResource),
        (status = 400, description = "Invalid request", body = AuditStreamingErrorResponseResource),
        (status = 409, description = "Destination url taken", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn create_instance_destination(
    State(state): State<AuditStreamingRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateDestinationRequestResource>,
) -> Result<(StatusCode, Json<DestinationResource>), ErrorResponse> {
    create_destination(&state, DestinationLevel::Instance, &headers, request).await
}

#[utoipa::path(
    get,
    path = "/audit-event-destinations/{destination_id}",
    tag = "audit-streaming",
    params(("destination_id" = String, Path, description = "Destination id")),
    responses(
        (status = 200, description = "Destination", body = DestinationResource),
        (status = 404, description = "Destination not found", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn get_destination(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
) -> Result<Json<DestinationResource>, ErrorResponse> {
    let destination_id = DestinationId::parse(&destination_id).map_err(map_domain_error)?;

    let destination = state
        .destination_query_service
        .handle_find(destination_id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_destination_resource(&destination)))
}

#[utoipa::path(
    patch,
    path = "/audit-event-destinations/{destination_id}",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    request_body = UpdateDestinationRequestResource,
    responses(
        (status = 200, description = "Destination updated", body = DestinationResource),
        (status = 400, description = "Invalid request", body = AuditStreamingErrorResponseResource),
        (status = 404, description = "Destination not found", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn update_destination(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<UpdateDestinationRequestResource>,
) -> Result<Json<DestinationResource>, ErrorResponse> {
    validate_request(&request)?;
    let actor = parse_actor(&headers)?;
    let destination_id = DestinationId::parse(&destination_id).map_err(map_domain_error)?;

    let command = UpdateDestinationCommand::new(
        destination_id,
        request.name,
        request.destination_url,
        request.active,
        actor,
    )
    .map_err(map_domain_error)?;

    let destination = state
        .destination_command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_destination_resource(&destination)))
}

#[utoipa::path(
    delete,
    path = "/audit-event-destinations/{destination_id}",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 404, description = "Destination not found", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn delete_destination(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
    headers: HeaderMap,
) -> Result<StatusCode, ErrorResponse> {
    let actor = parse_actor(&headers)?;
    let destination_id = DestinationId::parse(&destination_id).map_err(map_domain_error)?;

    state
        .destination_command_service
        .handle_delete(DestinationReferenceCommand::new(destination_id, actor))
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/audit-event-destinations/{destination_id}/headers",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    request_body = AddStreamingHeaderRequestResource,
    responses(
        (status = 201, description = "Header added", body = DestinationResource),
        (status = 400, description = "Invalid header or limit reached", body = AuditStreamingErrorResponseResource),
        (status = 409, description = "Header key taken", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn add_streaming_header(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<AddStreamingHeaderRequestResource>,
) -> Result<(StatusCode, Json<DestinationResource>), ErrorResponse> {
    validate_request(&request)?;
    let actor = parse_actor(&headers)?;
    let destination_id = DestinationId::parse(&destination_id).map_err(map_domain_error)?;

    let command = AddStreamingHeaderCommand::new(
        destination_id,
        request.key,
        request.value,
        request.active,
        actor,
    )
    .map_err(map_domain_error)?;

    let destination = state
        .destination_command_service
        .handle_add_header(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(to_destination_resource(&destination)),
    ))
}

#[utoipa::path(
    delete,
    path = "/audit-event-destinations/{destination_id}/headers/{key}",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("key" = String, Path, description = "Header key"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    responses(
        (status = 200, description = "Header removed", body = DestinationResource),
        (status = 404, description = "Header not found", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn remove_streaming_header(
    State(state): State<AuditStreamingRestControllerState>,
    Path((destination_id, key)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<DestinationResource>, ErrorResponse> {
    let actor = parse_actor(&headers)?;
    let destination_id = DestinationId::parse(&destination_id).map_err(map_domain_error)?;

    let command =
        RemoveStreamingHeaderCommand::new(destination_id, key, actor).map_err(map_domain_error)?;

    let destination = state
        .destination_command_service
        .handle_remove_header(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_destination_resource(&destination)))
}

#[utoipa::path(
    post,
    path = "/audit-event-destinations/{destination_id}/event-type-filters",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    request_body = EventTypeFiltersRequestResource,
    responses(
        (status = 200, description = "Filters added", body = DestinationResource),
        (status = 400, description = "Invalid event type", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn add_event_type_filters(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<EventTypeFiltersRequestResource>,
) -> Result<Json<DestinationResource>, ErrorResponse> {
    let command = event_type_filters_command(&destination_id, &headers, request)?;

    let destination = state
        .destination_command_service
        .handle_add_event_type_filters(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_destination_resource(&destination)))
}

#[utoipa::path(
    delete,
    path = "/audit-event-destinations/{destination_id}/event-type-filters",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    request_body = EventTypeFiltersRequestResource,
    responses(
        (status = 200, description = "Filters removed", body = DestinationResource),
        (status = 400, description = "Some filters do not exist", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn remove_event_type_filters(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<EventTypeFiltersRequestResource>,
) -> Result<Json<DestinationResource>, ErrorResponse> {
    let command = event_type_filters_command(&destination_id, &headers, request)?;

    let destination = state
        .destination_command_service
        .handle_remove_event_type_filters(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_destination_resource(&destination)))
}

#[utoipa::path(
    put,
    path = "/audit-event-destinations/{destination_id}/namespace-filter",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    request_body = NamespaceFilterRequestResource,
    responses(
        (status = 200, description = "Namespace filter set", body = DestinationResource),
        (status = 400, description = "Namespace outside the destination hierarchy", body = AuditStreamingErrorResponseResource),
        (status = 404, description = "Namespace not found", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn set_namespace_filter(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<NamespaceFilterRequestResource>,
) -> Result<Json<DestinationResource>, ErrorResponse> {
    validate_request(&request)?;
    let actor = parse_actor(&headers)?;
    let destination_id = DestinationId::parse(&destination_id).map_err(map_domain_error)?;

    let command =
        SetNamespaceFilterCommand::new(destination_id, request.group_id, request.project_id, actor)
            .map_err(map_domain_error)?;

    let destination = state
        .destination_command_service
        .handle_set_namespace_filter(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_destination_resource(&destination)))
}

#[utoipa::path(
    delete,
    path = "/audit-event-destinations/{destination_id}/namespace-filter",
    tag = "audit-streaming",
    params(
        ("destination_id" = String, Path, description = "Destination id"),
        ("x-gitlab-user-id" = i64, Header, description = "Acting user id"),
        ("x-gitlab-user-name" = String, Header, description = "Acting user name")
    ),
    responses(
        (status = 200, description = "Namespace filter removed", body = DestinationResource),
        (status = 404, description = "No namespace filter set", body = AuditStreamingErrorResponseResource)
    )
)]
pub async fn remove_namespace_filter(
    State(state): State<AuditStreamingRestControllerState>,
    Path(destination_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<DestinationResource>, ErrorResponse> {
    let actor = parse_actor(&headers)?;
    let destination_id = DestinationId::parse(&destination_id).map_err(map_domain_error)?;

    let destination = state
        .destination_command_service
        .handle_remove_namespace_filter(DestinationReferenceCommand::new(destination_id, actor))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_destination_resource(&destination)))
}

async fn list_destinations(
    state: &AuditStreamingRestControllerState,
    query: ListDestinationsQuery,
) -> Result<Json<Vec<DestinationResource>>, ErrorResponse> {
    let destinations = state
        .destination_query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        destinations.iter().map(to_destination_resource).collect(),
    ))
}

async fn create_destination(
    state: &AuditStreamingRestControllerState,
    level: DestinationLevel,
    headers: &HeaderMap,
    request: CreateDestinationRequestResource,
) -> Result<(StatusCode, Json<DestinationResource>), ErrorResponse> {
    validate_request(&request)?;
    let actor = parse_actor(headers)?;

    let command = CreateDestinationCommand::new(CreateDestinationCommandParts {
        level,
        name: request.name,
        destination_url: request.destination_url,
        verification_token: request.verification_token,
        actor,
    })
    .map_err(map_domain_error)?;

    let destination = state
        .destination_command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(to_destination_resource(&destination)),
    ))
}

fn event_type_filters_command(
    destination_id: &str,
    headers: &HeaderMap,
    request: EventTypeFiltersRequestResource,
) -> Result<EventTypeFiltersCommand, ErrorResponse> {
    validate_request(&request)?;
    let actor = parse_actor(headers)?;
    let destination_id = DestinationId::parse(destination_id).map_err(map_domain_error)?;

    EventTypeFiltersCommand::new(destination_id, request.event_type_filters, actor)
        .map_err(map_domain_error)
}

fn validate_request(request: &impl Validate) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(AuditStreamingErrorResponseResource {
                message: validation_error.to_string(),
            }),
        )
    })
}

fn parse_actor(headers: &HeaderMap) -> Result<AuditActor, ErrorResponse> {
    let id = header_string(headers, "x-gitlab-user-id")
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or_else(|| map_domain_error(AuditStreamingDomainError::MissingActor))?;
    let name = header_string(headers, "x-gitlab-user-name")
        .ok_or_else(|| map_domain_error(AuditStreamingDomainError::MissingActor))?;

    AuditActor::new(id, name).map_err(|_| map_domain_error(AuditStreamingDomainError::MissingActor))
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn to_audit_event_resource(event: &AuditEvent) -> AuditEventResource {
    AuditEventResource {
        id: event.id().to_string(),
        persisted: event.id().persisted_value().is_some(),
        entity_type: event.scope().entity_type().to_string(),
        entity_id: event.scope().entity_id(),
        author_id: event.author_id(),
        author_name: event.author_name().to_string(),
        target_type: event.target_type().map(str::to_string),
        target_details: event.target_details().map(str::to_string),
        details: event.details().clone(),
        created_at: event.created_at().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn to_destination_resource(destination: &ExternalDestination) -> DestinationResource {
    DestinationResource {
        id: destination.id().value().to_string(),
        level: destination.level().as_str().to_string(),
        group_id: destination.level().group_id(),
        name: destination.name().value().to_string(),
        destination_url: destination.destination_url().value().to_string(),
        verification_token: destination.verification_token().value().to_string(),
        active: destination.active(),
        headers: destination
            .headers()
            .iter()
            .map(|header| StreamingHeaderResource {
                key: header.key().to_string(),
                value: header.value().to_string(),
                active: header.active(),
            })
            .collect(),
        event_type_filters: destination
            .event_type_filters()
            .iter()
            .map(|event_type| event_type.value().to_string())
            .collect(),
        namespace_filter: destination
            .namespace_filter()
            .map(|filter| NamespaceFilterResource {
                namespace_type: filter.namespace_type().to_string(),
                namespace_id: filter.namespace_id(),
            }),
        created_at: destination
            .created_at()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

fn map_domain_error(error: AuditStreamingDomainError) -> ErrorResponse {
    let status = match error {
        AuditStreamingDomainError::AmbiguousAuditEventSource
        | AuditStreamingDomainError::MissingAuditEventSource
        | AuditStreamingDomainError::InvalidEventType
        | AuditStreamingDomainError::InvalidModelClass(_)
        | AuditStreamingDomainError::InvalidDestinationUrl
        | AuditStreamingDomainError::InvalidDestinationName
        | AuditStreamingDomainError::InvalidVerificationToken
        | AuditStreamingDomainError::InvalidHeader(_)
        | AuditStreamingDomainError::HeadersLimitExceeded
        | AuditStreamingDomainError::EventTypeFiltersNotFound(_)
        | AuditStreamingDomainError::DestinationLimitExceeded
        | AuditStreamingDomainError::GroupIsNotRootGroup
        | AuditStreamingDomainError::NamespaceFilterOutsideHierarchy
        | AuditStreamingDomainError::InvalidAuditEvent(_) => StatusCode::BAD_REQUEST,
        AuditStreamingDomainError::MissingActor => StatusCode::UNAUTHORIZED,
        AuditStreamingDomainError::DuplicateHeaderKey
        | AuditStreamingDomainError::DestinationUrlTaken => StatusCode::CONFLICT,
        AuditStreamingDomainError::HeaderNotFound
        | AuditStreamingDomainError::DestinationNotFound
        | AuditStreamingDomainError::GroupNotFound
        | AuditStreamingDomainError::NamespaceFilterNotFound => StatusCode::NOT_FOUND,
        AuditStreamingDomainError::QueueUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        AuditStreamingDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(AuditStreamingErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
