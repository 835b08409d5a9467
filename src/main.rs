use audit_stream_service::{
    audit_streaming::{
        build_audit_streaming_router,
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
    },
    compliance_controls::{
        build_compliance_controls_router,
        interfaces::rest::resources::{
            compliance_controls_error_response_resource::ComplianceControlsErrorResponseResource,
            control_request_resources::{
                EvaluateControlRequestResource, EvaluateControlResponseResource,
                ValidateExpressionRequestResource, ValidateExpressionResponseResource,
            },
            control_resource::{ControlExpressionResource, ControlResource},
        },
    },
    config::{app_config::AppConfig, logging::init_tracing},
    seat_assignment::{
        build_seat_assignment_router,
        interfaces::rest::resources::{
            seat_assignment_error_response_resource::SeatAssignmentErrorResponseResource,
            seat_assignment_request_resource::SeatAssignmentRequestResource,
            seat_assignment_resource::{SeatAssignmentResource, SeatUsageResource},
        },
    },
};
use axum::Router;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::record_audit_event,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::stream_audit_event,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::list_group_destinations,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::create_group_destination,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::list_instance_destinations,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::create_instance_destination,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::get_destination,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::update_destination,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::delete_destination,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::add_streaming_header,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::remove_streaming_header,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::add_event_type_filters,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::remove_event_type_filters,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::set_namespace_filter,
        audit_stream_service::audit_streaming::interfaces::rest::controllers::audit_streaming_rest_controller::remove_namespace_filter,
        audit_stream_service::compliance_controls::interfaces::rest::controllers::compliance_controls_rest_controller::list_controls,
        audit_stream_service::compliance_controls::interfaces::rest::controllers::compliance_controls_rest_controller::list_enum_definitions,
        audit_stream_service::compliance_controls::interfaces::rest::controllers::compliance_controls_rest_controller::list_field_mappings,
        audit_stream_service::compliance_controls::interfaces::rest::controllers::compliance_controls_rest_controller::get_expression_schema,
        audit_stream_service::compliance_controls::interfaces::rest::controllers::compliance_controls_rest_controller::validate_expression,
        audit_stream_service::compliance_controls::interfaces::rest::controllers::compliance_controls_rest_controller::evaluate_control,
        audit_stream_service::seat_assignment::interfaces::rest::controllers::seat_assignment_rest_controller::bulk_assign_seats,
        audit_stream_service::seat_assignment::interfaces::rest::controllers::seat_assignment_rest_controller::bulk_unassign_seats,
        audit_stream_service::seat_assignment::interfaces::rest::controllers::seat_assignment_rest_controller::get_seat_usage
    ),
    components(
        schemas(
            RecordAuditEventRequestResource,
            StreamAuditEventRequestResource,
            AuditEventResource,
            CreateDestinationRequestResource,
            UpdateDestinationRequestResource,
            AddStreamingHeaderRequestResource,
            EventTypeFiltersRequestResource,
            NamespaceFilterRequestResource,
            DestinationResource,
            StreamingHeaderResource,
            NamespaceFilterResource,
            AuditStreamingErrorResponseResource,
            ControlResource,
            ControlExpressionResource,
            ValidateExpressionRequestResource,
            ValidateExpressionResponseResource,
            EvaluateControlRequestResource,
            EvaluateControlResponseResource,
            ComplianceControlsErrorResponseResource,
            SeatAssignmentRequestResource,
            SeatAssignmentResource,
            SeatUsageResource,
            SeatAssignmentErrorResponseResource
        )
    ),
    tags(
        (name = "audit-streaming", description = "Audit event recording and external destination streaming"),
        (name = "compliance-controls", description = "Predefined compliance requirement controls"),
        (name = "seat-assignment", description = "Add-on purchase seat assignment")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(config.log_json);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url())
        .await
        .expect("failed to connect to postgres");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let audit_streaming_router = build_audit_streaming_router(&config, pool.clone())
        .await
        .expect("failed to build audit streaming router");
    let compliance_controls_router = build_compliance_controls_router(&config)
        .await
        .expect("failed to build compliance controls router");
    let seat_assignment_router = build_seat_assignment_router(&config, pool)
        .expect("failed to build seat assignment router");

    let app = Router::new()
        .merge(audit_streaming_router)
        .merge(compliance_controls_router)
        .merge(seat_assignment_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(port = config.port, "server listening");
    info!(
        url = %format!("http://localhost:{}/swagger-ui", config.port),
        "swagger ui available"
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
