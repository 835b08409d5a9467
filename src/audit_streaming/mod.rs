use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    audit_streaming::{
        application::{
            command_services::{
                audit_event_command_service_impl::AuditEventCommandServiceImpl,
                audit_event_destination_command_service_impl::AuditEventDestinationCommandServiceImpl,
                audit_event_streaming_service_impl::AuditEventStreamingServiceImpl,
            },
            processors::audit_event_processor::AuditEventProcessor,
            query_services::audit_event_destination_query_service_impl::AuditEventDestinationQueryServiceImpl,
        },
        domain::model::value_objects::streaming_feature_toggles::StreamingFeatureToggles,
        infrastructure::{
            delivery::http::reqwest_audit_event_delivery_gateway_impl::ReqwestAuditEventDeliveryGatewayImpl,
            jobs::in_process::tokio_streaming_job_queue_impl::{
                StreamingJobQueueSettings, TokioStreamingJobQueueImpl,
            },
            persistence::repositories::postgres::{
                sqlx_audit_event_repository_impl::SqlxAuditEventRepositoryImpl,
                sqlx_external_destination_repository_impl::SqlxExternalDestinationRepositoryImpl,
                sqlx_namespace_repository_impl::SqlxNamespaceRepositoryImpl,
            },
        },
        interfaces::rest::controllers::audit_streaming_rest_controller::{
            AuditStreamingRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Wires the streaming context and starts its job workers on the current runtime.
pub async fn build_audit_streaming_router(
    config: &AppConfig,
    pool: PgPool,
) -> Result<Router, String> {
    let audit_event_repository = Arc::new(SqlxAuditEventRepositoryImpl::new(pool.clone()));
    let destination_repository = Arc::new(SqlxExternalDestinationRepositoryImpl::new(pool.clone()));
    let namespace_repository = Arc::new(SqlxNamespaceRepositoryImpl::new(pool));
    let delivery_gateway = Arc::new(ReqwestAuditEventDeliveryGatewayImpl::new(
        config.audit_streaming_http_timeout,
    )?);

    let streaming_service = Arc::new(AuditEventStreamingServiceImpl::new(
        AuditEventProcessor::new(audit_event_repository.clone(), namespace_repository.clone()),
        destination_repository.clone(),
        delivery_gateway,
        StreamingFeatureToggles {
            streaming_enabled: config.audit_streaming_enabled,
            licensed: config.audit_streaming_licensed,
            silent_mode_enabled: config.silent_mode_enabled,
        },
    ));

    let job_dispatcher = Arc::new(TokioStreamingJobQueueImpl::start(
        streaming_service,
        StreamingJobQueueSettings {
            workers: config.audit_streaming_workers,
            capacity: config.audit_streaming_queue_capacity,
            max_attempts: config.audit_streaming_max_attempts,
            retry_base: config.audit_streaming_retry_base,
        },
    ));

    let audit_event_command_service = Arc::new(AuditEventCommandServiceImpl::new(
        audit_event_repository,
        job_dispatcher.clone(),
    ));
    let destination_command_service = Arc::new(AuditEventDestinationCommandServiceImpl::new(
        destination_repository.clone(),
        namespace_repository,
        audit_event_command_service.clone(),
    ));
    let destination_query_service = Arc::new(AuditEventDestinationQueryServiceImpl::new(
        destination_repository,
    ));

    Ok(router(AuditStreamingRestControllerState {
        audit_event_command_service,
        destination_command_service,
        destination_query_service,
        job_dispatcher,
    }))
}
