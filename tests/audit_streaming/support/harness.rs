use std::sync::Arc;

use audit_stream_service::audit_streaming::{
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
};

use super::{
    fakes::{
        FakeAuditEventRepository, FakeExternalDestinationRepository, FakeNamespaceRepository,
        RecordingDeliveryGateway, RecordingJobDispatcher,
    },
    fixtures::{OTHER_ROOT_GROUP_ID, PROJECT_ID, ROOT_GROUP_ID, SUBGROUP_ID},
};

pub struct StreamingHarness {
    pub audit_event_repository: Arc<FakeAuditEventRepository>,
    pub destination_repository: Arc<FakeExternalDestinationRepository>,
    pub namespace_repository: Arc<FakeNamespaceRepository>,
    pub gateway: Arc<RecordingDeliveryGateway>,
    pub service: AuditEventStreamingServiceImpl,
}

pub struct RecordHarness {
    pub audit_event_repository: Arc<FakeAuditEventRepository>,
    pub dispatcher: Arc<RecordingJobDispatcher>,
    pub service: AuditEventCommandServiceImpl,
}

pub struct DestinationHarness {
    pub audit_event_repository: Arc<FakeAuditEventRepository>,
    pub destination_repository: Arc<FakeExternalDestinationRepository>,
    pub namespace_repository: Arc<FakeNamespaceRepository>,
    pub dispatcher: Arc<RecordingJobDispatcher>,
    pub service: AuditEventDestinationCommandServiceImpl,
    pub query_service: AuditEventDestinationQueryServiceImpl,
}

/// Registers `root(10) > sub(11) > project(100)` plus an unrelated root group 20.
fn seeded_namespaces() -> Arc<FakeNamespaceRepository> {
    let namespace_repository = Arc::new(FakeNamespaceRepository::new());
    namespace_repository.add_group(vec![ROOT_GROUP_ID]);
    namespace_repository.add_group(vec![SUBGROUP_ID, ROOT_GROUP_ID]);
    namespace_repository.add_group(vec![OTHER_ROOT_GROUP_ID]);
    namespace_repository.add_project(PROJECT_ID, vec![SUBGROUP_ID, ROOT_GROUP_ID]);
    namespace_repository
}

pub fn create_streaming_harness(toggles: StreamingFeatureToggles) -> StreamingHarness {
    let audit_event_repository = Arc::new(FakeAuditEventRepository::new());
    let destination_repository = Arc::new(FakeExternalDestinationRepository::new());
    let namespace_repository = seeded_namespaces();
    let gateway = Arc::new(RecordingDeliveryGateway::new());

    let service = AuditEventStreamingServiceImpl::new(
        AuditEventProcessor::new(audit_event_repository.clone(), namespace_repository.clone()),
        destination_repository.clone(),
        gateway.clone(),
        toggles,
    );

    StreamingHarness {
        audit_event_repository,
        destination_repository,
        namespace_repository,
        gateway,
        service,
    }
}

pub fn create_record_harness() -> RecordHarness {
    let audit_event_repository = Arc::new(FakeAuditEventRepository::new());
    let dispatcher = Arc::new(RecordingJobDispatcher::new());

    let service =
        AuditEventCommandServiceImpl::new(audit_event_repository.clone(), dispatcher.clone());

    RecordHarness {
        audit_event_repository,
        dispatcher,
        service,
    }
}

pub fn create_destination_harness() -> DestinationHarness {
    let audit_event_repository = Arc::new(FakeAuditEventRepository::new());
    let destination_repository = Arc::new(FakeExternalDestinationRepository::new());
    let namespace_repository = seeded_namespaces();
    let dispatcher = Arc::new(RecordingJobDispatcher::new());

    let audit_event_command_service = Arc::new(AuditEventCommandServiceImpl::new(
        audit_event_repository.clone(),
        dispatcher.clone(),
    ));
    let service = AuditEventDestinationCommandServiceImpl::new(
        destination_repository.clone(),
        namespace_repository.clone(),
        audit_event_command_service,
    );
    let query_service = AuditEventDestinationQueryServiceImpl::new(destination_repository.clone());

    DestinationHarness {
        audit_event_repository,
        destination_repository,
        namespace_repository,
        dispatcher,
        service,
        query_service,
    }
}
