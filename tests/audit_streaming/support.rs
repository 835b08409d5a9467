#[path = "support/harness.rs"]
mod harness;

pub use fixtures::{
    OTHER_ROOT_GROUP_ID, PROJECT_ID, ROOT_GROUP_ID, SUBGROUP_ID, VERIFICATION_TOKEN, actor,
    audit_event, event_type, filtered_destination, group_destination, headers,
    instance_destination,
};
pub use harness::{create_destination_harness, create_record_harness, create_streaming_harness};
pub use log_capture::capture_logs;
