pub mod audit_actor;
pub mod audit_event_id;
pub mod destination_id;
pub mod destination_name;
pub mod destination_url;
pub mod event_ancestry;
pub mod event_type_name;
pub mod namespace_filter;
pub mod streaming_feature_toggles;
pub mod verification_token;
