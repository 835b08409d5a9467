use crate::audit_streaming::domain::model::{
    entities::external_destination::ExternalDestination,
    enums::destination_level::DestinationLevel,
    value_objects::{event_ancestry::EventAncestry, namespace_filter::NamespaceFilter},
};

/// Selects the destinations one audit event must be delivered to.
///
/// A destination qualifies when it is active, its event type filter is empty or names
/// `event_type`, its namespace filter (if any) covers the event, and, for group-level
/// destinations, the event belongs to the destination's root group.
pub fn eligible_destinations<'a>(
    event_type: &str,
    ancestry: &EventAncestry,
    destinations: &'a [ExternalDestination],
) -> Vec<&'a ExternalDestination> {
    destinations
        .iter()
        .filter(|destination| destination.active())
        .filter(|destination| destination.accepts_event_type(event_type))
        .filter(|destination| within_level(destination.level(), ancestry))
        .filter(|destination| match destination.namespace_filter() {
            None => true,
            Some(filter) => within_namespace_filter(filter, ancestry),
        })
        .collect()
}

fn within_level(level: DestinationLevel, ancestry: &EventAncestry) -> bool {
    match level {
        DestinationLevel::Instance => true,
        DestinationLevel::Group(group_id) => ancestry.root_group_id == Some(group_id),
    }
}

fn within_namespace_filter(filter: NamespaceFilter, ancestry: &EventAncestry) -> bool {
    match filter {
        NamespaceFilter::Group(group_id) => ancestry.group_ids.contains(&group_id),
        NamespaceFilter::Project(project_id) => ancestry.project_id == Some(project_id),
    }
}
