//! Translation vocabularies for event types and service hostnames.
//!
//! Both tables are ordered lists, not maps: several legacy keys map to the
//! same standardized value, and reverse lookups resolve ties by iteration
//! order. An unordered associative structure would make the tie-break
//! unreproducible, so the order below is authoritative.

// ============================================================================
// EVENT TYPE TABLE — legacy event type → CloudEvent type
// ============================================================================

const EVENT_TYPE_TABLE: &[(&str, &str)] = &[
    (
        "providers/cloud.pubsub/eventTypes/topic.publish",
        "google.cloud.pubsub.topic.v1.messagePublished",
    ),
    (
        "google.storage.object.finalize",
        "google.cloud.storage.object.v1.finalized",
    ),
    (
        "google.storage.object.delete",
        "google.cloud.storage.object.v1.deleted",
    ),
    (
        "google.storage.object.archive",
        "google.cloud.storage.object.v1.archived",
    ),
    (
        "google.storage.object.metadataUpdate",
        "google.cloud.storage.object.v1.metadataUpdated",
    ),
    (
        "providers/cloud.firestore/eventTypes/document.write",
        "google.cloud.firestore.document.v1.written",
    ),
    (
        "providers/cloud.firestore/eventTypes/document.create",
        "google.cloud.firestore.document.v1.created",
    ),
    (
        "providers/cloud.firestore/eventTypes/document.update",
        "google.cloud.firestore.document.v1.updated",
    ),
    (
        "providers/cloud.firestore/eventTypes/document.delete",
        "google.cloud.firestore.document.v1.deleted",
    ),
    (
        "providers/firebase.auth/eventTypes/user.create",
        "google.firebase.auth.user.v1.created",
    ),
    (
        "providers/firebase.auth/eventTypes/user.delete",
        "google.firebase.auth.user.v1.deleted",
    ),
    (
        "providers/google.firebase.analytics/eventTypes/event.log",
        "google.firebase.analytics.log.v1.written",
    ),
    (
        "providers/google.firebase.database/eventTypes/ref.create",
        "google.firebase.database.ref.v1.created",
    ),
    (
        "providers/google.firebase.database/eventTypes/ref.write",
        "google.firebase.database.ref.v1.written",
    ),
    (
        "providers/google.firebase.database/eventTypes/ref.update",
        "google.firebase.database.ref.v1.updated",
    ),
    (
        "providers/google.firebase.database/eventTypes/ref.delete",
        "google.firebase.database.ref.v1.deleted",
    ),
    (
        "providers/cloud.storage/eventTypes/object.change",
        "google.cloud.storage.object.v1.finalized",
    ),
];

// ============================================================================
// SERVICE TABLE — legacy source prefix → CloudEvent service hostname
// ============================================================================

const SERVICE_TABLE: &[(&str, &str)] = &[
    ("providers/cloud.firestore/", "firestore.googleapis.com"),
    ("providers/google.firebase.analytics/", "firebase.googleapis.com"),
    ("providers/firebase.auth/", "firebase.googleapis.com"),
    ("providers/google.firebase.database/", "firebase.googleapis.com"),
    ("providers/cloud.pubsub/", "pubsub.googleapis.com"),
    ("providers/cloud.storage/", "storage.googleapis.com"),
    ("google.pubsub", "pubsub.googleapis.com"),
    ("google.storage", "storage.googleapis.com"),
];

/// The full event type vocabulary, in authoritative order.
pub fn type_table() -> &'static [(&'static str, &'static str)] {
    EVENT_TYPE_TABLE
}

/// The full service vocabulary, in authoritative order.
pub fn service_table() -> &'static [(&'static str, &'static str)] {
    SERVICE_TABLE
}

/// CloudEvent type for a legacy event type, if the type is mapped.
pub fn cloud_event_type_for(legacy_type: &str) -> Option<&'static str> {
    EVENT_TYPE_TABLE
        .iter()
        .find(|(legacy, _)| *legacy == legacy_type)
        .map(|(_, cloud)| *cloud)
}

/// Legacy event type for a CloudEvent type.
///
/// Several legacy keys share a standardized value; the first entry in table
/// order wins.
pub fn legacy_type_for(cloud_event_type: &str) -> Option<&'static str> {
    EVENT_TYPE_TABLE
        .iter()
        .find(|(_, cloud)| *cloud == cloud_event_type)
        .map(|(legacy, _)| *legacy)
}

/// Service hostname (and the matching prefix) for a legacy event type.
///
/// Matches each legacy prefix as a string-prefix of the event type; first
/// entry in table order wins.
pub fn service_for_event_type(legacy_type: &str) -> Option<(&'static str, &'static str)> {
    SERVICE_TABLE
        .iter()
        .find(|(prefix, _)| legacy_type.starts_with(prefix))
        .map(|(prefix, service)| (*service, *prefix))
}

/// Legacy prefix (and the matching service) for a CloudEvent source.
///
/// Matches each service hostname as a substring of the source; first entry
/// in table order wins.
pub fn prefix_for_source(source: &str) -> Option<(&'static str, &'static str)> {
    SERVICE_TABLE
        .iter()
        .find(|(_, service)| source.contains(service))
        .map(|(prefix, service)| (*prefix, *service))
}
