//! # Event Wire Contracts
//!
//! Shared request model and CloudEvents wire-mode detection.
//!
//! ## Why This Lives in Tier 1
//!
//! Every component that accepts events over HTTP needs to answer the same
//! question first: *which wire shape is this?* A CloudEvent arrives either in
//! **binary** mode (envelope attributes in `ce-*` headers, payload as the raw
//! body) or **structured** mode (the whole envelope as one JSON body). A body
//! matching neither is a legacy background event. Centralizing the sniffing
//! here keeps the translation layer free of header parsing and gives all
//! consumers one classification to dispatch on.
//!
//! ## Usage
//!
//! ```rust
//! use event_wire::{EventRequest, WireEncoding};
//! use serde_json::json;
//!
//! let request = EventRequest::new(
//!     [("ce-id", "e1"), ("ce-specversion", "1.0"),
//!      ("ce-type", "com.example.created"), ("ce-source", "//example.com/x"),
//!      ("ce-time", "2020-04-23T07:38:57.772Z")],
//!     json!({"field": "value"}),
//! );
//!
//! assert_eq!(WireEncoding::classify(&request), WireEncoding::Binary);
//! ```

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

/// Content type announcing a structured-mode CloudEvent body.
pub const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json";

/// Header prefix carrying CloudEvent envelope attributes in binary mode.
const BINARY_ATTRIBUTE_PREFIX: &str = "ce-";

/// A fully buffered event request: headers plus parsed JSON body.
///
/// Transport handling is out of scope here; the adapter layer receives the
/// raw request, buffers it, parses the body, and hands us this snapshot.
/// Header names are normalized to lowercase on construction so lookups are
/// case-insensitive, matching HTTP semantics.
#[derive(Debug, Clone)]
pub struct EventRequest {
    headers: HashMap<String, String>,
    body: Value,
}

impl EventRequest {
    /// Create a request from header pairs and a parsed JSON body.
    pub fn new<K, V>(headers: impl IntoIterator<Item = (K, V)>, body: Value) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.into().to_ascii_lowercase(), value.into()))
            .collect();
        Self { headers, body }
    }

    /// Create a headerless request (a plain JSON POST body).
    pub fn from_body(body: Value) -> Self {
        Self {
            headers: HashMap::new(),
            body,
        }
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The parsed JSON body.
    pub fn body(&self) -> &Value {
        &self.body
    }
}

/// The three wire shapes an incoming event request can take.
///
/// Classification happens once, up front; converters then dispatch on the
/// variant instead of re-sniffing (or recursing into each other) mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEncoding {
    /// CloudEvent with envelope attributes in `ce-*` headers.
    Binary,
    /// CloudEvent serialized wholesale as the request body.
    Structured,
    /// Neither — a legacy background event body.
    LegacyShaped,
}

impl WireEncoding {
    /// Classify a request. Binary detection wins over structured.
    pub fn classify(request: &EventRequest) -> Self {
        let encoding = if is_binary_cloud_event(request) {
            WireEncoding::Binary
        } else if is_structured_cloud_event(request) {
            WireEncoding::Structured
        } else {
            WireEncoding::LegacyShaped
        };
        tracing::debug!(?encoding, "classified incoming event request");
        encoding
    }
}

/// True when the request carries a binary-mode CloudEvent.
///
/// All four required envelope attributes must be present as headers; a
/// request with only some of them is not treated as binary.
pub fn is_binary_cloud_event(request: &EventRequest) -> bool {
    ["ce-type", "ce-specversion", "ce-source", "ce-id"]
        .iter()
        .all(|name| request.header(name).is_some())
}

/// True when the request carries a structured-mode CloudEvent.
pub fn is_structured_cloud_event(request: &EventRequest) -> bool {
    request
        .header("content-type")
        .is_some_and(|value| value.contains(STRUCTURED_CONTENT_TYPE))
}

/// Extract the envelope attributes of a binary-mode CloudEvent.
///
/// Returns every `ce-*` header with the prefix stripped, e.g. `ce-id` becomes
/// `id`. The payload is not included — in binary mode it is the raw body.
pub fn binary_attributes(request: &EventRequest) -> BTreeMap<String, String> {
    request
        .headers
        .iter()
        .filter_map(|(name, value)| {
            name.strip_prefix(BINARY_ATTRIBUTE_PREFIX)
                .map(|attribute| (attribute.to_string(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn binary_request() -> EventRequest {
        EventRequest::new(
            [
                ("ce-id", "event-1"),
                ("ce-specversion", "1.0"),
                ("ce-type", "google.cloud.pubsub.topic.v1.messagePublished"),
                ("ce-source", "//pubsub.googleapis.com/projects/p/topics/t"),
                ("ce-time", "2020-09-29T11:32:00.000Z"),
                ("Content-Type", "application/json"),
            ],
            json!({"message": {"data": "aGVsbG8="}}),
        )
    }

    #[test]
    fn test_classify_binary() {
        assert_eq!(WireEncoding::classify(&binary_request()), WireEncoding::Binary);
    }

    #[test]
    fn test_classify_structured() {
        let request = EventRequest::new(
            [("content-type", "application/cloudevents+json; charset=utf-8")],
            json!({"id": "event-1", "specversion": "1.0"}),
        );
        assert_eq!(WireEncoding::classify(&request), WireEncoding::Structured);
    }

    #[test]
    fn test_classify_legacy_body() {
        let request = EventRequest::from_body(json!({
            "context": {"eventId": "e1", "timestamp": "t1"},
            "data": {}
        }));
        assert_eq!(WireEncoding::classify(&request), WireEncoding::LegacyShaped);
    }

    #[test]
    fn test_binary_requires_all_four_attributes() {
        let request = EventRequest::new(
            [("ce-id", "event-1"), ("ce-specversion", "1.0")],
            json!({}),
        );
        assert!(!is_binary_cloud_event(&request));
        assert_eq!(WireEncoding::classify(&request), WireEncoding::LegacyShaped);
    }

    #[test]
    fn test_binary_wins_over_structured() {
        let request = EventRequest::new(
            [
                ("ce-id", "event-1"),
                ("ce-specversion", "1.0"),
                ("ce-type", "t"),
                ("ce-source", "s"),
                ("content-type", "application/cloudevents+json"),
            ],
            json!({}),
        );
        assert_eq!(WireEncoding::classify(&request), WireEncoding::Binary);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = EventRequest::new([("Ce-Type", "some.type")], json!({}));
        assert_eq!(request.header("ce-type"), Some("some.type"));
        assert_eq!(request.header("CE-TYPE"), Some("some.type"));
    }

    #[test]
    fn test_binary_attributes_strip_prefix() {
        let attributes = binary_attributes(&binary_request());
        assert_eq!(attributes.get("id").map(String::as_str), Some("event-1"));
        assert_eq!(
            attributes.get("time").map(String::as_str),
            Some("2020-09-29T11:32:00.000Z")
        );
        // Non ce- headers are not envelope attributes
        assert!(!attributes.contains_key("content-type"));
    }
}
