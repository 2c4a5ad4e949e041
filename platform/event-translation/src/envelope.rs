//! # Event Envelopes
//!
//! The two envelope shapes this crate translates between.
//!
//! ## Envelope Fields
//!
//! Legacy background event:
//! - `context.eventId`: unique event identifier
//! - `context.timestamp`: ISO 8601 timestamp
//! - `context.eventType`: legacy event type (required when fully formed)
//! - `context.resource`: originating entity, raw path or structured descriptor
//! - `data`: event payload
//!
//! CloudEvent:
//! - `id` / `time`: identifier and ISO 8601 timestamp
//! - `specversion`: always `"1.0"`
//! - `type` / `source`: populated after construction, required when fully formed
//! - `contenttype`: payload media type
//! - `data`: event payload

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only CloudEvents spec version this platform speaks.
pub const SPEC_VERSION: &str = "1.0";

/// Default payload media type for converted events.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Legacy background event: ad-hoc context plus payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyEvent {
    pub context: LegacyContext,
    pub data: Value,
}

/// Metadata half of a legacy background event.
///
/// `event_type` and `resource` are optional during intermediate construction
/// but required for a fully-formed context; see [`LegacyContext::is_complete`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyContext {
    pub event_id: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
}

impl LegacyContext {
    /// True once both `event_type` and `resource` are populated.
    pub fn is_complete(&self) -> bool {
        self.event_type.is_some() && self.resource.is_some()
    }
}

/// Legacy resource identifier: either a raw path or a structured descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Resource {
    Path(String),
    Descriptor(ResourceDescriptor),
}

/// Structured alternative to a raw resource path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    pub service: String,
    pub name: String,
}

/// Standardized event envelope.
///
/// `type` and `source` are filled in by translation after the skeleton is
/// built, so intermediate states may lack them; see [`CloudEvent::is_complete`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudEvent {
    pub id: String,
    #[serde(default = "default_spec_version")]
    pub specversion: String,
    pub time: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default = "default_content_type")]
    pub contenttype: String,
    #[serde(default)]
    pub data: Value,
}

impl CloudEvent {
    /// True once both `type` and `source` are populated.
    pub fn is_complete(&self) -> bool {
        self.event_type.is_some() && self.source.is_some()
    }
}

fn default_spec_version() -> String {
    SPEC_VERSION.to_string()
}

fn default_content_type() -> String {
    JSON_CONTENT_TYPE.to_string()
}

/// Validates a fully-formed legacy event envelope.
///
/// Presence checks plus an ISO 8601 parse of the timestamp; payload bodies
/// are not schema-validated here.
pub fn validate_legacy_event(envelope: &Value) -> Result<(), String> {
    let context = envelope
        .get("context")
        .ok_or("Missing required field: context")?;

    let event_id = context
        .get("eventId")
        .and_then(|v| v.as_str())
        .ok_or("Missing required field: context.eventId")?;

    if event_id.trim().is_empty() {
        return Err("Invalid eventId: must be non-empty".to_string());
    }

    let timestamp = context
        .get("timestamp")
        .and_then(|v| v.as_str())
        .ok_or("Missing required field: context.timestamp")?;

    DateTime::parse_from_rfc3339(timestamp)
        .map_err(|_| format!("Invalid timestamp: must be ISO 8601, got '{}'", timestamp))?;

    let event_type = context
        .get("eventType")
        .and_then(|v| v.as_str())
        .ok_or("Missing required field: context.eventType")?;

    if event_type.trim().is_empty() {
        return Err("Invalid eventType: must be non-empty".to_string());
    }

    let resource = context
        .get("resource")
        .ok_or("Missing required field: context.resource")?;

    if !resource.is_string() && !resource.is_object() {
        return Err("Invalid resource: must be a string or an object".to_string());
    }

    if let Some(descriptor) = resource.as_object() {
        for field in ["service", "name"] {
            if !descriptor.get(field).is_some_and(Value::is_string) {
                return Err(format!("Invalid resource: missing '{}'", field));
            }
        }
    }

    envelope.get("data").ok_or("Missing required field: data")?;

    Ok(())
}

/// Validates a fully-formed CloudEvent envelope.
///
/// Same policy as [`validate_legacy_event`]: field presence plus an ISO 8601
/// parse of `time`, nothing deeper.
pub fn validate_cloud_event(envelope: &Value) -> Result<(), String> {
    let id = envelope
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or("Missing required field: id")?;

    if id.trim().is_empty() {
        return Err("Invalid id: must be non-empty".to_string());
    }

    let specversion = envelope
        .get("specversion")
        .and_then(|v| v.as_str())
        .ok_or("Missing required field: specversion")?;

    if specversion != SPEC_VERSION {
        return Err(format!(
            "Invalid specversion: expected '{}', got '{}'",
            SPEC_VERSION, specversion
        ));
    }

    let time = envelope
        .get("time")
        .and_then(|v| v.as_str())
        .ok_or("Missing required field: time")?;

    DateTime::parse_from_rfc3339(time)
        .map_err(|_| format!("Invalid time: must be ISO 8601, got '{}'", time))?;

    for field in ["type", "source", "contenttype"] {
        let value = envelope
            .get(field)
            .and_then(|v| v.as_str())
            .ok_or_else(|| format!("Missing required field: {}", field))?;
        if value.trim().is_empty() {
            return Err(format!("Invalid {}: must be non-empty", field));
        }
    }

    if envelope.get("data").is_none() {
        return Err("Missing required field: data".to_string());
    }

    Ok(())
}
