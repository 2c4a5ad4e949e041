//! Forward (legacy → CloudEvent) and reverse (CloudEvent → legacy) converters.
//!
//! Both converters operate on an [`EventRequest`] classified once by
//! [`WireEncoding::classify`]; the three wire shapes are handled as explicit
//! dispatch arms rather than converters calling each other on mismatch.

use serde_json::Value;

use event_wire::{binary_attributes, EventRequest, WireEncoding};

use crate::envelope::{
    CloudEvent, LegacyContext, LegacyEvent, Resource, ResourceDescriptor, JSON_CONTENT_TYPE,
    SPEC_VERSION,
};
use crate::error::TranslationError;
use crate::tables;

/// Convert an incoming request to a CloudEvent.
///
/// Returns `None` when the input cannot be converted; the failure is logged,
/// never thrown, and there is no partial result. Callers must treat `None`
/// as unconvertible input and produce their own error response upstream.
pub fn to_cloud_event(request: &EventRequest) -> Option<CloudEvent> {
    match try_to_cloud_event(request) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::error!(error = %err, "failed to convert request to a CloudEvent");
            None
        }
    }
}

/// Convert an incoming request to a legacy background event.
///
/// Same contract as [`to_cloud_event`]: a fully-formed envelope or `None`,
/// with the failure logged.
pub fn to_legacy_event(request: &EventRequest) -> Option<LegacyEvent> {
    match try_to_legacy_event(request) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::error!(error = %err, "failed to convert request to a legacy event");
            None
        }
    }
}

/// Fallible core of [`to_cloud_event`].
pub fn try_to_cloud_event(request: &EventRequest) -> Result<CloudEvent, TranslationError> {
    match WireEncoding::classify(request) {
        // Already standardized — decode the wire form, no table lookups.
        WireEncoding::Binary => decode_binary(request),
        WireEncoding::Structured => decode_structured(request),
        WireEncoding::LegacyShaped => {
            let (context, data) = split_context_data(request.body())?;
            cloud_event_from_legacy(context, data)
        }
    }
}

/// Fallible core of [`to_legacy_event`].
pub fn try_to_legacy_event(request: &EventRequest) -> Result<LegacyEvent, TranslationError> {
    let event = match WireEncoding::classify(request) {
        // Already legacy-shaped — split and return, no table lookups.
        WireEncoding::LegacyShaped => {
            let (context, data) = split_context_data(request.body())?;
            return Ok(LegacyEvent { context, data });
        }
        WireEncoding::Binary => decode_binary(request)?,
        WireEncoding::Structured => decode_structured(request)?,
    };
    legacy_event_from_cloud(event)
}

/// Decode a binary-mode CloudEvent: envelope attributes from `ce-*` headers,
/// payload from the raw body.
fn decode_binary(request: &EventRequest) -> Result<CloudEvent, TranslationError> {
    let mut attributes = binary_attributes(request);

    let id = attributes
        .remove("id")
        .ok_or(TranslationError::MissingField("id"))?;
    let time = attributes
        .remove("time")
        .ok_or(TranslationError::MissingField("time"))?;
    let specversion = attributes
        .remove("specversion")
        .unwrap_or_else(|| SPEC_VERSION.to_string());
    let contenttype = request
        .header("content-type")
        .unwrap_or(JSON_CONTENT_TYPE)
        .to_string();

    Ok(CloudEvent {
        id,
        specversion,
        time,
        event_type: attributes.remove("type"),
        source: attributes.remove("source"),
        contenttype,
        data: request.body().clone(),
    })
}

/// Decode a structured-mode CloudEvent: the body is the whole envelope.
fn decode_structured(request: &EventRequest) -> Result<CloudEvent, TranslationError> {
    serde_json::from_value(request.body().clone())
        .map_err(|err| TranslationError::MalformedInput(format!("structured event body: {err}")))
}

/// Split a legacy-shaped body into context and payload.
///
/// Events predating the `context`/`data` split carry the context fields at
/// the top level; in that case every top-level field except `data` forms the
/// context.
fn split_context_data(body: &Value) -> Result<(LegacyContext, Value), TranslationError> {
    let fields = body.as_object().ok_or_else(|| {
        TranslationError::MalformedInput("event body is not a JSON object".to_string())
    })?;

    let data = fields.get("data").cloned().unwrap_or(Value::Null);
    let context = match fields.get("context") {
        Some(context) => context.clone(),
        None => {
            let mut derived = fields.clone();
            derived.remove("data");
            Value::Object(derived)
        }
    };

    let context: LegacyContext = serde_json::from_value(context)
        .map_err(|err| TranslationError::MalformedInput(format!("legacy context: {err}")))?;

    Ok((context, data))
}

/// Build a CloudEvent from a legacy context and payload.
fn cloud_event_from_legacy(
    context: LegacyContext,
    data: Value,
) -> Result<CloudEvent, TranslationError> {
    let event_type = context
        .event_type
        .as_deref()
        .ok_or(TranslationError::MissingField("eventType"))?;

    // An unmapped (but present) event type is not fatal: the envelope is
    // returned with `type` absent. Only the missing field is.
    let mapped_type = tables::cloud_event_type_for(event_type).map(str::to_string);

    let resource = context
        .resource
        .as_ref()
        .ok_or(TranslationError::MissingField("resource"))?;

    let source = match resource {
        // The prefix match runs against the event type, not the resource.
        Resource::Path(path) => {
            let (service, _prefix) = tables::service_for_event_type(event_type)
                .ok_or_else(|| TranslationError::UnresolvedService(event_type.to_string()))?;
            format!("//{service}/{path}")
        }
        // A structured resource names its service directly, bypassing the table.
        Resource::Descriptor(descriptor) => {
            format!("//{}/{}", descriptor.service, descriptor.name)
        }
    };

    Ok(CloudEvent {
        id: context.event_id,
        specversion: SPEC_VERSION.to_string(),
        time: context.timestamp,
        event_type: mapped_type,
        source: Some(source),
        contenttype: JSON_CONTENT_TYPE.to_string(),
        data,
    })
}

/// Build a legacy event from a fully-formed CloudEvent.
fn legacy_event_from_cloud(event: CloudEvent) -> Result<LegacyEvent, TranslationError> {
    let cloud_type = event
        .event_type
        .as_deref()
        .ok_or(TranslationError::MissingField("type"))?;

    let legacy_type = tables::legacy_type_for(cloud_type)
        .ok_or_else(|| TranslationError::UnresolvedType(cloud_type.to_string()))?;

    let source = event
        .source
        .as_deref()
        .ok_or(TranslationError::MissingField("source"))?;

    let (_prefix, service) = tables::prefix_for_source(source)
        .ok_or_else(|| TranslationError::UnresolvedService(source.to_string()))?;

    let name = source.replacen(&format!("//{service}/"), "", 1);

    // A `@type` (or `kind`) tag in the payload upgrades the resource to the
    // structured form.
    let resource_tag = event
        .data
        .get("@type")
        .or_else(|| event.data.get("kind"))
        .and_then(Value::as_str);

    let resource = match resource_tag {
        Some(tag) => Resource::Descriptor(ResourceDescriptor {
            resource_type: Some(tag.to_string()),
            service: service.to_string(),
            name,
        }),
        None => Resource::Path(name),
    };

    Ok(LegacyEvent {
        context: LegacyContext {
            event_id: event.id,
            timestamp: event.time,
            event_type: Some(legacy_type.to_string()),
            resource: Some(resource),
        },
        data: event.data,
    })
}
