//! # Event Format Translation
//!
//! Bidirectional mapping between the two event envelope representations the
//! platform has accumulated:
//!
//! - the legacy **background event** shape (`context` + `data`, with several
//!   ad-hoc context variants predating the split), and
//! - the standardized **CloudEvents** envelope, arriving in either binary or
//!   structured wire mode.
//!
//! ## Design Principles
//!
//! 1. **Classify once, then dispatch**: wire-mode sniffing is delegated to
//!    [`event_wire`] and happens exactly once per request; the converters are
//!    plain functions over the classified shape, not mutually recursive calls.
//! 2. **Ordered tables**: the type and service vocabularies are explicit
//!    ordered lists so first-match-wins tie-breaks are reproducible.
//! 3. **Envelope or nothing**: a conversion either yields a fully-formed
//!    envelope or `None` (with the failure logged), never a partial result.
//!
//! ## Usage
//!
//! ```rust
//! use event_translation::to_cloud_event;
//! use event_wire::EventRequest;
//! use serde_json::json;
//!
//! let request = EventRequest::from_body(json!({
//!     "context": {
//!         "eventId": "1147091835525187",
//!         "timestamp": "2020-04-23T07:38:57.772Z",
//!         "eventType": "google.storage.object.finalize",
//!         "resource": "some-bucket/folder/Test.cs"
//!     },
//!     "data": {"bucket": "some-bucket"}
//! }));
//!
//! let event = to_cloud_event(&request).expect("convertible");
//! assert_eq!(
//!     event.source.as_deref(),
//!     Some("//storage.googleapis.com/some-bucket/folder/Test.cs")
//! );
//! ```

mod convert;
mod envelope;
mod error;
mod tables;

pub use convert::{to_cloud_event, to_legacy_event, try_to_cloud_event, try_to_legacy_event};
pub use envelope::{
    validate_cloud_event, validate_legacy_event, CloudEvent, LegacyContext, LegacyEvent, Resource,
    ResourceDescriptor, JSON_CONTENT_TYPE, SPEC_VERSION,
};
pub use error::TranslationError;
pub use tables::{
    cloud_event_type_for, legacy_type_for, prefix_for_source, service_for_event_type,
    service_table, type_table,
};
