//! Golden fixture conversions
//!
//! Each legacy example under `contracts/events/examples/` has a paired
//! CloudEvent example; forward conversion must reproduce the cloud golden
//! byte-for-byte (as JSON values), and reverse conversion must reproduce the
//! legacy golden wherever the payload carries no resource tag.

use contract_tests::load_example;
use event_translation::{to_cloud_event, to_legacy_event, Resource};
use event_wire::EventRequest;
use std::path::PathBuf;

const GOLDEN_PAIRS: &[(&str, &str)] = &[
    (
        "legacy-storage-object-finalize.v1.example.json",
        "cloud-storage-object-finalized.v1.example.json",
    ),
    (
        "legacy-pubsub-topic-publish.v1.example.json",
        "cloud-pubsub-message-published.v1.example.json",
    ),
    (
        "legacy-firestore-document-write.v1.example.json",
        "cloud-firestore-document-written.v1.example.json",
    ),
];

fn examples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("contracts/events/examples")
}

#[test]
fn test_forward_conversion_reproduces_cloud_goldens() {
    for (legacy_name, cloud_name) in GOLDEN_PAIRS {
        let legacy = load_example(&examples_dir().join(legacy_name)).unwrap();
        let cloud = load_example(&examples_dir().join(cloud_name)).unwrap();

        let converted = to_cloud_event(&EventRequest::from_body(legacy))
            .unwrap_or_else(|| panic!("{} did not convert", legacy_name));

        assert_eq!(
            serde_json::to_value(&converted).unwrap(),
            cloud,
            "{} -> {}",
            legacy_name,
            cloud_name
        );
    }
}

#[test]
fn test_reverse_conversion_reproduces_raw_resource_goldens() {
    // The storage and pubsub goldens carry no `@type`/`kind` in data, so the
    // reverse direction rebuilds the raw path resource and the round trip is
    // exact.
    for (legacy_name, cloud_name) in &GOLDEN_PAIRS[..2] {
        let legacy = load_example(&examples_dir().join(legacy_name)).unwrap();
        let cloud = load_example(&examples_dir().join(cloud_name)).unwrap();

        let converted = to_legacy_event(&EventRequest::new(
            [("content-type", "application/cloudevents+json")],
            cloud,
        ))
        .unwrap_or_else(|| panic!("{} did not convert", cloud_name));

        assert_eq!(
            serde_json::to_value(&converted).unwrap(),
            legacy,
            "{} -> {}",
            cloud_name,
            legacy_name
        );
    }
}

#[test]
fn test_reverse_firestore_golden_degrades_to_raw_path() {
    // The firestore legacy golden uses a structured resource, but its payload
    // carries no `@type`/`kind` tag, so the reverse direction yields the raw
    // path form, not the original descriptor. Structured-ness is driven by
    // the payload tag, not by the forward input's shape.
    let cloud = load_example(
        &examples_dir().join("cloud-firestore-document-written.v1.example.json"),
    )
    .unwrap();

    let converted = to_legacy_event(&EventRequest::new(
        [("content-type", "application/cloudevents+json")],
        cloud,
    ))
    .expect("firestore golden did not convert");

    assert_eq!(
        converted.context.resource,
        Some(Resource::Path(
            "projects/project-id/databases/(default)/documents/gcf-test/2Vm2mI1d0wIaK2Waj5to"
                .to_string()
        ))
    );
}
