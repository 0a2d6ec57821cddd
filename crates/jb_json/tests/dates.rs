#![cfg(feature = "chrono")]

use chrono::{DateTime, Utc};
use jb_json::{Deserializer, PathSegment, Serializer, Warning, date};
use jb_reflect::prelude::*;
use jb_reflect::value::JsonKind;
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Reflect, Default, Debug, PartialEq)]
struct Event {
    name: String,
    at: Option<DateTime<Utc>>,
}

fn init_tracing() {
    // Ignore the error: another test may have installed it first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn unix_timestamp_hooks() {
    init_tracing();

    let de = Deserializer::new().with_date_decoder(date::from_unix_timestamp);
    let event = de
        .deserialize_object::<Event>(br#"{"name": "launch", "at": 1700000000}"#)
        .unwrap();
    assert!(event.is_clean());
    let at = event.value.at.unwrap();
    assert_eq!(at.timestamp(), 1_700_000_000);

    let ser = Serializer::new().with_date_encoder(date::to_unix_timestamp);
    let json = ser.to_value(&event.value).unwrap();
    assert_eq!(json, json!({"name": "launch", "at": 1_700_000_000}));
}

#[test]
fn decoder_result_is_final() {
    let de = Deserializer::new().with_date_decoder(date::from_rfc3339);
    let event = de
        .deserialize_object::<Event>(br#"{"name": "x", "at": 12}"#)
        .unwrap();
    assert!(event.is_clean());
    assert_eq!(event.value.at, None);
}

#[test]
fn dates_without_hooks() {
    init_tracing();

    let event = Deserializer::new()
        .deserialize_object::<Event>(br#"{"name": "x", "at": "2024-01-01T00:00:00Z"}"#)
        .unwrap();
    assert_eq!(event.value.at, None);
    assert_eq!(
        event.warnings,
        [Warning::FieldAssignment {
            segment: PathSegment::Field("at"),
            warnings: vec![Warning::UnsupportedConversion {
                source: JsonKind::String,
                target: core::any::type_name::<DateTime<Utc>>(),
            }],
        }]
    );

    let event = Event {
        name: String::from("x"),
        at: DateTime::from_timestamp(0, 0),
    };
    let json = Serializer::new().to_value(&event).unwrap();
    assert_eq!(json, json!({"name": "x"}));
}
