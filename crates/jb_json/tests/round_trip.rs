use std::collections::{BTreeMap, HashSet};

use jb_json::{Deserializer, Serializer};
use jb_reflect::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Reflect, Default, Debug, PartialEq, Clone)]
struct Address {
    street: String,
    number: u32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(rename_all = "camelCase")]
struct Person {
    full_name: String,
    age: u8,
    height: f64,
    active: bool,
    nickname: Option<String>,
    home: Option<Address>,
    previous: Vec<Address>,
    contacts: BTreeMap<String, Address>,
    scores: BTreeMap<String, i64>,
    tags: HashSet<String>,
    boxed: Box<Address>,
}

fn sample() -> Person {
    let home = Address {
        street: String::from("Main"),
        number: 12,
    };
    Person {
        full_name: String::from("Ana Silva"),
        age: 34,
        height: 1.68,
        active: true,
        nickname: Some(String::from("ana")),
        home: Some(home.clone()),
        previous: vec![
            Address {
                street: String::from("Oak"),
                number: 3,
            },
            home.clone(),
        ],
        contacts: BTreeMap::from([(String::from("work"), home.clone())]),
        scores: BTreeMap::from([(String::from("q1"), -4), (String::from("q2"), 9)]),
        tags: HashSet::from([String::from("admin"), String::from("ops")]),
        boxed: Box::new(home),
    }
}

#[test]
fn composite_round_trip() {
    let person = sample();
    let bytes = Serializer::new().serialize(&person).unwrap();
    let result = Deserializer::new()
        .deserialize_object::<Person>(&bytes)
        .unwrap();

    assert!(result.is_clean(), "{:?}", result.warnings);
    assert_eq!(result.value, person);
}

#[test]
fn renamed_keys_are_written() {
    let json = Serializer::new().to_value(&sample()).unwrap();
    assert_eq!(json["fullName"], json!("Ana Silva"));
    assert_eq!(json["home"], json!({"street": "Main", "number": 12}));
    assert!(json.get("full_name").is_none());
}

#[test]
fn empty_object_when_everything_is_absent() {
    #[derive(Reflect, Default)]
    struct Sparse {
        a: Option<i32>,
        b: Vec<String>,
        c: Option<Address>,
    }

    let text = Serializer::new()
        .serialize_to_string(&Sparse::default())
        .unwrap();
    assert_eq!(text, "{}");

    #[derive(Reflect, Default)]
    struct Outer {
        inner: Sparse,
        id: u8,
    }
    let json = Serializer::new().to_value(&Outer::default()).unwrap();
    assert_eq!(json, json!({"id": 0}));
}

#[test]
fn collection_and_map_round_trip() {
    let addresses = vec![
        Address {
            street: String::from("A"),
            number: 1,
        },
        Address::default(),
    ];
    let bytes = Serializer::new().serialize(&addresses).unwrap();
    let result = Deserializer::new()
        .deserialize_collection::<Vec<Address>>(&bytes)
        .unwrap();
    assert_eq!(result.value, addresses);

    let scores = BTreeMap::from([(String::from("x"), 1.25_f32)]);
    let bytes = Serializer::new().serialize(&scores).unwrap();
    let result = Deserializer::new()
        .deserialize_map::<BTreeMap<String, f32>>(&bytes)
        .unwrap();
    assert_eq!(result.value, scores);

    let labels = BTreeMap::from([(Box::<str>::from("en"), String::from("hello"))]);
    let bytes = Serializer::new().serialize(&labels).unwrap();
    let result = Deserializer::new()
        .deserialize_map::<BTreeMap<Box<str>, String>>(&bytes)
        .unwrap();
    assert!(result.is_clean());
    assert_eq!(result.value, labels);
}

#[test]
fn deserialize_into_keeps_missing_fields() {
    let mut address = Address {
        street: String::from("Old"),
        number: 5,
    };
    let warnings = Deserializer::new()
        .deserialize_into(br#"{"number": 8, "unknown": true}"#, &mut address)
        .unwrap();
    assert!(warnings.is_empty());
    assert_eq!(address.street, "Old");
    assert_eq!(address.number, 8);
}

#[test]
fn raw_fields_pass_through() {
    #[derive(Reflect, Default, Debug, PartialEq)]
    struct Envelope {
        kind: String,
        payload: serde_json::Value,
        extra: serde_json::Map<String, serde_json::Value>,
    }

    let input = json!({
        "kind": "event",
        "payload": [1, {"nested": null}],
        "extra": {"a": "b"},
    });
    let result = Deserializer::new()
        .deserialize_object::<Envelope>(input.to_string().as_bytes())
        .unwrap();
    assert!(result.is_clean());
    assert_eq!(result.value.payload, json!([1, {"nested": null}]));

    let output = Serializer::new().to_value(&result.value).unwrap();
    assert_eq!(output, input);
}
