use jb_json::{DeserializeError, Deserializer, PathSegment, Warning};
use jb_reflect::ops::AssignError;
use jb_reflect::prelude::*;
use jb_reflect::value::JsonKind;
use pretty_assertions::assert_eq;

#[derive(Reflect, Debug, PartialEq)]
#[reflect(rename_all = "lowercase")]
enum Shape {
    Square,
    Circle,
    Oval,
}

#[derive(Reflect, Default, Debug)]
struct Drawing {
    title: String,
    width: u32,
    height: u32,
    shape: Option<Shape>,
    layers: Vec<i32>,
}

#[test]
fn one_bad_field_is_contained() {
    let input = br#"{
        "title": ["not", "a", "string"],
        "width": 10,
        "height": "20",
        "shape": "circle",
        "layers": [1, 2]
    }"#;
    let (drawing, warnings) = Deserializer::new()
        .deserialize_object::<Drawing>(input)
        .unwrap()
        .into_parts();

    assert_eq!(drawing.title, "");
    assert_eq!(drawing.width, 10);
    assert_eq!(drawing.height, 20);
    assert_eq!(drawing.shape, Some(Shape::Circle));
    assert_eq!(drawing.layers, [1, 2]);

    assert_eq!(
        warnings,
        [Warning::FieldAssignment {
            segment: PathSegment::Field("title"),
            warnings: vec![Warning::UnsupportedConversion {
                source: JsonKind::Array,
                target: "alloc::string::String",
            }],
        }]
    );
}

#[test]
fn unknown_enum_value_leaves_field_unset() {
    let result = Deserializer::new()
        .deserialize_object::<Drawing>(br#"{"shape": "triangle", "width": 3}"#)
        .unwrap();
    assert_eq!(result.value.shape, None);
    assert_eq!(result.value.width, 3);
    assert_eq!(result.warnings.len(), 1);

    let flat = result.warnings[0].flatten();
    assert_eq!(flat.len(), 1);
    assert_eq!(flat[0].0, "shape");
    assert!(matches!(
        flat[0].1,
        Warning::UnsupportedConversion {
            source: JsonKind::String,
            ..
        }
    ));
}

#[test]
fn element_warnings_are_indexed() {
    let result = Deserializer::new()
        .deserialize_object::<Drawing>(br#"{"layers": [1, "x", 3]}"#)
        .unwrap();
    assert_eq!(result.value.layers, [1, 3]);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].flatten()[0].0, "layers[1]");
}

#[test]
fn null_leaves_fields_unset() {
    let result = Deserializer::new()
        .deserialize_object::<Drawing>(br#"{"width": null, "shape": null}"#)
        .unwrap();
    assert!(result.is_clean());
    assert_eq!(result.value.width, 0);
    assert_eq!(result.value.shape, None);
}

#[test]
fn deep_paths() {
    #[derive(Reflect, Default, Debug)]
    struct Gallery {
        rooms: std::collections::BTreeMap<String, Vec<Drawing>>,
    }

    let input = br#"{"rooms": {"east": [{"width": 1}, {"width": "wide"}]}}"#;
    let result = Deserializer::new()
        .deserialize_object::<Gallery>(input)
        .unwrap();

    let east = &result.value.rooms["east"];
    assert_eq!(east.len(), 2);
    assert_eq!(east[1].width, 0);
    assert_eq!(
        result.warnings[0].to_string(),
        "rooms[\"east\"][1].width: cannot convert a JSON string into `u32`"
    );
}

#[test]
fn validation_rejections_are_warnings() {
    fn not_empty(value: &String) -> Result<(), &'static str> {
        if value.is_empty() {
            Err("must not be empty")
        } else {
            Ok(())
        }
    }

    #[derive(Reflect, Default, Debug)]
    struct Account {
        #[reflect(validate = not_empty)]
        login: String,
        #[reflect(rename = "Balance")]
        balance: i64,
    }

    let (account, warnings) = Deserializer::new()
        .deserialize_object::<Account>(br#"{"login": "", "Balance": 12}"#)
        .unwrap()
        .into_parts();
    assert_eq!(account.balance, 12);
    assert_eq!(
        warnings,
        [Warning::FieldAssignmentError {
            field: "login",
            value: serde_json::json!(""),
            error: AssignError::rejected("must not be empty"),
        }]
    );
}

#[test]
fn fatal_errors() {
    let de = Deserializer::new();

    let err = de.deserialize_object::<Drawing>(b"[1, 2]").unwrap_err();
    assert!(matches!(
        err,
        DeserializeError::InvalidTopLevel {
            expected: "object",
            found: JsonKind::Array,
        }
    ));

    let err = de.deserialize_object::<Drawing>(b"{\"title\": ").unwrap_err();
    assert!(matches!(err, DeserializeError::Json(_)));
    assert!(err.to_string().starts_with("invalid JSON input"));
}
