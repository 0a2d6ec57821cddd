use core::fmt;

use jb_reflect::Reflect;
use jb_reflect::info::RawKind;
use jb_reflect::ops::{List, Map, ReflectRef, Struct};
use jb_reflect::value::{JsonMap, JsonValue};
use tracing::{debug, trace, warn};

#[cfg(feature = "chrono")]
use jb_reflect::value::Date;

use crate::{EncodeOptions, SerializeError, Strictness};

/// Converts date values into JSON.
#[cfg(feature = "chrono")]
pub type DateEncoder = Box<dyn Fn(&Date) -> Option<JsonValue> + Send + Sync>;

/// Writes typed values as JSON.
///
/// Absent values (unset optionals, NaN, empty containers, composites whose
/// fields are all absent) are omitted from their parent rather than written
/// as `null`.
///
/// # Examples
///
/// ```
/// use jb_json::Serializer;
/// use jb_reflect::prelude::*;
///
/// #[derive(Reflect, Default)]
/// struct Sample {
///     label: String,
///     ratio: f64,
///     note: Option<String>,
///     values: Vec<i32>,
/// }
///
/// let sample = Sample {
///     label: String::from("a"),
///     ratio: f64::NAN,
///     note: None,
///     values: vec![1, 2],
/// };
///
/// let text = Serializer::new().serialize_to_string(&sample).unwrap();
/// assert_eq!(text, r#"{"label":"a","values":[1,2]}"#);
/// ```
#[derive(Default)]
pub struct Serializer {
    options: EncodeOptions,
    strictness: Strictness,
    #[cfg(feature = "chrono")]
    date_encoder: Option<DateEncoder>,
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Serializer");
        debug
            .field("options", &self.options)
            .field("strictness", &self.strictness);
        #[cfg(feature = "chrono")]
        debug.field("date_encoder", &self.date_encoder.is_some());
        debug.finish()
    }
}

impl Serializer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Sets the function writing date fields.
    ///
    /// Without an encoder, dates are omitted.
    #[cfg(feature = "chrono")]
    pub fn with_date_encoder<F>(mut self, encoder: F) -> Self
    where
        F: Fn(&Date) -> Option<JsonValue> + Send + Sync + 'static,
    {
        self.date_encoder = Some(Box::new(encoder));
        self
    }

    #[inline]
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    #[inline]
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    // -------------------------------------------------------------------------
    // Entry points

    /// Serializes a composite, a collection or a map to JSON text.
    pub fn serialize(&self, value: &dyn Reflect) -> Result<Vec<u8>, SerializeError> {
        let json = self.to_value(value)?;
        let bytes = if self.options.pretty {
            serde_json::to_vec_pretty(&json)?
        } else {
            serde_json::to_vec(&json)?
        };
        Ok(bytes)
    }

    /// Like [`serialize`](Self::serialize), returning a `String`.
    pub fn serialize_to_string(&self, value: &dyn Reflect) -> Result<String, SerializeError> {
        let json = self.to_value(value)?;
        let text = if self.options.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(text)
    }

    /// Serializes a composite, a collection or a map to a JSON tree.
    ///
    /// A top-level value that reduces to nothing becomes `{}` (composites and
    /// maps) or `[]` (collections).
    pub fn to_value(&self, value: &dyn Reflect) -> Result<JsonValue, SerializeError> {
        let type_path = value.type_path();
        let info = value.reflect_type_info().unwrap();

        let empty = if info.as_composite().is_some()
            || info.as_map().is_some()
            || info.as_raw().is_some_and(|raw| raw.kind() == RawKind::Object)
        {
            JsonValue::Object(JsonMap::new())
        } else if info.as_list().is_some() {
            JsonValue::Array(Vec::new())
        } else {
            return Err(SerializeError::InvalidTopLevel { type_path });
        };

        let mut json = self.reduce(value)?.unwrap_or(empty);
        if self.options.sort_keys {
            json.sort_all_objects();
        }
        debug!(value_type = type_path, "serialized value");
        Ok(json)
    }

    // -------------------------------------------------------------------------
    // Recursion

    /// Reduces `value` to a JSON tree, or `None` if it is absent.
    ///
    /// Rules are tried in order, the first match wins:
    ///
    /// 1. an optional reduces its inner value, an unset one is absent;
    /// 2. a proxy is reduced in place of the value;
    /// 3. raw JSON and leaves are written as they are;
    /// 4. a date goes through the date encoder;
    /// 5. maps, then collections, then composites are reduced entry by entry,
    ///    dropping absent entries; an empty result is absent;
    /// 6. anything else has no representation.
    pub fn reduce(&self, value: &dyn Reflect) -> Result<Option<JsonValue>, SerializeError> {
        match value.reflect_ref() {
            ReflectRef::Optional(Some(inner)) => self.reduce(inner),
            ReflectRef::Optional(None) => Ok(None),
            view => match value.reflect_proxy() {
                Some(proxy) => self.reduce(&*proxy),
                None => self.reduce_view(value, view),
            },
        }
    }

    fn reduce_view(
        &self,
        value: &dyn Reflect,
        view: ReflectRef<'_>,
    ) -> Result<Option<JsonValue>, SerializeError> {
        match view {
            ReflectRef::Raw(raw) => Ok(raw.to_json()),
            ReflectRef::Leaf(leaf) => {
                let json = leaf.to_leaf();
                if json.is_none() {
                    trace!(value_type = value.type_path(), "leaf has no JSON representation");
                }
                Ok(json)
            }
            #[cfg(feature = "chrono")]
            ReflectRef::Date(date) => Ok(self.date_encoder.as_ref().and_then(|encode| encode(date))),
            ReflectRef::Map(map) => self.reduce_map(map),
            ReflectRef::List(list) => self.reduce_list(list),
            ReflectRef::Struct(fields) => self.reduce_struct(fields),
            ReflectRef::Opaque(_) | ReflectRef::Optional(_) => self.invalid_object(value),
        }
    }

    fn reduce_map(&self, map: &dyn Map) -> Result<Option<JsonValue>, SerializeError> {
        let mut object = JsonMap::new();
        for (key, item) in map.iter() {
            let Some(key) = key.key_string() else {
                let key_type = map_key_type(map);
                match self.strictness {
                    Strictness::Strict => {
                        warn!(key_type, "map key cannot be written as a JSON object key");
                        return Err(SerializeError::InvalidMapKeyType { key_type });
                    }
                    Strictness::Lenient => {
                        trace!(key_type, "skipped map entry");
                        continue;
                    }
                }
            };
            if let Some(json) = self.reduce(item)? {
                object.insert(key, json);
            }
        }
        Ok((!object.is_empty()).then_some(JsonValue::Object(object)))
    }

    fn reduce_list(&self, list: &dyn List) -> Result<Option<JsonValue>, SerializeError> {
        let mut items = Vec::with_capacity(list.len());
        for item in list.iter() {
            if let Some(json) = self.reduce(item)? {
                items.push(json);
            }
        }
        Ok((!items.is_empty()).then_some(JsonValue::Array(items)))
    }

    fn reduce_struct(&self, fields: &dyn Struct) -> Result<Option<JsonValue>, SerializeError> {
        let mut object = JsonMap::new();
        for name in fields.field_names() {
            let Some(field) = fields.field(name) else {
                continue;
            };
            if let Some(json) = self.reduce(field)? {
                object.insert(String::from(name), json);
            }
        }
        Ok((!object.is_empty()).then_some(JsonValue::Object(object)))
    }

    fn invalid_object(&self, value: &dyn Reflect) -> Result<Option<JsonValue>, SerializeError> {
        let type_path = value.type_path();
        match self.strictness {
            Strictness::Strict => {
                warn!(type_path, "value has no JSON representation");
                Err(SerializeError::InvalidObject { type_path })
            }
            Strictness::Lenient => {
                trace!(type_path, "omitted value without JSON representation");
                Ok(None)
            }
        }
    }
}

fn map_key_type(map: &dyn Map) -> &'static str {
    map.reflect_type_info()
        .as_map()
        .map_or("<unknown>", |info| info.key_info().type_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::{BTreeMap, HashSet, VecDeque};

    fn reduce(value: &dyn Reflect) -> Option<JsonValue> {
        Serializer::new().reduce(value).unwrap()
    }

    #[test]
    fn leaves_and_absence() {
        assert_eq!(reduce(&3_u8), Some(json!(3)));
        assert_eq!(reduce(&f32::INFINITY), None);
        assert_eq!(reduce(&Some(Some(1.5_f64))), Some(json!(1.5)));
        assert_eq!(reduce(&None::<String>), None);
        assert_eq!(reduce(&json!(null)), None);
        assert_eq!(reduce(&json!({"raw": true})), Some(json!({"raw": true})));
    }

    #[test]
    fn containers_drop_absent_entries() {
        assert_eq!(reduce(&vec![Some(1), None, Some(3)]), Some(json!([1, 3])));
        assert_eq!(reduce(&Vec::<u8>::new()), None);
        assert_eq!(reduce(&vec![f64::NAN]), None);
        assert_eq!(reduce(&VecDeque::from([true])), Some(json!([true])));
        assert_eq!(reduce(&HashSet::from([7_u16])), Some(json!([7])));

        let map = BTreeMap::from([("a", 1_u8), ("b", 2)].map(|(k, v)| (String::from(k), v)));
        assert_eq!(reduce(&map), Some(json!({"a": 1, "b": 2})));

        let map = BTreeMap::from([(1_u32, None::<u8>)]);
        assert_eq!(reduce(&map), None);
    }

    #[test]
    fn integer_map_keys_use_text() {
        let map = BTreeMap::from([(10_i64, "x".to_owned())]);
        assert_eq!(reduce(&map), Some(json!({"10": "x"})));
    }

    #[test]
    fn top_level_shapes() {
        let ser = Serializer::new();
        assert_eq!(ser.to_value(&Vec::<u8>::new()).unwrap(), json!([]));
        assert_eq!(
            ser.to_value(&BTreeMap::<String, u8>::new()).unwrap(),
            json!({})
        );
        assert!(matches!(
            ser.to_value(&5_u8),
            Err(SerializeError::InvalidTopLevel { type_path: "u8" })
        ));
    }

    #[test]
    fn encode_options() {
        let map = serde_json::Map::from_iter([
            (String::from("b"), json!(1)),
            (String::from("a"), json!(2)),
        ]);
        let ser = Serializer::new();
        assert_eq!(ser.serialize_to_string(&map).unwrap(), r#"{"b":1,"a":2}"#);

        let ser = ser.with_options(EncodeOptions {
            pretty: true,
            sort_keys: true,
        });
        assert_eq!(
            ser.serialize_to_string(&map).unwrap(),
            "{\n  \"a\": 2,\n  \"b\": 1\n}"
        );
        assert_eq!(ser.serialize(&map).unwrap(), ser.serialize_to_string(&map).unwrap().into_bytes());
    }
}
