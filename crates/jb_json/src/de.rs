use core::fmt;

use jb_reflect::info::{TypeInfo, Typed};
use jb_reflect::ops::{List, Map, ReflectMut, Struct};
use jb_reflect::value::{JsonKind, JsonMap, JsonValue};
use jb_reflect::{FromReflect, Reflect};
use tracing::{debug, trace};

#[cfg(feature = "chrono")]
use jb_reflect::value::Date;

use crate::{DecodeOptions, DeserializeError, PathSegment, Warning};

// -----------------------------------------------------------------------------
// Deserialized

/// A best-effort result and the warnings raised while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Deserialized<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Deserialized<T> {
    #[inline]
    pub fn into_parts(self) -> (T, Vec<Warning>) {
        (self.value, self.warnings)
    }

    /// Returns `true` if no warning was raised.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

// -----------------------------------------------------------------------------
// Deserializer

/// Converts JSON into date values.
#[cfg(feature = "chrono")]
pub type DateDecoder = Box<dyn Fn(&JsonValue) -> Option<Date> + Send + Sync>;

/// Builds typed values from JSON.
///
/// Conversion is driven by the target's [`TypeInfo`]. Only malformed input
/// and a mismatched top-level shape are fatal; everything else that cannot be
/// converted is left unset and reported as a [`Warning`].
///
/// # Examples
///
/// ```
/// use jb_json::Deserializer;
/// use jb_reflect::prelude::*;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// struct User {
///     name: String,
///     age: Option<u32>,
///     tags: Vec<String>,
/// }
///
/// let input = br#"{"name": "ana", "age": "31", "tags": ["a", 2, ["x"]]}"#;
/// let (user, warnings) = Deserializer::new()
///     .deserialize_object::<User>(input)
///     .unwrap()
///     .into_parts();
///
/// assert_eq!(user.name, "ana");
/// assert_eq!(user.age, Some(31));
/// assert_eq!(user.tags, ["a", "2"]);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(
///     warnings[0].to_string(),
///     "tags[2]: cannot convert a JSON array into `alloc::string::String`",
/// );
/// ```
#[derive(Default)]
pub struct Deserializer {
    options: DecodeOptions,
    #[cfg(feature = "chrono")]
    date_decoder: Option<DateDecoder>,
}

impl fmt::Debug for Deserializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Deserializer");
        debug.field("options", &self.options);
        #[cfg(feature = "chrono")]
        debug.field("date_decoder", &self.date_decoder.is_some());
        debug.finish()
    }
}

impl Deserializer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the function building date fields.
    ///
    /// Its result is final: a `None` leaves the field unset without warning.
    /// Without a decoder, non-null values for date fields are reported as
    /// unsupported conversions.
    #[cfg(feature = "chrono")]
    pub fn with_date_decoder<F>(mut self, decoder: F) -> Self
    where
        F: Fn(&JsonValue) -> Option<Date> + Send + Sync + 'static,
    {
        self.date_decoder = Some(Box::new(decoder));
        self
    }

    #[inline]
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    // -------------------------------------------------------------------------
    // Entry points

    /// Builds a composite from a JSON object.
    pub fn deserialize_object<T>(&self, bytes: &[u8]) -> Result<Deserialized<T>, DeserializeError>
    where
        T: Struct + Typed + Default,
    {
        let object = self.decode_object(bytes)?;
        let mut value = T::default();
        let mut warnings = Vec::new();
        self.assign_fields(&mut value, &object, &mut warnings);
        finish::<T>(value, warnings)
    }

    /// Assigns the fields of an existing composite from a JSON object.
    ///
    /// Fields without a matching key keep their current value.
    pub fn deserialize_into(
        &self,
        bytes: &[u8],
        target: &mut dyn Struct,
    ) -> Result<Vec<Warning>, DeserializeError> {
        let object = self.decode_object(bytes)?;
        let mut warnings = Vec::new();
        self.assign_fields(target, &object, &mut warnings);
        debug!(
            target_type = target.reflect_type_info().type_path(),
            warnings = warnings.len(),
            "deserialized into existing value"
        );
        Ok(warnings)
    }

    /// Builds a collection from a JSON array.
    pub fn deserialize_collection<T>(
        &self,
        bytes: &[u8],
    ) -> Result<Deserialized<T>, DeserializeError>
    where
        T: List + Typed + FromReflect + Default,
    {
        let value = self.decode(bytes)?;
        expect_kind(&value, JsonKind::Array)?;
        self.build::<T>(&value)
    }

    /// Builds a string-keyed map from a JSON object.
    pub fn deserialize_map<T>(&self, bytes: &[u8]) -> Result<Deserialized<T>, DeserializeError>
    where
        T: Map + Typed + FromReflect + Default,
    {
        let value = self.decode(bytes)?;
        expect_kind(&value, JsonKind::Object)?;
        self.build::<T>(&value)
    }

    /// Builds any value from a JSON document.
    ///
    /// Scalar documents are rejected unless
    /// [`allow_fragments`](DecodeOptions::allow_fragments) is set.
    pub fn deserialize_value<T>(
        &self,
        bytes: &[u8],
    ) -> Result<Deserialized<Option<T>>, DeserializeError>
    where
        T: FromReflect + Typed,
    {
        let value = self.decode(bytes)?;
        let kind = JsonKind::of(&value);
        if kind.is_leaf() && !self.options.allow_fragments {
            return Err(DeserializeError::InvalidTopLevel {
                expected: "array or object",
                found: kind,
            });
        }
        Ok(self.from_value::<T>(&value))
    }

    /// Builds any value from an already decoded JSON tree.
    ///
    /// ```
    /// use jb_json::Deserializer;
    /// use serde_json::json;
    ///
    /// let result = Deserializer::new().from_value::<Vec<u8>>(&json!([1, "2", 300]));
    /// assert_eq!(result.value, Some(vec![1, 2, 44]));
    /// ```
    pub fn from_value<T>(&self, value: &JsonValue) -> Deserialized<Option<T>>
    where
        T: FromReflect + Typed,
    {
        let mut warnings = Vec::new();
        let value = self
            .convert_value(value, T::type_info(), &mut warnings)
            .and_then(|value| T::take_reflect(value).ok());
        debug!(
            target_type = T::type_info().type_path(),
            converted = value.is_some(),
            warnings = warnings.len(),
            "converted JSON value"
        );
        Deserialized { value, warnings }
    }

    // -------------------------------------------------------------------------
    // Recursion

    /// Converts `value` into the type described by `target`.
    ///
    /// Rules are tried in order, the first match wins:
    ///
    /// 1. optional layers of `target` are stripped;
    /// 2. a raw JSON type accepting the shape of `value` takes a copy of it;
    /// 3. a date goes through the date decoder, whatever its result;
    /// 4. `null` is absent;
    /// 5. booleans, numbers and strings need a leaf target;
    /// 6. arrays need a collection target; failed elements are dropped;
    /// 7. objects need a composite target, or else a string-keyed map target;
    ///    failed map values are dropped.
    ///
    /// `None` means the value is absent. Warnings for nested values are
    /// wrapped with their index or key.
    pub fn convert_value(
        &self,
        value: &JsonValue,
        target: &'static TypeInfo,
        warnings: &mut Vec<Warning>,
    ) -> Option<Box<dyn Reflect>> {
        let target = target.unwrap();

        if let Some(raw) = target.as_raw()
            && raw.accepts(value)
        {
            return raw.from_json(value);
        }

        #[cfg(feature = "chrono")]
        if target.is_date() {
            return self.convert_date(value, target, warnings);
        }

        match value {
            JsonValue::Null => None,
            JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => {
                self.convert_leaf(value, target, warnings)
            }
            JsonValue::Array(items) => self.convert_array(items, target, warnings),
            JsonValue::Object(object) => self.convert_object(object, target, warnings),
        }
    }

    /// Assigns every field of `target` that has a key in `object`.
    ///
    /// Missing keys and absent values leave the field untouched. A field that
    /// refuses its converted value is reported as
    /// [`Warning::FieldAssignmentError`].
    pub fn assign_fields(
        &self,
        target: &mut dyn Struct,
        object: &JsonMap,
        warnings: &mut Vec<Warning>,
    ) {
        let Some(info) = target.reflect_type_info().as_composite() else {
            return;
        };

        for field in info.fields() {
            let name = field.name();
            let Some(raw) = object.get(name) else {
                continue;
            };

            let mut nested = Vec::new();
            let converted = self.convert_value(raw, field.type_info(), &mut nested);
            push_nested(warnings, PathSegment::Field(name), nested);

            let Some(converted) = converted else {
                continue;
            };
            if let Err(error) = target.set_field(name, converted) {
                trace!(field = name, %error, "field assignment failed");
                warnings.push(Warning::FieldAssignmentError {
                    field: name,
                    value: raw.clone(),
                    error,
                });
            }
        }
    }

    #[cfg(feature = "chrono")]
    fn convert_date(
        &self,
        value: &JsonValue,
        target: &'static TypeInfo,
        warnings: &mut Vec<Warning>,
    ) -> Option<Box<dyn Reflect>> {
        match &self.date_decoder {
            Some(decoder) => decoder(value).map(Reflect::into_boxed_reflect),
            None if value.is_null() => None,
            None => {
                unsupported(value, target, warnings);
                None
            }
        }
    }

    fn convert_leaf(
        &self,
        value: &JsonValue,
        target: &'static TypeInfo,
        warnings: &mut Vec<Warning>,
    ) -> Option<Box<dyn Reflect>> {
        let converted = target.as_leaf().and_then(|leaf| leaf.from_leaf(value));
        if converted.is_none() {
            unsupported(value, target, warnings);
        }
        converted
    }

    fn convert_array(
        &self,
        items: &[JsonValue],
        target: &'static TypeInfo,
        warnings: &mut Vec<Warning>,
    ) -> Option<Box<dyn Reflect>> {
        let Some(list) = target.as_list() else {
            unsupported_kind(JsonKind::Array, target, warnings);
            return None;
        };

        let item_info = list.item_info();
        let mut converted = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let mut nested = Vec::new();
            match self.convert_value(item, item_info, &mut nested) {
                Some(value) => converted.push(value),
                None => trace!(index, "dropped collection element"),
            }
            push_nested(warnings, PathSegment::Index(index), nested);
        }
        Some(list.from_items(converted))
    }

    fn convert_object(
        &self,
        object: &JsonMap,
        target: &'static TypeInfo,
        warnings: &mut Vec<Warning>,
    ) -> Option<Box<dyn Reflect>> {
        if let Some(composite) = target.as_composite() {
            let mut instance = composite.instantiate();
            match instance.reflect_mut() {
                ReflectMut::Struct(fields) => self.assign_fields(fields, object, warnings),
                ReflectMut::Other(_) => {
                    unsupported_kind(JsonKind::Object, target, warnings);
                    return None;
                }
            }
            return Some(instance);
        }

        let Some(map) = target.as_map() else {
            unsupported_kind(JsonKind::Object, target, warnings);
            return None;
        };

        if !map.has_string_keys() {
            let key_type = map.key_info().type_path();
            trace!(key_type, "unsupported map key type");
            warnings.push(Warning::UnsupportedMapKeyType { key_type });
            return None;
        }

        let value_info = map.value_info();
        let mut entries = Vec::with_capacity(object.len());
        for (key, item) in object {
            let mut nested = Vec::new();
            match self.convert_value(item, value_info, &mut nested) {
                Some(value) => entries.push((key.clone(), value)),
                None => trace!(key = key.as_str(), "dropped map entry"),
            }
            push_nested(warnings, PathSegment::Key(key.clone()), nested);
        }
        Some(map.from_entries(entries))
    }

    // -------------------------------------------------------------------------
    // Text layer

    fn decode(&self, bytes: &[u8]) -> Result<JsonValue, DeserializeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn decode_object(&self, bytes: &[u8]) -> Result<JsonMap, DeserializeError> {
        match self.decode(bytes)? {
            JsonValue::Object(object) => Ok(object),
            other => Err(DeserializeError::InvalidTopLevel {
                expected: "object",
                found: JsonKind::of(&other),
            }),
        }
    }

    fn build<T>(&self, value: &JsonValue) -> Result<Deserialized<T>, DeserializeError>
    where
        T: Typed + FromReflect + Default,
    {
        let mut warnings = Vec::new();
        let value = self
            .convert_value(value, T::type_info(), &mut warnings)
            .and_then(|value| T::take_reflect(value).ok())
            .unwrap_or_default();
        finish::<T>(value, warnings)
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn finish<T: Typed>(value: T, warnings: Vec<Warning>) -> Result<Deserialized<T>, DeserializeError> {
    debug!(
        target_type = T::type_info().type_path(),
        warnings = warnings.len(),
        "deserialized JSON document"
    );
    Ok(Deserialized { value, warnings })
}

fn expect_kind(value: &JsonValue, expected: JsonKind) -> Result<(), DeserializeError> {
    let found = JsonKind::of(value);
    if found == expected {
        Ok(())
    } else {
        Err(DeserializeError::InvalidTopLevel {
            expected: expected.as_str(),
            found,
        })
    }
}

fn push_nested(warnings: &mut Vec<Warning>, segment: PathSegment, nested: Vec<Warning>) {
    if !nested.is_empty() {
        warnings.push(Warning::FieldAssignment {
            segment,
            warnings: nested,
        });
    }
}

#[inline]
fn unsupported(value: &JsonValue, target: &'static TypeInfo, warnings: &mut Vec<Warning>) {
    unsupported_kind(JsonKind::of(value), target, warnings);
}

fn unsupported_kind(source: JsonKind, target: &'static TypeInfo, warnings: &mut Vec<Warning>) {
    trace!(%source, target = target.type_path(), "unsupported conversion");
    warnings.push(Warning::UnsupportedConversion {
        source,
        target: target.type_path(),
    });
}
