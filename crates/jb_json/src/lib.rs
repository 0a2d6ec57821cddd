//! JSON binding for reflected types.
//!
//! [`Deserializer`] builds typed values from JSON text and [`Serializer`]
//! writes them back, both driven by the [`TypeInfo`] of the types involved.
//! Problems below the top level never abort a deserialization: the value is
//! left unset and a [`Warning`] explains why.
//!
//! ```
//! use jb_json::{Deserializer, Serializer};
//! use jb_reflect::prelude::*;
//!
//! #[derive(Reflect, Default, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point = Deserializer::new()
//!     .deserialize_object::<Point>(br#"{"x": 1, "y": "2"}"#)
//!     .unwrap();
//! assert!(point.is_clean());
//! assert_eq!(point.value, Point { x: 1, y: 2 });
//!
//! let text = Serializer::new().serialize_to_string(&point.value).unwrap();
//! assert_eq!(text, r#"{"x":1,"y":2}"#);
//! ```
//!
//! [`TypeInfo`]: jb_reflect::info::TypeInfo

// -----------------------------------------------------------------------------
// Modules

mod de;
mod error;
mod options;
mod ser;
mod warning;

#[cfg(feature = "chrono")]
pub mod date;

// -----------------------------------------------------------------------------
// Exports

pub use de::{Deserialized, Deserializer};
pub use error::{DeserializeError, SerializeError};
pub use options::{DecodeOptions, EncodeOptions, Strictness};
pub use ser::Serializer;
pub use warning::{PathSegment, Warning};

#[cfg(feature = "chrono")]
pub use de::DateDecoder;
#[cfg(feature = "chrono")]
pub use ser::DateEncoder;

use jb_reflect::Reflect;
use jb_reflect::info::Typed;
use jb_reflect::ops::Struct;

/// Builds a composite with a default [`Deserializer`].
#[inline]
pub fn deserialize_object<T>(bytes: &[u8]) -> Result<Deserialized<T>, DeserializeError>
where
    T: Struct + Typed + Default,
{
    Deserializer::new().deserialize_object(bytes)
}

/// Serializes with a default, strict [`Serializer`].
#[inline]
pub fn serialize(value: &dyn Reflect) -> Result<Vec<u8>, SerializeError> {
    Serializer::new().serialize(value)
}
