use serde::Deserialize;

/// Options of the JSON text decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Accept a scalar (`1`, `"a"`, `null`) as the whole document.
    ///
    /// Only [`Deserializer::deserialize_value`](crate::Deserializer::deserialize_value)
    /// can return a scalar, so other entry points ignore this flag.
    pub allow_fragments: bool,
}

/// Options of the JSON text encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    pub pretty: bool,
    /// Sort object keys instead of keeping field declaration order.
    pub sort_keys: bool,
}

/// How the serializer treats values it cannot represent.
///
/// ```
/// use jb_json::Strictness;
///
/// let parsed: Strictness = serde_json::from_str("\"lenient\"").unwrap();
/// assert_eq!(parsed, Strictness::Lenient);
/// assert_eq!(Strictness::default(), Strictness::Strict);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Abort with an error on opaque values and non-string map keys.
    #[default]
    Strict,
    /// Omit them.
    Lenient,
}
