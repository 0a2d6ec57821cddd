#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use jb_json as json;
pub use jb_reflect as reflect;

/// Everything needed to derive, read and write bound types.
pub mod prelude {
    pub use jb_json::{
        DecodeOptions, Deserialized, Deserializer, EncodeOptions, Serializer, Strictness, Warning,
    };
    pub use jb_reflect::prelude::*;
}
