//! See [`Reflect`](macro@Reflect).
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `Typed`, `Reflect` and `FromReflect`, plus
/// a capability trait depending on the shape of the type:
///
/// - `struct T { ... }`: `Struct`, a composite whose named fields are bound
///   to JSON object keys. The type must implement `Default`, which provides
///   the instance the deserializer fills in.
/// - `enum T { A, B, ... }` with unit variants only: `FromLeaf`, `ToLeaf` and
///   `MapKey`, a leaf mapped through a raw value.
/// - `struct T;` and `struct T(...);`: opaque, with no JSON shape of its own.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct Circle {
///     // JSON key is "r" instead of "radius".
///     #[reflect(rename = "r")]
///     radius: f64,
///     // Not part of the JSON shape; keeps its `Default`.
///     #[reflect(skip)]
///     cache: Vec<u8>,
///     // Called before assignment; an `Err` rejects the value.
///     #[reflect(validate = not_negative)]
///     area: f64,
///     // Flattens the fields of `Shape` into `Circle`.
///     #[reflect(base)]
///     shape: Shape,
/// }
/// ```
///
/// A `base` field models inheritance: its fields are listed after the
/// type's own fields, and names the type does not declare are forwarded to
/// it. When both declare a name, the outer declaration wins.
///
/// A validator has the signature `fn(&FieldType) -> Result<(), E>` with
/// `E: Display`.
///
/// ## Raw-value Enums
///
/// Variants map to strings by default, using the variant name:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(rename_all = "lowercase")]
/// enum Shape {
///     Square,
///     Circle,
///     #[reflect(rename = "ellipse")]
///     Oval,
/// }
/// ```
///
/// Use `raw = <integer type>` to map through discriminants instead:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(raw = i64)]
/// enum Color {
///     Red = 1,
///     Blue,
/// }
/// ```
///
/// A leaf that matches no variant decodes to nothing.
///
/// ## Type Attributes
///
/// - `rename_all = "..."`: renames fields or variants. Accepts `lowercase`,
///   `UPPERCASE`, `PascalCase`, `camelCase`, `snake_case`,
///   `SCREAMING_SNAKE_CASE`, `kebab-case` and `SCREAMING-KEBAB-CASE`.
/// - `opaque`: skips field inspection entirely.
/// - `proxy = path`: serializes the value returned by
///   `fn(&Self) -> impl Reflect` instead of the value itself.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
