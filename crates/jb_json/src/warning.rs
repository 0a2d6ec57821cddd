use core::fmt;

use jb_reflect::ops::AssignError;
use jb_reflect::value::{JsonKind, JsonValue};

// -----------------------------------------------------------------------------
// PathSegment

/// One step of the path from the document root to a warning.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A field of a composite.
    Field(&'static str),
    /// An element of a collection.
    Index(usize),
    /// A value of a string-keyed map.
    Key(String),
}

impl PathSegment {
    fn write_to(&self, path: &mut String) {
        use fmt::Write;

        // Writing into a `String` cannot fail.
        let _ = match self {
            Self::Field(name) if path.is_empty() => write!(path, "{name}"),
            Self::Field(name) => write!(path, ".{name}"),
            Self::Index(index) => write!(path, "[{index}]"),
            Self::Key(key) => write!(path, "[{key:?}]"),
        };
    }
}

// -----------------------------------------------------------------------------
// Warning

/// A non-fatal problem met while deserializing.
///
/// Warnings never abort a call: the value concerned is left unset (or dropped
/// from its collection) and conversion continues with the next one.
/// Problems inside a field, element or map value are wrapped in
/// [`FieldAssignment`](Self::FieldAssignment), so nested warnings form a tree
/// that mirrors the document.
///
/// ```
/// use jb_json::{PathSegment, Warning};
/// use jb_reflect::value::JsonKind;
///
/// let warning = Warning::FieldAssignment {
///     segment: PathSegment::Field("items"),
///     warnings: vec![Warning::FieldAssignment {
///         segment: PathSegment::Index(1),
///         warnings: vec![Warning::UnsupportedConversion {
///             source: JsonKind::String,
///             target: "i32",
///         }],
///     }],
/// };
///
/// let flat = warning.flatten();
/// assert_eq!(flat.len(), 1);
/// assert_eq!(flat[0].0, "items[1]");
/// assert_eq!(warning.to_string(), "items[1]: cannot convert a JSON string into `i32`");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// The source JSON shape has no path to the target type.
    UnsupportedConversion {
        source: JsonKind,
        target: &'static str,
    },
    /// A map target whose key type is not a string.
    UnsupportedMapKeyType { key_type: &'static str },
    /// A value was converted but the field refused it.
    FieldAssignmentError {
        field: &'static str,
        value: JsonValue,
        error: AssignError,
    },
    /// Warnings raised while converting the value at `segment`.
    FieldAssignment {
        segment: PathSegment,
        warnings: Vec<Warning>,
    },
}

impl Warning {
    /// Returns every non-wrapper warning with its rendered path, such as
    /// `owner.pets[2]["name"]`.
    ///
    /// The path of a root-level warning is empty.
    pub fn flatten(&self) -> Vec<(String, &Warning)> {
        let mut out = Vec::new();
        self.flatten_into(String::new(), &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, path: String, out: &mut Vec<(String, &'a Warning)>) {
        match self {
            Self::FieldAssignment { segment, warnings } => {
                let mut path = path;
                segment.write_to(&mut path);
                for warning in warnings {
                    warning.flatten_into(path.clone(), out);
                }
            }
            Self::FieldAssignmentError { field, .. } => {
                let mut path = path;
                PathSegment::Field(*field).write_to(&mut path);
                out.push((path, self));
            }
            _ => out.push((path, self)),
        }
    }

    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedConversion { source, target } => {
                write!(f, "cannot convert a JSON {source} into `{target}`")
            }
            Self::UnsupportedMapKeyType { key_type } => {
                write!(f, "map keys of type `{key_type}` are not supported")
            }
            Self::FieldAssignmentError { value, error, .. } => {
                write!(f, "cannot assign {value}: {error}")
            }
            Self::FieldAssignment { warnings, .. } => {
                write!(f, "{} nested warning(s)", warnings.len())
            }
        }
    }
}

/// One line per flattened warning, `path: message`.
impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (path, warning)) in self.flatten().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            if !path.is_empty() {
                write!(f, "{path}: ")?;
            }
            warning.describe(f)?;
        }
        Ok(())
    }
}
