use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to decide how generated code names
/// the `jb_*` crates.
///
/// Derive macros emit absolute paths such as `::jb_reflect::Typed`. That only
/// compiles when the invoking crate depends on `jb_reflect` directly; crates
/// that only depend on the `jsonbind` facade must see `::jsonbind::reflect`
/// instead.
///
/// # Example
///
/// ```rust
/// # use jb_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("jb_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. A direct dependency named `name` resolves to `::name`.
/// 2. A name starting with `jb_` resolves to `::jsonbind::short_name` when the
///    caller depends on the `jsonbind` facade (e.g. `jb_json` -> `::jsonbind::json`).
/// 3. Steps 1-2 are repeated for `dev-dependencies`.
/// 4. Otherwise the absolute path `::name` is returned.
///
/// A crate that refers to itself through generated code should carry an
/// alias such as `extern crate self as jb_reflect;` in its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "jsonbind";
const CRATE_PREFIX: &str = "jb_";

const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        assert!(
            path.exists(),
            "Cargo manifest does not exist at path {}",
            path.display(),
        );
        path
    }

    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> std::io::Result<SystemTime> {
        std::fs::metadata(path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Document::parse(text)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_path(path: &str) -> syn::Path {
        syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
    }

    fn find_in_table(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::parse_path(&format!("::{name}")));
        }

        let short = name.strip_prefix(CRATE_PREFIX)?;
        if deps.contains_key(FACADE_NAME) {
            return Some(Self::parse_path(&format!("::{FACADE_NAME}::{short}")));
        }
        None
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from
    /// this crate's Cargo.toml. See the type-level documentation for the
    /// resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_TABLES
            .iter()
            .filter_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Some(deps),
                _ => None,
            })
            .find_map(|deps| Self::find_in_table(deps, name))
            .unwrap_or_else(|| Self::parse_path(&format!("::{name}")))
    }

    /// Run `func` against the caller's manifest.
    ///
    /// Parsed manifests are cached per path and invalidated when the file's
    /// modification time changes. Callers should still resolve paths once per
    /// macro invocation and pass them around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        {
            let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = manifests.get(&manifest_path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_string(path: &syn::Path) -> String {
        let segments: Vec<String> = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        let prefix = if path.leading_colon.is_some() { "::" } else { "" };
        format!("{prefix}{}", segments.join("::"))
    }

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Document::parse(text.to_owned().into_boxed_str()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn direct_dependency() {
        let m = manifest("[dependencies]\njb_reflect = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("jb_reflect")), "::jb_reflect");
    }

    #[test]
    fn facade_dependency() {
        let m = manifest("[dependencies]\njsonbind = \"0.0.1\"\n");
        assert_eq!(
            path_string(&m.get_crate_path("jb_reflect")),
            "::jsonbind::reflect"
        );
    }

    #[test]
    fn dev_dependency_fallback() {
        let m = manifest("[dev-dependencies]\njsonbind = \"0.0.1\"\n");
        assert_eq!(path_string(&m.get_crate_path("jb_json")), "::jsonbind::json");
    }

    #[test]
    fn unknown_crate() {
        let m = manifest("[package]\nname = \"x\"\n");
        assert_eq!(path_string(&m.get_crate_path("jb_reflect")), "::jb_reflect");
        assert_eq!(path_string(&m.get_crate_path("serde")), "::serde");
    }
}
