//! package.json editing
//!
//! Pure functions over `serde_json::Value`, so the edit can be exercised
//! without touching the filesystem. `serde_json::Map` is ordered by key,
//! which gives a stable serialization for free.

use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Lint script run over every tracked source file
pub const STYLE_SCRIPT: &str = r#"standard $(git ls-files "**.js")"#;

/// Hooks run by `pre-commit`, in order
pub const PRE_COMMIT_HOOKS: [&str; 2] = ["style", "test"];

/// Test command used when the manifest has none worth keeping
pub const DEFAULT_TEST_SCRIPT: &str = "node test";

/// Development-only tools added to every module
pub const DEV_DEPENDENCIES: [&str; 3] = ["pre-commit", "standard", "tape"];

/// Why a manifest could not be edited
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    /// The manifest (or one of its edited fields) is not a JSON object
    #[error("expected `{0}` to be an object")]
    NotAnObject(&'static str),
}

fn placeholder_test_script() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"(?i)no test specified").expect("placeholder pattern is valid")
    })
}

/// Whether a `scripts.test` value should be replaced by the default
///
/// Missing, blank and package-manager placeholder commands all qualify.
pub fn is_placeholder_test_script(script: Option<&Value>) -> bool {
    match script {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty() || placeholder_test_script().is_match(s),
        Some(_) => false,
    }
}

fn object_field<'a>(
    object: &'a mut Map<String, Value>,
    key: &'static str,
) -> Result<&'a mut Map<String, Value>, ManifestError> {
    let field = object
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()));
    if field.is_null() {
        *field = Value::Object(Map::new());
    }
    field.as_object_mut().ok_or(ManifestError::NotAnObject(key))
}

/// Add or overwrite the fields this tool owns
///
/// Running it again on its own output is a no-op.
pub fn edit_manifest(manifest: &mut Value, private: bool) -> Result<(), ManifestError> {
    let root = manifest
        .as_object_mut()
        .ok_or(ManifestError::NotAnObject("package.json"))?;

    if private {
        root.insert("private".to_string(), Value::Bool(true));
    }

    let scripts = object_field(root, "scripts")?;
    scripts.insert("style".to_string(), Value::from(STYLE_SCRIPT));
    if is_placeholder_test_script(scripts.get("test")) {
        scripts.insert("test".to_string(), Value::from(DEFAULT_TEST_SCRIPT));
    }

    root.insert(
        "pre-commit".to_string(),
        Value::Array(PRE_COMMIT_HOOKS.iter().map(|h| Value::from(*h)).collect()),
    );

    let dev_dependencies = object_field(root, "devDependencies")?;
    for dependency in DEV_DEPENDENCIES {
        dev_dependencies.insert(dependency.to_string(), Value::from("latest"));
    }

    Ok(())
}

/// Serialize with sorted keys, two-space indentation and a trailing newline
pub fn to_stable_string(manifest: &Value) -> String {
    let mut out = serde_json::to_string_pretty(manifest).unwrap_or_else(|_| manifest.to_string());
    out.push('\n');
    out
}

/// The `description` field, if it is a non-empty string
pub fn description(manifest: &Value) -> Option<String> {
    manifest
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
