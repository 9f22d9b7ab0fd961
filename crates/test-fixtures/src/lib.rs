//! Test fixture loader for quarter ratio golden datasets.
//!
//! Provides typed deserialization of the golden JSON files and helpers for
//! comparing allocator output against them in tests across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

/// Absolute tolerance for comparing fractional golden values.
pub const FLOAT_TOLERANCE: f64 = 1e-9;

/// One golden scenario: a config, an input sequence, and expected outputs.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub description: String,
    /// Raw allocator config, deserialized by the consuming crate.
    #[serde(default)]
    pub config: Value,
    pub total: f64,
    pub quarters: Vec<Value>,
    /// Expected output of allocation alone.
    #[serde(default)]
    pub allocated: Option<Vec<Value>>,
    /// Expected output of allocation followed by redistribution.
    #[serde(default)]
    pub distributed: Option<Vec<Value>>,
    /// Expected sum of the allocated values before redistribution.
    #[serde(default)]
    pub allocated_sum: Option<f64>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a golden case.
pub fn load_golden(relative_path: &str) -> GoldenCase {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Compare two JSON values, numbers within [`FLOAT_TOLERANCE`].
pub fn json_close(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => (a - b).abs() <= FLOAT_TOLERANCE,
            _ => false,
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| json_close(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| json_close(x, y)))
        }
        _ => actual == expected,
    }
}

/// Assert two JSON values are equal up to float tolerance.
///
/// # Panics
/// Panics with both values pretty-printed when they differ.
pub fn assert_json_close(actual: &Value, expected: &Value, context: &str) {
    assert!(
        json_close(actual, expected),
        "{context}: mismatch\n  actual:   {}\n  expected: {}",
        actual,
        expected
    );
}
