//! Document — the read-only JSON knowledge base, loaded once.

use crate::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The parsed knowledge file. No schema is enforced: every lookup walks
/// nested objects and treats anything missing or mistyped as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Value,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    /// An empty top-level mapping.
    pub fn empty() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
            _ => LoadError::Io(format!("{}: {e}", path.display())),
        })?;
        let root: Value = serde_json::from_slice(&bytes)
            .map_err(|e| LoadError::Parse(format!("{}: {e}", path.display())))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        is_empty_value(&self.root)
    }

    /// Walk `path` through nested objects.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.root, |node, key| node.as_object()?.get(*key))
    }

    /// The value at `path`, or `{}` when absent.
    pub fn value_or_empty(&self, path: &[&str]) -> Value {
        self.get(path)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// The sequence at `path`; absent or non-sequence values yield an empty list.
    pub fn list(&self, path: &[&str]) -> Vec<Value> {
        self.get(path)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of keys (mapping) or elements (sequence) at `path`.
    pub fn len_at(&self, path: &[&str]) -> usize {
        match self.get(path) {
            Some(Value::Object(map)) => map.len(),
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }
}

impl FromStr for Document {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let root = serde_json::from_str(s).map_err(|e| LoadError::Parse(e.to_string()))?;
        Ok(Self { root })
    }
}

// ---------------------------------------------------------------------------
// Truthiness
// ---------------------------------------------------------------------------

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
