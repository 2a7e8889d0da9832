//! Leaf store: canonical path → value.
//!
//! Entries appear on first write or in bulk through `initialize_zero`;
//! there is no delete. Reading a key that was never written yields `Ø`,
//! which is indistinguishable from an explicit `Ø`.

use std::collections::BTreeMap;

use crate::path::{CanonicalPath, PathError};
use crate::value::Value;

/// Mapping from validated path to leaf value, iterated in enumeration order.
#[derive(Clone, Debug, Default)]
pub struct LeafStore {
    leaves: BTreeMap<CanonicalPath, Value>,
}

impl LeafStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `Ø` to all 512 leaves, returning the paths in enumeration order.
    pub fn initialize_zero(&mut self) -> Vec<CanonicalPath> {
        let paths = CanonicalPath::all();
        for path in &paths {
            self.leaves.insert(*path, Value::Empty);
        }
        tracing::debug!(leaves = paths.len(), "zero state initialized");
        paths
    }

    /// Parse, validate and store. The store is untouched on error.
    pub fn set(&mut self, path_text: &str, value: Value) -> Result<CanonicalPath, PathError> {
        let path = CanonicalPath::parse(path_text)?;
        self.set_path(path, value);
        Ok(path)
    }

    /// Store at an already-validated path. Empty text is stored as `Ø`.
    pub fn set_path(&mut self, path: CanonicalPath, value: Value) {
        let value = value.normalize();
        tracing::debug!(path = %path, value = %value, "leaf set");
        self.leaves.insert(path, value);
    }

    /// Parse, validate and read; unwritten leaves read as `Ø`.
    pub fn get(&self, path_text: &str) -> Result<Value, PathError> {
        let path = CanonicalPath::parse(path_text)?;
        Ok(self.get_path(&path))
    }

    pub fn get_path(&self, path: &CanonicalPath) -> Value {
        self.leaves.get(path).cloned().unwrap_or_default()
    }

    /// Whether `path` has an entry (explicit `Ø` included).
    pub fn contains(&self, path: &CanonicalPath) -> bool {
        self.leaves.contains_key(path)
    }

    /// Number of entries, explicit `Ø` included.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalPath, &Value)> {
        self.leaves.iter()
    }
}
