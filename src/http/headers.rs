//! Request header storage.
//!
//! Header names are case-insensitive on the wire, so keys are lower-cased on
//! insert and on lookup. Inserting a name that already exists replaces the
//! previous value (last write wins).

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    inner: HashMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a header, trimming the name and value. Returns the value it replaced.
    pub fn insert(&mut self, name: &str, value: &str) -> Option<String> {
        self.inner
            .insert(name.trim().to_ascii_lowercase(), value.trim().to_string())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .get(&name.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// The declared `content-length`, or 0 when missing or not a number.
    pub fn content_length(&self) -> usize {
        self.get("content-length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0)
    }
}
