//! The value types a preference document holds.
//!
//! A document is a flat map from preference name to one scalar value.
//! There is deliberately no nesting: the whole persistence model is
//! "one application, one flat namespace, one file", which keeps the
//! on-disk format trivial to inspect and hand-edit.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One persisted preference value.
///
/// Only four storage classes exist on disk. The catalog's `FilePath`
/// and `FolderPath` type tags are presentation hints and store as
/// [`Text`](StoredValue::Text).
///
/// Serialisation is untagged: each variant maps to the native TOML
/// scalar of the same shape (`true`, `42`, `2.5`, `"text"`), so the
/// persisted file stays human-editable and every value round-trips
/// exactly. Variant order matters for decoding: integers are tried
/// before floats so `42` loads as an integer, not as `42.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    /// A true/false flag.
    Boolean(bool),
    /// A 64-bit signed integer (TOML's native integer width).
    Integer(i64),
    /// A 64-bit float (TOML's native float width).
    Float(f64),
    /// UTF-8 text; also the storage class for file and folder paths.
    Text(String),
}

impl StoredValue {
    /// Short name of the storage class, for listings and diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            StoredValue::Boolean(_) => "bool",
            StoredValue::Integer(_) => "int",
            StoredValue::Float(_) => "float",
            StoredValue::Text(_) => "text",
        }
    }

    /// Returns the text content, or `None` for another storage class.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoredValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the boolean content, or `None` for another storage class.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoredValue::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer content, or `None` for another storage class.
    ///
    /// A stored float never reads as an integer (and vice versa); the
    /// two classes do not coerce into each other.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StoredValue::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the float content, or `None` for another storage class.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            StoredValue::Float(number) => Some(*number),
            _ => None,
        }
    }
}

impl From<bool> for StoredValue {
    fn from(flag: bool) -> Self {
        StoredValue::Boolean(flag)
    }
}

impl From<i64> for StoredValue {
    fn from(number: i64) -> Self {
        StoredValue::Integer(number)
    }
}

impl From<f64> for StoredValue {
    fn from(number: f64) -> Self {
        StoredValue::Float(number)
    }
}

impl From<String> for StoredValue {
    fn from(text: String) -> Self {
        StoredValue::Text(text)
    }
}

impl From<&str> for StoredValue {
    fn from(text: &str) -> Self {
        StoredValue::Text(text.to_string())
    }
}

impl fmt::Display for StoredValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoredValue::Boolean(flag) => flag.fmt(f),
            StoredValue::Integer(number) => number.fmt(f),
            StoredValue::Float(number) => number.fmt(f),
            StoredValue::Text(text) => text.fmt(f),
        }
    }
}

/// The complete set of persisted values for one application, keyed by
/// preference name.
///
/// Entries are held in a `BTreeMap` so the encoded file lists
/// preferences in stable alphabetical order: re-encoding an unchanged
/// document produces byte-identical text, which keeps preferences
/// files diff-friendly under version control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefDocument {
    entries: BTreeMap<String, StoredValue>,
}

impl PrefDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&StoredValue> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// Replacement is unconditional even when the previous value had a
    /// different storage class.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StoredValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns `true` when `key` holds a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoredValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_cover_all_storage_classes() {
        assert_eq!(StoredValue::Boolean(true).type_name(), "bool");
        assert_eq!(StoredValue::Integer(1).type_name(), "int");
        assert_eq!(StoredValue::Float(1.0).type_name(), "float");
        assert_eq!(StoredValue::Text(String::new()).type_name(), "text");
    }

    #[test]
    fn test_accessors_match_only_their_own_class() {
        let value = StoredValue::Integer(7);

        assert_eq!(value.as_int(), Some(7));
        assert_eq!(value.as_float(), None);
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_int_and_float_do_not_coerce() {
        assert_eq!(StoredValue::Float(3.0).as_int(), None);
        assert_eq!(StoredValue::Integer(3).as_float(), None);
    }

    #[test]
    fn test_from_conversions_pick_the_matching_class() {
        assert_eq!(StoredValue::from(true), StoredValue::Boolean(true));
        assert_eq!(StoredValue::from(42i64), StoredValue::Integer(42));
        assert_eq!(StoredValue::from(2.5f64), StoredValue::Float(2.5));
        assert_eq!(StoredValue::from("hi"), StoredValue::Text("hi".to_string()));
    }

    #[test]
    fn test_insert_replaces_across_storage_classes() {
        let mut doc = PrefDocument::new();

        doc.insert("zoom", 2i64);
        doc.insert("zoom", 2.5f64);

        assert_eq!(doc.get("zoom"), Some(&StoredValue::Float(2.5)));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let doc = PrefDocument::new();

        assert_eq!(doc.get("absent"), None);
        assert!(!doc.contains_key("absent"));
    }

    #[test]
    fn test_iter_yields_entries_in_key_order() {
        let mut doc = PrefDocument::new();
        doc.insert("zeta", 1i64);
        doc.insert("alpha", 2i64);
        doc.insert("mid", 3i64);

        let keys: Vec<&str> = doc.iter().map(|(key, _)| key).collect();

        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }
}
