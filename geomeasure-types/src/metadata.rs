//! Key-value annotations that can be attached to geometries.
//!
//! Metadata is never read by the measurement code. It is carried along with a geometry for the benefit of higher
//! layers. A [`MetadataCollection`] can only be created through a [`MetadataFactory`].

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Value stored in a [`MetadataCollection`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    /// Text value.
    String(String),
    /// Floating point value.
    Double(f64),
    /// Signed integer value.
    Int64(i64),
    /// Unsigned integer value.
    Uint64(u64),
    /// Boolean value.
    Bool(bool),
    /// Explicitly empty value.
    Null,
}

impl Display for MetadataValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataValue::String(v) => write!(f, "{v}"),
            MetadataValue::Double(v) => write!(f, "{v}"),
            MetadataValue::Int64(v) => write!(f, "{v}"),
            MetadataValue::Uint64(v) => write!(f, "{v}"),
            MetadataValue::Bool(v) => write!(f, "{v}"),
            MetadataValue::Null => write!(f, "<NULL>"),
        }
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        Self::Uint64(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// String-keyed mapping of [`MetadataValue`]s with unique keys, iterated in key order.
///
/// Cloning a collection produces a deep copy that shares nothing with the original.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataCollection {
    entries: BTreeMap<String, MetadataValue>,
}

impl MetadataCollection {
    fn new(entries: BTreeMap<String, MetadataValue>) -> Self {
        Self { entries }
    }

    /// Returns the value stored under the `key`.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under the `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut MetadataValue> {
        self.entries.get_mut(key)
    }

    /// Stores the value under the `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes the value stored under the `key`.
    pub fn remove(&mut self, key: &str) -> Option<MetadataValue> {
        self.entries.remove(key)
    }

    /// Whether there is a value stored under the `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Removes all the entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The only way to create a [`MetadataCollection`].
#[derive(Debug, Default, Copy, Clone)]
pub struct MetadataFactory;

impl MetadataFactory {
    /// Creates a new factory.
    pub fn new() -> Self {
        Self
    }

    /// Creates an empty collection.
    pub fn create_collection(&self) -> MetadataCollection {
        MetadataCollection::new(BTreeMap::new())
    }

    /// Creates a collection populated from the `source` mapping. If the source repeats a key, the last value wins.
    pub fn create_collection_from<K, V>(
        &self,
        source: impl IntoIterator<Item = (K, V)>,
    ) -> MetadataCollection
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        MetadataCollection::new(
            source
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Geometries that can carry a [`MetadataCollection`].
pub trait Annotated {
    /// Attached metadata, if any.
    fn metadata(&self) -> Option<&MetadataCollection>;

    /// Mutable access to the attached metadata, if any.
    fn metadata_mut(&mut self) -> Option<&mut MetadataCollection>;

    /// Attaches the metadata, replacing the previous one.
    fn set_metadata(&mut self, metadata: Option<MetadataCollection>);

    /// Detaches and returns the metadata.
    fn take_metadata(&mut self) -> Option<MetadataCollection>;

    /// Builder-style variant of [`Annotated::set_metadata`].
    fn with_metadata(mut self, metadata: MetadataCollection) -> Self
    where
        Self: Sized,
    {
        self.set_metadata(Some(metadata));
        self
    }
}
