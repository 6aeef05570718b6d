use serde::{Deserialize, Serialize};

use crate::geometry::Geom;
use crate::metadata::MetadataCollection;

/// An ordered set of geometries of any kinds.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    parts: Vec<Geom>,
    #[serde(skip)]
    metadata: Option<MetadataCollection>,
}

impl GeometryCollection {
    /// Creates a new collection.
    pub fn new(parts: Vec<Geom>) -> Self {
        Self {
            parts,
            metadata: None,
        }
    }

    /// Geometries of the collection.
    pub fn parts(&self) -> &[Geom] {
        &self.parts
    }

    /// Returns true if the collection has no geometries.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Vec<Geom>> for GeometryCollection {
    fn from(parts: Vec<Geom>) -> Self {
        Self::new(parts)
    }
}

impl FromIterator<Geom> for GeometryCollection {
    fn from_iter<T: IntoIterator<Item = Geom>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl_annotated!(GeometryCollection);
