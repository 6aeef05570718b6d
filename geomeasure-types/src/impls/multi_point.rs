use serde::{Deserialize, Serialize};

use crate::impls::point::Point;
use crate::metadata::MetadataCollection;

/// A set of points.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint {
    parts: Vec<Point>,
    #[serde(skip)]
    metadata: Option<MetadataCollection>,
}

impl MultiPoint {
    /// Creates a new multipoint.
    pub fn new(parts: Vec<Point>) -> Self {
        Self {
            parts,
            metadata: None,
        }
    }

    /// Points of the multipoint.
    pub fn parts(&self) -> &[Point] {
        &self.parts
    }

    /// Returns true if there are no points in the multipoint.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(parts: Vec<Point>) -> Self {
        Self::new(parts)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl_annotated!(MultiPoint);
