use serde::{Deserialize, Serialize};

use crate::impls::curve::Curve;
use crate::metadata::MetadataCollection;

/// A set of curves.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiCurve {
    parts: Vec<Curve>,
    #[serde(skip)]
    metadata: Option<MetadataCollection>,
}

impl MultiCurve {
    /// Creates a new multicurve.
    pub fn new(parts: Vec<Curve>) -> Self {
        Self {
            parts,
            metadata: None,
        }
    }

    /// Curves of the multicurve.
    pub fn parts(&self) -> &[Curve] {
        &self.parts
    }

    /// Returns true if there are no curves in the multicurve.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl From<Vec<Curve>> for MultiCurve {
    fn from(parts: Vec<Curve>) -> Self {
        Self::new(parts)
    }
}

impl FromIterator<Curve> for MultiCurve {
    fn from_iter<T: IntoIterator<Item = Curve>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl_annotated!(MultiCurve);
