use serde::{Deserialize, Serialize};

use crate::impls::curve::Ring;
use crate::metadata::MetadataCollection;

/// Polygon with optional holes.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    outer: Ring,
    holes: Vec<Ring>,
    #[serde(skip)]
    metadata: Option<MetadataCollection>,
}

impl Surface {
    /// Creates a new surface.
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Self {
            outer,
            holes,
            metadata: None,
        }
    }

    /// Outer ring.
    pub fn outer(&self) -> &Ring {
        &self.outer
    }

    /// Inner rings (holes).
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Returns true if the outer ring has no points.
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Area of the surface with the holes subtracted. See [`Polygon::area`](crate::Polygon::area).
    pub fn area(&self) -> f64 {
        crate::polygon::Polygon::area(self)
    }
}

impl From<Ring> for Surface {
    fn from(value: Ring) -> Self {
        Self::new(value, vec![])
    }
}

impl crate::polygon::Polygon for Surface {
    type Contour = Ring;

    fn outer_contour(&self) -> &Ring {
        &self.outer
    }

    fn inner_contours(&self) -> impl Iterator<Item = &'_ Ring> {
        self.holes.iter()
    }
}

impl_annotated!(Surface);
