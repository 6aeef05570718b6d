use serde::{Deserialize, Serialize};

use crate::impls::surface::Surface;
use crate::metadata::MetadataCollection;

/// A set of surfaces.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSurface {
    parts: Vec<Surface>,
    #[serde(skip)]
    metadata: Option<MetadataCollection>,
}

impl MultiSurface {
    /// Creates a new multisurface.
    pub fn new(parts: Vec<Surface>) -> Self {
        Self {
            parts,
            metadata: None,
        }
    }

    /// Surfaces of the multisurface.
    pub fn parts(&self) -> &[Surface] {
        &self.parts
    }

    /// Returns true if there are no surfaces in the multisurface.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of the areas of all the surfaces.
    ///
    /// Overlapping surfaces are not merged, so their common area is counted once per surface. An empty multisurface
    /// has the area of `0`.
    pub fn area(&self) -> f64 {
        self.parts.iter().fold(0.0, |acc, s| acc + s.area())
    }
}

impl From<Vec<Surface>> for MultiSurface {
    fn from(parts: Vec<Surface>) -> Self {
        Self::new(parts)
    }
}

impl FromIterator<Surface> for MultiSurface {
    fn from_iter<T: IntoIterator<Item = Surface>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl_annotated!(MultiSurface);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Ring};

    fn square(x: f64, y: f64, size: f64) -> Surface {
        Surface::from(Ring::new(vec![
            Coord::xy(x, y),
            Coord::xy(x + size, y),
            Coord::xy(x + size, y + size),
            Coord::xy(x, y + size),
        ]))
    }

    #[test]
    fn empty_area() {
        assert_eq!(MultiSurface::default().area(), 0.0);
    }

    #[test]
    fn overlapping_parts_are_summed() {
        let multi = MultiSurface::new(vec![
            square(0.0, 0.0, 2.0),
            square(1.0, 1.0, 2.0),
            square(10.0, 10.0, 1.0),
        ]);
        assert_eq!(multi.area(), 9.0);
    }
}
