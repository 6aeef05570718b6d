use serde::{Deserialize, Serialize};

use crate::contour::{ClosedContour, Contour};
use crate::coord::Coord;
use crate::metadata::MetadataCollection;

/// Open polyline. See [`crate::contour`] for how degenerate curves are treated.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<Coord>,
    #[serde(skip)]
    metadata: Option<MetadataCollection>,
}

impl Curve {
    /// Creates a new curve.
    pub fn new(points: Vec<Coord>) -> Self {
        Self {
            points,
            metadata: None,
        }
    }

    /// Points of the curve.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Returns true if the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Coord>> for Curve {
    fn from(points: Vec<Coord>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coord> for Curve {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Contour for Curve {
    type Point = Coord;

    fn is_closed(&self) -> bool {
        false
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Coord> {
        self.points.iter()
    }
}

impl_annotated!(Curve);

/// Closed contour bounding a [`Surface`](crate::Surface). The last point is implicitly connected to the first one, so
/// it should not be repeated at the end of the sequence.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<Coord>,
}

impl Ring {
    /// Creates a new ring.
    pub fn new(points: Vec<Coord>) -> Self {
        Self { points }
    }

    /// Points of the ring.
    pub fn points(&self) -> &[Coord] {
        &self.points
    }

    /// Returns true if the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Coord>> for Ring {
    fn from(points: Vec<Coord>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coord> for Ring {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Contour for Ring {
    type Point = Coord;

    fn is_closed(&self) -> bool {
        true
    }

    fn iter_points(&self) -> impl Iterator<Item = &'_ Coord> {
        self.points.iter()
    }
}

impl ClosedContour for Ring {}
