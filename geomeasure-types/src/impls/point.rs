use serde::{Deserialize, Serialize};

use crate::coord::{CartesianPoint3d, Coord};
use crate::metadata::MetadataCollection;

/// A single location.
///
/// A point always has a coordinate. Coordinates can be changed after construction either one by one or by replacing
/// the whole [`Coord`].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coord: Coord,
    #[serde(skip)]
    metadata: Option<MetadataCollection>,
}

impl Point {
    /// Creates a new point.
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            metadata: None,
        }
    }

    /// Creates a new point from its coordinates.
    pub fn from_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(Coord::new(x, y, z))
    }

    /// Coordinate of the point.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Replaces the coordinate of the point.
    pub fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.coord.x()
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.coord.y()
    }

    /// Z coordinate.
    pub fn z(&self) -> f64 {
        self.coord.z()
    }

    /// Updates x coordinate.
    pub fn set_x(&mut self, x: f64) {
        self.coord = self.coord.with_x(x);
    }

    /// Updates y coordinate.
    pub fn set_y(&mut self, y: f64) {
        self.coord = self.coord.with_y(y);
    }

    /// Updates z coordinate.
    pub fn set_z(&mut self, z: f64) {
        self.coord = self.coord.with_z(z);
    }
}

impl From<Coord> for Point {
    fn from(coord: Coord) -> Self {
        Self::new(coord)
    }
}

impl CartesianPoint3d for Point {
    fn x(&self) -> f64 {
        self.coord.x()
    }

    fn y(&self) -> f64 {
        self.coord.y()
    }

    fn z(&self) -> f64 {
        self.coord.z()
    }
}

impl_annotated!(Point);
