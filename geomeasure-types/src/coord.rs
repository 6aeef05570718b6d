//! Coordinate model shared by all geometry variants.

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A location in 3-dimensional cartesian space.
///
/// Equality is exact field equality. Tolerance-based comparison is available through the [`approx`] traits.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    x: f64,
    y: f64,
    z: f64,
}

impl Coord {
    /// Creates a new coordinate.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a new coordinate on the `z = 0` plane.
    pub const fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z coordinate (elevation).
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Returns a copy of the coordinate with `x` replaced.
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    /// Returns a copy of the coordinate with `y` replaced.
    pub fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    /// Returns a copy of the coordinate with `z` replaced.
    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Returns the coordinate as an array `[x, y, z]`.
    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Coord {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::xy(x, y)
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl std::ops::Sub<Coord> for Coord {
    type Output = Vector3<f64>;

    fn sub(self, rhs: Coord) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Add<Vector3<f64>> for Coord {
    type Output = Coord;

    fn add(self, rhs: Vector3<f64>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AbsDiffEq for Coord {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Coord {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

/// Anything that has a position in 3d cartesian space.
pub trait CartesianPoint3d {
    /// X coordinate.
    fn x(&self) -> f64;
    /// Y coordinate.
    fn y(&self) -> f64;
    /// Z coordinate.
    fn z(&self) -> f64;

    /// Exact equality of all three coordinates.
    fn equal(&self, other: &impl CartesianPoint3d) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }

    /// Vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint3d) -> Vector3<f64> {
        Vector3::new(
            self.x() - other.x(),
            self.y() - other.y(),
            self.z() - other.z(),
        )
    }

    /// Euclidean distance. Finite whenever the distance itself is representable.
    fn distance(&self, other: &impl CartesianPoint3d) -> f64 {
        norm(&self.sub(other))
    }
}

/// Euclidean length of the vector without squaring the components, so that it neither overflows nor underflows
/// before the result does.
pub(crate) fn norm(v: &Vector3<f64>) -> f64 {
    v.x.hypot(v.y).hypot(v.z)
}

/// Largest power of two not greater than `magnitude`, or `1` if `magnitude` is zero, subnormal or not finite.
///
/// Dividing by a power of two is exact, so values scaled with it keep all their bits while their products stay in
/// range.
pub(crate) fn pow2_scale(magnitude: f64) -> f64 {
    if !magnitude.is_normal() {
        return 1.0;
    }

    f64::from_bits(magnitude.abs().to_bits() & 0x7ff0_0000_0000_0000)
}

impl CartesianPoint3d for Coord {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }
}
