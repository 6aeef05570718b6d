use serde::{Deserialize, Serialize};

use crate::coord::{pow2_scale, CartesianPoint3d};

/// Orientation of a triplet of points on the XY plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points. Elevation is ignored.
    ///
    /// The test is exact in the sense that no tolerance is applied: only an exactly zero cross product is reported
    /// as [`Orientation::Collinear`]. A NaN cross product is reported as collinear as well. The differences are
    /// scaled by a power of two before multiplying, so the products cannot overflow.
    pub fn triplet(
        p: &impl CartesianPoint3d,
        q: &impl CartesianPoint3d,
        r: &impl CartesianPoint3d,
    ) -> Self {
        let diffs = [q.y() - p.y(), r.x() - q.x(), q.x() - p.x(), r.y() - q.y()];
        let scale = pow2_scale(diffs.iter().fold(0.0, |acc: f64, d| acc.max(d.abs())));
        let [a, b, c, d] = diffs.map(|d| d / scale);

        let v = a * b - c * d;
        if v > 0.0 {
            Self::Clockwise
        } else if v < 0.0 {
            Self::Counterclockwise
        } else {
            Self::Collinear
        }
    }
}
