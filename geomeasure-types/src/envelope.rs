use serde::{Deserialize, Serialize};

use crate::coord::{CartesianPoint3d, Coord};

/// Axis-aligned bounding box in 3d cartesian space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    min: Coord,
    max: Coord,
}

impl Envelope {
    /// Creates a new envelope from its corners. The corners are normalized, so the order of arguments does not
    /// matter.
    pub fn new(a: Coord, b: Coord) -> Self {
        Self {
            min: Coord::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z())),
            max: Coord::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z())),
        }
    }

    /// Corner with the smallest coordinates.
    pub fn min(&self) -> Coord {
        self.min
    }

    /// Corner with the largest coordinates.
    pub fn max(&self) -> Coord {
        self.max
    }

    /// Envelope of a single point.
    pub fn from_point(p: &impl CartesianPoint3d) -> Self {
        let c = Coord::new(p.x(), p.y(), p.z());
        Self { min: c, max: c }
    }

    /// Envelope of a set of points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint3d + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = Self::from_point(points.next()?);
        Some(points.fold(first, |env, p| env.merge(Self::from_point(p))))
    }

    /// Smallest envelope containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            min: Coord::new(
                self.min.x().min(other.min.x()),
                self.min.y().min(other.min.y()),
                self.min.z().min(other.min.z()),
            ),
            max: Coord::new(
                self.max.x().max(other.max.x()),
                self.max.y().max(other.max.y()),
                self.max.z().max(other.max.z()),
            ),
        }
    }

    /// Returns true if the XY projection of the point lies inside or on the border of the XY projection of the
    /// envelope.
    pub fn contains_xy(&self, point: &impl CartesianPoint3d) -> bool {
        self.min.x() <= point.x()
            && self.max.x() >= point.x()
            && self.min.y() <= point.y()
            && self.max.y() >= point.y()
    }

    /// Euclidean gap between two envelopes, `0` if they overlap or touch.
    ///
    /// This is a lower bound of the distance between any two geometries enclosed by the envelopes.
    pub fn distance(&self, other: &Envelope) -> f64 {
        let dx = gap(self.min.x(), self.max.x(), other.min.x(), other.max.x());
        let dy = gap(self.min.y(), self.max.y(), other.min.y(), other.max.y());
        let dz = gap(self.min.z(), self.max.z(), other.min.z(), other.max.z());
        dx.hypot(dy).hypot(dz)
    }

    /// Gap between the XY projections of two envelopes.
    pub fn distance_xy(&self, other: &Envelope) -> f64 {
        let dx = gap(self.min.x(), self.max.x(), other.min.x(), other.max.x());
        let dy = gap(self.min.y(), self.max.y(), other.min.y(), other.max.y());
        dx.hypot(dy)
    }

    /// Merges all the envelopes together. Returns `None` if the iterator is empty.
    pub fn merge_all(envelopes: impl IntoIterator<Item = Envelope>) -> Option<Self> {
        let mut iter = envelopes.into_iter();
        let first = iter.next()?;
        Some(iter.fold(first, |acc, env| acc.merge(env)))
    }
}

fn gap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> f64 {
    if a_max < b_min {
        b_min - a_max
    } else if b_max < a_min {
        a_min - b_max
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_points() {
        let points = [
            Coord::new(1.0, 5.0, 0.0),
            Coord::new(-1.0, 2.0, 3.0),
            Coord::new(0.0, 7.0, -1.0),
        ];
        let env = Envelope::from_points(points.iter()).expect("not empty");
        assert_eq!(env.min(), Coord::new(-1.0, 2.0, -1.0));
        assert_eq!(env.max(), Coord::new(1.0, 7.0, 3.0));

        assert!(Envelope::from_points(std::iter::empty::<&Coord>()).is_none());
    }

    #[test]
    fn distance() {
        let a = Envelope::new(Coord::xy(0.0, 0.0), Coord::xy(1.0, 1.0));
        let b = Envelope::new(Coord::xy(4.0, 5.0), Coord::xy(6.0, 6.0));
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);

        let c = Envelope::new(Coord::xy(0.5, 0.5), Coord::xy(3.0, 3.0));
        assert_eq!(a.distance(&c), 0.0);

        let raised = Envelope::new(Coord::new(0.5, 0.5, 2.0), Coord::new(3.0, 3.0, 2.0));
        assert_eq!(a.distance(&raised), 2.0);
        assert_eq!(a.distance_xy(&raised), 0.0);

        let far = Envelope::new(Coord::xy(3e200, 4e200), Coord::xy(5e200, 5e200));
        assert_eq!(a.distance(&far), a.distance_xy(&far));
        assert_relative_eq!(a.distance(&far), 5e200, max_relative = 1e-15);
    }

    #[test]
    fn merge_all() {
        let merged = Envelope::merge_all([
            Envelope::from_point(&Coord::xy(0.0, 0.0)),
            Envelope::from_point(&Coord::xy(2.0, -1.0)),
        ])
        .expect("not empty");
        assert_eq!(merged.min(), Coord::xy(0.0, -1.0));
        assert_eq!(merged.max(), Coord::xy(2.0, 0.0));
        assert!(merged.contains_xy(&Coord::new(1.0, -0.5, 100.0)));
    }
}
