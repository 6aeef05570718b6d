use nalgebra::Vector3;

use crate::coord::{norm, pow2_scale, CartesianPoint3d, Coord};
use crate::envelope::Envelope;
use crate::orient::Orientation;

/// A strait line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<'a, P: CartesianPoint3d> Segment<'a, P> {
    /// Returns true if both ends of the segment are the same point.
    pub fn is_degenerate(&self) -> bool {
        self.0.equal(self.1)
    }

    /// Bounding box of the segment.
    pub fn envelope(&self) -> Envelope {
        Envelope::from_point(self.0).merge(Envelope::from_point(self.1))
    }

    /// Shortest euclidian distance between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the length of the
    ///   normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the distance
    ///   to the nearer endpoint
    ///
    /// A zero-length segment is treated as a point, and so is a segment too short to change the result at the
    /// magnitude of the point's offset.
    pub fn distance_to_point(&self, point: &impl CartesianPoint3d) -> f64 {
        if self.is_degenerate() {
            return self.0.distance(point);
        }

        let ds = self.1.sub(self.0);
        let dp = point.sub(self.0);
        let scale = pow2_scale(ds.amax().max(dp.amax()));
        let (ds, dp) = (ds / scale, dp / scale);

        let ds_len = ds.norm_squared();
        if !ds_len.is_normal() {
            return self.0.distance(point);
        }

        let r = dp.dot(&ds) / ds_len;
        if r <= 0.0 {
            self.0.distance(point)
        } else if r >= 1.0 {
            self.1.distance(point)
        } else {
            norm(&(dp - ds * r)) * scale
        }
    }

    /// Same as [`Segment::distance_to_point`] for the XY projections of the segment and the point.
    pub fn distance_to_point_xy(&self, point: &impl CartesianPoint3d) -> f64 {
        let (a, b) = (flatten(self.0), flatten(self.1));
        Segment(&a, &b).distance_to_point(&flatten(point))
    }

    /// Returns true, if the XY projection of the segment has at least one common point with the XY projection of
    /// the `other` segment.
    pub fn intersects<Point: CartesianPoint3d>(&self, other: &Segment<Point>) -> bool {
        fn on_segment(
            p: &impl CartesianPoint3d,
            q: &impl CartesianPoint3d,
            r: &impl CartesianPoint3d,
        ) -> bool {
            q.x() <= p.x().max(r.x())
                && q.x() >= p.x().min(r.x())
                && q.y() <= p.y().max(r.y())
                && q.y() >= p.y().min(r.y())
        }

        let o1 = Orientation::triplet(self.0, other.0, self.1);
        let o2 = Orientation::triplet(self.0, other.1, self.1);
        let o3 = Orientation::triplet(other.0, self.0, other.1);
        let o4 = Orientation::triplet(other.0, self.1, other.1);

        if o1 != o2
            && o3 != o4
            && o1 != Orientation::Collinear
            && o2 != Orientation::Collinear
            && o3 != Orientation::Collinear
            && o4 != Orientation::Collinear
        {
            return true;
        }

        if o1 == Orientation::Collinear && on_segment(self.0, other.0, self.1) {
            return true;
        }
        if o2 == Orientation::Collinear && on_segment(self.0, other.1, self.1) {
            return true;
        }
        if o3 == Orientation::Collinear && on_segment(other.0, self.0, other.1) {
            return true;
        }
        if o4 == Orientation::Collinear && on_segment(other.0, self.1, other.1) {
            return true;
        }

        false
    }

    /// Returns true if all the ends of both segments lie at exactly the same elevation.
    pub fn is_level_with<Point: CartesianPoint3d>(&self, other: &Segment<Point>) -> bool {
        let z = self.0.z();
        self.1.z() == z && other.0.z() == z && other.1.z() == z
    }

    /// Shortest euclidian distance between two segments.
    ///
    /// When both segments lie at one elevation the distance is exactly `0` if the segments intersect, and the
    /// smallest of the four endpoint-to-segment distances otherwise. Segments at differing elevations are measured by
    /// their closest approach in 3d space.
    pub fn distance_to_segment<Point: CartesianPoint3d>(&self, other: &Segment<Point>) -> f64 {
        if !self.is_level_with(other) {
            return self
                .closest_approach(other)
                .min(other.closest_approach(self));
        }

        if self.intersects(other) {
            return 0.0;
        }

        self.distance_to_point(other.0)
            .min(self.distance_to_point(other.1))
            .min(other.distance_to_point(self.0))
            .min(other.distance_to_point(self.1))
    }

    /// Same as [`Segment::distance_to_segment`] for the XY projections of both segments, which are always level.
    pub fn distance_to_segment_xy<Point: CartesianPoint3d>(&self, other: &Segment<Point>) -> f64 {
        let (a, b) = (flatten(self.0), flatten(self.1));
        let (c, d) = (flatten(other.0), flatten(other.1));
        Segment(&a, &b).distance_to_segment(&Segment(&c, &d))
    }

    fn closest_approach<Point: CartesianPoint3d>(&self, other: &Segment<Point>) -> f64 {
        let d1 = self.1.sub(self.0);
        let d2 = other.1.sub(other.0);
        let r = self.0.sub(other.0);

        let scale = pow2_scale(d1.amax().max(d2.amax()).max(r.amax()));
        let (d1, d2, r) = (d1 / scale, d2 / scale, r / scale);

        let (a, e) = (d1.norm_squared(), d2.norm_squared());
        // lengths lost to underflow are negligible at this scale
        let a = if a.is_normal() { a } else { 0.0 };
        let e = if e.is_normal() { e } else { 0.0 };
        let f = d2.dot(&r);

        if a == 0.0 && e == 0.0 {
            return norm(&r) * scale;
        }

        let (s, t) = if a == 0.0 {
            (0.0, (f / e).clamp(0.0, 1.0))
        } else {
            let c = d1.dot(&r);
            if e == 0.0 {
                ((-c / a).clamp(0.0, 1.0), 0.0)
            } else {
                let b = d1.dot(&d2);
                let denom = a * e - b * b;
                let s = if denom != 0.0 {
                    ((b * f - c * e) / denom).clamp(0.0, 1.0)
                } else {
                    0.0
                };

                let t = (b * s + f) / e;
                if t < 0.0 {
                    ((-c / a).clamp(0.0, 1.0), 0.0)
                } else if t > 1.0 {
                    (((b - c) / a).clamp(0.0, 1.0), 1.0)
                } else {
                    (s, t)
                }
            }
        };

        let gap: Vector3<f64> = r + d1 * s - d2 * t;
        norm(&gap) * scale
    }
}

fn flatten(p: &impl CartesianPoint3d) -> Coord {
    Coord::xy(p.x(), p.y())
}
