//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - meaning that the first and the last points of the contour are not connected. A [`Curve`](crate::Curve)
//!   is an open contour.
//! * **closed** - when the first and the last points of the contour are connected. A [`Ring`](crate::Ring) bounding a
//!   surface is a closed contour.
//!
//! Closed contours do not repeat the first point at the end of the sequence. The closing segment is produced by
//! [`Contour::iter_points_closing`] and [`Contour::iter_segments`] instead.
//!
//! A contour of a single point produces exactly one zero-length segment, so it is measured the same way as the point
//! itself. An empty contour produces no segments.

use serde::{Deserialize, Serialize};

use crate::coord::{pow2_scale, CartesianPoint3d};
use crate::envelope::Envelope;
use crate::orient::Orientation;
use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point: CartesianPoint3d;

    /// Whether the contour is closed.
    ///
    /// A closed contour has a segment connecting the last and the first points.
    fn is_closed(&self) -> bool;

    /// Iterate over the points of the contour.
    ///
    /// Note, that the last point shall not be the same as the first one even for the closed contours. If you want to
    /// include the first point at the end of iterator for closed contours, use [`Contour::iter_points_closing`]
    /// instead.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Contour::iter_points`] but for closed contours repeats the first point again at the end of the iterator.
    fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ContourPointsIterator::new(self.iter_points(), self.is_closed())
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and the
    /// first points of the contour.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(ContourPointsIterator::new(
            self.iter_points(),
            self.is_closed(),
        ))
    }

    /// Bounding box of the contour, `None` if the contour has no points.
    fn envelope(&self) -> Option<Envelope> {
        Envelope::from_points(self.iter_points())
    }

    /// Shortest distance from the point to any of the contour's segments, `None` if the contour has no points.
    fn distance_to_point(&self, point: &impl CartesianPoint3d) -> Option<f64> {
        self.iter_segments()
            .map(|segment| segment.distance_to_point(point))
            .reduce(f64::min)
    }
}

/// Position of a point relative to the area enclosed by a closed contour.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PointPosition {
    /// The point is strictly inside the enclosed area.
    Inside,
    /// The point lies on one of the contour's segments.
    Boundary,
    /// The point is outside the enclosed area.
    Outside,
}

/// A closed contour (ring). All operations work on the XY projection of the ring.
pub trait ClosedContour: Contour {
    /// Number of pairwise different points of the contour.
    fn distinct_points_count(&self) -> usize {
        let mut coords: Vec<[f64; 3]> = self
            .iter_points()
            // adding zero folds -0.0 into 0.0
            .map(|p| [p.x() + 0.0, p.y() + 0.0, p.z() + 0.0])
            .collect();
        coords.sort_by(|a, b| {
            a[0].total_cmp(&b[0])
                .then(a[1].total_cmp(&b[1]))
                .then(a[2].total_cmp(&b[2]))
        });
        coords.dedup();
        coords.len()
    }

    /// Returns true if the ring has fewer than 3 distinct points and so encloses no area.
    fn is_degenerate(&self) -> bool {
        self.distinct_points_count() < 3
    }

    /// Signed area enclosed by the ring (shoelace formula). Positive for counterclockwise rings.
    ///
    /// Degenerate rings have the area of exactly `0`. Self-intersecting rings get the sum of their lobes' signed
    /// areas, so lobes going around in opposite directions cancel out.
    fn area_signed(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }

        let (Some(envelope), Some(origin)) = (self.envelope(), self.iter_points().next()) else {
            return 0.0;
        };

        // relative to the first point and scaled to the extent of the ring, the products stay in range
        let sx = pow2_scale(envelope.max().x() - envelope.min().x());
        let sy = pow2_scale(envelope.max().y() - envelope.min().y());
        let local = |p: &Self::Point| ((p.x() - origin.x()) / sx, (p.y() - origin.y()) / sy);

        let mut prev = (0.0, 0.0);
        let mut aggr = 0.0;
        for p in self.iter_points_closing().skip(1) {
            let next = local(p);
            aggr += prev.0 * next.1 - next.0 * prev.1;
            prev = next;
        }

        aggr * sx * sy / 2.0
    }

    /// Unsigned area enclosed by the ring.
    fn area(&self) -> f64 {
        self.area_signed().abs()
    }

    /// Locates the point relative to the ring using the non-zero winding rule. Elevation is ignored.
    fn point_position(&self, point: &impl CartesianPoint3d) -> PointPosition {
        let x = point.x();
        let y = point.y();
        let mut wn = 0i64;

        for Segment(a, b) in self.iter_segments() {
            let orientation = Orientation::triplet(a, b, point);
            if orientation == Orientation::Collinear
                && x >= a.x().min(b.x())
                && x <= a.x().max(b.x())
                && y >= a.y().min(b.y())
                && y <= a.y().max(b.y())
            {
                return PointPosition::Boundary;
            }

            // upward crossings with the point on the left count up, downward ones with the point on the right down
            if a.y() <= y {
                if b.y() > y && orientation == Orientation::Counterclockwise {
                    wn += 1;
                }
            } else if b.y() <= y && orientation == Orientation::Clockwise {
                wn -= 1;
            }
        }

        if wn != 0 {
            PointPosition::Inside
        } else {
            PointPosition::Outside
        }
    }
}

/// Iterator of contour points.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    is_closed: bool,
    first_point: Option<&'a P>,
}

impl<'a, P: 'a, Iter> ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter, is_closed: bool) -> Self {
        Self {
            points_iter,
            is_closed,
            first_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if self.is_closed && self.first_point.is_none() {
            self.first_point = next;
        }

        if next.is_none() {
            self.is_closed = false;
            self.first_point.take()
        } else {
            next
        }
    }
}

/// Iterator of contour segements.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: ContourPointsIterator<'a, P, Iter>,
    prev_point: Option<&'a P>,
    emitted: bool,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: ContourPointsIterator<'a, P, Iter>) -> Self {
        Self {
            points_iter,
            prev_point: None,
            emitted: false,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(next_point) = self.points_iter.next() else {
                // a lone point still makes a (zero-length) segment
                if self.emitted {
                    return None;
                }
                self.emitted = true;
                return self.prev_point.map(|p| Segment(p, p));
            };

            if let Some(prev) = self.prev_point.replace(next_point) {
                self.emitted = true;
                return Some(Segment(prev, next_point));
            }
        }
    }
}
