use crate::contour::{ClosedContour, Contour, PointPosition};
use crate::coord::CartesianPoint3d;
use crate::envelope::Envelope;
use crate::segment::Segment;

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon. All area and containment computations use the XY projection of
/// the contours.
pub trait Polygon {
    /// Contour type.
    type Contour: ClosedContour;

    /// Outer contour of the polygon.
    fn outer_contour(&self) -> &Self::Contour;
    /// iterates over inner contours.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;

    /// Iterates over all contours of the polygon starting with the outer one.
    fn iter_contours(&self) -> impl Iterator<Item = &'_ Self::Contour> {
        std::iter::once(self.outer_contour()).chain(self.inner_contours())
    }

    /// Iterates over all segments of the polygon contour lines.
    fn iter_segments(
        &self,
    ) -> impl Iterator<Item = Segment<'_, <Self::Contour as Contour>::Point>> {
        self.iter_contours().flat_map(Self::Contour::iter_segments)
    }

    /// Bounding box of the outer contour.
    fn envelope(&self) -> Option<Envelope> {
        self.outer_contour().envelope()
    }

    /// Returns true if the outer contour has fewer than 3 distinct points. Degenerate polygons have no interior.
    fn is_degenerate(&self) -> bool {
        self.outer_contour().is_degenerate()
    }

    /// Area of the outer contour minus areas of the holes. Never negative.
    fn area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }

        let holes = self.inner_contours().fold(0.0, |acc, c| acc + c.area());
        (self.outer_contour().area() - holes).max(0.0)
    }

    /// Locates the point relative to the polygon. Points on the border of a hole are on the polygon's boundary.
    fn point_position(&self, point: &impl CartesianPoint3d) -> PointPosition {
        if !self
            .envelope()
            .is_some_and(|envelope| envelope.contains_xy(point))
        {
            return PointPosition::Outside;
        }

        if self.is_degenerate() {
            return match self.outer_contour().point_position(point) {
                PointPosition::Boundary => PointPosition::Boundary,
                _ => PointPosition::Outside,
            };
        }

        match self.outer_contour().point_position(point) {
            PointPosition::Outside => PointPosition::Outside,
            PointPosition::Boundary => PointPosition::Boundary,
            PointPosition::Inside => {
                for hole in self.inner_contours() {
                    match hole.point_position(point) {
                        PointPosition::Inside => return PointPosition::Outside,
                        PointPosition::Boundary => return PointPosition::Boundary,
                        PointPosition::Outside => {}
                    }
                }

                PointPosition::Inside
            }
        }
    }

    /// Returns true if the `point` lies inside or on one of the polygon's sides.
    fn contains_point(&self, point: &impl CartesianPoint3d) -> bool {
        self.point_position(point) != PointPosition::Outside
    }
}
