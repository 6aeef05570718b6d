//! Distance algorithms for pairs of single geometries and the reduction over collections.
//!
//! Points and curves are measured in 3d space. Surfaces are regions of the XY plane, so every pair involving a
//! surface is measured between the XY projections of both operands: a point above a surface is inside it, and a
//! point above its edge is as far from it as its projection is. Pairs that touch or overlap are at distance exactly
//! `0`.

use geomeasure_types::{
    CartesianPoint3d, Contour, Coord, Curve, Envelope, GeomRef, GeometryKind, Point, Polygon,
    Segment, Surface,
};

use crate::dispatch::DistanceResolver;
use crate::error::MeasureError;

/// Euclidean distance between two points.
pub fn point_point(a: &Point, b: &Point) -> f64 {
    CartesianPoint3d::distance(a, b)
}

/// Shortest distance from the point to the segments of the curve. A curve of one vertex is measured as a point.
pub fn point_curve(point: &Point, curve: &Curve) -> Result<f64, MeasureError> {
    curve
        .distance_to_point(point)
        .ok_or(MeasureError::EmptyGeometry(GeometryKind::Curve))
}

/// Distance from the XY projection of the point to the surface, `0` if the point is inside the surface or on its
/// boundary.
pub fn point_surface(point: &Point, surface: &Surface) -> Result<f64, MeasureError> {
    if surface.is_empty() {
        return Err(MeasureError::EmptyGeometry(GeometryKind::Surface));
    }

    if surface.contains_point(point) {
        return Ok(0.0);
    }

    surface
        .iter_segments()
        .map(|segment| segment.distance_to_point_xy(point))
        .reduce(f64::min)
        .ok_or(MeasureError::EmptyGeometry(GeometryKind::Surface))
}

/// Shortest distance between any two segments of the curves.
pub fn curve_curve(
    resolver: &DistanceResolver<'_>,
    a: &Curve,
    b: &Curve,
) -> Result<f64, MeasureError> {
    segments_distance(resolver, a.iter_segments(), move || b.iter_segments(), false)
        .ok_or(MeasureError::EmptyGeometry(GeometryKind::Curve))
}

/// Distance between the curve and the surface, `0` if any vertex of the curve is in the surface or the curve
/// crosses its boundary.
pub fn curve_surface(
    resolver: &DistanceResolver<'_>,
    curve: &Curve,
    surface: &Surface,
) -> Result<f64, MeasureError> {
    if curve.is_empty() {
        return Err(MeasureError::EmptyGeometry(GeometryKind::Curve));
    }

    if contains_any(surface, curve.points()) {
        return Ok(0.0);
    }

    segments_distance(
        resolver,
        curve.iter_segments(),
        move || surface.iter_segments(),
        true,
    )
    .ok_or(MeasureError::EmptyGeometry(GeometryKind::Surface))
}

/// Distance between two surfaces, `0` if they overlap or touch.
pub fn surface_surface(
    resolver: &DistanceResolver<'_>,
    a: &Surface,
    b: &Surface,
) -> Result<f64, MeasureError> {
    if contains_any(b, a.outer().points()) || contains_any(a, b.outer().points()) {
        return Ok(0.0);
    }

    segments_distance(resolver, a.iter_segments(), move || b.iter_segments(), true)
        .ok_or(MeasureError::EmptyGeometry(GeometryKind::Surface))
}

/// Smallest distance between the members of the `collection` and `other`.
///
/// Empty members are skipped. Fails with [`MeasureError::EmptyGeometry`] if no member could be measured.
pub fn min_over(
    resolver: &DistanceResolver<'_>,
    collection: GeomRef<'_>,
    other: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    let mut min: Option<f64> = None;
    for member in collection.members() {
        if member.is_empty() {
            continue;
        }

        let distance = resolver.distance_between(member, other)?;
        if distance == 0.0 {
            return Ok(0.0);
        }

        min = Some(min.map_or(distance, |v| v.min(distance)));
    }

    min.ok_or(MeasureError::EmptyGeometry(collection.kind()))
}

fn contains_any(surface: &Surface, points: &[Coord]) -> bool {
    points.iter().any(|p| surface.contains_point(p))
}

/// Minimum distance over all pairs of segments from `first` and `second`.
///
/// `second` is iterated once per segment of `first`. With envelope pruning a pair is skipped when the gap between
/// the segment envelopes is not smaller than the best distance so far. If `planar` is set, the segments and the
/// gaps are measured between XY projections.
fn segments_distance<'a, 'b, A, B>(
    resolver: &DistanceResolver<'_>,
    first: A,
    second: impl Fn() -> B,
    planar: bool,
) -> Option<f64>
where
    A: Iterator<Item = Segment<'a, Coord>>,
    B: Iterator<Item = Segment<'b, Coord>>,
{
    let mut envelopes = resolver.scratch();
    // indices must line up with `second`, whatever the backend handed out
    envelopes.clear();
    if resolver.envelope_pruning() {
        envelopes.extend(second().map(|segment| segment.envelope()));
    }

    let gap = |a: &Envelope, b: &Envelope| {
        if planar {
            a.distance_xy(b)
        } else {
            a.distance(b)
        }
    };

    let mut min: Option<f64> = None;
    for a in first {
        let a_envelope = a.envelope();
        for (index, b) in second().enumerate() {
            if let (Some(min), Some(b_envelope)) = (min, envelopes.get(index)) {
                if gap(&a_envelope, b_envelope) >= min {
                    continue;
                }
            }

            let distance = if planar {
                a.distance_to_segment_xy(&b)
            } else {
                a.distance_to_segment(&b)
            };

            if distance == 0.0 {
                return Some(0.0);
            }

            min = Some(min.map_or(distance, |v| v.min(distance)));
        }
    }

    min
}
