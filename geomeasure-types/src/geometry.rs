use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::envelope::Envelope;
use crate::geometry_kind::GeometryKind;
use crate::impls::{
    Curve, GeometryCollection, MultiCurve, MultiPoint, MultiSurface, Point, Surface,
};
use crate::metadata::{Annotated, MetadataCollection};
use crate::polygon::Polygon;

/// Any geometry of the closed set of variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geom {
    /// Single point.
    Point(Point),
    /// Open polyline.
    Curve(Curve),
    /// Polygon with holes.
    Surface(Surface),
    /// Set of points.
    MultiPoint(MultiPoint),
    /// Set of curves.
    MultiCurve(MultiCurve),
    /// Set of surfaces.
    MultiSurface(MultiSurface),
    /// Set of geometries of any kinds.
    GeometryCollection(GeometryCollection),
}

impl Geom {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geom::Point(_) => GeometryKind::Point,
            Geom::Curve(_) => GeometryKind::Curve,
            Geom::Surface(_) => GeometryKind::Surface,
            Geom::MultiPoint(_) => GeometryKind::MultiPoint,
            Geom::MultiCurve(_) => GeometryKind::MultiCurve,
            Geom::MultiSurface(_) => GeometryKind::MultiSurface,
            Geom::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Returns true if the geometry has no coordinates to measure. See [`GeomRef::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    /// Borrowed view of the geometry.
    pub fn view(&self) -> GeomRef<'_> {
        GeomRef::from(self)
    }

    /// Area of the geometry for [`Geom::Surface`] and [`Geom::MultiSurface`], `None` for other kinds.
    pub fn area(&self) -> Option<f64> {
        match self {
            Geom::Surface(v) => Some(v.area()),
            Geom::MultiSurface(v) => Some(v.area()),
            _ => None,
        }
    }

    /// Bounding box of the geometry, `None` if it has no coordinates.
    pub fn envelope(&self) -> Option<Envelope> {
        match self {
            Geom::Point(v) => Some(Envelope::from_point(v)),
            Geom::Curve(v) => Contour::envelope(v),
            Geom::Surface(v) => Polygon::envelope(v),
            Geom::MultiPoint(v) => Envelope::from_points(v.parts().iter()),
            Geom::MultiCurve(v) => {
                Envelope::merge_all(v.parts().iter().filter_map(Contour::envelope))
            }
            Geom::MultiSurface(v) => {
                Envelope::merge_all(v.parts().iter().filter_map(Polygon::envelope))
            }
            Geom::GeometryCollection(v) => {
                Envelope::merge_all(v.parts().iter().filter_map(Geom::envelope))
            }
        }
    }
}

impl Annotated for Geom {
    fn metadata(&self) -> Option<&MetadataCollection> {
        match self {
            Geom::Point(v) => v.metadata(),
            Geom::Curve(v) => v.metadata(),
            Geom::Surface(v) => v.metadata(),
            Geom::MultiPoint(v) => v.metadata(),
            Geom::MultiCurve(v) => v.metadata(),
            Geom::MultiSurface(v) => v.metadata(),
            Geom::GeometryCollection(v) => v.metadata(),
        }
    }

    fn metadata_mut(&mut self) -> Option<&mut MetadataCollection> {
        match self {
            Geom::Point(v) => v.metadata_mut(),
            Geom::Curve(v) => v.metadata_mut(),
            Geom::Surface(v) => v.metadata_mut(),
            Geom::MultiPoint(v) => v.metadata_mut(),
            Geom::MultiCurve(v) => v.metadata_mut(),
            Geom::MultiSurface(v) => v.metadata_mut(),
            Geom::GeometryCollection(v) => v.metadata_mut(),
        }
    }

    fn set_metadata(&mut self, metadata: Option<MetadataCollection>) {
        match self {
            Geom::Point(v) => v.set_metadata(metadata),
            Geom::Curve(v) => v.set_metadata(metadata),
            Geom::Surface(v) => v.set_metadata(metadata),
            Geom::MultiPoint(v) => v.set_metadata(metadata),
            Geom::MultiCurve(v) => v.set_metadata(metadata),
            Geom::MultiSurface(v) => v.set_metadata(metadata),
            Geom::GeometryCollection(v) => v.set_metadata(metadata),
        }
    }

    fn take_metadata(&mut self) -> Option<MetadataCollection> {
        match self {
            Geom::Point(v) => v.take_metadata(),
            Geom::Curve(v) => v.take_metadata(),
            Geom::Surface(v) => v.take_metadata(),
            Geom::MultiPoint(v) => v.take_metadata(),
            Geom::MultiCurve(v) => v.take_metadata(),
            Geom::MultiSurface(v) => v.take_metadata(),
            Geom::GeometryCollection(v) => v.take_metadata(),
        }
    }
}

impl From<Point> for Geom {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<Curve> for Geom {
    fn from(value: Curve) -> Self {
        Self::Curve(value)
    }
}

impl From<Surface> for Geom {
    fn from(value: Surface) -> Self {
        Self::Surface(value)
    }
}

impl From<MultiPoint> for Geom {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiCurve> for Geom {
    fn from(value: MultiCurve) -> Self {
        Self::MultiCurve(value)
    }
}

impl From<MultiSurface> for Geom {
    fn from(value: MultiSurface) -> Self {
        Self::MultiSurface(value)
    }
}

impl From<GeometryCollection> for Geom {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}

/// Borrowed view of a geometry of any variant.
///
/// Lets the members of homogeneous collections be handled the same way as the members of a
/// [`GeometryCollection`] without copying them into [`Geom`] values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeomRef<'a> {
    /// Single point.
    Point(&'a Point),
    /// Open polyline.
    Curve(&'a Curve),
    /// Polygon with holes.
    Surface(&'a Surface),
    /// Set of points.
    MultiPoint(&'a MultiPoint),
    /// Set of curves.
    MultiCurve(&'a MultiCurve),
    /// Set of surfaces.
    MultiSurface(&'a MultiSurface),
    /// Set of geometries of any kinds.
    GeometryCollection(&'a GeometryCollection),
}

impl<'a> GeomRef<'a> {
    /// Kind of the geometry.
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeomRef::Point(_) => GeometryKind::Point,
            GeomRef::Curve(_) => GeometryKind::Curve,
            GeomRef::Surface(_) => GeometryKind::Surface,
            GeomRef::MultiPoint(_) => GeometryKind::MultiPoint,
            GeomRef::MultiCurve(_) => GeometryKind::MultiCurve,
            GeomRef::MultiSurface(_) => GeometryKind::MultiSurface,
            GeomRef::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Returns true if the geometry has no coordinates to measure.
    ///
    /// A point is never empty. A curve is empty without points and a surface is empty without points in its outer
    /// ring. A collection is empty if it has no members or all of its members are empty.
    pub fn is_empty(&self) -> bool {
        match self {
            GeomRef::Point(_) => false,
            GeomRef::Curve(v) => v.is_empty(),
            GeomRef::Surface(v) => v.is_empty(),
            _ => self.members().all(|m| m.is_empty()),
        }
    }

    /// Iterates over members of a collection. Single geometries have no members.
    pub fn members(&self) -> Members<'a> {
        match *self {
            GeomRef::Point(_) | GeomRef::Curve(_) | GeomRef::Surface(_) => Members::None,
            GeomRef::MultiPoint(v) => Members::Points(v.parts().iter()),
            GeomRef::MultiCurve(v) => Members::Curves(v.parts().iter()),
            GeomRef::MultiSurface(v) => Members::Surfaces(v.parts().iter()),
            GeomRef::GeometryCollection(v) => Members::Geoms(v.parts().iter()),
        }
    }
}

impl<'a> From<&'a Geom> for GeomRef<'a> {
    fn from(value: &'a Geom) -> Self {
        match value {
            Geom::Point(v) => GeomRef::Point(v),
            Geom::Curve(v) => GeomRef::Curve(v),
            Geom::Surface(v) => GeomRef::Surface(v),
            Geom::MultiPoint(v) => GeomRef::MultiPoint(v),
            Geom::MultiCurve(v) => GeomRef::MultiCurve(v),
            Geom::MultiSurface(v) => GeomRef::MultiSurface(v),
            Geom::GeometryCollection(v) => GeomRef::GeometryCollection(v),
        }
    }
}

impl<'a> From<&'a Point> for GeomRef<'a> {
    fn from(value: &'a Point) -> Self {
        GeomRef::Point(value)
    }
}

impl<'a> From<&'a Curve> for GeomRef<'a> {
    fn from(value: &'a Curve) -> Self {
        GeomRef::Curve(value)
    }
}

impl<'a> From<&'a Surface> for GeomRef<'a> {
    fn from(value: &'a Surface) -> Self {
        GeomRef::Surface(value)
    }
}

/// Iterator over the members of a collection. See [`GeomRef::members`].
#[derive(Debug, Clone)]
pub enum Members<'a> {
    /// No members.
    None,
    /// Members of a [`MultiPoint`].
    Points(std::slice::Iter<'a, Point>),
    /// Members of a [`MultiCurve`].
    Curves(std::slice::Iter<'a, Curve>),
    /// Members of a [`MultiSurface`].
    Surfaces(std::slice::Iter<'a, Surface>),
    /// Members of a [`GeometryCollection`].
    Geoms(std::slice::Iter<'a, Geom>),
}

impl<'a> Iterator for Members<'a> {
    type Item = GeomRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Members::None => None,
            Members::Points(iter) => iter.next().map(GeomRef::Point),
            Members::Curves(iter) => iter.next().map(GeomRef::Curve),
            Members::Surfaces(iter) => iter.next().map(GeomRef::Surface),
            Members::Geoms(iter) => iter.next().map(GeomRef::from),
        }
    }
}
