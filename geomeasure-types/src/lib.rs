//! Geometry model and geometric kernels used by the `geomeasure` measurement engine.
//!
//! The crate defines a closed set of geometry variants ([`Point`], [`Curve`], [`Surface`] and the homogeneous
//! collections of these plus a heterogeneous [`GeometryCollection`]), the [`Coord`] they are built from, and the
//! primitive algorithms over segments and rings that pairwise distance computations are composed of.

pub mod contour;
pub mod coord;
pub mod envelope;
mod geometry;
pub mod geometry_kind;
pub mod impls;
pub mod metadata;
pub mod orient;
mod polygon;
pub mod segment;

pub use contour::{ClosedContour, Contour, PointPosition};
pub use coord::{CartesianPoint3d, Coord};
pub use envelope::Envelope;
pub use geometry::{Geom, GeomRef, Members};
pub use geometry_kind::GeometryKind;
pub use impls::{
    Curve, GeometryCollection, MultiCurve, MultiPoint, MultiSurface, Point, Ring, Surface,
};
pub use metadata::{Annotated, MetadataCollection, MetadataFactory, MetadataValue};
pub use orient::Orientation;
pub use polygon::Polygon;
pub use segment::Segment;
