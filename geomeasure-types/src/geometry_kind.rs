//! See documentation for [`GeometryKind`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Tag of a concrete geometry variant.
///
/// The set of variants is closed. Measurement algorithms are selected by the pair of kinds of their operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum GeometryKind {
    /// [`Point`](crate::Point)
    Point,
    /// [`Curve`](crate::Curve)
    Curve,
    /// [`Surface`](crate::Surface)
    Surface,
    /// [`MultiPoint`](crate::MultiPoint)
    MultiPoint,
    /// [`MultiCurve`](crate::MultiCurve)
    MultiCurve,
    /// [`MultiSurface`](crate::MultiSurface)
    MultiSurface,
    /// [`GeometryCollection`](crate::GeometryCollection)
    GeometryCollection,
}

impl GeometryKind {
    /// Number of geometry kinds.
    pub const COUNT: usize = 7;

    /// All geometry kinds in the order of their [`GeometryKind::index`].
    pub const ALL: [GeometryKind; Self::COUNT] = [
        GeometryKind::Point,
        GeometryKind::Curve,
        GeometryKind::Surface,
        GeometryKind::MultiPoint,
        GeometryKind::MultiCurve,
        GeometryKind::MultiSurface,
        GeometryKind::GeometryCollection,
    ];

    /// Position of the kind in [`GeometryKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether the kind is one of the collection kinds.
    pub const fn is_collection(self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint
                | GeometryKind::MultiCurve
                | GeometryKind::MultiSurface
                | GeometryKind::GeometryCollection
        )
    }

    /// Name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::Curve => "Curve",
            GeometryKind::Surface => "Surface",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiCurve => "MultiCurve",
            GeometryKind::MultiSurface => "MultiSurface",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
