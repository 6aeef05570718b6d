//! Distance resolution by the kinds of the operands.
//!
//! A [`DispatchMatrix`] maps unordered pairs of [`GeometryKind`]s to distance functions. A function is registered
//! for one order of the pair and the matrix remembers to swap the operands when it is looked up in the other order,
//! so every supported pair is symmetric by construction.

use std::fmt::{Debug, Formatter};

use geomeasure_types::{Geom, GeomRef, GeometryKind};

use crate::algorithms;
use crate::backend::{MeasureBackend, ScratchBuffer};
use crate::error::MeasureError;

/// Distance algorithm for a pair of kinds. The operands are given in the order the function was registered with.
pub type DistanceFn =
    fn(&DistanceResolver<'_>, GeomRef<'_>, GeomRef<'_>) -> Result<f64, MeasureError>;

#[derive(Copy, Clone)]
struct Entry {
    func: DistanceFn,
    swap: bool,
}

/// Table of distance algorithms keyed by pairs of geometry kinds.
#[derive(Clone)]
pub struct DispatchMatrix {
    entries: [[Option<Entry>; GeometryKind::COUNT]; GeometryKind::COUNT],
}

impl DispatchMatrix {
    /// Matrix without any algorithms.
    pub fn empty() -> Self {
        Self {
            entries: [[None; GeometryKind::COUNT]; GeometryKind::COUNT],
        }
    }

    /// Matrix with the algorithms for every pair of kinds.
    pub fn builtin() -> Self {
        use GeometryKind::*;

        let mut matrix = Self::empty();
        matrix
            .register(Point, Point, point_point)
            .register(Point, Curve, point_curve)
            .register(Point, Surface, point_surface)
            .register(Curve, Curve, curve_curve)
            .register(Curve, Surface, curve_surface)
            .register(Surface, Surface, surface_surface);

        for collection in GeometryKind::ALL.into_iter().filter(|k| k.is_collection()) {
            for other in GeometryKind::ALL {
                matrix.register(collection, other, collection_to_any);
            }
        }

        matrix
    }

    /// Registers the algorithm for the pair, replacing the one registered before for either order of the pair.
    ///
    /// `func` receives the operands in the `(first, second)` order.
    pub fn register(
        &mut self,
        first: GeometryKind,
        second: GeometryKind,
        func: DistanceFn,
    ) -> &mut Self {
        self.entries[first.index()][second.index()] = Some(Entry { func, swap: false });
        if first != second {
            self.entries[second.index()][first.index()] = Some(Entry { func, swap: true });
        }

        self
    }

    /// Removes the algorithm for the pair in both orders.
    pub fn unregister(&mut self, first: GeometryKind, second: GeometryKind) -> &mut Self {
        self.entries[first.index()][second.index()] = None;
        self.entries[second.index()][first.index()] = None;
        self
    }

    /// Returns the algorithm for the pair and whether the operands must be swapped before calling it.
    pub fn lookup(&self, first: GeometryKind, second: GeometryKind) -> Option<(DistanceFn, bool)> {
        self.entries[first.index()][second.index()].map(|entry| (entry.func, entry.swap))
    }

    /// Returns true if an algorithm is registered for the pair.
    pub fn supports(&self, first: GeometryKind, second: GeometryKind) -> bool {
        self.entries[first.index()][second.index()].is_some()
    }

    /// Iterates over the supported unordered pairs. Each pair is listed once, in the [`GeometryKind::ALL`] order.
    pub fn supported_pairs(&self) -> impl Iterator<Item = (GeometryKind, GeometryKind)> + '_ {
        GeometryKind::ALL
            .into_iter()
            .enumerate()
            .flat_map(|(i, first)| {
                GeometryKind::ALL
                    .into_iter()
                    .skip(i)
                    .map(move |second| (first, second))
            })
            .filter(|&(first, second)| self.supports(first, second))
    }
}

impl Default for DispatchMatrix {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Debug for DispatchMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.supported_pairs()).finish()
    }
}

/// Computes distances by dispatching the operands to the algorithms of a [`DispatchMatrix`].
///
/// Collection algorithms measure their members through the same resolver, so a restricted matrix restricts nested
/// measurements too.
#[derive(Clone, Copy)]
pub struct DistanceResolver<'a> {
    matrix: &'a DispatchMatrix,
    backend: &'a dyn MeasureBackend,
    envelope_pruning: bool,
}

impl<'a> DistanceResolver<'a> {
    /// Creates a new resolver with envelope pruning enabled.
    pub fn new(matrix: &'a DispatchMatrix, backend: &'a dyn MeasureBackend) -> Self {
        Self {
            matrix,
            backend,
            envelope_pruning: true,
        }
    }

    /// Enables or disables skipping of segment pairs whose envelopes are further apart than the best distance found.
    pub fn with_envelope_pruning(mut self, enabled: bool) -> Self {
        self.envelope_pruning = enabled;
        self
    }

    /// Returns true if segment-pair searches are pruned by envelopes.
    pub fn envelope_pruning(&self) -> bool {
        self.envelope_pruning
    }

    /// Takes a scratch buffer from the backend for the duration of one search.
    pub fn scratch(&self) -> ScratchBuffer<'a> {
        ScratchBuffer::new(self.backend)
    }

    /// Distance between two geometries.
    pub fn distance(&self, a: &Geom, b: &Geom) -> Result<f64, MeasureError> {
        self.distance_between(a.view(), b.view())
    }

    /// Distance between two borrowed geometries.
    ///
    /// Fails with [`MeasureError::UnsupportedPair`] if the matrix has no algorithm for the kinds, and with
    /// [`MeasureError::EmptyGeometry`] if either operand has nothing to measure.
    pub fn distance_between(&self, a: GeomRef<'_>, b: GeomRef<'_>) -> Result<f64, MeasureError> {
        let (first, second) = (a.kind(), b.kind());
        let Some((func, swap)) = self.matrix.lookup(first, second) else {
            return Err(MeasureError::UnsupportedPair { first, second });
        };

        for operand in [a, b] {
            if operand.is_empty() {
                return Err(MeasureError::EmptyGeometry(operand.kind()));
            }
        }

        log::trace!("Dispatching distance between {first} and {second} (swapped: {swap})");
        if swap {
            func(self, b, a)
        } else {
            func(self, a, b)
        }
    }
}

impl Debug for DistanceResolver<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistanceResolver")
            .field("matrix", self.matrix)
            .field("backend", &self.backend.name())
            .field("envelope_pruning", &self.envelope_pruning)
            .finish()
    }
}

fn mismatch(a: GeomRef<'_>, b: GeomRef<'_>) -> MeasureError {
    MeasureError::UnsupportedPair {
        first: a.kind(),
        second: b.kind(),
    }
}

fn point_point(
    _: &DistanceResolver<'_>,
    a: GeomRef<'_>,
    b: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    match (a, b) {
        (GeomRef::Point(a), GeomRef::Point(b)) => Ok(algorithms::point_point(a, b)),
        _ => Err(mismatch(a, b)),
    }
}

fn point_curve(
    _: &DistanceResolver<'_>,
    a: GeomRef<'_>,
    b: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    match (a, b) {
        (GeomRef::Point(a), GeomRef::Curve(b)) => algorithms::point_curve(a, b),
        _ => Err(mismatch(a, b)),
    }
}

fn point_surface(
    _: &DistanceResolver<'_>,
    a: GeomRef<'_>,
    b: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    match (a, b) {
        (GeomRef::Point(a), GeomRef::Surface(b)) => algorithms::point_surface(a, b),
        _ => Err(mismatch(a, b)),
    }
}

fn curve_curve(
    resolver: &DistanceResolver<'_>,
    a: GeomRef<'_>,
    b: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    match (a, b) {
        (GeomRef::Curve(a), GeomRef::Curve(b)) => algorithms::curve_curve(resolver, a, b),
        _ => Err(mismatch(a, b)),
    }
}

fn curve_surface(
    resolver: &DistanceResolver<'_>,
    a: GeomRef<'_>,
    b: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    match (a, b) {
        (GeomRef::Curve(a), GeomRef::Surface(b)) => algorithms::curve_surface(resolver, a, b),
        _ => Err(mismatch(a, b)),
    }
}

fn surface_surface(
    resolver: &DistanceResolver<'_>,
    a: GeomRef<'_>,
    b: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    match (a, b) {
        (GeomRef::Surface(a), GeomRef::Surface(b)) => {
            algorithms::surface_surface(resolver, a, b)
        }
        _ => Err(mismatch(a, b)),
    }
}

fn collection_to_any(
    resolver: &DistanceResolver<'_>,
    collection: GeomRef<'_>,
    other: GeomRef<'_>,
) -> Result<f64, MeasureError> {
    if !collection.kind().is_collection() {
        return Err(mismatch(collection, other));
    }

    algorithms::min_over(resolver, collection, other)
}
