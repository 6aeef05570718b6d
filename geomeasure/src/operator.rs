use std::fmt::{Debug, Formatter};

use geomeasure_types::Geom;

use crate::backend::{MeasureBackend, ScratchBackend, DEFAULT_POOL_CAPACITY};
use crate::dispatch::{DispatchMatrix, DistanceResolver};
use crate::error::{BackendError, MeasureError, Operand};

/// Entry point for measuring geometries.
///
/// The operator owns a [`MeasureBackend`] and releases it exactly once, either with an explicit call to
/// [`MeasurementOperator::release`] or when the operator is dropped. Measurement methods take `&self` and can be
/// called from several threads at once.
///
/// ```ignore
/// use geomeasure::MeasurementOperator;
/// use geomeasure::geomeasure_types::{Geom, MultiPoint, Point};
///
/// let operator = MeasurementOperator::builder()
///     .with_pool_capacity(4)
///     .build();
///
/// let point = Geom::from(Point::from_xyz(0.0, 0.0, 0.0));
/// let points = Geom::from(MultiPoint::new(vec![
///     Point::from_xyz(3.0, 0.0, 0.0),
///     Point::from_xyz(0.0, 7.0, 0.0),
/// ]));
///
/// assert_eq!(operator.distance(&point, &points), Ok(3.0));
/// ```
pub struct MeasurementOperator {
    matrix: DispatchMatrix,
    backend: Box<dyn MeasureBackend>,
    envelope_pruning: bool,
    released: bool,
}

impl MeasurementOperator {
    /// Creates an operator with the builtin algorithms and the default backend.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder to configure the operator.
    pub fn builder() -> MeasurementOperatorBuilder {
        MeasurementOperatorBuilder::default()
    }

    /// Dispatch matrix used by the operator.
    pub fn matrix(&self) -> &DispatchMatrix {
        &self.matrix
    }

    /// Backend owned by the operator.
    pub fn backend(&self) -> &dyn MeasureBackend {
        &*self.backend
    }

    /// Returns true if the backend of the operator has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Resolver measuring with the matrix and the backend of the operator.
    pub fn resolver(&self) -> Result<DistanceResolver<'_>, MeasureError> {
        self.ensure_active()?;
        Ok(DistanceResolver::new(&self.matrix, &*self.backend)
            .with_envelope_pruning(self.envelope_pruning))
    }

    /// Shortest distance between two geometries.
    ///
    /// The result does not depend on the order of the operands.
    pub fn distance(&self, a: &Geom, b: &Geom) -> Result<f64, MeasureError> {
        self.try_distance(Some(a), Some(b))
    }

    /// Same as [`MeasurementOperator::distance`] for operands that may be absent.
    ///
    /// Fails with [`MeasureError::MissingOperand`] if either operand is `None`.
    pub fn try_distance(&self, a: Option<&Geom>, b: Option<&Geom>) -> Result<f64, MeasureError> {
        let a = a.ok_or(MeasureError::MissingOperand {
            position: Operand::First,
        })?;
        let b = b.ok_or(MeasureError::MissingOperand {
            position: Operand::Second,
        })?;

        self.resolver()?.distance(a, b)
    }

    /// Area of a surface or multi-surface.
    ///
    /// Fails with [`MeasureError::NotAreal`] for other geometry kinds.
    pub fn area(&self, geometry: &Geom) -> Result<f64, MeasureError> {
        self.ensure_active()?;
        geometry
            .area()
            .ok_or(MeasureError::NotAreal(geometry.kind()))
    }

    /// Releases the backend.
    ///
    /// Only the first call reaches the backend. A failure is logged and returned, and is not retried on later
    /// calls or on drop.
    pub fn release(&mut self) -> Result<(), BackendError> {
        if self.released {
            return Ok(());
        }

        self.released = true;
        log::debug!("Releasing measurement backend '{}'", self.backend.name());

        self.backend.release().inspect_err(|err| {
            log::warn!("Failed to release measurement backend: {err}");
        })
    }

    fn ensure_active(&self) -> Result<(), MeasureError> {
        if self.released || self.backend.is_released() {
            return Err(MeasureError::Released);
        }

        Ok(())
    }
}

impl Default for MeasurementOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeasurementOperator {
    fn drop(&mut self) {
        // Errors are already logged by `release`.
        let _ = self.release();
    }
}

impl Debug for MeasurementOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementOperator")
            .field("matrix", &self.matrix)
            .field("backend", &self.backend.name())
            .field("envelope_pruning", &self.envelope_pruning)
            .field("released", &self.released)
            .finish()
    }
}

/// Convenience type to configure a [`MeasurementOperator`].
///
/// ```ignore
/// use geomeasure::{DispatchMatrix, MeasurementOperatorBuilder};
/// use geomeasure::geomeasure_types::GeometryKind;
///
/// let mut matrix = DispatchMatrix::builtin();
/// matrix.unregister(GeometryKind::Surface, GeometryKind::Surface);
///
/// let operator = MeasurementOperatorBuilder::default()
///     .with_matrix(matrix)
///     .with_envelope_pruning(false)
///     .build();
/// ```
pub struct MeasurementOperatorBuilder {
    matrix: Option<DispatchMatrix>,
    backend: Option<Box<dyn MeasureBackend>>,
    envelope_pruning: bool,
    pool_capacity: usize,
}

impl Default for MeasurementOperatorBuilder {
    fn default() -> Self {
        Self {
            matrix: None,
            backend: None,
            envelope_pruning: true,
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

impl MeasurementOperatorBuilder {
    /// Sets the dispatch matrix.
    ///
    /// Defaults to [`DispatchMatrix::builtin`].
    pub fn with_matrix(mut self, matrix: DispatchMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Sets the backend owned by the operator. Replaces the backend configured with
    /// [`MeasurementOperatorBuilder::with_pool_capacity`].
    ///
    /// Defaults to a [`ScratchBackend`].
    pub fn with_backend(mut self, backend: impl MeasureBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Enables or disables envelope pruning of segment-pair searches. Pruning never changes the results.
    ///
    /// Defaults to `true`.
    pub fn with_envelope_pruning(mut self, enabled: bool) -> Self {
        self.envelope_pruning = enabled;
        self
    }

    /// Sets the number of buffers the default [`ScratchBackend`] keeps for reuse. Has no effect if a backend is
    /// set with [`MeasurementOperatorBuilder::with_backend`].
    pub fn with_pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = capacity;
        self
    }

    /// Creates the operator.
    pub fn build(self) -> MeasurementOperator {
        let Self {
            matrix,
            backend,
            envelope_pruning,
            pool_capacity,
        } = self;

        let backend: Box<dyn MeasureBackend> = match backend {
            Some(backend) => backend,
            None => Box::new(ScratchBackend::new(pool_capacity)),
        };
        let matrix = matrix.unwrap_or_default();
        log::debug!(
            "Created measurement operator with backend '{}' and {} supported pairs",
            backend.name(),
            matrix.supported_pairs().count()
        );

        MeasurementOperator {
            matrix,
            backend,
            envelope_pruning,
            released: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use geomeasure_types::{Envelope, GeometryKind, Point};

    use super::*;

    #[derive(Default)]
    struct CountingBackend {
        releases: Arc<AtomicUsize>,
        fail: bool,
    }

    impl MeasureBackend for CountingBackend {
        fn name(&self) -> &str {
            "counting"
        }

        fn take_buffer(&self) -> Vec<Envelope> {
            vec![]
        }

        fn return_buffer(&self, _buffer: Vec<Envelope>) {}

        fn is_released(&self) -> bool {
            self.releases.load(Ordering::SeqCst) > 0
        }

        fn release(&self) -> Result<(), BackendError> {
            self.releases.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(BackendError::Release {
                    backend: self.name().to_string(),
                    reason: "test".to_string(),
                });
            }

            Ok(())
        }
    }

    #[test]
    fn operator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeasurementOperator>();
    }

    #[test]
    fn release_reaches_backend_once() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut operator = MeasurementOperator::builder()
            .with_backend(CountingBackend {
                releases: releases.clone(),
                fail: false,
            })
            .build();

        assert_eq!(operator.release(), Ok(()));
        assert_eq!(operator.release(), Ok(()));
        drop(operator);

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_releases_unused_operator() {
        let releases = Arc::new(AtomicUsize::new(0));
        let operator = MeasurementOperator::builder()
            .with_backend(CountingBackend {
                releases: releases.clone(),
                fail: false,
            })
            .build();
        drop(operator);

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_release_is_not_retried() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut operator = MeasurementOperator::builder()
            .with_backend(CountingBackend {
                releases: releases.clone(),
                fail: true,
            })
            .build();

        assert_matches!(operator.release(), Err(BackendError::Release { .. }));
        assert_eq!(operator.release(), Ok(()));
        drop(operator);

        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn released_operator_refuses_to_measure() {
        let mut operator = MeasurementOperator::new();
        let point = Geom::from(Point::default());
        operator.release().expect("release");

        assert_eq!(operator.distance(&point, &point), Err(MeasureError::Released));
        assert_eq!(operator.area(&point), Err(MeasureError::Released));
        assert!(operator.is_released());
        assert!(operator.backend().is_released());
    }

    #[test]
    fn missing_operands() {
        let operator = MeasurementOperator::default();
        let point = Geom::from(Point::default());

        assert_eq!(
            operator.try_distance(None, Some(&point)),
            Err(MeasureError::MissingOperand {
                position: Operand::First
            })
        );
        assert_eq!(
            operator.try_distance(Some(&point), None),
            Err(MeasureError::MissingOperand {
                position: Operand::Second
            })
        );
        assert_eq!(operator.try_distance(Some(&point), Some(&point)), Ok(0.0));
    }

    #[test]
    fn area_of_non_areal_kind() {
        let operator = MeasurementOperator::new();
        assert_eq!(
            operator.area(&Point::default().into()),
            Err(MeasureError::NotAreal(GeometryKind::Point))
        );
    }

    #[test]
    fn builder_options() {
        fn unit(
            _: &DistanceResolver<'_>,
            _: geomeasure_types::GeomRef<'_>,
            _: geomeasure_types::GeomRef<'_>,
        ) -> Result<f64, MeasureError> {
            Ok(1.0)
        }

        let mut matrix = DispatchMatrix::empty();
        matrix.register(GeometryKind::Point, GeometryKind::Point, unit);

        let operator = MeasurementOperator::builder()
            .with_matrix(matrix)
            .with_envelope_pruning(false)
            .build();

        assert_eq!(operator.matrix().supported_pairs().count(), 1);
        assert!(!operator.resolver().expect("active").envelope_pruning());
        assert_eq!(operator.backend().name(), "scratch");
    }
}
