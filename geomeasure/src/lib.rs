//! Measurement engine for the [`geomeasure_types`] geometry variants.
//!
//! The entry point is [`MeasurementOperator`]. It computes the distance between any two geometries by looking up
//! the algorithm for their kinds in a [`DispatchMatrix`], and the area of surfaces and multi-surfaces.
//!
//! ```ignore
//! use geomeasure::MeasurementOperator;
//! use geomeasure::geomeasure_types::{Geom, Point};
//!
//! let operator = MeasurementOperator::new();
//! let a = Geom::from(Point::from_xyz(0.0, 0.0, 0.0));
//! let b = Geom::from(Point::from_xyz(3.0, 4.0, 0.0));
//! assert_eq!(operator.distance(&a, &b)?, 5.0);
//! ```

pub mod algorithms;
pub mod backend;
pub mod dispatch;
pub mod error;
mod operator;

pub use backend::{MeasureBackend, ScratchBackend, ScratchBuffer};
pub use dispatch::{DispatchMatrix, DistanceFn, DistanceResolver};
pub use error::{BackendError, MeasureError, Operand};
pub use geomeasure_types;
pub use operator::{MeasurementOperator, MeasurementOperatorBuilder};
