//! Error types used by the crate.

use std::fmt::{Display, Formatter};

use geomeasure_types::GeometryKind;
use thiserror::Error;

/// Position of an operand of a binary measurement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Left-hand operand.
    First,
    /// Right-hand operand.
    Second,
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::First => write!(f, "first"),
            Operand::Second => write!(f, "second"),
        }
    }
}

/// Measurement error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// One of the operands was not given.
    #[error("{position} operand is missing")]
    MissingOperand {
        /// Which operand is missing.
        position: Operand,
    },
    /// No distance algorithm is registered for the pair of kinds.
    #[error("unsupported geometry type pair: {first} and {second}")]
    UnsupportedPair {
        /// Kind of the first operand.
        first: GeometryKind,
        /// Kind of the second operand.
        second: GeometryKind,
    },
    /// The operand has no coordinates to measure the distance to.
    #[error("cannot measure distance to an empty {0}")]
    EmptyGeometry(GeometryKind),
    /// Area was requested for a kind that does not enclose any area.
    #[error("area is not defined for {0}")]
    NotAreal(GeometryKind),
    /// The operator was used after its backend had been released.
    #[error("measurement operator is released")]
    Released,
}

/// Error of a [`MeasureBackend`](crate::MeasureBackend).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The backend failed to free its resources.
    #[error("backend '{backend}' failed to release resources: {reason}")]
    Release {
        /// Name of the backend.
        backend: String,
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_kinds() {
        let err = MeasureError::UnsupportedPair {
            first: GeometryKind::Point,
            second: GeometryKind::MultiSurface,
        };
        let message = err.to_string();
        assert!(message.contains(GeometryKind::Point.name()));
        assert!(message.contains(GeometryKind::MultiSurface.name()));

        let err = MeasureError::MissingOperand {
            position: Operand::Second,
        };
        assert_eq!(err.to_string(), "second operand is missing");
    }
}
