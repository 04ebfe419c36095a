// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported for rejected AOI operations.

use crate::types::UnitId;

/// A rejected AOI operation.
///
/// Every variant is a precondition violation on the host's side. The
/// operation that produced it has not touched the registry, the backend, or
/// any subscribe set.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AoiError {
    /// A live unit already uses this id.
    #[error("unit {0} is already registered")]
    DuplicateUnit(UnitId),
    /// No live unit has this id.
    #[error("unit {0} is not registered")]
    UnknownUnit(UnitId),
    /// A position falls outside the world's inclusive bounds (or is NaN).
    #[error("unit {id} at ({x}, {y}) is outside the {width}x{height} world")]
    OutOfBounds {
        /// The unit being added or moved.
        id: UnitId,
        /// Rejected x coordinate.
        x: f64,
        /// Rejected y coordinate.
        y: f64,
        /// World width.
        width: f64,
        /// World height.
        height: f64,
    },
    /// World dimensions must be finite and positive, and the visible range
    /// finite and non-negative.
    #[error("invalid world {width}x{height} with visible range {visible_range}")]
    InvalidWorld {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
        /// Requested default visible range.
        visible_range: f64,
    },
    /// A query range that is negative or NaN.
    #[error("invalid query range {0}")]
    InvalidRange(f64),
}
