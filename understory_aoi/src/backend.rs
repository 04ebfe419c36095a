// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial query trait: the one extension point of [`AoiGeneric`](crate::AoiGeneric).

use kurbo::Point;

use crate::types::{Unit, UnitId, UnitSet};

/// Answers "who is near this unit" for an AOI.
///
/// The AOI keeps the backend in sync through `insert`/`update`/`remove`,
/// always with positions that are inside the world. How the backend indexes
/// them is its own business.
///
/// [`find_nearby`](Self::find_nearby) must be exact: it returns every live
/// unit whose Euclidean distance to `unit` is at most `range`, and never
/// `unit` itself. The AOI does not filter the result, so false positives
/// become real enter events.
pub trait SpatialQuery {
    /// Start tracking a unit.
    fn insert(&mut self, id: UnitId, position: Point);

    /// A tracked unit moved.
    fn update(&mut self, id: UnitId, position: Point);

    /// Stop tracking a unit.
    fn remove(&mut self, id: UnitId);

    /// Forget every unit.
    fn clear(&mut self);

    /// Units within `range` of `unit`, excluding `unit`.
    fn find_nearby(&self, unit: &Unit, range: f64) -> UnitSet;
}
