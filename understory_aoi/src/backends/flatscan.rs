// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::backend::SpatialQuery;
use crate::types::{Unit, UnitId, UnitSet};

/// Flat vector backend with linear scans.
#[derive(Clone, Default)]
pub struct FlatScan {
    entries: Vec<(UnitId, Point)>,
}

impl FlatScan {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked units.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&self, id: UnitId) -> Option<usize> {
        self.entries.iter().position(|&(e, _)| e == id)
    }
}

impl Debug for FlatScan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatScan")
            .field("units", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl SpatialQuery for FlatScan {
    fn insert(&mut self, id: UnitId, position: Point) {
        debug_assert!(self.slot(id).is_none(), "unit {id} inserted twice");
        self.entries.push((id, position));
    }
    fn update(&mut self, id: UnitId, position: Point) {
        if let Some(i) = self.slot(id) {
            self.entries[i].1 = position;
        }
    }
    fn remove(&mut self, id: UnitId) {
        if let Some(i) = self.slot(id) {
            self.entries.swap_remove(i);
        }
    }
    fn clear(&mut self) {
        self.entries.clear();
    }
    fn find_nearby(&self, unit: &Unit, range: f64) -> UnitSet {
        let center = unit.position();
        let range_sq = range * range;
        self.entries
            .iter()
            .filter(|&&(id, p)| id != unit.id() && (p - center).hypot2() <= range_sq)
            .map(|&(id, _)| id)
            .collect()
    }
}
