// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Set algebra over unit ids, and the enter/leave classification built on it.

use crate::types::UnitSet;

/// Ids present in both sets.
pub fn intersection(a: &UnitSet, b: &UnitSet) -> UnitSet {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|id| large.contains(id)).copied().collect()
}

/// Ids present in `a` but not in `b`.
pub fn difference(a: &UnitSet, b: &UnitSet) -> UnitSet {
    a.iter().filter(|id| !b.contains(id)).copied().collect()
}

/// The transitions needed to move a unit's view from `old` to `new`.
///
/// Peers in both sets are absent from the diff: re-confirming visibility
/// produces no events.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diff {
    /// Peers that became visible.
    pub entered: UnitSet,
    /// Peers that are no longer visible.
    pub left: UnitSet,
}

impl Diff {
    /// Classify `new` against `old`.
    pub fn between(old: &UnitSet, new: &UnitSet) -> Self {
        Self {
            entered: difference(new, old),
            left: difference(old, new),
        }
    }

    /// Peers in both snapshots: still visible, no event needed.
    pub fn stayed(old: &UnitSet, new: &UnitSet) -> UnitSet {
        intersection(old, new)
    }

    /// Diff that tears down every subscription in `old`.
    pub fn leave_all(old: &UnitSet) -> Self {
        Self {
            entered: UnitSet::new(),
            left: old.clone(),
        }
    }

    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.left.is_empty()
    }
}
