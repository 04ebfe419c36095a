// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Id → unit registry. Sole owner of every live unit.

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;

use crate::error::AoiError;
use crate::types::{Unit, UnitId};

#[derive(Debug, Default)]
pub(crate) struct Registry {
    units: BTreeMap<UnitId, Unit>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store a new unit, refusing to shadow a live one with the same id.
    pub(crate) fn insert(&mut self, unit: Unit) -> Result<&Unit, AoiError> {
        match self.units.entry(unit.id()) {
            Entry::Occupied(e) => Err(AoiError::DuplicateUnit(*e.key())),
            Entry::Vacant(e) => Ok(e.insert(unit)),
        }
    }

    pub(crate) fn remove(&mut self, id: UnitId) -> Result<Unit, AoiError> {
        self.units.remove(&id).ok_or(AoiError::UnknownUnit(id))
    }

    pub(crate) fn lookup(&self, id: UnitId) -> Result<&Unit, AoiError> {
        self.units.get(&id).ok_or(AoiError::UnknownUnit(id))
    }

    pub(crate) fn lookup_mut(&mut self, id: UnitId) -> Result<&mut Unit, AoiError> {
        self.units.get_mut(&id).ok_or(AoiError::UnknownUnit(id))
    }

    pub(crate) fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub(crate) fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.units.values()
    }

    pub(crate) fn clear(&mut self) {
        self.units.clear();
    }
}
