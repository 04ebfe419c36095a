// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Aoi` API and generic implementation over a pluggable spatial query.

use kurbo::Point;
use tracing::debug;

use crate::backend::SpatialQuery;
use crate::error::AoiError;
use crate::notify;
use crate::registry::Registry;
use crate::sets::Diff;
use crate::types::{Callbacks, Unit, UnitId, UnitSet, World};

/// Area-of-interest tracker parameterized by a spatial backend.
///
/// Every mutating call validates its input first and returns an error
/// without side effects when a precondition fails. On success it returns the
/// [`Diff`] applied from the affected unit's point of view, after all
/// callbacks have run.
///
/// All calls are synchronous. Callbacks run inline and must neither panic
/// nor call back into this AOI; hosts that share an AOI across threads must
/// serialize access themselves.
#[derive(Debug)]
pub struct AoiGeneric<B: SpatialQuery> {
    world: World,
    registry: Registry,
    backend: B,
}

impl<B> AoiGeneric<B>
where
    B: SpatialQuery + Default,
{
    /// Create an empty AOI using the backend's default constructor.
    pub fn new(world: World) -> Self {
        Self::with_backend(world, B::default())
    }
}

impl<B: SpatialQuery> AoiGeneric<B> {
    /// Create an empty AOI around an existing backend. The backend is cleared.
    pub fn with_backend(world: World, mut backend: B) -> Self {
        backend.clear();
        Self {
            world,
            registry: Registry::new(),
            backend,
        }
    }

    /// World configuration.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// World width.
    pub fn get_width(&self) -> f64 {
        self.world.width()
    }

    /// World height.
    pub fn get_height(&self) -> f64 {
        self.world.height()
    }

    /// The spatial backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Number of live units.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// True if no unit is live.
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// Whether a live unit has this id.
    pub fn contains(&self, id: UnitId) -> bool {
        self.registry.contains(id)
    }

    /// Look up a live unit.
    pub fn unit(&self, id: UnitId) -> Result<&Unit, AoiError> {
        self.registry.lookup(id)
    }

    /// All live units, ordered by id.
    pub fn units(&self) -> impl Iterator<Item = &Unit> + '_ {
        self.registry.iter()
    }

    /// Current position of a unit.
    pub fn position(&self, id: UnitId) -> Result<Point, AoiError> {
        Ok(self.registry.lookup(id)?.position())
    }

    /// Peers a unit currently considers visible.
    pub fn subscribers(&self, id: UnitId) -> Result<&UnitSet, AoiError> {
        Ok(self.registry.lookup(id)?.subscribe_set())
    }

    /// Register a unit at `(x, y)` and notify it and everything within the
    /// world's visible range.
    pub fn add_unit(
        &mut self,
        id: UnitId,
        x: f64,
        y: f64,
        callbacks: Callbacks,
    ) -> Result<Diff, AoiError> {
        let position = Point::new(x, y);
        if self.registry.contains(id) {
            return Err(AoiError::DuplicateUnit(id));
        }
        self.world.check(id, position)?;

        let nearby = {
            let unit = self.registry.insert(Unit::new(id, position, callbacks))?;
            self.backend.insert(id, position);
            self.backend.find_nearby(unit, self.world.visible_range())
        };
        let diff = notify::refresh(&mut self.registry, id, &nearby)?;
        debug!(unit = id, x, y, entered = diff.entered.len(), "add unit");
        Ok(diff)
    }

    /// Register a unit that has no callbacks. Its peers are still notified.
    pub fn add_passive_unit(&mut self, id: UnitId, x: f64, y: f64) -> Result<Diff, AoiError> {
        self.add_unit(id, x, y, Callbacks::none())
    }

    /// Move a unit and emit enter/leave for the peers whose visibility changed.
    pub fn update_unit(&mut self, id: UnitId, x: f64, y: f64) -> Result<Diff, AoiError> {
        let position = Point::new(x, y);
        if !self.registry.contains(id) {
            return Err(AoiError::UnknownUnit(id));
        }
        self.world.check(id, position)?;

        let nearby = {
            let unit = self.registry.lookup_mut(id)?;
            unit.set_position(position);
            self.backend.update(id, position);
            self.backend.find_nearby(unit, self.world.visible_range())
        };
        let diff = notify::refresh(&mut self.registry, id, &nearby)?;
        debug!(
            unit = id,
            x,
            y,
            entered = diff.entered.len(),
            left = diff.left.len(),
            "update unit"
        );
        Ok(diff)
    }

    /// Unregister a unit.
    ///
    /// Every current subscriber receives a leave for it (and the unit itself
    /// receives the mirror leave) before it is dropped, so no subscribe set
    /// keeps a stale id.
    pub fn remove_unit(&mut self, id: UnitId) -> Result<Diff, AoiError> {
        let diff = Diff::leave_all(self.registry.lookup(id)?.subscribe_set());
        notify::notify_all(&mut self.registry, id, &diff);
        self.backend.remove(id);
        self.registry.remove(id)?;
        debug!(unit = id, left = diff.left.len(), "remove unit");
        Ok(diff)
    }

    /// Replace a unit's callbacks, returning the previous ones.
    pub fn set_callbacks(
        &mut self,
        id: UnitId,
        callbacks: Callbacks,
    ) -> Result<Callbacks, AoiError> {
        let unit = self.registry.lookup_mut(id)?;
        Ok(core::mem::replace(unit.callbacks_mut(), callbacks))
    }

    /// Ids within `range` of unit `id`, excluding `id`.
    ///
    /// This is a fresh spatial query; it neither reads nor changes
    /// subscribe sets.
    pub fn find_nearby_unit(&self, id: UnitId, range: f64) -> Result<UnitSet, AoiError> {
        if range.is_nan() || range < 0.0 {
            return Err(AoiError::InvalidRange(range));
        }
        let unit = self.registry.lookup(id)?;
        Ok(self.backend.find_nearby(unit, range))
    }

    /// [`find_nearby_unit`](Self::find_nearby_unit) at the world's visible range.
    pub fn find_nearby(&self, id: UnitId) -> Result<UnitSet, AoiError> {
        self.find_nearby_unit(id, self.world.visible_range())
    }

    /// Drop every unit without emitting notifications.
    pub fn clear(&mut self) {
        debug!(units = self.registry.len(), "clear");
        self.registry.clear();
        self.backend.clear();
    }
}

/// Default AOI using a flat linear-scan backend.
pub type Aoi = AoiGeneric<crate::backends::flatscan::FlatScan>;
