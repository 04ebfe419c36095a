// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit records, callbacks, and world geometry.

use alloc::boxed::Box;
use alloc::collections::BTreeSet;
use core::fmt::Debug;

use kurbo::{Point, Size};

use crate::error::AoiError;

/// Host-assigned unit identifier. Unique among live units.
pub type UnitId = i64;

/// A set of unit ids.
///
/// Ordered so that iteration is reproducible, but nothing in this crate
/// promises a notification order to callers.
pub type UnitSet = BTreeSet<UnitId>;

/// Visible range used when a world does not configure one.
pub const DEFAULT_VISIBLE_RANGE: f64 = 64.0;

/// A visibility reaction, called as `callback(self_id, other_id)`.
///
/// Callbacks run inline during the operation that caused the transition.
/// They must not call back into the AOI that invoked them.
pub type Callback = Box<dyn FnMut(UnitId, UnitId)>;

/// The enter/leave reactions bound to a unit.
///
/// Either side may be absent, in which case the transition is silent for
/// that unit (useful for passive scenery).
#[derive(Default)]
pub struct Callbacks {
    enter: Option<Callback>,
    leave: Option<Callback>,
}

impl Callbacks {
    /// No reactions at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Both reactions.
    pub fn new(
        enter: impl FnMut(UnitId, UnitId) + 'static,
        leave: impl FnMut(UnitId, UnitId) + 'static,
    ) -> Self {
        Self {
            enter: Some(Box::new(enter)),
            leave: Some(Box::new(leave)),
        }
    }

    /// Set the reaction fired when another unit becomes visible.
    #[must_use]
    pub fn on_enter(mut self, f: impl FnMut(UnitId, UnitId) + 'static) -> Self {
        self.enter = Some(Box::new(f));
        self
    }

    /// Set the reaction fired when another unit stops being visible.
    #[must_use]
    pub fn on_leave(mut self, f: impl FnMut(UnitId, UnitId) + 'static) -> Self {
        self.leave = Some(Box::new(f));
        self
    }

    /// True if neither reaction is bound.
    pub fn is_passive(&self) -> bool {
        self.enter.is_none() && self.leave.is_none()
    }

    pub(crate) fn enter(&mut self, me: UnitId, other: UnitId) {
        if let Some(f) = self.enter.as_mut() {
            f(me, other);
        }
    }

    pub(crate) fn leave(&mut self, me: UnitId, other: UnitId) {
        if let Some(f) = self.leave.as_mut() {
            f(me, other);
        }
    }
}

impl Debug for Callbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("enter", &self.enter.is_some())
            .field("leave", &self.leave.is_some())
            .finish()
    }
}

/// One entity tracked by an AOI.
///
/// Units are owned by the registry. Hosts and backends only ever see shared
/// references that last for a single call.
#[derive(Debug)]
pub struct Unit {
    id: UnitId,
    position: Point,
    callbacks: Callbacks,
    subscribe_set: UnitSet,
}

impl Unit {
    pub(crate) fn new(id: UnitId, position: Point, callbacks: Callbacks) -> Self {
        Self {
            id,
            position,
            callbacks,
            subscribe_set: UnitSet::new(),
        }
    }

    /// The host-assigned id.
    pub fn id(&self) -> UnitId {
        self.id
    }

    /// Current position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Peers this unit currently considers visible.
    ///
    /// This is authoritative state maintained by the notification engine, not
    /// a cached spatial query.
    pub fn subscribe_set(&self) -> &UnitSet {
        &self.subscribe_set
    }

    /// Whether `other` is in this unit's subscribe set.
    pub fn is_subscribed(&self, other: UnitId) -> bool {
        self.subscribe_set.contains(&other)
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub(crate) fn callbacks_mut(&mut self) -> &mut Callbacks {
        &mut self.callbacks
    }

    pub(crate) fn subscribe(&mut self, other: UnitId) {
        debug_assert_ne!(other, self.id, "a unit never subscribes to itself");
        self.subscribe_set.insert(other);
    }

    pub(crate) fn unsubscribe(&mut self, other: UnitId) {
        self.subscribe_set.remove(&other);
    }
}

/// World configuration: a rectangle anchored at the origin plus the default
/// visible range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct World {
    size: Size,
    visible_range: f64,
}

impl World {
    /// A `width`×`height` world using [`DEFAULT_VISIBLE_RANGE`].
    pub fn new(width: f64, height: f64) -> Result<Self, AoiError> {
        Self::validated(Size::new(width, height), DEFAULT_VISIBLE_RANGE)
    }

    /// Replace the default visible range.
    pub fn with_visible_range(self, visible_range: f64) -> Result<Self, AoiError> {
        Self::validated(self.size, visible_range)
    }

    fn validated(size: Size, visible_range: f64) -> Result<Self, AoiError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if positive(size.width)
            && positive(size.height)
            && visible_range.is_finite()
            && visible_range >= 0.0
        {
            Ok(Self {
                size,
                visible_range,
            })
        } else {
            Err(AoiError::InvalidWorld {
                width: size.width,
                height: size.height,
                visible_range,
            })
        }
    }

    /// World width.
    pub fn width(&self) -> f64 {
        self.size.width
    }

    /// World height.
    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Width and height together.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Range used by queries that don't pass one explicitly.
    pub fn visible_range(&self) -> f64 {
        self.visible_range
    }

    /// Whether `p` lies in `[0, width] × [0, height]`. Both edges are
    /// inclusive; NaN coordinates are never contained.
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.size.width).contains(&p.x) && (0.0..=self.size.height).contains(&p.y)
    }

    pub(crate) fn check(&self, id: UnitId, p: Point) -> Result<(), AoiError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(AoiError::OutOfBounds {
                id,
                x: p.x,
                y: p.y,
                width: self.size.width,
                height: self.size.height,
            })
        }
    }
}
