// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification engine: applies a [`Diff`] to subscribe sets and fires callbacks.
//!
//! For every newly visible pair `(unit, peer)` the peer hears about `unit`
//! first, then `unit` hears about the peer, and both sides subscribe. Leaves
//! mirror this exactly, so subscribe sets stay symmetric after every call.
//! Peers in neither half of the diff are left alone.

use tracing::trace;

use crate::error::AoiError;
use crate::registry::Registry;
use crate::sets::Diff;
use crate::types::{UnitId, UnitSet};

/// Diff `unit`'s subscribe set against a fresh nearby snapshot and apply it.
pub(crate) fn refresh(
    registry: &mut Registry,
    unit: UnitId,
    nearby: &UnitSet,
) -> Result<Diff, AoiError> {
    debug_assert!(
        !nearby.contains(&unit),
        "spatial query returned the query unit itself"
    );
    debug_assert!(
        nearby.iter().all(|&id| registry.contains(id)),
        "spatial query returned a unit that is not registered"
    );
    let diff = Diff::between(registry.lookup(unit)?.subscribe_set(), nearby);
    notify_all(registry, unit, &diff);
    Ok(diff)
}

pub(crate) fn notify_all(registry: &mut Registry, unit: UnitId, diff: &Diff) {
    notify_enter(registry, unit, &diff.entered);
    notify_leave(registry, unit, &diff.left);
}

fn notify_enter(registry: &mut Registry, unit: UnitId, enter_set: &UnitSet) {
    for &other in enter_set {
        let Some(peer) = registry.get_mut(other) else {
            continue;
        };
        peer.callbacks_mut().enter(other, unit);
        peer.subscribe(unit);
        if let Some(me) = registry.get_mut(unit) {
            me.callbacks_mut().enter(unit, other);
            me.subscribe(other);
        }
        trace!(unit, other, "enter");
    }
}

fn notify_leave(registry: &mut Registry, unit: UnitId, leave_set: &UnitSet) {
    for &other in leave_set {
        if let Some(peer) = registry.get_mut(other) {
            peer.callbacks_mut().leave(other, unit);
            peer.unsubscribe(unit);
        }
        if let Some(me) = registry.get_mut(unit) {
            me.callbacks_mut().leave(unit, other);
            me.unsubscribe(other);
        }
        trace!(unit, other, "leave");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Callbacks, Unit};
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Point;

    type Log = Rc<RefCell<Vec<(&'static str, UnitId, UnitId)>>>;

    fn recording(log: &Log) -> Callbacks {
        let (e, l) = (log.clone(), log.clone());
        Callbacks::new(
            move |a, b| e.borrow_mut().push(("enter", a, b)),
            move |a, b| l.borrow_mut().push(("leave", a, b)),
        )
    }

    fn set(ids: &[UnitId]) -> UnitSet {
        ids.iter().copied().collect()
    }

    fn registry_with(log: &Log, ids: &[UnitId]) -> Registry {
        let mut r = Registry::new();
        for &id in ids {
            r.insert(Unit::new(id, Point::ZERO, recording(log))).unwrap();
        }
        r
    }

    fn assert_symmetric(r: &Registry) {
        for u in r.iter() {
            assert!(!u.is_subscribed(u.id()), "unit {} subscribed to itself", u.id());
            for &p in u.subscribe_set() {
                let peer = r.iter().find(|v| v.id() == p).expect("peer is live");
                assert!(peer.is_subscribed(u.id()), "{} -> {} is one-sided", u.id(), p);
            }
        }
    }

    #[test]
    fn enter_fires_both_sides_once() {
        let log = Log::default();
        let mut r = registry_with(&log, &[1, 2]);
        let d = refresh(&mut r, 1, &set(&[2])).unwrap();
        assert_eq!(d.entered, set(&[2]));
        assert!(d.left.is_empty());
        assert_eq!(*log.borrow(), [("enter", 2, 1), ("enter", 1, 2)]);
        assert_eq!(r.lookup(1).unwrap().subscribe_set(), &set(&[2]));
        assert_eq!(r.lookup(2).unwrap().subscribe_set(), &set(&[1]));
        assert_symmetric(&r);
    }

    #[test]
    fn repeated_snapshot_is_silent() {
        let log = Log::default();
        let mut r = registry_with(&log, &[1, 2, 3]);
        refresh(&mut r, 1, &set(&[2, 3])).unwrap();
        log.borrow_mut().clear();
        let d = refresh(&mut r, 1, &set(&[2, 3])).unwrap();
        assert!(d.is_empty());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn leave_unsubscribes_both_sides() {
        let log = Log::default();
        let mut r = registry_with(&log, &[1, 2]);
        refresh(&mut r, 1, &set(&[2])).unwrap();
        log.borrow_mut().clear();
        let d = refresh(&mut r, 1, &UnitSet::new()).unwrap();
        assert_eq!(d.left, set(&[2]));
        assert_eq!(*log.borrow(), [("leave", 2, 1), ("leave", 1, 2)]);
        assert!(r.lookup(1).unwrap().subscribe_set().is_empty());
        assert!(r.lookup(2).unwrap().subscribe_set().is_empty());
    }

    #[test]
    fn mixed_snapshot_touches_only_changed_peers() {
        let log = Log::default();
        let mut r = registry_with(&log, &[1, 2, 3, 4]);
        refresh(&mut r, 1, &set(&[2, 3])).unwrap();
        log.borrow_mut().clear();
        let d = refresh(&mut r, 1, &set(&[3, 4])).unwrap();
        assert_eq!(d.entered, set(&[4]));
        assert_eq!(d.left, set(&[2]));
        let events = log.borrow();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|&(_, a, b)| a != 3 && b != 3));
        assert!(events.contains(&("enter", 4, 1)));
        assert!(events.contains(&("leave", 2, 1)));
        assert_symmetric(&r);
    }

    #[test]
    fn refresh_of_unknown_unit_fails() {
        let mut r = Registry::new();
        assert_eq!(
            refresh(&mut r, 5, &UnitSet::new()).unwrap_err(),
            AoiError::UnknownUnit(5)
        );
    }
}
