// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_aoi --heading-base-level=0

//! Understory AOI: area-of-interest tracking for 2D worlds.
//!
//! Understory AOI decides which units in a bounded world can see each other and
//! tells them when that changes.
//!
//! - Add, move, and remove units by host-assigned id.
//! - Each unit keeps a subscribe set of the peers it currently sees. Sets are
//!   always symmetric and never contain the unit itself.
//! - Moves are turned into discrete enter/leave callbacks by diffing the
//!   unit's subscribe set against a fresh nearby query. Peers that stay in
//!   range hear nothing.
//!
//! Answering "who is near" is delegated to a [`SpatialQuery`] backend so you can
//! swap the spatial strategy without API churn. The default backend,
//! [`FlatScan`], is a linear scan.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_aoi::{Aoi, Callbacks, World};
//!
//! let mut aoi = Aoi::new(World::new(100.0, 100.0)?.with_visible_range(10.0)?);
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let log = seen.clone();
//! aoi.add_unit(1, 0.0, 0.0, Callbacks::none().on_enter(move |me, other| {
//!     log.borrow_mut().push((me, other));
//! }))?;
//!
//! // A unit with no callbacks still triggers its peers' callbacks.
//! let diff = aoi.add_passive_unit(2, 5.0, 0.0)?;
//! assert!(diff.entered.contains(&1));
//! assert_eq!(*seen.borrow(), [(1, 2)]);
//!
//! // Moving out of range tears the subscription down on both sides.
//! let diff = aoi.update_unit(2, 50.0, 50.0)?;
//! assert!(diff.left.contains(&1));
//! assert!(aoi.subscribers(1)?.is_empty());
//! # Ok::<(), understory_aoi::AoiError>(())
//! ```
//!
//! ## Transitions
//!
//! When unit `U` is added or moves, the AOI queries everything within the
//! world's visible range of `U` and compares it with `U`'s subscribe set:
//!
//! - newly near peers get `enter(peer, U)`, then `U` gets `enter(U, peer)`;
//! - peers no longer near get `leave(peer, U)`, then `U` gets `leave(U, peer)`.
//!
//! Removing a unit sends leaves for all of its subscriptions before the unit
//! is dropped. The order in which unrelated pairs are notified within one call
//! is unspecified.
//!
//! ## Reentrancy
//!
//! Callbacks run synchronously inside the call that caused them and must not
//! call back into the same AOI. Precondition violations (duplicate ids, unknown
//! ids, out-of-bounds positions) are returned as [`AoiError`] and leave the AOI
//! unchanged.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod aoi;
pub mod backend;
pub mod backends;
pub mod error;
mod notify;
mod registry;
pub mod sets;
pub mod types;

pub use aoi::{Aoi, AoiGeneric};
pub use backend::SpatialQuery;
pub use backends::flatscan::FlatScan;
pub use error::AoiError;
pub use sets::Diff;
pub use types::{Callback, Callbacks, DEFAULT_VISIBLE_RANGE, Unit, UnitId, UnitSet, World};
