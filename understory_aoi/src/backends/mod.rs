// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial query implementations.
//!
//! - `flatscan`: flat vector with linear scans. The default; exact and simple.
//!
//! Faster indexes (uniform grids, trees) plug in by implementing
//! [`SpatialQuery`](crate::SpatialQuery).

pub mod flatscan;
