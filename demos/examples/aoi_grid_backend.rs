// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plugging a custom spatial backend into the AOI.
//!
//! `UniformGrid` buckets units into square cells and only scans the cells a
//! query circle overlaps. Candidates are still filtered by exact distance,
//! since the AOI treats every returned id as a real neighbor.
//!
//! Run:
//! - `cargo run -p understory_examples --example aoi_grid_backend`

use std::collections::HashMap;

use kurbo::Point;
use understory_aoi::{AoiGeneric, Callbacks, SpatialQuery, Unit, UnitId, UnitSet, World};

/// Uniform grid keyed by integer cell coordinates.
#[derive(Debug)]
struct UniformGrid {
    cell: f64,
    positions: HashMap<UnitId, Point>,
    cells: HashMap<(i64, i64), Vec<UnitId>>,
}

impl UniformGrid {
    fn new(cell: f64) -> Self {
        assert!(cell > 0.0, "cell size must be positive");
        Self {
            cell,
            positions: HashMap::new(),
            cells: HashMap::new(),
        }
    }

    fn key_for(&self, p: Point) -> (i64, i64) {
        (
            (p.x / self.cell).floor() as i64,
            (p.y / self.cell).floor() as i64,
        )
    }

    fn unlink(&mut self, id: UnitId) {
        if let Some(p) = self.positions.remove(&id) {
            let key = self.key_for(p);
            if let Some(ids) = self.cells.get_mut(&key)
                && let Some(i) = ids.iter().position(|&e| e == id)
            {
                ids.swap_remove(i);
            }
        }
    }
}

impl SpatialQuery for UniformGrid {
    fn insert(&mut self, id: UnitId, position: Point) {
        let key = self.key_for(position);
        self.cells.entry(key).or_default().push(id);
        self.positions.insert(id, position);
    }
    fn update(&mut self, id: UnitId, position: Point) {
        self.unlink(id);
        self.insert(id, position);
    }
    fn remove(&mut self, id: UnitId) {
        self.unlink(id);
    }
    fn clear(&mut self) {
        self.positions.clear();
        self.cells.clear();
    }
    fn find_nearby(&self, unit: &Unit, range: f64) -> UnitSet {
        let center = unit.position();
        let range_sq = range * range;
        let near = |id: UnitId| {
            id != unit.id() && (self.positions[&id] - center).hypot2() <= range_sq
        };

        let (min_x, min_y) = self.key_for(Point::new(center.x - range, center.y - range));
        let (max_x, max_y) = self.key_for(Point::new(center.x + range, center.y + range));
        let span = (u128::from(max_x.abs_diff(min_x)) + 1)
            .saturating_mul(u128::from(max_y.abs_diff(min_y)) + 1);
        if span > self.cells.len() as u128 {
            // Fewer occupied cells than covered ones (or an unbounded range).
            return self.positions.keys().copied().filter(|&id| near(id)).collect();
        }

        let mut out = UnitSet::new();
        for cy in min_y..=max_y {
            for cx in min_x..=max_x {
                if let Some(ids) = self.cells.get(&(cx, cy)) {
                    out.extend(ids.iter().copied().filter(|&id| near(id)));
                }
            }
        }
        out
    }
}

fn main() -> Result<(), understory_aoi::AoiError> {
    let world = World::new(1000.0, 1000.0)?.with_visible_range(50.0)?;
    let mut aoi = AoiGeneric::with_backend(world, UniformGrid::new(50.0));

    // A loose ring of units around the center.
    for i in 0..16_i64 {
        let angle = i as f64 / 16.0 * std::f64::consts::TAU;
        let p = Point::new(500.0 + 120.0 * angle.cos(), 500.0 + 120.0 * angle.sin());
        aoi.add_passive_unit(i, p.x, p.y)?;
    }

    // A watcher sweeps through the middle of the ring.
    aoi.add_unit(
        100,
        380.0,
        500.0,
        Callbacks::new(
            |_, other| println!("watcher sees {other}"),
            |_, other| println!("watcher lost {other}"),
        ),
    )?;
    for x in (380..=620).step_by(40) {
        aoi.update_unit(100, f64::from(x), 500.0)?;
    }

    println!(
        "grid tracks {} units; watcher sees {:?}",
        aoi.backend().positions.len(),
        aoi.subscribers(100)?
    );
    Ok(())
}
