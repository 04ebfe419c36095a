// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! AOI basics.
//!
//! Add a few units, walk one of them across the map, and print the enter/leave
//! callbacks as they fire. The AOI's own `tracing` output is printed at debug
//! level alongside.
//!
//! Run:
//! - `cargo run -p understory_examples --example aoi_basics`

use tracing_subscriber::filter::LevelFilter;
use understory_aoi::{Aoi, Callbacks, UnitId, World};

fn printing(name: &'static str) -> Callbacks {
    Callbacks::new(
        move |me: UnitId, other: UnitId| println!("[{name}] {me} sees {other}"),
        move |me: UnitId, other: UnitId| println!("[{name}] {me} lost {other}"),
    )
}

fn main() -> Result<(), understory_aoi::AoiError> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let world = World::new(200.0, 200.0)?.with_visible_range(25.0)?;
    let mut aoi = Aoi::new(world);

    aoi.add_unit(1, 20.0, 20.0, printing("scout"))?;
    aoi.add_unit(2, 40.0, 20.0, printing("guard"))?;
    // Scenery never reacts but is still seen.
    aoi.add_passive_unit(3, 100.0, 20.0)?;

    // Walk the scout east past the guard and the scenery.
    for x in (20..=180).step_by(20) {
        let diff = aoi.update_unit(1, f64::from(x), 20.0)?;
        if !diff.is_empty() {
            println!(
                "scout at x={x}: entered={:?} left={:?}",
                diff.entered, diff.left
            );
        }
    }

    println!("scout subscribers: {:?}", aoi.subscribers(1)?);
    println!("near the guard within 100: {:?}", aoi.find_nearby_unit(2, 100.0)?);

    // Removal tells everyone still watching.
    aoi.remove_unit(1)?;
    println!("remaining units: {}", aoi.len());

    // Out-of-bounds moves are rejected and change nothing.
    if let Err(e) = aoi.update_unit(2, 250.0, 20.0) {
        println!("rejected: {e}");
    }
    Ok(())
}
