#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Base stamping system that fills rectangular footprints with base tiles.

use log::debug;
use mining_map_core::{Anchors, BaseSize, BaseType, Position, Tile, TileGrid, STANDARD_BASE_SIZE};

/// Overwrites the `size` rectangle anchored at `top_left` with base tiles of `base`.
///
/// Placement is the caller's contract; cells that fall outside the grid are
/// left untouched rather than reported.
pub fn stamp_base(grid: &mut TileGrid, top_left: Position, size: BaseSize, base: BaseType) {
    for row in 0..size.height() {
        for column in 0..size.width() {
            let Some(position) = top_left
                .x()
                .checked_add(column)
                .zip(top_left.y().checked_add(row))
                .map(|(x, y)| Position::new(x, y))
            else {
                continue;
            };

            if let Some(tile) = grid.get_mut(position) {
                *tile = Tile::Base(base);
            }
        }
    }
}

/// Stamps the main room followed by the four faction bases using the standard footprint.
pub fn stamp_anchors(grid: &mut TileGrid, anchors: &Anchors) {
    for (position, base) in anchors.all() {
        debug!("stamping {base:?} base at {position}");
        stamp_base(grid, position, STANDARD_BASE_SIZE, base);
    }
}
