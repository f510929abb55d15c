//! Ore placement stage.

use log::debug;
use mining_map_core::TileGrid;

/// Places ore deposits into the finished layout.
///
/// Declared so the pipeline shape records where ore placement attaches; it
/// currently leaves the grid untouched. It receives the run seed rather than
/// the carving stream so adding it later will not shift any carved path.
pub(crate) fn generate_ores(_grid: &mut TileGrid, seed: u64) {
    debug!("ore placement for seed {seed:#x} is not implemented, grid left unchanged");
}
