#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Track shape resolution from neighbour connectivity.
//!
//! Carving leaves provisional markers on every tracked path cell. This system
//! replaces each marker with the shape implied by which of the four
//! orthogonal neighbours also carry a track. Only the tagged/untagged state of
//! a neighbour matters, and the pass never changes that state, so a single
//! scan in any order produces the final result.

use log::debug;
use mining_map_core::{Direction, Position, Tile, TileGrid, Track, TrackKind};

/// Tagged state of the four orthogonal neighbours of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Connections {
    sides: [bool; 4],
}

impl Connections {
    /// Creates a connection set from flags in North, East, South, West order.
    #[must_use]
    pub const fn new(north: bool, east: bool, south: bool, west: bool) -> Self {
        Self {
            sides: [north, east, south, west],
        }
    }

    /// Reads the connections of the cell at `position` from the grid.
    ///
    /// A side is connected when the neighbour lies inside the grid and is a
    /// path tile carrying a track, whatever its shape.
    #[must_use]
    pub fn of(grid: &TileGrid, position: Position) -> Self {
        let mut sides = [false; 4];
        for direction in Direction::ALL {
            sides[direction.index()] = position
                .step(direction)
                .and_then(|neighbour| grid.get(neighbour))
                .is_some_and(Tile::is_tracked);
        }
        Self { sides }
    }

    /// Reports whether the given side is connected.
    #[must_use]
    pub const fn is_connected(&self, direction: Direction) -> bool {
        self.sides[direction.index()]
    }

    /// Number of connected sides.
    #[must_use]
    pub fn count(&self) -> usize {
        self.sides.iter().filter(|connected| **connected).count()
    }

    fn first_connected(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| self.is_connected(*direction))
    }

    fn first_open(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| !self.is_connected(*direction))
    }
}

/// Maps a connection set to its final track shape.
///
/// | connected | shape | direction |
/// |---|---|---|
/// | 0 or 4 | intersection | north |
/// | 1 | end | the connected side |
/// | 2, opposite | straight | first connected side |
/// | 2, adjacent | curved | first connected side; north + west gives west |
/// | 3 | switch | the open side |
#[must_use]
pub fn resolve(connections: Connections) -> Track {
    let fallback = Track::new(TrackKind::Intersection, Direction::North);
    match connections.count() {
        1 => connections
            .first_connected()
            .map_or(fallback, |side| Track::new(TrackKind::End, side)),
        2 => {
            let Some(first) = connections.first_connected() else {
                return fallback;
            };
            if connections.is_connected(first.opposite()) {
                return Track::new(TrackKind::Straight, first);
            }
            // Without this, north + west would share its direction with north + east.
            if connections.is_connected(Direction::North)
                && connections.is_connected(Direction::West)
            {
                return Track::new(TrackKind::Curved, Direction::West);
            }
            Track::new(TrackKind::Curved, first)
        }
        3 => connections
            .first_open()
            .map_or(fallback, |side| Track::new(TrackKind::Switch, side)),
        _ => fallback,
    }
}

/// Recomputes the shape of every tracked path tile in the grid.
///
/// Returns the number of tiles resolved.
#[must_use]
pub fn resolve_tracks(grid: &mut TileGrid) -> usize {
    let mut resolved = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let position = Position::new(x, y);
            let connections = Connections::of(grid, position);
            if let Some(Tile::Path { track: Some(track) }) = grid.get_mut(position) {
                *track = resolve(connections);
                resolved += 1;
            }
        }
    }
    debug!("resolved {resolved} track tiles");
    resolved
}
