#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the mining map generator.
//!
//! This crate defines the vocabulary every pipeline stage speaks: grid
//! [`Position`] values, cardinal [`Direction`] headings, the closed set of
//! [`Tile`] variants, and the dense [`TileGrid`] those tiles live in. The
//! generator owns one grid for the whole pipeline and lends it mutably to the
//! base, path and track systems in turn; collaborators only ever observe the
//! finished grid through shared borrows.

mod config;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use config::{Anchors, ConfigError, MapConfig};

/// Footprint stamped for every base, main room included.
pub const STANDARD_BASE_SIZE: BaseSize = BaseSize::new(3, 3);

/// Location of a single grid cell expressed as column (`x`) and row (`y`).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    x: u32,
    y: u32,
}

impl Position {
    /// Creates a new grid position.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Zero-based column index.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Zero-based row index.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Returns the position offset by the provided amounts, if it stays non-negative.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self::new(x, y))
    }

    /// Returns the neighbouring position one step in `direction`.
    ///
    /// Steps that would leave the non-negative quadrant yield `None`. The
    /// upper bounds belong to the grid and are checked there.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal headings used by walks and track orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Toward decreasing row indices.
    North,
    /// Toward increasing column indices.
    East,
    /// Toward increasing row indices.
    South,
    /// Toward decreasing column indices.
    West,
}

impl Direction {
    /// Every heading in canonical North, East, South, West order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Heading that exactly reverses this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Unit `(dx, dy)` step taken when moving in this heading.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// Position of this heading within [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// Owner of a base footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseType {
    /// The shared main room every faction connects to.
    General,
    /// Red faction base.
    Red,
    /// Yellow faction base.
    Yellow,
    /// Green faction base.
    Green,
    /// Blue faction base.
    Blue,
}

/// Shape of a rail segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    /// Two opposite connections.
    Straight,
    /// Two perpendicular connections.
    Curved,
    /// Three connections; the direction names the open side.
    Switch,
    /// Four connections, no connections, or a provisional carving marker.
    Intersection,
    /// A single connection; the direction names the connected side.
    End,
}

/// Rail descriptor attached to a path tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Shape of the segment.
    pub kind: TrackKind,
    /// Orientation of the segment; its meaning depends on `kind`.
    pub direction: Direction,
}

impl Track {
    /// Creates a new track descriptor.
    #[must_use]
    pub const fn new(kind: TrackKind, direction: Direction) -> Self {
        Self { kind, direction }
    }

    /// Marker written while carving, before neighbours are known.
    #[must_use]
    pub const fn provisional(heading: Direction) -> Self {
        Self::new(TrackKind::Intersection, heading)
    }
}

/// Contents of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    /// Unmarked ground. Every cell starts as dirt.
    #[default]
    Dirt,
    /// Walkable corridor, optionally carrying a rail segment.
    Path {
        /// Rail descriptor; `None` marks a plain walkable path.
        track: Option<Track>,
    },
    /// Part of a base footprint. Never overwritten once placed.
    Base(BaseType),
}

impl Tile {
    /// Creates a path tile without rails.
    #[must_use]
    pub const fn path() -> Self {
        Self::Path { track: None }
    }

    /// Creates a path tile carrying the provided rail segment.
    #[must_use]
    pub const fn tracked(track: Track) -> Self {
        Self::Path { track: Some(track) }
    }

    /// Reports whether the tile is a path carrying a rail segment.
    #[must_use]
    pub const fn is_tracked(&self) -> bool {
        matches!(self, Self::Path { track: Some(_) })
    }

    /// Rail segment carried by the tile, if any.
    #[must_use]
    pub const fn track(&self) -> Option<Track> {
        match self {
            Self::Path { track } => *track,
            Self::Dirt | Self::Base(_) => None,
        }
    }
}

/// Dimensions of a rectangular base footprint measured in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseSize {
    height: u32,
    width: u32,
}

impl BaseSize {
    /// Creates a footprint of `height` rows by `width` columns.
    #[must_use]
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Number of rows covered.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns covered.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }
}

/// Fixed-size row-major matrix of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Allocates a `width` by `height` grid filled with [`Tile::Dirt`].
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let count = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .unwrap_or(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Dirt; count],
        }
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Reports whether the position addresses a cell inside the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Tile stored at the position, if it lies within the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.index(position).and_then(|index| self.tiles.get(index))
    }

    /// Mutable tile stored at the position, if it lies within the grid.
    #[must_use]
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.index(position)
            .and_then(move |index| self.tiles.get_mut(index))
    }

    /// Row slices in top-to-bottom order, giving the `[y][x]` view of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        let width = usize::try_from(self.width).unwrap_or(0).max(1);
        self.tiles.chunks(width)
    }

    /// Every cell paired with its position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        let width = self.width.max(1);
        (0u32..).zip(self.tiles.iter()).map(move |(index, tile)| {
            (Position::new(index % width, index / width), tile)
        })
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        let row = usize::try_from(position.y).ok()?;
        let column = usize::try_from(position.x).ok()?;
        let width = usize::try_from(self.width).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseType, Direction, Position, Tile, TileGrid, Track, TrackKind};

    #[test]
    fn opposite_directions_pair_up() {
        for direction in Direction::ALL {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);
    }

    #[test]
    fn direction_index_matches_canonical_order() {
        for (expected, direction) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(direction.index(), expected);
        }
    }

    #[test]
    fn step_refuses_negative_coordinates() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::East), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Direction::South), Some(Position::new(0, 1)));
    }

    #[test]
    fn new_grid_is_all_dirt() {
        let grid = TileGrid::new(4, 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
        assert!(grid.iter().all(|(_, tile)| *tile == Tile::Dirt));
    }

    #[test]
    fn get_respects_both_axes() {
        let mut grid = TileGrid::new(5, 2);
        assert!(grid.get(Position::new(4, 1)).is_some());
        assert!(grid.get(Position::new(5, 0)).is_none());
        assert!(grid.get(Position::new(0, 2)).is_none());

        *grid.get_mut(Position::new(3, 1)).expect("in bounds") = Tile::Base(BaseType::Red);
        let (position, _) = grid
            .iter()
            .find(|(_, tile)| **tile == Tile::Base(BaseType::Red))
            .expect("stamped tile");
        assert_eq!(position, Position::new(3, 1));
        assert_eq!(
            grid.rows().nth(1).expect("row")[3],
            Tile::Base(BaseType::Red)
        );
    }

    #[test]
    fn tracked_reports_rail_presence() {
        assert!(!Tile::Dirt.is_tracked());
        assert!(!Tile::path().is_tracked());
        assert!(!Tile::Base(BaseType::General).is_tracked());
        let tile = Tile::tracked(Track::provisional(Direction::East));
        assert!(tile.is_tracked());
        assert_eq!(
            tile.track(),
            Some(Track::new(TrackKind::Intersection, Direction::East))
        );
    }

    #[test]
    fn tile_grid_round_trips_through_bincode() {
        let mut grid = TileGrid::new(3, 2);
        *grid.get_mut(Position::new(0, 0)).expect("in bounds") = Tile::Base(BaseType::Blue);
        *grid.get_mut(Position::new(1, 1)).expect("in bounds") =
            Tile::tracked(Track::new(TrackKind::Curved, Direction::West));
        let bytes = bincode::serialize(&grid).expect("serialize");
        let restored: TileGrid = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(restored, grid);
    }
}
