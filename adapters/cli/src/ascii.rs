//! Plain-text presentation of a finished grid.

use mining_map_core::{BaseType, Direction, Tile, TileGrid, Track, TrackKind};

/// Renders one glyph per tile, one line per row.
pub(crate) fn render(grid: &TileGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        out.extend(row.iter().map(glyph));
        out.push('\n');
    }
    out
}

/// Legend explaining the glyphs emitted by [`render`].
pub(crate) const LEGEND: &str = "\
. dirt  : path  M main room  R/Y/G/B faction bases
track: ─│ straight  └┌┐┘ curve  ┬┤┴├ switch  ╵╶╷╴ end  ┼ intersection";

fn glyph(tile: &Tile) -> char {
    match tile {
        Tile::Dirt => '.',
        Tile::Path { track: None } => ':',
        Tile::Path { track: Some(track) } => track_glyph(*track),
        Tile::Base(base) => match base {
            BaseType::General => 'M',
            BaseType::Red => 'R',
            BaseType::Yellow => 'Y',
            BaseType::Green => 'G',
            BaseType::Blue => 'B',
        },
    }
}

fn track_glyph(track: Track) -> char {
    use Direction::{East, North, South, West};

    match (track.kind, track.direction) {
        (TrackKind::Intersection, _) => '┼',
        (TrackKind::Straight, North | South) => '│',
        (TrackKind::Straight, East | West) => '─',
        // Curves are keyed by their resolved direction: N = north+east,
        // E = east+south, S = south+west, W = north+west.
        (TrackKind::Curved, North) => '└',
        (TrackKind::Curved, East) => '┌',
        (TrackKind::Curved, South) => '┐',
        (TrackKind::Curved, West) => '┘',
        // Switches name their open side.
        (TrackKind::Switch, North) => '┬',
        (TrackKind::Switch, East) => '┤',
        (TrackKind::Switch, South) => '┴',
        (TrackKind::Switch, West) => '├',
        (TrackKind::End, North) => '╵',
        (TrackKind::End, East) => '╶',
        (TrackKind::End, South) => '╷',
        (TrackKind::End, West) => '╴',
    }
}
