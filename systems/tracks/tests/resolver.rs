use mining_map_core::{BaseType, Direction, Position, Tile, TileGrid, Track, TrackKind};
use mining_map_system_tracks::{resolve, resolve_tracks, Connections};

fn provisional(grid: &mut TileGrid, cells: &[(u32, u32)]) {
    for &(x, y) in cells {
        *grid.get_mut(Position::new(x, y)).expect("in bounds") =
            Tile::tracked(Track::provisional(Direction::East));
    }
}

fn track_at(grid: &TileGrid, x: u32, y: u32) -> Track {
    grid.get(Position::new(x, y))
        .and_then(|tile| tile.track())
        .expect("tracked tile")
}

#[test]
fn corner_tile_with_one_neighbour_is_an_end() {
    let mut grid = TileGrid::new(5, 5);
    provisional(&mut grid, &[(0, 0), (0, 1)]);

    let resolved = resolve_tracks(&mut grid);

    assert_eq!(resolved, 2);
    assert_eq!(
        track_at(&grid, 0, 0),
        Track::new(TrackKind::End, Direction::South)
    );
    assert_eq!(
        track_at(&grid, 0, 1),
        Track::new(TrackKind::End, Direction::North)
    );
}

#[test]
fn far_corner_points_at_in_bounds_neighbour() {
    let mut grid = TileGrid::new(4, 3);
    provisional(&mut grid, &[(3, 2), (2, 2)]);

    let _ = resolve_tracks(&mut grid);

    assert_eq!(
        track_at(&grid, 3, 2),
        Track::new(TrackKind::End, Direction::West)
    );
    assert_eq!(
        track_at(&grid, 2, 2),
        Track::new(TrackKind::End, Direction::East)
    );
}

#[test]
fn plus_shape_centre_is_an_intersection() {
    let mut grid = TileGrid::new(5, 5);
    provisional(&mut grid, &[(2, 2), (2, 1), (3, 2), (2, 3), (1, 2)]);

    let _ = resolve_tracks(&mut grid);

    assert_eq!(
        track_at(&grid, 2, 2),
        Track::new(TrackKind::Intersection, Direction::North)
    );
    assert_eq!(
        track_at(&grid, 2, 1),
        Track::new(TrackKind::End, Direction::South)
    );
    assert_eq!(
        track_at(&grid, 3, 2),
        Track::new(TrackKind::End, Direction::West)
    );
    assert_eq!(
        track_at(&grid, 2, 3),
        Track::new(TrackKind::End, Direction::North)
    );
    assert_eq!(
        track_at(&grid, 1, 2),
        Track::new(TrackKind::End, Direction::East)
    );
}

#[test]
fn plus_shape_is_independent_of_scan_order() {
    let mut grid = TileGrid::new(5, 5);
    provisional(&mut grid, &[(2, 2), (2, 1), (3, 2), (2, 3), (1, 2)]);
    let mut reversed = grid.clone();

    let _ = resolve_tracks(&mut grid);

    for y in (0..reversed.height()).rev() {
        for x in (0..reversed.width()).rev() {
            let position = Position::new(x, y);
            let connections = Connections::of(&reversed, position);
            if let Some(Tile::Path { track: Some(track) }) = reversed.get_mut(position) {
                *track = resolve(connections);
            }
        }
    }

    assert_eq!(grid, reversed);
}

#[test]
fn loop_resolves_into_corners_and_straights() {
    // A 3x3 ring of track around an untouched centre.
    let mut grid = TileGrid::new(3, 3);
    provisional(
        &mut grid,
        &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2), (0, 1)],
    );

    let _ = resolve_tracks(&mut grid);

    assert_eq!(
        track_at(&grid, 0, 0),
        Track::new(TrackKind::Curved, Direction::East)
    );
    assert_eq!(
        track_at(&grid, 2, 0),
        Track::new(TrackKind::Curved, Direction::South)
    );
    assert_eq!(
        track_at(&grid, 2, 2),
        Track::new(TrackKind::Curved, Direction::West)
    );
    assert_eq!(
        track_at(&grid, 0, 2),
        Track::new(TrackKind::Curved, Direction::North)
    );
    assert_eq!(
        track_at(&grid, 1, 0),
        Track::new(TrackKind::Straight, Direction::East)
    );
    assert_eq!(
        track_at(&grid, 0, 1),
        Track::new(TrackKind::Straight, Direction::North)
    );
    assert_eq!(grid.get(Position::new(1, 1)), Some(&Tile::Dirt));
}

#[test]
fn t_junction_is_a_switch_facing_the_open_side() {
    let mut grid = TileGrid::new(3, 2);
    provisional(&mut grid, &[(0, 0), (1, 0), (2, 0), (1, 1)]);

    let _ = resolve_tracks(&mut grid);

    assert_eq!(
        track_at(&grid, 1, 0),
        Track::new(TrackKind::Switch, Direction::North)
    );
}

#[test]
fn untracked_tiles_are_left_alone() {
    let mut grid = TileGrid::new(3, 1);
    *grid.get_mut(Position::new(0, 0)).expect("in bounds") = Tile::path();
    *grid.get_mut(Position::new(1, 0)).expect("in bounds") = Tile::Base(BaseType::Green);
    let before = grid.clone();

    assert_eq!(resolve_tracks(&mut grid), 0);
    assert_eq!(grid, before);
}

#[test]
fn resolving_twice_is_idempotent() {
    let mut grid = TileGrid::new(6, 6);
    provisional(
        &mut grid,
        &[(0, 0), (1, 0), (1, 1), (1, 2), (2, 2), (3, 2), (3, 3), (4, 2), (5, 5)],
    );

    let _ = resolve_tracks(&mut grid);
    let once = grid.clone();
    let _ = resolve_tracks(&mut grid);

    assert_eq!(grid, once);
}
