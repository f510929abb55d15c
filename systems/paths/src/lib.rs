#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Biased random-walk path carving.
//!
//! A walk starts one cell diagonally inside its origin footprint, picks an
//! initial heading that does not lead away from the target, and then takes a
//! randomised number of steps. Every step re-evaluates which headings are open
//! (inside the grid, not an immediate reversal) and leans toward either the
//! current heading or the direction of the target. Dirt cells the walk enters
//! become path tiles; base tiles are never overwritten.

use log::trace;
use mining_map_core::{Direction, Position, Tile, TileGrid, Track};
use rand::Rng;

/// Percentage roll below which a two-way choice takes the first candidate.
const SPLIT_THRESHOLD: u32 = 50;
/// Roll below which a three-way choice turns toward the target.
const PREFERRED_THRESHOLD: u32 = 20;
/// Roll below which a three-way choice that can see the target keeps heading.
const PREFERRED_KEEP_THRESHOLD: u32 = 90;
/// Roll below which a three-way choice that cannot see the target keeps heading.
const BLIND_KEEP_THRESHOLD: u32 = 80;
/// Roll below which a blind three-way choice takes the first remaining side.
const BLIND_FIRST_THRESHOLD: u32 = 90;

/// Single cell entered by a walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// Cell the walk moved into.
    pub position: Position,
    /// Heading taken to reach the cell.
    pub heading: Direction,
}

/// Record of one carved walk.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Walk {
    start: Position,
    initial_heading: Direction,
    budget: u32,
    steps: Vec<Step>,
}

impl Walk {
    /// Cell the walk started from, before its first step.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Heading chosen before the first step.
    #[must_use]
    pub const fn initial_heading(&self) -> Direction {
        self.initial_heading
    }

    /// Number of steps the walk was allotted.
    #[must_use]
    pub const fn budget(&self) -> u32 {
        self.budget
    }

    /// Steps taken, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps taken.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Reports whether the walk never left its starting cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Carves one walk from `origin` toward `target`.
///
/// The walk always runs its full step budget of `height..2 * height` steps;
/// reaching the target does not end it early. It only stops short when no
/// heading is open, which can happen on grids a single cell wide.
/// When `include_tracks` is set every entered path cell is tagged with a
/// provisional [`Track`] pointing along the walk; the track resolver replaces
/// these tags once carving finishes.
pub fn carve_path<R>(
    grid: &mut TileGrid,
    origin: Position,
    target: Position,
    include_tracks: bool,
    rng: &mut R,
) -> Walk
where
    R: Rng + ?Sized,
{
    let initial = initial_headings(origin, target);
    let mut heading = initial[rng.gen_range(0..initial.len())];
    let start = origin.offset(1, 1).unwrap_or(origin);
    let budget = step_budget(grid.height(), rng);

    let mut walk = Walk {
        start,
        initial_heading: heading,
        budget,
        steps: Vec::with_capacity(usize::try_from(budget).unwrap_or(0)),
    };

    let mut position = start;
    for _ in 0..budget {
        let preferred = preferred_direction(position, target);
        let roll = rng.gen_range(0..100);
        let candidates = open_headings(grid, position, heading);

        let Some(next_heading) = choose_heading(&candidates, heading, preferred, roll) else {
            trace!("walk from {origin} boxed in at {position}");
            break;
        };
        let Some(next) = position
            .step(next_heading)
            .filter(|cell| grid.contains(*cell))
        else {
            break;
        };

        heading = next_heading;
        position = next;
        mark(grid, position, heading, include_tracks);
        walk.steps.push(Step { position, heading });
    }

    trace!(
        "walk {origin} -> {target}: {} of {} steps, ended at {position}, tracks: {include_tracks}",
        walk.len(),
        budget
    );
    walk
}

/// Headings that do not move away from the target on either axis.
///
/// Both headings of an axis are included when origin and target are aligned on it.
#[must_use]
pub fn initial_headings(origin: Position, target: Position) -> Vec<Direction> {
    let mut headings = Vec::with_capacity(4);
    if origin.y() <= target.y() {
        headings.push(Direction::South);
    }
    if origin.y() >= target.y() {
        headings.push(Direction::North);
    }
    if origin.x() <= target.x() {
        headings.push(Direction::East);
    }
    if origin.x() >= target.x() {
        headings.push(Direction::West);
    }
    headings
}

/// Heading that closes the larger axis gap to the target; ties go vertical.
#[must_use]
pub fn preferred_direction(from: Position, target: Position) -> Direction {
    let dx = i64::from(target.x()) - i64::from(from.x());
    let dy = i64::from(target.y()) - i64::from(from.y());

    if dx.abs() > dy.abs() {
        if dx < 0 {
            Direction::West
        } else {
            Direction::East
        }
    } else if dy < 0 {
        Direction::North
    } else {
        Direction::South
    }
}

fn step_budget<R>(height: u32, rng: &mut R) -> u32
where
    R: Rng + ?Sized,
{
    let upper = height.saturating_mul(2);
    if upper > height {
        rng.gen_range(height..upper)
    } else {
        height
    }
}

/// Headings that stay on the grid and do not reverse `heading`, in N, E, S, W order.
fn open_headings(grid: &TileGrid, position: Position, heading: Direction) -> Vec<Direction> {
    // Columns are bounded by the width and rows by the height.
    let can_go_north = position.y() > 0;
    let can_go_east = position.x().saturating_add(1) < grid.width();
    let can_go_south = position.y().saturating_add(1) < grid.height();
    let can_go_west = position.x() > 0;

    Direction::ALL
        .into_iter()
        .filter(|direction| match direction {
            Direction::North => can_go_north,
            Direction::East => can_go_east,
            Direction::South => can_go_south,
            Direction::West => can_go_west,
        })
        .filter(|direction| *direction != heading.opposite())
        .collect()
}

fn choose_heading(
    candidates: &[Direction],
    current: Direction,
    preferred: Direction,
    roll: u32,
) -> Option<Direction> {
    match candidates {
        [] => None,
        [only] => Some(*only),
        [first, second] => Some(if roll < SPLIT_THRESHOLD {
            *first
        } else {
            *second
        }),
        _ => {
            let keeps_current = candidates.contains(&current);
            if candidates.contains(&preferred) {
                if roll < PREFERRED_THRESHOLD {
                    return Some(preferred);
                }
                if roll < PREFERRED_KEEP_THRESHOLD && keeps_current {
                    return Some(current);
                }
                candidates
                    .iter()
                    .copied()
                    .find(|direction| *direction != preferred && *direction != current)
                    .or(Some(preferred))
            } else {
                if roll < BLIND_KEEP_THRESHOLD && keeps_current {
                    return Some(current);
                }
                let mut others = candidates
                    .iter()
                    .copied()
                    .filter(|direction| *direction != current);
                let first = others.next();
                if roll < BLIND_FIRST_THRESHOLD {
                    first
                } else {
                    others.next().or(first)
                }
            }
        }
    }
}

fn mark(grid: &mut TileGrid, position: Position, heading: Direction, include_tracks: bool) {
    let Some(tile) = grid.get_mut(position) else {
        return;
    };

    let replacement = match tile {
        Tile::Dirt if include_tracks => Some(Tile::tracked(Track::provisional(heading))),
        Tile::Dirt => Some(Tile::path()),
        Tile::Path { track } => {
            if include_tracks {
                *track = Some(Track::provisional(heading));
            }
            None
        }
        Tile::Base(_) => None,
    };

    if let Some(replacement) = replacement {
        *tile = replacement;
    }
}
