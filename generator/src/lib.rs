#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Map generation pipeline for the four-faction mining map.
//!
//! The [`MapGenerator`] owns a single [`TileGrid`] for the whole run and lends
//! it to each stage in turn: base stamping, path carving, track resolution and
//! the ore placement step. The finished grid is handed back inside a
//! [`GeneratedMap`] that only exposes shared borrows, so collaborators can
//! render it but never change it.
//!
//! Every random decision is drawn from one ChaCha stream seeded with the run
//! seed, in a fixed call order. A fixed configuration and seed therefore always
//! produce the same grid.

mod ores;
mod seed;

use log::{debug, trace};
use mining_map_core::{MapConfig, Position, TileGrid};
use mining_map_system_bases::stamp_anchors;
use mining_map_system_paths::carve_path;
use mining_map_system_tracks::resolve_tracks;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use mining_map_system_paths::{Step, Walk};
pub use seed::{EntropySeed, FixedSeed, SeedSource};

/// Number of faction-to-faction carves that receive tracks, out of this many.
const EXTRA_TRACK_ODDS: u32 = 3;

/// Sequences the generation stages over a single exclusively-owned grid.
#[derive(Debug)]
pub struct MapGenerator {
    config: MapConfig,
    seed: u64,
    grid: TileGrid,
    rng: ChaCha8Rng,
    walks: Vec<Walk>,
}

impl MapGenerator {
    /// Creates a generator for the configuration.
    ///
    /// Uses the configured seed when present and draws one from
    /// [`EntropySeed`] otherwise.
    #[must_use]
    pub fn new(config: MapConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed_source(config, &mut FixedSeed(seed)),
            None => Self::with_seed_source(config, &mut EntropySeed),
        }
    }

    /// Creates a generator whose seed is drawn from `source`.
    ///
    /// The source always wins over a seed stored in the configuration.
    #[must_use]
    pub fn with_seed_source<S>(config: MapConfig, source: &mut S) -> Self
    where
        S: SeedSource + ?Sized,
    {
        let seed = source.next_seed();
        Self {
            config: config.with_seed(seed),
            seed,
            grid: TileGrid::new(0, 0),
            rng: ChaCha8Rng::seed_from_u64(seed),
            walks: Vec::new(),
        }
    }

    /// Seed driving this run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Runs every stage and returns the finished map.
    #[must_use]
    pub fn generate(mut self) -> GeneratedMap {
        debug!(
            "generating {}x{} map with seed {:#x}",
            self.config.width, self.config.height, self.seed
        );
        self.generate_basics();
        self.generate_paths();
        self.generate_ores();

        GeneratedMap {
            config: self.config,
            seed: self.seed,
            grid: self.grid,
            walks: self.walks,
        }
    }

    fn generate_basics(&mut self) {
        self.grid = TileGrid::new(self.config.width, self.config.height);
        stamp_anchors(&mut self.grid, &self.config.anchors);
    }

    fn generate_paths(&mut self) {
        let anchors = self.config.anchors;
        let factions = anchors.factions();

        for include_tracks in [true, false] {
            for (origin, base) in factions {
                trace!("connecting {base:?} base to the main room, tracks: {include_tracks}");
                self.carve(origin, anchors.main_room, include_tracks);
            }
        }

        for (origin, _) in factions {
            for (target, _) in factions {
                if origin == target {
                    continue;
                }
                let include_tracks = self.rng.gen_range(0..EXTRA_TRACK_ODDS) == 0;
                self.carve(origin, target, include_tracks);
            }
        }

        let resolved = resolve_tracks(&mut self.grid);
        debug!(
            "carved {} walks totalling {} steps, {resolved} track tiles resolved",
            self.walks.len(),
            self.walks.iter().map(Walk::len).sum::<usize>()
        );
    }

    fn generate_ores(&mut self) {
        ores::generate_ores(&mut self.grid, self.seed);
    }

    fn carve(&mut self, origin: Position, target: Position, include_tracks: bool) {
        let walk = carve_path(
            &mut self.grid,
            origin,
            target,
            include_tracks,
            &mut self.rng,
        );
        self.walks.push(walk);
    }
}

/// Runs the full pipeline for `config`.
#[must_use]
pub fn generate(config: MapConfig) -> GeneratedMap {
    MapGenerator::new(config).generate()
}

/// Immutable result of a generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    config: MapConfig,
    seed: u64,
    grid: TileGrid,
    walks: Vec<Walk>,
}

impl GeneratedMap {
    /// Seed the run used. Feeding it back through the configuration replays the run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Configuration the run used, with its seed filled in.
    #[must_use]
    pub const fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The finished grid.
    #[must_use]
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Walks carved during the run, in carving order.
    #[must_use]
    pub fn walks(&self) -> &[Walk] {
        &self.walks
    }

    /// Consumes the map, yielding the grid.
    #[must_use]
    pub fn into_grid(self) -> TileGrid {
        self.grid
    }
}

/// Read-only helpers over a finished map.
pub mod query {
    use super::GeneratedMap;
    use mining_map_core::{BaseType, Position, Tile, Track};

    /// Tile at `position`, if it lies within the grid.
    #[must_use]
    pub fn tile_at(map: &GeneratedMap, position: Position) -> Option<&Tile> {
        map.grid().get(position)
    }

    /// Every tracked path cell with its resolved track, in row-major order.
    #[must_use]
    pub fn tracked_cells(map: &GeneratedMap) -> Vec<(Position, Track)> {
        map.grid()
            .iter()
            .filter_map(|(position, tile)| tile.track().map(|track| (position, track)))
            .collect()
    }

    /// Every path cell, tracked or not, in row-major order.
    #[must_use]
    pub fn path_cells(map: &GeneratedMap) -> Vec<Position> {
        map.grid()
            .iter()
            .filter(|(_, tile)| matches!(tile, Tile::Path { .. }))
            .map(|(position, _)| position)
            .collect()
    }

    /// Every cell belonging to a base of the given type, in row-major order.
    #[must_use]
    pub fn base_cells(map: &GeneratedMap, base: BaseType) -> Vec<Position> {
        map.grid()
            .iter()
            .filter(|(_, tile)| **tile == Tile::Base(base))
            .map(|(position, _)| position)
            .collect()
    }
}
