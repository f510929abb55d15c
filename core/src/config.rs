//! Map configuration consumed by the generator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BaseType, Position, STANDARD_BASE_SIZE};

/// The five fixed positions that paths connect.
///
/// Each position is the top-left cell of a 3×3 base footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Anchors {
    /// Shared room at the centre of the map.
    pub main_room: Position,
    /// Red faction base.
    pub red: Position,
    /// Yellow faction base.
    pub yellow: Position,
    /// Green faction base.
    pub green: Position,
    /// Blue faction base.
    pub blue: Position,
}

impl Anchors {
    /// Every anchor paired with the base type stamped there, main room first.
    #[must_use]
    pub const fn all(&self) -> [(Position, BaseType); 5] {
        [
            (self.main_room, BaseType::General),
            (self.red, BaseType::Red),
            (self.yellow, BaseType::Yellow),
            (self.green, BaseType::Green),
            (self.blue, BaseType::Blue),
        ]
    }

    /// The four faction anchors in Red, Yellow, Green, Blue order.
    #[must_use]
    pub const fn factions(&self) -> [(Position, BaseType); 4] {
        [
            (self.red, BaseType::Red),
            (self.yellow, BaseType::Yellow),
            (self.green, BaseType::Green),
            (self.blue, BaseType::Blue),
        ]
    }
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            main_room: Position::new(24, 24),
            red: Position::new(1, 1),
            yellow: Position::new(46, 1),
            green: Position::new(1, 46),
            blue: Position::new(46, 46),
        }
    }
}

/// Everything the generator needs to produce a map.
///
/// Fields missing from a serialized configuration take their [`Default`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Number of grid columns.
    pub width: u32,
    /// Number of grid rows.
    pub height: u32,
    /// Base positions connected by paths.
    pub anchors: Anchors,
    /// Seed for the carving stream. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            anchors: Anchors::default(),
            seed: None,
        }
    }
}

impl MapConfig {
    /// Returns a copy of the configuration pinned to `seed`.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the grid is non-empty and every base footprint fits inside it.
    ///
    /// The generator does not call this: anchor placement is the caller's
    /// responsibility. Adapters reading user-edited configuration should.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        for (position, base) in self.anchors.all() {
            let fits_x = position
                .x()
                .checked_add(STANDARD_BASE_SIZE.width())
                .is_some_and(|right| right <= self.width);
            let fits_y = position
                .y()
                .checked_add(STANDARD_BASE_SIZE.height())
                .is_some_and(|bottom| bottom <= self.height);
            if !(fits_x && fits_y) {
                return Err(ConfigError::AnchorOutOfBounds {
                    base,
                    position,
                    width: self.width,
                    height: self.height,
                });
            }
        }

        Ok(())
    }
}

/// Reasons a map configuration is rejected by [`MapConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// One of the grid dimensions is zero.
    #[error("grid must not be empty, got {width}x{height}")]
    EmptyGrid {
        /// Configured column count.
        width: u32,
        /// Configured row count.
        height: u32,
    },
    /// A base footprint extends past the grid edge.
    #[error("{base:?} base at {position} does not fit inside a {width}x{height} grid")]
    AnchorOutOfBounds {
        /// Base whose footprint overflows.
        base: BaseType,
        /// Top-left cell of the footprint.
        position: Position,
        /// Configured column count.
        width: u32,
        /// Configured row count.
        height: u32,
    },
}
