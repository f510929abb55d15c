//! Seed sources used when a configuration does not pin its seed.

use rand::{rngs::OsRng, RngCore};

/// Supplies the seed for a generation run.
pub trait SeedSource {
    /// Produces the seed for the next run.
    fn next_seed(&mut self) -> u64;
}

/// Always yields the same seed, making runs reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

/// Draws a fresh seed from the operating system for every run.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySeed;

impl SeedSource for EntropySeed {
    fn next_seed(&mut self) -> u64 {
        OsRng.next_u64()
    }
}
