#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates a mining map and prints it as text.

mod ascii;
mod config_file;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mining_map_core::MapConfig;
use mining_map_generator::MapGenerator;

/// Generates a four-faction mining map and prints it as text.
#[derive(Debug, Parser)]
#[command(name = "mining-map", version)]
struct Args {
    /// TOML file with `width`, `height`, `seed` and an `[anchors]` table.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the carving stream. A random seed is drawn when neither this nor the file sets one.
    #[arg(long)]
    seed: Option<u64>,
    /// Overrides the number of grid columns.
    #[arg(long)]
    width: Option<u32>,
    /// Overrides the number of grid rows.
    #[arg(long)]
    height: Option<u32>,
    /// Prints the glyph legend after the map.
    #[arg(long)]
    legend: bool,
}

impl Args {
    fn map_config(&self) -> Result<MapConfig> {
        let mut config = match &self.config {
            Some(path) => config_file::load(path)?,
            None => MapConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        Ok(config)
    }
}

/// Entry point for the mining map command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.map_config()?;
    config
        .validate()
        .context("map configuration cannot be generated")?;

    let generator = MapGenerator::new(config);
    info!("generating with seed {}", generator.seed());
    let map = generator.generate();

    print!("{}", ascii::render(map.grid()));
    println!("seed: {}", map.seed());
    if args.legend {
        println!("{}", ascii::LEGEND);
    }
    Ok(())
}
