//! Command-line configuration for the `blockfall` binary.

use std::time::Duration;

use clap::Parser;

use crate::core::{ConfigError, GameConfig, Randomizer};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_TICKS, TICK_MS};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of grid rows.
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    pub rows: u8,
    /// Number of grid columns.
    #[arg(long, default_value_t = BOARD_WIDTH)]
    pub cols: u8,
    /// Ticks between two gravity steps. Lower is faster.
    #[arg(short, long, default_value_t = GRAVITY_TICKS)]
    pub gravity_ticks: u32,
    /// Milliseconds per tick.
    #[arg(
        long,
        default_value_t = TICK_MS as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,
    /// Seed for the piece sequence, given as a 64-bit integer.
    /// Example: `blockfall --seed=42` replays the same pieces every run.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Terminal columns used to draw one grid cell.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    pub cell_width: u16,
}

impl Args {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.rows, self.cols, self.gravity_ticks)
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn randomizer(&self) -> Randomizer {
        self.seed.map_or_else(Randomizer::from_os, Randomizer::new)
    }
}
