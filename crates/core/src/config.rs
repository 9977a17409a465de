//! Game configuration and its validation errors.

use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_TICKS};

/// Smallest grid height: the spawn rows plus room to fall.
pub const MIN_ROWS: u8 = 4;
pub const MAX_ROWS: u8 = 64;
/// Smallest grid width that fits the horizontal I spawn.
pub const MIN_COLS: u8 = 4;
pub const MAX_COLS: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid rows must be within {min}..={max}, got {0}", min = MIN_ROWS, max = MAX_ROWS)]
    Rows(u8),
    #[error("grid columns must be within {min}..={max}, got {0}", min = MIN_COLS, max = MAX_COLS)]
    Cols(u8),
    #[error("gravity cadence must be at least one tick")]
    GravityTicks,
}

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// Ticks between two gravity steps
    pub gravity_ticks: u32,
}

impl GameConfig {
    pub fn new(rows: u8, cols: u8, gravity_ticks: u32) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            cols,
            gravity_ticks,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(ConfigError::Rows(self.rows));
        }
        if !(MIN_COLS..=MAX_COLS).contains(&self.cols) {
            return Err(ConfigError::Cols(self.cols));
        }
        if self.gravity_ticks == 0 {
            return Err(ConfigError::GravityTicks);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
            gravity_ticks: GRAVITY_TICKS,
        }
    }
}
