//! Snapshot module - a render-facing copy of the game state
//!
//! Grid cells are exported as `u8` ids (0 empty, 1..=7 kinds) into a buffer
//! that `GameState::snapshot_into` refills every frame.

use crate::piece::Piece;
use crate::types::{Phase, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [Position; 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind(),
            cells: *value.cells(),
        }
    }
}

/// Read-only view of a session handed to renderers.
///
/// `grid` holds row-major cell values: 0 for empty, 1..=7 for piece kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    pub grid: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub pieces_spawned: u32,
    pub rows_cleared: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            grid: vec![0; rows as usize * cols as usize],
            active: None,
            phase: Phase::Spawning,
            pieces_spawned: 0,
            rows_cleared: 0,
            ticks: 0,
        }
    }

    /// Match the grid buffer to `rows x cols`, keeping the allocation when possible.
    pub fn resize(&mut self, rows: u8, cols: u8) {
        self.rows = rows;
        self.cols = cols;
        self.grid.resize(rows as usize * cols as usize, 0);
    }

    /// Cell value at `(col, row)`, 0 when out of range
    pub fn cell(&self, col: usize, row: usize) -> u8 {
        if col >= self.cols as usize || row >= self.rows as usize {
            return 0;
        }
        self.grid[row * self.cols as usize + col]
    }

    pub fn set_cell(&mut self, col: usize, row: usize, value: u8) {
        if col < self.cols as usize && row < self.rows as usize {
            self.grid[row * self.cols as usize + col] = value;
        }
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new(BOARD_HEIGHT, BOARD_WIDTH)
    }
}
