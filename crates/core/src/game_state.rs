//! Game state module - the session state machine
//!
//! This module ties together the grid, the falling piece and the randomizer.
//! It runs gravity on a tick cadence, evaluates collisions, and applies the
//! settle → clear → spawn sequence when a piece lands.

use log::{debug, info, warn};

use crate::catalog;
use crate::config::{ConfigError, GameConfig};
use crate::grid::{ClearedRows, Grid};
use crate::piece::Piece;
use crate::rng::Randomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Phase, PieceKind, Position, TOP_OUT_ROW};

/// Result of scanning the falling piece against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// No cell rests on anything; the piece can move down.
    Free,
    /// At least one cell rests on the floor or a settled cell.
    Landed,
    /// A resting cell was found on the top-out row.
    TopOut,
}

/// Scan the four cells in order. A cell collides when it sits on the last
/// row or the cell below it is occupied. The first colliding cell found on
/// [`TOP_OUT_ROW`] ends the scan.
pub fn scan_collision(grid: &Grid, piece: &Piece) -> Collision {
    let mut landed = false;
    for &cell in piece.cells() {
        if grid.rests_on(cell) {
            landed = true;
            if cell.row == TOP_OUT_ROW {
                return Collision::TopOut;
            }
        }
    }
    if landed {
        Collision::Landed
    } else {
        Collision::Free
    }
}

/// Emitted every time a piece settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettleEvent {
    pub kind: PieceKind,
    pub cells: [Position; 4],
    pub cleared_rows: ClearedRows,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    active: Option<Piece>,
    rng: Randomizer,
    phase: Phase,
    /// Ticks since the last gravity step
    gravity_timer: u32,
    ticks: u64,
    pieces_spawned: u32,
    rows_cleared: u32,
    /// Last settle event (consumed by observers).
    last_event: Option<SettleEvent>,
}

impl GameState {
    /// Create a new game on the reference grid with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameConfig::default(), Randomizer::new(seed))
    }

    /// Create a new game with a custom configuration
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_rng(config, Randomizer::new(seed)))
    }

    /// Create a new game from an already validated configuration and randomizer
    pub fn with_rng(config: GameConfig, rng: Randomizer) -> Self {
        debug_assert_eq!(config.validate(), Ok(()));
        Self {
            config,
            grid: Grid::new(config.rows, config.cols),
            active: None,
            rng,
            phase: Phase::Spawning,
            gravity_timer: 0,
            ticks: 0,
            pieces_spawned: 0,
            rows_cleared: 0,
            last_event: None,
        }
    }

    /// Spawn the first piece. Does nothing once a piece exists or the game ended.
    pub fn start(&mut self) {
        if self.phase != Phase::Spawning || self.active.is_some() {
            return;
        }
        info!(
            "starting game on a {}x{} grid, gravity every {} ticks",
            self.config.rows, self.config.cols, self.config.gravity_ticks
        );
        self.spawn_piece();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for scripted setups (puzzles, tests).
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    /// Replace the falling piece.
    ///
    /// Rejected after game over or when the piece does not fit the grid.
    pub fn set_active(&mut self, piece: Piece) -> bool {
        if self.game_over() || !piece.is_valid(&self.grid) {
            return false;
        }
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Take and clear the last settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// Collision state of the falling piece, if any
    pub fn collision(&self) -> Option<Collision> {
        self.active.map(|piece| scan_collision(&self.grid, &piece))
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.resize(self.grid.rows(), self.grid.cols());
        self.grid.write_ids(&mut out.grid);
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.pieces_spawned = self.pieces_spawned;
        out.rows_cleared = self.rows_cleared;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.grid.rows(), self.grid.cols());
        self.snapshot_into(&mut s);
        s
    }

    /// Draw a random kind and place it at the spawn position
    fn spawn_piece(&mut self) {
        self.phase = Phase::Spawning;
        let piece = catalog::spawn_random(&mut self.rng, self.grid.cols());
        if !piece.is_valid(&self.grid) {
            warn!("spawned {:?} overlaps settled cells", piece.kind());
        }
        debug!("spawned {:?} at {:?}", piece.kind(), piece.cells());

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.phase = Phase::Falling;
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        info!(
            "game over after {} pieces, {} rows cleared",
            self.pieces_spawned, self.rows_cleared
        );
    }

    /// Write the falling piece into the grid, clear full rows, spawn the next piece
    fn settle_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.grid.settle(&piece);
        let cleared_rows = self.grid.clear_full_rows();
        self.rows_cleared += cleared_rows.len() as u32;

        if cleared_rows.is_empty() {
            debug!("settled {:?} at {:?}", piece.kind(), piece.cells());
        } else {
            debug!(
                "settled {:?}, cleared rows {:?}",
                piece.kind(),
                cleared_rows.as_slice()
            );
        }

        self.last_event = Some(SettleEvent {
            kind: piece.kind(),
            cells: *piece.cells(),
            cleared_rows,
        });

        self.spawn_piece();
    }

    /// One collision evaluation.
    ///
    /// A top-out ends the game, a landed piece is settled, and a free piece
    /// moves down one row when `advance` is set.
    fn step(&mut self, advance: bool) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        match scan_collision(&self.grid, &active) {
            Collision::TopOut => {
                self.end_game();
                true
            }
            Collision::Landed => {
                self.settle_active();
                true
            }
            Collision::Free if advance => {
                self.active = Some(active.translated(0, 1));
                true
            }
            Collision::Free => false,
        }
    }

    /// Single gravity step: settle if landed, otherwise move down one row
    pub fn step_down(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        self.step(true)
    }

    /// Main game tick.
    ///
    /// Every tick evaluates collision so a resting piece settles on the next
    /// tick; every `gravity_ticks` ticks a free piece also moves down.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        self.ticks += 1;
        self.gravity_timer += 1;
        let advance = self.gravity_timer >= self.config.gravity_ticks;
        if advance {
            self.gravity_timer = 0;
        }

        self.step(advance)
    }

    /// Try to shift the falling piece sideways. All four cells must land
    /// inside the grid on empty cells, otherwise nothing changes.
    fn try_shift(&mut self, dcol: i8) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.translated(dcol, 0);
        if !moved.is_valid(&self.grid) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate the falling piece about its pivot.
    ///
    /// The rotation is rejected when any rotated cell would leave the grid or
    /// overlap a settled cell.
    pub fn rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.rotated();
        if !rotated.is_valid(&self.grid) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Drop the falling piece until it rests on the floor or a settled cell.
    ///
    /// The piece is not settled here: that happens on the next collision
    /// evaluation. A piece already resting when the drop arrives is evaluated
    /// immediately instead.
    pub fn hard_drop(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(mut piece) = self.active else {
            return false;
        };

        let mut rows: u8 = 0;
        while rows < self.grid.rows() && scan_collision(&self.grid, &piece) == Collision::Free {
            piece = piece.translated(0, 1);
            rows += 1;
        }

        if rows == 0 {
            return self.step(false);
        }

        self.active = Some(piece);
        true
    }

    /// Apply an input command. Returns whether the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Drop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
