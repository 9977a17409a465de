//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and session state. It has no
//! dependencies on terminals, windows or input devices, making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule can be driven tick by tick from tests
//! - **Portable**: any renderer can consume a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`grid`]: settled cells, row-full test, compaction, clearing
//! - [`piece`]: the falling four-cell piece, translation and rotation
//! - [`catalog`]: the seven shapes and their spawn layout
//! - [`rng`]: uniform random piece selection
//! - [`config`]: grid size and gravity cadence, with validation
//! - [`game_state`]: the session state machine
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Gravity**: every `gravity_ticks` ticks (30 by default) the piece moves down one row
//! - **Collision**: a cell collides when it is on the last row or the cell below is settled
//! - **Settle**: a colliding piece is written into the grid on the next evaluation,
//!   then full rows are cleared and a new piece spawns
//! - **Top-out**: a colliding cell on row 1 ends the game
//! - **Rotation**: 90° about the first cell, rejected if the result does not fit
//! - **Drop**: moves the piece down until it rests; it settles on the next evaluation
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Drop);
//! game.tick();
//!
//! assert_eq!(game.grid().filled_count(), 4);
//! assert_eq!(game.pieces_spawned(), 2);
//! ```

pub mod catalog;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use game_state::{scan_collision, Collision, GameState, SettleEvent};
pub use grid::{ClearedRows, Grid};
pub use piece::Piece;
pub use rng::Randomizer;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
