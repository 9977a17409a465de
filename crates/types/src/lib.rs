//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be
//! shared by the core rules, the terminal view and the input mapper.
//!
//! # Grid Dimensions
//!
//! Reference playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: column `width / 2`, row 0
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 Hz) |
//! | `GRAVITY_TICKS` | 30 | Ticks between gravity steps |
//!
//! Gravity is counted in ticks, not wall time: the clock only decides how
//! often a tick happens.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Piece ids are 1..=7, zero is reserved for empty cells.
//! assert_eq!(PieceKind::T.id(), 1);
//! assert_eq!(PieceKind::from_id(2), Some(PieceKind::I));
//! assert_eq!(PieceKind::from_id(0), None);
//!
//! // Positions are (column, row)
//! let p = Position::new(4, 0).translated(1, 2);
//! assert_eq!(p, Position::new(5, 2));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 Hz)
pub const TICK_MS: u32 = 16;

/// Number of ticks between two gravity steps
pub const GRAVITY_TICKS: u32 = 30;

/// A piece that collides while one of its colliding cells sits on this row
/// ends the game.
pub const TOP_OUT_ROW: i8 = 1;

/// The seven piece kinds.
///
/// The discriminant is the cell value stored in the grid, so `0` is never a
/// valid kind and can stand for an empty cell in integer views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    T = 1,
    I = 2,
    J = 3,
    L = 4,
    O = 5,
    S = 6,
    Z = 7,
}

/// All kinds in id order.
pub const PIECE_KINDS: [PieceKind; 7] = [
    PieceKind::T,
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::Z,
];

impl PieceKind {
    /// Cell value for this kind (1..=7).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its cell value. `0` and anything above 7 yield `None`.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(PIECE_KINDS[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Single uppercase letter for display
    pub fn letter(self) -> &'static str {
        match self {
            PieceKind::T => "T",
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }

    /// Display color from [`PALETTE`].
    pub fn color(self) -> Rgb {
        PALETTE[self.id() as usize]
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell settled by a piece of that kind
pub type Cell = Option<PieceKind>;

/// Integer view of a cell: `0` for empty, otherwise the kind id.
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::id)
}

/// A grid coordinate. Rows grow downward, columns grow rightward,
/// `(0, 0)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Position shifted by `(dcol, drow)`
    pub const fn translated(self, dcol: i8, drow: i8) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Cell colors indexed by cell value. Index 0 is the empty background.
pub const PALETTE: [Rgb; 8] = [
    Rgb::new(0, 0, 0),     // empty
    Rgb::new(255, 0, 0),   // T
    Rgb::new(0, 255, 0),   // I
    Rgb::new(0, 0, 255),   // J
    Rgb::new(0, 255, 255), // L
    Rgb::new(255, 165, 0), // O
    Rgb::new(255, 0, 255), // S
    Rgb::new(255, 255, 0), // Z
];

/// Lifecycle phase of a game session.
///
/// - **Spawning**: no falling piece; a new one is about to be drawn
/// - **Falling**: a piece is falling and accepts commands
/// - **GameOver**: terminal, every command and tick is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    GameOver,
}

/// Commands an input source can issue between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Drop the piece until it rests on the floor or a settled cell
    Drop,
    /// Rotate piece 90° about its pivot cell
    Rotate,
}
