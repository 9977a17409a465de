//! Catalog module - the seven canonical shapes and their spawn layout
//!
//! Offsets are `(dcol, drow)` relative to the spawn anchor `(cols / 2, 0)`.
//! The first offset of every entry is the rotation pivot.
//!
//! Spawn layout on a 10-wide grid:
//!
//! ```text
//!     col  3 4 5 6
//! T  row0      #         I  row0  # # # #
//!    row1    # # #
//! J  row0    #           L  row0        #
//!    row1    # # #          row1    # # #
//! O  row0      # #       S  row0      # #     Z  row0    # #
//!    row1      # #          row1    # #          row1      # #
//! ```

use crate::piece::Piece;
use crate::rng::Randomizer;
use crate::types::{PieceKind, Position};

/// Offset of a single cell relative to the spawn anchor
pub type CellOffset = (i8, i8);

/// Spawn offsets for one kind, pivot first
pub type SpawnShape = [CellOffset; 4];

const T_SPAWN: SpawnShape = [(0, 1), (-1, 1), (1, 1), (0, 0)];
const I_SPAWN: SpawnShape = [(-2, 0), (-1, 0), (0, 0), (1, 0)];
const J_SPAWN: SpawnShape = [(0, 1), (-1, 1), (-1, 0), (1, 1)];
const L_SPAWN: SpawnShape = [(0, 1), (-1, 1), (1, 1), (1, 0)];
const O_SPAWN: SpawnShape = [(0, 0), (0, 1), (1, 0), (1, 1)];
const S_SPAWN: SpawnShape = [(0, 1), (0, 0), (-1, 1), (1, 0)];
const Z_SPAWN: SpawnShape = [(0, 1), (0, 0), (-1, 0), (1, 1)];

/// Get the spawn offsets for a piece kind
pub fn spawn_shape(kind: PieceKind) -> SpawnShape {
    match kind {
        PieceKind::T => T_SPAWN,
        PieceKind::I => I_SPAWN,
        PieceKind::J => J_SPAWN,
        PieceKind::L => L_SPAWN,
        PieceKind::O => O_SPAWN,
        PieceKind::S => S_SPAWN,
        PieceKind::Z => Z_SPAWN,
    }
}

/// Spawn anchor column for a grid `cols` wide
pub fn spawn_column(cols: u8) -> i8 {
    (cols / 2) as i8
}

/// Absolute spawn cells for a kind on a grid `cols` wide
pub fn spawn_cells(kind: PieceKind, cols: u8) -> [Position; 4] {
    let anchor = Position::new(spawn_column(cols), 0);
    spawn_shape(kind).map(|(dc, dr)| anchor.translated(dc, dr))
}

/// Create a piece of the given kind at its spawn position
pub fn spawn(kind: PieceKind, cols: u8) -> Piece {
    Piece::new(kind, spawn_cells(kind, cols))
}

/// Create a piece of a uniformly random kind at its spawn position
pub fn spawn_random(rng: &mut Randomizer, cols: u8) -> Piece {
    spawn(rng.next_kind(), cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PIECE_KINDS;

    #[test]
    fn test_i_spawns_horizontal_on_top_row() {
        let cells = spawn_cells(PieceKind::I, 10);
        let cols: Vec<i8> = cells.iter().map(|p| p.col).collect();
        assert_eq!(cols, vec![3, 4, 5, 6]);
        assert!(cells.iter().all(|p| p.row == 0));
    }

    #[test]
    fn test_spawn_shapes_use_top_two_rows() {
        for kind in PIECE_KINDS {
            for (dc, dr) in spawn_shape(kind) {
                assert!((-2..=1).contains(&dc), "{kind:?} column offset {dc}");
                assert!((0..=1).contains(&dr), "{kind:?} row offset {dr}");
            }
        }
    }

    #[test]
    fn test_spawn_fits_narrow_grid() {
        for kind in PIECE_KINDS {
            for p in spawn_cells(kind, 4) {
                assert!(p.col >= 0 && p.col < 4, "{kind:?} at {p:?}");
            }
        }
    }
}
