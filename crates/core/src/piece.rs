//! Piece module - the falling four-cell piece
//!
//! A piece is a kind plus four absolute grid positions. The first cell is the
//! rotation pivot. Pieces are small `Copy` values: movement produces a new
//! candidate piece which the caller commits only once it is known to fit.

use crate::grid::Grid;
use crate::types::{PieceKind, Position};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    cells: [Position; 4],
}

impl Piece {
    /// Create a piece from absolute cells. The first cell is the pivot.
    ///
    /// Panics if two cells coincide.
    pub fn new(kind: PieceKind, cells: [Position; 4]) -> Self {
        for i in 0..cells.len() {
            for j in (i + 1)..cells.len() {
                assert_ne!(cells[i], cells[j], "piece cells must be distinct");
            }
        }
        Self { kind, cells }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &[Position; 4] {
        &self.cells
    }

    /// Rotation pivot (the first cell)
    pub fn pivot(&self) -> Position {
        self.cells[0]
    }

    /// Copy of this piece shifted by `(dcol, drow)`
    pub fn translated(&self, dcol: i8, drow: i8) -> Self {
        Self {
            kind: self.kind,
            cells: self.cells.map(|p| p.translated(dcol, drow)),
        }
    }

    /// Copy of this piece rotated 90° about its pivot.
    ///
    /// Each cell's offset `(x, y)` from the pivot becomes `(-y, x)`, which is
    /// the rotation matrix for 90° with its sine and cosine rounded exactly.
    /// No bounds or occupancy check happens here.
    pub fn rotated(&self) -> Self {
        let pivot = self.pivot();
        Self {
            kind: self.kind,
            cells: self.cells.map(|p| {
                let x = p.col - pivot.col;
                let y = p.row - pivot.row;
                Position::new(pivot.col - y, pivot.row + x)
            }),
        }
    }

    /// Check if all cells are within bounds and on empty grid cells
    pub fn is_valid(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&p| grid.is_free(p))
    }

    /// Check if any cell rests on the floor or on a settled cell
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        self.cells.iter().any(|&p| grid.rests_on(p))
    }

    /// Whether any cell lies at `pos`
    pub fn covers(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Largest row index among the cells
    pub fn bottom_row(&self) -> i8 {
        self.cells.iter().map(|p| p.row).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_piece() -> Piece {
        Piece::new(
            PieceKind::T,
            [
                Position::new(5, 1),
                Position::new(4, 1),
                Position::new(6, 1),
                Position::new(5, 0),
            ],
        )
    }

    #[test]
    fn test_rotation_keeps_pivot() {
        let piece = t_piece();
        let rotated = piece.rotated();
        assert_eq!(rotated.pivot(), piece.pivot());
        assert_eq!(rotated.kind(), PieceKind::T);
    }

    #[test]
    fn test_rotation_is_quarter_turn() {
        // (4,1) is one column left of the pivot: offset (-1, 0) -> (0, -1).
        let rotated = t_piece().rotated();
        assert_eq!(
            rotated.cells(),
            &[
                Position::new(5, 1),
                Position::new(5, 0),
                Position::new(5, 2),
                Position::new(6, 1),
            ]
        );
    }

    #[test]
    fn test_translated_moves_every_cell() {
        let moved = t_piece().translated(-2, 3);
        assert_eq!(moved.pivot(), Position::new(3, 4));
        assert_eq!(moved.bottom_row(), 4);
    }

    #[test]
    #[should_panic(expected = "distinct")]
    fn test_duplicate_cells_rejected() {
        let p = Position::new(0, 0);
        Piece::new(PieceKind::O, [p, p, Position::new(1, 0), Position::new(1, 1)]);
    }
}
