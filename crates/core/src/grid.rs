//! Grid module - the settled cells of the playfield
//!
//! The grid is a `rows x cols` matrix where each cell is empty or holds the
//! kind of the piece that settled there. Storage is one row-major buffer with
//! a stride, so a row is a contiguous slice.
//! Coordinates: `Position { col, row }`, col ranges `0..cols` (left to right),
//! row ranges `0..rows` (top to bottom).

use arrayvec::ArrayVec;

use crate::config::{MAX_COLS, MAX_ROWS};
use crate::piece::Piece;
use crate::types::{cell_id, Cell, Position};

/// Rows cleared by one pass, in scan order (top to bottom).
///
/// Sized to the tallest grid so every row can be recorded.
pub type ClearedRows = ArrayVec<u8, { MAX_ROWS as usize }>;

/// The settled cells of the playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u8,
    cols: u8,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or larger than [`MAX_ROWS`] /
    /// [`MAX_COLS`].
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(rows > 0 && cols > 0, "grid must not be empty");
        assert!(
            rows <= MAX_ROWS && cols <= MAX_COLS,
            "grid {rows}x{cols} exceeds {MAX_ROWS}x{MAX_COLS}"
        );
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Index of the bottom row
    pub fn last_row(&self) -> i8 {
        self.rows as i8 - 1
    }

    /// Check if position lies inside the grid
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.col >= 0 && pos.row >= 0 && pos.col < self.cols as i8 && pos.row < self.rows as i8
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and holds a settled cell
    pub fn occupied(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// A cell at `pos` cannot fall further: it sits on the bottom row or the
    /// cell directly below is occupied.
    pub fn rests_on(&self, pos: Position) -> bool {
        pos.row >= self.last_row() || self.occupied(pos.translated(0, 1))
    }

    /// One row as a slice. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Remove `row` and shift every row above it down by one.
    /// Row 0 becomes empty.
    pub fn compact_from(&mut self, row: usize) {
        if row >= self.rows as usize {
            return;
        }

        let width = self.cols as usize;
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }
        self.cells[..width].fill(None);
    }

    /// Clear all full rows in a single top-to-bottom pass.
    ///
    /// Each full row is compacted as soon as it is found. Compaction only
    /// moves rows that were already scanned, so the scan never needs to
    /// revisit a row.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        for row in 0..self.rows as usize {
            if self.is_row_full(row) {
                self.compact_from(row);
                cleared.push(row as u8);
            }
        }
        cleared
    }

    /// Write a piece's cells into the grid with the piece's kind.
    ///
    /// Callers must only settle pieces that lie within bounds.
    pub fn settle(&mut self, piece: &Piece) {
        for &pos in piece.cells() {
            let written = self.set(pos, Some(piece.kind()));
            debug_assert!(written, "settled cell {pos:?} out of bounds");
        }
    }

    /// Get a reference to the row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the integer view of every cell (row-major) into `out`.
    pub fn write_ids(&self, out: &mut [u8]) {
        for (dst, cell) in out.iter_mut().zip(self.cells.iter()) {
            *dst = cell_id(*cell);
        }
    }

    /// Number of settled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
