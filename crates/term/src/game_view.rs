//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O) so it can be unit-tested. Each grid cell
//! becomes a `cell_w x cell_h` block at `(col * cell_w, row * cell_h)` inside
//! a one-character border, colored from the shared palette.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, PALETTE};

const BLOCK: char = '█';
const EMPTY_DOT: char = '·';

const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const EMPTY: Style = Style::new(Rgb::new(60, 60, 60), PALETTE[0]);
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const OVERLAY: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal renderer for game snapshots.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.cols as u16 * self.cell_w + 2,
            snap.rows as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for row in 0..snap.rows as u16 {
            for col in 0..snap.cols as u16 {
                let glyph = match PieceKind::from_id(snap.cell(col as usize, row as usize)) {
                    Some(kind) => block_glyph(kind),
                    None => EMPTY.glyph(EMPTY_DOT),
                };
                self.fill_cell(fb, origin_x, origin_y, col, row, glyph);
            }
        }

        if let Some(active) = snap.active {
            for p in active.cells {
                if p.col < 0 || p.row < 0 || p.col as u8 >= snap.cols || p.row as u8 >= snap.rows {
                    continue;
                }
                self.fill_cell(
                    fb,
                    origin_x,
                    origin_y,
                    p.col as u16,
                    p.row as u16,
                    block_glyph(active.kind),
                );
            }
        }

        draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.game_over() {
            let text = "GAME OVER";
            let x = origin_x + frame_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, origin_y + frame_h / 2, text, OVERLAY);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, col: u16, row: u16, glyph: Glyph) {
        let x = ox + 1 + col * self.cell_w;
        let y = oy + 1 + row * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, glyph);
    }
}

fn block_glyph(kind: PieceKind) -> Glyph {
    Style::new(kind.color(), PALETTE[0]).glyph(BLOCK)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put(x, y, BORDER.glyph('┌'));
    fb.put(x + w - 1, y, BORDER.glyph('┐'));
    fb.put(x, y + h - 1, BORDER.glyph('└'));
    fb.put(x + w - 1, y + h - 1, BORDER.glyph('┘'));
    for dx in 1..w - 1 {
        fb.put(x + dx, y, BORDER.glyph('─'));
        fb.put(x + dx, y + h - 1, BORDER.glyph('─'));
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, BORDER.glyph('│'));
        fb.put(x + w - 1, y + dy, BORDER.glyph('│'));
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) {
    if x.saturating_add(8) > viewport.width {
        return;
    }

    let rows: [(&str, u64); 3] = [
        ("PIECES", snap.pieces_spawned as u64),
        ("ROWS", snap.rows_cleared as u64),
        ("TICKS", snap.ticks),
    ];
    let mut line = y;
    for (label, value) in rows {
        fb.put_str(x, line, label, LABEL);
        fb.put_u64(x, line + 1, value, VALUE);
        line += 3;
    }

    if let Some(active) = snap.active {
        fb.put_str(x, line, "PIECE", LABEL);
        fb.put_str(x, line + 1, active.kind.letter(), Style::new(active.kind.color(), PALETTE[0]));
    }
}
