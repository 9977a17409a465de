//! Terminal rendering for the falling-block game.
//!
//! Snapshots are drawn into a framebuffer by [`GameView`] (pure, testable)
//! and flushed to the terminal by [`TerminalRenderer`], which only rewrites
//! glyphs that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
