//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] commands and
//! recognises the quit keys. Only key presses matter; the runner ignores
//! repeat and release events.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
