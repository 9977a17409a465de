//! Falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, tests and
//! benches can use `blockfall::{core, input, term, types}`.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
