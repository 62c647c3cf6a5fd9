//! Terminal 2048.
//!
//! `core` holds the deterministic game mechanics (board, slide/merge rules,
//! seeded spawning) with no I/O dependencies; `input` maps key events to game
//! actions and `term` renders the grid through a small framebuffer layer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
