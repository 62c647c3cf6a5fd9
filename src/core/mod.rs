//! Core module - pure game logic with no external dependencies
//!
//! This module contains the board, the slide/merge rules, the spawn step and
//! the game lifecycle. It has zero dependencies on UI, terminal, or I/O.

pub mod board;
pub mod game;
pub mod movement;
pub mod rng;

// Re-export commonly used types
pub use board::{Board, BoardError};
pub use game::Game;
pub use movement::{compact, shift};
pub use rng::{spawn_tiles, SimpleRng};
