//! Game module - ties the board, movement and spawning together
//!
//! A `Game` owns exactly one board and one RNG. Each move runs to completion
//! before the next one is accepted, so callers only ever observe the pre-move
//! and post-move grid.

use crate::core::board::{Board, BoardError};
use crate::core::movement::shift;
use crate::core::rng::{spawn_tiles, SimpleRng};
use crate::types::{Direction, SPAWN_TILES_PER_MOVE};

/// Complete game state: the grid plus the spawn RNG
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: SimpleRng,
    started: bool,
}

impl Game {
    /// Create a new game on an empty `size` x `size` board with the given RNG seed
    pub fn new(size: usize, seed: u32) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            rng: SimpleRng::new(seed),
            started: false,
        })
    }

    /// Create a game over a pre-populated board (used by tests)
    pub fn from_board(board: Board, seed: u32) -> Self {
        Self {
            board,
            rng: SimpleRng::new(seed),
            started: true,
        }
    }

    /// Spawn the starting tiles
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        spawn_tiles(&mut self.board, &mut self.rng, SPAWN_TILES_PER_MOVE);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// The current grid
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply one full move: slide/merge towards `direction`, then spawn.
    ///
    /// The spawn step runs after every move and fills up to
    /// `SPAWN_TILES_PER_MOVE` empty cells; a full board simply spawns none.
    /// Returns true when the slide/merge pass changed any cell.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        let moved = shift(&mut self.board, direction);
        spawn_tiles(&mut self.board, &mut self.rng, SPAWN_TILES_PER_MOVE);
        moved
    }

    /// Clear the board and spawn a fresh set of starting tiles
    pub fn reset(&mut self) {
        self.board.clear();
        self.started = false;
        self.start();
    }
}
