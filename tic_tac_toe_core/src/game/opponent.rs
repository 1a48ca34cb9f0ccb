//! The computer opponent: a uniform pick among the empty cells.

use rand::Rng;
use tracing::debug;

use super::models::{GameState, Mode, Position};
use crate::error::IllegalMove;

impl GameState {
    /// Plays a uniformly random empty cell for the current player.
    ///
    /// Empty cells are gathered in row-major order and one is picked with
    /// `rng.gen_range(0..k)`, so a seeded or mock generator gives a
    /// reproducible game.
    pub fn computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Position, IllegalMove> {
        if self.is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if self.mode == Mode::Menu {
            return Err(IllegalMove::NoGameSelected);
        }

        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return Err(IllegalMove::GameOver);
        }

        let choice = empty[rng.gen_range(0..empty.len())];
        debug!(
            "Computer picked ({}, {}) out of {} empty cells",
            choice.row,
            choice.col,
            empty.len()
        );

        self.apply_move(choice.row, choice.col)?;
        Ok(choice)
    }
}
