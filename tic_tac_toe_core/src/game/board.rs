use serde::{Deserialize, Serialize};

use super::models::{Outcome, Player, Position};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

// Rows, then columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A 3x3 grid indexed `[row][col]`. `None` is an empty cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows, mostly useful for tests and replays.
    pub fn from_rows(cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The mark at `(row, col)`, or `None` when empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    pub fn rows(&self) -> &[[Option<Player>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub(crate) fn place(&mut self, position: Position, player: Player) {
        self.cells[position.row][position.col] = Some(player);
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell.is_some()))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
            .filter(|pos| self.cells[pos.row][pos.col].is_none())
            .collect()
    }

    /// The player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a.0][a.1]?;
            (self.cells[b.0][b.1] == Some(mark) && self.cells[c.0][c.1] == Some(mark))
                .then_some(mark)
        })
    }

    /// Whether the game on this board is over, and how.
    ///
    /// A complete line wins; otherwise a full board is a draw and anything
    /// else means play continues.
    pub fn evaluate(&self) -> Option<Outcome> {
        if let Some(player) = self.winner() {
            Some(Outcome::Winner(player))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}
