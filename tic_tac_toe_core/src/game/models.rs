use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use super::board::{Board, BOARD_SIZE};
use crate::error::IllegalMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mark())
    }
}

/// Which kind of game is being played. `Menu` means none has been picked yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Menu,
    HumanVsHuman,
    /// The human plays X, the computer answers as O.
    HumanVsComputer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// A position on the board, or `None` if either coordinate is out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub mode: Mode,
    pub outcome: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X,
            mode: Mode::Menu,
            outcome: None,
        }
    }
}

impl GameState {
    /// A fresh game already in `mode`.
    pub fn new(mode: Mode) -> Self {
        GameState {
            mode,
            ..GameState::default()
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Clears the board and hands the first move back to X. The mode is kept.
    pub fn reset(&mut self) {
        *self = GameState::new(self.mode);
        info!("Game reset. Mode: {:?}", self.mode);
    }

    /// Leaves the menu (or the current game) for a fresh game in `mode`.
    pub fn start(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    pub fn return_to_menu(&mut self) {
        self.start(Mode::Menu);
    }

    /// True when the computer opponent should play next.
    pub fn computer_to_move(&self) -> bool {
        self.mode == Mode::HumanVsComputer
            && !self.is_terminal()
            && self.current_player == Player::O
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns the outcome if this move ended the game. On error nothing
    /// changes. After a winning move `current_player` is still the winner.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Option<Outcome>, IllegalMove> {
        if self.is_terminal() {
            debug!("Move rejected: Game is already over.");
            return Err(IllegalMove::GameOver);
        }
        if self.mode == Mode::Menu {
            debug!("Move rejected: No mode selected.");
            return Err(IllegalMove::NoGameSelected);
        }
        let position = Position::new(row, col).ok_or_else(|| {
            debug!("Move rejected: ({}, {}) out of bounds.", row, col);
            IllegalMove::OutOfBounds { row, col }
        })?;
        if self.board.get(row, col).is_some() {
            debug!("Move rejected: ({}, {}) already taken.", row, col);
            return Err(IllegalMove::Occupied { row, col });
        }

        let player = self.current_player;
        self.board.place(position, player);
        self.outcome = self.board.evaluate();

        match self.outcome {
            Some(Outcome::Winner(winner)) => info!("Game over: {} wins.", winner),
            Some(Outcome::Draw) => info!("Game over: It's a draw."),
            None => {
                self.current_player = player.other();
                debug!("Turn switched: Now it's {}'s turn.", self.current_player);
            }
        }

        Ok(self.outcome)
    }
}
