//! Tic-tac-toe rules shared by the graphical and console games.
//!
//! [`GameState`] is the whole game: the board, whose turn it is, the
//! selected [`Mode`] and the [`Outcome`] once the game has ended. Shells own
//! one value and drive it through [`GameState::apply_move`],
//! [`GameState::computer_move`] and [`GameState::reset`].

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod game;
pub mod score;

pub use error::IllegalMove;
pub use game::board::{Board, BOARD_SIZE};
pub use game::message::{format_move, parse_command, parse_move, Command};
pub use game::models::{GameState, Mode, Outcome, Player, Position};
pub use score::Scoreboard;
