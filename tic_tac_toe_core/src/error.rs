use thiserror::Error;

/// Why a move was refused. The game state is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the game is over, restart to play again")]
    GameOver,

    #[error("no game selected, pick a mode first")]
    NoGameSelected,

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    #[error("can't read move {0:?}, use a row letter A-C and a column digit 1-3 (e.g. B2)")]
    Unparseable(String),
}
