use clap::Parser;
use tic_tac_toe_core::cli::GameOptions;

/// Tic-tac-toe in the terminal, against a friend or a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe_console")]
#[command(version, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub game: GameOptions,

    /// Also print the full game state as a JSON line after every move
    #[arg(long)]
    pub json: bool,
}
