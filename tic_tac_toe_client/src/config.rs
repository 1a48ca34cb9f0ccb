use clap::Parser;
use tic_tac_toe_core::cli::GameOptions;

/// Tic-tac-toe in a window, against a friend or a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(version, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub game: GameOptions,
}
