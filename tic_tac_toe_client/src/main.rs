mod config;
mod game_app;
mod layout;

use anyhow::Result;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use config::Args;
use game_app::GameApp;

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mode = args.game.mode();
    let rng = args.game.rng();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 640.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(GameApp::new(mode, rng)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open the game window: {e}"))
}
