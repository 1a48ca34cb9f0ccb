//! Board geometry: where cells are drawn and which cell a click lands in.

use eframe::egui;
use tic_tac_toe_core::{Position, BOARD_SIZE};

/// Side of one cell in points.
pub const CELL: f32 = 150.0;
pub const BOARD_PIXELS: f32 = CELL * BOARD_SIZE as f32;

/// The cell under `offset`, measured from the board's top-left corner.
pub fn cell_at(offset: egui::Vec2, cell_size: f32) -> Option<Position> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let col = (offset.x / cell_size) as usize;
    let row = (offset.y / cell_size) as usize;
    Position::new(row, col)
}

pub fn cell_center(origin: egui::Pos2, pos: Position, cell_size: f32) -> egui::Pos2 {
    origin
        + egui::vec2(
            (pos.col as f32 + 0.5) * cell_size,
            (pos.row as f32 + 0.5) * cell_size,
        )
}
