use eframe::egui;
use rand::Rng;
use tic_tac_toe_core::{format_move, GameState, Mode, Outcome, Player, Position, Scoreboard};
use tracing::{debug, info};

use crate::layout::{cell_at, cell_center, BOARD_PIXELS, CELL};

const X_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 99, 71);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(34, 139, 34);

pub struct GameApp<G> {
    state: GameState,
    score: Scoreboard,
    rng: G,
}

impl<G: Rng> GameApp<G> {
    pub fn new(mode: Mode, rng: G) -> Self {
        info!("Opening in {:?} mode", mode);
        Self {
            state: GameState::new(mode),
            score: Scoreboard::default(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    /// A click on `pos`. In computer mode the reply is played straight away.
    pub fn handle_click(&mut self, pos: Position) {
        match self.state.apply_move(pos.row, pos.col) {
            Ok(outcome) => self.after_move(outcome),
            Err(err) => {
                debug!("Ignoring click on {}: {}", format_move(pos), err);
                return;
            }
        }

        if self.state.computer_to_move() {
            match self.state.computer_move(&mut self.rng) {
                Ok(reply) => {
                    debug!("Computer plays {}", format_move(reply));
                    let outcome = self.state.outcome;
                    self.after_move(outcome);
                }
                Err(err) => debug!("Computer could not move: {}", err),
            }
        }
    }

    pub fn choose_mode(&mut self, mode: Mode) {
        self.state.start(mode);
    }

    pub fn restart(&mut self) {
        if self.state.mode != Mode::Menu {
            self.state.reset();
        }
    }

    pub fn back_to_menu(&mut self) {
        self.state.return_to_menu();
    }

    /// `R` restarts, `M`/`Escape` leaves for the menu. Menu wins if both are down.
    pub fn handle_keys(&mut self, restart: bool, menu: bool) {
        if menu {
            self.back_to_menu();
        } else if restart {
            self.restart();
        }
    }

    fn after_move(&mut self, outcome: Option<Outcome>) {
        if let Some(outcome) = outcome {
            self.score.record(outcome);
            info!("Finished: {:?}. Score: {}", outcome, self.score);
        }
    }

    fn render_menu(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(egui::RichText::new("Tic-Tac-Toe").size(40.0));
            ui.add_space(40.0);

            for (label, mode) in [
                ("Human vs Human", Mode::HumanVsHuman),
                ("Human vs Computer", Mode::HumanVsComputer),
            ] {
                if ui
                    .add(
                        egui::Button::new(egui::RichText::new(label).size(25.0))
                            .min_size(egui::vec2(280.0, 50.0)),
                    )
                    .clicked()
                {
                    self.choose_mode(mode);
                }
                ui.add_space(15.0);
            }

            if self.score.games_played() > 0 {
                ui.add_space(20.0);
                ui.label(egui::RichText::new(self.score.to_string()).size(20.0));
            }
        });
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(BOARD_PIXELS, BOARD_PIXELS), egui::Sense::click());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

        let stroke = egui::Stroke::new(3.0, egui::Color32::BLACK);
        for i in 1..3 {
            let offset = i as f32 * CELL;
            painter.line_segment(
                [
                    egui::pos2(rect.min.x + offset, rect.min.y),
                    egui::pos2(rect.min.x + offset, rect.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(rect.min.x, rect.min.y + offset),
                    egui::pos2(rect.max.x, rect.min.y + offset),
                ],
                stroke,
            );
        }

        for (row, cells) in self.state.board.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(player) = cell {
                    painter.text(
                        cell_center(rect.min, Position { row, col }, CELL),
                        egui::Align2::CENTER_CENTER,
                        player.mark(),
                        egui::FontId::proportional(80.0),
                        match player {
                            Player::X => X_COLOR,
                            Player::O => O_COLOR,
                        },
                    );
                }
            }
        }

        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                if let Some(pos) = cell_at(pointer - rect.min, CELL) {
                    self.handle_click(pos);
                }
            }
        }
    }

    fn display_game_status(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(self.score.to_string())
                .size(24.0)
                .color(egui::Color32::from_rgb(0, 191, 255)),
        );

        ui.add_space(10.0);

        match self.state.outcome {
            Some(outcome) => {
                let status_message = match outcome {
                    Outcome::Winner(player) => format!("PLAYER {} WINS", player),
                    Outcome::Draw => "DRAW".to_string(),
                };
                ui.label(
                    egui::RichText::new(status_message)
                        .size(30.0)
                        .color(egui::Color32::RED),
                );
                ui.label(
                    egui::RichText::new("Press R to Restart, M for the menu")
                        .size(20.0)
                        .color(egui::Color32::GRAY),
                );
            }
            None => {
                let turn_message = format!("{}'s turn", self.state.current_player);
                ui.label(egui::RichText::new(turn_message).size(30.0).color(
                    match self.state.current_player {
                        Player::X => X_COLOR,
                        Player::O => O_COLOR,
                    },
                ));
            }
        }
    }
}

impl<G: Rng + 'static> eframe::App for GameApp<G> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (restart, menu) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::M) || i.key_pressed(egui::Key::Escape),
            )
        });
        self.handle_keys(restart, menu);

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.mode == Mode::Menu {
                self.render_menu(ui);
            } else {
                ui.vertical_centered(|ui| {
                    self.render_board(ui);
                    ui.add_space(10.0);
                    self.display_game_status(ui);
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn app(mode: Mode) -> GameApp<StepRng> {
        GameApp::new(mode, StepRng::new(0, 0))
    }

    fn click(app: &mut GameApp<StepRng>, row: usize, col: usize) {
        app.handle_click(Position { row, col });
    }

    #[test]
    fn clicks_alternate_players_in_two_player_mode() {
        let mut app = app(Mode::HumanVsHuman);
        click(&mut app, 0, 0);
        click(&mut app, 1, 1);

        assert_eq!(app.state().board.get(0, 0), Some(Player::X));
        assert_eq!(app.state().board.get(1, 1), Some(Player::O));
        assert_eq!(app.state().current_player, Player::X);
    }

    #[test]
    fn computer_replies_to_each_click() {
        let mut app = app(Mode::HumanVsComputer);
        click(&mut app, 1, 1);

        assert_eq!(app.state().board.get(0, 0), Some(Player::O));
        assert_eq!(app.state().current_player, Player::X);
        assert_eq!(app.state().board.empty_cells().len(), 7);
    }

    #[test]
    fn clicks_on_taken_cells_change_nothing() {
        let mut app = app(Mode::HumanVsComputer);
        click(&mut app, 1, 1);
        let before = app.state().clone();

        click(&mut app, 0, 0);
        click(&mut app, 1, 1);

        assert_eq!(app.state(), &before);
    }

    #[test]
    fn clicks_in_menu_are_ignored() {
        let mut app = app(Mode::Menu);
        click(&mut app, 0, 0);
        assert_eq!(app.state(), &GameState::default());
    }

    #[test]
    fn finished_game_is_scored_once() {
        let mut app = app(Mode::HumanVsHuman);
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            click(&mut app, row, col);
        }
        click(&mut app, 2, 2);

        assert_eq!(app.state().outcome, Some(Outcome::Winner(Player::X)));
        assert_eq!(app.score().x_wins, 1);
        assert_eq!(app.score().games_played(), 1);
    }

    #[test]
    fn computer_win_is_scored() {
        // X: C3, C2, B3   O (first empty each time): A1, A2, A3
        let mut app = app(Mode::HumanVsComputer);
        click(&mut app, 2, 2);
        click(&mut app, 2, 1);
        click(&mut app, 1, 2);

        assert_eq!(app.state().outcome, Some(Outcome::Winner(Player::O)));
        assert_eq!(app.score().o_wins, 1);
    }

    #[test]
    fn restart_keeps_mode_and_score() {
        let mut app = app(Mode::HumanVsHuman);
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
            click(&mut app, row, col);
        }
        app.restart();

        assert_eq!(app.state(), &GameState::new(Mode::HumanVsHuman));
        assert_eq!(app.score().x_wins, 1);
    }

    #[test]
    fn menu_then_new_mode() {
        let mut app = app(Mode::HumanVsHuman);
        click(&mut app, 0, 0);
        app.back_to_menu();
        assert_eq!(app.state().mode, Mode::Menu);

        app.restart();
        assert_eq!(app.state().mode, Mode::Menu);

        app.choose_mode(Mode::HumanVsComputer);
        assert_eq!(app.state(), &GameState::new(Mode::HumanVsComputer));
    }

    #[test]
    fn restart_key_clears_a_finished_game() {
        let mut app = app(Mode::HumanVsComputer);
        click(&mut app, 2, 2);
        click(&mut app, 2, 1);
        click(&mut app, 1, 2);
        assert!(app.state().is_terminal());

        app.handle_keys(true, false);

        assert_eq!(app.state(), &GameState::new(Mode::HumanVsComputer));
        assert_eq!(app.score().o_wins, 1);
    }

    #[test]
    fn menu_key_leaves_the_game() {
        let mut app = app(Mode::HumanVsHuman);
        click(&mut app, 0, 0);

        app.handle_keys(false, true);

        assert_eq!(app.state(), &GameState::default());
    }

    #[test]
    fn no_keys_change_nothing() {
        let mut app = app(Mode::HumanVsHuman);
        click(&mut app, 0, 0);
        let before = app.state().clone();

        app.handle_keys(false, false);

        assert_eq!(app.state(), &before);
    }

    #[test]
    fn restart_key_in_menu_stays_in_menu() {
        let mut app = app(Mode::Menu);
        app.handle_keys(true, false);
        assert_eq!(app.state().mode, Mode::Menu);

        app.handle_keys(true, true);
        assert_eq!(app.state().mode, Mode::Menu);
    }
}
