use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tic_tac_toe_core::{
    format_move, parse_command, Command, GameState, Mode, Outcome, Player, Scoreboard,
};
use tracing::{debug, info, warn};

use crate::render::{board_text, outcome_text};

/// How a round handed control back to the outer loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Restart,
    Menu,
    Quit,
}

/// One sitting at the console: menu, games, restarts, until the player quits
/// or input runs out.
pub struct ConsoleSession<R, W, G> {
    input: R,
    output: W,
    rng: G,
    state: GameState,
    score: Scoreboard,
    json: bool,
    // A terminal echoes the typed line, ending the prompt line for us.
    echoed_input: bool,
}

impl<R: BufRead, W: Write, G: Rng> ConsoleSession<R, W, G> {
    pub fn new(input: R, output: W, rng: G, mode: Mode) -> Self {
        Self {
            input,
            output,
            rng,
            state: GameState::new(mode),
            score: Scoreboard::default(),
            json: false,
            echoed_input: false,
        }
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Set when input comes from a terminal that echoes what is typed.
    /// Otherwise (pipes, scripts) the session ends each prompt line itself.
    pub fn with_echoed_input(mut self, echoed: bool) -> Self {
        self.echoed_input = echoed;
        self
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Tic-Tac-Toe")?;

        loop {
            if self.state.mode == Mode::Menu {
                match self.menu()? {
                    Some(mode) => self.state.start(mode),
                    None => break,
                }
            }

            match self.play_round()? {
                RoundEnd::Restart => self.state.reset(),
                RoundEnd::Menu => self.state.return_to_menu(),
                RoundEnd::Quit => break,
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()?;
        Ok(())
    }

    fn menu(&mut self) -> Result<Option<Mode>> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Select a mode:")?;
            writeln!(self.output, "  1) Human vs Human")?;
            writeln!(self.output, "  2) Human vs Computer")?;
            writeln!(self.output, "  Q) Quit")?;

            let Some(line) = self.prompt("> ")? else {
                return Ok(None);
            };

            match line.trim().to_ascii_lowercase().as_str() {
                "1" => return Ok(Some(Mode::HumanVsHuman)),
                "2" => return Ok(Some(Mode::HumanVsComputer)),
                "q" | "quit" => return Ok(None),
                other => {
                    debug!("Unknown menu choice: {:?}", other);
                    writeln!(self.output, "Please choose 1, 2 or Q.")?;
                }
            }
        }
    }

    fn play_round(&mut self) -> Result<RoundEnd> {
        info!("Starting game in {:?} mode", self.state.mode);

        loop {
            if let Some(outcome) = self.state.outcome {
                return self.finish(outcome);
            }

            if self.state.computer_to_move() {
                match self.state.computer_move(&mut self.rng) {
                    Ok(pos) => {
                        writeln!(
                            self.output,
                            "Computer ({}) plays {}",
                            Player::O,
                            format_move(pos)
                        )?;
                        self.after_move()?;
                        continue;
                    }
                    Err(err) => {
                        warn!("Computer could not move: {}", err);
                        writeln!(
                            self.output,
                            "The computer can't move ({}), back to the menu.",
                            err
                        )?;
                        return Ok(RoundEnd::Menu);
                    }
                }
            }

            writeln!(self.output)?;
            write!(self.output, "{}", board_text(&self.state.board))?;
            let prompt = format!(
                "Player {}, enter your move (e.g. B2), or R/M/Q: ",
                self.state.current_player
            );
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(RoundEnd::Quit);
            };

            match parse_command(&line) {
                Ok(Command::Move(pos)) => match self.state.apply_move(pos.row, pos.col) {
                    Ok(_) => self.after_move()?,
                    Err(err) => writeln!(self.output, "Illegal move: {}. Try again.", err)?,
                },
                Ok(Command::Restart) => return Ok(RoundEnd::Restart),
                Ok(Command::Menu) => return Ok(RoundEnd::Menu),
                Ok(Command::Quit) => return Ok(RoundEnd::Quit),
                Err(err) => writeln!(self.output, "Illegal move: {}. Try again.", err)?,
            }
        }
    }

    /// Scores a finished game and prints the JSON snapshot when asked for.
    fn after_move(&mut self) -> Result<()> {
        if let Some(outcome) = self.state.outcome {
            self.score.record(outcome);
        }
        if self.json {
            writeln!(self.output, "{}", serde_json::to_string(&self.state)?)?;
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Result<RoundEnd> {
        writeln!(self.output)?;
        write!(self.output, "{}", board_text(&self.state.board))?;
        writeln!(self.output, "{}", outcome_text(outcome))?;
        writeln!(self.output, "Score: {}", self.score)?;

        loop {
            let Some(line) = self.prompt("Press R to restart, M for the menu, Q to quit: ")? else {
                return Ok(RoundEnd::Quit);
            };
            match line.trim().to_ascii_lowercase().as_str() {
                "r" => return Ok(RoundEnd::Restart),
                "m" => return Ok(RoundEnd::Menu),
                "q" => return Ok(RoundEnd::Quit),
                _ => writeln!(self.output, "Please answer R, M or Q.")?,
            }
        }
    }

    /// Writes `text` and reads one line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if !self.echoed_input {
            writeln!(self.output)?;
        }
        if read == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }
}
