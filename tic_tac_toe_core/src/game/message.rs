//! Text notation used by the console game.
//!
//! A move is a row letter `A`-`C` plus a column digit `1`-`3`, in either
//! order and any case: `b2`, `B2` and `2b` all name the centre.

use super::models::Position;
use crate::error::IllegalMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    Restart,
    Menu,
    Quit,
}

pub fn parse_move(input: &str) -> Result<Position, IllegalMove> {
    let trimmed = input.trim();
    let unparseable = || IllegalMove::Unparseable(trimmed.to_string());

    let mut chars = trimmed.chars();
    let (first, second) = match (chars.next(), chars.next(), chars.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return Err(unparseable()),
    };

    let (letter, digit) = if first.is_ascii_alphabetic() {
        (first, second)
    } else {
        (second, first)
    };

    let row = match letter.to_ascii_uppercase() {
        'A' => 0,
        'B' => 1,
        'C' => 2,
        _ => return Err(unparseable()),
    };
    let col = match digit {
        '1' => 0,
        '2' => 1,
        '3' => 2,
        _ => return Err(unparseable()),
    };

    Position::new(row, col).ok_or_else(unparseable)
}

/// The notation for `pos`, e.g. `B2` for the centre.
pub fn format_move(pos: Position) -> String {
    let letter = char::from(b'A' + pos.row as u8);
    format!("{}{}", letter, pos.col + 1)
}

/// Reads one line typed during play: a control word or a move.
pub fn parse_command(input: &str) -> Result<Command, IllegalMove> {
    match input.trim().to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "r" | "restart" => Ok(Command::Restart),
        "m" | "menu" => Ok(Command::Menu),
        _ => parse_move(input).map(Command::Move),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    #[test]
    fn letter_then_digit() {
        assert_eq!(parse_move("A1"), Ok(pos(0, 0)));
        assert_eq!(parse_move("B2"), Ok(pos(1, 1)));
        assert_eq!(parse_move("C3"), Ok(pos(2, 2)));
        assert_eq!(parse_move("A3"), Ok(pos(0, 2)));
    }

    #[test]
    fn digit_then_letter_and_lowercase() {
        assert_eq!(parse_move("1a"), Ok(pos(0, 0)));
        assert_eq!(parse_move("3C"), Ok(pos(2, 2)));
        assert_eq!(parse_move("c1"), Ok(pos(2, 0)));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(parse_move("  b3\n"), Ok(pos(1, 2)));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for bad in ["", "A", "D1", "A4", "A0", "11", "AA", "A12", "B 2", "xyz"] {
            assert!(
                matches!(parse_move(bad), Err(IllegalMove::Unparseable(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn formats_moves() {
        assert_eq!(format_move(pos(0, 0)), "A1");
        assert_eq!(format_move(pos(1, 1)), "B2");
        assert_eq!(format_move(pos(2, 0)), "C1");
    }

    #[test]
    fn commands() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("R"), Ok(Command::Restart));
        assert_eq!(parse_command("m"), Ok(Command::Menu));
        assert_eq!(parse_command("a2"), Ok(Command::Move(pos(0, 1))));
        assert!(parse_command("z9").is_err());
    }
}
