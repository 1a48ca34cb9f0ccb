use tic_tac_toe_core::{Board, Outcome, BOARD_SIZE};

const ROW_LETTERS: [char; BOARD_SIZE] = ['A', 'B', 'C'];

/// The board as text, with row letters and column digits for move entry.
///
/// ```text
///     1   2   3
/// A   X | O |
///    ---+---+---
/// ```
pub fn board_text(board: &Board) -> String {
    let mut text = String::from("    1   2   3\n");
    for (row, cells) in board.rows().iter().enumerate() {
        let marks: Vec<&str> = cells
            .iter()
            .map(|cell| cell.map_or(" ", |player| player.mark()))
            .collect();
        text.push_str(&format!(
            "{}   {} | {} | {}\n",
            ROW_LETTERS[row], marks[0], marks[1], marks[2]
        ));
        if row + 1 < BOARD_SIZE {
            text.push_str("   ---+---+---\n");
        }
    }
    text
}

pub fn outcome_text(outcome: Outcome) -> String {
    match outcome {
        Outcome::Winner(player) => format!("PLAYER {} WINS", player),
        Outcome::Draw => "DRAW".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tic_tac_toe_core::Player;

    #[test]
    fn renders_marks_in_place() {
        let x = Some(Player::X);
        let o = Some(Player::O);
        let board = Board::from_rows([[x, None, o], [None, x, None], [o, None, None]]);

        let expected = "    1   2   3\n\
                        A   X |   | O\n   ---+---+---\n\
                        B     | X |  \n   ---+---+---\n\
                        C   O |   |  \n";
        assert_eq!(board_text(&board), expected);
    }

    #[test]
    fn outcome_banners() {
        assert_eq!(outcome_text(Outcome::Winner(Player::O)), "PLAYER O WINS");
        assert_eq!(outcome_text(Outcome::Draw), "DRAW");
    }
}
