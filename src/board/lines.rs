//! Winning line table and winner detection

use super::{Board, Player};

/// Winning line indices on the 3x3 board, in fixed checking order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the winner on a board, if any.
///
/// Scans [`WINNING_LINES`] in table order and returns the mark of the first
/// line whose three cells are equal and non-empty. A validly played game can
/// never satisfy two lines with different marks, so the scan order has no
/// observable effect, but it is fixed for reproducibility.
pub fn winner_of(board: &Board) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = board.get(line[0]);
        if first.to_player().is_some()
            && board.get(line[1]) == first
            && board.get(line[2]) == first
        {
            return first.to_player();
        }
    }
    None
}

/// Check whether `player` has three in a row
pub fn has_won(board: &Board, player: Player) -> bool {
    winner_of(board) == Some(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner_of(&Board::new()), None);
    }

    #[test]
    fn test_winner_horizontal() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert_eq!(winner_of(&board), Some(Player::X));
        assert!(has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_winner_vertical() {
        let board = Board::from_string("OX. OX. O..").unwrap();
        assert_eq!(winner_of(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = Board::from_string("XO. .XO ..X").unwrap();
        assert_eq!(winner_of(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_string("XXO .O. O.X").unwrap();
        assert_eq!(winner_of(&board), Some(Player::O));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = Board::from_string("XX. ... ...").unwrap();
        assert_eq!(winner_of(&board), None);
    }

    #[test]
    fn test_full_board_without_line_has_no_winner() {
        // The draw board from the status scenarios
        let board = Board::from_string("XOX OXO OXO").unwrap();
        assert_eq!(winner_of(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for pos in line {
                board = board.place(pos, Player::X);
            }
            assert_eq!(winner_of(&board), Some(Player::X), "line {line:?}");
        }
    }
}
