//! Win and draw detection over a board snapshot.

use crate::models::board::Board;
use crate::models::player::Player;
use std::fmt;
use strum::IntoEnumIterator;
use tracing::instrument;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameOutcome::Winner(player) => write!(f, "{} wins!", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Returns the first player holding a complete line.
///
/// Players are checked in declaration order and lines in the order
/// rows, columns, diagonals, so the answer is deterministic even for
/// boards no legal game can reach.
#[instrument(skip_all, fields(moves = board.move_count()))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| {
        board
            .lines()
            .any(|line| board.line_occupants(&line).iter().all(|&c| c == Some(player)))
    })
}

pub fn is_finished(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// `None` while the game is still being played.
pub fn result(board: &Board) -> Option<GameOutcome> {
    if let Some(player) = winner(board) {
        return Some(GameOutcome::Winner(player));
    }
    board.is_full().then_some(GameOutcome::Draw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_after(moves: &[u32]) -> Board {
        let mut board = Board::new();
        for &m in moves {
            board.make_move(m).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!is_finished(&board));
        assert_eq!(result(&board), None);
    }

    #[test]
    fn first_wins_left_column() {
        let board = board_after(&[1, 2, 4, 5]);
        assert!(!is_finished(&board));

        let board = board_after(&[1, 2, 4, 5, 7]);
        assert_eq!(winner(&board), Some(Player::First));
        assert_eq!(result(&board), Some(GameOutcome::Winner(Player::First)));
    }

    #[test]
    fn second_wins_top_right_diagonal() {
        let board = board_after(&[1, 3, 2, 5, 9, 7]);
        assert_eq!(winner(&board), Some(Player::Second));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        let board = board_after(&[1, 2, 3, 5, 8, 4, 6, 9, 7]);
        assert_eq!(winner(&board), None);
        assert!(is_finished(&board));
        assert_eq!(result(&board), Some(GameOutcome::Draw));
    }

    #[test]
    fn win_on_last_cell_is_not_a_draw() {
        // X completes the 1-5-9 diagonal with the ninth move
        let board = board_after(&[1, 2, 3, 6, 4, 7, 5, 8, 9]);
        assert!(board.is_full());
        assert_eq!(result(&board), Some(GameOutcome::Winner(Player::First)));
    }

    #[test]
    fn both_players_with_lines_reports_first() {
        // The board keeps accepting moves after X completes the top row,
        // so O can complete the middle row too.
        let board = board_after(&[1, 4, 2, 5, 3, 6]);
        let top = board.rows()[0];
        let middle = board.rows()[1];
        assert_eq!(board.line_occupants(&top), [Some(Player::First); 3]);
        assert_eq!(board.line_occupants(&middle), [Some(Player::Second); 3]);

        assert_eq!(winner(&board), Some(Player::First));
        assert_eq!(result(&board), Some(GameOutcome::Winner(Player::First)));
    }

    #[test]
    fn outcome_display() {
        assert_eq!(GameOutcome::Winner(Player::First).to_string(), "X wins!");
        assert_eq!(GameOutcome::Winner(Player::Second).to_string(), "O wins!");
        assert_eq!(GameOutcome::Draw.to_string(), "Draw");
    }
}
