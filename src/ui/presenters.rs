use crate::game_engine::GameOutcome;
use crate::io::OutputWriter;
use crate::models::board::Board;
use crate::models::constants::{CELL_DELIMITER, EMPTY_SYMBOL};
use crate::models::errors::MoveError;
use crate::models::player::Player;

pub const MOVE_HINT: &str = "Input a square from 1-9 to move, x to undo";
pub const PLAY_AGAIN_PROMPT: &str =
    "Do you want to play again, type y to continue, any other input to stop:";
pub const FAREWELL: &str = "Bye!";

pub struct BoardPresenter;

impl BoardPresenter {
    /// One line per board row, e.g. `X|O| `.
    pub fn render_rows(board: &Board) -> Vec<String> {
        board
            .rows()
            .iter()
            .map(|row| {
                board
                    .line_occupants(row)
                    .iter()
                    .map(|cell| match cell {
                        Some(player) => player.symbol(),
                        None => EMPTY_SYMBOL,
                    })
                    .collect::<Vec<_>>()
                    .join(CELL_DELIMITER)
            })
            .collect()
    }

    pub fn show_board(board: &Board, output: &mut dyn OutputWriter) {
        for row in Self::render_rows(board) {
            output.writeln(&row);
        }
    }

    pub fn turn_prompt(turn: Player) -> String {
        format!("{} to play:", turn.symbol())
    }

    pub fn show_move_hint(output: &mut dyn OutputWriter) {
        output.writeln(MOVE_HINT);
    }

    pub fn show_rejection(err: &MoveError, output: &mut dyn OutputWriter) {
        let message = match err {
            MoveError::OccupiedCell { .. } => "Square already occupied",
            MoveError::InvalidPosition(_) => "Invalid position",
            MoveError::NoMoveToUndo => "Nothing to undo",
            MoveError::GameOver => "The game is over",
        };
        output.writeln(message);
    }

    pub fn show_result(outcome: GameOutcome, output: &mut dyn OutputWriter) {
        output.writeln(&outcome.to_string());
    }

    pub fn show_farewell(output: &mut dyn OutputWriter) {
        output.writeln(FAREWELL);
    }
}
