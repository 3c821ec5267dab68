//! Game state machine
//!
//! The GameEngine owns the Board and tracks whether the game is still
//! awaiting moves. Input handling and rendering sit on top of it in
//! `services::game`.

pub mod evaluator;

use crate::models::board::Board;
use crate::models::errors::MoveError;
use crate::models::position::CellPosition;
use crate::services::command::Command;
pub use evaluator::GameOutcome;
use tracing::info;

/// Core game engine that applies commands and detects the end of the game
pub struct GameEngine {
    board: Board,
    state: GameState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingMove,
    Finished(GameOutcome),
}

/// What a successfully applied command did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Moved(CellPosition),
    Undone(CellPosition),
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Creates a new game engine with an empty board, First to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::AwaitingMove,
        }
    }

    /// Returns an immutable reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one classified command to the board
    ///
    /// # Returns
    ///
    /// * `Ok(Applied)` describing the cell that changed
    /// * `Err(MoveError)` if the command was rejected; the board is unchanged
    ///
    /// A successful move that decides the game moves the engine to
    /// `GameState::Finished`. Once finished, every command is rejected
    /// with `MoveError::GameOver` until [`reset`](Self::reset).
    pub fn apply(&mut self, command: &Command) -> Result<Applied, MoveError> {
        if let GameState::Finished(_) = self.state {
            return Err(MoveError::GameOver);
        }

        match command {
            Command::Move(position) => {
                let cell = self.board.make_move(*position)?;
                self.check_game_over();
                Ok(Applied::Moved(cell))
            }
            Command::Undo => self.board.undo().map(Applied::Undone),
            Command::Invalid(input) => Err(MoveError::InvalidPosition(input.clone())),
        }
    }

    /// Checks for game over conditions and updates the game state
    ///
    /// # Returns
    ///
    /// * `Some(GameOutcome)` if the game has ended (a win or a draw)
    /// * `None` if the game is still in progress
    pub fn check_game_over(&mut self) -> Option<GameOutcome> {
        if let GameState::Finished(outcome) = self.state {
            return Some(outcome);
        }

        let outcome = evaluator::result(&self.board)?;
        info!(%outcome, moves = self.board.move_count(), "game finished");
        self.state = GameState::Finished(outcome);
        Some(outcome)
    }

    /// Clears the board for another game
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = GameState::AwaitingMove;
    }
}
