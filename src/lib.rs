//! Tic-tac-toe Game Engine
//!
//! A two-player, turn-based tic-tac-toe game played on the console.
//!
//! # Overview
//!
//! Players take turns placing X and O on a 3x3 board by typing a square
//! number from 1 to 9, or `x` to take back the last move. The game ends
//! when a player holds a full row, column or diagonal, or when the board
//! fills up.
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine and win/draw evaluation
//! - [`models`] - Domain models (Board, Player, Line, etc.)
//! - [`services`] - Input classification and the play session loop
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - User interface and presentation logic
//!
//! # Example
//!
//! ```rust
//! use tictactoe::{Board, GameOutcome, Player};
//! use tictactoe::game_engine::evaluator;
//!
//! let mut board = Board::new();
//! for square in [1, 2, 4, 5, 7] {
//!     board.make_move(square).unwrap();
//! }
//! assert_eq!(evaluator::result(&board), Some(GameOutcome::Winner(Player::First)));
//! ```

pub mod game_engine;
pub mod models;
pub mod services;
pub mod io;
pub mod ui;
pub mod cli;
pub mod logging;

// Re-export commonly used types
pub use game_engine::{GameEngine, GameOutcome, GameState};
pub use models::board::Board;
pub use models::errors::{GameError, GameResult, MoveError};
pub use models::player::Player;
pub use services::command::Command;
