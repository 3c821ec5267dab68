use super::position::CellPosition;
use std::fmt;

/// Rejected board operations. None of these change the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Target cell already holds a mark
    OccupiedCell { position: CellPosition },
    /// Move number outside 1-9, or input that is neither a move nor undo
    InvalidPosition(String),
    /// Undo requested with an empty move history
    NoMoveToUndo,
    /// A command arrived after the game was already decided
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::OccupiedCell { position } => {
                write!(f, "square {} is already occupied", position.move_number())
            }
            MoveError::InvalidPosition(input) => write!(f, "invalid position: {:?}", input),
            MoveError::NoMoveToUndo => write!(f, "no move to undo"),
            MoveError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Session-level errors
#[derive(Debug)]
pub enum GameError {
    /// Input stream closed or interrupted mid-session
    Interrupted,
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Interrupted => write!(f, "Input interrupted"),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            GameError::Interrupted => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::Interrupted => {
                GameError::Interrupted
            }
            _ => GameError::IoError(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn eof_and_interrupt_become_interrupted() {
        let eof: GameError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(eof, GameError::Interrupted));
        let sig: GameError = io::Error::new(io::ErrorKind::Interrupted, "ctrl-c").into();
        assert!(matches!(sig, GameError::Interrupted));
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err: GameError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, GameError::IoError(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn occupied_cell_names_the_square() {
        let err = MoveError::OccupiedCell {
            position: CellPosition { row: 1, col: 1 },
        };
        assert_eq!(err.to_string(), "square 5 is already occupied");
    }
}
