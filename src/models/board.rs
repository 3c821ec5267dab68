use super::constants::{BOARD_SIZE, CELL_COUNT};
use super::errors::MoveError;
use super::line::{Diagonal, Line};
use super::player::Player;
use super::position::CellPosition;
use tracing::debug;

/// The 3x3 board: cell occupancy, whose turn it is, and the order cells
/// were filled in.
///
/// Invariant: `history.len()` equals the number of occupied cells, and
/// `turn` is `First` exactly when that number is even.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major cells. Index with `CellPosition::index`.
    cells: [Option<Player>; CELL_COUNT],
    turn: Player,
    history: Vec<CellPosition>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [None; CELL_COUNT],
            turn: Player::First,
            history: Vec::with_capacity(CELL_COUNT),
        }
    }

    /// Place the current player's mark at a move number (1-9).
    ///
    /// # Returns
    ///
    /// The cell that was filled. On error the board is untouched.
    pub fn make_move(&mut self, position: u32) -> Result<CellPosition, MoveError> {
        let cell = CellPosition::from_move_number(position)
            .ok_or_else(|| MoveError::InvalidPosition(position.to_string()))?;

        if self.cells[cell.index()].is_some() {
            return Err(MoveError::OccupiedCell { position: cell });
        }

        self.cells[cell.index()] = Some(self.turn);
        self.history.push(cell);
        debug!(player = %self.turn, position, "move");
        self.turn = self.turn.opponent();
        Ok(cell)
    }

    /// Take back the most recent move and hand the turn back to whoever made it.
    pub fn undo(&mut self) -> Result<CellPosition, MoveError> {
        let cell = self.history.pop().ok_or(MoveError::NoMoveToUndo)?;
        self.cells[cell.index()] = None;
        self.turn = self.turn.opponent();
        debug!(position = cell.move_number(), player = %self.turn, "undo");
        Ok(cell)
    }

    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
        self.history.clear();
        self.turn = Player::First;
        debug!("board reset");
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Occupant at 0-based (row, col). Out-of-range coordinates read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        CellPosition::new(row, col).and_then(|pos| self.occupant(pos))
    }

    /// Occupant at a position. Positions off the board read as empty.
    pub fn occupant(&self, position: CellPosition) -> Option<Player> {
        self.cells.get(position.index()).copied().flatten()
    }

    /// Player allowed to move next
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn history(&self) -> &[CellPosition] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn rows(&self) -> [Line; BOARD_SIZE] {
        std::array::from_fn(Line::row)
    }

    pub fn columns(&self) -> [Line; BOARD_SIZE] {
        std::array::from_fn(Line::column)
    }

    pub fn diagonals(&self) -> [Line; 2] {
        Diagonal::ALL.map(Line::diagonal)
    }

    /// Every winning line, rows then columns then diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        Line::all()
    }

    pub fn line_occupants(&self, line: &Line) -> [Option<Player>; BOARD_SIZE] {
        let cells = *line.cells();
        cells.map(|pos| self.occupant(pos))
    }
}
