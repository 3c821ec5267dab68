use super::constants::{BOARD_SIZE, MAX_MOVE, MIN_MOVE};

/// A cell on the 3x3 board.
/// Values range 0-2. (0,0) is upper-left, (2,2) is lower-right.
/// Row increases top-to-bottom, col increases left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(CellPosition { row, col })
    }

    /// Map a move number typed by a player (1-9, row-major) to a cell.
    pub fn from_move_number(number: u32) -> Option<Self> {
        if !(MIN_MOVE..=MAX_MOVE).contains(&number) {
            return None;
        }
        let index = (number - MIN_MOVE) as usize;
        Some(CellPosition {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        })
    }

    /// Row-major index into the board's cell array.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn move_number(&self) -> u32 {
        self.index() as u32 + MIN_MOVE
    }
}
