/// Rows and columns on the board.
pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Lowest and highest move numbers a player can type.
pub const MIN_MOVE: u32 = 1;
pub const MAX_MOVE: u32 = CELL_COUNT as u32;

pub const UNDO_TOKEN: &str = "x";
pub const PLAY_AGAIN_TOKEN: &str = "y";

pub const EMPTY_SYMBOL: &str = " ";
pub const CELL_DELIMITER: &str = "|";
