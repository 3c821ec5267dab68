use super::constants::BOARD_SIZE;
use super::position::CellPosition;

/// The two diagonals, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    TopLeftToBottomRight,
    TopRightToBottomLeft,
}

impl Diagonal {
    pub const ALL: [Diagonal; 2] = [
        Diagonal::TopLeftToBottomRight,
        Diagonal::TopRightToBottomLeft,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    Diagonal(Diagonal),
}

/// Three cells that win the game when one player holds all of them.
///
/// A line only names cell positions; occupancy is read from the board
/// through [`Board::line_occupants`](super::board::Board::line_occupants).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    cells: [CellPosition; BOARD_SIZE],
}

impl Line {
    pub fn row(row: usize) -> Self {
        Line {
            kind: LineKind::Row(row),
            cells: std::array::from_fn(|col| CellPosition { row, col }),
        }
    }

    pub fn column(col: usize) -> Self {
        Line {
            kind: LineKind::Column(col),
            cells: std::array::from_fn(|row| CellPosition { row, col }),
        }
    }

    pub fn diagonal(diagonal: Diagonal) -> Self {
        let cells = std::array::from_fn(|row| {
            let col = match diagonal {
                Diagonal::TopLeftToBottomRight => row,
                Diagonal::TopRightToBottomLeft => BOARD_SIZE - 1 - row,
            };
            CellPosition { row, col }
        });
        Line {
            kind: LineKind::Diagonal(diagonal),
            cells,
        }
    }

    /// All 8 lines: rows, then columns, then diagonals.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..BOARD_SIZE)
            .map(Line::row)
            .chain((0..BOARD_SIZE).map(Line::column))
            .chain(Diagonal::ALL.into_iter().map(Line::diagonal))
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn cells(&self) -> &[CellPosition; BOARD_SIZE] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(line: &Line) -> Vec<u32> {
        line.cells().iter().map(|c| c.move_number()).collect()
    }

    #[test]
    fn rows_and_columns_cover_expected_cells() {
        assert_eq!(numbers(&Line::row(1)), vec![4, 5, 6]);
        assert_eq!(numbers(&Line::column(2)), vec![3, 6, 9]);
    }

    #[test]
    fn diagonals_run_from_the_top_row() {
        assert_eq!(numbers(&Line::diagonal(Diagonal::TopLeftToBottomRight)), vec![1, 5, 9]);
        assert_eq!(numbers(&Line::diagonal(Diagonal::TopRightToBottomLeft)), vec![3, 5, 7]);
    }

    #[test]
    fn all_lines_are_ordered_rows_columns_diagonals() {
        let kinds: Vec<LineKind> = Line::all().map(|l| l.kind()).collect();
        assert_eq!(kinds.len(), 8);
        assert_eq!(kinds[0], LineKind::Row(0));
        assert_eq!(kinds[3], LineKind::Column(0));
        assert_eq!(kinds[6], LineKind::Diagonal(Diagonal::TopLeftToBottomRight));
        assert_eq!(kinds[7], LineKind::Diagonal(Diagonal::TopRightToBottomLeft));
    }
}
