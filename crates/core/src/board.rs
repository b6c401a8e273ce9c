//! Board module - the playfield grid
//!
//! 10 columns by 20 visible rows, plus 2 buffer rows above the visible area
//! addressed with negative row indices (-2 and -1). Rows grow downward.
//! Storage is a flat row-major array covering rows -2..20.

use crate::pieces::Matrix;
use crate::types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, BUFFER_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;
const STORED_ROWS: usize = (BOARD_HEIGHT + BUFFER_ROWS) as usize;
const BOARD_SIZE: usize = WIDTH * STORED_ROWS;

/// Topmost stored row (inside the buffer)
pub const TOP_ROW: i8 = -(BUFFER_ROWS as i8);

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major cells, index `(row - TOP_ROW) * WIDTH + col`
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if col < 0 || col >= BOARD_WIDTH as i8 || row < TOP_ROW || row >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((row - TOP_ROW) as usize * WIDTH + col as usize)
    }

    /// Width in columns
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Visible height in rows
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (row, col), or `None` outside the stored area
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Whether (row, col) is stored and holds a locked cell
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    pub(crate) fn set(&mut self, row: i8, col: i8, cell: Cell) {
        if let Some(i) = Self::index(row, col) {
            self.cells[i] = cell;
        }
    }

    /// Whether `matrix` placed with its top-left at (row, col) fits.
    ///
    /// Every filled cell must be inside the columns and above the floor. Rows
    /// above the top of the board are always allowed; visible target cells
    /// must be empty.
    pub fn is_valid_move(&self, matrix: &Matrix, row: i8, col: i8) -> bool {
        matrix.filled_cells().all(|(dr, dc)| {
            let r = row as i16 + dr as i16;
            let c = col as i16 + dc as i16;
            if c < 0 || c >= BOARD_WIDTH as i16 || r >= BOARD_HEIGHT as i16 {
                return false;
            }
            r < 0 || !self.is_occupied(r as i8, c as i8)
        })
    }

    /// Whether visible row `row` has no empty cell
    pub fn is_row_full(&self, row: i8) -> bool {
        if !(0..BOARD_HEIGHT as i8).contains(&row) {
            return false;
        }
        let start = (row - TOP_ROW) as usize * WIDTH;
        self.cells[start..start + WIDTH].iter().all(Option::is_some)
    }

    /// Remove `row` and drop everything above it by one row.
    ///
    /// The topmost buffer row is refilled with empty cells.
    fn collapse_row(&mut self, row: i8) {
        let end = (row - TOP_ROW) as usize * WIDTH;
        // copy_within handles the overlapping shift
        self.cells.copy_within(0..end, WIDTH);
        self.cells[..WIDTH].fill(None);
    }

    /// Clear every full visible row, scanning bottom to top.
    ///
    /// After a clear the same row index is checked again, since it now holds
    /// what used to be the row above. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut row = BOARD_HEIGHT as i8 - 1;
        while row >= 0 {
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Write every filled cell of `matrix` at (row, col) as `kind`.
    ///
    /// Cells outside the stored area are skipped; callers validate first.
    pub(crate) fn write_piece(&mut self, matrix: &Matrix, row: i8, col: i8, kind: ShapeKind) {
        for (dr, dc) in matrix.filled_cells() {
            self.set(row + dr, col + dc, Some(kind));
        }
    }

    /// Locked cells in the visible area as (row, col, kind)
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i8, i8, ShapeKind)> + '_ {
        (0..BOARD_HEIGHT as i8).flat_map(move |row| {
            (0..BOARD_WIDTH as i8).filter_map(move |col| match self.get(row, col) {
                Some(Some(kind)) => Some((row, col, kind)),
                _ => None,
            })
        })
    }

    /// Number of locked cells in the visible area
    pub fn occupied_count(&self) -> usize {
        self.occupied_cells().count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from text rows, bottom-aligned.
    ///
    /// `.` (or space) is empty, a shape letter is a locked cell of that shape.
    /// The last string becomes row 19. Characters past column 9 are ignored.
    ///
    /// ```
    /// use mini_tetris_core::Board;
    ///
    /// let board = Board::from_rows(&["IIIII.IIII"]);
    /// assert!(board.is_occupied(19, 0));
    /// assert!(!board.is_occupied(19, 5));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let first = BOARD_HEIGHT as i16 - rows.len() as i16;
        for (i, text) in rows.iter().enumerate() {
            let row = first + i as i16;
            if row < TOP_ROW as i16 {
                continue;
            }
            for (col, ch) in text.chars().take(WIDTH).enumerate() {
                let mut buf = [0u8; 4];
                let kind = ShapeKind::from_str(ch.encode_utf8(&mut buf));
                board.set(row as i8, col as i8, kind);
            }
        }
        board
    }

    /// Render the visible rows as text (inverse of [`Board::from_rows`])
    pub fn to_rows(&self) -> Vec<String> {
        (0..BOARD_HEIGHT as i8)
            .map(|row| {
                (0..BOARD_WIDTH as i8)
                    .map(|col| match self.get(row, col) {
                        Some(Some(kind)) => kind.as_str(),
                        _ => ".",
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
