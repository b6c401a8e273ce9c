//! Pieces module - shape matrices and rotation
//!
//! Every shape is a small square boolean matrix (2x2 for O, 4x4 for I, 3x3 for
//! the rest). Rotation is a pure matrix transform with no wall kicks: the
//! caller decides whether the rotated matrix fits.

use crate::types::ShapeKind;

/// Largest matrix side length (the I piece)
pub const MAX_MATRIX_SIZE: usize = 4;

/// Square boolean matrix of side 1..=4, stored in a fixed 4x4 grid.
///
/// Cells outside `size x size` are always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    size: u8,
    cells: [[bool; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
}

impl Matrix {
    /// Build a matrix from rows of 0/1 values.
    ///
    /// Panics if `rows` is not square or larger than 4x4; matrices are
    /// static shape data or test fixtures.
    pub const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        assert!(N >= 1 && N <= MAX_MATRIX_SIZE, "matrix size must be 1..=4");
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether cell (row, col) is filled. Out-of-range cells are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size as usize && col < self.size as usize && self.cells[row][col]
    }

    /// Iterate filled cells as (row, col) offsets, top to bottom, left to right.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |r| {
            (0..n)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }
}

const I_MATRIX: Matrix = Matrix::from_rows([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_MATRIX: Matrix = Matrix::from_rows([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const L_MATRIX: Matrix = Matrix::from_rows([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

const O_MATRIX: Matrix = Matrix::from_rows([
    [1, 1],
    [1, 1],
]);

const S_MATRIX: Matrix = Matrix::from_rows([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

const T_MATRIX: Matrix = Matrix::from_rows([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const Z_MATRIX: Matrix = Matrix::from_rows([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

/// Canonical (spawn orientation) matrix for a shape
pub fn shape_matrix(kind: ShapeKind) -> Matrix {
    match kind {
        ShapeKind::I => I_MATRIX,
        ShapeKind::J => J_MATRIX,
        ShapeKind::L => L_MATRIX,
        ShapeKind::O => O_MATRIX,
        ShapeKind::S => S_MATRIX,
        ShapeKind::T => T_MATRIX,
        ShapeKind::Z => Z_MATRIX,
    }
}

/// Rotate 90° clockwise: `result[i][j] = matrix[N - j][i]` with `N = size - 1`.
pub fn rotate_cw(matrix: &Matrix) -> Matrix {
    let n = matrix.size as usize;
    let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
    for (i, row) in cells.iter_mut().enumerate().take(n) {
        for (j, cell) in row.iter_mut().enumerate().take(n) {
            *cell = matrix.cells[n - 1 - j][i];
        }
    }
    Matrix {
        size: matrix.size,
        cells,
    }
}

/// Spawn column: `floor(width / 2) - ceil(size / 2)`.
pub fn spawn_col(kind: ShapeKind, board_width: u8) -> i8 {
    let size = shape_matrix(kind).size();
    (board_width / 2) as i8 - size.div_ceil(2) as i8
}

/// Spawn row: the I piece starts one row lower since its top matrix row is empty.
pub fn spawn_row(kind: ShapeKind) -> i8 {
    match kind {
        ShapeKind::I => -1,
        _ => -2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_WIDTH;

    #[test]
    fn every_shape_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(shape_matrix(kind).filled_count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn matrix_sizes() {
        assert_eq!(shape_matrix(ShapeKind::I).size(), 4);
        assert_eq!(shape_matrix(ShapeKind::O).size(), 2);
        for kind in [ShapeKind::J, ShapeKind::L, ShapeKind::S, ShapeKind::T, ShapeKind::Z] {
            assert_eq!(shape_matrix(kind).size(), 3);
        }
    }

    #[test]
    fn rotate_t_clockwise() {
        let rotated = rotate_cw(&shape_matrix(ShapeKind::T));
        let expected = Matrix::from_rows([
            [0, 1, 0],
            [0, 1, 1],
            [0, 1, 0],
        ]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn rotate_i_clockwise_goes_vertical() {
        let rotated = rotate_cw(&shape_matrix(ShapeKind::I));
        let cells: Vec<_> = rotated.filled_cells().collect();
        assert_eq!(cells, vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn o_is_rotation_invariant() {
        let o = shape_matrix(ShapeKind::O);
        assert_eq!(rotate_cw(&o), o);
    }

    #[test]
    fn spawn_columns() {
        assert_eq!(spawn_col(ShapeKind::I, BOARD_WIDTH), 3);
        assert_eq!(spawn_col(ShapeKind::O, BOARD_WIDTH), 4);
        assert_eq!(spawn_col(ShapeKind::J, BOARD_WIDTH), 3);
        assert_eq!(spawn_col(ShapeKind::T, BOARD_WIDTH), 3);
    }

    #[test]
    fn spawn_rows() {
        assert_eq!(spawn_row(ShapeKind::I), -1);
        for kind in ShapeKind::ALL.into_iter().filter(|k| *k != ShapeKind::I) {
            assert_eq!(spawn_row(kind), -2);
        }
    }
}
