//! Pieces module - tetromino shape matrices and clockwise rotation
//!
//! Shapes are small boolean matrices (at most 4x4). The top-left matrix cell is the
//! piece origin. Rotation is a plain 90° clockwise matrix turn with no wall kicks.

use crate::types::PieceKind;

/// Largest side length of any shape matrix.
pub const MAX_SHAPE_SIDE: usize = 4;

/// Occupancy matrix of a piece.
///
/// Cells outside `rows x cols` are always `false`, so derived equality compares
/// shapes cell-for-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceShape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl PieceShape {
    /// Build a shape from row slices of 0/1 values.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || height > MAX_SHAPE_SIDE || width == 0 || width > MAX_SHAPE_SIDE {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        Some(Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether shape-local cell (x, y) is occupied. Out of range is empty.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// Iterate occupied cells as shape-local `(x, y)` offsets, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.cols)
                .filter(move |&x| self.cells[y as usize][x as usize])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise.
    ///
    /// An R x C shape becomes C x R with `out[i][j] = src[R - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows as usize;
        let c = self.cols as usize;
        let mut cells = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (i, out_row) in cells.iter_mut().enumerate().take(c) {
            for (j, out) in out_row.iter_mut().enumerate().take(r) {
                *out = self.cells[r - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Spawn orientation of each kind.
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

const fn shape(rows: u8, cols: u8, cells: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> PieceShape {
    PieceShape { rows, cols, cells }
}

const X: bool = true;
const E: bool = false;

/// `[X X X X]`
const I_SHAPE: PieceShape = shape(
    1,
    4,
    [[X, X, X, X], [E, E, E, E], [E, E, E, E], [E, E, E, E]],
);

const O_SHAPE: PieceShape = shape(
    2,
    2,
    [[X, X, E, E], [X, X, E, E], [E, E, E, E], [E, E, E, E]],
);

const T_SHAPE: PieceShape = shape(
    2,
    3,
    [[E, X, E, E], [X, X, X, E], [E, E, E, E], [E, E, E, E]],
);

const J_SHAPE: PieceShape = shape(
    2,
    3,
    [[X, E, E, E], [X, X, X, E], [E, E, E, E], [E, E, E, E]],
);

const L_SHAPE: PieceShape = shape(
    2,
    3,
    [[E, E, X, E], [X, X, X, E], [E, E, E, E], [E, E, E, E]],
);

const S_SHAPE: PieceShape = shape(
    2,
    3,
    [[E, X, X, E], [X, X, E, E], [E, E, E, E], [E, E, E, E]],
);

const Z_SHAPE: PieceShape = shape(
    2,
    3,
    [[X, X, E, E], [E, X, X, E], [E, E, E, E], [E, E, E, E]],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spawn_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(spawn_shape(kind).filled_cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn from_rows_matches_const_tables() {
        let t = PieceShape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
        assert_eq!(t, spawn_shape(PieceKind::T));

        let i = PieceShape::from_rows(&[&[1, 1, 1, 1]]).unwrap();
        assert_eq!(i, spawn_shape(PieceKind::I));
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert!(PieceShape::from_rows(&[]).is_none());
        assert!(PieceShape::from_rows(&[&[]]).is_none());
        assert!(PieceShape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(PieceShape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
    }

    #[test]
    fn rotating_i_turns_row_into_column() {
        let v = spawn_shape(PieceKind::I).rotated_cw();
        assert_eq!((v.rows(), v.cols()), (4, 1));
        assert!((0..4).all(|y| v.is_filled(0, y)));
    }

    #[test]
    fn rotating_t_points_stem_right() {
        // [0 1 0]      [1 0]
        // [1 1 1]  ->  [1 1]
        //              [1 0]
        let r = spawn_shape(PieceKind::T).rotated_cw();
        let expected = PieceShape::from_rows(&[&[1, 0], &[1, 1], &[1, 0]]).unwrap();
        assert_eq!(r, expected);
    }

    #[test]
    fn rotating_j_follows_column_read_order() {
        // [1 0 0]      [1 1]
        // [1 1 1]  ->  [1 0]
        //              [1 0]
        let r = spawn_shape(PieceKind::J).rotated_cw();
        let expected = PieceShape::from_rows(&[&[1, 1], &[1, 0], &[1, 0]]).unwrap();
        assert_eq!(r, expected);
    }

    #[test]
    fn filled_cells_are_row_major() {
        let cells: Vec<_> = spawn_shape(PieceKind::S).filled_cells().collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    }
}
