//! Pieces module - Tetromino shape table and factory
//!
//! Every kind has one canonical occupancy matrix: I is 4x4, O is 2x2 and the
//! rest are 3x3. A piece's current matrix is always the canonical one rotated
//! some number of quarter turns; nothing edits a matrix cell by hand.

use crate::rng::PieceSource;
use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Largest matrix side length (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of a piece in its current rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn from_rows<const N: usize>(src: [[u8; N]; N]) -> Self {
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                rows[r][c] = src[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            rows,
        }
    }

    /// Side length of the matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether matrix cell at column `x`, row `y` is occupied
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.rows[y][x]
    }

    /// Occupied cells as (x, y) offsets from the matrix's top-left corner, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n)
                .filter(move |&x| self.rows[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Clockwise quarter turn: new[r][c] = old[N-1-c][r]
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (r, row) in rows.iter_mut().enumerate().take(n) {
            for (c, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.rows[n - 1 - c][r];
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }
}

const I_SHAPE: Shape = Shape::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]);
const L_SHAPE: Shape = Shape::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]);
const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);
const S_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]);
const T_SHAPE: Shape = Shape::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]);
const Z_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]);

/// Get the canonical (unrotated) shape for a piece kind
pub fn canonical_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Spawn column for a kind: horizontally centered on the board
pub fn spawn_x(kind: PieceKind) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (canonical_shape(kind).size() / 2) as i8
}

/// A piece: kind, current rotation matrix and top-left anchor on the board.
///
/// The anchor may sit above the board (negative y) or past its edges while a
/// move is being tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub(crate) shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self::new_at(kind, spawn_x(kind), 0)
    }

    /// Create an unrotated tetromino anchored at (x, y)
    pub fn new_at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: canonical_shape(kind),
            x,
            y,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Same piece translated by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its anchor moved to row `y`
    pub fn at_row(&self, y: i8) -> Self {
        Self { y, ..*self }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Build a spawn-positioned piece of a kind drawn from `source`.
pub fn create_random_tetromino(source: &mut impl PieceSource) -> Tetromino {
    Tetromino::new(source.next_kind())
}
