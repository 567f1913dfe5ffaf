//! Pieces module - shape matrices, the piece catalog and spawning
//!
//! A shape is a small boolean matrix (at most 4x4) whose top-left corner sits at
//! the piece's (x, y). Rotation is a clockwise turn of the matrix about its own
//! bounding box: the matrix is transposed and each row reversed, so the shape
//! can appear to shift when rotated. There is no pivot and there are no kicks.

use rand::Rng;

use crate::types::{BlockColor, MAX_SHAPE_SIZE, SPAWN_X, SPAWN_Y};

/// Boolean occupancy matrix of a piece, stored in a fixed 4x4 array.
///
/// Only the top-left `rows x cols` block is meaningful; everything outside it
/// is always `false`, so derived equality compares shapes exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from 0/1 rows. All rows must have the same length and
    /// neither dimension may exceed 4.
    pub const fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        assert!(R >= 1 && R <= MAX_SHAPE_SIZE);
        assert!(C >= 1 && C <= MAX_SHAPE_SIZE);

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (col, row) is set. Out-of-range reads are `false`.
    pub fn is_set(&self, col: u8, row: u8) -> bool {
        col < self.cols && row < self.rows && self.cells[row as usize][col as usize]
    }

    /// Offsets (col, row) of every set cell, row-major.
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.cols)
                .filter(move |&col| self.cells[row as usize][col as usize])
                .map(move |col| (col as i8, row as i8))
        })
    }

    /// Quarter turn clockwise about the bounding box.
    ///
    /// Same result as transposing and then reversing each row:
    /// `rotated[r][c] = self[rows - 1 - c][r]`, with the dimensions swapped.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let rows = self.rows as usize;
        for (r, out_row) in cells.iter_mut().enumerate().take(self.cols as usize) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// The O piece never rotates.
    pub fn is_square(&self) -> bool {
        *self == ShapeKind::O.shape()
    }
}

/// The seven catalog shapes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    L,
    J,
    O,
    S,
    Z,
}

const I_SHAPE: Shape = Shape::from_rows([[1, 1, 1, 1]]);
const T_SHAPE: Shape = Shape::from_rows([[1, 1, 1], [0, 1, 0]]);
const L_SHAPE: Shape = Shape::from_rows([[1, 1, 1], [1, 0, 0]]);
const J_SHAPE: Shape = Shape::from_rows([[1, 1, 1], [0, 0, 1]]);
const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);
const S_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1]]);

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Spawn orientation of this kind.
    pub const fn shape(self) -> Shape {
        match self {
            ShapeKind::I => I_SHAPE,
            ShapeKind::T => T_SHAPE,
            ShapeKind::L => L_SHAPE,
            ShapeKind::J => J_SHAPE,
            ShapeKind::O => O_SHAPE,
            ShapeKind::S => S_SHAPE,
            ShapeKind::Z => Z_SHAPE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
        }
    }
}

/// A falling (or next-to-fall) piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: BlockColor,
}

impl Piece {
    /// Create a piece at the spawn position.
    pub fn new(shape: Shape, color: BlockColor) -> Self {
        Self {
            shape,
            x: SPAWN_X,
            y: SPAWN_Y,
            color,
        }
    }

    pub fn at(mut self, x: i8, y: i8) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Absolute board coordinates of every occupied cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Pick a uniformly random catalog shape and an independent uniformly random
/// color, placed at the spawn position. No validity check is done here.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Piece {
    let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
    let color = BlockColor::ALL[rng.gen_range(0..BlockColor::ALL.len())];
    Piece::new(kind.shape(), color)
}
