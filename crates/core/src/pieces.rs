//! Pieces module - tetromino catalog and matrix rotation
//!
//! Every piece is stored as a square 0/1 matrix in its rotation-0 orientation.
//! Rotation is a pure function on the matrix: transpose, then reverse each row
//! (90° clockwise). Because the matrix is square its size never changes.

use crate::rng::SimpleRng;
use crate::types::{PieceKind, Rgb};

/// Largest matrix side in the catalog (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of a piece, stored by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from 0/1 rows. Only the top-left `N x N` block is used.
    pub const fn from_rows<const N: usize>(bits: [[u8; N]; N]) -> Self {
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                rows[y][x] = bits[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            size: N as u8,
            rows,
        }
    }

    /// Side length of the matrix (also its column count).
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether matrix cell (x, y) is filled. Out of range reads as empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.rows[y][x]
    }

    /// Iterate the offsets `(x, y)` of every filled cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.rows[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// Returns a new shape; `self` is untouched.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter_mut().enumerate().take(n) {
            for (x, cell) in row.iter_mut().enumerate().take(n) {
                *cell = self.rows[n - 1 - x][y];
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }
}

/// Immutable catalog entry for one piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

const I_DEF: PieceDef = PieceDef {
    kind: PieceKind::I,
    shape: Shape::from_rows([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
    color: Rgb::new(6, 182, 212),
};

const J_DEF: PieceDef = PieceDef {
    kind: PieceKind::J,
    shape: Shape::from_rows([[0, 1, 0], [0, 1, 0], [1, 1, 0]]),
    color: Rgb::new(59, 130, 246),
};

const L_DEF: PieceDef = PieceDef {
    kind: PieceKind::L,
    shape: Shape::from_rows([[0, 1, 0], [0, 1, 0], [0, 1, 1]]),
    color: Rgb::new(245, 158, 11),
};

const O_DEF: PieceDef = PieceDef {
    kind: PieceKind::O,
    shape: Shape::from_rows([[1, 1], [1, 1]]),
    color: Rgb::new(234, 179, 8),
};

const S_DEF: PieceDef = PieceDef {
    kind: PieceKind::S,
    shape: Shape::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    color: Rgb::new(16, 185, 129),
};

const T_DEF: PieceDef = PieceDef {
    kind: PieceKind::T,
    shape: Shape::from_rows([[0, 0, 0], [1, 1, 1], [0, 1, 0]]),
    color: Rgb::new(168, 85, 247),
};

const Z_DEF: PieceDef = PieceDef {
    kind: PieceKind::Z,
    shape: Shape::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
    color: Rgb::new(239, 68, 68),
};

/// Catalog lookup: rotation-0 shape, colour and kind.
pub fn shape_for(kind: PieceKind) -> &'static PieceDef {
    match kind {
        PieceKind::I => &I_DEF,
        PieceKind::J => &J_DEF,
        PieceKind::L => &L_DEF,
        PieceKind::O => &O_DEF,
        PieceKind::S => &S_DEF,
        PieceKind::T => &T_DEF,
        PieceKind::Z => &Z_DEF,
    }
}

/// Uniform pick over the seven kinds. Repeats are allowed.
pub fn random_piece(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

/// Horizontal offsets probed by the rotation wall kick, relative to the
/// starting column.
///
/// The column accumulates `1, -2, 3, -4, ...` and the search stops as soon as
/// the next step would exceed `width`. For 3- and 4-wide matrices this yields
/// `[0, 1, -1, 2]`; for the 2-wide O it yields `[0, 1]`.
pub fn kick_offsets(width: u8) -> impl Iterator<Item = i8> {
    let width = width as i8;
    let mut x = 0i8;
    let mut step = 1i8;
    let mut done = false;
    std::iter::once(0).chain(std::iter::from_fn(move || {
        if done {
            return None;
        }
        x += step;
        step = -(step + step.signum());
        if step > width {
            done = true;
            return None;
        }
        Some(x)
    }))
}
