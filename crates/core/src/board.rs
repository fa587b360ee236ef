//! Board module - manages the game grid
//!
//! The board is a 12x20 grid where each cell is either clear or holds a merged block.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are legal for a falling piece but never stored.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one sweep.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Clear; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and merged)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Merged(_)))
    }

    /// Check if a row has no clear cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| !cell.is_clear()))
    }

    /// Cells of row `y`
    /// Returns None if out of bounds
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let width = BOARD_WIDTH as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Collision predicate for a shape anchored at `(x + dx, y + dy)`.
    ///
    /// Side walls and the floor always block. Board cells block only when the
    /// target row is on the board; rows above the top are treated as vacant.
    pub fn is_blocked(&self, shape: &Shape, x: i8, y: i8, dx: i8, dy: i8) -> bool {
        shape.cells().any(|(cx, cy)| {
            let tx = x as i16 + cx as i16 + dx as i16;
            let ty = y as i16 + cy as i16 + dy as i16;
            if tx < 0 || tx >= BOARD_WIDTH as i16 {
                return true;
            }
            if ty >= BOARD_HEIGHT as i16 {
                return true;
            }
            ty >= 0 && self.is_occupied(tx as i8, ty as i8)
        })
    }

    /// Remove every full row, shifting the rows above down and filling the top
    /// with clear rows. Returns the removed row indices (sorted bottom to top).
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn sweep_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        // Scan from bottom to top
        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(Cell::Clear);

        cleared_rows
    }

    /// Write a landed piece into the board as merged cells.
    ///
    /// Cells above row 0 (or outside the walls) are skipped. Returns how many
    /// cells were written.
    pub fn lock_piece(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) -> usize {
        let mut written = 0;
        for (cx, cy) in shape.cells() {
            let px = x as i16 + cx as i16;
            let py = y as i16 + cy as i16;
            if py < 0 || px < 0 || px >= BOARD_WIDTH as i16 {
                continue;
            }
            if self.set(px as i8, py as i8, Cell::Merged(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major 2D grid.
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(BOARD_WIDTH as usize))
        {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Clear);
    }

    /// Create from a 2D vector (converts to flat array)
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [Cell::Clear; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks_exact(BOARD_WIDTH as usize)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
