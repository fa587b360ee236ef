//! Active piece controller
//!
//! `Player` is the falling piece: its kind, its current (possibly rotated)
//! shape and the board position of the shape's top-left corner. All moves are
//! checked against the board with [`Board::is_blocked`]; a rejected move leaves
//! the piece exactly as it was.

use crate::board::Board;
use crate::pieces::{kick_offsets, shape_for, Shape};
use crate::types::{PieceKind, SPAWN_X, SPAWN_Y};

/// Result of a one-row drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece could not move down and must lock.
    /// `top_out` is set when the piece was still above row 0.
    Landed { top_out: bool },
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub collided: bool,
}

impl Player {
    /// Create a piece in its catalog orientation at the spawn cell
    pub fn spawn(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece in its catalog orientation at `(x, y)`
    pub fn at(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            shape: shape_for(kind).shape,
            x,
            y,
            collided: false,
        }
    }

    pub fn is_blocked(&self, board: &Board, dx: i8, dy: i8) -> bool {
        board.is_blocked(&self.shape, self.x, self.y, dx, dy)
    }

    /// Shift one column left (`-1`) or right (`+1`) if the target is free.
    pub fn move_lateral(&mut self, board: &Board, dir: i8) -> bool {
        if self.is_blocked(board, dir, 0) {
            return false;
        }
        self.x += dir;
        true
    }

    /// Drop one row, or mark the piece as landed.
    pub fn soft_drop(&mut self, board: &Board) -> DropOutcome {
        if !self.is_blocked(board, 0, 1) {
            self.y += 1;
            self.collided = false;
            return DropOutcome::Moved;
        }
        self.collided = true;
        DropOutcome::Landed { top_out: self.y < 0 }
    }

    /// Rotate clockwise, kicking sideways if the rotated shape collides.
    ///
    /// On failure nothing changes.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let rotated = self.shape.rotated_cw();
        for offset in kick_offsets(rotated.size()) {
            let x = self.x + offset;
            if !board.is_blocked(&rotated, x, self.y, 0, 0) {
                self.shape = rotated;
                self.x = x;
                return true;
            }
        }
        false
    }

    /// Absolute board coordinates of every filled cell (may include y < 0).
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(cx, cy)| (self.x + cx, self.y + cy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, BOARD_HEIGHT};

    #[test]
    fn test_spawn_position() {
        let p = Player::spawn(PieceKind::T);
        assert_eq!((p.x, p.y), (4, 0));
        assert!(!p.collided);
        assert_eq!(p.shape, shape_for(PieceKind::T).shape);
    }

    #[test]
    fn test_o_walks_to_left_wall() {
        let board = Board::new();
        let mut p = Player::spawn(PieceKind::O);
        for _ in 0..4 {
            assert!(p.move_lateral(&board, -1));
        }
        assert_eq!(p.x, 0);
        assert!(!p.move_lateral(&board, -1));
        assert_eq!(p.x, 0);
    }

    #[test]
    fn test_soft_drop_until_floor() {
        let board = Board::new();
        let mut p = Player::spawn(PieceKind::O);
        let mut moves = 0;
        while p.soft_drop(&board) == DropOutcome::Moved {
            moves += 1;
        }
        assert_eq!(moves, BOARD_HEIGHT as i32 - 2);
        assert!(p.collided);
        assert_eq!(p.y, BOARD_HEIGHT as i8 - 2);
    }

    #[test]
    fn test_landing_above_top_is_top_out() {
        let mut board = Board::new();
        board.set(4, 0, Cell::Merged(PieceKind::Z));
        let mut p = Player::at(PieceKind::O, 4, -2);
        assert_eq!(p.soft_drop(&board), DropOutcome::Landed { top_out: true });
        assert_eq!(p.y, -2);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let board = Board::new();
        let mut p = Player::spawn(PieceKind::T);
        assert!(p.rotate(&board));
        assert_eq!(p.x, 4);
        assert_eq!(p.shape, shape_for(PieceKind::T).shape.rotated_cw());
    }

    #[test]
    fn test_rotate_kicks_off_left_wall() {
        let board = Board::new();
        // Vertical I in column 1 of its matrix; x = -1 puts it on column 0.
        let mut p = Player::at(PieceKind::I, -1, 5);
        assert!(!p.is_blocked(&board, 0, 0));
        // Horizontal I spans matrix columns 0..4 -> needs a kick to x = 0.
        assert!(p.rotate(&board));
        assert_eq!(p.x, 0);
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        let board = Board::new();
        // x = 9 puts the vertical I on column 10; flat it would reach column 12.
        let mut p = Player::at(PieceKind::I, 9, 5);
        assert!(!p.is_blocked(&board, 0, 0));
        assert!(p.rotate(&board));
        assert_eq!(p.x, 8);
        assert_eq!(p.y, 5);
    }

    #[test]
    fn test_rotate_needs_two_column_kick() {
        let mut board = Board::new();
        // Rotated T has its stem on matrix column 1, row 0. Blocking columns
        // 4..=6 of row 10 rejects offsets 0, +1 and -1.
        for x in 4..=6 {
            board.set(x, 10, Cell::Merged(PieceKind::O));
        }
        let mut p = Player::at(PieceKind::T, 4, 10);
        assert!(!p.is_blocked(&board, 0, 0));
        assert!(p.rotate(&board));
        assert_eq!(p.x, 6);
        assert_eq!(p.y, 10);
        assert_eq!(p.shape, shape_for(PieceKind::T).shape.rotated_cw());
    }

    #[test]
    fn test_failed_rotation_restores_state() {
        let mut board = Board::new();
        // Box the vertical I into a one-wide shaft.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..12 {
                if x != 5 {
                    board.set(x, y, Cell::Merged(PieceKind::S));
                }
            }
        }
        let mut p = Player::at(PieceKind::I, 4, 8);
        assert!(!p.is_blocked(&board, 0, 0));
        let before = p;
        assert!(!p.rotate(&board));
        assert_eq!(p, before);
    }
}
