//! Active piece and rotation resolution.
//!
//! A piece owns a working copy of its catalog matrix; rotation replaces the
//! copy in place. Wall kicks are a flat list of horizontal offsets tried in a
//! fixed priority order - no per-shape tables, no vertical kicks.

use crate::core::board::Board;
use crate::core::shapes::Shape;
use crate::types::{PieceKind, ShapeMatrix, KICK_OFFSETS, MATRIX_SIZE, SPAWN_X, SPAWN_Y};

/// The currently falling, player-controllable shape instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub matrix: ShapeMatrix,
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece from a catalog shape at the fixed spawn anchor.
    pub fn spawn(shape: &Shape) -> Self {
        Self {
            matrix: shape.matrix,
            kind: shape.kind,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Rotate clockwise with wall-kick resolution against the board.
    ///
    /// Kick offsets are tried in the order [0, -1, 1, -2, 2]; the first
    /// non-colliding one commits the rotated matrix and the horizontal shift.
    /// If all collide the piece is left untouched.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = rotate_cw(&self.matrix);
        for offset in KICK_OFFSETS {
            if !board.collides(&rotated, self.x + offset, self.y) {
                self.matrix = rotated;
                self.x += offset;
                return true;
            }
        }
        false
    }
}

/// Pure clockwise rotation of a 4x4 matrix: out[i][j] = in[3-j][i].
pub fn rotate_cw(matrix: &ShapeMatrix) -> ShapeMatrix {
    let mut rotated = [[false; MATRIX_SIZE]; MATRIX_SIZE];
    for (i, row) in rotated.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = matrix[MATRIX_SIZE - 1 - j][i];
        }
    }
    rotated
}
