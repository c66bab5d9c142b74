//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. Uses a flat array for cache locality.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to bottom.
//! There is no roof: y < 0 is legal space so pieces can spawn and fall in from
//! above the visible area.

use crate::types::{Cell, PieceKind, ShapeMatrix, BOARD_HEIGHT, BOARD_WIDTH, MATRIX_SIZE};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y), None for coordinates off the grid
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

    /// Get cell at (x, y), None if off the grid
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if off the grid.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a single cell blocks a piece.
    ///
    /// Outside the column range or at/past the bottom row always blocks;
    /// above the top row never does (free fall from off-screen).
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)].is_some()
    }

    /// Test a shape matrix against the board at the given anchor offset.
    ///
    /// True if any occupied matrix cell lands out of horizontal bounds, at or
    /// past the bottom, or on an already-filled board cell. Board overlap is
    /// only checked at y >= 0.
    pub fn collides(&self, matrix: &ShapeMatrix, offset_x: i8, offset_y: i8) -> bool {
        for (row, cells) in matrix.iter().enumerate() {
            for (col, &filled) in cells.iter().enumerate() {
                if !filled {
                    continue;
                }
                let x = offset_x + col as i8;
                let y = offset_y + row as i8;
                if self.is_occupied(x, y) {
                    return true;
                }
            }
        }
        false
    }

    /// Write a piece's cells permanently into the board.
    ///
    /// Cells outside the vertical range are silently skipped so a piece locked
    /// partially above the top row keeps its visible cells.
    pub fn lock(&mut self, matrix: &ShapeMatrix, offset_x: i8, offset_y: i8, kind: PieceKind) {
        for row in 0..MATRIX_SIZE {
            for col in 0..MATRIX_SIZE {
                if matrix[row][col] {
                    self.set(offset_x + col as i8, offset_y + row as i8, Some(kind));
                }
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shifting everything above it down and inserting an
    /// empty row at the top.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every full row in one pass, bottom to top, and return the count.
    ///
    /// After a removal the same index is rechecked, because the row that
    /// shifted down into it may itself be full. Skipping the recheck would
    /// silently under-count simultaneous multi-row clears.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
