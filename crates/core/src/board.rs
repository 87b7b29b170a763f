//! Board module - the 9x9 gem grid
//!
//! Uses a flat array for cache locality. Coordinates are `(row, col)` with
//! row 0 at the top, both in `0..BOARD_SIZE`. The board is owned by the
//! engine; queries hand out copies, never aliases.

use crate::error::EngineError;
use crate::rng::SimpleRng;
use tui_gemswap_types::{Cell, CellStatus, Direction, GemColor, BOARD_SIZE};

/// Total number of cells on the board
const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The game board - `BOARD_SIZE` x `BOARD_SIZE` flat array, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a board with every cell drawn uniformly from the palette,
    /// status `None`. Consumes one RNG draw per cell, row-major.
    pub fn random(rng: &mut SimpleRng) -> Self {
        let mut cells = [Cell::new(GemColor::Red); CELL_COUNT];
        for cell in cells.iter_mut() {
            *cell = Cell::new(rng.gem_color());
        }
        Self { cells }
    }

    /// Create a board uniformly filled with one color.
    ///
    /// Setup primitive for scripted layouts; gameplay boards come from
    /// [`Board::random`].
    pub fn filled(color: GemColor) -> Self {
        Self {
            cells: [Cell::new(color); CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get a copy of the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        Self::index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(EngineError::IndexOutOfRange { row, col })
    }

    /// Infallible peek for in-bounds iteration.
    pub(crate) fn peek(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the color at (row, col).
    /// Returns false if out of bounds.
    pub fn set_color(&mut self, row: usize, col: usize, color: GemColor) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx].color = color;
                true
            }
            None => false,
        }
    }

    /// Assign a fresh uniform random color at (row, col).
    /// Returns false if out of bounds (no RNG draw happens).
    pub fn set_random_color(&mut self, row: usize, col: usize, rng: &mut SimpleRng) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx].color = rng.gem_color();
                true
            }
            None => false,
        }
    }

    /// Set the status at (row, col).
    /// Returns false if out of bounds.
    pub fn set_status(&mut self, row: usize, col: usize, status: CellStatus) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx].status = status;
                true
            }
            None => false,
        }
    }

    /// Neighbor coordinates one step in `direction`, or `None` at the edge.
    pub fn neighbor(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let nrow = row.checked_add_signed(dr as isize)?;
        let ncol = col.checked_add_signed(dc as isize)?;
        if nrow >= BOARD_SIZE || ncol >= BOARD_SIZE {
            return None;
        }
        Some((nrow, ncol))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
