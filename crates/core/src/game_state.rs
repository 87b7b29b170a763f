//! Game state module - cursor, selection, and the swap pipeline
//!
//! `GameState` is the owned aggregate the collaborators talk to: the input
//! layer drives [`GameState::apply`], the render layer reads the query
//! surface. Every command runs to completion synchronously - swap, both
//! pivot resolutions, scoring, and refill - so callers never observe a
//! partially updated board.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::error::EngineError;
use crate::matcher::{self, REFILL_CAP};
use crate::rng::SimpleRng;
use tui_gemswap_types::{Cell, CellStatus, Direction, GameCommand};

/// Most cells one move can refill (two pivots).
pub const MOVE_REFILL_CAP: usize = 2 * REFILL_CAP;

/// Observable outcome of the last successful move (consumed by observers).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveEvent {
    /// True when the move exchanged two cells instead of just walking.
    pub swapped: bool,
    /// Points the move added to the score.
    pub score_delta: u32,
    /// Refilled coordinates in RNG draw order, both pivots concatenated.
    pub refilled: ArrayVec<(usize, usize), MOVE_REFILL_CAP>,
}

/// Complete engine state: board, cursor, selection flag, score, and RNG.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cursor_row: usize,
    cursor_col: usize,
    is_selected: bool,
    score: u32,
    rng: SimpleRng,
    last_event: Option<MoveEvent>,
}

impl GameState {
    /// Create a game with a fully randomized board.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::random(&mut rng);
        Self::with_parts(board, rng)
    }

    /// Create a game over a prepared board (scripted layouts, tests).
    /// Consumes no RNG draws; the first refill draw comes straight from `seed`.
    pub fn from_board(board: Board, seed: u32) -> Self {
        Self::with_parts(board, SimpleRng::new(seed))
    }

    fn with_parts(board: Board, rng: SimpleRng) -> Self {
        Self {
            board,
            cursor_row: 0,
            cursor_col: 0,
            is_selected: false,
            score: 0,
            rng,
            last_event: None,
        }
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor_row
    }

    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Read-only view of the board for whole-grid rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the cell at (row, col); out-of-range coordinates fail fast.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        self.board.get(row, col)
    }

    /// Copy of the cell under the cursor.
    pub fn cursor_cell(&self) -> Cell {
        // The cursor is an in-bounds invariant of the engine.
        self.board
            .get(self.cursor_row, self.cursor_col)
            .expect("cursor is always in bounds")
    }

    /// Take and clear the last move's outcome.
    pub fn take_last_event(&mut self) -> Option<MoveEvent> {
        self.last_event.take()
    }

    /// Dispatch a command from the input collaborator.
    pub fn apply(&mut self, command: GameCommand) -> Result<(), EngineError> {
        match command {
            GameCommand::Move(direction) => self.move_cursor(direction),
            GameCommand::ToggleSelect => {
                self.toggle_select();
                Ok(())
            }
        }
    }

    /// Toggle the cursor cell between `Selected` and `Selectable`.
    ///
    /// Arms the cell for a swap on the next move; a second call disarms it.
    /// No other cell is touched.
    pub fn toggle_select(&mut self) {
        let (row, col) = (self.cursor_row, self.cursor_col);
        if self.cursor_cell().status != CellStatus::Selected {
            self.board.set_status(row, col, CellStatus::Selected);
            self.is_selected = true;
            log::debug!("selected cell ({}, {})", row, col);
        } else {
            self.board.set_status(row, col, CellStatus::Selectable);
            self.is_selected = false;
            log::debug!("deselected cell ({}, {})", row, col);
        }
    }

    /// Move the cursor one step, swapping first when the cursor cell is
    /// `Selected`.
    ///
    /// A blocked move returns [`EngineError::Boundary`] and leaves cursor,
    /// board, selection, and the pending event completely unchanged. A
    /// successful move always ends with the old cell's status cleared, the
    /// new cursor cell `Selectable`, and the selection flag down.
    pub fn move_cursor(&mut self, direction: Direction) -> Result<(), EngineError> {
        let (row, col) = (self.cursor_row, self.cursor_col);
        let Some((nrow, ncol)) = self.board.neighbor(row, col, direction) else {
            log::debug!("cursor blocked moving {:?} from ({}, {})", direction, row, col);
            return Err(EngineError::Boundary {
                direction,
                row,
                col,
            });
        };

        let mut event = MoveEvent::default();
        let current = self.board.get(row, col)?;

        if current.status == CellStatus::Selected {
            // Swap colors in place, then resolve the cursor pivot before the
            // neighbor pivot: the first refill can change colors the second
            // scan reads.
            let neighbor = self.board.get(nrow, ncol)?;
            self.board.set_color(row, col, neighbor.color);
            self.board.set_color(nrow, ncol, current.color);
            log::debug!(
                "swapped {:?}: ({}, {}) <-> ({}, {})",
                direction,
                row,
                col,
                nrow,
                ncol
            );

            let first = matcher::resolve_at(&mut self.board, &mut self.rng, row, col);
            let second = matcher::resolve_at(&mut self.board, &mut self.rng, nrow, ncol);

            event.swapped = true;
            event.score_delta = first.score_delta + second.score_delta;
            event.refilled.extend(first.refilled);
            event.refilled.extend(second.refilled);
            self.score += event.score_delta;
        } else {
            log::debug!(
                "moved {:?}: ({}, {}) -> ({}, {})",
                direction,
                row,
                col,
                nrow,
                ncol
            );
        }

        self.board.set_status(row, col, CellStatus::None);
        self.cursor_row = nrow;
        self.cursor_col = ncol;
        self.board.set_status(nrow, ncol, CellStatus::Selectable);
        self.is_selected = false;
        self.last_event = Some(event);

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
