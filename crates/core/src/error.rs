//! Engine error taxonomy.

use tui_gemswap_types::{Direction, BOARD_SIZE};

/// Errors surfaced by the engine's command and query operations.
///
/// Scoring and refill are total functions of valid board state; only the
/// two operations below can fail, and neither leaves a partial mutation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A cell query used coordinates outside the board.
    #[error("cell index ({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    IndexOutOfRange { row: usize, col: usize },

    /// A move would step off the board edge. Non-fatal; nothing changed.
    #[error("cursor at ({row}, {col}) cannot move {direction:?}: board edge")]
    Boundary {
        direction: Direction,
        row: usize,
        col: usize,
    },
}
