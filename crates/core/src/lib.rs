//! Core gem-swap engine - pure, deterministic, and testable
//!
//! This crate holds all the game rules and state. It has zero dependencies
//! on UI or I/O, so it runs identically in a terminal front-end, a GUI, or a
//! headless test.
//!
//! # Module Structure
//!
//! - [`board`]: 9x9 gem grid with bounds-checked access and mutators
//! - [`game_state`]: cursor, selection, and the swap pipeline
//! - [`matcher`]: cardinal-ray match detection, scoring, and refill
//! - [`rng`]: seeded LCG driving every color draw
//! - [`error`]: the two-variant failure taxonomy
//!
//! # Game Rules
//!
//! - The cursor walks the grid one cell at a time; moving resets the old
//!   cell's highlight and marks the new cell selectable.
//! - Toggling selection arms the cursor cell; the next move swaps it with
//!   the neighbor instead of walking.
//! - After a swap, each of the two cells is scanned once as a pivot, in
//!   swap order. Runs of 3+ score `length * 10` per axis and are refilled
//!   with fresh random colors.
//! - Refills are never re-scanned: there are no cascades, and leftover runs
//!   stay unscored until a later swap pivots onto them.
//!
//! # Example
//!
//! ```
//! use tui_gemswap_core::GameState;
//! use tui_gemswap_types::{Direction, GameCommand};
//!
//! let mut game = GameState::new(12345);
//! game.apply(GameCommand::ToggleSelect)?;
//! game.apply(GameCommand::Move(Direction::Right))?;
//! assert_eq!(game.cursor_col(), 1);
//! # Ok::<(), tui_gemswap_core::EngineError>(())
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod matcher;
pub mod rng;

pub use tui_gemswap_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::EngineError;
pub use game_state::{GameState, MoveEvent};
pub use matcher::{resolve_at, scan_rays, RayCounts, Resolution};
pub use rng::SimpleRng;
