//! TUI gem-swap (workspace facade crate).
//!
//! This package keeps the `tui_gemswap::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under `crates/`.

pub use tui_gemswap_core as core;
pub use tui_gemswap_input as input;
pub use tui_gemswap_term as term;
pub use tui_gemswap_types as types;
