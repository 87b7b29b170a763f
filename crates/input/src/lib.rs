//! Keyboard input mapping for the gem-swap game.
//!
//! Translates crossterm key events into engine commands. The engine itself
//! never sees a keyboard; this crate is the only place key bindings live.

pub mod map;

pub use map::{handle_key_event, should_quit};
