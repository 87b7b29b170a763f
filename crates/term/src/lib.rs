//! Terminal rendering for the gem-swap game.
//!
//! Renders the engine's query surface into a styled character framebuffer
//! and flushes it to a raw-mode alternate screen. The engine stays pure;
//! everything terminal-shaped lives here.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
