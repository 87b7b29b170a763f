//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraws only; the 9x9 board is small enough that diffing would buy
//! nothing.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, GlyphStyle};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<GlyphStyle> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let glyph = fb.get(x, y).unwrap_or_default();
                if current_style != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current_style = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
            if y + 1 < fb.height() {
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: GlyphStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        self.stdout.queue(SetForegroundColor(Color::Rgb {
            r: style.fg.r,
            g: style.fg.g,
            b: style.fg.b,
        }))?;
        self.stdout.queue(SetBackgroundColor(Color::Rgb {
            r: style.bg.r,
            g: style.bg.g,
            b: style.bg.b,
        }))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
