//! TerminalRenderer: flushes frames to a real terminal.
//!
//! Draws a full frame the first time (and after a resize or
//! [`TerminalRenderer::invalidate`]), then diffs against the previous frame
//! and rewrites only changed glyphs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::frame::{Emphasis, Frame, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Frame>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
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

    /// Force the next draw to be a full redraw. Useful on resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame to the terminal.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        // Diffing needs prev immutably while queueing to stdout, so take it
        // out of self for the duration; clone_from keeps its buffer.
        match self.last.take() {
            Some(mut prev)
                if prev.width() == frame.width() && prev.height() == frame.height() =>
            {
                self.diff_redraw(frame, &prev)?;
                prev.clone_from(frame);
                self.last = Some(prev);
            }
            _ => {
                self.full_redraw(frame)?;
                self.last = Some(frame.clone());
            }
        }

        self.stdout.flush()?;
        Ok(())
    }

    fn full_redraw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current_style: Option<Style> = None;
        for y in 0..frame.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..frame.width() {
                let glyph = frame.get(x, y).unwrap_or_default();
                if current_style != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current_style = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }
        Ok(())
    }

    fn diff_redraw(&mut self, frame: &Frame, prev: &Frame) -> Result<()> {
        let mut current_style: Option<Style> = None;
        let mut cursor_at: Option<(u16, u16)> = None;

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let glyph = frame.get(x, y).unwrap_or_default();
                if prev.get(x, y) == Some(glyph) {
                    continue;
                }

                if cursor_at != Some((x, y)) {
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                }
                if current_style != Some(glyph.style) {
                    self.apply_style(glyph.style)?;
                    current_style = Some(glyph.style);
                }
                self.stdout.queue(Print(glyph.ch))?;
                cursor_at = Some((x + 1, y));
            }
        }
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        match style.emphasis {
            Emphasis::None => {}
            Emphasis::Bold => {
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            Emphasis::Dim => {
                self.stdout.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        self.stdout.queue(SetForegroundColor(to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(to_color(style.bg)))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}
