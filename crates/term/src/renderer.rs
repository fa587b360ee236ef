//! TerminalRenderer: flushes framebuffers to the real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw. Later frames only rewrite runs of glyphs that changed.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        let reusable = self
            .prev
            .take()
            .filter(|prev| prev.width() == fb.width() && prev.height() == fb.height());

        let next = match reusable {
            Some(mut prev) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                fb.clone()
            }
        };
        self.prev = Some(next);
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|_| self.stdout.flush())
            .context("write to terminal")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        print_glyphs(out, fb.row(y), &mut pen)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
///
/// Both frames must have the same dimensions.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = None;
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, len) in changed_runs(prev.row(y), row) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            print_glyphs(out, &row[start..start + len], &mut pen)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// `(start, len)` of every maximal run where the two rows differ.
fn changed_runs<'a>(a: &'a [Glyph], b: &'a [Glyph]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < b.len() && a.get(x) == Some(&b[x]) {
            x += 1;
        }
        if x >= b.len() {
            return None;
        }
        let start = x;
        while x < b.len() && a.get(x) != Some(&b[x]) {
            x += 1;
        }
        Some((start, x - start))
    })
}

fn print_glyphs(out: &mut Vec<u8>, glyphs: &[Glyph], pen: &mut Option<Style>) -> Result<()> {
    for glyph in glyphs {
        if *pen != Some(glyph.style) {
            apply_style(out, glyph.style)?;
            *pen = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn apply_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
