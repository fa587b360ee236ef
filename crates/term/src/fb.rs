//! Framebuffer of styled glyphs.

use crate::types::Rgb;

/// Per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Style::default().glyph(' ')
    }
}

/// Row-major grid of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the dimensions, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    #[inline]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    /// Write one glyph. Out-of-range writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Glyphs of row `y`; empty if `y` is out of range.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        &self.glyphs[y as usize * w..(y as usize + 1) * w]
    }

    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Row `y` as a string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (dx, ch) in s.chars().enumerate() {
            let Ok(dx) = u16::try_from(dx) else { break };
            let cx = x.saturating_add(dx);
            if cx >= self.width {
                break;
            }
            self.set(cx, y, style.glyph(ch));
        }
    }

    /// Decimal rendering of `value` without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: Style) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.set(x.saturating_add(i as u16), y, style.glyph(*d as char));
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x.saturating_add(dx), y.saturating_add(dy), glyph);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(3, 0, Style::default().glyph('X'));
        fb.set(0, 2, Style::default().glyph('X'));
        assert!(fb.row_text(0).chars().all(|c| c == ' '));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn test_put_str_clips() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(1, 0, "SCORE", Style::default());
        assert_eq!(fb.row_text(0), " SCO");
    }

    #[test]
    fn test_put_u32() {
        let mut fb = FrameBuffer::new(12, 2);
        fb.put_u32(0, 0, 0, Style::default());
        fb.put_u32(0, 1, 4_294_967_295, Style::default());
        assert_eq!(fb.row_text(0).trim_end(), "0");
        assert_eq!(fb.row_text(1).trim_end(), "4294967295");
    }

    #[test]
    fn test_resize_resets_size() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!((fb.width(), fb.height()), (5, 3));
        assert!(fb.get(4, 2).is_some());
    }
}
