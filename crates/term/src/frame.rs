//! Character frames: the unit of work between the view and the renderer.
//!
//! A [`Frame`] is a fixed width x height sheet of styled glyphs. The view
//! assembles one per frame with the put/text/fill primitives; the renderer
//! diffs it glyph-by-glyph against the previously flushed sheet. Equality
//! is derived so whole frames can be compared in tests.

/// 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Glyph emphasis. The game never combines these: bold marks highlights
/// (clear flash, game-over banner), dim marks the ghost piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    None,
    Bold,
    Dim,
}

/// Foreground/background colors plus emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub emphasis: Emphasis,
}

impl Style {
    /// Light-on-black text with no emphasis.
    pub const PLAIN: Style = Style {
        fg: Rgb(220, 220, 220),
        bg: Rgb(0, 0, 0),
        emphasis: Emphasis::None,
    };

    pub const fn bold(mut self) -> Self {
        self.emphasis = Emphasis::Bold;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.emphasis = Emphasis::Dim;
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// One terminal cell's worth of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// A plain blank, the state every fresh frame starts in.
    pub const BLANK: Glyph = Glyph::new(' ', Style::PLAIN);
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// A sheet of styled glyphs in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl Frame {
    /// Create a blank frame of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// All glyphs, row-major.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline(always)]
    fn slot(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.slot(x, y).map(|i| self.glyphs[i])
    }

    /// Write one glyph. Writes outside the sheet are dropped.
    pub fn put(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(i) = self.slot(x, y) {
            self.glyphs[i] = Glyph::new(ch, style);
        }
    }

    /// Write a string left-to-right from (x, y), clipping at the right edge.
    pub fn text(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as u16);
            if cx >= self.width {
                break;
            }
            self.put(cx, y, ch, style);
        }
    }

    /// Fill a w x h rectangle with one glyph, clipped to the sheet.
    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_frame_is_blank() {
        let frame = Frame::new(5, 3);
        assert_eq!(frame.glyphs().len(), 15);
        assert!(frame.glyphs().iter().all(|g| *g == Glyph::BLANK));
    }

    #[test]
    fn writes_outside_the_sheet_are_dropped() {
        let mut frame = Frame::new(4, 2);
        frame.put(4, 0, 'x', Style::PLAIN);
        frame.put(0, 2, 'x', Style::PLAIN);
        assert!(frame.glyphs().iter().all(|g| g.ch == ' '));
    }

    #[test]
    fn text_clips_at_the_right_edge() {
        let mut frame = Frame::new(3, 1);
        frame.text(1, 0, "abc", Style::PLAIN);
        assert_eq!(frame.get(1, 0).unwrap().ch, 'a');
        assert_eq!(frame.get(2, 0).unwrap().ch, 'b');
        assert_eq!(frame.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn fill_covers_exactly_the_rectangle() {
        let mut frame = Frame::new(4, 4);
        let style = Style::PLAIN.bold();
        frame.fill(1, 1, 2, 2, '#', style);

        let filled = frame.glyphs().iter().filter(|g| g.ch == '#').count();
        assert_eq!(filled, 4);
        assert_eq!(frame.get(1, 1).unwrap().style.emphasis, Emphasis::Bold);
        assert_eq!(frame.get(0, 0).unwrap().ch, ' ');
    }
}
