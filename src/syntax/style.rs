//! Style types for annotated text
//!
//! This module provides the per-range style attributes produced by the
//! compositor and consumed by whatever surface draws the text.

use std::ops::Range;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color, `None` means the surface default
    pub bg: Option<Color>,
    /// Bold weight
    pub bold: bool,
    /// Underlined text
    pub underline: bool,
    /// Font size in points
    pub font_size: f32,
}

impl Style {
    /// Create a plain style with a foreground color and font size
    pub fn new(fg: Color, font_size: f32) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
            underline: false,
            font_size,
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Builder: set font size
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

/// A styled run of text
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    /// Byte offset where this run starts (inclusive)
    pub start: usize,
    /// Byte offset where this run ends (exclusive)
    pub end: usize,
    /// Style to apply to this run
    pub style: Style,
}

impl StyledRun {
    /// Create a new run
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self { start, end, style }
    }

    /// Byte range covered by this run
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if this run contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this run in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if run is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Text plus the ordered, non-overlapping runs that style it
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedText {
    text: String,
    runs: Vec<StyledRun>,
}

impl AnnotatedText {
    pub(crate) fn new(text: String, runs: Vec<StyledRun>) -> Self {
        Self { text, runs }
    }

    /// The underlying text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Styled runs in text order
    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Iterate over `(slice, style)` pairs
    pub fn segments(&self) -> impl Iterator<Item = (&str, &Style)> + '_ {
        self.runs
            .iter()
            .map(move |run| (&self.text[run.range()], &run.style))
    }

    /// Style at a byte position, `None` past the end
    pub fn style_at(&self, pos: usize) -> Option<&Style> {
        // Runs are sorted and contiguous
        let idx = self.runs.partition_point(|run| run.end <= pos);
        self.runs
            .get(idx)
            .filter(|run| run.contains(pos))
            .map(|run| &run.style)
    }

    /// Check if there is no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex(0xc678dd);
        assert_eq!(color, Color::rgb(0xc6, 0x78, 0xdd));
    }

    #[test]
    fn test_style_builders() {
        let style = Style::new(Color::rgb(1, 2, 3), 14.0)
            .with_bold()
            .with_bg(Color::rgb(9, 9, 9))
            .with_font_size(16.0)
            .with_underline()
            .with_fg(Color::rgb(4, 5, 6));
        assert_eq!(style.fg, Color::rgb(4, 5, 6));
        assert!(style.bold);
        assert!(style.underline);
        assert_eq!(style.bg, Some(Color::rgb(9, 9, 9)));
        assert_eq!(style.font_size, 16.0);
    }

    #[test]
    fn test_run_contains() {
        let run = StyledRun::new(5, 10, Style::new(Color::rgb(0, 0, 0), 12.0));
        assert!(!run.contains(4));
        assert!(run.contains(5));
        assert!(run.contains(9));
        assert!(!run.contains(10));
        assert_eq!(run.len(), 5);
    }

    #[test]
    fn test_style_at() {
        let plain = Style::new(Color::rgb(0, 0, 0), 12.0);
        let bold = plain.with_bold();
        let text = AnnotatedText::new(
            "abcdef".to_string(),
            vec![StyledRun::new(0, 3, plain), StyledRun::new(3, 6, bold)],
        );
        assert_eq!(text.style_at(0), Some(&plain));
        assert_eq!(text.style_at(3), Some(&bold));
        assert_eq!(text.style_at(5), Some(&bold));
        assert_eq!(text.style_at(6), None);

        let segments: Vec<_> = text.segments().map(|(s, _)| s).collect();
        assert_eq!(segments, vec!["abc", "def"]);
    }
}
