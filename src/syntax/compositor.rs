//! Annotation compositor
//!
//! Turns unresolved token spans into ordered, non-overlapping styled
//! runs. Every byte starts with the plain style; each class is then
//! applied over its spans in [`TokenClass::APPLY_ORDER`], patching only
//! the attributes it owns, so later classes win where spans overlap.

use super::style::{AnnotatedText, Color, Style, StyledRun};
use super::theme::Theme;
use super::tokens::{TokenClass, TokenSpanSet};

/// Font size increase for heading lines
pub const HEADING_SIZE_DELTA: f32 = 2.0;

/// Attributes one class writes over the buffer
#[derive(Debug, Clone, Copy)]
struct Overlay {
    fg: Color,
    /// Bold at this size; replaces weight and size together, like setting a font
    font: Option<f32>,
    bg: Option<Color>,
    underline: bool,
}

impl Overlay {
    fn for_class(class: TokenClass, theme: &Theme, font_size: f32) -> Self {
        let mut overlay = Overlay {
            fg: theme.color_for(class),
            font: None,
            bg: None,
            underline: false,
        };
        match class {
            TokenClass::Heading => overlay.font = Some(font_size + HEADING_SIZE_DELTA),
            TokenClass::Emphasis => overlay.font = Some(font_size),
            TokenClass::InlineCode => overlay.bg = Some(theme.inline_code_background),
            TokenClass::Link => overlay.underline = true,
            _ => {}
        }
        overlay
    }

    fn apply(&self, style: Style) -> Style {
        let mut style = style.with_fg(self.fg);
        if let Some(size) = self.font {
            style = style.with_bold().with_font_size(size);
        }
        if let Some(bg) = self.bg {
            style = style.with_bg(bg);
        }
        if self.underline {
            style = style.with_underline();
        }
        style
    }
}

/// Apply theme styles to token spans over text
pub fn compose(text: &str, spans: &TokenSpanSet, font_size: f32, theme: &Theme) -> AnnotatedText {
    if text.is_empty() {
        return AnnotatedText::new(String::new(), Vec::new());
    }

    let plain = Style::new(theme.plain, font_size);
    let mut buffer = vec![plain; text.len()];

    for class in TokenClass::APPLY_ORDER {
        let overlay = Overlay::for_class(class, theme, font_size);
        for span in spans.of_class(class) {
            let end = span.end.min(text.len());
            if span.start >= end {
                continue;
            }
            for style in &mut buffer[span.start..end] {
                *style = overlay.apply(*style);
            }
        }
    }

    AnnotatedText::new(text.to_string(), coalesce(&buffer))
}

/// Merge equal neighbouring styles into runs
fn coalesce(buffer: &[Style]) -> Vec<StyledRun> {
    let mut runs: Vec<StyledRun> = Vec::new();
    for (pos, style) in buffer.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.style == *style => run.end = pos + 1,
            _ => runs.push(StyledRun::new(pos, pos + 1, *style)),
        }
    }
    runs
}
