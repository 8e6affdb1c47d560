//! Terminal rendering of annotated text

use std::io::Write;

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::syntax::{AnnotatedText, Color, Style};

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Print a title line with an underline of matching display width
pub fn write_header<W: Write>(out: &mut W, title: &str, badge: Option<&str>) -> Result<()> {
    let line = match badge {
        Some(badge) => format!("{}  [{}]", title, badge.to_uppercase()),
        None => title.to_string(),
    };
    let rule = "─".repeat(line.width().max(1));
    queue!(
        out,
        SetAttribute(Attribute::Bold),
        Print(&line),
        SetAttribute(Attribute::Reset),
        Print("\n"),
        Print(rule),
        Print("\n")
    )?;
    Ok(())
}

fn set_style<W: Write>(out: &mut W, style: &Style) -> Result<()> {
    queue!(out, SetForegroundColor(term_color(style.fg)))?;
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(term_color(bg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Print annotated text with truecolor escapes
///
/// Font size has no terminal equivalent and is ignored. Styles are reset
/// before each newline so backgrounds do not bleed to the line end.
pub fn write_annotated<W: Write>(out: &mut W, text: &AnnotatedText) -> Result<()> {
    for (slice, style) in text.segments() {
        let mut lines = slice.split('\n').peekable();
        while let Some(part) = lines.next() {
            if !part.is_empty() {
                set_style(out, style)?;
                queue!(out, Print(part), SetAttribute(Attribute::Reset), ResetColor)?;
            }
            if lines.peek().is_some() {
                queue!(out, Print("\n"))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Print text without any styling
pub fn write_plain<W: Write>(out: &mut W, text: &str) -> Result<()> {
    queue!(out, Print(text))?;
    out.flush()?;
    Ok(())
}
