//! Theme provider
//!
//! Two fixed palettes, one per display mode. The palette values follow
//! the Atom One light and dark schemes.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::style::Color;
use super::tokens::TokenClass;
use crate::error::HighlightError;

/// Display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl FromStr for ThemeMode {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(HighlightError::Message(format!("Unknown theme: {}", other))),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(palette_for(*self).key())
    }
}

/// Colors for each token class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    key: &'static str,
    pub plain: Color,
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
    pub heading: Color,
    pub emphasis: Color,
    pub link: Color,
    pub inline_code_background: Color,
}

impl Theme {
    /// Stable key used in render cache keys
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Foreground color for a token class
    ///
    /// Inline code shares the string color; its background comes
    /// from `inline_code_background`.
    pub fn color_for(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::Keyword => self.keyword,
            TokenClass::String => self.string,
            TokenClass::Number => self.number,
            TokenClass::Comment => self.comment,
            TokenClass::Heading => self.heading,
            TokenClass::Emphasis => self.emphasis,
            TokenClass::InlineCode => self.string,
            TokenClass::Link => self.link,
        }
    }
}

static LIGHT: Theme = Theme {
    key: "light",
    plain: Color::from_hex(0x383a42),
    keyword: Color::from_hex(0xa626a4),
    string: Color::from_hex(0x50a14f),
    comment: Color::from_hex(0xa0a1a7),
    number: Color::from_hex(0x986801),
    heading: Color::from_hex(0xe45649),
    emphasis: Color::from_hex(0xe45649),
    link: Color::from_hex(0x4078f2),
    inline_code_background: Color::from_hex(0xebebeb),
};

static DARK: Theme = Theme {
    key: "dark",
    plain: Color::from_hex(0xabb2bf),
    keyword: Color::from_hex(0xc678dd),
    string: Color::from_hex(0x98c379),
    comment: Color::from_hex(0x5c6370),
    number: Color::from_hex(0xd19a66),
    heading: Color::from_hex(0xe06c75),
    emphasis: Color::from_hex(0xe06c75),
    link: Color::from_hex(0x61afef),
    inline_code_background: Color::from_hex(0x282c34),
};

/// Palette for a display mode
pub fn palette_for(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
