//! hilite - regex-based syntax highlighting with cached, themed output
//!
//! Given text, a language tag, a font size and a display mode,
//! [`SyntaxManager::get_or_compute`] returns the text split into styled
//! runs. Token spans and final output are both memoized.

pub mod config;
pub mod display;
pub mod error;
pub mod syntax;
pub mod worker;

pub use config::Config;
pub use error::{HighlightError, Result};
pub use syntax::{
    detect_file_kind, palette_for, AnnotatedText, FileKind, Style, StyledRun, SyntaxManager,
    Theme, ThemeMode, TokenClass, TokenSpan,
};
pub use worker::{HighlightRequest, HighlightWorker};
