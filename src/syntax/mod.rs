//! Syntax highlighting engine
//!
//! This module turns source text plus a language tag into styled runs:
//! - Pattern registry with per-language keyword and comment rules
//! - Memoized tokenizer producing unresolved token spans
//! - Compositor resolving overlaps in a fixed class order
//! - Render cache keyed by language, content, font size and theme

mod style;
mod tokens;
mod rules;
mod language;
mod builtin;
mod registry;
mod cache;
mod tokenizer;
mod compositor;
mod theme;
mod manager;
mod filekind;

pub use style::{AnnotatedText, Color, Style, StyledRun};
pub use tokens::{TokenClass, TokenSpan, TokenSpanSet};
pub use rules::PatternRule;
pub use language::LanguageDefinition;
pub use registry::PatternRegistry;
pub use cache::{ContentHash, MemoCache, RenderKey, TokenKey};
pub use tokenizer::Tokenizer;
pub use compositor::{compose, HEADING_SIZE_DELTA};
pub use theme::{palette_for, Theme, ThemeMode};
pub use manager::{CacheStats, SyntaxManager};
pub use filekind::{detect_file_kind, FileKind, MARKDOWN_TAG};
