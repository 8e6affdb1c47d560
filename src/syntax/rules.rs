//! Pattern rules for syntax highlighting
//!
//! This module defines the compiled rule type used to find
//! token spans in source text.

use regex::Regex;

use super::tokens::{TokenClass, TokenSpan};
use crate::error::{HighlightError, Result};

/// A compiled pattern rule
///
/// Matches a regex over the whole text and tags every match
/// with a single token class.
#[derive(Debug, Clone)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token class to assign to matches
    pub class: TokenClass,
}

impl PatternRule {
    /// Compile a new pattern rule
    pub fn new(name: &str, pattern: &str, class: TokenClass) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| HighlightError::Pattern {
            name: name.to_string(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            class,
        })
    }

    /// Compile a rule matching any of `words` as whole words
    pub fn keywords(name: &str, words: &[&str], class: TokenClass) -> Result<Self> {
        let alternation = words
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(name, &format!(r"\b(?:{})\b", alternation), class)
    }

    /// Find every non-empty match in text
    pub fn find_all<'t>(&'t self, text: &'t str) -> impl Iterator<Item = TokenSpan> + 't {
        self.pattern
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(move |m| TokenSpan::new(self.class, m.start(), m.end()))
    }
}
