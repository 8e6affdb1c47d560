//! Token classes for syntax highlighting
//!
//! This module defines the semantic roles a span of text can carry
//! and the fixed order in which the compositor applies them.

use std::ops::Range;

/// Semantic token classes for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenClass {
    /// Language keywords (if, else, func, let, etc.)
    Keyword,
    /// String literals ("..." or '...')
    String,
    /// Numeric literals (integers, decimals)
    Number,
    /// Line comments (// or #)
    Comment,
    /// Markdown heading lines
    Heading,
    /// Markdown bold spans (** or __)
    Emphasis,
    /// Markdown inline code spans
    InlineCode,
    /// Markdown inline links
    Link,
}

impl TokenClass {
    /// Application order, later classes win on overlap
    pub const APPLY_ORDER: [TokenClass; 8] = [
        TokenClass::Keyword,
        TokenClass::String,
        TokenClass::Number,
        TokenClass::Comment,
        TokenClass::Heading,
        TokenClass::Emphasis,
        TokenClass::InlineCode,
        TokenClass::Link,
    ];
}

/// A half-open byte range tagged with one class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub class: TokenClass,
    /// Byte offset where this span starts (inclusive)
    pub start: usize,
    /// Byte offset where this span ends (exclusive)
    pub end: usize,
}

impl TokenSpan {
    pub fn new(class: TokenClass, start: usize, end: usize) -> Self {
        Self { class, start, end }
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Every span matched in one text, not resolved for overlap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSpanSet {
    spans: Vec<TokenSpan>,
}

impl TokenSpanSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, span: TokenSpan) {
        self.spans.push(span);
    }

    pub fn spans(&self) -> &[TokenSpan] {
        &self.spans
    }

    /// Spans of a single class, in match order
    pub fn of_class(&self, class: TokenClass) -> impl Iterator<Item = &TokenSpan> + '_ {
        self.spans.iter().filter(move |span| span.class == class)
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_order_markdown_last() {
        let first_markdown = TokenClass::APPLY_ORDER
            .iter()
            .position(|c| *c == TokenClass::Heading)
            .unwrap();
        assert_eq!(first_markdown, 4);
        assert_eq!(TokenClass::APPLY_ORDER[7], TokenClass::Link);
    }

    #[test]
    fn test_of_class() {
        let mut set = TokenSpanSet::new();
        set.push(TokenSpan::new(TokenClass::Keyword, 0, 3));
        set.push(TokenSpan::new(TokenClass::Number, 4, 6));
        set.push(TokenSpan::new(TokenClass::Keyword, 7, 9));

        let keywords: Vec<_> = set.of_class(TokenClass::Keyword).map(|s| s.range()).collect();
        assert_eq!(keywords, vec![0..3, 7..9]);
        assert_eq!(set.len(), 3);
    }
}
