//! Language definitions for syntax highlighting
//!
//! A language definition bundles the language-specific rules (keywords
//! and line comments) with the tags that select it. Strings, numbers and
//! Markdown constructs are shared and live in the registry.

use super::rules::PatternRule;
use super::tokens::TokenClass;
use crate::error::Result;

/// A language definition for syntax highlighting
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    /// Language name (e.g., "Swift", "Python")
    pub name: String,
    /// Tags that select this language (e.g., ["c", "cpp", "h", "hpp"])
    pub tags: Vec<String>,
    /// Keyword rule, if the language has keywords
    pub keywords: Option<PatternRule>,
    /// Line comment rule, if the language has comments
    pub comment: Option<PatternRule>,
    /// Whether Markdown patterns apply
    pub markdown: bool,
}

impl LanguageDefinition {
    /// Create a new empty language definition
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tags: Vec::new(),
            keywords: None,
            comment: None,
            markdown: false,
        }
    }

    /// Add a selecting tag
    pub fn add_tag(&mut self, tag: &str) {
        self.tags.push(tag.to_string());
    }

    /// Set the keyword list
    pub fn set_keywords(&mut self, words: &[&str]) -> Result<()> {
        let name = format!("{}_keywords", self.name.to_lowercase());
        self.keywords = Some(PatternRule::keywords(&name, words, TokenClass::Keyword)?);
        Ok(())
    }

    /// Set the line comment pattern
    pub fn set_comment(&mut self, pattern: &str) -> Result<()> {
        let name = format!("{}_comment", self.name.to_lowercase());
        self.comment = Some(PatternRule::new(&name, pattern, TokenClass::Comment)?);
        Ok(())
    }

    /// Mark this language as Markdown
    pub fn enable_markdown(&mut self) {
        self.markdown = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_language() -> LanguageDefinition {
        let mut lang = LanguageDefinition::new("Test");
        lang.add_tag("test");
        lang.set_keywords(&["let", "if"]).unwrap();
        lang.set_comment(r"//.*").unwrap();
        lang
    }

    #[test]
    fn test_keywords_and_comment() {
        let lang = create_test_language();
        let text = "let x = 1 // if";

        let keywords = lang.keywords.as_ref().unwrap();
        let found: Vec<_> = keywords.find_all(text).map(|s| &text[s.range()]).collect();
        // The comment's `if` still matches; overlap is resolved later
        assert_eq!(found, vec!["let", "if"]);

        let comment = lang.comment.as_ref().unwrap();
        let found: Vec<_> = comment.find_all(text).map(|s| &text[s.range()]).collect();
        assert_eq!(found, vec!["// if"]);
    }

    #[test]
    fn test_rule_names() {
        let lang = create_test_language();
        assert_eq!(lang.keywords.unwrap().name, "test_keywords");
        assert_eq!(lang.comment.unwrap().name, "test_comment");
        assert!(!lang.markdown);
    }
}
