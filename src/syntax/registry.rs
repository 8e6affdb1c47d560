//! Compiled pattern registry
//!
//! Holds every compiled rule: per-language keyword and comment rules
//! plus the language-agnostic string, number and Markdown rules.
//! Built once and shared by the tokenizer.

use std::collections::HashMap;

use tracing::debug;

use super::builtin;
use super::language::LanguageDefinition;
use super::rules::PatternRule;
use super::tokens::TokenClass;
use crate::error::Result;

// `(?R)` keeps `.` off `\r` so CRLF line ends stay outside spans

/// Double or single quoted, non-greedy, single line
const STRING_PATTERN: &str = r#"(?R)".*?"|'.*?'"#;
/// Integer or decimal literal
const NUMBER_PATTERN: &str = r"\b[0-9]+(\.[0-9]+)?\b";
const HEADING_PATTERN: &str = r"(?mR)^#{1,6} .*";
const EMPHASIS_PATTERN: &str = r"(?R)(\*\*|__)(.+?)(\*\*|__)";
const INLINE_CODE_PATTERN: &str = r"`[^`]+`";
const LINK_PATTERN: &str = r"\[[^\]]+\]\([^\)]+\)";

/// Compiled rules for every built-in language
pub struct PatternRegistry {
    /// Loaded language definitions
    languages: Vec<LanguageDefinition>,
    /// Tag to index into `languages`
    tag_map: HashMap<String, usize>,
    string: PatternRule,
    number: PatternRule,
    heading: PatternRule,
    emphasis: PatternRule,
    inline_code: PatternRule,
    link: PatternRule,
}

impl PatternRegistry {
    /// Compile the built-in languages and shared rules
    pub fn builtin() -> Result<Self> {
        let mut registry = Self {
            languages: Vec::new(),
            tag_map: HashMap::new(),
            string: PatternRule::new("string", STRING_PATTERN, TokenClass::String)?,
            number: PatternRule::new("number", NUMBER_PATTERN, TokenClass::Number)?,
            heading: PatternRule::new("heading", HEADING_PATTERN, TokenClass::Heading)?,
            emphasis: PatternRule::new("emphasis", EMPHASIS_PATTERN, TokenClass::Emphasis)?,
            inline_code: PatternRule::new(
                "inline_code",
                INLINE_CODE_PATTERN,
                TokenClass::InlineCode,
            )?,
            link: PatternRule::new("link", LINK_PATTERN, TokenClass::Link)?,
        };

        for lang in builtin::all_languages()? {
            registry.add_language(lang);
        }

        debug!(
            languages = registry.languages.len(),
            tags = registry.tag_map.len(),
            "compiled pattern registry"
        );
        Ok(registry)
    }

    /// Add a language definition, replacing any earlier owner of its tags
    pub fn add_language(&mut self, lang: LanguageDefinition) {
        let idx = self.languages.len();
        for tag in &lang.tags {
            self.tag_map.insert(tag.to_lowercase(), idx);
        }
        self.languages.push(lang);
    }

    /// Get a language definition by tag, ignoring case
    pub fn language(&self, tag: &str) -> Option<&LanguageDefinition> {
        self.tag_map
            .get(tag.to_lowercase().as_str())
            .map(|&idx| &self.languages[idx])
    }

    /// Keyword rule for a tag, if any
    pub fn keyword_pattern_for(&self, tag: &str) -> Option<&PatternRule> {
        self.language(tag).and_then(|lang| lang.keywords.as_ref())
    }

    /// Comment rule for a tag, if any
    pub fn comment_pattern_for(&self, tag: &str) -> Option<&PatternRule> {
        self.language(tag).and_then(|lang| lang.comment.as_ref())
    }

    /// Whether Markdown rules apply to a tag
    pub fn is_markdown(&self, tag: &str) -> bool {
        self.language(tag).is_some_and(|lang| lang.markdown)
    }

    pub fn string_pattern(&self) -> &PatternRule {
        &self.string
    }

    pub fn number_pattern(&self) -> &PatternRule {
        &self.number
    }

    /// Every rule that applies to a tag, in class application order
    pub fn rules_for(&self, tag: &str) -> Vec<&PatternRule> {
        let mut rules = Vec::with_capacity(8);
        if let Some(rule) = self.keyword_pattern_for(tag) {
            rules.push(rule);
        }
        rules.push(self.string_pattern());
        rules.push(self.number_pattern());
        if let Some(rule) = self.comment_pattern_for(tag) {
            rules.push(rule);
        }
        if self.is_markdown(tag) {
            rules.push(&self.heading);
            rules.push(&self.emphasis);
            rules.push(&self.inline_code);
            rules.push(&self.link);
        }
        rules
    }
}
