//! Tokenizer
//!
//! Runs every applicable rule over the whole text and collects the
//! matches as typed spans. Rules never see each other's output, so a
//! keyword inside a string is still reported as a keyword; the
//! compositor decides which class wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::trace;

use super::cache::{ContentHash, MemoCache, TokenKey};
use super::registry::PatternRegistry;
use super::tokens::TokenSpanSet;

/// Memoizing tokenizer over a shared registry
pub struct Tokenizer {
    registry: Arc<PatternRegistry>,
    cache: MemoCache<TokenKey, TokenSpanSet>,
    /// Number of uncached tokenizations performed
    runs: AtomicU64,
}

impl Tokenizer {
    pub fn new(registry: Arc<PatternRegistry>, capacity: usize) -> Self {
        Self {
            registry,
            cache: MemoCache::new(capacity),
            runs: AtomicU64::new(0),
        }
    }

    /// Token spans for `text` in `language`, cached by content hash
    pub fn tokenize(&self, text: &str, language: &str) -> Arc<TokenSpanSet> {
        let key = TokenKey {
            language: language.to_string(),
            content: ContentHash::of(text),
        };
        self.cache
            .get_or_insert_with(key, || self.tokenize_uncached(text, language))
    }

    /// Run every rule without consulting the cache
    pub fn tokenize_uncached(&self, text: &str, language: &str) -> TokenSpanSet {
        self.runs.fetch_add(1, Ordering::Relaxed);

        let mut set = TokenSpanSet::new();
        if text.is_empty() {
            return set;
        }
        for rule in self.registry.rules_for(language) {
            for span in rule.find_all(text) {
                set.push(span);
            }
        }
        trace!(language, len = text.len(), spans = set.len(), "tokenized");
        set
    }

    /// Number of uncached tokenizations performed so far
    pub fn runs(&self) -> u64 {
        self.runs.load(Ordering::Relaxed)
    }

    pub(crate) fn cache(&self) -> &MemoCache<TokenKey, TokenSpanSet> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::tokens::TokenClass;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Arc::new(PatternRegistry::builtin().unwrap()), 16)
    }

    fn texts<'t>(set: &TokenSpanSet, text: &'t str, class: TokenClass) -> Vec<&'t str> {
        set.of_class(class).map(|s| &text[s.range()]).collect()
    }

    #[test]
    fn test_swift_line() {
        let text = "let x = 42 // answer";
        let set = tokenizer().tokenize(text, "swift");

        assert_eq!(texts(&set, text, TokenClass::Keyword), vec!["let"]);
        assert_eq!(texts(&set, text, TokenClass::Number), vec!["42"]);
        assert_eq!(texts(&set, text, TokenClass::Comment), vec!["// answer"]);
        assert!(texts(&set, text, TokenClass::String).is_empty());
    }

    #[test]
    fn test_python_line() {
        let text = "def f(): return 'hi'  # done";
        let set = tokenizer().tokenize(text, "py");

        assert_eq!(texts(&set, text, TokenClass::Keyword), vec!["def", "return"]);
        assert_eq!(texts(&set, text, TokenClass::String), vec!["'hi'"]);
        assert_eq!(texts(&set, text, TokenClass::Comment), vec!["# done"]);
    }

    #[test]
    fn test_markdown_emphasis_and_code() {
        let text = "**bold** and `code`";
        let set = tokenizer().tokenize(text, "markdown");

        assert_eq!(texts(&set, text, TokenClass::Emphasis), vec!["**bold**"]);
        assert_eq!(texts(&set, text, TokenClass::InlineCode), vec!["`code`"]);
        assert!(texts(&set, text, TokenClass::Keyword).is_empty());
    }

    #[test]
    fn test_markdown_heading_and_link() {
        let text = "intro\n## Setup 2\nsee [docs](https://example.com)";
        let set = tokenizer().tokenize(text, "md");

        assert_eq!(texts(&set, text, TokenClass::Heading), vec!["## Setup 2"]);
        assert_eq!(
            texts(&set, text, TokenClass::Link),
            vec!["[docs](https://example.com)"]
        );
        // Numbers are still matched inside the heading
        assert_eq!(texts(&set, text, TokenClass::Number), vec!["2"]);
    }

    #[test]
    fn test_crlf_line_ends() {
        let tokenizer = tokenizer();

        let text = "# Title\r\nbody **x**\r\n";
        let set = tokenizer.tokenize(text, "md");
        assert_eq!(texts(&set, text, TokenClass::Heading), vec!["# Title"]);
        assert_eq!(texts(&set, text, TokenClass::Emphasis), vec!["**x**"]);

        let text = "let x = 1 // c\r\nlet y = 2";
        let set = tokenizer.tokenize(text, "swift");
        assert_eq!(texts(&set, text, TokenClass::Comment), vec!["// c"]);
        assert_eq!(texts(&set, text, TokenClass::Keyword), vec!["let", "let"]);

        let text = "x = 1  # note\r\n";
        let set = tokenizer.tokenize(text, "py");
        assert_eq!(texts(&set, text, TokenClass::Comment), vec!["# note"]);
    }

    #[test]
    fn test_language_tag_case() {
        let tokenizer = tokenizer();
        let text = "func f() // done";
        let lower = tokenizer.tokenize(text, "swift");
        let upper = tokenizer.tokenize(text, "Swift");
        assert_eq!(texts(&upper, text, TokenClass::Keyword), vec!["func"]);
        assert_eq!(lower.spans(), upper.spans());
    }

    #[test]
    fn test_heading_requires_space() {
        let text = "#hashtag\n####### seven";
        let set = tokenizer().tokenize(text, "md");
        assert!(texts(&set, text, TokenClass::Heading).is_empty());
    }

    #[test]
    fn test_markdown_rules_only_for_markdown() {
        let text = "# title with **bold**";
        let set = tokenizer().tokenize(text, "swift");
        assert!(texts(&set, text, TokenClass::Heading).is_empty());
        assert!(texts(&set, text, TokenClass::Emphasis).is_empty());
    }

    #[test]
    fn test_keyword_inside_string_still_matched() {
        let text = r#"print("if you can")"#;
        let set = tokenizer().tokenize(text, "py");
        assert_eq!(texts(&set, text, TokenClass::Keyword), vec!["if"]);
        assert_eq!(texts(&set, text, TokenClass::String), vec![r#""if you can""#]);
    }

    #[test]
    fn test_unknown_language_generic_only() {
        let text = "let s = \"x\" // 5";
        let set = tokenizer().tokenize(text, "brainfuck");
        assert!(set
            .spans()
            .iter()
            .all(|s| matches!(s.class, TokenClass::String | TokenClass::Number)));
        assert_eq!(texts(&set, text, TokenClass::Number), vec!["5"]);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = tokenizer();
        for tag in ["swift", "py", "md", "unknown", ""] {
            assert!(tokenizer.tokenize("", tag).is_empty());
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "for i in range(10): print('x')  # loop";
        let fresh = tokenizer().tokenize_uncached(text, "py");
        let tokenizer = tokenizer();
        let first = tokenizer.tokenize(text, "py");
        let second = tokenizer.tokenize_uncached(text, "py");
        assert_eq!(*first, fresh);
        assert_eq!(*first, second);
    }

    #[test]
    fn test_cache_hit_skips_rules() {
        let tokenizer = tokenizer();
        let first = tokenizer.tokenize("let a = 1", "swift");
        let second = tokenizer.tokenize("let a = 1", "swift");
        assert_eq!(tokenizer.runs(), 1);
        assert!(Arc::ptr_eq(&first, &second));

        // Same text, different language is a separate entry
        tokenizer.tokenize("let a = 1", "rs");
        assert_eq!(tokenizer.runs(), 2);
    }
}
