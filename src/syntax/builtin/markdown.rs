//! Markdown language definition
//!
//! Markdown has no keywords or comments; its heading, emphasis,
//! inline code and link rules are shared from the registry.

use crate::syntax::language::LanguageDefinition;

/// Create Markdown language definition
pub fn markdown_language() -> LanguageDefinition {
    let mut lang = LanguageDefinition::new("Markdown");
    lang.add_tag("md");
    lang.add_tag("markdown");
    lang.enable_markdown();
    lang
}
