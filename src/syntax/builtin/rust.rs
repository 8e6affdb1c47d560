//! Rust language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;

/// Create Rust language definition
pub fn rust_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Rust");
    lang.add_tag("rs");

    lang.set_keywords(&[
        "fn", "let", "mut", "if", "else", "match", "for", "while", "loop",
        "struct", "enum", "impl", "trait", "use", "mod", "pub", "return",
    ])?;
    lang.set_comment(r"(?R)//.*")?;

    Ok(lang)
}
