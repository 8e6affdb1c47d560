//! Swift language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;

/// Create Swift language definition
pub fn swift_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Swift");
    lang.add_tag("swift");

    lang.set_keywords(&[
        "func", "let", "var", "if", "else", "for", "while", "struct", "class",
        "enum", "import", "return", "guard", "extension", "protocol", "init",
        "deinit", "where", "associatedtype",
    ])?;
    lang.set_comment(r"(?R)//.*")?;

    Ok(lang)
}
