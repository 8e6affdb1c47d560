//! JavaScript and TypeScript language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;

/// Create JavaScript/TypeScript language definition
pub fn javascript_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("JavaScript");
    lang.add_tag("js");
    lang.add_tag("ts");

    lang.set_keywords(&[
        "function", "const", "let", "var", "if", "else", "for", "while",
        "return", "class", "import", "export", "new",
    ])?;
    lang.set_comment(r"(?R)//.*")?;

    Ok(lang)
}
