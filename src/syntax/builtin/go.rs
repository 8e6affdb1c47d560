//! Go language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;

/// Create Go language definition
pub fn go_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Go");
    lang.add_tag("go");

    lang.set_keywords(&[
        "func", "var", "const", "if", "else", "for", "range", "switch", "case",
        "return", "struct", "interface", "package", "import", "type",
    ])?;
    lang.set_comment(r"(?R)//.*")?;

    Ok(lang)
}
