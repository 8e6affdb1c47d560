//! Java and Kotlin language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;

/// Create Java/Kotlin language definition
pub fn java_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Java");
    lang.add_tag("java");
    lang.add_tag("kt");

    lang.set_keywords(&[
        "class", "interface", "public", "private", "protected", "static", "void",
        "if", "else", "for", "while", "return", "new", "import", "package",
        "fun", "val", "var",
    ])?;
    lang.set_comment(r"(?R)//.*")?;

    Ok(lang)
}
