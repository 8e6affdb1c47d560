//! Python language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;

/// Create Python language definition
pub fn python_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("Python");
    lang.add_tag("py");

    lang.set_keywords(&[
        "def", "class", "import", "from", "return", "if", "else", "elif",
        "for", "while", "in", "and", "or", "not", "with", "as",
    ])?;
    lang.set_comment(r"(?R)#.*")?;

    Ok(lang)
}
