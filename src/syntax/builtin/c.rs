//! C and C++ language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;

/// Create C/C++ language definition
pub fn c_language() -> Result<LanguageDefinition> {
    let mut lang = LanguageDefinition::new("C");
    lang.add_tag("c");
    lang.add_tag("cpp");
    lang.add_tag("h");
    lang.add_tag("hpp");

    // Preprocessor words are matched bare, `#` is left plain
    lang.set_keywords(&[
        "int", "long", "short", "void", "char", "double", "float", "if", "else",
        "for", "while", "return", "struct", "class", "namespace", "using",
        "include", "define", "auto", "template",
    ])?;
    lang.set_comment(r"(?R)//.*")?;

    Ok(lang)
}
