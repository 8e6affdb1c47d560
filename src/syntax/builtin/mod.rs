//! Built-in language definitions
//!
//! This module provides keyword and comment rules for the
//! languages the viewer recognizes.

mod swift;
mod c;
mod python;
mod rust;
mod go;
mod javascript;
mod java;
mod markdown;

use super::language::LanguageDefinition;
use crate::error::Result;

/// Get all built-in language definitions
pub fn all_languages() -> Result<Vec<LanguageDefinition>> {
    Ok(vec![
        swift::swift_language()?,
        c::c_language()?,
        python::python_language()?,
        rust::rust_language()?,
        go::go_language()?,
        javascript::javascript_language()?,
        java::java_language()?,
        markdown::markdown_language(),
    ])
}
