//! File kind detection
//!
//! Maps a file name to how it should be shown. The highlighting core
//! only ever sees the resolved language tag.

use std::path::Path;

/// Extensions shown as highlighted code, tagged by their extension
const CODE_EXTENSIONS: &[&str] = &[
    "swift", "c", "cpp", "h", "hpp", "java", "py", "js", "ts", "kt", "rs", "go",
];

/// Markdown language tag
pub const MARKDOWN_TAG: &str = "md";

/// How an opened file is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    Markdown,
    Code(String),
    PlainText,
}

impl FileKind {
    /// Language tag to highlight with, `None` for plain text
    pub fn language(&self) -> Option<&str> {
        match self {
            FileKind::Markdown => Some(MARKDOWN_TAG),
            FileKind::Code(lang) => Some(lang),
            FileKind::PlainText => None,
        }
    }
}

/// Detect file kind from the file name's extension
pub fn detect_file_kind(path: &Path) -> FileKind {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return FileKind::PlainText,
    };
    if ext == MARKDOWN_TAG {
        FileKind::Markdown
    } else if CODE_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::Code(ext)
    } else {
        FileKind::PlainText
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_file_kind() {
        assert_eq!(detect_file_kind(Path::new("README.md")), FileKind::Markdown);
        assert_eq!(detect_file_kind(Path::new("NOTES.MD")), FileKind::Markdown);
        assert_eq!(
            detect_file_kind(Path::new("main.swift")),
            FileKind::Code("swift".to_string())
        );
        assert_eq!(
            detect_file_kind(Path::new("src/lib.RS")),
            FileKind::Code("rs".to_string())
        );
        assert_eq!(detect_file_kind(Path::new("notes.txt")), FileKind::PlainText);
        assert_eq!(detect_file_kind(Path::new("Makefile")), FileKind::PlainText);
        // Only `.md` is Markdown, matching the viewer's picker
        assert_eq!(detect_file_kind(Path::new("doc.markdown")), FileKind::PlainText);
    }

    #[test]
    fn test_language_tag() {
        assert_eq!(FileKind::Markdown.language(), Some("md"));
        assert_eq!(FileKind::Code("py".to_string()).language(), Some("py"));
        assert_eq!(FileKind::PlainText.language(), None);
    }
}
