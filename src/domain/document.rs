// ============================================================
// Layer 3 — Document State
// ============================================================
// The data every document carries, whatever its format:
//   - a filename, fixed at construction
//   - the loaded content, absent until the document is opened
//
// The content field is private. The only ways to touch it are
// the methods below, so "don't modify this directly" is enforced
// by the compiler instead of by a naming convention.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §7.3 (Privacy with pub)

use crate::domain::error::{DocumentError, Result};

/// Filename and content shared by every document variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentState {
    filename: String,

    /// None until `open()` runs
    content: Option<String>,
}

impl DocumentState {
    /// Create an unopened document state.
    /// Accepts &str or String via impl Into<String>.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content:  None,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The loaded content, or None if the document was never opened
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Replace the content wholesale. Variants call this from `open()`.
    pub fn load(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }

    /// Append text to the loaded content.
    ///
    /// Appending to a document that was never opened is an error
    /// rather than silently creating content out of nothing.
    pub fn append(&mut self, suffix: &str) -> Result<()> {
        match self.content.as_mut() {
            Some(content) => {
                content.push_str(suffix);
                Ok(())
            }
            None => Err(DocumentError::NotLoaded {
                filename: self.filename.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unloaded() {
        let s = DocumentState::new("a.pdf");
        assert_eq!(s.filename(), "a.pdf");
        assert!(s.content().is_none());
    }

    #[test]
    fn test_load_then_append_once() {
        let mut s = DocumentState::new("a.pdf");
        s.load("body");
        s.append(" tail").unwrap();
        assert_eq!(s.content(), Some("body tail"));
    }

    #[test]
    fn test_append_before_load_fails() {
        let mut s = DocumentState::new("memo.docx");
        let err   = s.append("x").unwrap_err();
        assert!(matches!(err, DocumentError::NotLoaded { ref filename } if filename == "memo.docx"));
        // State must be untouched by the failed append
        assert!(s.content().is_none());
    }

    #[test]
    fn test_load_replaces_previous_content() {
        let mut s = DocumentState::new("a.pdf");
        s.load("first");
        s.load("second");
        assert_eq!(s.content(), Some("second"));
    }
}
