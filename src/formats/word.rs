// ============================================================
// Layer 4 — Word Document
// ============================================================
// Same shape as PdfDocument; only the messages and the
// placeholder content differ.

use std::io::Write;

use crate::domain::document::DocumentState;
use crate::domain::error::Result;
use crate::domain::traits::Document;

/// Placeholder produced by "decoding" a Word document
pub const WORD_PLACEHOLDER: &str =
    "This is the rich-text, XML-based content of a Word document.";

/// A Word document. Like PdfDocument, it only wraps the shared DocumentState.
#[derive(Debug, Clone)]
pub struct WordDocument {
    state: DocumentState,
}

impl WordDocument {
    pub fn new(filename: impl Into<String>) -> Self {
        Self { state: DocumentState::new(filename) }
    }
}

impl Document for WordDocument {
    fn state(&self) -> &DocumentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DocumentState {
        &mut self.state
    }

    fn format_name(&self) -> &'static str {
        "Word"
    }

    fn open(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Opening Word document '{}' using a word processor library...",
            self.filename()
        )?;
        self.state.load(WORD_PLACEHOLDER);
        Ok(())
    }

    fn save(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Saving content to Word '{}' with specific Word formatting...",
            self.filename()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_before_open_is_not_an_error() {
        let doc     = WordDocument::new("team_memo.docx");
        let mut out = Vec::new();
        assert!(doc.read(&mut out).unwrap().is_none());
        assert!(String::from_utf8(out).unwrap().contains("is not loaded"));
    }

    #[test]
    fn test_open_then_read() {
        let mut doc = WordDocument::new("team_memo.docx");
        let mut out = Vec::new();
        doc.open(&mut out).unwrap();
        assert_eq!(doc.read(&mut out).unwrap(), Some(WORD_PLACEHOLDER));

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(
            "Opening Word document 'team_memo.docx' using a word processor library...\n"
        ));
    }
}
