// ============================================================
// Layer 4 — PDF Document
// ============================================================

use std::io::Write;

use crate::domain::document::DocumentState;
use crate::domain::error::Result;
use crate::domain::traits::Document;

/// Placeholder produced by "decoding" a PDF
pub const PDF_PLACEHOLDER: &str =
    "This is the complex, binary-formatted content of a PDF file.";

/// A PDF file. Carries no state beyond the shared DocumentState.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    state: DocumentState,
}

impl PdfDocument {
    pub fn new(filename: impl Into<String>) -> Self {
        Self { state: DocumentState::new(filename) }
    }
}

impl Document for PdfDocument {
    fn state(&self) -> &DocumentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut DocumentState {
        &mut self.state
    }

    fn format_name(&self) -> &'static str {
        "PDF"
    }

    fn open(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Opening PDF '{}' using a PDF reader library...", self.filename())?;
        self.state.load(PDF_PLACEHOLDER);
        tracing::debug!("Loaded {} chars from '{}'", PDF_PLACEHOLDER.len(), self.filename());
        Ok(())
    }

    fn save(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Saving content to PDF '{}' with specific PDF formatting...",
            self.filename()
        )?;
        Ok(())
    }
}
