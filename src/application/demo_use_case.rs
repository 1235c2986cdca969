// ============================================================
// Layer 2 — Demo Use Case
// ============================================================
// The walkthrough printed by `doc-manager demo`:
//
//   1. Build a PDF and a Word document
//   2. Put them in one Vec<Box<dyn Document>>, even though they
//      are different types
//   3. Run the dispatcher over each, in order
//   4. Show what outside code can and cannot reach: the
//      filename and content are only visible through accessors
//
// Reference: Rust Book §17 (Object Oriented Features of Rust)

use std::io::Write;

use anyhow::Result;

use crate::application::process_use_case::{ProcessConfig, ProcessUseCase};
use crate::domain::traits::Document;
use crate::formats::{pdf::PdfDocument, word::WordDocument};

pub const REPORT_FILENAME: &str = "annual_report.pdf";
pub const MEMO_FILENAME:   &str = "team_memo.docx";

pub struct DemoUseCase {
    processor: ProcessUseCase,
}

impl DemoUseCase {
    pub fn new(config: ProcessConfig) -> Self {
        Self { processor: ProcessUseCase::new(config) }
    }

    /// Run the full walkthrough and hand back the processed documents,
    /// report first, memo second.
    pub fn execute(&self, out: &mut dyn Write) -> Result<Vec<Box<dyn Document>>> {
        let mut documents: Vec<Box<dyn Document>> = vec![
            Box::new(PdfDocument::new(REPORT_FILENAME)),
            Box::new(WordDocument::new(MEMO_FILENAME)),
        ];

        self.processor.process_all(&mut documents, out)?;

        if self.processor.config().show_encapsulation {
            show_encapsulation(documents[0].as_ref(), out)?;
        }

        Ok(documents)
    }
}

/// Print the accessor walkthrough for one document.
fn show_encapsulation(doc: &dyn Document, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n--- Demonstrating Encapsulation ---")?;
    writeln!(out, "Accessing the filename (read-only accessor): {}", doc.filename())?;
    writeln!(
        out,
        "Accessing the content (read-only accessor): {}",
        doc.content().unwrap_or("<not loaded>")
    )?;
    writeln!(out, "The content field itself is private: code outside the document cannot assign to it.")?;
    writeln!(out, "Changes go through methods such as open() and append(), which keep the state consistent.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::pdf::PDF_PLACEHOLDER;

    #[test]
    fn test_demo_processes_report_then_memo() {
        let mut out = Vec::new();
        let docs    = DemoUseCase::new(ProcessConfig::default()).execute(&mut out).unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].filename(), REPORT_FILENAME);
        assert_eq!(docs[1].filename(), MEMO_FILENAME);
        assert_eq!(
            docs[0].content(),
            Some("This is the complex, binary-formatted content of a PDF file.\n[Appended by processing script]")
        );

        let text = String::from_utf8(out).unwrap();
        let report_at = text.find("--- Processing document: annual_report.pdf ---").unwrap();
        let memo_at   = text.find("--- Processing document: team_memo.docx ---").unwrap();
        assert!(report_at < memo_at);
    }

    #[test]
    fn test_encapsulation_section_shows_report() {
        let mut out = Vec::new();
        DemoUseCase::new(ProcessConfig::default()).execute(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("--- Demonstrating Encapsulation ---"));
        assert!(text.contains("Accessing the filename (read-only accessor): annual_report.pdf"));
        assert!(text.contains(&format!("Accessing the content (read-only accessor): {PDF_PLACEHOLDER}")));
    }

    #[test]
    fn test_encapsulation_section_can_be_disabled() {
        let config  = ProcessConfig { show_encapsulation: false, ..Default::default() };
        let mut out = Vec::new();
        DemoUseCase::new(config).execute(&mut out).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains("Demonstrating Encapsulation"));
    }
}
