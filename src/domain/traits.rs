// ============================================================
// Layer 3 — Core Trait (the Document capability set)
// ============================================================
// Traits are Rust's way of defining shared behaviour —
// the closest thing to an abstract base class.
//
//   - open() and save() are REQUIRED: every format must
//     provide its own version. A type that forgets one simply
//     does not compile, and a bare trait can never be
//     constructed on its own.
//   - read(), filename() and content() are PROVIDED: written
//     once here and inherited by every implementation.
//
// The set of formats is open-ended. Adding a new one means
// adding a new `impl Document for ...`; code written against
// `&mut dyn Document` picks it up without changes.
//
// Reference: Rust Book §10.2 (Default Implementations)
//            Rust Book §17.2 (Trait Objects)

use std::io::Write;

use crate::domain::document::DocumentState;
use crate::domain::error::Result;

// ─── Document ────────────────────────────────────────────────────────────────
/// Any document that can be opened, read, and saved.
///
/// Implementations:
///   - PdfDocument  → simulated PDF reader/writer
///   - WordDocument → simulated word processor
pub trait Document {
    /// Borrow the shared filename/content state
    fn state(&self) -> &DocumentState;

    fn state_mut(&mut self) -> &mut DocumentState;

    /// Short human-readable format label, used in logs
    fn format_name(&self) -> &'static str;

    /// Load this document's content, writing progress to `out`.
    fn open(&mut self, out: &mut dyn Write) -> Result<()>;

    /// Persist the current content. Simulated: only writes to `out`.
    fn save(&self, out: &mut dyn Write) -> Result<()>;

    fn filename(&self) -> &str {
        self.state().filename()
    }

    fn content(&self) -> Option<&str> {
        self.state().content()
    }

    /// Display the content.
    ///
    /// Reading an unopened document is not an error: it prints a
    /// "not loaded" notice and returns Ok(None).
    fn read(&self, out: &mut dyn Write) -> Result<Option<&str>> {
        match self.content() {
            None => {
                writeln!(
                    out,
                    "Content for '{}' is not loaded. Please open the document first.",
                    self.filename()
                )?;
                Ok(None)
            }
            Some(content) => {
                writeln!(
                    out,
                    "Reading content of '{}':\n---\n{}\n---",
                    self.filename(),
                    content
                )?;
                Ok(Some(content))
            }
        }
    }
}
