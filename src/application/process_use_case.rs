// ============================================================
// Layer 2 — Process Use Case (the dispatcher)
// ============================================================
// Runs the same workflow over ANY Document:
//
//   Step 1: open()    — format-specific, picked at runtime
//   Step 2: read()    — shared default from the trait
//   Step 3: append    — modify the content through its accessor
//   Step 4: save()    — format-specific
//
// There is no `match` on the concrete type anywhere in here.
// Which open()/save() runs is decided by the vtable behind
// the `&mut dyn Document`.
//
// Reference: Rust Book §17.2 (Trait Objects and Dynamic Dispatch)

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::traits::Document;

/// Text appended to every document's content during processing
pub const DEFAULT_APPEND_SUFFIX: &str = "\n[Appended by processing script]";

// ─── Process Configuration ───────────────────────────────────────────────────
// Serialisable so it can be stored as JSON and reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Appended exactly once to each processed document
    pub append_suffix: String,

    /// Whether the demo prints its accessor walkthrough at the end
    pub show_encapsulation: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            append_suffix:      DEFAULT_APPEND_SUFFIX.to_string(),
            show_encapsulation: true,
        }
    }
}

// ─── ProcessUseCase ──────────────────────────────────────────────────────────
pub struct ProcessUseCase {
    config: ProcessConfig,
}

impl ProcessUseCase {
    pub fn new(config: ProcessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Process a single document of any format.
    pub fn process_document(&self, doc: &mut dyn Document, out: &mut dyn Write) -> Result<()> {
        tracing::info!("Processing '{}' ({})", doc.filename(), doc.format_name());

        writeln!(out, "\n--- Processing document: {} ---", doc.filename())?;

        doc.open(out)?;
        doc.read(out)?;

        doc.state_mut()
            .append(&self.config.append_suffix)
            .with_context(|| format!("Cannot modify '{}'", doc.filename()))?;

        doc.save(out)?;

        writeln!(out, "--- Finished processing ---")?;
        Ok(())
    }

    /// Process every document in order. Stops at the first failure.
    pub fn process_all(&self, docs: &mut [Box<dyn Document>], out: &mut dyn Write) -> Result<()> {
        for doc in docs.iter_mut() {
            self.process_document(doc.as_mut(), out)?;
        }
        tracing::info!("Processed {} documents", docs.len());
        Ok(())
    }
}
