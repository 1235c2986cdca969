// ============================================================
// Layer 3 — Document Errors
// ============================================================
// Typed errors for the domain. Higher layers wrap these in
// anyhow::Error, and can still downcast back to DocumentError
// when they need to match on the variant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    /// Content was mutated before `open()` ever loaded it
    #[error("content for '{filename}' is not loaded")]
    NotLoaded { filename: String },

    /// The abstract base type was requested by name
    #[error("'{name}' is an abstract document type and cannot be instantiated")]
    AbstractType { name: String },

    #[error("unknown document format: '{name}'")]
    UnknownFormat { name: String },

    /// The output sink refused a write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
