// ============================================================
// Layer 4 — DocumentKind
// ============================================================
// Maps a format name ("pdf", "docx", ...) or a file extension
// to a concrete Document implementation.
//
// The name "document" refers to the abstract capability set
// itself. It is recognised, but asking to build one is an
// error: only concrete formats can be instantiated.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            std::str::FromStr

use std::{fmt, path::Path, str::FromStr};

use crate::domain::error::{DocumentError, Result};
use crate::domain::traits::Document;
use crate::formats::{pdf::PdfDocument, word::WordDocument};

/// Name of the abstract base type
const ABSTRACT_NAME: &str = "document";

/// The concrete formats this build knows how to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Word,
}

impl DocumentKind {
    /// Pick a kind from the file's extension, e.g. "report.PDF" → Pdf.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext  = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DocumentError::UnknownFormat {
                name: path.display().to_string(),
            })?;
        ext.parse()
    }

    /// Build an unopened document of this kind.
    pub fn create(self, filename: impl Into<String>) -> Box<dyn Document> {
        match self {
            DocumentKind::Pdf  => Box::new(PdfDocument::new(filename)),
            DocumentKind::Word => Box::new(WordDocument::new(filename)),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf"                  => Ok(DocumentKind::Pdf),
            "word" | "docx" | "doc" => Ok(DocumentKind::Word),
            ABSTRACT_NAME          => Err(DocumentError::AbstractType { name: s.to_string() }),
            _                      => Err(DocumentError::UnknownFormat { name: s.to_string() }),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf  => write!(f, "pdf"),
            DocumentKind::Word => write!(f, "word"),
        }
    }
}
