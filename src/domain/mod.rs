// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// The core concepts of the document manager: what a document
// IS and what every document type must be able to do.
//
// Rules for this layer:
//   - NO knowledge of concrete formats (PDF, Word)
//   - NO clap, NO config files
//   - Only plain Rust structs, enums, and traits
//
// Output is written to a caller-supplied `dyn Write` sink,
// so the same code prints to stdout in the binary and to a
// Vec<u8> in tests.
//
// Reference: Rust Book §5 (Structs), §10 (Traits),
//            §17 (Object Oriented Patterns)

/// Filename plus the privately held content of a document
pub mod document;

/// The Document trait every format implements
pub mod traits;

/// Errors raised by document operations
pub mod error;
