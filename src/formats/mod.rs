// ============================================================
// Layer 4 — Document Formats
// ============================================================
// Concrete implementations of the Document trait.
//
//   pdf.rs   — PdfDocument, a simulated PDF reader/writer
//   word.rs  — WordDocument, a simulated word processor
//   kind.rs  — DocumentKind, picks a format from a name or a
//              file extension and builds the matching variant
//
// Neither format touches the filesystem: opening assigns a
// fixed placeholder and saving only prints a message.
//
// Reference: Rust Book §10.2 (Implementing a Trait on a Type)

pub mod pdf;

pub mod word;

pub mod kind;
