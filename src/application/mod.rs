// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the domain and format layers to
// accomplish a specific goal.
//
// Rules for this layer:
//   - No format-specific branching (that's what the trait is for)
//   - No argument parsing (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The dispatcher: open → read → append → save over any Document
pub mod process_use_case;

// The scripted walkthrough run by `doc-manager demo`
pub mod demo_use_case;
