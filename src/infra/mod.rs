// ============================================================
// Layer 5 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any business layer.
//
//   config_store.rs — Saves and loads ProcessConfig as JSON so
//                     a suffix or demo setting can be kept
//                     between runs instead of retyped as flags.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            serde_json documentation

/// ProcessConfig JSON persistence
pub mod config_store;
