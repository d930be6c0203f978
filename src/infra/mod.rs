// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// File formats that belong to no business layer:
//
//   checkpoint.rs - Model artifact loading
//                   Reads model_config.json, checks it against
//                   the corpus vocabularies, then restores the
//                   named weights with Burn's CompactRecorder.
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Checkpointing)

/// Model config and weight loading
pub mod checkpoint;
