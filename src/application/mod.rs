// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers to answer one utterance.
//
// Rules for this layer:
//   - No ML math or model code here
//   - No printing or JSON here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Startup loading and the per-request reply workflow
pub mod respond_use_case;
