// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, constants and traits that describe what
// the chatbot works with.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A question/answer row from the corpus
pub mod qa_pair;

// Zero-padded one-hot matrices fed to the network
pub mod one_hot;

// Exit/negative phrase matching and the canned replies
pub mod intent;

// Core abstractions (traits) that other layers implement
pub mod traits;
