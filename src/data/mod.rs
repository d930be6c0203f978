// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the corpus file on disk and the one-hot
// matrices the network consumes.
//
//   Happiness.csv
//       │
//       ▼
//   CsvCorpusLoader   → reads Latin-1 CSV rows into QaPairs
//       │
//       ▼
//   Preprocessor      → rewrites answer punctuation to spaces
//       │
//       ▼
//   WordTokenizer     → splits text into words and symbols
//       │
//       ▼
//   CorpusVocabulary  → sorted token tables + sequence bounds
//       │
//       ▼
//   Vocabulary::encode_sequence / one_hot → network input
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads the Q&A corpus from a CSV file
pub mod loader;

/// Cleans answer text the way the training data was cleaned
pub mod preprocessor;

/// Regex word/punctuation tokenizer
pub mod tokenizer;

/// Token ↔ index tables, sequence bounds, one-hot encoding
pub mod vocabulary;
