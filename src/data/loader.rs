// ============================================================
// Layer 4 - Corpus Loader
// ============================================================
// Loads the Q&A corpus from a CSV file using the csv crate.
//
// The corpus file:
//   - has a header row with at least `Questions` and `Answer`
//     columns (other columns are ignored)
//   - is encoded as ISO-8859-1 (Latin-1), not UTF-8
//
// Latin-1 maps every byte 0x00-0xFF to the Unicode code point
// with the same value, so decoding is a byte → char cast. We
// read raw ByteRecords and decode each field that way, which
// never fails on bytes that would be invalid UTF-8.
//
// Any failure here is fatal to startup: the vocabulary the model
// was trained on cannot be rebuilt from a partial corpus.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::domain::qa_pair::QaPair;
use crate::domain::traits::CorpusSource;

const QUESTION_COLUMN: &str = "Questions";
const ANSWER_COLUMN:   &str = "Answer";

/// Reads the Q&A corpus from a Latin-1 CSV file.
/// Implements the CorpusSource trait from Layer 3.
pub struct CsvCorpusLoader {
    path: PathBuf,
}

impl CsvCorpusLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for CsvCorpusLoader {
    fn load_all(&self) -> Result<Vec<QaPair>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open corpus '{}'", self.path.display()))?;

        // ── Locate the two columns we need by header name ─────────────────────
        let headers = reader
            .byte_headers()
            .with_context(|| format!("Cannot read header row of '{}'", self.path.display()))?
            .clone();
        let question_idx = column_index(&headers, QUESTION_COLUMN)
            .with_context(|| format!("Corpus '{}' has no '{}' column",
                self.path.display(), QUESTION_COLUMN))?;
        let answer_idx = column_index(&headers, ANSWER_COLUMN)
            .with_context(|| format!("Corpus '{}' has no '{}' column",
                self.path.display(), ANSWER_COLUMN))?;

        // ── Decode every row ──────────────────────────────────────────────────
        let mut pairs = Vec::new();
        for (i, record) in reader.byte_records().enumerate() {
            // +2: one for the header row, one for 1-based line numbers
            let line   = i + 2;
            let record = record
                .with_context(|| format!("Malformed row {} in '{}'", line, self.path.display()))?;

            let question = record.get(question_idx)
                .with_context(|| format!("Row {line} has no question field"))?;
            let answer = record.get(answer_idx)
                .with_context(|| format!("Row {line} has no answer field"))?;

            pairs.push(QaPair::new(decode_latin1(question), decode_latin1(answer)));
        }

        tracing::info!("Loaded {} Q&A rows from '{}'", pairs.len(), self.path.display());
        Ok(pairs)
    }
}

/// Position of the header cell named `name`, if present.
fn column_index(headers: &csv::ByteRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| decode_latin1(h) == name)
}

/// Decode ISO-8859-1 bytes. Every byte is its own code point.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn corpus_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_loads_rows_by_column_name() {
        let f = corpus_file(
            b"Id,Answer,Questions\n1,Take a walk.,How do I relax?\n2,\"Yes, you can.\",Can I?\n",
        );
        let pairs = CsvCorpusLoader::new(f.path()).load_all().unwrap();
        assert_eq!(pairs, vec![
            QaPair::new("How do I relax?", "Take a walk."),
            QaPair::new("Can I?", "Yes, you can."),
        ]);
    }

    #[test]
    fn test_multiline_answer_is_preserved() {
        let f = corpus_file(b"Questions,Answer\nWhy?,\"line one\nline two\"\n");
        let pairs = CsvCorpusLoader::new(f.path()).load_all().unwrap();
        assert_eq!(pairs[0].answer, "line one\nline two");
    }

    #[test]
    fn test_decodes_latin1_bytes() {
        // 0xE9 is 'é' in Latin-1 and invalid as a lone UTF-8 byte
        let f = corpus_file(b"Questions,Answer\ncaf\xe9?,r\xe9sum\xe9\n");
        let pairs = CsvCorpusLoader::new(f.path()).load_all().unwrap();
        assert_eq!(pairs[0].question, "café?");
        assert_eq!(pairs[0].answer, "résumé");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let f = corpus_file(b"Questions,Reply\nhi,hello\n");
        let err = CsvCorpusLoader::new(f.path()).load_all().unwrap_err();
        assert!(format!("{err:#}").contains("'Answer'"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = CsvCorpusLoader::new("definitely/not/here.csv");
        assert!(loader.load_all().is_err());
    }
}
