//! Run output recording (raw payloads, CSV summary, console table).
//!
//! Every run leaves two artifacts per clip plus one summary: the untouched
//! backend response as `NN.<api>.json`, and one row in `results.csv`. The
//! console table is a convenience view of the same rows.

use crate::error::Result;
use crate::transcription::{Backend, TranscriptionRecord};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// File name of the CSV summary inside the results directory.
const SUMMARY_FILE: &str = "results.csv";

/// Writes run artifacts under a results directory.
pub struct RunRecorder {
    results_dir: PathBuf,
}

impl RunRecorder {
    /// Create a recorder rooted at `results_dir`. The directory is created
    /// on first write.
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    /// The directory the recorder writes into.
    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Path of the raw payload file for one clip: `NN.<api>.json`.
    pub fn payload_path(&self, index: usize, backend: Backend) -> PathBuf {
        self.results_dir
            .join(format!("{:02}.{}.json", index, backend.label()))
    }

    /// Path of the CSV summary.
    pub fn summary_path(&self) -> PathBuf {
        self.results_dir.join(SUMMARY_FILE)
    }

    /// Write the raw backend payload for one clip, pretty-printed.
    pub fn write_payload(&self, index: usize, backend: Backend, payload: &Value) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.results_dir)?;
        let path = self.payload_path(index, backend);
        std::fs::write(&path, serde_json::to_string_pretty(payload)?)?;
        Ok(path)
    }

    /// Write the CSV summary for a whole run.
    ///
    /// Always written, even for an empty run, so downstream tooling can rely
    /// on the file existing with its header.
    pub fn write_summary(&self, records: &[TranscriptionRecord]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.results_dir)?;
        let path = self.summary_path();
        std::fs::write(&path, format_csv(records))?;
        Ok(path)
    }
}

/// Format records as a CSV summary.
///
/// Minimal quoting with doubled quote characters and CRLF row endings, so
/// the output is readable by spreadsheet tools and by `csv.reader` alike.
pub fn format_csv(records: &[TranscriptionRecord]) -> String {
    let mut output = String::from("input_phrase,transcript,confidence,api\r\n");

    for record in records {
        output.push_str(&format!(
            "{},{},{:.3},{}\r\n",
            csv_field(record.phrase.as_deref().unwrap_or("")),
            csv_field(&record.transcript),
            record.confidence,
            record.backend
        ));
    }

    output
}

/// Format records as a fixed-width console table.
pub fn format_table(records: &[TranscriptionRecord]) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:<40} | {:<40} | Conf  | API\n", "Input", "Transcript"));
    output.push_str(&"-".repeat(100));
    output.push('\n');

    for record in records {
        output.push_str(&format!(
            "{:<40} | {:<40} | {:<5} | {}\n",
            truncate_chars(record.phrase.as_deref().unwrap_or(""), 40),
            truncate_chars(&record.transcript, 40),
            format!("{:.3}", record.confidence),
            record.backend
        ));
    }

    output
}

/// Quote a CSV field only when it needs it, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Truncate to a number of characters, not bytes.
fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(phrase: &str, transcript: &str, confidence: f64, backend: Backend) -> TranscriptionRecord {
        TranscriptionRecord {
            phrase: Some(phrase.to_string()),
            transcript: transcript.to_string(),
            confidence,
            backend,
            payload: Value::Null,
        }
    }

    #[test]
    fn test_empty_run_still_gets_a_header() {
        assert_eq!(format_csv(&[]), "input_phrase,transcript,confidence,api\r\n");
    }

    #[test]
    fn test_csv_rows_carry_rounded_confidence_and_backend() {
        let csv = format_csv(&[record("hello world", "hello world", 0.98765, Backend::V2)]);
        assert!(csv.contains("hello world,hello world,0.988,v2\r\n"));
    }

    #[test]
    fn test_csv_quotes_only_fields_that_need_it() {
        let csv = format_csv(&[record(
            "one, two, three",
            "she said \"stop\"",
            0.5,
            Backend::V1,
        )]);
        assert!(csv.contains("\"one, two, three\",\"she said \"\"stop\"\"\",0.500,v1"));
    }

    #[test]
    fn test_table_truncates_long_fields_to_forty_chars() {
        let phrase = "x".repeat(50);
        let table = format_table(&[record(&phrase, "short", 0.9, Backend::V1)]);

        assert!(table.contains(&"x".repeat(40)));
        assert!(!table.contains(&"x".repeat(41)));
        assert!(table.starts_with("Input"));
        assert!(table.contains(&"-".repeat(100)));
    }

    #[test]
    fn test_table_truncation_is_char_safe() {
        let phrase = "å".repeat(50);
        let table = format_table(&[record(&phrase, "short", 0.9, Backend::V2)]);
        assert!(table.contains(&"å".repeat(40)));
        assert!(!table.contains(&"å".repeat(41)));
    }

    #[test]
    fn test_payload_files_are_named_by_index_and_backend() {
        let dir = TempDir::new().unwrap();
        let recorder = RunRecorder::new(dir.path());

        let path = recorder
            .write_payload(3, Backend::V2, &json!({"results": []}))
            .unwrap();

        assert!(path.ends_with("03.v2.json"));
        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({"results": []}));
    }

    #[test]
    fn test_summary_lands_in_the_results_dir() {
        let dir = TempDir::new().unwrap();
        let recorder = RunRecorder::new(dir.path().join("results"));

        let path = recorder
            .write_summary(&[record("hi", "hi", 1.0, Backend::V1)])
            .unwrap();

        assert_eq!(path, dir.path().join("results").join("results.csv"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("input_phrase,transcript,confidence,api"));
        assert!(contents.contains("hi,hi,1.000,v1"));
    }
}
