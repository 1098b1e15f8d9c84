//! Batch scaffolding for transcribing pre-recorded clips.
//!
//! Discovers audio files in a directory and lays down one placeholder JSON
//! record per clip. The placeholders mark where real transcripts go once a
//! recognition backend is wired into the batch path.

use crate::error::{KvitreError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extensions treated as transcribable audio, matched case-insensitively.
pub const AUDIO_EXTENSIONS: [&str; 5] = ["wav", "mp3", "flac", "m4a", "ogg"];

/// Lifecycle state of a batch item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StubStatus {
    Pending,
}

/// Placeholder record written for one clip before transcription exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubRecord {
    pub audio_file: String,
    pub status: StubStatus,
    pub note: String,
}

impl StubRecord {
    /// A pending record for `audio_file`.
    pub fn pending(audio_file: &Path) -> Self {
        Self {
            audio_file: audio_file.display().to_string(),
            status: StubStatus::Pending,
            note: "Extend the batch command with a recognition backend and write real \
                   transcripts here."
                .to_string(),
        }
    }
}

/// List the audio files in `audio_dir`, sorted by path.
///
/// Only plain files with a known audio extension count. Subdirectories are
/// not descended into.
pub fn discover_audio_files(audio_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(audio_dir).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            KvitreError::InvalidInput(format!("Audio directory not found: {}", audio_dir.display()))
        }
        _ => KvitreError::Io(e),
    })?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_audio_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Write one pending record per clip into `json_dir`, named `<stem>.json`.
///
/// Returns the number of records written.
pub fn write_stub_records(files: &[PathBuf], json_dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(json_dir)?;

    let mut written = 0;
    for file in files {
        let stem = match file.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => continue,
        };

        let record = StubRecord::pending(file);
        let path = json_dir.join(format!("{}.json", stem));
        std::fs::write(&path, serde_json::to_string_pretty(&record)?)?;
        debug!("Wrote {}", path.display());
        written += 1;
    }

    Ok(written)
}

fn has_audio_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            AUDIO_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_discovery_is_sorted_and_extension_filtered() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "b.wav");
        touch(dir.path(), "a.mp3");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "clip.OGG");
        std::fs::create_dir(dir.path().join("nested.wav")).unwrap();

        let files = discover_audio_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        assert_eq!(names, vec!["a.mp3", "b.wav", "clip.OGG"]);
    }

    #[test]
    fn test_empty_directory_discovers_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(discover_audio_files(dir.path()).unwrap().is_empty());
        assert_eq!(write_stub_records(&[], dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_missing_directory_is_reported_by_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");

        let err = discover_audio_files(&missing).unwrap_err();
        match err {
            KvitreError::InvalidInput(msg) => assert!(msg.contains("absent")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_stub_records_are_pending_and_named_by_stem() {
        let dir = TempDir::new().unwrap();
        let audio_dir = dir.path().join("audio");
        let json_dir = dir.path().join("json");
        std::fs::create_dir_all(&audio_dir).unwrap();
        touch(&audio_dir, "sweep.wav");

        let files = discover_audio_files(&audio_dir).unwrap();
        let written = write_stub_records(&files, &json_dir).unwrap();
        assert_eq!(written, 1);

        let raw = std::fs::read_to_string(json_dir.join("sweep.json")).unwrap();
        assert!(raw.contains("\"status\": \"pending\""));

        let record: StubRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.audio_file, files[0].display().to_string());
        assert_eq!(record.status, StubStatus::Pending);
        assert!(record.note.contains("batch"));
    }
}
