//! Test phrase corpus loading.
//!
//! The corpus is a plain text file with one phrase per line. Blank lines and
//! surrounding whitespace are ignored.

use crate::error::{KvitreError, Result};
use std::path::Path;

/// Read all phrases from a corpus file.
pub fn read_phrases(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            KvitreError::InvalidInput(format!("Phrase file not found: {}", path.display()))
        } else {
            KvitreError::Io(e)
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_corpus(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrases.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_reads_trimmed_non_blank_lines() {
        let (_dir, path) = write_corpus("hello world\n\n  the quick brown fox  \n\t\nlast one");
        let phrases = read_phrases(&path).unwrap();
        assert_eq!(
            phrases,
            vec!["hello world", "the quick brown fox", "last one"]
        );
    }

    #[test]
    fn test_empty_file_yields_no_phrases() {
        let (_dir, path) = write_corpus("");
        assert!(read_phrases(&path).unwrap().is_empty());

        let (_dir, path) = write_corpus("\n\n   \n");
        assert!(read_phrases(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_phrases(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, KvitreError::InvalidInput(_)));
    }
}
