//! Append-only session log
//!
//! Features:
//! - One fixed-width line per completed round
//! - `#` comment lines and blank lines are skipped on read
//! - Never rewritten or truncated by the game

pub mod record;

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub use record::SessionRecord;

use crate::error::Result;
use crate::stats::StatsSummary;

/// Default log file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data.txt";

/// Handle to the session log file
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, creating the file if needed
    pub fn append(&self, record: &SessionRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", record.to_line())?;
        log::info!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Data lines in file order, comments and blanks removed.
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read, so
    /// one damaged line only spoils itself.
    pub fn read_lines(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path)?;
        let mut lines = Vec::new();
        for raw in BufReader::new(file).split(b'\n') {
            let raw = raw?;
            let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
            let line = String::from_utf8_lossy(raw);
            if !record::is_comment(&line) {
                lines.push(line.into_owned());
            }
        }
        Ok(lines)
    }

    /// Read the whole log and aggregate it
    pub fn summarize(&self) -> Result<StatsSummary> {
        let lines = self.read_lines()?;
        log::debug!("Read {} session lines from {}", lines.len(), self.path.display());
        Ok(StatsSummary::from_lines(lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, score: u32, high_score: u32, level: u8) -> SessionRecord {
        SessionRecord::new(
            NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            score,
            high_score,
            level,
        )
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::new(dir.path().join("data.txt"));
        let written = vec![
            record(1, 3, 3, 1),
            record(2, 17, 17, 4),
            record(3, 6, 17, 2),
            record(4, 25, 25, 5),
        ];
        for r in &written {
            log.append(r).unwrap();
        }

        let summary = log.summarize().unwrap();
        assert_eq!(summary.total_games(), written.len());
        assert_eq!(summary.records, written);
        assert_eq!(summary.best_ever, 25);
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "# Date Score HighScore Level\n\n").unwrap();

        let log = SessionLog::new(&path);
        log.append(&record(9, 1, 4, 1)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Date Score HighScore Level\n\n"));
        assert!(text.ends_with('\n'));
        assert_eq!(log.read_lines().unwrap().len(), 1);
    }

    #[test]
    fn test_damaged_line_does_not_hide_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut bytes = record(1, 10, 10, 2).to_line().into_bytes();
        bytes.extend_from_slice(b"\n\xff\xfe\r\n");
        bytes.extend_from_slice(record(2, 30, 30, 5).to_line().as_bytes());
        bytes.push(b'\n');
        std::fs::write(&path, bytes).unwrap();

        let summary = SessionLog::new(&path).summarize().unwrap();
        assert_eq!(summary.total_games(), 3);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.best_ever, 30);
    }

    #[test]
    fn test_whitespace_line_counts_as_a_game() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "# header\n\n   \n").unwrap();

        let log = SessionLog::new(&path);
        assert_eq!(log.read_lines().unwrap(), vec!["   ".to_string()]);
        let summary = log.summarize().unwrap();
        assert_eq!(summary.total_games(), 1);
        assert!(summary.records.is_empty());
        assert_eq!(summary.best_ever, 0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = SessionLog::new(dir.path().join("absent.txt"));
        let err = log.summarize().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_append_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for append
        let log = SessionLog::new(dir.path());
        assert!(log.append(&record(1, 0, 0, 1)).is_err());
    }
}
