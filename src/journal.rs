//! Append-only run journal with rotation.
//!
//! Each command run appends one line per event to a plain-text journal.
//! Once the journal grows past its line limit it is moved to a timestamped
//! `.bak` file and a fresh journal is started.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Default maximum number of lines before rotation.
pub const DEFAULT_MAX_LINES: usize = 1000;

/// Journal writer for one run.
#[derive(Debug, Clone)]
pub struct Journal {
    /// Path to the journal file.
    pub path: PathBuf,
    /// Maximum lines before rotation.
    pub max_lines: usize,
    /// Identifier stamped on every line of this run.
    pub run_id: String,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>, run_id: &str) -> Self {
        Self {
            path: path.into(),
            max_lines: DEFAULT_MAX_LINES,
            run_id: run_id.to_string(),
        }
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Append an entry.
    ///
    /// Format: `YYYY-MM-DD HH:MM:SS | <run-id> | <command> | <summary>`
    pub fn record(&self, command: &str, summary: &str) -> io::Result<()> {
        self.ensure_dir()?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} | {} | {} | {}\n", timestamp, self.run_id, command, summary);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;

        self.rotate_if_needed()
    }

    fn ensure_dir(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
            _ => Ok(()),
        }
    }

    fn rotate_if_needed(&self) -> io::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        if count_lines(&self.path)? <= self.max_lines {
            return Ok(());
        }
        rotate(&self.path)?;
        Ok(())
    }

    /// Read every line of the current journal.
    pub fn read_all(&self) -> io::Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        BufReader::new(File::open(&self.path)?).lines().collect()
    }
}

/// Count lines in a file.
pub fn count_lines(path: &Path) -> io::Result<usize> {
    Ok(BufReader::new(File::open(path)?).lines().count())
}

/// Move `path` to a timestamped backup and start an empty file in its place.
/// Returns the backup path.
pub fn rotate(path: &Path) -> io::Result<PathBuf> {
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_name = format!(
        "{}.{}.bak",
        path.file_name().and_then(|n| n.to_str()).unwrap_or("journal"),
        timestamp
    );
    let backup_path = path.with_file_name(backup_name);

    fs::rename(path, &backup_path)?;
    File::create(path)?;
    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backups(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("bak"))
            .collect()
    }

    #[test]
    fn test_journal_new() {
        let journal = Journal::new("/tmp/allot.log", "abc123");
        assert_eq!(journal.path, PathBuf::from("/tmp/allot.log"));
        assert_eq!(journal.max_lines, DEFAULT_MAX_LINES);
        assert_eq!(journal.run_id, "abc123");
    }

    #[test]
    fn test_record_line_format() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("logs/allot.log"), "abc123");

        journal.record("plan", "6 tasks, 5 staffed").unwrap();

        let lines = journal.read_all().unwrap();
        assert_eq!(lines.len(), 1);
        let parts: Vec<&str> = lines[0].split(" | ").collect();
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0].len(), "2024-01-01 00:00:00".len());
        assert_eq!(parts[1], "abc123");
        assert_eq!(parts[2], "plan");
        assert_eq!(parts[3], "6 tasks, 5 staffed");
    }

    #[test]
    fn test_rotation_past_limit() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("allot.log"), "run001").with_max_lines(3);

        for i in 0..3 {
            journal.record("plan", &format!("entry {}", i)).unwrap();
        }
        assert!(backups(dir.path()).is_empty());
        assert_eq!(journal.read_all().unwrap().len(), 3);

        journal.record("plan", "entry 3").unwrap();
        assert_eq!(backups(dir.path()).len(), 1);
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_journal_reads_empty() {
        let dir = TempDir::new().unwrap();
        let journal = Journal::new(dir.path().join("none.log"), "run001");
        assert!(journal.read_all().unwrap().is_empty());
    }
}
