//! Size-capped trace file with numbered backups.
//!
//! When the live file would grow past its limit it is shifted to `<file>.1`,
//! existing backups move up one number, and the oldest one is deleted:
//!
//! ```text
//! docfinder-otlp.json    → docfinder-otlp.json.1
//! docfinder-otlp.json.1  → docfinder-otlp.json.2
//! docfinder-otlp.json.2  → docfinder-otlp.json.3
//! docfinder-otlp.json.3  → (removed)
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the live file is rotated (10 MB).
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept next to the live one.
pub const DEFAULT_BACKUPS: usize = 3;

/// Append-only line writer that rotates by size.
///
/// The file is opened lazily on the first write. An internal `Mutex` makes
/// it safe to share between the plugin and worker threads.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    state: Mutex<Option<OpenFile>>,
}

struct OpenFile {
    file: File,
    len: u64,
}

impl RotatingFile {
    /// Writer for `path` with the default size limit and backup count.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            state: Mutex::new(None),
        }
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn open(path: &Path) -> io::Result<OpenFile> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let len = file.metadata()?.len();
        Ok(OpenFile { file, len })
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }

        let oldest = self.backup_path(self.backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// A line larger than the limit is still written, alone, to a fresh file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing, or an error
    /// if another thread panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("trace writer lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;

        if state.is_none() {
            *state = Some(Self::open(&self.path)?);
        }
        let needs_rotation = state
            .as_ref()
            .is_some_and(|open| open.len > 0 && open.len + incoming > self.max_bytes);

        if needs_rotation {
            *state = None;
            self.rotate()?;
            *state = Some(Self::open(&self.path)?);
        }

        let open = state
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace file not open"))?;
        writeln!(open.file, "{line}")?;
        open.file.flush()?;
        open.len += incoming;
        Ok(())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_until_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 64, 2);

        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();
        assert_eq!(read(&path), "one\ntwo\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn rotates_and_keeps_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        // Each line is 10 bytes with its newline, so every write rotates.
        let writer = RotatingFile::with_limits(path.clone(), 15, 2);

        for line in ["line-0001", "line-0002", "line-0003", "line-0004"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&path), "line-0004\n");
        assert_eq!(read(&writer.backup_path(1)), "line-0003\n");
        assert_eq!(read(&writer.backup_path(2)), "line-0002\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn resumes_existing_file_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(&path, "x".repeat(20)).unwrap();

        let writer = RotatingFile::with_limits(path.clone(), 25, 1);
        writer.write_line("fresh").unwrap();

        assert_eq!(read(&path), "fresh\n");
        assert_eq!(read(&writer.backup_path(1)).len(), 20);
    }

    #[test]
    fn oversized_line_is_written_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = RotatingFile::with_limits(path.clone(), 4, 1);

        writer.write_line("much-longer-than-four").unwrap();
        assert_eq!(read(&path), "much-longer-than-four\n");
    }
}
