//! JSON file-based session store.
//!
//! Keeps the session record in memory and rewrites the whole file on every
//! change using write-to-temp + rename, so a crash never leaves a half-written
//! token behind.

use crate::domain::error::{DocfinderError, Result};
use crate::storage::backend::SessionStore;
use crate::storage::models::{SessionRecord, SESSION_FORMAT_VERSION};
use std::path::{Path, PathBuf};

/// Session store backed by a single JSON file.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; owned by the worker thread.
pub struct JsonSessionStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file contents.
    record: SessionRecord,
}

impl JsonSessionStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file is not an error: the store starts with no session and
    /// the file is created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read. A file that reads but does not parse, or
    /// has a newer format version, is moved to `<file>.bad` and the store
    /// starts signed out.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use docfinder::storage::{JsonSessionStore, SessionStore};
    /// use std::path::PathBuf;
    ///
    /// let store = JsonSessionStore::new(PathBuf::from("/tmp/session.json"))?;
    /// let token = store.load_token()?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing session store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let record = if file_path.exists() {
            match Self::read_record(&file_path) {
                Ok(record) => record,
                Err(DocfinderError::Storage(reason)) => {
                    Self::set_aside(&file_path, &reason);
                    SessionRecord::default()
                }
                Err(e) => return Err(e),
            }
        } else {
            tracing::debug!("no session file, starting signed out");
            SessionRecord::default()
        };

        Ok(Self { file_path, record })
    }

    fn read_record(path: &Path) -> Result<SessionRecord> {
        let contents = std::fs::read_to_string(path)?;
        let record: SessionRecord = serde_json::from_str(&contents)
            .map_err(|e| DocfinderError::Storage(format!("failed to parse session file: {e}")))?;

        if record.version > SESSION_FORMAT_VERSION {
            return Err(DocfinderError::Storage(format!(
                "session file version {} is newer than supported version {SESSION_FORMAT_VERSION}",
                record.version
            )));
        }

        tracing::debug!(
            version = record.version,
            has_token = record.token.is_some(),
            "loaded session file"
        );
        Ok(record)
    }

    /// Moves an unusable session file to `<file>.bad` so the next save
    /// starts clean. The user is simply signed out.
    fn set_aside(path: &Path, reason: &str) {
        let mut bad = path.as_os_str().to_os_string();
        bad.push(".bad");
        let bad = PathBuf::from(bad);

        match std::fs::rename(path, &bad) {
            Ok(()) => tracing::warn!(reason = %reason, moved_to = ?bad, "unusable session file set aside"),
            Err(e) => tracing::warn!(reason = %reason, error = %e, "unusable session file ignored"),
        }
    }

    fn write_record(&self, record: &SessionRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| DocfinderError::Storage(format!("failed to serialize session: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}

impl SessionStore for JsonSessionStore {
    fn load_token(&self) -> Result<Option<String>> {
        Ok(self.record.token.clone().filter(|t| !t.is_empty()))
    }

    fn save_token(&mut self, token: Option<&str>) -> Result<()> {
        let _span = tracing::debug_span!("json_save_token", signed_in = token.is_some()).entered();

        let record = SessionRecord::new(token.map(str::to_string));
        self.write_record(&record)?;
        self.record = record;

        tracing::debug!("session saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> (PathBuf, JsonSessionStore) {
        let path = dir.path().join("nested").join("session.json");
        let store = JsonSessionStore::new(path.clone()).unwrap();
        (path, store)
    }

    #[test]
    fn missing_file_means_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let (path, store) = store_in(&dir);
        assert_eq!(store.load_token().unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn token_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let (path, mut store) = store_in(&dir);
        store.save_token(Some("tok-1")).unwrap();
        drop(store);

        let reopened = JsonSessionStore::new(path).unwrap();
        assert_eq!(reopened.load_token().unwrap(), Some("tok-1".to_string()));
    }

    #[test]
    fn clearing_persists_absence() {
        let dir = tempfile::tempdir().unwrap();
        let (path, mut store) = store_in(&dir);
        store.save_token(Some("tok-1")).unwrap();
        store.save_token(None).unwrap();

        let reopened = JsonSessionStore::new(path.clone()).unwrap();
        assert_eq!(reopened.load_token().unwrap(), None);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn corrupt_file_is_set_aside_and_repaired() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = JsonSessionStore::new(path.clone()).unwrap();
        assert_eq!(store.load_token().unwrap(), None);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("session.json.bad")).unwrap(),
            "not json"
        );

        store.save_token(Some("t")).unwrap();
        let reopened = JsonSessionStore::new(path).unwrap();
        assert_eq!(reopened.load_token().unwrap(), Some("t".to_string()));
    }

    #[test]
    fn newer_format_starts_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"version": 99, "token": "x"}"#).unwrap();

        let store = JsonSessionStore::new(path).unwrap();
        assert_eq!(store.load_token().unwrap(), None);
    }
}
