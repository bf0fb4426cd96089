//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! In the sandbox, `/host` is the cwd of the last focused terminal (usually
//! the user's home), so data ends up under `~/.local/share/zellij/docfinder`.

use std::path::PathBuf;

/// File name of the persisted session.
pub const SESSION_FILE_NAME: &str = "session.json";

/// File name of the OTLP trace export.
pub const TRACE_FILE_NAME: &str = "docfinder-otlp.json";

/// Returns the data directory for Docfinder storage.
///
/// # Examples
///
/// ```
/// use docfinder::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/docfinder");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("docfinder")
}

/// Returns the path of the persisted session file.
#[must_use]
pub fn session_file() -> PathBuf {
    get_data_dir().join(SESSION_FILE_NAME)
}

/// Returns the path of the trace export file.
#[must_use]
pub fn trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}
