//! On-disk record types for the session file.

use serde::{Deserialize, Serialize};

/// Current version of the session file format.
pub const SESSION_FORMAT_VERSION: u32 = 1;

/// Top-level document of the session file.
///
/// ```json
/// { "version": 1, "token": "eyJhbGciOi...", "updated_at": 1760659200 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Format version for future migrations.
    pub version: u32,

    /// Session token, `None` after sign-out.
    #[serde(default)]
    pub token: Option<String>,

    /// Unix timestamp of the last write.
    #[serde(default)]
    pub updated_at: i64,
}

impl SessionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(token: Option<String>) -> Self {
        Self {
            version: SESSION_FORMAT_VERSION,
            token,
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            version: SESSION_FORMAT_VERSION,
            token: None,
            updated_at: 0,
        }
    }
}
