//! Session storage abstraction.
//!
//! The [`SessionStore`] trait hides where the session token lives. The worker
//! thread owns one implementation and is the only code that touches it.

use crate::domain::error::Result;

/// Persistent home of the single session token.
///
/// Absence of a stored token means "no session"; implementations must not
/// distinguish between a missing file and an explicitly cleared token when
/// loading.
///
/// # Implementations
///
/// - [`JsonSessionStore`](crate::storage::JsonSessionStore): JSON file with atomic writes
pub trait SessionStore: Send {
    /// Returns the persisted token, or `None` when there is no session.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store exists but cannot be read.
    fn load_token(&self) -> Result<Option<String>>;

    /// Replaces the persisted token. `None` clears the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails; the previous value is then kept.
    fn save_token(&mut self, token: Option<&str>) -> Result<()>;
}
