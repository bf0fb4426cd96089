//! Side effects produced by the application layer.
//!
//! Neither [`AppContext`](crate::app::context::AppContext) nor the event
//! handler performs I/O. They return [`Action`]s, and the plugin runtime
//! executes them in order: HTTP through the host's `web_request`, storage
//! through the session worker.
//!
//! # Example
//!
//! ```rust
//! use docfinder::api::ApiRequest;
//! use docfinder::app::Action;
//! use docfinder::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::Fetch(ApiRequest::doctor_list("http://localhost:4000")),
//!     Action::PostToWorker(WorkerMessage::load_session()),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::api::ApiRequest;
use crate::worker::WorkerMessage;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues an HTTP request through the host.
    ///
    /// The response comes back later as a `WebRequestResult` event tagged
    /// with the request kind.
    Fetch(ApiRequest),

    /// Posts a message to the session worker thread.
    ///
    /// Used to read the persisted token at startup and to persist token
    /// changes.
    PostToWorker(WorkerMessage),
}

impl Action {
    /// Persists `token` (or its absence) through the session worker.
    #[must_use]
    pub fn persist_token(token: Option<String>) -> Self {
        Self::PostToWorker(WorkerMessage::save_session(token))
    }
}
