//! Worker thread that owns the persisted session.
//!
//! Reading and writing the session file happens here so the plugin thread
//! never blocks on disk. Each message is handled inside a span linked to the
//! plugin span that sent it.

use crate::domain::error::{DocfinderError, Result};
use crate::infrastructure::paths;
use crate::storage::{JsonSessionStore, SessionStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker state: the session store, opened on first message.
#[derive(Serialize, Deserialize, Default)]
pub struct SessionWorker {
    #[serde(skip)]
    store: Option<Box<dyn SessionStore>>,
}

impl SessionWorker {
    /// Creates a worker over an already opened store.
    #[must_use]
    pub fn with_store(store: Box<dyn SessionStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Opens the default JSON store under the plugin data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the session file exists but cannot be read.
    pub fn open_default() -> Result<Self> {
        let store: Box<dyn SessionStore> = Box::new(JsonSessionStore::new(paths::session_file())?);
        Ok(Self::with_store(store))
    }

    fn store(&mut self) -> Result<&mut Box<dyn SessionStore>> {
        self.store
            .as_mut()
            .ok_or_else(|| DocfinderError::Worker("Session store not initialized".to_string()))
    }

    fn respond<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "session operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "session operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Attaches the sender's trace context to this thread for the duration
    /// of the returned guard.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes one message and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = message.kind()).entered();

        match message {
            WorkerMessage::LoadSession { .. } => Self::respond(
                "load session",
                self.store().and_then(|store| store.load_token()),
                |token| WorkerResponse::SessionLoaded { token },
            ),
            WorkerMessage::SaveSession { token, .. } => {
                let signed_in = token.is_some();
                Self::respond(
                    "save session",
                    self.store().and_then(|store| store.save_token(token.as_deref())),
                    |()| WorkerResponse::SessionSaved { signed_in },
                )
            }
        }
    }
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for SessionWorker {
    /// Entry point for messages posted by the plugin thread.
    ///
    /// Initializes tracing and the store on first use, decodes the JSON
    /// payload, and posts the JSON response back under the same name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        let response = if self.store.is_none() {
            match Self::open_default() {
                Ok(worker) => {
                    self.store = worker.store;
                    None
                }
                Err(e) => Some(WorkerResponse::Error {
                    message: format!("Failed to open session store: {e}"),
                }),
            }
        } else {
            None
        };

        let response = response.or_else(|| match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => Some(self.handle_message(worker_message)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                None
            }
        });

        let Some(response) = response else {
            return;
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_in(dir: &tempfile::TempDir) -> SessionWorker {
        let store = JsonSessionStore::new(dir.path().join("session.json")).unwrap();
        SessionWorker::with_store(Box::new(store))
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut worker = worker_in(&dir);

        assert_eq!(
            worker.handle_message(WorkerMessage::save_session(Some("tok".to_string()))),
            WorkerResponse::SessionSaved { signed_in: true }
        );
        assert_eq!(
            worker.handle_message(WorkerMessage::load_session()),
            WorkerResponse::SessionLoaded { token: Some("tok".to_string()) }
        );
    }

    #[test]
    fn corrupt_session_file_is_overwritten_on_save() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "not json").unwrap();
        let mut worker = worker_in(&dir);

        assert_eq!(
            worker.handle_message(WorkerMessage::load_session()),
            WorkerResponse::SessionLoaded { token: None }
        );
        assert_eq!(
            worker.handle_message(WorkerMessage::save_session(Some("t".to_string()))),
            WorkerResponse::SessionSaved { signed_in: true }
        );
        assert_eq!(
            worker.handle_message(WorkerMessage::load_session()),
            WorkerResponse::SessionLoaded { token: Some("t".to_string()) }
        );
    }

    #[test]
    fn uninitialized_worker_reports_error() {
        let mut worker = SessionWorker::default();
        assert!(matches!(
            worker.handle_message(WorkerMessage::load_session()),
            WorkerResponse::Error { .. }
        ));
    }
}
