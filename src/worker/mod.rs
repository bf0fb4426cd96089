//! Background worker that owns the persisted session token.
//!
//! Uses Zellij's worker API so session file I/O never runs on the plugin's
//! event loop. Messages carry trace context for cross-thread spans.
//!
//! - `messages`: Request/response protocol types
//! - `handler`: Worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::SessionWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
