//! Worker thread message types for cross-thread communication.
//!
//! Defines the request/response protocol between the plugin thread and the
//! session worker, plus trace context propagation so worker spans attach to
//! the plugin span that caused them.

use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` if the current span has no valid OpenTelemetry context,
    /// for example when tracing was never initialized.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that attach the current trace context.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_session(LoadSession {}),
    save_session(SaveSession { token: Option<String> }),
}

/// Messages sent from the plugin thread to the session worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the persisted session token.
    LoadSession {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Replace the persisted token; `None` signs out.
    SaveSession {
        token: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Variant name, safe to log: never includes the token.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoadSession { .. } => "LoadSession",
            Self::SaveSession { .. } => "SaveSession",
        }
    }

    /// Trace context carried by any variant.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadSession { trace_context } | Self::SaveSession { trace_context, .. } => {
                trace_context.as_ref()
            }
        }
    }
}

/// Responses sent from the session worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The persisted token, `None` when there is no session.
    SessionLoaded { token: Option<String> },

    /// A token write completed.
    SessionSaved { signed_in: bool },

    /// The worker operation failed.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_without_tracing_have_no_context() {
        let message = WorkerMessage::save_session(Some("tok".to_string()));
        assert_eq!(message.trace_context(), None);
        assert!(matches!(message, WorkerMessage::SaveSession { token: Some(ref t), .. } if t == "tok"));
    }

    #[test]
    fn context_is_omitted_from_json_when_absent() {
        let json = serde_json::to_string(&WorkerMessage::load_session()).unwrap();
        assert!(!json.contains("trace_context"));

        let back: WorkerMessage = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, WorkerMessage::LoadSession { trace_context: None }));
    }
}
