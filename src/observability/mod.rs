//! Tracing with file-based OpenTelemetry export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → OtlpFileExporter → trace file
//! ```
//!
//! Spans land in `docfinder-otlp.json` under the plugin data directory, one
//! OTLP/JSON document per line, rotated at 10 MB with three numbered backups.
//! The level comes from the `trace_level` option (default `info`).
//!
//! - [`init`]: subscriber installation
//! - [`exporter`]: the `SpanExporter` and provider
//! - [`otlp`]: OTLP/JSON encoding
//! - [`rotating`]: size-capped file writer

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, SERVICE_NAME};
