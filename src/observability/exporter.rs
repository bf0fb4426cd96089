//! Span exporter that appends OTLP/JSON documents to a rotating file.
//!
//! The plugin runs inside a WASI sandbox without network access of its own,
//! so spans are written to the plugin data directory instead of a collector.

use super::otlp;
use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes each exported batch as one line of OTLP/JSON.
struct OtlpFileExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: bool,
}

impl OtlpFileExporter {
    fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            resource,
            stopped: false,
        }
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.stopped {
            Err(TraceError::from("trace exporter already shut down"))
        } else {
            let line = otlp::encode_batch(&self.resource, &batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(format!("failed to write trace file: {e}")))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for OtlpFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFileExporter")
            .field("file", &self.file)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports every finished span to `path` immediately.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
