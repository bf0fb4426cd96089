//! Subscriber installation.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` reported on every exported span.
pub const SERVICE_NAME: &str = "Docfinder";

/// Level used when `trace_level` is not a valid filter directive.
const FALLBACK_LEVEL: &str = "info";

/// Installs the global subscriber: an `EnvFilter` from `config.trace_level`
/// feeding an OpenTelemetry layer that exports to the trace file.
///
/// Only the first call per thread group takes effect. Failing to create the
/// data directory leaves tracing disabled rather than failing the plugin.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level)
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(paths::trace_file(), resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
