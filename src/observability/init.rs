//! Subscriber setup.

use super::tracer;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "ncosearch-otlp.json";

const SERVICE_NAME: &str = "ncosearch";

/// Installs the global subscriber: an [`EnvFilter`] plus an OpenTelemetry
/// layer exporting to `<data dir>/ncosearch-otlp.json`.
///
/// The filter directive is `RUST_LOG` when set, else `config.trace_level`,
/// else `info`. Returns the trace file path, or `None` when the data
/// directory cannot be created or a global subscriber is already installed.
/// Tracing is optional; neither case is an error.
///
/// # Example
///
/// ```rust,no_run
/// use ncosearch::observability::init_tracing;
/// use ncosearch::Config;
///
/// let config = Config {
///     trace_level: Some("ncosearch=debug".to_string()),
///     ..Default::default()
/// };
/// if let Some(path) = init_tracing(&config) {
///     tracing::info!(trace_file = %path.display(), "tracing enabled");
/// }
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;
    let trace_file = data_dir.join(TRACE_FILE_NAME);

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .ok()?;

    Some(trace_file)
}
