//! Tracer provider whose exporter writes OTLP JSON lines to a file.

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpJsonEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Span exporter writing one OTLP document per batch.
struct FileSpanExporter {
    sink: RotatingFile,
    encoder: OtlpJsonEncoder,
    shut_down: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.shut_down {
            Err(TraceError::from("file exporter is shut down"))
        } else {
            let line = self.encoder.encode(&batch).to_string();
            self.sink
                .append_line(&line)
                .map_err(|e| TraceError::from(format!("writing {}: {e}", self.sink.path().display())))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.encoder = OtlpJsonEncoder::new(resource);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("sink", &self.sink)
            .field("shut_down", &self.shut_down)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports every finished span to `trace_file`
/// immediately (simple exporter, no batching).
pub fn create_tracer_provider(trace_file: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        sink: RotatingFile::new(trace_file),
        encoder: OtlpJsonEncoder::new(&resource),
        shut_down: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ncosearch-otlp.json");
        let provider = create_tracer_provider(
            path.clone(),
            Resource::new(vec![KeyValue::new("service.name", "ncosearch")]),
        );

        provider.tracer("test").in_span("dispatch", |_cx| {});
        drop(provider);

        let contents = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        let span = &doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0];
        assert_eq!(span["name"], "dispatch");
        assert_eq!(span["traceId"].as_str().unwrap().len(), 32);
    }
}
