//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! Spans are written to `~/.local/share/ncosearch/ncosearch-otlp.json`
//! (honoring `XDG_DATA_HOME`), one OTLP document per line. The file rotates
//! at 10 MB and keeps three backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and filter resolution
//! - `tracer`: Provider and exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Rotating file sink

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
