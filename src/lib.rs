//! ncosearch: a search session controller for the National Classification of
//! Occupations (NCO).
//!
//! The crate drives one interactive search session against an NCO search
//! backend:
//! - Exact (literal) and semantic (ranked, scored) search modes
//! - Client-side pagination with a selectable page size in semantic mode
//! - At most one search in flight, with intents applying while it runs
//! - A terminal renderer and a line-oriented REPL front end
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  REPL front end (main.rs)                           │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Session Runtime (runtime.rs)                       │  ← Executes actions
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Pagination                                       │
//! │  - Snapshot computation                             │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Service Layer │
//! │ (ui/)         │                     │ (service/)    │
//! │ - Rendering   │                     │ - Trait       │
//! │ - Theming     │                     │ - HTTP client │
//! └───────────────┘                     └───────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data and config paths (infrastructure/)          │
//! │  - Error types (domain/error)                       │
//! │  - Occupation record (domain/occupation)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! # ~/.config/ncosearch/config.toml
//! base_url = "http://127.0.0.1:8000"
//! mode = "semantic"
//! page_size = 50          # 10, 50, 100, 500 or "all"
//! exact_page_size = 20
//! semantic_all_limit = 1000
//! theme = "paper"
//! trace_level = "ncosearch=debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use ncosearch::{handle_event, initialize, Config, Event};
//!
//! let (mut session, _theme) = initialize(&Config::default());
//! handle_event(&mut session, Event::SetQuery("medic".to_string()));
//! let (render, actions) = handle_event(&mut session, Event::Dispatch);
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod repl;
pub mod runtime;
pub mod service;
pub mod ui;

pub use app::{handle_event, Action, Event, PageSize, SearchMode, SearchSession, SessionSettings};
pub use domain::{NcoSearchError, Occupation, Result};
pub use runtime::SessionRuntime;
pub use service::{HttpSearchService, SearchService};
pub use ui::Theme;

use app::state::{DEFAULT_EXACT_PAGE_SIZE, DEFAULT_SEMANTIC_ALL_LIMIT};
use std::collections::BTreeMap;
use std::path::Path;

/// Runtime configuration.
///
/// Built from a string map ([`Config::from_map`]), a TOML file
/// ([`Config::from_file`]), or both, with later sources overriding earlier
/// ones through [`Config::merge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search backend address. Default: `http://127.0.0.1:8000`
    pub base_url: String,

    /// Rows per page in exact mode. Default: 20
    pub exact_page_size: usize,

    /// Initial semantic page size. Default: 10
    pub page_size: PageSize,

    /// Initial search mode. Default: exact
    pub mode: SearchMode,

    /// Records requested from semantic search when the page size is `All`.
    /// Default: 1000
    pub semantic_all_limit: usize,

    /// Built-in theme name: `slate` or `paper`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `debug` or `ncosearch=trace`. Default: `info`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: service::http::DEFAULT_BASE_URL.to_string(),
            exact_page_size: DEFAULT_EXACT_PAGE_SIZE,
            page_size: PageSize::default(),
            mode: SearchMode::default(),
            semantic_all_limit: DEFAULT_SEMANTIC_ALL_LIMIT,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map with fallback defaults.
    ///
    /// Unknown keys are ignored. Values that fail to parse keep the default
    /// and are logged at debug level.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ncosearch::{Config, PageSize, SearchMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("mode".to_string(), "semantic".to_string());
    /// map.insert("page_size".to_string(), "all".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.mode, SearchMode::Semantic);
    /// assert_eq!(config.page_size, PageSize::All);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut config = Self::default();
        config.merge(map);
        config
    }

    /// Overrides fields with the values present in `map`.
    pub fn merge(&mut self, map: &BTreeMap<String, String>) {
        if let Some(url) = map.get("base_url").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            self.base_url = url.to_string();
        }
        if let Some(size) = parse_entry(map, "exact_page_size").filter(|&n: &usize| n > 0) {
            self.exact_page_size = size;
        }
        if let Some(size) = parse_entry(map, "page_size") {
            self.page_size = size;
        }
        if let Some(mode) = parse_entry(map, "mode") {
            self.mode = mode;
        }
        if let Some(limit) = parse_entry(map, "semantic_all_limit").filter(|&n: &usize| n > 0) {
            self.semantic_all_limit = limit;
        }
        if let Some(theme) = map.get("theme") {
            self.theme_name = Some(theme.clone());
        }
        if let Some(file) = map.get("theme_file") {
            self.theme_file = Some(file.clone());
        }
        if let Some(level) = map.get("trace_level") {
            self.trace_level = Some(level.clone());
        }
    }

    /// Loads configuration from a flat TOML file.
    ///
    /// Scalar values of any type are accepted (`page_size = 50` and
    /// `page_size = "50"` are equivalent).
    ///
    /// # Errors
    ///
    /// Returns [`NcoSearchError::Io`] if the file cannot be read and
    /// [`NcoSearchError::Config`] if it is not valid TOML or holds tables or
    /// arrays.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let table: toml::Table = contents
            .parse()
            .map_err(|e| NcoSearchError::Config(format!("{}: {e}", path.as_ref().display())))?;

        let mut map = BTreeMap::new();
        for (key, value) in table {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                other => {
                    return Err(NcoSearchError::Config(format!(
                        "key '{key}' must be a scalar, found {}",
                        other.type_str()
                    )))
                }
            };
            map.insert(key, value);
        }

        Ok(Self::from_map(&map))
    }

    /// Fixed session parameters derived from this configuration.
    #[must_use]
    pub const fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            exact_page_size: self.exact_page_size,
            semantic_all_limit: self.semantic_all_limit,
            initial_mode: self.mode,
            initial_page_size: self.page_size,
        }
    }
}

fn parse_entry<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str) -> Option<T> {
    let raw = map.get(key)?;
    raw.trim().parse().map_or_else(
        |_| {
            tracing::debug!(key = key, value = %raw, "invalid config value, keeping default");
            None
        },
        Some,
    )
}

/// Creates a session and resolves the theme.
///
/// Theme resolution: `theme_file`, then `theme_name`, then the default. A
/// theme that fails to load falls back to the default with a debug log.
///
/// # Example
///
/// ```rust
/// use ncosearch::{initialize, Config, SearchMode};
///
/// let config = Config {
///     mode: SearchMode::Semantic,
///     theme_name: Some("paper".to_string()),
///     ..Default::default()
/// };
///
/// let (session, theme) = initialize(&config);
/// assert_eq!(session.mode(), SearchMode::Semantic);
/// assert_eq!(theme.name, "paper");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> (SearchSession, Theme) {
    tracing::debug!(base_url = %config.base_url, mode = %config.mode, "initializing ncosearch session");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    (SearchSession::new(config.session_settings()), theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_map(&map(&[
            ("base_url", "https://nco.example.org"),
            ("exact_page_size", "25"),
            ("page_size", "500"),
            ("mode", "semantic"),
            ("semantic_all_limit", "200"),
            ("theme", "paper"),
            ("theme_file", "~/t.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.base_url, "https://nco.example.org");
        assert_eq!(config.exact_page_size, 25);
        assert_eq!(config.page_size, PageSize::FiveHundred);
        assert_eq!(config.mode, SearchMode::Semantic);
        assert_eq!(config.semantic_all_limit, 200);
        assert_eq!(config.theme_name.as_deref(), Some("paper"));
        assert_eq!(config.theme_file.as_deref(), Some("~/t.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = Config::from_map(&map(&[
            ("exact_page_size", "0"),
            ("page_size", "7"),
            ("mode", "fuzzy"),
            ("semantic_all_limit", "lots"),
            ("base_url", "   "),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn merge_overrides_only_present_keys() {
        let mut config = Config::from_map(&map(&[("mode", "semantic"), ("page_size", "50")]));
        config.merge(&map(&[("page_size", "all")]));

        assert_eq!(config.mode, SearchMode::Semantic);
        assert_eq!(config.page_size, PageSize::All);
    }

    #[test]
    fn loads_toml_with_integer_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"semantic\"\npage_size = 100\nsemantic_all_limit = 300").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.mode, SearchMode::Semantic);
        assert_eq!(config.page_size, PageSize::Hundred);
        assert_eq!(config.semantic_all_limit, 300);
    }

    #[test]
    fn nested_toml_tables_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend]\nbase_url = \"http://x\"").unwrap();
        assert!(matches!(Config::from_file(file.path()), Err(NcoSearchError::Config(_))));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::from_file(dir.path().join("absent.toml")),
            Err(NcoSearchError::Io(_))
        ));
    }

    #[test]
    fn initialize_applies_settings_and_falls_back_on_unknown_theme() {
        let config = Config {
            exact_page_size: 5,
            theme_name: Some("neon".to_string()),
            ..Config::default()
        };
        let (session, theme) = initialize(&config);

        assert_eq!(session.settings().exact_page_size, 5);
        assert_eq!(theme.name, "slate");
    }

    #[test]
    fn theme_file_takes_precedence() {
        let config = Config {
            theme_name: Some("paper".to_string()),
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        };
        let (_, theme) = initialize(&config);
        assert_eq!(theme.name, "slate");
    }
}
