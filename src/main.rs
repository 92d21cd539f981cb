//! `ncosearch` command-line front end.
//!
//! A line-oriented REPL over one search session. Input lines are parsed into
//! session events (see [`ncosearch::repl`]); the frame is re-rendered to
//! stdout whenever the session asks for it.
//!
//! ```text
//!  stdin lines ──► parse_line ──► SessionRuntime::handle ──► render
//!                                        │                     ▲
//!                                 in-flight search             │
//!                                        └──► settle ──────────┘
//! ```
//!
//! Input keeps being read while a search is in flight: the event loop
//! selects between the next line and the pending search, so mode, page size,
//! and query changes apply immediately and a second search is ignored until
//! the first one settles.

use clap::Parser;
use ncosearch::repl::{parse_line, Command, HELP};
use ncosearch::{initialize, Config, HttpSearchService, NcoSearchError, SessionRuntime, Theme};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const DEFAULT_COLUMNS: usize = 120;

/// Browse the National Classification of Occupations by exact or semantic search.
#[derive(Debug, Parser)]
#[command(name = "ncosearch", version, about)]
struct Args {
    /// TOML configuration file. Defaults to ~/.config/ncosearch/config.toml when present.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Search backend address.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Initial search mode: exact or semantic.
    #[arg(short, long)]
    mode: Option<String>,

    /// Initial semantic page size: 10, 50, 100, 500 or all.
    #[arg(short = 's', long)]
    page_size: Option<String>,

    /// Tracing filter directive, e.g. debug or ncosearch=trace.
    #[arg(long, value_name = "DIRECTIVE")]
    trace_level: Option<String>,

    /// Render width in columns. Defaults to $COLUMNS, else 120.
    #[arg(long)]
    width: Option<usize>,
}

impl Args {
    fn overrides(&self) -> BTreeMap<String, String> {
        [
            ("base_url", &self.base_url),
            ("mode", &self.mode),
            ("page_size", &self.page_size),
            ("trace_level", &self.trace_level),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key.to_string(), v)))
        .collect()
    }

    fn columns(&self) -> usize {
        self.width
            .or_else(|| std::env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
            .filter(|&c| c > 0)
            .unwrap_or(DEFAULT_COLUMNS)
    }
}

fn load_config(args: &Args) -> ncosearch::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => match ncosearch::infrastructure::default_config_path().filter(|p| p.exists()) {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        },
    };
    config.merge(&args.overrides());
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ncosearch: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(trace_file) = ncosearch::observability::init_tracing(&config) {
        tracing::info!(trace_file = %trace_file.display(), "tracing initialized");
    }

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("ncosearch: failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(&config, args.columns())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "ncosearch exited with an error");
            eprintln!("ncosearch: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, cols: usize) -> Result<(), NcoSearchError> {
    let service = Arc::new(HttpSearchService::new(config.base_url.clone())?);
    let (session, theme) = initialize(config);
    let mut runtime = SessionRuntime::new(session, service);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    draw(&mut stdout, &runtime, &theme, cols).await?;

    loop {
        tokio::select! {
            render = runtime.settle(), if runtime.has_in_flight() => {
                if render {
                    draw(&mut stdout, &runtime, &theme, cols).await?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };

                match parse_line(&line, runtime.session()) {
                    Command::Quit => break,
                    Command::Nothing => {}
                    Command::Help => write_text(&mut stdout, HELP).await?,
                    Command::Invalid(message) => write_text(&mut stdout, &message).await?,
                    Command::Events(events) => {
                        let mut render = false;
                        for event in events {
                            render |= runtime.handle(event);
                        }
                        if render {
                            draw(&mut stdout, &runtime, &theme, cols).await?;
                        }
                    }
                }
            }
        }
    }

    if runtime.has_in_flight() {
        tracing::debug!("exiting with a search still in flight");
    }
    Ok(())
}

async fn draw(
    stdout: &mut tokio::io::Stdout,
    runtime: &SessionRuntime<HttpSearchService>,
    theme: &Theme,
    cols: usize,
) -> Result<(), NcoSearchError> {
    let frame = ncosearch::ui::render(runtime.session(), theme, cols);
    write_text(stdout, &frame).await
}

async fn write_text(stdout: &mut tokio::io::Stdout, text: &str) -> Result<(), NcoSearchError> {
    stdout.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n").await?;
    }
    stdout.write_all(b"> ").await?;
    stdout.flush().await?;
    Ok(())
}
