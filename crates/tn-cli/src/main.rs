//! CLI entry point for the testnav browser.
//!
//! This binary validates the start directory, assembles the configuration
//! from an optional JSON file and command-line overrides, sets up logging,
//! and hands the terminal to the interactive session.
//!
//! # Usage
//!
//! ```bash
//! # Browse the current directory
//! testnav
//!
//! # Browse a project, logging to a file
//! testnav ~/src/project --log-file /tmp/testnav.log --verbose
//!
//! # Use a different test runner
//! testnav --config testnav.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::fs::File;
use std::io;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use tn_core::{ColorScheme, Config};
use tracing::info;
use tracing_subscriber::fmt::writer::{EitherWriter, MakeWriter, OptionalWriter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Browse a project's directories and run its tests from the terminal.
#[derive(Debug, Parser)]
#[command(name = "testnav", version, about, long_about = None)]
struct Cli {
    /// Directory to start browsing in; navigation never goes above it.
    #[arg(default_value = ".")]
    dir: Utf8PathBuf,

    /// JSON configuration file.
    #[arg(short, long, env = "TESTNAV_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// File name suffix that marks test files (overrides the config file).
    #[arg(long)]
    test_suffix: Option<String>,

    /// Test command to launch (overrides the config file).
    #[arg(long)]
    program: Option<String>,

    /// Write logs to this file instead of stderr.
    #[arg(long, env = "TESTNAV_LOG")]
    log_file: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Stderr log writer that stays silent while the session owns the terminal.
struct DetachedStderr {
    owned: fn() -> bool,
}

impl DetachedStderr {
    const fn new() -> Self {
        Self {
            owned: tn_tui::owns_terminal,
        }
    }
}

impl<'a> MakeWriter<'a> for DetachedStderr {
    type Writer = OptionalWriter<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        if (self.owned)() {
            EitherWriter::B(io::sink())
        } else {
            EitherWriter::A(io::stderr())
        }
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Full logs go to `log_file` when one is given. Without it only warnings
/// and errors are written to stderr, and records emitted while the
/// terminal is in raw mode are dropped. `RUST_LOG` overrides the level in
/// both cases.
fn init_tracing(
    verbose: bool,
    no_color: bool,
    log_file: Option<&Utf8Path>,
) -> color_eyre::Result<()> {
    let default_level = match (log_file, verbose) {
        (None, _) => "warn",
        (Some(_), true) => "debug",
        (Some(_), false) => "info",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Some(path) = log_file {
        let file = File::create(path.as_std_path())
            .wrap_err_with(|| format!("failed to create log file {path}"))?;
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .with(filter)
            .init();
    } else {
        // Check if colors should be disabled (flag or NO_COLOR env var)
        let use_ansi = !no_color && std::env::var_os("NO_COLOR").is_none();
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(use_ansi)
                    .with_writer(DetachedStderr::new()),
            )
            .with(filter)
            .init();
    }

    Ok(())
}

/// Builds a [`Config`] from the configuration file and CLI overrides.
///
/// Validates that the start directory exists and is a directory before
/// anything else happens.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    tn_core::check_root(&cli.dir)?;

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load configuration from {path}"))?,
        None => Config::default(),
    };

    if let Some(suffix) = &cli.test_suffix {
        config.scan.test_suffix.clone_from(suffix);
    }
    if let Some(program) = &cli.program {
        config.run.program.clone_from(program);
    }
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        config.tui.color_scheme = ColorScheme::Monochrome;
    }

    config.validate()?;
    Ok(config)
}

/// Validates the start directory and configuration, then sets up logging.
///
/// Nothing is written to disk for a session that cannot start.
fn prepare(cli: &Cli) -> color_eyre::Result<Config> {
    let config = build_config(cli)?;
    init_tracing(cli.verbose, cli.no_color, cli.log_file.as_deref())?;
    Ok(config)
}

// =============================================================================
// SESSION
// =============================================================================

/// Runs the interactive session until the user quits or SIGTERM arrives.
async fn run_session(config: Config, root: Utf8PathBuf) -> color_eyre::Result<()> {
    info!(root = %root, program = %config.run.program, "Starting testnav");

    // Handle SIGTERM for graceful shutdown on Unix
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = tn_tui::run(config, root) => {
                result.map_err(|e| eyre!("TUI error: {e}"))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tn_tui::run(config, root)
            .await
            .map_err(|e| eyre!("TUI error: {e}"))?;
    }

    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Validate the start directory, load configuration, and initialize tracing
    let config = prepare(&cli)?;

    // 4. Run the session
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run_session(config, cli.dir));

    // A test process may still be running on the blocking pool; quitting
    // must not wait for it.
    runtime.shutdown_background();

    result
}
