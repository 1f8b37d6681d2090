//! # Gesture Calculator CLI
//!
//! Reads classified gesture labels from stdin and prints the calculator's
//! response for each as one JSON line.
//!
//! ## Usage
//! ```text
//! $ printf '5\ntambah\n3\n' | gesture-cli
//! {"session_id":"default_user","detected_class":"5",...,"message":"Got it: 5. Now show an operator.","expression":"5"}
//! {"session_id":"default_user","detected_class":"tambah",...}
//! {"session_id":"default_user","detected_class":"3",...,"expression":"5 + 3 = 8"}
//! ```
//!
//! ## Configuration
//! - `--config <path>` or the platform default `calculator.toml`
//! - `GESTURE_DEFAULT_SESSION`, `GESTURE_MAX_SESSIONS` override the file
//! - `RUST_LOG` controls log verbosity (logs go to stderr)

mod input;

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use gesture_session::{SessionConfig, SessionId, SessionRegistry};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::input::{parse_line, Command};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "gesture-cli", version, about = "Sign-language gesture calculator driver")]
struct Args {
    /// Path to calculator.toml (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session to use for lines without an explicit `@session` prefix.
    #[arg(long)]
    session: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Write the default configuration file and exit.
    #[arg(long)]
    init_config: bool,

    /// With `--init-config`, replace an existing file.
    #[arg(long, requires = "init_config")]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    if args.init_config {
        let path = init_config(args.config, args.force)?;
        info!(?path, "Default configuration written");
        return Ok(());
    }

    let config = SessionConfig::load(args.config.clone()).context("loading configuration")?;
    let registry = SessionRegistry::from_config(&config)?;

    let session = SessionId::new(args.session.unwrap_or_else(|| config.session.default_id.clone()))
        .context("invalid --session")?;
    info!(session = %session, "Reading labels from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                if !handle_line(&registry, &session, &line, args.pretty)? {
                    break;
                }
            }
            _ = &mut shutdown => break,
        }
    }

    info!(sessions = registry.session_count()?, "Shutdown complete");
    Ok(())
}

/// Writes the default configuration. Refuses to replace an existing file
/// unless `force` is set.
fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<PathBuf> {
    let path = path
        .or_else(SessionConfig::default_config_path)
        .context("no config path available")?;
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    SessionConfig::default()
        .save(Some(path))
        .context("writing default configuration")
}

/// Handles one input line. Returns `false` when the loop should stop.
fn handle_line(
    registry: &SessionRegistry,
    current: &SessionId,
    line: &str,
    pretty: bool,
) -> anyhow::Result<bool> {
    let command = match parse_line(line) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(true),
        Err(e) => {
            warn!(line, error = %e, "Skipping malformed line");
            emit(&ErrorLine { error: e.to_string() }, pretty)?;
            return Ok(true);
        }
    };

    match command {
        Command::Label { session, label } => {
            let id = match session {
                Some(raw) => match SessionId::new(raw) {
                    Ok(id) => id,
                    Err(e) => {
                        warn!(error = %e, "Rejecting line with invalid session id");
                        emit(&ErrorLine { error: e.to_string() }, pretty)?;
                        return Ok(true);
                    }
                },
                None => current.clone(),
            };
            emit(&registry.process(&id, &label)?, pretty)?;
        }
        Command::Reset => emit(&registry.reset(current)?, pretty)?,
        Command::Sessions => emit(&registry.sessions()?, pretty)?,
        Command::Quit => return Ok(false),
    }

    Ok(true)
}

#[derive(Debug, Serialize)]
struct ErrorLine {
    error: String,
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves on Ctrl-C (or SIGTERM on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
