//! `paster` command-line entry point.

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paster_kernel::api::ApiState;
use paster_kernel::host::{HostError, PasterHost, UpdateOutcome, spawn_host};
use paster_kernel::infrastructure::{config::Settings, server, telemetry::TelemetryBuilder};
use paster_kernel::vfs::{PathPolicy, WorkspaceFs};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use cli::input::read_input;
use cli::render;

#[derive(Parser)]
#[command(
    name = "paster",
    version,
    about = "Create and update workspace files from pasted File:/Content: text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace root. Falls back to `workspace.root` from the config file
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Config file to load instead of ./paster.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which files the pasted text would create or modify
    Preview {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,
        /// Print the change records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write every file in the pasted text
    Apply {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,
    },
    /// Print the on-disk and proposed content of one file
    Diff {
        /// Workspace-relative path of the file
        path: String,
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,
    },
    /// Serve the HTTP bridge for an editor front end
    Serve {
        /// Override `server.host`
        #[arg(long)]
        host: Option<String>,
        /// Override `server.port`
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Settings::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let mut telemetry = TelemetryBuilder::from_settings("paster", &config.telemetry);
    if cli.verbose {
        telemetry = telemetry.with_log_level("debug").with_span_events(true);
    }
    telemetry.init()?;

    if let Some(root) = cli.root {
        config.workspace.root = Some(root);
    }

    match cli.command {
        Commands::Preview { input, json } => {
            let host = open_host(&config, true)?;
            let text = read_input(input.as_deref()).await?;
            let records = host.preview_changes(&text).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", render::render_preview(&records, render::color_enabled_stdout()));
            }
        }
        Commands::Apply { input } => {
            let host = open_host(&config, true)?;
            let text = read_input(input.as_deref()).await?;
            let color = render::color_enabled_stdout();

            match host.update_files(&text).await? {
                UpdateOutcome::NothingToUpdate => {
                    eprintln!(
                        "{} No files to update. Check the input format.",
                        render::sym_warn(color)
                    );
                }
                UpdateOutcome::Written(count) => {
                    println!(
                        "{} Successfully created/updated {count} file(s).",
                        render::sym_check(color)
                    );
                }
            }
        }
        Commands::Diff { path, input } => {
            let host = open_host(&config, true)?;
            let text = read_input(input.as_deref()).await?;
            let color = render::color_enabled_stdout();
            host.preview_changes(&text).await?;

            match host.show_diff(&path).await {
                Ok(view) => print!(
                    "{}",
                    render::render_diff(&view.path, &view.original, &view.proposed, color)
                ),
                Err(e @ HostError::NewFile { .. }) => println!("{e}"),
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let paster = open_host(&config, false)?;
            let state = ApiState {
                has_workspace: config.workspace.root.is_some(),
                host: spawn_host(paster),
            };

            info!("Paster bridge starting...");
            tokio::select! {
                result = server::run_server(&config, state) => result?,
                _ = signal::ctrl_c() => info!("Shutdown signal received"),
            }
        }
    }

    Ok(())
}

/// Builds the host for `config`. One-shot commands fall back to the current
/// directory when no root is configured; the server runs without a workspace.
fn open_host(config: &Settings, default_to_cwd: bool) -> Result<PasterHost> {
    let policy = PathPolicy::from_setting(config.workspace.confine_to_root);

    let root = match (&config.workspace.root, default_to_cwd) {
        (Some(root), _) => root.clone(),
        (None, true) => std::env::current_dir().context("Failed to read the current directory")?,
        (None, false) => {
            warn!("No workspace root configured; file operations will fail");
            return Ok(PasterHost::without_workspace());
        }
    };

    let fs = WorkspaceFs::open(Some(root.as_path()), policy)?;
    let label = fs.root().display().to_string();
    Ok(PasterHost::new(Arc::new(fs), label))
}
