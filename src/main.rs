//! devops-shell binary.
//!
//! Runs the shell on the terminal, or prints one headless frame with
//! `--snapshot`. Logs go to `--log-file` when given, since the renderer owns
//! the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use devops_shell::{RenderMode, Shell, ShellConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Fullscreen,
    Inline,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Fullscreen => RenderMode::Fullscreen,
            Mode::Inline => RenderMode::Inline,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route shown first
    #[arg(long, default_value = "home")]
    route: String,

    /// Render mode
    #[arg(long, value_enum, default_value_t = Mode::Fullscreen)]
    mode: Mode,

    /// Print one frame as plain text and exit
    #[arg(long)]
    snapshot: bool,

    /// Snapshot width in cells
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Snapshot height in rows
    #[arg(long, default_value_t = 24)]
    height: u16,

    /// Initial title
    #[arg(long, default_value = "")]
    title: String,

    /// Write logs to this file (RUST_LOG filters, default `debug`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn config(&self) -> ShellConfig {
        ShellConfig {
            render_mode: self.mode.into(),
            initial_route: self.route.clone(),
            initial_title: self.title.clone(),
            snapshot_size: (self.width, self.height),
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.config();
    info!(?config, snapshot = cli.snapshot, "starting");

    let shell = Shell::new(config).with_context(|| format!("cannot open route {:?}", cli.route))?;

    if cli.snapshot {
        print!("{}", shell.snapshot());
        return Ok(());
    }

    shell.run().context("terminal session failed")?;
    shell.unmount();
    Ok(())
}
