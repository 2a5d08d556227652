//! Queue REPL.
//!
//! Reads commands from stdin, applies them to an in-memory FIFO queue, and
//! prints each result to stdout until `exit` or end of input.

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fifo::exit_codes;
use fifo::io::config::{DEFAULT_CONFIG_FILE, ReplConfig, load_config, write_config};
use fifo::logging;
use fifo::session::Session;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fifo", version, about = "Interactive FIFO queue")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read queue commands from stdin until `exit` or end of input.
    Run {
        /// Path to the TOML config file.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Do not print a prompt before each command.
        #[arg(long)]
        no_prompt: bool,
    },
    /// Write a default config file if missing.
    Init {
        /// Path to the TOML config file.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run { config, no_prompt } => cmd_run(&config, no_prompt),
        Command::Init { config, force } => cmd_init(&config, force),
    }
}

fn cmd_run(config_path: &Path, no_prompt: bool) -> Result<()> {
    let mut config = load_config(config_path)?;
    if no_prompt {
        config.prompt.clear();
    }
    debug!(config = ?config, "loaded config");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    Session::new(stdin, stdout, config)
        .run()
        .context("queue session")?;
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        info!(path = %config_path.display(), "config exists, leaving it unchanged");
        return Ok(());
    }
    write_config(config_path, &ReplConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("wrote {}", config_path.display());
    Ok(())
}
