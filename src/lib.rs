//! rTimetable library root.
//! Exposes the CLI parser, the lookup core, the table loaders and the web
//! front-end, plus the high-level run() function used by main.rs.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod tables;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Lookup { .. } => cli::commands::lookup::handle(&cli.command, cfg),
        Commands::Times { .. } => cli::commands::times::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the configured level.
/// Logs go to stderr so command output stays clean.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load(&config_path)?;

    // 3️⃣ apply data directory override from the command line
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }

    init_logging(&cfg.log_level);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
