//! progressdash library root.
//! Exposes the CLI parser, the high-level run() function and the
//! dataset, calculator and rendering modules behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let records = dataset::load();
    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();

    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Topics => cli::commands::topics::handle(&cli.command, &records),
        Commands::View { .. } => cli::commands::view::handle(&cli.command, cfg, &records, color),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, &records),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ `init` must work even when the existing file is broken
    let config_path = Config::resolve_path(cli.config.as_deref());
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(&config_path)?,
    };

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
