//! wordlink library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod gesture;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::format::TimePolicyKind;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
        Commands::Send { .. } => cli::commands::send::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Animate { .. } => cli::commands::animate::handle(&cli.command, cfg),
        Commands::Interactive { .. } => cli::commands::interactive::handle(&cli.command, cfg),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(base) = &cli.base {
        cfg.device_url = base.clone();
    }

    if let Some(offset) = &cli.offset {
        cfg.display_offset = Some(offset.clone());
        // An explicit offset only makes sense with the fixed policy.
        if cli.time_policy.is_none() {
            cfg.time_policy = TimePolicyKind::Fixed;
        }
    }

    if let Some(kind) = cli.time_policy {
        cfg.time_policy = kind;
    }

    if cli.no_color {
        cfg.color = false;
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // 2️⃣ load config ONCE
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ command-line overrides
    apply_overrides(&cli, &mut cfg);
    log::debug!("device: {}, time policy: {:?}", cfg.device_url, cfg.time_policy);

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
