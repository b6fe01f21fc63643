//! Command dispatch logic for digraph

use std::time::Instant;

use digraph_core::config::EngineConfig;
use digraph_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;
mod io;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = EngineConfig::discover(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
