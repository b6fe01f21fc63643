//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use digraph_core::config::EngineConfig;
use digraph_core::error::Result;
use digraph_core::graph::DirectedGraph;

use super::io;
use crate::cli::Cli;
use crate::commands::{emit, Report};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Load the graph named by `--graph`
    pub fn load_graph(&self) -> Result<DirectedGraph> {
        let path = io::input_path(self.cli)?;
        io::read_graph(path)
    }

    /// Write a graph to `--output`, falling back to `--graph`
    pub fn save_graph(&self, graph: &DirectedGraph) -> Result<&'a Path> {
        let path = io::output_path(self.cli)?;
        io::write_graph(path, graph)?;
        Ok(path)
    }

    pub fn emit<R: Report>(&self, report: &R) -> Result<()> {
        emit(self.cli.format, self.cli.quiet, report)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("digraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A directed weighted graph engine.");
        println!();
        println!("Run `digraph --help` for usage information.");
        Ok(())
    }
}
