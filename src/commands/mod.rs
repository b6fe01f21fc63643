//! CLI commands for digraph
//!
//! Each command is a pure function over a graph that returns a report.
//! `dispatch` loads and saves graph files and prints reports.

pub mod analysis;
pub mod dispatch;
pub mod generate;
pub mod mutate;
pub mod query;

use serde::Serialize;

use crate::cli::OutputFormat;
use digraph_core::error::Result;

/// A command outcome that can be printed in either output format
pub trait Report: Serialize {
    /// Human-readable rendering, without a trailing newline
    fn human(&self) -> String;

    /// Whether `--quiet` suppresses the human rendering
    fn is_chatter(&self) -> bool {
        false
    }
}

/// Print a report in the requested format
pub fn emit<R: Report>(format: OutputFormat, quiet: bool, report: &R) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Human => {
            if quiet && report.is_chatter() {
                return Ok(());
            }
            let text = report.human();
            if !text.is_empty() {
                println!("{}", text);
            }
        }
    }
    Ok(())
}
