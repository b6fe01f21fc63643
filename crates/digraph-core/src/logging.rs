//! Structured logging on stderr
//!
//! Filters resolve in order: `RUST_LOG`, `DIGRAPH_LOG`, then the level
//! chosen on the command line. Output is compact text or JSON lines.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log elapsed time since `start` at trace level, with optional fields:
/// `trace_time!(start, "random_graph", edges = graph.edge_count())`
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// How the subscriber should be set up
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions<'a> {
    /// Lower the default level from `warn` to `debug`
    pub verbose: bool,
    /// Explicit level or directive list; wins over `verbose`
    pub level: Option<&'a str>,
    /// Emit JSON lines instead of compact text
    pub json: bool,
}

impl LogOptions<'_> {
    fn directive(&self) -> String {
        match (self.level, self.verbose) {
            (Some(level), _) => filter_directive(level),
            (None, true) => filter_directive("debug"),
            (None, false) => filter_directive("warn"),
        }
    }
}

/// Install the global subscriber; fails if one is already set
pub fn init_tracing(options: &LogOptions<'_>) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("DIGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(options.directive()));

    let json = options.json.then(|| {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });
    let text = (!options.json).then(|| {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()
}

/// Expand a bare level (`debug`) into a filter covering both crates
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("digraph={level},digraph_core={level}")
    }
}
