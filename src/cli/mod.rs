//! CLI argument parsing for digraph
//!
//! Global flags select the graph file, output file, config file, output
//! format and logging. Each subcommand maps to one engine operation.

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use digraph_core::graph::{Cost, PathReconstruction, VertexId};
pub use digraph_core::format::OutputFormat;
use parse::{parse_output_format, parse_path_reconstruction};

/// Digraph - directed weighted graph engine
#[derive(Parser, Debug)]
#[command(name = "digraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list file to operate on
    #[arg(long, short, global = true, env = "DIGRAPH_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Where mutated or generated graphs are written (defaults to --graph)
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Engine configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a graph with vertices 0..n and no edges
    New {
        /// Number of vertices
        vertices: u32,
    },

    /// Print the graph as an edge list
    Show,

    /// Print vertex and edge counts
    Info,

    /// List vertices
    Vertices,

    /// List edges with their costs
    Edges,

    /// Check whether an edge exists
    Exists { from: VertexId, to: VertexId },

    /// Number of edges entering a vertex
    InDegree { vertex: VertexId },

    /// Number of edges leaving a vertex
    OutDegree { vertex: VertexId },

    /// Vertices reachable over one outbound edge
    Outbound { vertex: VertexId },

    /// Vertices with an edge into the given vertex
    Inbound { vertex: VertexId },

    /// Cost of an edge
    Cost { from: VertexId, to: VertexId },

    /// Add an isolated vertex
    AddVertex { vertex: VertexId },

    /// Remove a vertex and every incident edge
    RemoveVertex { vertex: VertexId },

    /// Add an edge
    AddEdge {
        from: VertexId,
        to: VertexId,
        #[arg(allow_negative_numbers = true)]
        cost: Cost,
    },

    /// Remove an edge
    RemoveEdge { from: VertexId, to: VertexId },

    /// Change the cost of an existing edge
    SetCost {
        from: VertexId,
        to: VertexId,
        #[arg(allow_negative_numbers = true)]
        cost: Cost,
    },

    /// Write an independent copy of the graph to another file
    Copy {
        /// Destination edge-list file
        dest: PathBuf,
    },

    /// Generate a random graph without self-loops
    Random {
        /// Number of vertices
        vertices: u32,

        /// Number of edges
        edges: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Smallest edge cost (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        min_cost: Option<Cost>,

        /// Largest edge cost (inclusive)
        #[arg(long, allow_negative_numbers = true)]
        max_cost: Option<Cost>,
    },

    /// Fewest-hops path between two vertices
    Bfs { source: VertexId, target: VertexId },

    /// Lowest-cost walk between two vertices
    Walk {
        source: VertexId,
        target: VertexId,

        /// Successor table maintenance (tracked, direct-edges)
        #[arg(long, value_parser = parse_path_reconstruction)]
        reconstruction: Option<PathReconstruction>,
    },

    /// Topological order of the graph
    Topo,

    /// Highest-cost path over a DAG
    Highest { source: VertexId, target: VertexId },
}
