//! Digraph Core Library
//!
//! Directed weighted graph store, graph analyses, the edge-list codec and
//! random generation used by the `digraph` command-line tool.

pub mod config;
pub mod edgelist;
pub mod error;
pub mod format;
pub mod generate;
pub mod graph;
pub mod logging;
