//! Command implementations for all digraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use digraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use std::path::Path;

    use tracing::debug;

    use digraph_core::graph::{Cost, DirectedGraph, PathReconstruction, VertexId, WalkOptions};

    use crate::commands::dispatch::io;
    use crate::commands::generate::{CreatedReport, RandomOverrides};
    use crate::commands::mutate::MutationReport;
    use crate::commands::query::Direction;
    use crate::commands::{analysis, generate, mutate, query, Report};

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::New { vertices } => execute_new(ctx, *vertices),
            Commands::Show => query_graph(ctx, |g| Ok(query::show(g))),
            Commands::Info => query_graph(ctx, |g| Ok(query::info(g))),
            Commands::Vertices => query_graph(ctx, |g| Ok(query::vertices(g))),
            Commands::Edges => query_graph(ctx, |g| Ok(query::edges(g))),
            Commands::Exists { from, to } => query_graph(ctx, |g| query::exists(g, *from, *to)),
            Commands::InDegree { vertex } => {
                query_graph(ctx, |g| query::degree(g, *vertex, Direction::In))
            }
            Commands::OutDegree { vertex } => {
                query_graph(ctx, |g| query::degree(g, *vertex, Direction::Out))
            }
            Commands::Outbound { vertex } => {
                query_graph(ctx, |g| query::neighbors(g, *vertex, Direction::Out))
            }
            Commands::Inbound { vertex } => {
                query_graph(ctx, |g| query::neighbors(g, *vertex, Direction::In))
            }
            Commands::Cost { from, to } => query_graph(ctx, |g| query::cost(g, *from, *to)),
            Commands::AddVertex { vertex } => mutate_graph(ctx, |g| mutate::add_vertex(g, *vertex)),
            Commands::RemoveVertex { vertex } => {
                mutate_graph(ctx, |g| mutate::remove_vertex(g, *vertex))
            }
            Commands::AddEdge { from, to, cost } => {
                mutate_graph(ctx, |g| mutate::add_edge(g, *from, *to, *cost))
            }
            Commands::RemoveEdge { from, to } => {
                mutate_graph(ctx, |g| mutate::remove_edge(g, *from, *to))
            }
            Commands::SetCost { from, to, cost } => {
                mutate_graph(ctx, |g| mutate::set_cost(g, *from, *to, *cost))
            }
            Commands::Copy { dest } => execute_copy(ctx, dest),
            Commands::Random {
                vertices,
                edges,
                seed,
                min_cost,
                max_cost,
            } => execute_random(ctx, *vertices, *edges, *seed, *min_cost, *max_cost),
            Commands::Bfs { source, target } => {
                query_graph(ctx, |g| analysis::bfs(g, *source, *target))
            }
            Commands::Walk {
                source,
                target,
                reconstruction,
            } => execute_walk(ctx, *source, *target, *reconstruction),
            Commands::Topo => query_graph(ctx, analysis::topo),
            Commands::Highest { source, target } => {
                query_graph(ctx, |g| analysis::highest(g, *source, *target))
            }
        }
    }

    /// Load the graph, run a read-only command and print its report
    fn query_graph<R, F>(ctx: &CommandContext, run: F) -> Result<()>
    where
        R: Report,
        F: FnOnce(&DirectedGraph) -> Result<R>,
    {
        let graph = ctx.load_graph()?;
        debug!(elapsed = ?ctx.start.elapsed(), "load_graph");
        let report = run(&graph)?;
        debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        ctx.emit(&report)
    }

    /// Load the graph, apply a mutation, save and print the report
    fn mutate_graph<F>(ctx: &CommandContext, run: F) -> Result<()>
    where
        F: FnOnce(&mut DirectedGraph) -> Result<MutationReport>,
    {
        let mut graph = ctx.load_graph()?;
        debug!(elapsed = ?ctx.start.elapsed(), "load_graph");
        let report = run(&mut graph)?;
        ctx.save_graph(&graph)?;
        debug!(elapsed = ?ctx.start.elapsed(), "save_graph");
        ctx.emit(&report)
    }

    fn execute_new(ctx: &CommandContext, vertices: VertexId) -> Result<()> {
        let graph = generate::new_graph(vertices);
        let path = ctx.save_graph(&graph)?;
        ctx.emit(&CreatedReport::new("new", path.display(), &graph))
    }

    fn execute_copy(ctx: &CommandContext, dest: &Path) -> Result<()> {
        let graph = ctx.load_graph()?;
        let copy = graph.clone();
        io::write_graph(dest, &copy)?;
        ctx.emit(&CreatedReport::new("copy", dest.display(), &copy))
    }

    fn execute_random(
        ctx: &CommandContext,
        vertices: u32,
        edges: usize,
        seed: Option<u64>,
        min_cost: Option<Cost>,
        max_cost: Option<Cost>,
    ) -> Result<()> {
        let overrides = RandomOverrides {
            seed,
            min_cost,
            max_cost,
        };
        let options = overrides.apply(ctx.config.random_options());
        let graph = generate::random(vertices, edges, &options)?;
        let path = ctx.save_graph(&graph)?;
        ctx.emit(&CreatedReport::new("random", path.display(), &graph).with_seed(options.seed))
    }

    fn execute_walk(
        ctx: &CommandContext,
        source: VertexId,
        target: VertexId,
        reconstruction: Option<PathReconstruction>,
    ) -> Result<()> {
        let mut opts: WalkOptions = ctx.config.walk_options();
        if let Some(reconstruction) = reconstruction {
            opts.reconstruction = reconstruction;
        }
        query_graph(ctx, |g| analysis::walk(g, source, target, &opts))
    }
}
