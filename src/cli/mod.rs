//! Command line arguments of the `dsakit` binary

pub mod commands;
pub mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dsakit::{NumNodes, Weight, io::FileFormat};

/// Classic graph and string algorithms on edge list files
#[derive(Parser, Debug)]
#[command(name = "dsakit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, either a level (`trace`) or a full directive (`dsakit=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Format of graph files (`edgelist` or `weighted`)
    #[arg(long, global = true, env = "DSAKIT_FORMAT", default_value = "weighted")]
    pub format: FileFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Single source shortest paths (Dijkstra, or Bellman-Ford with --max-edges)
    ShortestPath {
        /// Graph file
        file: PathBuf,

        /// Source node (1-based)
        #[arg(long, short)]
        source: u32,

        /// Only report the distance and path to this node (1-based)
        #[arg(long, short)]
        target: Option<u32>,

        /// Only consider paths with at most this many edges; allows negative weights
        #[arg(long)]
        max_edges: Option<NumNodes>,
    },

    /// Topological order of a directed graph (Kahn's algorithm)
    Toposort {
        /// Graph file
        file: PathBuf,
    },

    /// Connected components of the graph, ignoring edge directions
    Components {
        /// Graph file
        file: PathBuf,
    },

    /// Byte offsets of all occurrences of a pattern (KMP)
    Search {
        /// Pattern to search for
        #[arg(long, short)]
        pattern: String,

        /// File to search in; reads stdin if omitted
        file: Option<PathBuf>,
    },

    /// Writes a random directed G(n,p) graph without loops to stdout
    Generate {
        /// Number of nodes
        #[arg(long, short)]
        nodes: NumNodes,

        /// Expected out-degree of a node
        #[arg(long, short)]
        avg_deg: f64,

        /// Seed of the random generator; random if omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Weights are drawn uniformly from `1..=max-weight`
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(Weight).range(1..))]
        max_weight: Weight,
    },
}
