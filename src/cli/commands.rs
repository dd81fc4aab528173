//! Subcommand implementations. Output goes to stdout, logs to stderr.

use std::{
    fs,
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use dsakit::{
    Error,
    algo::*,
    error::check_label,
    gens::*,
    io::{FileFormat, GraphRead, GraphWrite},
    prelude::*,
    strings::find_all,
};
use itertools::Itertools;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use thiserror::Error as ThisError;
use tracing::{debug, info};

use super::{Cli, Commands};

/// Failures of a subcommand
#[derive(Debug, ThisError)]
pub enum CommandError {
    /// Arguments that parse but make no sense together
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Lib(#[from] Error),
}

impl From<io::Error> for CommandError {
    fn from(e: io::Error) -> Self {
        CommandError::Lib(Error::Io(e))
    }
}

impl CommandError {
    /// `2` for usage errors, otherwise the exit code of the library error
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Usage(_) => 2,
            CommandError::Lib(e) => e.exit_code(),
        }
    }
}

pub type CommandResult = Result<(), CommandError>;

/// Runs the parsed command, writing its output to `out`
pub fn run<W: Write>(cli: &Cli, mut out: W) -> CommandResult {
    match &cli.command {
        Commands::ShortestPath {
            file,
            source,
            target,
            max_edges,
        } => shortest_path(&mut out, file, cli.format, *source, *target, *max_edges)?,
        Commands::Toposort { file } => toposort(&mut out, file, cli.format)?,
        Commands::Components { file } => components(&mut out, file, cli.format)?,
        Commands::Search { pattern, file } => search(&mut out, pattern, file.as_deref())?,
        Commands::Generate {
            nodes,
            avg_deg,
            seed,
            max_weight,
        } => generate(&mut out, cli.format, *nodes, *avg_deg, *seed, *max_weight)?,
    }

    out.flush()?;
    Ok(())
}

fn read_graph(file: &Path, format: FileFormat) -> Result<WeightedAdjArray, Error> {
    let graph = WeightedAdjArray::try_from_file(file, format)?;
    debug!(
        file = %file.display(),
        %format,
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        "graph loaded"
    );
    Ok(graph)
}

fn shortest_path<W: Write>(
    out: &mut W,
    file: &Path,
    format: FileFormat,
    source: u32,
    target: Option<u32>,
    max_edges: Option<NumNodes>,
) -> CommandResult {
    let graph = read_graph(file, format)?;
    let n = graph.number_of_nodes();
    let source = check_label(source, n)?;
    let target = target.map(|t| check_label(t, n)).transpose()?;

    let tree = match max_edges {
        Some(rounds) => BellmanFord::new(&graph)
            .source(source)
            .max_edges(rounds)
            .run()?,
        None => {
            let dijkstra = Dijkstra::new(&graph).source(source);
            match target {
                Some(t) => dijkstra.stop_at(t).run()?,
                None => dijkstra.run()?,
            }
        }
    };

    let Some(target) = target else {
        for (u, dist) in tree.distances().iter().enumerate() {
            match dist {
                Some(d) => writeln!(out, "{} {d}", u + 1)?,
                None => writeln!(out, "{} unreachable", u + 1)?,
            }
        }
        return Ok(());
    };

    match tree.distance(target) {
        None => writeln!(out, "unreachable")?,
        Some(d) => {
            writeln!(out, "{d}")?;
            if let Some(path) = tree.path_to(target) {
                writeln!(out, "{}", path.iter().map(|u| u + 1).join(" "))?;
            }
        }
    }
    Ok(())
}

fn toposort<W: Write>(out: &mut W, file: &Path, format: FileFormat) -> CommandResult {
    let graph = read_graph(file, format)?;
    let graph = AdjArrayIn::from_edges(
        graph.number_of_nodes(),
        graph.weighted_edges().map(|e| e.edge()),
    );

    let order = graph.topological_order().ok_or(Error::Cycle)?;
    writeln!(out, "{}", order.iter().map(|u| u + 1).join(" "))?;
    Ok(())
}

fn components<W: Write>(out: &mut W, file: &Path, format: FileFormat) -> CommandResult {
    let graph = read_graph(file, format)?;
    let graph = AdjArrayUndir::from_edges(
        graph.number_of_nodes(),
        graph.weighted_edges().map(|e| e.edge()),
    );

    for component in graph.connected_components() {
        writeln!(out, "{}", component.iter().sorted().map(|u| u + 1).join(" "))?;
    }
    Ok(())
}

fn search<W: Write>(out: &mut W, pattern: &str, file: Option<&Path>) -> CommandResult {
    let haystack = match file {
        Some(file) => fs::read(file)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let matches = find_all(&haystack, pattern);
    debug!(bytes = haystack.len(), matches = matches.len(), "search finished");
    for offset in matches {
        writeln!(out, "{offset}")?;
    }
    Ok(())
}

fn generate<W: Write>(
    out: &mut W,
    format: FileFormat,
    nodes: NumNodes,
    avg_deg: f64,
    seed: Option<u64>,
    max_weight: Weight,
) -> CommandResult {
    if !(0.0..=nodes as f64).contains(&avg_deg) {
        return Err(CommandError::Usage(format!(
            "--avg-deg must be between 0 and the number of nodes ({nodes}), got {avg_deg}"
        )));
    }

    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "generating graph");
    let rng = &mut Pcg64Mcg::seed_from_u64(seed);

    let edges = WeightedGen::new(Gnp::new().nodes(nodes).avg_deg(avg_deg))
        .weights(1..=max_weight)
        .generate(rng);
    let graph = WeightedAdjArray::from_weighted_edges(
        nodes,
        edges.into_iter().filter(|e| !e.edge().is_loop()),
    );

    graph.try_write_to_writer(BufWriter::new(out), format)?;
    Ok(())
}
