/*!
# IO

Utilities for reading and writing graphs as edge lists.

## Formats

- **EdgeList**: a header followed by one line `u v` per edge.
- **WeightedEdgeList**: a header followed by one line `u v w` per edge, where `w` is a (possibly negative) integer.

Nodes are written 1-based, i.e. the line `1 2` describes `Edge(0, 1)`. Lines starting with the comment identifier
(`c` by default) and empty lines are skipped. The header is described by a [`HeaderFormat`]; by default it is
`p <problem> <n> <m>`.

All parse failures (a malformed header, a missing or non-numeric token, a node outside `1..=n`, or a number of
edge lines other than `m`) are reported as [`ErrorKind::InvalidData`] errors whose message names the offending line.

## Traits

To generalize over reading/writing:
- [`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
- [`GraphRead`] and [`GraphWrite`] abstract over reading/writing using a given [`FileFormat`].
*/

pub mod edge_list;
pub mod header;
pub mod weighted_edge_list;

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Result, Write},
    iter::Enumerate,
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use edge_list::*;
pub use header::*;
pub use weighted_edge_list::*;

/// Identifier for a graph file format.
///
/// Used in [`GraphRead`] and [`GraphWrite`] to determine the
/// correct parser or writer to use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FileFormat {
    /// Unweighted edge list
    EdgeList,
    /// Edge list with a weight per edge
    #[default]
    WeightedEdgeList,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    /// Accepts `edgelist` and `weighted` (or `weightededgelist`), ignoring case
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "edgelist" => Ok(FileFormat::EdgeList),
            "weighted" | "weightededgelist" => Ok(FileFormat::WeightedEdgeList),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::EdgeList => write!(f, "edgelist"),
            FileFormat::WeightedEdgeList => write!(f, "weighted"),
        }
    }
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Trait for reading weighted graphs when only a [`FileFormat`] is known.
///
/// Edges of an unweighted [`FileFormat::EdgeList`] get weight `1`.
///
/// # Examples
/// ```
/// use dsakit::{io::*, prelude::*};
///
/// let graph = WeightedAdjArray::try_from_reader("p edge 3 2\n1 2\n2 3\n".as_bytes(), FileFormat::EdgeList).unwrap();
/// assert_eq!(graph.weighted_edges().collect::<Vec<_>>(), vec![WeightedEdge(0, 1, 1), WeightedEdge(1, 2, 1)]);
/// ```
pub trait GraphRead: Sized {
    /// Reads a graph from the given reader according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the input does not match the expected format.
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Reads a graph from the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if the input
    /// is invalid for the chosen format.
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: WeightedGraphFromScratch,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::EdgeList => {
                let (n, edges) = EdgeListReader::default().try_read_edges(reader)?;
                Ok(Self::from_weighted_edges(
                    n,
                    edges.into_iter().map(|e| e.with_weight(1)),
                ))
            }
            FileFormat::WeightedEdgeList => {
                let (n, edges) = WeightedEdgeListReader::default().try_read_edges(reader)?;
                Ok(Self::from_weighted_edges(n, edges))
            }
        }
    }
}

/// Trait for writing weighted graphs when only a [`FileFormat`] is known.
///
/// Writing a [`FileFormat::EdgeList`] drops all weights.
pub trait GraphWrite {
    /// Writes the graph to the given writer according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Writes the graph to the given file according to the specified [`FileFormat`].
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: WeightedAdjacencyList + GraphEdgeOrder + GraphType,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::EdgeList => EdgeListWriter::default().try_write_graph(self, writer),
            FileFormat::WeightedEdgeList => {
                WeightedEdgeListWriter::default().try_write_graph(self, writer)
            }
        }
    }
}

/// Trimmed non-empty, non-comment lines of a reader together with their 1-based line number
pub(crate) struct DataLines<'a, R> {
    lines: Enumerate<Lines<R>>,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> DataLines<'a, R> {
    pub(crate) fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines().enumerate(),
            comment_identifier,
        }
    }
}

impl<R: BufRead> Iterator for DataLines<'_, R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, line) = match self.lines.next()? {
                (_, Err(e)) => return Some(Err(e)),
                (i, Ok(line)) => (i, line),
            };

            let line = line.trim();
            if line.is_empty() || line.starts_with(self.comment_identifier) {
                continue;
            }
            return Some(Ok((i + 1, line.to_string())));
        }
    }
}

/// Reads the header from the first data line
pub(crate) fn read_header<R: BufRead>(
    lines: &mut DataLines<'_, R>,
    header: &Header,
) -> Result<(NumNodes, NumEdges)> {
    let (line_no, line) = lines
        .next()
        .ok_or_else(|| io_error!(ErrorKind::InvalidData, "Header not found"))??;
    header
        .parse_header(&line)
        .map_err(|e| at_line(line_no, e))
}

/// Parses the next token as a 1-based node label and converts it into a node `< n`
pub(crate) fn parse_node<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    n: NumNodes,
    name: &str,
) -> Result<Node> {
    let label: u32 = parse_next_value!(parts, name);
    raise_error_unless!(
        (1..=n).contains(&label),
        ErrorKind::InvalidData,
        format!("{name} {label} is not in 1..={n}")
    );
    Ok(label - 1)
}

/// Ensures that exactly the announced number of edges was read
pub(crate) fn check_edge_count(read: usize, expected: NumEdges) -> Result<()> {
    raise_error_unless!(
        read == expected as usize,
        ErrorKind::InvalidData,
        format!("Header announced {expected} edges, found {read}")
    );
    Ok(())
}

/// Prefixes the message of `err` with the line it occurred on
pub(crate) fn at_line(line_no: usize, err: std::io::Error) -> std::io::Error {
    io_error!(err.kind(), format!("line {line_no}: {err}"))
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value '{}' found. Cannot parse {}", next, $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
