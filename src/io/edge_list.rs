//! # EdgeList
//!
//! The EdgeList-Format consists of a header, followed by `m` non-comment-lines
//! `u v` representing the edge `Edge(u - 1, v - 1)`.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Write},
    path::Path,
};

use tracing::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// HeaderFormat
    header: Header,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListReader {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }

    /// Reads the number of nodes and all edges without building a graph
    ///
    /// # Examples
    /// ```
    /// use dsakit::{io::EdgeListReader, Edge};
    ///
    /// let (n, edges) = EdgeListReader::new()
    ///     .try_read_edges("c triangle\np edge 3 3\n1 2\n2 3\n3 1\n".as_bytes())
    ///     .unwrap();
    /// assert_eq!(n, 3);
    /// assert_eq!(edges, vec![Edge(0, 1), Edge(1, 2), Edge(2, 0)]);
    /// ```
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> Result<(NumNodes, Vec<Edge>)> {
        let edges_reader = EdgeListEdgesReader::try_new(reader, &self.header, &self.comment_identifier)?;
        let n = edges_reader.number_of_nodes();
        let m = edges_reader.number_of_edges();

        let edges: Vec<Edge> = edges_reader.collect::<Result<_>>()?;
        check_edge_count(edges.len(), m)?;

        debug!(nodes = n, edges = m, "read edge list");
        Ok((n, edges))
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let (n, edges) = self.try_read_edges(reader)?;
        Ok(G::from_edges(n, edges))
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Iterator over the edges of an EdgeList-input, yielding an error for every malformed line
pub struct EdgeListEdgesReader<'a, R> {
    /// Non-comment lines in the reader
    lines: DataLines<'a, R>,
    /// Number of nodes parsed from header
    number_of_nodes: NumNodes,
    /// Number of edges parsed from header
    number_of_edges: NumEdges,
}

impl<'a, R: BufRead> EdgeListEdgesReader<'a, R> {
    /// Creates a new EdgeListEdgesReader and tries to parse the first non-comment-line as the header
    pub fn try_new(reader: R, header_format: &Header, comment_identifier: &'a str) -> Result<Self> {
        let mut lines = DataLines::new(reader, comment_identifier);
        let (number_of_nodes, number_of_edges) = read_header(&mut lines, header_format)?;

        Ok(Self {
            lines,
            number_of_nodes,
            number_of_edges,
        })
    }

    /// Returns the parsed number of edges in the graph
    pub fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }

    /// Returns the parsed number of nodes in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    /// Parses a line `u v`
    fn parse_edge_line(&self, line: &str) -> Result<Edge> {
        let mut parts = line.split_whitespace();

        let from = parse_node(&mut parts, self.number_of_nodes, "Source node")?;
        let dest = parse_node(&mut parts, self.number_of_nodes, "Target node")?;
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Unexpected token after edge"
        );

        Ok(Edge(from, dest))
    }
}

impl<R: BufRead> Iterator for EdgeListEdgesReader<'_, R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.lines.next()?.and_then(|(line_no, line)| {
            self.parse_edge_line(&line)
                .map_err(|e| at_line(line_no, e))
        }))
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    /// HeaderFormat
    header: Header,
}

impl Default for EdgeListWriter {
    /// Writes `p edge <n> <m>`
    fn default() -> Self {
        Self {
            header: Header::new_problem("edge"),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> EdgeListWriter {
        self.header = format;
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + GraphType> GraphWriter<G> for EdgeListWriter {
    /// Undirected edges are written once, as `u v` with `u <= v`
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.header.write_header(
            &mut writer,
            graph.number_of_nodes(),
            graph.number_of_edges(),
        )?;

        for Edge(u, v) in graph.edges(graph.is_undirected()) {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder + GraphType> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
