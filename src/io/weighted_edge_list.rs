//! # WeightedEdgeList
//!
//! Like the [EdgeList-Format](super::edge_list), but every edge line `u v w` carries an integer weight `w`.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Write},
    path::Path,
};

use tracing::debug;

use super::*;

/// A GraphReader for the WeightedEdgeList-Format
#[derive(Debug, Clone)]
pub struct WeightedEdgeListReader {
    header: Header,
    comment_identifier: String,
}

impl Default for WeightedEdgeListReader {
    fn default() -> Self {
        Self {
            header: Header::default(),
            comment_identifier: "c".to_string(),
        }
    }
}

impl WeightedEdgeListReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Reads the number of nodes and all weighted edges without building a graph
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> Result<(NumNodes, Vec<WeightedEdge>)> {
        let mut lines = DataLines::new(reader, &self.comment_identifier);
        let (n, m) = read_header(&mut lines, &self.header)?;

        let edges: Vec<WeightedEdge> = lines
            .map(|line| {
                let (line_no, line) = line?;
                parse_weighted_edge_line(&line, n).map_err(|e| at_line(line_no, e))
            })
            .collect::<Result<_>>()?;
        check_edge_count(edges.len(), m)?;

        debug!(nodes = n, edges = m, "read weighted edge list");
        Ok((n, edges))
    }
}

/// Parses a line `u v w`
fn parse_weighted_edge_line(line: &str, n: NumNodes) -> Result<WeightedEdge> {
    let mut parts = line.split_whitespace();

    let from = parse_node(&mut parts, n, "Source node")?;
    let dest = parse_node(&mut parts, n, "Target node")?;
    let weight: Weight = parse_next_value!(parts, "Weight");
    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        "Unexpected token after weight"
    );

    Ok(WeightedEdge(from, dest, weight))
}

impl<G: WeightedGraphFromScratch> GraphReader<G> for WeightedEdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let (n, edges) = self.try_read_edges(reader)?;
        Ok(G::from_weighted_edges(n, edges))
    }
}

/// Shorthand for reading with default [`WeightedEdgeListReader`] settings
pub trait WeightedEdgeListRead: Sized {
    fn try_read_weighted_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    fn try_read_weighted_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_weighted_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G: WeightedGraphFromScratch> WeightedEdgeListRead for G {
    fn try_read_weighted_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        WeightedEdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the WeightedEdgeList-Format
#[derive(Debug, Clone)]
pub struct WeightedEdgeListWriter {
    header: Header,
}

impl Default for WeightedEdgeListWriter {
    /// Writes `p sp <n> <m>`
    fn default() -> Self {
        Self {
            header: Header::new_problem("sp"),
        }
    }
}

impl WeightedEdgeListWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header format
    pub fn header_format(mut self, format: Header) -> Self {
        self.header = format;
        self
    }
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder + GraphType> GraphWriter<G> for WeightedEdgeListWriter {
    /// Undirected edges are written once, as `u v w` with `u <= v`
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        self.header.write_header(
            &mut writer,
            graph.number_of_nodes(),
            graph.number_of_edges(),
        )?;

        for WeightedEdge(u, v, w) in graph
            .weighted_edges()
            .filter(|e| graph.is_directed() || e.edge().is_normalized())
        {
            writeln!(writer, "{} {} {}", u + 1, v + 1, w)?;
        }

        writer.flush()
    }
}

/// Shorthand for writing with default [`WeightedEdgeListWriter`] settings
pub trait WeightedEdgeListWrite {
    fn try_write_weighted_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    fn try_write_weighted_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_weighted_edge_list(BufWriter::new(File::create(path)?))
    }
}

impl<G: WeightedAdjacencyList + GraphEdgeOrder + GraphType> WeightedEdgeListWrite for G {
    fn try_write_weighted_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        WeightedEdgeListWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::ShortestPaths;
    use itertools::Itertools;

    #[test]
    fn read_and_solve() {
        let input = "c LC 743 sample\np sp 4 3\n2 1 1\n2 3 1\n3 4 1\n";
        let graph = WeightedAdjArray::try_read_weighted_edge_list(input.as_bytes()).unwrap();
        let tree = graph.dijkstra(1).unwrap();
        assert_eq!(tree.max_distance(), Some(2));
    }

    #[test]
    fn negative_weights_and_errors() {
        let graph =
            WeightedAdjArray::try_read_weighted_edge_list("p sp 2 1\n1 2 -5\n".as_bytes()).unwrap();
        assert_eq!(graph.min_weight(), Some(-5));

        for input in [
            "p sp 2 1\n1 2\n",
            "p sp 2 1\n1 2 x\n",
            "p sp 2 1\n1 3 1\n",
            "p sp 2 1\n1 2 1 1\n",
            "p sp 2 2\n1 2 1\n",
        ] {
            let err = WeightedAdjArray::try_read_weighted_edge_list(input.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{input:?}");
        }
    }

    #[test]
    fn write_undirected() {
        let graph = WeightedAdjArrayUndir::from_weighted_edges(3, [(1, 0, 4), (1, 2, 2), (2, 2, 9)]);
        let mut out = Vec::new();
        graph.try_write_weighted_edge_list(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines = text.lines().collect_vec();
        assert_eq!(lines[0], "p sp 3 3");
        assert_eq!(
            lines[1..].iter().sorted().collect_vec(),
            vec![&"1 2 4", &"2 3 2", &"3 3 9"]
        );

        let again = WeightedAdjArrayUndir::try_read_weighted_edge_list(text.as_bytes()).unwrap();
        assert_eq!(again.number_of_edges(), 3);
        assert_eq!(
            again.weighted_edges().sorted().collect_vec(),
            graph.weighted_edges().sorted().collect_vec()
        );
    }
}
