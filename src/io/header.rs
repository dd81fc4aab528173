//! # Headers
//!
//! The first non-comment line of a graph file is its header: a series of whitespace-separated tokens
//! stating the size of the graph and, usually, the problem it was written for.
//!
//! DIMACS-style shortest path instances for example start with
//!     "p sp {n} {m}"
//! where n is the number of nodes and m the number of edges in the graph.

use itertools::Itertools;
use smallvec::{SmallVec, smallvec};

use super::*;

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Ignore entry
    Any,
    /// Match entry to str
    Str(String),
    /// Parse number of nodes
    NumNodes,
    /// Parse number of edges
    NumEdges,
    /// Ensure that there are no more entries
    End,
    /// Ignore all further entries
    Rest,
}

/// Written in place of [`HeaderToken::Any`]
const ANY_PLACEHOLDER: &str = "_";

/// Defines the complete format of the header.
///
/// Use the Builder-Pattern to define the format; the const parameters track which tokens were set,
/// so that only complete formats can be used for reading and writing.
/// ```
/// use dsakit::io::HeaderFormat;
///
/// let format = HeaderFormat::new()
///     .str("p").str("sp").number_of_nodes().number_of_edges().end();
/// assert_eq!(format.parse_header("p sp 4 5").unwrap(), (4, 5));
/// assert!(format.parse_header("p ds 4 5").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFormat<
    // Set to *true* if the position for number of nodes was set
    const NODES_SET: bool = false,
    // Set to *true* if the position for number of edges was set
    const EDGES_SET: bool = false,
    // Set to *true* once the format was closed by `end` or `ignore_rest`
    const END: bool = false,
>(SmallVec<[HeaderToken; 6]>);

/// A header is defined as a format that satisfies all prerequisites.
pub type Header = HeaderFormat<true, true, true>;

impl Default for HeaderFormat<true, true, true> {
    /// `p <problem> <n> <m>`, accepting any problem name and ignoring trailing tokens
    fn default() -> Self {
        Self(smallvec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Any,
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::Rest,
        ])
    }
}

impl Header {
    /// Strict `p <problem> <n> <m>` header for a fixed problem name
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self(smallvec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Str(problem.into()),
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
            HeaderToken::End,
        ])
    }

    /// Tries to parse the header and extract the number of nodes and edges.
    ///
    /// # Errors
    /// Returns an `InvalidData` error if the line does not match the format.
    pub fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut number_of_nodes = 0;
        let mut number_of_edges = 0;

        let mut parts = line.split_whitespace();
        for token in &self.0 {
            match token {
                HeaderToken::Rest => return Ok((number_of_nodes, number_of_edges)),
                HeaderToken::End => break,
                HeaderToken::Any => {
                    raise_error_unless!(
                        parts.next().is_some(),
                        ErrorKind::InvalidData,
                        format!("Header '{line}' is shorter than expected")
                    );
                }
                HeaderToken::Str(expected) => {
                    let entry = parts.next();
                    raise_error_unless!(
                        entry == Some(expected.as_str()),
                        ErrorKind::InvalidData,
                        format!("Invalid header '{line}': expected '{expected}'")
                    );
                }
                HeaderToken::NumNodes => {
                    number_of_nodes = parse_next_value!(parts, "Header>Number of nodes");
                }
                HeaderToken::NumEdges => {
                    number_of_edges = parse_next_value!(parts, "Header>Number of edges");
                }
            }
        }

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Header '{line}' is longer than expected")
        );

        Ok((number_of_nodes, number_of_edges))
    }

    /// Writes the header line for a graph with `n` nodes and `m` edges
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        let header = self
            .0
            .iter()
            .filter_map(|token| match token {
                HeaderToken::Any => Some(ANY_PLACEHOLDER.to_string()),
                HeaderToken::Str(s) => Some(s.clone()),
                HeaderToken::NumNodes => Some(n.to_string()),
                HeaderToken::NumEdges => Some(m.to_string()),
                HeaderToken::End | HeaderToken::Rest => None,
            })
            .join(" ");
        writeln!(writer, "{header}")
    }
}

impl HeaderFormat<false, false, false> {
    /// Creates a new empty format
    pub fn new() -> Self {
        HeaderFormat(smallvec![])
    }
}

impl<const NODES_SET: bool, const EDGES_SET: bool> HeaderFormat<NODES_SET, EDGES_SET, false> {
    /// Pushes a token that can be ignored onto the stack
    pub fn any(mut self) -> Self {
        self.0.push(HeaderToken::Any);
        self
    }

    /// Pushes a token that should match a string onto the stack
    pub fn str<S: Into<String>>(mut self, s: S) -> Self {
        self.0.push(HeaderToken::Str(s.into()));
        self
    }
}

impl<const EDGES_SET: bool> HeaderFormat<false, EDGES_SET, false> {
    /// Adds the number of nodes token onto the stack
    pub fn number_of_nodes(mut self) -> HeaderFormat<true, EDGES_SET, false> {
        self.0.push(HeaderToken::NumNodes);
        HeaderFormat(self.0)
    }
}

impl<const NODES_SET: bool> HeaderFormat<NODES_SET, false, false> {
    /// Adds the number of edges token onto the stack
    pub fn number_of_edges(mut self) -> HeaderFormat<NODES_SET, true, false> {
        self.0.push(HeaderToken::NumEdges);
        HeaderFormat(self.0)
    }
}

impl HeaderFormat<true, true, false> {
    /// Marks the header as finished ensuring that no further tokens follow
    pub fn end(mut self) -> Header {
        self.0.push(HeaderToken::End);
        HeaderFormat(self.0)
    }

    /// Marks the header as finished ignoring all further tokens
    pub fn ignore_rest(mut self) -> Header {
        self.0.push(HeaderToken::Rest);
        HeaderFormat(self.0)
    }
}
