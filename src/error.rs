//! Crate-wide error type.
//!
//! Only failures caused by malformed input end up here. Algorithms whose classical
//! formulation has a "no answer" outcome (unreachable target, cyclic ordering, ...) return `Option`.

use thiserror::Error;

use crate::{Node, NumNodes, Weight};

/// Errors raised when an input cannot be processed
#[derive(Debug, Error)]
pub enum Error {
    #[error("node {node} is out of range for a graph with {n} nodes")]
    NodeOutOfRange { node: Node, n: NumNodes },

    #[error("edge ({u},{v}) has negative weight {weight}")]
    NegativeWeight { u: Node, v: Node, weight: Weight },

    #[error("graph contains a negative cycle reachable from the source")]
    NegativeCycle,

    #[error("graph contains a cycle")]
    Cycle,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand for results carrying [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_) | Error::Parse { .. } => 3,
            _ => 1,
        }
    }
}

/// Returns `Err(Error::NodeOutOfRange)` unless `node < n`
pub(crate) fn check_node(node: Node, n: NumNodes) -> Result<()> {
    if node < n {
        Ok(())
    } else {
        Err(Error::NodeOutOfRange { node, n })
    }
}

/// Converts a 1-based label into a node, or returns `Err(Error::NodeOutOfRange)` unless `1 <= label <= n`
pub fn check_label(label: u32, n: NumNodes) -> Result<Node> {
    if label >= 1 && label <= n {
        Ok(label - 1)
    } else {
        Err(Error::NodeOutOfRange { node: label, n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NodeOutOfRange { node: 7, n: 3 }.to_string(),
            "node 7 is out of range for a graph with 3 nodes"
        );
        assert_eq!(Error::Cycle.to_string(), "graph contains a cycle");
        assert!(check_node(2, 3).is_ok());
        assert!(matches!(
            check_node(3, 3),
            Err(Error::NodeOutOfRange { node: 3, n: 3 })
        ));
        assert_eq!(check_label(3, 3).unwrap(), 2);
        assert!(check_label(0, 3).is_err());
        assert!(check_label(4, 3).is_err());
    }
}
