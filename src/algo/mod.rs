/*!
# Graph Algorithms

This module provides the **graph algorithms** of this crate, built on top of the traits in [`crate::ops`].
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use dsakit::algo::*;
```
and gain access to traversals, topological sorting, connectivity, bipartiteness, shortest paths,
searches over implicit state spaces and the union-find based problems.

If possible, algorithms are provided as **iterators** or **extension traits** on the graph, and
configurable algorithms as builder structs (e.g. [`Dijkstra`], [`BellmanFord`]).
*/

mod bipartite;
mod connectivity;
mod disjoint;
mod shortest_path;
mod state_space;
mod toposort;
mod traversal;

use crate::{
    Error, Result,
    error::{check_label, check_node},
    prelude::*,
    utils::*,
};

pub use bipartite::*;
pub use connectivity::*;
pub use disjoint::*;
pub use shortest_path::*;
pub use state_space::*;
pub use toposort::*;
pub use traversal::*;

/// Implemented by iterators and algorithm states that borrow a graph
pub trait WithGraphRef<G> {
    /// Returns the graph the algorithm runs on
    fn graph_ref(&self) -> &G;
}

/// Collects `pairs` into edges, failing on the first endpoint `>= n`
pub(crate) fn checked_edges<E: Into<Edge>>(
    n: NumNodes,
    pairs: impl IntoIterator<Item = E>,
) -> Result<Vec<Edge>> {
    pairs
        .into_iter()
        .map(|e| {
            let Edge(u, v) = e.into();
            check_node(u, n)?;
            check_node(v, n)?;
            Ok(Edge(u, v))
        })
        .collect()
}
