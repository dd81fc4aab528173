/*!
`dsakit` is a collection of classic algorithms on compact, index-based data structures:

- **Graphs** whose nodes are numbered `0` to `n - 1`, with optional integer weights
  (BFS/DFS, Kahn's topological sort, Dijkstra, Bellman-Ford, bipartiteness, components).
- **Grids** of cells with 4- or 8-neighborhoods (islands, multi-source BFS, obstacle elimination, minimum effort paths).
- **Range queries** via Fenwick trees and segment trees, plus the sweep-line algorithms built on them.
- **Strings** via KMP, polynomial rolling hashes and tries.
- **Disjoint sets** via a union-find forest.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; weighted edges are `WeightedEdge(Node, Node, Weight)`
with `Weight = i64`.

See the [`repr`] module for the available graph storage backends.

# Design

Algorithms are provided as configurable structs that one can alter using the *Builder* pattern before running them
(for example [`algo::Dijkstra`] or [`algo::BellmanFord`]). The most commonly used functionality is also implemented
via traits on the graph itself, e.g. `graph.bfs(s)`, `graph.dijkstra(s)` or `graph.topological_order()`.

Problem-style entry points (e.g. [`algo::network_delay_time`] or [`grid::Grid::shortest_path_with_eliminations`])
take plain inputs, return `Option` where the classical formulation returns `-1` or `""`, and [`Result`] where the
input itself can be malformed.

Library code logs through [`tracing`] and never installs a subscriber; the `dsakit` binary does.

# Usage

In most use-cases, `use dsakit::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod grid;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod strings;
pub mod structures;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::{Error, Result};
pub use node::*;

/// `dsakit::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all
/// implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
