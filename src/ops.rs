/*!
# Graph Operations

Traits describing what a graph representation can do. Algorithms in [`crate::algo`] are written
against these traits only, so every representation in [`crate::repr`] (weighted or not) can be
passed to every algorithm whose bounds it satisfies.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Marker for the orientation of a graph
pub trait GraphDir {
    /// Returns *true* if edges are oriented
    fn is_directed() -> bool;
}

/// Edges are oriented: `(u, v) != (v, u)`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Directed;

/// Edges are unoriented: `{u, v} == {v, u}`
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Undirected;

impl GraphDir for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl GraphDir for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// Associates a graph representation with its orientation
pub trait GraphType {
    type Dir: GraphDir;

    /// Returns *true* if the graph is directed
    fn is_directed(&self) -> bool {
        Self::Dir::is_directed()
    }

    /// Returns *true* if the graph is undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n`. In contrast to [`GraphNodeOrder::vertices`], the returned range
    /// does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    ///
    /// Note that for directed graphs, this is the out-neighborhood.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all degrees in node order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Directed graphs that can answer queries about incoming edges
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u >= n` **
    fn in_degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over all in-degrees in node order
    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.in_degree_of(u))
    }

    /// Returns the out-degree and in-degree of a given vertex
    /// ** Panics if `u >= n` **
    #[inline]
    fn total_degree_of(&self, u: Node) -> NumNodes {
        self.degree_of(u) + self.in_degree_of(u)
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the edge *(u,v)* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v))
    }

    /// Adds the edge `(u, v)` to the graph.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v);
        }
    }

    /// Removes the edge *(u,v)* from the graph.
    /// ** Panics if the edge is not present or u, v >= n **
    fn remove_edge(&mut self, u: Node, v: Node) {
        assert!(self.try_remove_edge(u, v));
    }

    /// Removes the edge *(u,v)* from the graph.
    /// If the edge was removed, returns *true* and *false* otherwise.
    /// ** Panics if u, v >= n **
    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Create a graph from a number of nodes and an iterator over Edges.
    /// Duplicate edges are ignored.
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            graph.try_add_edge(u, v);
        }
        graph
    }
}

/// Weighted counterpart to [`AdjacencyList`]
pub trait WeightedAdjacencyList: AdjacencyList {
    /// Returns an iterator over `(neighbor, weight)` pairs of outgoing edges of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over all weighted (outgoing) edges.
    /// For undirected graphs every edge is reported in both orientations.
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.weighted_neighbors_of(u)
                .map(move |(v, w)| WeightedEdge(u, v, w))
        })
    }

    /// Returns the minimum weight of all edges or `None` if there are none
    fn min_weight(&self) -> Option<Weight> {
        self.weighted_edges().map(|e| e.weight()).min()
    }
}

/// Provides functions to insert weighted edges
pub trait WeightedGraphEditing: GraphNew {
    /// Adds the weighted edge `(u, v, w)`. Parallel edges are allowed.
    /// ** Panics if `u >= n || v >= n` **
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight);

    /// Adds all weighted edges in the collection
    fn add_weighted_edges(&mut self, edges: impl IntoIterator<Item = impl Into<WeightedEdge>>) {
        for WeightedEdge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_weighted_edge(u, v, w);
        }
    }
}

/// Create a weighted graph from a number of nodes and weighted edges
pub trait WeightedGraphFromScratch {
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self;
}

impl<G: WeightedGraphEditing> WeightedGraphFromScratch for G {
    fn from_weighted_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
    ) -> Self {
        let mut graph = Self::new(n);
        graph.add_weighted_edges(edges);
        graph
    }
}
