/*!
# Weighted Representations

[`WeightedGraph`] stores `(neighbor, weight)` pairs per node. The orientation is a type parameter;
undirected edges are stored at both endpoints and counted once.
*/

use std::marker::PhantomData;

use super::*;

/// Adjacency arrays with weights attached to every entry
#[derive(Clone)]
pub struct WeightedGraph<D: GraphDir> {
    nbs: Vec<Vec<(Node, Weight)>>,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// Directed weighted graph
pub type WeightedAdjArray = WeightedGraph<Directed>;

/// Undirected weighted graph
pub type WeightedAdjArrayUndir = WeightedGraph<Undirected>;

impl<D: GraphDir> GraphType for WeightedGraph<D> {
    type Dir = D;
}

impl<D: GraphDir> GraphNodeOrder for WeightedGraph<D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<D: GraphDir> GraphEdgeOrder for WeightedGraph<D> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<D: GraphDir> GraphNew for WeightedGraph<D> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
            _dir: PhantomData,
        }
    }
}

impl<D: GraphDir> AdjacencyList for WeightedGraph<D> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<D: GraphDir> AdjacencyTest for WeightedGraph<D> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].iter().any(|&(x, _)| x == v)
    }
}

impl<D: GraphDir> WeightedAdjacencyList for WeightedGraph<D> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

impl<D: GraphDir> WeightedGraphEditing for WeightedGraph<D> {
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: Weight) {
        assert!((v as usize) < self.nbs.len());
        self.nbs[u as usize].push((v, weight));
        if !D::is_directed() && u != v {
            self.nbs[v as usize].push((u, weight));
        }
        self.num_edges += 1;
    }
}

impl<D: GraphDir> std::fmt::Debug for WeightedGraph<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("directed", &D::is_directed())
            .field("n", &self.number_of_nodes())
            .field("edges", &self.weighted_edges().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn directed_parallel_edges() {
        let g = WeightedAdjArray::from_weighted_edges(3, [(0, 1, 5), (0, 1, 2), (1, 2, -1)]);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.degree_of(0), 2);
        assert_eq!(g.min_weight(), Some(-1));
        assert!(g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
    }

    #[test]
    fn undirected_symmetric() {
        let g = WeightedAdjArrayUndir::from_weighted_edges(3, [(0, 1, 4), (1, 2, 7)]);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(
            g.weighted_neighbors_of(1).sorted().collect_vec(),
            vec![(0, 4), (2, 7)]
        );
        assert_eq!(g.weighted_edges().count(), 4);
    }
}
