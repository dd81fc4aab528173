/*!
# Directed Graph Representations

- [`DirectedGraph`] stores **only outgoing neighborhoods** and derives
  incoming neighborhoods by scanning all vertices (costly).
- [`DirectedGraphIn`] stores **both outgoing and incoming neighborhoods**,
  enabling efficient access to in-neighbors and in-degrees.
*/

use super::{macros::impl_common_graph_ops, *};

/// A directed graph storing only **outgoing neighborhoods**.
#[derive(Clone)]
pub struct DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    num_edges: NumEdges,
}

/// A directed graph storing **both outgoing and incoming neighborhoods**.
#[derive(Clone)]
pub struct DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    num_edges: NumEdges,
}

/// Directed graph using adjacency arrays (`Vec<Node>`).
pub type AdjArray = DirectedGraph<ArrNeighborhood>;

/// Directed graph using adjacency arrays for both outgoing and incoming neighborhoods.
pub type AdjArrayIn = DirectedGraphIn<ArrNeighborhood, ArrNeighborhood>;

/// Directed graph using sparse adjacency arrays (`SmallVec<[Node; 8]>`).
pub type SparseAdjArray = DirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(DirectedGraph<OutNbs> => out_nbs, Directed);
impl_common_graph_ops!(DirectedGraphIn<OutNbs, InNbs> => out_nbs, Directed);

impl<OutNbs: Neighborhood> GraphNew for DirectedGraph<OutNbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![OutNbs::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl<OutNbs: Neighborhood, InNbs: Neighborhood> GraphNew for DirectedGraphIn<OutNbs, InNbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            out_nbs: vec![OutNbs::default(); n as usize],
            in_nbs: vec![InNbs::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl<OutNbs> DirectedAdjacencyList for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        // Should be avoided as this is very costly
        self.vertices_range()
            .filter(move |&v| self.out_nbs[v as usize].has_neighbor(u))
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }

    fn in_degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        // One pass over all edges instead of `n` scans
        let mut degrees = vec![0; self.len()];
        for Edge(_, v) in self.edges(false) {
            degrees[v as usize] += 1;
        }
        degrees.into_iter()
    }
}

impl<OutNbs> GraphEdgeEditing for DirectedGraph<OutNbs>
where
    OutNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.out_nbs.len());
        if self.out_nbs[u as usize].try_add_neighbor(v) {
            true
        } else {
            self.num_edges += 1;
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

impl<OutNbs, InNbs> DirectedAdjacencyList for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs[u as usize].neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[u as usize].num_of_neighbors()
    }
}

impl<OutNbs, InNbs> GraphEdgeEditing for DirectedGraphIn<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_add_neighbor(v) {
            true
        } else {
            self.in_nbs[v as usize].add_neighbor(u);
            self.num_edges += 1;
            false
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.out_nbs[u as usize].try_remove_neighbor(v) {
            assert!(self.in_nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn adj_array_in_degrees() {
        let g = AdjArrayIn::from_edges(4, [(0, 1), (0, 2), (1, 2), (3, 2), (0, 1)]);
        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.in_degrees().collect_vec(), vec![0, 1, 3, 0]);
        assert_eq!(
            g.in_neighbors_of(2).sorted().collect_vec(),
            vec![0, 1, 3]
        );

        let h = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 2), (3, 2)]);
        assert_eq!(h.in_degrees().collect_vec(), vec![0, 1, 3, 0]);
        assert_eq!(h.in_neighbors_of(2).collect_vec(), vec![0, 1, 3]);
    }

    #[test]
    fn edit_edges() {
        let mut g = AdjArrayIn::new(3);
        g.add_edge(0, 1);
        assert!(g.try_add_edge(0, 1));
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
        g.remove_edge(0, 1);
        assert_eq!(g.number_of_edges(), 0);
        assert_eq!(g.in_degree_of(1), 0);
        assert!(g.is_directed());
    }
}
