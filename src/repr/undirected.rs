use super::{macros::impl_common_graph_ops, *};

/// An undirected graph representation
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<Nbs> => nbs, Undirected);

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
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

    #[test]
    fn symmetric_edges() {
        let g = SparseAdjArrayUndir::from_edges(4, [(0, 1), (1, 0), (2, 3), (3, 3)]);
        assert_eq!(g.number_of_edges(), 3);
        assert!(g.has_edge(1, 0));
        assert!(g.has_edge(3, 2));
        assert!(g.has_self_loop(3));
        assert_eq!(g.ordered_edges(true), vec![Edge(0, 1), Edge(2, 3), Edge(3, 3)]);
        assert!(g.is_undirected());
    }
}
