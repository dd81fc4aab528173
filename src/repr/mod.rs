/*!
# Graph Representations

All representations store nodes `0..n` and one neighborhood per node:

- [`AdjArray`] / [`SparseAdjArray`]: directed, outgoing neighborhoods only.
- [`AdjArrayIn`]: directed, outgoing and incoming neighborhoods (cheap in-degrees for Kahn's algorithm).
- [`AdjArrayUndir`] / [`SparseAdjArrayUndir`]: undirected.
- [`WeightedAdjArray`] / [`WeightedAdjArrayUndir`]: weighted adjacency arrays that allow parallel edges.

Unweighted representations never store an edge twice; weighted ones keep every inserted edge, as
problem inputs such as flight lists may legitimately contain parallel routes.
*/

use crate::{ops::*, *};

mod directed;
mod neighborhood;
mod undirected;
mod weighted;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;
pub use weighted::*;

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$($generic:ident),+> => $nbs:ident, $directed:ident) => {
            impl<$($generic: Neighborhood),+> GraphType for $struct<$($generic),+> {
                type Dir = $directed;
            }

            impl<$($generic: Neighborhood),+> GraphNodeOrder for $struct<$($generic),+> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$nbs.len() as NumNodes
                }
            }

            impl<$($generic: Neighborhood),+> GraphEdgeOrder for $struct<$($generic),+> {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl<$($generic: Neighborhood),+> AdjacencyList for $struct<$($generic),+> {
                fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
                    self.$nbs[u as usize].neighbors()
                }

                fn degree_of(&self, u: Node) -> NumNodes {
                    self.$nbs[u as usize].num_of_neighbors()
                }
            }

            impl<$($generic: Neighborhood),+> AdjacencyTest for $struct<$($generic),+> {
                fn has_edge(&self, u: Node, v: Node) -> bool {
                    self.$nbs[u as usize].has_neighbor(v)
                }
            }

            impl<$($generic: Neighborhood),+> std::fmt::Debug for $struct<$($generic),+> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($struct))
                        .field("n", &self.number_of_nodes())
                        .field("edges", &self.ordered_edges(false))
                        .finish()
                }
            }
        };
    }

    pub(super) use impl_common_graph_ops;
}

crate::testing::test_graph_ops!(test_adj_array, AdjArray, false);
crate::testing::test_graph_ops!(test_sparse_adj_array, SparseAdjArray, false);
crate::testing::test_graph_ops!(test_adj_array_in, AdjArrayIn, false);
crate::testing::test_graph_ops!(test_adj_array_undir, AdjArrayUndir, true);
crate::testing::test_graph_ops!(test_sparse_adj_array_undir, SparseAdjArrayUndir, true);
