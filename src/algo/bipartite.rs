/*!
# Bipartite Graphs

Testing and computing 2-colorings of graphs.

A bipartition is any [`Set`] of nodes: members are on the **right** side, all other nodes on the **left** side.
*/

use super::*;

/// A set of nodes interpreted as the right side of a bipartition
pub trait Bipartition: Set<Node> {
    /// Returns `true` if the node is on the left side of the partition.
    fn is_on_left_side(&self, u: Node) -> bool;

    /// Returns `true` if the node is on the right side of the partition.
    fn is_on_right_side(&self, u: Node) -> bool;
}

impl<B> Bipartition for B
where
    B: Set<Node>,
{
    #[inline]
    fn is_on_left_side(&self, u: Node) -> bool {
        !self.contains(&u)
    }

    #[inline]
    fn is_on_right_side(&self, u: Node) -> bool {
        self.contains(&u)
    }
}

/// Bipartiteness tests. Meant for undirected graphs: on directed graphs the search only follows
/// out-edges, so a bipartite underlying graph may still be rejected.
pub trait BipartiteTest: AdjacencyList {
    /// Returns `true` if every edge connects both sides of `bipartition`.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    /// let mut right = NodeBitSet::new(4);
    /// right.set_bit(1);
    /// right.set_bit(3);
    /// assert!(g.is_bipartition(&right));
    /// ```
    fn is_bipartition<B>(&self, bipartition: &B) -> bool
    where
        B: Bipartition,
    {
        self.edges(false)
            .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }

    /// Computes a bipartition or returns `None` if the graph has an odd cycle.
    /// Within every connected component, its smallest node is on the left side.
    fn compute_bipartition<B>(&self) -> Option<B>
    where
        B: Bipartition + FromCapacity,
    {
        let bipartition = two_color_search_forest(self);
        self.is_bipartition(&bipartition).then_some(bipartition)
    }

    /// Returns `true` if the graph admits a bipartition
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let square = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// assert!(square.is_bipartite());
    ///
    /// let triangle = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
    /// assert!(!triangle.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition::<NodeBitSet>().is_some()
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList {}

/// Colors every node opposite to its predecessor in a BFS forest.
/// The result is only guaranteed to be a valid bipartition if one exists.
fn two_color_search_forest<G, B>(graph: &G) -> B
where
    G: AdjacencyList,
    B: Bipartition + FromCapacity,
{
    let n = graph.len();
    let mut bipartition = B::from_total_used_capacity(n, n);
    if n == 0 {
        return bipartition;
    }

    let mut bfs = graph.bfs_with_predecessor(0);
    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if bipartition.is_on_left_side(pred) {
                bipartition.insert(node);
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    bipartition
}

/// Returns `true` if people `1..=n` can be split into two groups such that no pair in `dislikes`
/// ends up in the same group.
///
/// Fails if a label is outside `1..=n`.
///
/// # Examples
/// ```
/// use dsakit::algo::possible_bipartition;
///
/// assert!(possible_bipartition(4, &[(1, 2), (1, 3), (2, 4)]).unwrap());
/// assert!(!possible_bipartition(3, &[(1, 2), (1, 3), (2, 3)]).unwrap());
/// ```
pub fn possible_bipartition(n: NumNodes, dislikes: &[(u32, u32)]) -> Result<bool> {
    let edges = dislikes
        .iter()
        .map(|&(a, b)| Ok(Edge(check_label(a, n)?, check_label(b, n)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(AdjArrayUndir::from_edges(n, edges).is_bipartite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxhash::FxHashSet;

    #[test]
    fn path() {
        for n in 1..10 {
            let mut graph = AdjArrayUndir::new(n);
            for u in 0..n - 1 {
                graph.add_edge(u, u + 1);
            }

            assert!(graph.is_bipartite());

            if n > 2 {
                let mut graph = graph.clone();
                graph.remove_edge(n / 2, n / 2 + 1);
                assert!(graph.is_bipartite());
            }

            if n > 2 {
                let mut graph = graph.clone();
                graph.add_edge(1 - (n % 2), n - 1);
                assert!(!graph.is_bipartite());
            }
        }
    }

    #[test]
    fn computed_partition_is_valid() {
        // two components: a 6-cycle and a star
        let g = AdjArrayUndir::from_edges(
            10,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (6, 7), (6, 8), (6, 9)],
        );
        let bip: NodeBitSet = g.compute_bipartition().unwrap();
        assert!(g.is_bipartition(&bip));
        assert!(bip.is_on_left_side(0));
        assert!(bip.is_on_left_side(6));
        assert_eq!(bip.cardinality(), 6);

        let hashed: FxHashSet<Node> = g.compute_bipartition().unwrap();
        assert_eq!(hashed.len(), 6);
    }

    #[test]
    fn adjacency_lists() {
        // [[1,2,3],[0,2],[0,1,3],[0,2]]
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
        assert!(!g.is_bipartite());

        // [[1,3],[0,2],[1,3],[0,2]]
        let g = AdjArrayUndir::from_edges(4, [(0, 1), (0, 3), (1, 2), (2, 3)]);
        assert!(g.is_bipartite());

        // an odd directed cycle
        let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        assert!(!g.is_bipartite());

        assert!(AdjArrayUndir::new(0).is_bipartite());
    }

    #[test]
    fn dislikes() {
        assert!(possible_bipartition(4, &[(1, 2), (1, 3), (2, 4)]).unwrap());
        assert!(!possible_bipartition(3, &[(1, 2), (1, 3), (2, 3)]).unwrap());
        assert!(!possible_bipartition(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (1, 5)]).unwrap());
        assert!(possible_bipartition(1, &[]).unwrap());
        assert!(matches!(
            possible_bipartition(2, &[(1, 3)]),
            Err(Error::NodeOutOfRange { node: 3, n: 2 })
        ));
    }
}
