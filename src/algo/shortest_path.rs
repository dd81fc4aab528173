/*!
# Weighted Shortest Paths

- [`Dijkstra`]: non-negative weights, binary heap with lazy deletion.
- [`BellmanFord`]: arbitrary weights with negative-cycle detection, or a fixed number of
  snapshot rounds to bound the number of edges on a path.

Both produce a [`ShortestPathTree`]. The [`ShortestPaths`] trait exposes the common case directly on a graph.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, trace};

use super::*;

/// Distances and predecessors from a single source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Node,
    dist: Vec<Option<Weight>>,
    pred: Vec<Option<OptionalNode>>,
}

impl ShortestPathTree {
    fn new(n: NumNodes, source: Node) -> Self {
        let mut dist = vec![None; n as usize];
        dist[source as usize] = Some(0);
        Self {
            source,
            dist,
            pred: vec![None; n as usize],
        }
    }

    /// The node all distances are measured from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance from the source to `v`, or `None` if `v` was not reached.
    /// ** Panics if `v >= n` **
    pub fn distance(&self, v: Node) -> Option<Weight> {
        self.dist[v as usize]
    }

    /// All distances in node order
    pub fn distances(&self) -> &[Option<Weight>] {
        &self.dist
    }

    /// Returns the node preceding `v` on its shortest path, if known.
    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.pred[v as usize].map(|p| p.get())
    }

    /// Returns a shortest path from the source to `v`, including both endpoints.
    /// Returns `None` if `v` was not reached or no predecessors were recorded
    /// (see [`BellmanFord::max_edges`]).
    /// ** Panics if `v >= n` **
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        self.dist[v as usize]?;

        let mut path = vec![v];
        let mut u = v;
        while u != self.source {
            u = self.predecessor(u)?;
            path.push(u);
            if path.len() > self.dist.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Returns the largest distance, or `None` if some node was not reached
    pub fn max_distance(&self) -> Option<Weight> {
        self.dist
            .iter()
            .try_fold(0, |max, d| d.map(|d| max.max(d)))
    }

    /// Number of nodes reached from the source (including the source itself)
    pub fn reached(&self) -> NumNodes {
        self.dist.iter().filter(|d| d.is_some()).count() as NumNodes
    }

    /// Forgets everything about nodes that are not in `keep`
    fn retain(&mut self, keep: &NodeBitSet) {
        for u in 0..self.dist.len() {
            if !keep.get_bit(u as Node) {
                self.dist[u] = None;
                self.pred[u] = None;
            }
        }
    }
}

/// Dijkstra's algorithm.
///
/// # Examples
/// ```
/// use dsakit::{prelude::*, algo::*};
///
/// let g = WeightedAdjArray::from_weighted_edges(4, [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)]);
/// let tree = Dijkstra::new(&g).source(0).run().unwrap();
///
/// assert_eq!(tree.distance(3), Some(4));
/// assert_eq!(tree.path_to(3), Some(vec![0, 2, 1, 3]));
/// ```
pub struct Dijkstra<'a, G> {
    graph: &'a G,
    source: Node,
    stop_at: Option<Node>,
}

impl<G> WithGraphRef<G> for Dijkstra<'_, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Prepares a search from node `0`
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            source: 0,
            stop_at: None,
        }
    }

    /// Sets the source node
    pub fn source(mut self, source: Node) -> Self {
        self.source = source;
        self
    }

    /// Ends the search as soon as `target` is settled.
    /// The resulting tree then only contains the nodes settled before `target`, and `target` itself.
    pub fn stop_at(mut self, target: Node) -> Self {
        self.stop_at = Some(target);
        self
    }

    /// Runs the search.
    ///
    /// Fails if the source or target is out of range, or if an edge with negative weight is reached.
    pub fn run(self) -> Result<ShortestPathTree> {
        let n = self.graph.number_of_nodes();
        check_node(self.source, n)?;
        if let Some(t) = self.stop_at {
            check_node(t, n)?;
        }

        let mut tree = ShortestPathTree::new(n, self.source);
        let mut settled = self.graph.vertex_bitset_unset();
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0 as Weight, self.source)));

        let mut stopped = false;
        while let Some(Reverse((d, u))) = heap.pop() {
            // stale entry
            if settled.set_bit(u) {
                continue;
            }

            if self.stop_at == Some(u) {
                stopped = true;
                break;
            }

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                if w < 0 {
                    return Err(Error::NegativeWeight { u, v, weight: w });
                }

                let candidate = d + w;
                if tree.dist[v as usize].is_none_or(|old| candidate < old) {
                    tree.dist[v as usize] = Some(candidate);
                    tree.pred[v as usize] = OptionalNode::new(u);
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        if stopped {
            tree.retain(&settled);
        }

        debug!(
            source = self.source,
            reached = tree.reached(),
            stopped,
            "dijkstra finished"
        );
        Ok(tree)
    }
}

/// The Bellman-Ford algorithm.
///
/// By default, runs until no distance improves and reports a negative cycle reachable from the source.
/// With [`BellmanFord::max_edges`], instead runs exactly that many rounds where every round relaxes all edges
/// from the distances of the previous round, yielding the cheapest paths with at most that many edges.
///
/// # Examples
/// ```
/// use dsakit::{prelude::*, algo::*};
///
/// let g = WeightedAdjArray::from_weighted_edges(3, [(0, 1, 100), (1, 2, 100), (0, 2, 500)]);
///
/// let unbounded = BellmanFord::new(&g).source(0).run().unwrap();
/// assert_eq!(unbounded.distance(2), Some(200));
///
/// let direct = BellmanFord::new(&g).source(0).max_edges(1).run().unwrap();
/// assert_eq!(direct.distance(2), Some(500));
/// ```
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    source: Node,
    max_edges: Option<NumNodes>,
}

impl<G> WithGraphRef<G> for BellmanFord<'_, G> {
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacencyList,
{
    /// Prepares a search from node `0` without an edge bound
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            source: 0,
            max_edges: None,
        }
    }

    /// Sets the source node
    pub fn source(mut self, source: Node) -> Self {
        self.source = source;
        self
    }

    /// Only considers paths with at most `rounds` edges.
    ///
    /// In this mode no predecessors are recorded, so [`ShortestPathTree::path_to`] only succeeds for the source.
    /// Negative cycles are not reported since every path is finite.
    pub fn max_edges(mut self, rounds: NumNodes) -> Self {
        self.max_edges = Some(rounds);
        self
    }

    /// Runs the algorithm.
    ///
    /// Fails if the source is out of range, or (without edge bound) if a negative cycle is reachable from it.
    pub fn run(self) -> Result<ShortestPathTree> {
        let n = self.graph.number_of_nodes();
        check_node(self.source, n)?;

        let mut tree = ShortestPathTree::new(n, self.source);
        match self.max_edges {
            Some(rounds) => self.bounded_rounds(&mut tree, rounds),
            None => self.relax_until_stable(&mut tree)?,
        }

        debug!(source = self.source, reached = tree.reached(), "bellman-ford finished");
        Ok(tree)
    }

    fn bounded_rounds(&self, tree: &mut ShortestPathTree, rounds: NumNodes) {
        for round in 0..rounds {
            let previous = tree.dist.clone();
            let mut changed = false;

            for WeightedEdge(u, v, w) in self.graph.weighted_edges() {
                let Some(du) = previous[u as usize] else {
                    continue;
                };
                if tree.dist[v as usize].is_none_or(|dv| du + w < dv) {
                    tree.dist[v as usize] = Some(du + w);
                    changed = true;
                }
            }

            trace!(round, changed, "bounded relaxation round");
            if !changed {
                break;
            }
        }
    }

    fn relax_until_stable(&self, tree: &mut ShortestPathTree) -> Result<()> {
        let n = self.graph.number_of_nodes();

        // after n - 1 rounds every shortest path is found; an n-th improving round implies a negative cycle
        for round in 0..n {
            let mut changed = false;

            for WeightedEdge(u, v, w) in self.graph.weighted_edges() {
                let Some(du) = tree.dist[u as usize] else {
                    continue;
                };
                if tree.dist[v as usize].is_none_or(|dv| du + w < dv) {
                    tree.dist[v as usize] = Some(du + w);
                    tree.pred[v as usize] = OptionalNode::new(u);
                    changed = true;
                }
            }

            if !changed {
                trace!(rounds = round + 1, "relaxation converged");
                return Ok(());
            }
        }

        Err(Error::NegativeCycle)
    }
}

/// Shortest path searches directly on weighted graphs
pub trait ShortestPaths: WeightedAdjacencyList + Sized {
    /// Runs [`Dijkstra`] from `source`
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = WeightedAdjArrayUndir::from_weighted_edges(3, [(0, 1, 2), (1, 2, 3)]);
    /// assert_eq!(g.dijkstra(2).unwrap().distances(), &[Some(5), Some(3), Some(0)]);
    /// ```
    fn dijkstra(&self, source: Node) -> Result<ShortestPathTree> {
        Dijkstra::new(self).source(source).run()
    }

    /// Runs [`BellmanFord`] from `source` without edge bound
    fn bellman_ford(&self, source: Node) -> Result<ShortestPathTree> {
        BellmanFord::new(self).source(source).run()
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList + Sized {}

/// Returns the time until a signal sent from `k` reaches all `n` nodes, or `None` if some node is never reached.
/// `times` holds directed edges `(u, v, w)`; all nodes are 1-based labels.
///
/// Fails if a label is outside `1..=n` or a travel time is negative.
///
/// # Examples
/// ```
/// use dsakit::algo::network_delay_time;
///
/// assert_eq!(network_delay_time(&[(2, 1, 1), (2, 3, 1), (3, 4, 1)], 4, 2).unwrap(), Some(2));
/// assert_eq!(network_delay_time(&[(1, 2, 1)], 2, 2).unwrap(), None);
/// ```
pub fn network_delay_time(times: &[(u32, u32, Weight)], n: NumNodes, k: u32) -> Result<Option<Weight>> {
    let mut graph = WeightedAdjArray::new(n);
    for &(u, v, w) in times {
        graph.add_weighted_edge(check_label(u, n)?, check_label(v, n)?, w);
    }

    Ok(graph.dijkstra(check_label(k, n)?)?.max_distance())
}

/// Returns the cheapest price from `src` to `dst` using at most `k` stops (i.e. `k + 1` flights),
/// or `None` if there is no such route.
///
/// Fails if a city is `>= n`.
///
/// # Examples
/// ```
/// use dsakit::algo::cheapest_flight;
///
/// let flights = [(0, 1, 100), (1, 2, 100), (2, 0, 100), (1, 3, 600), (2, 3, 200)];
/// assert_eq!(cheapest_flight(4, &flights, 0, 3, 1).unwrap(), Some(700));
/// ```
pub fn cheapest_flight(
    n: NumNodes,
    flights: &[(Node, Node, Weight)],
    src: Node,
    dst: Node,
    k: NumNodes,
) -> Result<Option<Weight>> {
    let mut graph = WeightedAdjArray::new(n);
    for &(u, v, w) in flights {
        check_node(u, n)?;
        check_node(v, n)?;
        graph.add_weighted_edge(u, v, w);
    }
    check_node(dst, n)?;

    let tree = BellmanFord::new(&graph)
        .source(src)
        .max_edges(k.saturating_add(1))
        .run()?;
    Ok(tree.distance(dst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn random_weighted<D: GraphDir, R: Rng>(
        rng: &mut R,
        n: NumNodes,
        m: usize,
        weights: std::ops::Range<Weight>,
    ) -> WeightedGraph<D> {
        let mut graph = WeightedGraph::<D>::new(n);
        for _ in 0..m {
            graph.add_weighted_edge(
                rng.random_range(0..n),
                rng.random_range(0..n),
                rng.random_range(weights.clone()),
            );
        }
        graph
    }

    #[test]
    fn dijkstra_matches_bellman_ford() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [1 as NumNodes, 5, 30, 100] {
            for m in [n as usize, 4 * n as usize] {
                let graph = random_weighted::<Directed, _>(rng, n, m, 0..20);
                let source = rng.random_range(0..n);

                let dij = graph.dijkstra(source).unwrap();
                let bf = graph.bellman_ford(source).unwrap();
                assert_eq!(dij.distances(), bf.distances());

                for v in graph.vertices() {
                    match dij.path_to(v) {
                        None => assert!(dij.distance(v).is_none()),
                        Some(path) => {
                            assert_eq!(path.first(), Some(&source));
                            assert_eq!(path.last(), Some(&v));
                            let cost: Weight = path
                                .windows(2)
                                .map(|w| {
                                    graph
                                        .weighted_neighbors_of(w[0])
                                        .filter(|&(x, _)| x == w[1])
                                        .map(|(_, c)| c)
                                        .min()
                                        .unwrap()
                                })
                                .sum();
                            assert_eq!(Some(cost), dij.distance(v));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn undirected_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let graph = random_weighted::<Undirected, _>(rng, 40, 80, 1..10);

        let from_zero = graph.dijkstra(0).unwrap();
        for v in graph.vertices() {
            // symmetric
            assert_eq!(from_zero.distance(v), graph.dijkstra(v).unwrap().distance(0));
        }
    }

    #[test]
    fn stop_at_target() {
        let g = WeightedAdjArray::from_weighted_edges(4, [(0, 1, 1), (1, 2, 1), (0, 3, 10)]);
        let tree = Dijkstra::new(&g).source(0).stop_at(2).run().unwrap();
        assert_eq!(tree.distance(2), Some(2));
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(tree.distance(3), None);
    }

    #[test]
    fn rejects_bad_input() {
        let g = WeightedAdjArray::from_weighted_edges(3, [(0, 1, 2), (1, 2, -1)]);
        assert!(matches!(
            g.dijkstra(0),
            Err(Error::NegativeWeight { u: 1, v: 2, weight: -1 })
        ));
        // negative edge is never reached from 2
        assert!(g.dijkstra(2).is_ok());
        assert!(matches!(
            g.dijkstra(3),
            Err(Error::NodeOutOfRange { node: 3, n: 3 })
        ));
    }

    #[test]
    fn negative_weights() {
        let g = WeightedAdjArray::from_weighted_edges(4, [(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)]);
        let tree = g.bellman_ford(0).unwrap();
        assert_eq!(tree.distances(), &[Some(0), Some(2), Some(5), Some(4)]);
        assert_eq!(tree.path_to(3), Some(vec![0, 2, 1, 3]));

        let cyclic =
            WeightedAdjArray::from_weighted_edges(4, [(0, 1, 1), (1, 2, -2), (2, 1, 1), (3, 0, 1)]);
        assert!(matches!(cyclic.bellman_ford(0), Err(Error::NegativeCycle)));

        // reachable via 3 -> 0 -> 1
        assert!(matches!(cyclic.bellman_ford(3), Err(Error::NegativeCycle)));

        let unreachable_cycle =
            WeightedAdjArray::from_weighted_edges(3, [(1, 2, -2), (2, 1, 1)]);
        let tree = unreachable_cycle.bellman_ford(0).unwrap();
        assert_eq!(tree.reached(), 1);
    }

    #[test]
    fn bounded_rounds() {
        let g = WeightedAdjArray::from_weighted_edges(
            4,
            [(0, 1, 100), (1, 2, 100), (2, 0, 100), (1, 3, 600), (2, 3, 200)],
        );
        let bounded = |rounds| BellmanFord::new(&g).source(0).max_edges(rounds).run().unwrap();

        assert_eq!(bounded(0).distance(1), None);
        assert_eq!(bounded(1).distance(3), None);
        assert_eq!(bounded(2).distance(3), Some(700));
        assert_eq!(bounded(3).distance(3), Some(400));
        assert_eq!(bounded(2).path_to(3), None);
        assert_eq!(bounded(2).path_to(0), Some(vec![0]));
    }

    #[test]
    fn tree_queries() {
        let g = WeightedAdjArray::from_weighted_edges(3, [(0, 1, 3), (1, 2, 4)]);
        let tree = g.dijkstra(0).unwrap();
        assert_eq!(tree.source(), 0);
        assert_eq!(tree.max_distance(), Some(7));
        assert_eq!(tree.reached(), 3);
        assert_eq!(tree.predecessor(2), Some(1));
        assert_eq!(tree.predecessor(0), None);

        let tree = g.dijkstra(1).unwrap();
        assert_eq!(tree.max_distance(), None);
        assert_eq!(tree.path_to(0), None);
        assert_eq!(tree.path_to(1), Some(vec![1]));
    }

    #[test]
    fn network_delay() {
        assert_eq!(
            network_delay_time(&[(2, 1, 1), (2, 3, 1), (3, 4, 1)], 4, 2).unwrap(),
            Some(2)
        );
        assert_eq!(network_delay_time(&[(1, 2, 1)], 2, 1).unwrap(), Some(1));
        assert_eq!(network_delay_time(&[(1, 2, 1)], 2, 2).unwrap(), None);
        assert!(network_delay_time(&[(1, 3, 1)], 2, 1).is_err());
        assert!(network_delay_time(&[], 2, 0).is_err());
    }

    #[test]
    fn cheapest_flights() {
        let flights = [(0, 1, 100), (1, 2, 100), (2, 0, 100), (1, 3, 600), (2, 3, 200)];
        assert_eq!(cheapest_flight(4, &flights, 0, 3, 1).unwrap(), Some(700));

        let flights = [(0, 1, 100), (1, 2, 100), (0, 2, 500)];
        assert_eq!(cheapest_flight(3, &flights, 0, 2, 1).unwrap(), Some(200));
        assert_eq!(cheapest_flight(3, &flights, 0, 2, 0).unwrap(), Some(500));
        assert_eq!(cheapest_flight(3, &flights, 2, 0, 5).unwrap(), None);
        assert_eq!(cheapest_flight(3, &flights, 1, 1, 0).unwrap(), Some(0));

        // unbounded stops; relaxation stops once stable
        assert_eq!(cheapest_flight(3, &flights, 0, 2, u32::MAX).unwrap(), Some(200));
    }
}
