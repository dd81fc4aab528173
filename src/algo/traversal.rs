/*!
Graph traversals and what can be derived from them.

- Lazy BFS/DFS iterators, optionally yielding the predecessor of every node
  (the edge through which it was discovered).
- [`TraversalTree`] to turn such an iterator into parent arrays or hop distances.
- [`TopoSearch`], Kahn's algorithm as an iterator.
- The [`Traversal`] trait exposing all of the above as methods on a graph.
*/

use super::*;
use std::{cmp::Reverse, collections::BinaryHeap, collections::VecDeque, marker::PhantomData};

/// Item yielded by a traversal: either a bare [`Node`] or a [`PredecessorOfNode`].
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item discovered via `predecessor`.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor (a start node).
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a start node is encoded as `(node, node)`.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// The frontier of a traversal. A queue gives BFS, a stack gives DFS.
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator parameterized by frontier `S`, yielded item `I` and visited-set `V`.
///
/// Nodes are marked visited when they are pushed, hence every node is yielded at most once.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// BFS with a custom visited-set
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// A BFS traversal iterator
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// A DFS traversal iterator
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// A DFS traversal iterator that records predecessor information
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.insert(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() + self.sequencer.cardinality() - self.visited.len()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());
        let len = graph.len();
        let mut visited = V::from_total_used_capacity(len, len);
        visited.insert(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }
}

impl<G, S, I, V> TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(&u)
    }

    /// Tries to restart the search at a yet unvisited node and returns
    /// true iff successful. Requires that the search came to a hold earlier.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Adds `u` as a further start node (if not already visited), turning the search into a multi-source search.
    /// Must be called before the search is advanced.
    pub fn with_additional_start(mut self, u: Node) -> Self {
        if !self.visited.insert(u) {
            self.sequencer.push(I::new_without_predecessor(u));
        }
        self
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Treats `u` as already visited, so no edges into `u` are taken.
    /// Must be called before the search reaches `u`.
    pub fn with_node_excluded(mut self, u: Node) -> Self {
        self.visited.insert(u);
        self
    }

    /// Consumes the search and returns true iff `u` can be reached from the start node
    /// by a path of at least one edge.
    ///
    /// ** Panics if the search was already advanced **
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        assert_eq!(self.sequencer.cardinality(), 1);
        self.visited.remove(&u);
        self.next();
        self.any(|v| v.item() == u)
    }
}

/// Extension trait for predecessor-tracking traversals, exposing the implied search tree.
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Parent of every node in the search tree. Roots and unreached nodes are their own parent.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
    /// assert_eq!(g.bfs_with_predecessor(0).parent_array(), vec![0, 0, 1, 3]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
        tree
    }

    /// Depth of every node in the search tree; `INVALID_NODE` for unreached nodes.
    /// For a BFS this is the hop distance from the start node.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2)]);
    /// assert_eq!(g.bfs_with_predecessor(0).depths(), vec![0, 1, 2, INVALID_NODE]);
    /// ```
    fn depths(&mut self) -> Vec<Node> {
        let mut depths = vec![INVALID_NODE; self.graph_ref().len()];
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = pred_with_item
                .predecessor()
                .map_or(0, |p| depths[p as usize] + 1);
        }
        depths
    }
}

impl<'a, G, S, V> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<Node>,
{
}

/// Kahn's algorithm as an iterator.
///
/// Among all nodes whose predecessors were already emitted, the smallest one is emitted next.
/// The resulting order is thus the lexicographically smallest topological order.
/// On a cyclic graph the iterator stops early, without emitting the nodes on or behind a cycle.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    available: BinaryHeap<Reverse<Node>>,
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: DirectedAdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let Reverse(u) = self.available.pop()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.available.push(Reverse(v));
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.available.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: DirectedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs: Vec<NumNodes> = graph.in_degrees().collect();
        let available = in_degs
            .iter()
            .enumerate()
            .filter(|(_, d)| **d == 0)
            .map(|(u, _)| Reverse(u as Node))
            .collect();

        Self {
            graph,
            in_degs,
            available,
        }
    }

    /// Consumes the search and returns `ranking[u]` = position of `u` in the order,
    /// or `None` if the graph is cyclic.
    pub fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph.len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            ranking[u as usize] = rank;
            rank += 1;
        }

        (rank == self.graph.number_of_nodes()).then_some(ranking)
    }
}

/// Provides traversal methods (BFS, DFS, topological order, ...) on every graph
pub trait Traversal: AdjacencyList + Sized {
    /// Nodes reachable from `start` in BFS order
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1), (0, 2), (2, 3)]);
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order[0], 0);
    /// assert_eq!(order[3], 3);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Nodes reachable from `start` in DFS order
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// BFS yielding `(predecessor, node)` pairs
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// DFS yielding `(predecessor, node)` pairs
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns *true* if there is a path from `start` to `end` (always true if `start == end`)
    fn is_reachable(&self, start: Node, end: Node) -> bool {
        start == end || self.bfs(start).stop_at(end).any(|u| u == end)
    }

    /// Kahn's algorithm; see [`TopoSearch`]
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayIn::from_edges(3, [(2, 1), (1, 0)]);
    /// let order: Vec<_> = g.topo_search().collect();
    /// assert_eq!(order, vec![2, 1, 0]);
    /// ```
    fn topo_search(&self) -> TopoSearch<'_, Self>
    where
        Self: DirectedAdjacencyList,
    {
        TopoSearch::new(self)
    }

    /// Returns `true` if the directed graph has no cycle
    fn is_acyclic(&self) -> bool
    where
        Self: DirectedAdjacencyList,
    {
        self.topo_search().count() == self.len()
    }

    /// Returns `true` if `u` lies on a directed cycle
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1), (1, 2), (2, 1)]);
    /// assert!(!g.is_node_on_cycle(0));
    /// assert!(g.is_node_on_cycle(1));
    /// ```
    fn is_node_on_cycle(&self, u: Node) -> bool
    where
        Self: GraphType<Dir = Directed>,
    {
        self.bfs(u).is_node_reachable(u)
    }

    /// Inner nodes of a path from `start` to `end` with the fewest edges.
    /// Returns `None` if `end` is unreachable.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3)]);
    /// assert_eq!(g.shortest_path(1, 3).map(|p| p.len()), Some(1));
    /// assert_eq!(g.shortest_path(0, 1), Some(vec![]));
    /// ```
    fn shortest_path(&self, start: Node, end: Node) -> Option<Vec<Node>> {
        if start == end {
            return Some(Vec::new());
        }

        let mut parent = vec![INVALID_NODE; self.len()];
        let bfs = self.bfs_with_predecessor(start).stop_at(end);

        for item in bfs {
            let Some(p) = item.predecessor() else {
                continue;
            };
            parent[item.item() as usize] = p;

            if item.item() == end {
                let mut path = Vec::new();
                let mut node = p;
                while node != start {
                    path.push(node);
                    node = parent[node as usize];
                }
                path.reverse();
                return Some(path);
            }
        }

        None
    }

    /// All paths from `start` to `end` in a DAG, each including both endpoints,
    /// listed in DFS order (neighbors in adjacency order).
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);
    /// assert_eq!(g.all_paths(0, 3), vec![vec![0, 1, 3], vec![0, 2, 3]]);
    /// ```
    fn all_paths(&self, start: Node, end: Node) -> Vec<Vec<Node>>
    where
        Self: GraphType<Dir = Directed>,
    {
        fn walk<G: AdjacencyList>(
            graph: &G,
            u: Node,
            end: Node,
            path: &mut Vec<Node>,
            out: &mut Vec<Vec<Node>>,
        ) {
            if u == end {
                out.push(path.clone());
                return;
            }
            for v in graph.neighbors_of(u) {
                path.push(v);
                walk(graph, v, end, path, out);
                path.pop();
            }
        }

        let mut paths = Vec::new();
        walk(self, start, end, &mut vec![start], &mut paths);
        paths
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = AdjArrayIn::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order: Vec<Node> = graph.bfs(1).collect();
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], 1);
        assert_eq!(order[1..3].iter().copied().sorted().collect_vec(), vec![0, 2]);
        assert_eq!(order[3..5].iter().copied().sorted().collect_vec(), vec![4, 5]);
        assert_eq!(order[5], 3);

        assert_eq!(BFS::new(&graph, 5).collect_vec(), [5, 4, 3]);
    }

    #[test]
    fn bfs_with_predecessor() {
        let graph = AdjArray::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let mut edges: Vec<_> = graph
            .bfs_with_predecessor(1)
            .map(|x| x.predecessor_with_item())
            .collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![
                (None, 1),
                (Some(0), 5),
                (Some(1), 0),
                (Some(1), 2),
                (Some(2), 4),
                (Some(4), 3)
            ]
        );
    }

    #[test]
    fn stopper() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(0).stop_at(1).collect_vec(), vec![0, 1]);
    }

    #[test]
    fn dfs_visits_each_node_once() {
        let graph = AdjArrayUndir::from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);
        let order = graph.dfs(1).collect_vec();
        assert_eq!(order[0], 1);
        assert_eq!(order.iter().sorted().collect_vec().len(), 6);
        assert!(order.iter().all_unique());
    }

    #[test]
    fn dfs_tree() {
        // Only one DFS tree exists on a path
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.dfs_with_predecessor(3).parent_array(), vec![1, 2, 3, 3]);
    }

    #[test]
    fn depths_are_hop_distances() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 3), (0, 3), (4, 5)]);
        assert_eq!(
            graph.bfs_with_predecessor(0).depths(),
            vec![0, 1, 2, 1, INVALID_NODE, INVALID_NODE]
        );
    }

    #[test]
    fn multi_source_depths() {
        let graph = AdjArrayUndir::from_edges(7, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let depths = graph
            .bfs_with_predecessor(0)
            .with_additional_start(5)
            .with_additional_start(0)
            .depths();
        assert_eq!(depths, vec![0, 1, 2, 2, 1, 0, INVALID_NODE]);
    }

    #[test]
    fn reachability() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2)]);
        assert!(graph.is_reachable(0, 2));
        assert!(!graph.is_reachable(2, 0));
        assert!(graph.is_reachable(3, 3));
        assert_eq!(graph.shortest_path(0, 2), Some(vec![1]));
        assert_eq!(graph.shortest_path(0, 3), None);
    }

    #[test]
    fn topology_rank() {
        let mut graph =
            AdjArrayIn::from_edges(7, [(2, 0), (1, 0), (0, 3), (0, 4), (0, 5), (3, 6)]);

        {
            let ranks = graph.topo_search().ranking().unwrap();
            for Edge(u, v) in graph.edges(false) {
                assert!(ranks[u as usize] < ranks[v as usize]);
            }
            assert_eq!(graph.topo_search().collect_vec(), vec![1, 2, 0, 3, 4, 5, 6]);
        }

        graph.add_edge(6, 2); // introduce cycle
        assert!(graph.topo_search().ranking().is_none());
        assert!(!graph.is_acyclic());
    }

    #[test]
    fn node_on_cycle() {
        let mut graph =
            AdjArray::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 0), (3, 4), (4, 5)]);
        assert!((0..4).all(|u| graph.is_node_on_cycle(u)));
        assert!(!graph.is_node_on_cycle(4));
        assert!(!graph.is_node_on_cycle(5));

        graph.add_edge(5, 2);
        assert!(graph.vertices().all(|u| graph.is_node_on_cycle(u)));
    }

    #[test]
    fn all_paths_source_to_target() {
        // LC 797: [[4,3,1],[3,2,4],[3],[4],[]]
        let graph = AdjArray::from_edges(
            5,
            [(0, 4), (0, 3), (0, 1), (1, 3), (1, 2), (1, 4), (2, 3), (3, 4)],
        );
        let paths = graph.all_paths(0, 4);
        assert_eq!(
            paths,
            vec![
                vec![0, 4],
                vec![0, 3, 4],
                vec![0, 1, 3, 4],
                vec![0, 1, 2, 3, 4],
                vec![0, 1, 4]
            ]
        );
    }
}
