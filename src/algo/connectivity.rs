/*!
# Connectivity

Connected components of undirected graphs and the tree problems built on them
(tree validation, minimum height trees, edge reorientation, apple collection),
as well as reachability-style questions on directed graphs.
*/

use std::iter::FusedIterator;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Component-related queries on undirected graphs
pub trait Connectivity: AdjacencyList + GraphType<Dir = Undirected> + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Components are emitted in order of their smallest node; nodes within a component in BFS order.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (3, 4)]);
    /// let ccs: Vec<Vec<Node>> = g.connected_components().collect();
    /// assert_eq!(ccs, vec![vec![0, 1, 2], vec![3, 4]]);
    /// ```
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns `true` if the graph is connected and has exactly `n - 1` edges.
    /// The graph without nodes is not a tree.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// assert!(AdjArrayUndir::from_edges(5, [(0, 1), (0, 2), (0, 3), (1, 4)]).is_valid_tree());
    /// assert!(!AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (1, 3), (1, 4)]).is_valid_tree());
    /// ```
    fn is_valid_tree(&self) -> bool
    where
        Self: GraphEdgeOrder,
    {
        !self.is_empty()
            && self.number_of_edges() + 1 == self.number_of_nodes()
            && self.number_of_connected_components() == 1
    }

    /// Returns the roots of all minimum height trees of a tree, i.e. its one or two centers, in
    /// ascending order. Computed by repeatedly trimming all leaves.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayUndir::from_edges(6, [(3, 0), (3, 1), (3, 2), (3, 4), (5, 4)]);
    /// assert_eq!(g.minimum_height_trees(), vec![3, 4]);
    /// ```
    fn minimum_height_trees(&self) -> Vec<Node> {
        let mut degrees: Vec<NumNodes> = self.degrees().collect();
        let mut leaves = self.vertices().filter(|&u| degrees[u as usize] <= 1).collect_vec();
        let mut remaining = self.len();

        while remaining > 2 && !leaves.is_empty() {
            remaining -= leaves.len();
            let mut next = Vec::new();
            for &u in &leaves {
                for v in self.neighbors_of(u) {
                    degrees[v as usize] -= 1;
                    if degrees[v as usize] == 1 {
                        next.push(v);
                    }
                }
            }
            leaves = next;
        }

        leaves.sort_unstable();
        leaves
    }

    /// In a tree rooted at `0`, returns the number of edges a walk starting and ending at `0` must traverse
    /// to visit every node `u` with `has_apple[u]`.
    /// ** Panics if `has_apple.len() != n` **
    fn min_time_to_collect_apples(&self, has_apple: &[bool]) -> usize {
        assert_eq!(has_apple.len(), self.len());
        if self.is_empty() {
            return 0;
        }

        let order = self.bfs_with_predecessor(0).collect_vec();
        let mut needed = has_apple.to_vec();
        let mut time = 0;

        for &(p, u) in order.iter().rev() {
            if p != u && needed[u as usize] {
                needed[p as usize] = true;
                time += 2;
            }
        }

        time
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType<Dir = Undirected> + Sized {}

/// Iterator over the connected components of an undirected graph.
/// See [`Connectivity::connected_components`].
pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    /// Creates the iterator; a graph without nodes has no components
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| graph.bfs(0)),
        }
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList + GraphType<Dir = Undirected>,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                self.bfs = None;
                return None;
            }
        }
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where
    G: AdjacencyList + GraphType<Dir = Undirected>
{
}

/// Returns the minimum number of roads that have to be reversed so that every city can reach city `0`.
/// The roads `connections` form a tree when ignoring their orientation.
///
/// Fails if a city is `>= n`.
///
/// # Examples
/// ```
/// use dsakit::algo::count_reorientations;
///
/// assert_eq!(count_reorientations(6, &[(0, 1), (1, 3), (2, 3), (4, 0), (4, 5)]).unwrap(), 3);
/// ```
pub fn count_reorientations(n: NumNodes, connections: &[(Node, Node)]) -> Result<usize> {
    let edges = checked_edges(n, connections)?;
    if n == 0 {
        return Ok(0);
    }

    let roads = AdjArray::from_edges(n, &edges);
    let tree = AdjArrayUndir::from_edges(n, &edges);

    // every tree edge discovered from the root must point towards it
    let flips = tree
        .bfs_with_predecessor(0)
        .filter(|&(p, u)| p != u && roads.has_edge(p, u))
        .count();

    debug!(nodes = n, flips, "counted reorientations");
    Ok(flips)
}

/// Returns `true` if all rooms can be visited starting in room `0`,
/// where `rooms[u]` lists the keys found in room `u`.
///
/// Fails if a key refers to a room that does not exist.
///
/// # Examples
/// ```
/// use dsakit::algo::can_visit_all_rooms;
///
/// assert!(can_visit_all_rooms(&[vec![1], vec![2], vec![3], vec![]]).unwrap());
/// assert!(!can_visit_all_rooms(&[vec![1, 3], vec![3, 0, 1], vec![2], vec![0]]).unwrap());
/// ```
pub fn can_visit_all_rooms(rooms: &[Vec<Node>]) -> Result<bool> {
    let n = rooms.len() as NumNodes;
    if n == 0 {
        return Ok(true);
    }

    let keys = checked_edges(
        n,
        rooms
            .iter()
            .enumerate()
            .flat_map(|(u, keys)| keys.iter().map(move |&v| (u as Node, v))),
    )?;
    let graph = AdjArray::from_edges(n, keys);

    Ok(graph.bfs(0).count() == graph.len())
}

/// Returns the 1-based label of the person trusted by everybody else who trusts nobody, if such a person exists.
/// `trust` holds 1-based pairs `(a, b)` meaning that `a` trusts `b`.
///
/// Fails if a label is outside `1..=n`.
///
/// # Examples
/// ```
/// use dsakit::algo::find_judge;
///
/// assert_eq!(find_judge(3, &[(1, 3), (2, 3)]).unwrap(), Some(3));
/// assert_eq!(find_judge(3, &[(1, 3), (2, 3), (3, 1)]).unwrap(), None);
/// ```
pub fn find_judge(n: NumNodes, trust: &[(u32, u32)]) -> Result<Option<u32>> {
    let edges: Vec<Edge> = trust
        .iter()
        .map(|&(a, b)| Ok(Edge(check_label(a, n)?, check_label(b, n)?)))
        .collect::<Result<_>>()?;
    let graph = AdjArrayIn::from_edges(n, edges);

    Ok(graph
        .vertices()
        .find(|&u| graph.degree_of(u) == 0 && graph.in_degree_of(u) + 1 == n)
        .map(|u| u + 1))
}
