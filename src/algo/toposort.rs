/*!
# Topological Sorting

Kahn-style orderings built on [`TopoSearch`] and the problems that reduce to them:
course scheduling, alien alphabets, unique sequence reconstruction, and safe/source nodes.

A prerequisite pair `(a, b)` always means that `b` must be taken before `a`, i.e. it induces the edge `b -> a`.
*/

use std::collections::BTreeSet;

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::debug;

use super::*;

/// Orderings on directed graphs
pub trait TopologicalSort: DirectedAdjacencyList + Sized {
    /// Returns a topological order or `None` if the graph contains a cycle.
    /// Among all available nodes the smallest is emitted first, so the result is deterministic.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayIn::from_edges(4, [(3, 1), (1, 0), (2, 0)]);
    /// assert_eq!(g.topological_order(), Some(vec![2, 3, 1, 0]));
    ///
    /// let cyclic = AdjArrayIn::from_edges(2, [(0, 1), (1, 0)]);
    /// assert_eq!(cyclic.topological_order(), None);
    /// ```
    fn topological_order(&self) -> Option<Vec<Node>> {
        let order: Vec<Node> = self.topo_search().collect();
        (order.len() == self.len()).then_some(order)
    }

    /// Returns all nodes, in ascending order, from which every path ends in a node without out-edges.
    ///
    /// Runs Kahn's algorithm on the reversed graph, so in-neighborhoods should be cheap (e.g. [`AdjArrayIn`]).
    ///
    /// # Examples
    /// ```
    /// use dsakit::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayIn::from_edges(7, [(0, 1), (0, 2), (1, 2), (1, 3), (2, 5), (3, 0), (4, 5)]);
    /// assert_eq!(g.eventual_safe_nodes(), vec![2, 4, 5, 6]);
    /// ```
    fn eventual_safe_nodes(&self) -> Vec<Node> {
        let mut out_degs: Vec<NumNodes> = self.degrees().collect();
        let mut stack: Vec<Node> = self.vertices().filter(|&u| out_degs[u as usize] == 0).collect();
        let mut safe = self.vertex_bitset_unset();

        while let Some(u) = stack.pop() {
            safe.set_bit(u);
            for p in self.in_neighbors_of(u) {
                out_degs[p as usize] -= 1;
                if out_degs[p as usize] == 0 {
                    stack.push(p);
                }
            }
        }

        self.vertices().filter(|&u| safe.get_bit(u)).collect()
    }

    /// Returns the nodes without incoming edges in ascending order.
    /// In a DAG, these form the smallest set from which every node is reachable.
    fn minimum_sources(&self) -> Vec<Node> {
        self.vertices().filter(|&u| self.in_degree_of(u) == 0).collect()
    }
}

impl<G> TopologicalSort for G where G: DirectedAdjacencyList + Sized {}

fn prerequisite_graph(n: NumNodes, prerequisites: &[(Node, Node)]) -> Result<AdjArrayIn> {
    let edges = checked_edges(n, prerequisites.iter().map(|&(a, b)| (b, a)))?;
    debug!(nodes = n, edges = edges.len(), "built prerequisite graph");
    Ok(AdjArrayIn::from_edges(n, edges))
}

/// Returns `true` if all `n` courses can be finished given `prerequisites`.
///
/// Fails if a course id is `>= n`.
///
/// # Examples
/// ```
/// use dsakit::algo::can_finish;
///
/// assert!(can_finish(2, &[(1, 0)]).unwrap());
/// assert!(!can_finish(2, &[(1, 0), (0, 1)]).unwrap());
/// ```
pub fn can_finish(n: NumNodes, prerequisites: &[(Node, Node)]) -> Result<bool> {
    Ok(prerequisite_graph(n, prerequisites)?.is_acyclic())
}

/// Returns an order in which all `n` courses can be taken, or `None` if there is none.
///
/// Fails if a course id is `>= n`.
pub fn course_order(n: NumNodes, prerequisites: &[(Node, Node)]) -> Result<Option<Vec<Node>>> {
    Ok(prerequisite_graph(n, prerequisites)?.topological_order())
}

/// Derives the order of the characters of an alien alphabet from a sorted dictionary.
///
/// Returns `None` if the dictionary is inconsistent: either the implied precedences contain a cycle,
/// or a word is directly followed by one of its strict prefixes.
/// Characters without an implied precedence are emitted in ascending order.
///
/// # Examples
/// ```
/// use dsakit::algo::alien_order;
///
/// assert_eq!(alien_order(&["wrt", "wrf", "er", "ett", "rftt"]).as_deref(), Some("wertf"));
/// assert_eq!(alien_order(&["abc", "ab"]), None);
/// ```
pub fn alien_order<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let alphabet: Vec<char> = words
        .iter()
        .flat_map(|w| w.as_ref().chars())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let index: FxHashMap<char, Node> = alphabet
        .iter()
        .enumerate()
        .map(|(i, &c)| (c, i as Node))
        .collect();

    let mut graph = AdjArrayIn::new(alphabet.len() as NumNodes);
    for (a, b) in words.iter().map(|w| w.as_ref()).tuple_windows() {
        match a.chars().zip(b.chars()).find(|(x, y)| x != y) {
            Some((x, y)) => {
                graph.try_add_edge(index[&x], index[&y]);
            }
            None if a.chars().count() > b.chars().count() => return None,
            None => {}
        }
    }

    let order = graph.topological_order()?;
    Some(order.into_iter().map(|u| alphabet[u as usize]).collect())
}

/// Returns `true` if `org` is the one and only sequence consistent with all `seqs`.
///
/// Values are 1-based labels of `org.len()` items; any value outside this range makes the answer `false`,
/// as does an item of `org` that does not occur in `seqs`.
///
/// # Examples
/// ```
/// use dsakit::algo::sequence_reconstruction;
///
/// assert!(!sequence_reconstruction(&[1, 2, 3], &[vec![1, 2], vec![1, 3]]));
/// assert!(sequence_reconstruction(&[1, 2, 3], &[vec![1, 2], vec![1, 3], vec![2, 3]]));
/// ```
pub fn sequence_reconstruction(org: &[u32], seqs: &[Vec<u32>]) -> bool {
    let n = org.len() as NumNodes;
    if n == 0 {
        return seqs.is_empty();
    }

    let mut present = NodeBitSet::new(n);
    for &x in seqs.iter().flatten() {
        let Ok(u) = check_label(x, n) else {
            return false;
        };
        present.set_bit(u);
    }
    if org
        .iter()
        .any(|&x| check_label(x, n).map_or(true, |u| !present.get_bit(u)))
    {
        return false;
    }

    let mut graph = AdjArrayIn::new(n);
    for seq in seqs {
        for (&a, &b) in seq.iter().tuple_windows() {
            graph.try_add_edge(a - 1, b - 1);
        }
    }

    let mut in_degs: Vec<NumNodes> = graph.in_degrees().collect();
    let mut available: Vec<Node> = graph.vertices().filter(|&u| in_degs[u as usize] == 0).collect();
    let mut expected = org.iter();

    while let Some(u) = available.pop() {
        if !available.is_empty() || expected.next() != Some(&(u + 1)) {
            return false;
        }
        for v in graph.neighbors_of(u) {
            in_degs[v as usize] -= 1;
            if in_degs[v as usize] == 0 {
                available.push(v);
            }
        }
    }

    expected.next().is_none()
}
