//! Disjoint-set forest with path halving and union by size.

use crate::prelude::*;

/// Partition of `0..n` into disjoint sets supporting near-constant time merges and queries
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            num_sets: n,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if the universe is empty
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `u`.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            let grand_parent = self.parent[self.parent[u as usize] as usize];
            self.parent[u as usize] = grand_parent;
            u = grand_parent;
        }
        u
    }

    /// Merges the sets containing `u` and `v`.
    /// Returns *true* if they were in different sets before.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let mut ru = self.find(u);
        let mut rv = self.find(v);
        if ru == rv {
            return false;
        }

        if self.size[ru as usize] < self.size[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }

        self.parent[rv as usize] = ru;
        self.size[ru as usize] += self.size[rv as usize];
        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }

    /// Size of the set containing `u`
    pub fn set_size(&mut self, u: Node) -> NumNodes {
        let root = self.find(u);
        self.size[root as usize]
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Groups all elements by their set. Sets are ordered by their smallest element,
    /// elements within a set are sorted.
    pub fn sets(&mut self) -> Vec<Vec<Node>> {
        let mut index_of_root = vec![INVALID_NODE; self.len()];
        let mut sets: Vec<Vec<Node>> = Vec::with_capacity(self.num_sets as usize);

        for u in 0..self.len() as Node {
            let root = self.find(u) as usize;
            if index_of_root[root] == INVALID_NODE {
                index_of_root[root] = sets.len() as Node;
                sets.push(Vec::new());
            }
            sets[index_of_root[root] as usize].push(u);
        }

        sets
    }
}
