use smallvec::SmallVec;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors in the Neighborhood
    fn clear(&mut self);
}

/// Neighborhood stored as a plain `Vec<Node>`
#[derive(Debug, Clone, Default)]
pub struct ArrNeighborhood(Vec<Node>);

/// Neighborhood stored inline for up to `8` neighbors.
/// Most problem graphs (grids, course schedules) have very small degrees.
#[derive(Debug, Clone, Default)]
pub struct SparseNeighborhood(SmallVec<[Node; 8]>);

macro_rules! impl_vec_neighborhood {
    ($nbs:ident) => {
        impl Neighborhood for $nbs {
            fn num_of_neighbors(&self) -> NumNodes {
                self.0.len() as NumNodes
            }

            fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
                self.0.iter().copied()
            }

            fn add_neighbor(&mut self, u: Node) {
                self.0.push(u);
            }

            fn try_remove_neighbor(&mut self, u: Node) -> bool {
                if let Some(pos) = self.0.iter().position(|&v| v == u) {
                    self.0.swap_remove(pos);
                    true
                } else {
                    false
                }
            }

            fn clear(&mut self) {
                self.0.clear();
            }
        }

        impl $nbs {
            /// Returns a slice-reference of the neighborhood
            pub fn as_slice(&self) -> &[Node] {
                &self.0
            }
        }
    };
}

impl_vec_neighborhood!(ArrNeighborhood);
impl_vec_neighborhood!(SparseNeighborhood);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_remove() {
        let mut nbs = SparseNeighborhood::default();
        assert!(!nbs.try_add_neighbor(3));
        assert!(nbs.try_add_neighbor(3));
        assert!(!nbs.try_add_neighbor(5));
        assert_eq!(nbs.num_of_neighbors(), 2);
        assert!(nbs.try_remove_neighbor(3));
        assert!(!nbs.try_remove_neighbor(3));
        assert_eq!(nbs.as_slice(), &[5]);
    }
}
