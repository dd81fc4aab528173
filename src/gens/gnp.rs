use crate::{
    gens::*,
    utils::{Probability, geometric::GeometricSkips},
};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs generate every possible directed edge (including loops) of a graph with `n` nodes
/// with probability `p`, independent from each other.
///
/// Filtering loops or orientations is up to the caller, see [`RandomGraph`].
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: u64,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly.
    /// ** Panics if `prob` is not a valid probability **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = GnpType::Prob(prob);
        self
    }

    /// The edge probability, resolving an average degree `d` to `d / n`.
    /// ** Panics if neither was set or the degree is not in `0..=n` **
    pub fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(_) if self.n == 0 => 0.0,
            GnpType::AvgDeg(d) => {
                let p = d / self.n as f64;
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/n`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    /// Streams edges in increasing order of `u * n + v` by skipping geometrically distributed gaps
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let n = self.n;
        GeometricSkips::new(rng, self.probability(), n * n).map(move |x| Edge::from_u64(x, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn trivial_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);
        assert!(Gnp::new().nodes(10).prob(0.0).generate(rng).is_empty());
        assert_eq!(Gnp::new().nodes(4).prob(1.0).generate(rng).len(), 16);
        assert!(Gnp::new().nodes(0).avg_deg(3.0).generate(rng).is_empty());
    }

    #[test]
    fn sorted_and_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let edges = Gnp::new().nodes(30).avg_deg(4.0).generate(rng);
        assert!(edges.iter().all(|&Edge(u, v)| u < 30 && v < 30));
        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
    }

    #[test]
    fn average_degree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 400;
        let total: usize = (0..20)
            .map(|_| AdjArray::gnp_no_loops(rng, n, 5.0 / n as f64).number_of_edges() as usize)
            .sum();
        // expected 20 * 5 * (n - 1) edges
        let avg = total as f64 / (20 * n) as f64;
        assert!((4.5..5.5).contains(&avg), "{avg}");
    }

    #[test]
    fn undirected_pairs_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let g = AdjArrayUndir::gnp_no_loops(rng, 8, 1.0);
        assert_eq!(g.number_of_edges(), 8 * 7 / 2);
    }

    #[test]
    #[should_panic]
    fn degree_too_large() {
        Gnp::new().nodes(3).avg_deg(4.0).probability();
    }
}
