/*!
# Graph Generators

Random graphs for tests, benchmarks and the `dsakit generate` command.

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).avg_deg(d)`).
3. Generate edges via `generate()` or `stream()`.

[`WeightedGen`] wraps any edge generator and attaches uniformly drawn weights, so shortest path algorithms can be
exercised on the same random topologies.

The [`RandomGraph`] and [`RandomWeightedGraph`] traits abstract the generation of whole graph instances into
reusable constructors, filtering the raw edge stream according to the graph's orientation.
*/

use std::ops::RangeInclusive;

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod weighted;

pub use gnp::*;
pub use weighted::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// General trait for a configurable random edge generator.
///
/// Types implementing this trait can produce a complete edge list
/// or a lazily-evaluated stream (iterator) of edges.
pub trait GraphGenerator {
    /// Generates a list of random edges.
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Creates a lazy iterator (stream) over generated edges.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Trait for building full graph instances from random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    /// Undirected graphs consider every unordered pair once.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a `G(n,p)` graph with no self-loops.
    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphType,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| G::Dir::is_directed() || e.is_normalized()),
        )
    }

    fn gnp_no_loops<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        Self::from_edges(
            n,
            Gnp::new()
                .nodes(n)
                .prob(p)
                .stream(rng)
                .filter(|e| !e.is_loop() && (G::Dir::is_directed() || e.is_normalized())),
        )
    }
}

/// Weighted counterpart of [`RandomGraph`]
pub trait RandomWeightedGraph: Sized {
    /// Creates a `G(n,p)` graph without self-loops whose weights are drawn uniformly from `weights`.
    ///
    /// # Examples
    /// ```
    /// use dsakit::{gens::RandomWeightedGraph, prelude::*};
    /// use rand::SeedableRng;
    /// use rand_pcg::Pcg64Mcg;
    ///
    /// let rng = &mut Pcg64Mcg::seed_from_u64(1);
    /// let g = WeightedAdjArray::gnp_weighted(rng, 50, 0.1, 1..=9);
    /// assert!(g.weighted_edges().all(|e| (1..=9).contains(&e.weight()) && !e.edge().is_loop()));
    /// ```
    fn gnp_weighted<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng;
}

impl<G> RandomWeightedGraph for G
where
    G: WeightedGraphFromScratch + GraphType,
{
    fn gnp_weighted<R>(rng: &mut R, n: NumNodes, p: f64, weights: RangeInclusive<Weight>) -> Self
    where
        R: Rng,
    {
        let generator = WeightedGen::new(Gnp::new().nodes(n).prob(p)).weights(weights);
        Self::from_weighted_edges(
            n,
            generator.generate(rng).into_iter().filter(|e| {
                !e.edge().is_loop() && (G::Dir::is_directed() || e.edge().is_normalized())
            }),
        )
    }
}
