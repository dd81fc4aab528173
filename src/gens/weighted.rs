use super::*;

/// Attaches weights drawn uniformly from a range to the edges of another generator.
///
/// # Examples
/// ```
/// use dsakit::gens::*;
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64Mcg;
///
/// let rng = &mut Pcg64Mcg::seed_from_u64(7);
/// let edges = WeightedGen::new(Gnp::new().nodes(10).avg_deg(2.0))
///     .weights(-5..=5)
///     .generate(rng);
/// assert!(edges.iter().all(|e| (-5..=5).contains(&e.weight())));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGen<G> {
    inner: G,
    weights: RangeInclusive<Weight>,
}

impl<G: GraphGenerator> WeightedGen<G> {
    /// Wraps `inner`; weights default to `1..=1`
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            weights: 1..=1,
        }
    }

    /// Updates the range weights are drawn from.
    /// ** Panics if the range is empty **
    pub fn weights(mut self, weights: RangeInclusive<Weight>) -> Self {
        assert!(!weights.is_empty(), "weight range must not be empty");
        self.weights = weights;
        self
    }

    /// Generates the edges of the inner generator, each with a random weight
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<WeightedEdge> {
        let edges = self.inner.generate(rng);
        let (low, high) = (*self.weights.start(), *self.weights.end());
        edges
            .into_iter()
            .map(|e| e.with_weight(rng.random_range(low..=high)))
            .collect()
    }

    /// Stream over [`Self::generate`]; the topology is drawn before any weight
    pub fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = WeightedEdge> + use<G, R> {
        self.generate(rng).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn weights_in_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);
        let generator = WeightedGen::new(Gnp::new().nodes(20).prob(0.5)).weights(3..=4);
        let edges = generator.generate(rng);
        assert!(!edges.is_empty());
        assert!(edges.iter().all(|e| e.weight() == 3 || e.weight() == 4));
        assert!(edges.iter().any(|e| e.weight() == 3));
        assert!(edges.iter().any(|e| e.weight() == 4));
    }

    #[test]
    fn same_seed_same_graph() {
        let generator = WeightedGen::new(Gnp::new().nodes(15).avg_deg(3.0)).weights(1..=100);
        let a = generator.generate(&mut Pcg64Mcg::seed_from_u64(9));
        let b: Vec<_> = generator.stream(&mut Pcg64Mcg::seed_from_u64(9)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn unit_weights_by_default() {
        let rng = &mut Pcg64Mcg::seed_from_u64(6);
        let edges = WeightedGen::new(Gnp::new().nodes(5).prob(1.0)).generate(rng);
        assert_eq!(edges.len(), 25);
        assert!(edges.iter().all(|e| e.weight() == 1));
    }
}
