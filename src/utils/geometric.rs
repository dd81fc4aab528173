//! Skip-sampling of Bernoulli trials.
//!
//! Instead of flipping a coin for each of the `N` candidates of a `G(n,p)` graph, we draw the gap
//! to the next success from a geometric distribution. This makes generation `O(n + m)`.

use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::utils::Probability;

/// Yields the indices in `0..stop` that succeed in independent Bernoulli(`prob`) trials
#[derive(Debug)]
pub struct GeometricSkips<'a, R: Rng> {
    rng: &'a mut R,
    distr: Option<Geometric>,
    prob: f64,
    next: u64,
    stop: u64,
}

impl<'a, R: Rng> GeometricSkips<'a, R> {
    /// ** Panics if `prob` is not a valid probability **
    pub fn new(rng: &'a mut R, prob: f64, stop: u64) -> Self {
        assert!(prob.is_valid_probility());
        let distr = Some(prob)
            .filter(|&p| p > 0.0 && p < 1.0)
            .and_then(|p| Geometric::new(p).ok());
        Self {
            rng,
            distr,
            prob,
            next: 0,
            stop,
        }
    }
}

impl<R: Rng> Iterator for GeometricSkips<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.prob == 0.0 || self.next >= self.stop {
            return None;
        }

        let skip = match &self.distr {
            Some(distr) => distr.sample(self.rng),
            None => 0,
        };

        let index = self.next.checked_add(skip).filter(|&x| x < self.stop)?;
        self.next = index + 1;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn trivial_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        assert_eq!(GeometricSkips::new(rng, 1.0, 10).count(), 10);
        assert_eq!(GeometricSkips::new(rng, 0.0, 10).count(), 0);
    }

    #[test]
    fn strictly_increasing_below_stop() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        let xs: Vec<u64> = GeometricSkips::new(rng, 0.3, 1000).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!(xs.iter().all(|&x| x < 1000));
    }

    #[test]
    fn occurences() {
        let rng = &mut Pcg64Mcg::seed_from_u64(5);

        let stop = 100u64;
        let mut occurences = vec![0; stop as usize];
        for _ in 0..1000 {
            for x in GeometricSkips::new(rng, 0.25, stop) {
                occurences[x as usize] += 1;
            }
        }

        assert!(occurences.into_iter().all(|x| (150..350).contains(&x)));
    }
}
