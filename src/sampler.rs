//! Fitness-proportionate sampling over a population.

use rand::Rng;

/// Draws items with probability proportional to their weight.
///
/// Built fresh from parallel `(weights, items)` slices — genetic search
/// rebuilds one per generation over the current population, with each
/// candidate's value as its weight.
///
/// Weights are normalized by their sum into a cumulative distribution.
/// Two degenerate inputs are handled locally rather than rejected:
///
/// - **Zero sum**: every item becomes equally likely (uniform fallback).
/// - **Negative weights** (values may be negative): all weights are
///   shifted by the minimum observed weight before normalizing, so the
///   worst item gets weight zero and the distribution stays valid. An
///   all-equal population then degrades to the uniform fallback.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_localsearch::WeightedSampler;
///
/// let items = ["a", "b", "c"];
/// let sampler = WeightedSampler::new(&[1.0, 8.0, 1.0], &items);
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let _drawn = sampler.sample(&mut rng);
/// assert_eq!(*sampler.best(), "b");
/// ```
#[derive(Debug, Clone)]
pub struct WeightedSampler<'a, T> {
    items: &'a [T],
    cumulative: Vec<f64>,
    best: usize,
}

impl<'a, T> WeightedSampler<'a, T> {
    /// Builds a sampler over `items` weighted by `weights`.
    ///
    /// # Panics
    /// Panics if the slices are empty or of different lengths.
    pub fn new(weights: &[f64], items: &'a [T]) -> Self {
        assert!(!items.is_empty(), "sampler requires at least one item");
        assert_eq!(
            weights.len(),
            items.len(),
            "sampler weights and items must have equal length"
        );

        let min = weights.iter().copied().fold(f64::INFINITY, f64::min);
        let shift = if min < 0.0 { -min } else { 0.0 };
        let total: f64 = weights.iter().map(|w| w + shift).sum();

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut accumulated = 0.0;
        if total == 0.0 {
            // Uniform fallback instead of dividing by zero.
            let p = 1.0 / weights.len() as f64;
            for _ in weights {
                accumulated += p;
                cumulative.push(accumulated);
            }
        } else {
            for w in weights {
                accumulated += (w + shift) / total;
                cumulative.push(accumulated);
            }
        }

        let best = weights
            .iter()
            .enumerate()
            .fold(0, |best, (i, &w)| if w > weights[best] { i } else { best });

        Self {
            items,
            cumulative,
            best,
        }
    }

    /// Draws one item, with replacement, proportionally to its weight.
    ///
    /// Independent draws may return the same item repeatedly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a T {
        let target = rng.random_range(0.0..1.0);
        let index = self
            .cumulative
            .partition_point(|&p| p < target)
            .min(self.items.len() - 1);
        &self.items[index]
    }

    /// The item with the maximal original weight (first occurrence on ties).
    pub fn best(&self) -> &'a T {
        &self.items[self.best]
    }
}
