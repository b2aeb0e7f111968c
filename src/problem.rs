//! Core trait for local search problems.

use rand::Rng;

/// Defines a local search problem.
///
/// The user implements state generation, neighborhood expansion, and
/// quality evaluation. The engine handles the working set, the iteration
/// loop, and the stop conditions.
///
/// # Maximization
///
/// The engine maximizes [`value`](SearchProblem::value). For minimization,
/// negate the value.
///
/// # Capabilities
///
/// Only [`value`](SearchProblem::value) is required by every algorithm.
/// The remaining methods are capabilities that individual algorithms need:
///
/// | Method | Needed by |
/// |---|---|
/// | [`initial_state`](SearchProblem::initial_state) | hill climbing, stochastic hill climbing, simulated annealing |
/// | [`random_state`](SearchProblem::random_state) | beam, beam best-first, random restarts, genetic |
/// | [`successors`](SearchProblem::successors) | every expanding algorithm (all but genetic) |
/// | [`crossover`](SearchProblem::crossover), [`mutate`](SearchProblem::mutate) | genetic |
///
/// A default implementation panics with a descriptive message, so a
/// missing capability surfaces at its first use rather than upfront.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_localsearch::SearchProblem;
///
/// /// Find the integer in 0..=100 closest to 42.
/// struct ClosestTo42;
///
/// impl SearchProblem for ClosestTo42 {
///     type State = i64;
///
///     fn initial_state(&self) -> i64 {
///         0
///     }
///
///     fn successors(&self, &x: &i64) -> Vec<i64> {
///         [x - 1, x + 1]
///             .into_iter()
///             .filter(|&s| (0..=100).contains(&s))
///             .collect()
///     }
///
///     fn value(&self, &x: &i64) -> f64 {
///         -((x - 42) * (x - 42)) as f64
///     }
/// }
/// ```
pub trait SearchProblem {
    /// The state representation type.
    type State: Clone;

    /// Returns the designated initial state.
    ///
    /// Needed by algorithms that start from a single seed state.
    fn initial_state(&self) -> Self::State {
        panic!("this problem does not define an initial state");
    }

    /// Generates a random state.
    ///
    /// Needed by algorithms that start from a random population
    /// (beam search, random restarts, genetic search).
    fn random_state<R: Rng + ?Sized>(&self, _rng: &mut R) -> Self::State {
        panic!("this problem does not generate random states");
    }

    /// Returns the successor states of `state`.
    ///
    /// The neighborhood need not be exhaustive; a representative sample
    /// is acceptable. An empty vector means the state has no successors.
    fn successors(&self, _state: &Self::State) -> Vec<Self::State> {
        panic!("this problem does not generate successors");
    }

    /// Computes the quality of a state. Higher is better.
    fn value(&self, state: &Self::State) -> f64;

    /// Combines two parent states into a child state.
    ///
    /// Needed by genetic search.
    fn crossover<R: Rng + ?Sized>(
        &self,
        _a: &Self::State,
        _b: &Self::State,
        _rng: &mut R,
    ) -> Self::State {
        panic!("this problem does not support crossover");
    }

    /// Perturbs a state into a mutated copy.
    ///
    /// Needed by genetic search.
    fn mutate<R: Rng + ?Sized>(&self, _state: &Self::State, _rng: &mut R) -> Self::State {
        panic!("this problem does not support mutation");
    }
}
