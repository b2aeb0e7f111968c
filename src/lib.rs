//! Domain-agnostic local search engine.
//!
//! Iteratively improves a bounded working set of candidates (the
//! *fringe*) until a stopping condition is met. The caller supplies a
//! problem definition — state generation, neighborhood expansion,
//! quality evaluation — and picks an algorithm; the engine supplies the
//! shared loop and the per-iteration expansion policies:
//!
//! - **Hill climbing**: greedy ascent from the initial state, plus
//!   stochastic and random-restart variants.
//! - **Beam search**: a fixed-width population of the best candidates,
//!   expanded in full or best-first.
//! - **Simulated annealing**: Metropolis acceptance of worsening moves
//!   under a caller-supplied temperature schedule.
//! - **Genetic search**: value-proportionate parent sampling with
//!   elitism, crossover, and mutation.
//!
//! All algorithms are anytime and best-effort: they return the best
//! candidate seen, with no global-optimality guarantee.
//!
//! # Architecture
//!
//! One driver ([`SearchRunner`]) runs every algorithm; each algorithm is
//! an [`Expander`] that transforms the fringe once per iteration. The
//! engine is single-threaded and holds no random state of its own —
//! every stochastic choice draws from the `rand::Rng` the caller passes
//! in, so seeded runs are fully reproducible.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_localsearch::{hill_climbing, SearchProblem};
//!
//! /// Find the integer in 0..=100 closest to 42.
//! struct ClosestTo42;
//!
//! impl SearchProblem for ClosestTo42 {
//!     type State = i64;
//!
//!     fn initial_state(&self) -> i64 {
//!         0
//!     }
//!
//!     fn successors(&self, &x: &i64) -> Vec<i64> {
//!         [x - 1, x + 1]
//!             .into_iter()
//!             .filter(|&s| (0..=100).contains(&s))
//!             .collect()
//!     }
//!
//!     fn value(&self, &x: &i64) -> f64 {
//!         -((x - 42) * (x - 42)) as f64
//!     }
//! }
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = hill_climbing(&ClosestTo42, 0, &mut rng, None);
//! assert_eq!(*result.best.state(), 42);
//! ```

pub mod algorithms;
pub mod fringe;
pub mod node;
pub mod observer;
pub mod problem;
pub mod runner;
pub mod sampler;
pub mod strategy;

pub use algorithms::{
    beam, beam_best_first, genetic, hill_climbing, hill_climbing_random_restarts,
    hill_climbing_stochastic, simulated_annealing,
};
pub use fringe::Fringe;
pub use node::{Node, Origin};
pub use observer::{NoopObserver, SearchObserver};
pub use problem::SearchProblem;
pub use runner::{SearchConfig, SearchResult, SearchRunner, StopReason};
pub use sampler::WeightedSampler;
pub use strategy::{
    exp_schedule, exp_schedule_with, AllExpander, AnnealingExpander, Expander, FirstExpander,
    GeneticExpander, RandomBetterExpander,
};
