//! The shared iterate-until-stop search loop.

use rand::Rng;

use crate::fringe::Fringe;
use crate::node::{Node, Origin};
use crate::observer::{NoopObserver, SearchObserver};
use crate::problem::SearchProblem;
use crate::strategy::Expander;

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The configured iteration cap was reached.
    IterationLimit,
    /// The best value did not improve over the previous iteration.
    NoImprovement,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::IterationLimit => write!(f, "iteration limit"),
            StopReason::NoImprovement => write!(f, "no improvement"),
        }
    }
}

/// Configuration for one search run.
///
/// # Examples
///
/// ```
/// use u_localsearch::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_fringe_size(50)
///     .with_iterations_limit(200)
///     .with_random_initial_states(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of iterations. 0 = no cap.
    pub iterations_limit: usize,

    /// Size limit of the fringe (beam width / population size).
    pub fringe_size: usize,

    /// Whether to seed the fringe with `fringe_size` random states
    /// instead of the problem's single initial state.
    pub random_initial_states: bool,

    /// Whether to stop when the best value fails to improve.
    pub stop_when_no_better: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iterations_limit: 0,
            fringe_size: 1,
            random_initial_states: false,
            stop_when_no_better: true,
        }
    }
}

impl SearchConfig {
    /// Sets the iteration cap (0 = no cap).
    pub fn with_iterations_limit(mut self, n: usize) -> Self {
        self.iterations_limit = n;
        self
    }

    /// Sets the fringe size limit.
    pub fn with_fringe_size(mut self, n: usize) -> Self {
        self.fringe_size = n;
        self
    }

    /// Seeds the fringe with random states instead of the initial state.
    pub fn with_random_initial_states(mut self, random: bool) -> Self {
        self.random_initial_states = random;
        self
    }

    /// Enables or disables the no-improvement stop.
    pub fn with_stop_when_no_better(mut self, stop: bool) -> Self {
        self.stop_when_no_better = stop;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.fringe_size == 0 {
            return Err("fringe_size must be at least 1".into());
        }
        if self.iterations_limit == 0 && !self.stop_when_no_better {
            return Err("either iterations_limit or stop_when_no_better must be set".into());
        }
        Ok(())
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    /// The best candidate at the end of the run.
    pub best: Node<S>,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Best value before the first iteration and after each one.
    pub value_history: Vec<f64>,
}

/// Executes the shared local search loop.
///
/// The runner owns everything the strategies have in common: seeding the
/// fringe, invoking the expander once per iteration, checking the stop
/// conditions, and extracting the final best candidate. Which algorithm
/// runs is decided entirely by the [`Expander`] passed in.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search loop.
    ///
    /// Every stochastic choice — random seeding, the strategies' draws —
    /// comes from `rng`; seed it for reproducible runs. The observer, if
    /// present, is invoked synchronously inside the loop.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`SearchConfig::validate`] first to get a descriptive error), or
    /// if the problem lacks a capability the strategy requires.
    pub fn run<P, E, R>(
        problem: &P,
        expander: &E,
        config: &SearchConfig,
        rng: &mut R,
        observer: Option<&mut (dyn SearchObserver<P::State> + '_)>,
    ) -> SearchResult<P::State>
    where
        P: SearchProblem,
        E: Expander<P>,
        R: Rng + ?Sized,
    {
        config.validate().expect("invalid SearchConfig");

        let mut noop = NoopObserver;
        let observer: &mut dyn SearchObserver<P::State> = match observer {
            Some(o) => o,
            None => &mut noop,
        };

        observer.started();

        let mut fringe = Fringe::new(config.fringe_size);
        if config.random_initial_states {
            for _ in 0..config.fringe_size {
                let state = problem.random_state(rng);
                fringe.push(Node::evaluated(problem, state, Origin::Random));
            }
        } else {
            fringe.push(Node::evaluated(
                problem,
                problem.initial_state(),
                Origin::Initial,
            ));
        }

        let mut iteration = 0;
        let mut value_history = vec![fringe.best().expect("fringe is empty").value()];

        let stop_reason = loop {
            let previous_best = fringe.best().expect("fringe is empty").value();

            expander.expand(problem, &mut fringe, iteration, rng, observer);

            let best = fringe.best().expect("fringe is empty").value();
            iteration += 1;
            value_history.push(best);

            if config.iterations_limit > 0 && iteration >= config.iterations_limit {
                break StopReason::IterationLimit;
            }
            if config.stop_when_no_better && best <= previous_best {
                break StopReason::NoImprovement;
            }
        };

        let best = fringe.best().expect("fringe is empty").clone();
        observer.finished(&fringe, &best, &format!("returned after {stop_reason}"));

        SearchResult {
            best,
            iterations: iteration,
            stop_reason,
            value_history,
        }
    }
}
