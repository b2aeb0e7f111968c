//! Algorithm entry points.
//!
//! Each function is a thin parameterization of [`SearchRunner`] with one
//! expansion strategy. All of them return the best candidate found, take
//! the caller's random source (seed it for reproducible runs), and accept
//! an optional observer.
//!
//! When `iterations_limit` is 0 the run is uncapped and stops on the
//! first iteration that fails to improve the best value; with a cap set,
//! the run uses the whole budget. Plain hill climbing always stops on
//! stagnation.

use rand::Rng;

use crate::observer::SearchObserver;
use crate::problem::SearchProblem;
use crate::runner::{SearchConfig, SearchResult, SearchRunner};
use crate::strategy::{
    AllExpander, AnnealingExpander, FirstExpander, GeneticExpander, RandomBetterExpander,
};

/// Beam search: expands every node of a `beam_size`-wide fringe seeded
/// with random states.
///
/// Requires [`SearchProblem::random_state`], [`SearchProblem::successors`]
/// and [`SearchProblem::value`].
pub fn beam<P, R>(
    problem: &P,
    beam_size: usize,
    iterations_limit: usize,
    rng: &mut R,
    observer: Option<&mut dyn SearchObserver<P::State>>,
) -> SearchResult<P::State>
where
    P: SearchProblem,
    R: Rng + ?Sized,
{
    let config = SearchConfig::default()
        .with_fringe_size(beam_size)
        .with_iterations_limit(iterations_limit)
        .with_random_initial_states(true)
        .with_stop_when_no_better(iterations_limit == 0);

    SearchRunner::run(problem, &AllExpander, &config, rng, observer)
}

/// Best-first variant of beam search: only the best node of the beam is
/// expanded each iteration.
///
/// Requires [`SearchProblem::random_state`], [`SearchProblem::successors`]
/// and [`SearchProblem::value`].
pub fn beam_best_first<P, R>(
    problem: &P,
    beam_size: usize,
    iterations_limit: usize,
    rng: &mut R,
    observer: Option<&mut dyn SearchObserver<P::State>>,
) -> SearchResult<P::State>
where
    P: SearchProblem,
    R: Rng + ?Sized,
{
    let config = SearchConfig::default()
        .with_fringe_size(beam_size)
        .with_iterations_limit(iterations_limit)
        .with_random_initial_states(true)
        .with_stop_when_no_better(iterations_limit == 0);

    SearchRunner::run(problem, &FirstExpander, &config, rng, observer)
}

/// Greedy hill climbing from the problem's initial state.
///
/// Stops as soon as no successor improves on the current state (or at the
/// iteration cap, whichever comes first).
///
/// Requires [`SearchProblem::initial_state`],
/// [`SearchProblem::successors`] and [`SearchProblem::value`].
pub fn hill_climbing<P, R>(
    problem: &P,
    iterations_limit: usize,
    rng: &mut R,
    observer: Option<&mut dyn SearchObserver<P::State>>,
) -> SearchResult<P::State>
where
    P: SearchProblem,
    R: Rng + ?Sized,
{
    let config = SearchConfig::default().with_iterations_limit(iterations_limit);

    SearchRunner::run(problem, &FirstExpander, &config, rng, observer)
}

/// Stochastic hill climbing: moves to a uniformly chosen strictly-better
/// successor each iteration.
///
/// Requires [`SearchProblem::initial_state`],
/// [`SearchProblem::successors`] and [`SearchProblem::value`].
pub fn hill_climbing_stochastic<P, R>(
    problem: &P,
    iterations_limit: usize,
    rng: &mut R,
    observer: Option<&mut dyn SearchObserver<P::State>>,
) -> SearchResult<P::State>
where
    P: SearchProblem,
    R: Rng + ?Sized,
{
    let config = SearchConfig::default()
        .with_iterations_limit(iterations_limit)
        .with_stop_when_no_better(iterations_limit == 0);

    SearchRunner::run(problem, &RandomBetterExpander, &config, rng, observer)
}

/// Hill climbing restarted from `restarts_limit` independent random
/// states, keeping the best result across runs.
///
/// A later run replaces the retained best only on strict improvement, so
/// among equal-quality optima the earliest one found is returned.
///
/// Requires [`SearchProblem::random_state`],
/// [`SearchProblem::successors`] and [`SearchProblem::value`].
///
/// # Panics
/// Panics if `restarts_limit` is zero.
pub fn hill_climbing_random_restarts<P, R>(
    problem: &P,
    restarts_limit: usize,
    iterations_limit: usize,
    rng: &mut R,
    observer: Option<&mut (dyn SearchObserver<P::State> + '_)>,
) -> SearchResult<P::State>
where
    P: SearchProblem,
    R: Rng + ?Sized,
{
    assert!(restarts_limit > 0, "restarts_limit must be positive");

    let config = SearchConfig::default()
        .with_iterations_limit(iterations_limit)
        .with_random_initial_states(true);

    let mut observer = observer;
    let mut best: Option<SearchResult<P::State>> = None;

    for _ in 0..restarts_limit {
        let run = SearchRunner::run(
            problem,
            &FirstExpander,
            &config,
            rng,
            observer.as_deref_mut(),
        );

        let improved = best
            .as_ref()
            .is_none_or(|held| run.best.value() > held.best.value());
        if improved {
            best = Some(run);
        }
    }

    let best = best.expect("at least one restart ran");
    if let Some(o) = observer.as_mut() {
        o.no_more_runs(&best.best, &format!("returned after {restarts_limit} runs"));
    }

    best
}

/// Simulated annealing with the given temperature schedule.
///
/// The schedule maps the iteration index to a positive temperature; see
/// [`exp_schedule`](crate::strategy::exp_schedule) for the default
/// exponential decay.
///
/// Requires [`SearchProblem::initial_state`],
/// [`SearchProblem::successors`] and [`SearchProblem::value`].
pub fn simulated_annealing<P, R, F>(
    problem: &P,
    schedule: F,
    iterations_limit: usize,
    rng: &mut R,
    observer: Option<&mut dyn SearchObserver<P::State>>,
) -> SearchResult<P::State>
where
    P: SearchProblem,
    R: Rng + ?Sized,
    F: Fn(usize) -> f64,
{
    let config = SearchConfig::default()
        .with_iterations_limit(iterations_limit)
        .with_stop_when_no_better(iterations_limit == 0);

    SearchRunner::run(
        problem,
        &AnnealingExpander::new(schedule),
        &config,
        rng,
        observer,
    )
}

/// Genetic search over a population of `population_size` random states.
///
/// Each generation keeps the best individual and fills the rest by
/// value-proportionate parent sampling, crossover with probability
/// `crossover_rate`, and mutation with probability `mutation_chance`
/// (both clamped to `[0, 1]`).
///
/// Requires [`SearchProblem::random_state`], [`SearchProblem::value`],
/// and — depending on the rates — [`SearchProblem::crossover`] and
/// [`SearchProblem::mutate`].
pub fn genetic<P, R>(
    problem: &P,
    population_size: usize,
    crossover_rate: f64,
    mutation_chance: f64,
    iterations_limit: usize,
    rng: &mut R,
    observer: Option<&mut dyn SearchObserver<P::State>>,
) -> SearchResult<P::State>
where
    P: SearchProblem,
    R: Rng + ?Sized,
{
    let config = SearchConfig::default()
        .with_fringe_size(population_size)
        .with_iterations_limit(iterations_limit)
        .with_random_initial_states(true)
        .with_stop_when_no_better(iterations_limit == 0);

    SearchRunner::run(
        problem,
        &GeneticExpander::new(crossover_rate, mutation_chance),
        &config,
        rng,
        observer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::runner::StopReason;
    use crate::strategy::exp_schedule;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Integers 0..=100 with a single peak at 42.
    struct Quadratic {
        start: i64,
    }

    impl SearchProblem for Quadratic {
        type State = i64;

        fn initial_state(&self) -> i64 {
            self.start
        }

        fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
            rng.random_range(0..=100)
        }

        fn successors(&self, &x: &i64) -> Vec<i64> {
            [x - 1, x + 1]
                .into_iter()
                .filter(|&s| (0..=100).contains(&s))
                .collect()
        }

        fn value(&self, &x: &i64) -> f64 {
            -((x - 42) * (x - 42)) as f64
        }
    }

    /// Two basins: a local peak at 20 (value 0) and the global peak at
    /// 80 (value 10). Starts below 50 get stuck at 20.
    struct TwoHumps;

    impl SearchProblem for TwoHumps {
        type State = i64;

        fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
            rng.random_range(0..=100)
        }

        fn successors(&self, &x: &i64) -> Vec<i64> {
            [x - 1, x + 1]
                .into_iter()
                .filter(|&s| (0..=100).contains(&s))
                .collect()
        }

        fn value(&self, &x: &i64) -> f64 {
            if x <= 49 {
                -((x - 20) * (x - 20)) as f64
            } else {
                -((x - 80) * (x - 80)) as f64 + 10.0
            }
        }
    }

    /// Maximize the number of set bits.
    struct OneMax {
        n: usize,
    }

    impl SearchProblem for OneMax {
        type State = Vec<bool>;

        fn random_state<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<bool> {
            (0..self.n).map(|_| rng.random_bool(0.5)).collect()
        }

        fn value(&self, bits: &Vec<bool>) -> f64 {
            bits.iter().filter(|&&b| b).count() as f64
        }

        fn crossover<R: Rng + ?Sized>(
            &self,
            a: &Vec<bool>,
            b: &Vec<bool>,
            rng: &mut R,
        ) -> Vec<bool> {
            let point = rng.random_range(0..self.n);
            a[..point]
                .iter()
                .chain(b[point..].iter())
                .copied()
                .collect()
        }

        fn mutate<R: Rng + ?Sized>(&self, bits: &Vec<bool>, rng: &mut R) -> Vec<bool> {
            let mut out = bits.clone();
            let index = rng.random_range(0..self.n);
            out[index] = !out[index];
            out
        }
    }

    #[test]
    fn test_hill_climbing_converges_from_any_start() {
        for start in [0, 13, 41, 42, 77, 100] {
            let mut rng = StdRng::seed_from_u64(42);
            let result = hill_climbing(&Quadratic { start }, 0, &mut rng, None);

            assert_eq!(*result.best.state(), 42, "failed from start {start}");
            assert!((result.best.value() - 0.0).abs() < 1e-12);
            assert_eq!(result.stop_reason, StopReason::NoImprovement);
        }
    }

    #[test]
    fn test_hill_climbing_respects_iteration_cap() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = hill_climbing(&Quadratic { start: 0 }, 3, &mut rng, None);

        assert_eq!(result.iterations, 3);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_beam_finds_peak() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = beam(&Quadratic { start: 0 }, 10, 0, &mut rng, None);

        assert_eq!(*result.best.state(), 42);
        assert_eq!(result.stop_reason, StopReason::NoImprovement);
    }

    #[test]
    fn test_beam_best_first_finds_peak() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = beam_best_first(&Quadratic { start: 0 }, 10, 0, &mut rng, None);

        assert_eq!(*result.best.state(), 42);
    }

    #[test]
    fn test_stochastic_hill_climbing_finds_peak() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = hill_climbing_stochastic(&Quadratic { start: 7 }, 0, &mut rng, None);

        assert_eq!(*result.best.state(), 42);
        assert_eq!(result.stop_reason, StopReason::NoImprovement);
    }

    #[test]
    fn test_stochastic_emits_chosen_node() {
        #[derive(Default)]
        struct Chosen {
            count: usize,
        }

        impl SearchObserver<i64> for Chosen {
            fn chosen_node(&mut self, _node: &Node<i64>) {
                self.count += 1;
            }
        }

        let mut rng = StdRng::seed_from_u64(42);
        let mut chosen = Chosen::default();
        let result =
            hill_climbing_stochastic(&Quadratic { start: 40 }, 0, &mut rng, Some(&mut chosen));

        // One acceptance per improving step: 40 -> 41 -> 42.
        assert_eq!(chosen.count, 2);
        assert_eq!(*result.best.state(), 42);
    }

    #[test]
    fn test_simulated_annealing_settles_on_peak() {
        let mut rng = StdRng::seed_from_u64(42);
        let result =
            simulated_annealing(&Quadratic { start: 0 }, exp_schedule, 3000, &mut rng, None);

        assert_eq!(*result.best.state(), 42);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_simulated_annealing_frozen_schedule_is_greedy() {
        // A frozen schedule never accepts worsening moves, so the run
        // behaves like (stochastic) hill climbing and must not fault.
        let mut rng = StdRng::seed_from_u64(42);
        let result = simulated_annealing(
            &Quadratic { start: 40 },
            |_| 1e-9,
            500,
            &mut rng,
            None,
        );

        assert_eq!(*result.best.state(), 42);
    }

    #[test]
    fn test_genetic_improves_population() {
        let problem = OneMax { n: 10 };
        let mut rng = StdRng::seed_from_u64(42);
        let result = genetic(&problem, 20, 0.7, 0.3, 50, &mut rng, None);

        assert!(
            result.best.value() >= 8.0,
            "expected near-optimal bit count, got {}",
            result.best.value()
        );
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_genetic_history_never_decreases() {
        // Elitism makes the best value monotone across generations.
        let problem = OneMax { n: 12 };
        let mut rng = StdRng::seed_from_u64(42);
        let result = genetic(&problem, 15, 0.6, 0.1, 40, &mut rng, None);

        for window in result.value_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best value fell from {} to {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_random_restarts_match_manual_runs() {
        // With the same seed, restarting is exactly best-of-n over the
        // same sequence of single runs.
        let mut restart_rng = StdRng::seed_from_u64(123);
        let restarts = hill_climbing_random_restarts(&TwoHumps, 5, 0, &mut restart_rng, None);

        let config = SearchConfig::default().with_random_initial_states(true);
        let mut manual_rng = StdRng::seed_from_u64(123);
        let mut manual_best = f64::NEG_INFINITY;
        for _ in 0..5 {
            let run = SearchRunner::run(
                &TwoHumps,
                &crate::strategy::FirstExpander,
                &config,
                &mut manual_rng,
                None,
            );
            manual_best = manual_best.max(run.best.value());
        }

        assert!((restarts.best.value() - manual_best).abs() < 1e-12);
    }

    #[test]
    fn test_random_restarts_land_on_a_peak() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = hill_climbing_random_restarts(&TwoHumps, 10, 0, &mut rng, None);

        assert!(
            [20, 80].contains(result.best.state()),
            "expected a basin peak, got {}",
            result.best.state()
        );
        assert!(result.best.value() >= 0.0);
    }

    #[test]
    fn test_random_restarts_emit_no_more_runs() {
        #[derive(Default)]
        struct Last {
            message: String,
            best_value: f64,
        }

        impl SearchObserver<i64> for Last {
            fn no_more_runs(&mut self, best: &Node<i64>, message: &str) {
                self.message = message.into();
                self.best_value = best.value();
            }
        }

        let mut rng = StdRng::seed_from_u64(42);
        let mut last = Last::default();
        let result = hill_climbing_random_restarts(&TwoHumps, 3, 0, &mut rng, Some(&mut last));

        assert_eq!(last.message, "returned after 3 runs");
        assert!((last.best_value - result.best.value()).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "restarts_limit must be positive")]
    fn test_zero_restarts_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        hill_climbing_random_restarts(&TwoHumps, 0, 0, &mut rng, None);
    }
}
