//! Expansion strategies: the per-iteration fringe transformations.
//!
//! Each local search algorithm is defined by one [`Expander`]: the driver
//! loop is shared, the strategy decides how the fringe changes per
//! iteration. New algorithms plug in without touching the driver.

use rand::Rng;

use crate::fringe::Fringe;
use crate::node::{Node, Origin};
use crate::observer::SearchObserver;
use crate::problem::SearchProblem;
use crate::sampler::WeightedSampler;

/// Transforms the fringe for one iteration of the search loop.
pub trait Expander<P: SearchProblem> {
    /// Mutates `fringe` in place for iteration `iteration`.
    fn expand<R: Rng + ?Sized>(
        &self,
        problem: &P,
        fringe: &mut Fringe<P::State>,
        iteration: usize,
        rng: &mut R,
        observer: &mut dyn SearchObserver<P::State>,
    );
}

/// Expands every node on the fringe (beam search).
///
/// All successors of all current nodes are inserted; the bounded fringe
/// keeps only the best `limit` of the combined population.
pub struct AllExpander;

impl<P: SearchProblem> Expander<P> for AllExpander {
    fn expand<R: Rng + ?Sized>(
        &self,
        problem: &P,
        fringe: &mut Fringe<P::State>,
        _iteration: usize,
        _rng: &mut R,
        observer: &mut dyn SearchObserver<P::State>,
    ) {
        let sources: Vec<Node<P::State>> = fringe.iter().cloned().collect();
        let neighborhoods: Vec<Vec<Node<P::State>>> =
            sources.iter().map(|n| n.expand(problem)).collect();

        observer.expanded(&sources, &neighborhoods);

        for neighbors in neighborhoods {
            fringe.extend(neighbors);
        }
    }
}

/// Expands only the current best node (hill climbing).
///
/// With a fringe limit of 1 this is classic greedy hill climbing: the
/// best successor replaces the current node whenever it is better.
pub struct FirstExpander;

impl<P: SearchProblem> Expander<P> for FirstExpander {
    fn expand<R: Rng + ?Sized>(
        &self,
        problem: &P,
        fringe: &mut Fringe<P::State>,
        _iteration: usize,
        _rng: &mut R,
        observer: &mut dyn SearchObserver<P::State>,
    ) {
        let current = fringe.best().expect("fringe is empty").clone();
        let neighbors = current.expand(problem);

        observer.expanded(
            std::slice::from_ref(&current),
            std::slice::from_ref(&neighbors),
        );

        fringe.extend(neighbors);
    }
}

/// Expands the current best and inserts one random strictly-better
/// successor (stochastic hill climbing).
///
/// If no successor beats the current node the fringe is left unchanged,
/// which drives the driver's no-improvement stop.
pub struct RandomBetterExpander;

impl<P: SearchProblem> Expander<P> for RandomBetterExpander {
    fn expand<R: Rng + ?Sized>(
        &self,
        problem: &P,
        fringe: &mut Fringe<P::State>,
        _iteration: usize,
        rng: &mut R,
        observer: &mut dyn SearchObserver<P::State>,
    ) {
        let current = fringe.best().expect("fringe is empty").clone();
        let neighbors = current.expand(problem);

        observer.expanded(
            std::slice::from_ref(&current),
            std::slice::from_ref(&neighbors),
        );

        let mut betters: Vec<Node<P::State>> = neighbors
            .into_iter()
            .filter(|n| n.value() > current.value())
            .collect();

        if !betters.is_empty() {
            let chosen = betters.swap_remove(rng.random_range(0..betters.len()));
            observer.chosen_node(&chosen);
            fringe.push(chosen);
        }
    }
}

/// Default annealing schedule: `20 · exp(−0.005 · iteration)`.
pub fn exp_schedule(iteration: usize) -> f64 {
    exp_schedule_with(20.0, 0.005)(iteration)
}

/// Exponential annealing schedule `k · exp(−lambda · iteration)`.
pub fn exp_schedule_with(k: f64, lambda: f64) -> impl Fn(usize) -> f64 {
    move |iteration| k * (-lambda * iteration as f64).exp()
}

/// Metropolis acceptance of a random successor (simulated annealing).
///
/// Picks one successor of the current best uniformly at random.
/// An improvement is accepted unconditionally; a worsening successor is
/// accepted with probability `exp(delta / T)` where `T` comes from the
/// schedule. A non-positive temperature rejects outright instead of
/// dividing by zero. On acceptance the current node is replaced, so a
/// size-1 fringe stays size 1.
pub struct AnnealingExpander<F> {
    schedule: F,
}

impl<F: Fn(usize) -> f64> AnnealingExpander<F> {
    /// Creates an annealing expander driven by `schedule`.
    pub fn new(schedule: F) -> Self {
        Self { schedule }
    }
}

impl<P, F> Expander<P> for AnnealingExpander<F>
where
    P: SearchProblem,
    F: Fn(usize) -> f64,
{
    fn expand<R: Rng + ?Sized>(
        &self,
        problem: &P,
        fringe: &mut Fringe<P::State>,
        iteration: usize,
        rng: &mut R,
        observer: &mut dyn SearchObserver<P::State>,
    ) {
        let current = fringe.best().expect("fringe is empty").clone();
        let mut neighbors = current.expand(problem);

        observer.expanded(
            std::slice::from_ref(&current),
            std::slice::from_ref(&neighbors),
        );

        if neighbors.is_empty() {
            return;
        }

        let successor = neighbors.swap_remove(rng.random_range(0..neighbors.len()));
        let delta = successor.value() - current.value();

        let accept = if delta > 0.0 {
            true
        } else {
            let temperature = (self.schedule)(iteration);
            temperature > 0.0 && rng.random_range(0.0..1.0) < (delta / temperature).exp()
        };

        if accept {
            fringe.pop_best();
            observer.chosen_node(&successor);
            fringe.push(successor);
        }
    }
}

/// One generation of evolutionary search.
///
/// Samples parents proportionally to value, carries the single best node
/// unchanged into the next generation, and replaces the whole population.
/// Each child is tagged with the operator(s) that produced it.
pub struct GeneticExpander {
    crossover_rate: f64,
    mutation_chance: f64,
}

impl GeneticExpander {
    /// Creates a genetic expander. Rates are clamped to `[0, 1]`.
    pub fn new(crossover_rate: f64, mutation_chance: f64) -> Self {
        Self {
            crossover_rate: crossover_rate.clamp(0.0, 1.0),
            mutation_chance: mutation_chance.clamp(0.0, 1.0),
        }
    }
}

impl<P: SearchProblem> Expander<P> for GeneticExpander {
    fn expand<R: Rng + ?Sized>(
        &self,
        problem: &P,
        fringe: &mut Fringe<P::State>,
        _iteration: usize,
        rng: &mut R,
        observer: &mut dyn SearchObserver<P::State>,
    ) {
        assert!(!fringe.is_empty(), "fringe is empty");

        let population = fringe.as_slice();
        let values: Vec<f64> = population.iter().map(Node::value).collect();
        let sampler = WeightedSampler::new(&values, population);

        let mut next_generation = Vec::with_capacity(population.len());
        next_generation.push(sampler.best().clone());

        let mut sources = Vec::new();
        let mut produced = Vec::new();

        for _ in 0..population.len() - 1 {
            let mut parents = Vec::with_capacity(2);
            let (state, crossed) = if rng.random_range(0.0..1.0) < self.crossover_rate {
                let first = sampler.sample(rng);
                let second = sampler.sample(rng);
                parents.push(first.clone());
                parents.push(second.clone());
                (problem.crossover(first.state(), second.state(), rng), true)
            } else {
                let selected = sampler.sample(rng);
                parents.push(selected.clone());
                (selected.state().clone(), false)
            };

            let (state, origin) = if rng.random_range(0.0..1.0) < self.mutation_chance {
                let mutated = problem.mutate(&state, rng);
                let origin = if crossed {
                    Origin::CrossoverMutation
                } else {
                    Origin::Mutation
                };
                (mutated, origin)
            } else if crossed {
                (state, Origin::Crossover)
            } else {
                (state, Origin::Selection)
            };

            let child = Node::evaluated(problem, state, origin);
            for parent in parents {
                sources.push(parent);
                produced.push(vec![child.clone()]);
            }
            next_generation.push(child);
        }

        observer.expanded(&sources, &produced);

        fringe.clear();
        for node in next_generation {
            fringe.push(node);
        }
    }
}
