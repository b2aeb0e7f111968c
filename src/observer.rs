//! Progress observation for search runs.

use crate::fringe::Fringe;
use crate::node::Node;

/// Receives search progress events.
///
/// All methods default to no-ops, so an observer implements only what it
/// cares about. Events are emitted synchronously from inside the search
/// loop: the run stalls until the callback returns, so observers must not
/// block or do unbounded work. Observers are never required for
/// correctness — every algorithm behaves identically without one.
pub trait SearchObserver<S> {
    /// A search run is starting.
    fn started(&mut self) {}

    /// One or more nodes were expanded.
    ///
    /// `successors[i]` holds the candidates produced from `sources[i]`.
    fn expanded(&mut self, _sources: &[Node<S>], _successors: &[Vec<Node<S>>]) {}

    /// A stochastic strategy accepted `node` into the fringe.
    fn chosen_node(&mut self, _node: &Node<S>) {}

    /// A random-restart composition exhausted its runs.
    fn no_more_runs(&mut self, _best: &Node<S>, _message: &str) {}

    /// The run finished; `best` is the returned candidate.
    fn finished(&mut self, _fringe: &Fringe<S>, _best: &Node<S>, _message: &str) {}
}

/// Observer that ignores every event.
///
/// The runner substitutes this when no observer is supplied, so the
/// strategies never branch on observer presence.
pub struct NoopObserver;

impl<S> SearchObserver<S> for NoopObserver {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Origin;

    #[test]
    fn test_noop_observer_accepts_all_events() {
        let mut observer = NoopObserver;
        let node = Node::new(0usize, 1.0, Origin::Initial);
        let mut fringe = Fringe::new(1);
        fringe.push(node.clone());

        <NoopObserver as SearchObserver<usize>>::started(&mut observer);
        observer.expanded(std::slice::from_ref(&node), &[vec![node.clone()]]);
        observer.chosen_node(&node);
        observer.no_more_runs(&node, "returned after 1 runs");
        observer.finished(&fringe, &node, "returned after iteration limit");
    }

    #[test]
    fn test_default_methods_are_optional() {
        // An observer that only counts expansions compiles without
        // implementing the rest of the protocol.
        struct ExpansionCounter {
            expansions: usize,
        }

        impl SearchObserver<usize> for ExpansionCounter {
            fn expanded(&mut self, sources: &[Node<usize>], _successors: &[Vec<Node<usize>>]) {
                self.expansions += sources.len();
            }
        }

        let mut counter = ExpansionCounter { expansions: 0 };
        let node = Node::new(0usize, 1.0, Origin::Initial);
        counter.expanded(std::slice::from_ref(&node), &[vec![]]);
        assert_eq!(counter.expansions, 1);
    }
}
