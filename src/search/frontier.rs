//! The open set of an A* search

use std::cmp::Ordering;

use super::heap::IndexedMinHeap;
use super::node::Node;
use crate::state::State;

/// What [`Frontier::insert_or_improve`] did with an offered node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// No node for that state was waiting; it is now.
    Inserted,
    /// The waiting node was replaced by the cheaper one.
    Improved,
    /// The waiting node was at least as cheap; nothing changed.
    Ignored,
}

#[derive(Debug)]
struct Entry {
    node: Node,
    sequence: u64,
}

impl Entry {
    fn key(&self) -> (u32, u64) {
        (self.node.estimate(), self.sequence)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes discovered but not yet expanded, at most one per state.
///
/// Nodes come out by lowest estimate; among equal estimates the one offered
/// first comes out first, which keeps searches reproducible.
#[derive(Debug)]
pub struct Frontier {
    nodes: IndexedMinHeap<State, Entry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new(initial: Node) -> Self {
        let mut frontier = Self {
            nodes: IndexedMinHeap::new(),
            next_sequence: 0,
        };
        frontier.insert_or_improve(initial);
        frontier
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Removes the node with the lowest estimate, or returns `None` once
    /// the frontier is exhausted.
    pub fn extract_minimum(&mut self) -> Option<Node> {
        self.nodes.pop_min().map(|(_, entry)| entry.node)
    }

    /// Adds `node` unless a node for the same state is already waiting with
    /// an estimate no greater than this one.
    pub fn insert_or_improve(&mut self, node: Node) -> Offer {
        let state = *node.state();
        let offer = match self.nodes.get(&state) {
            None => Offer::Inserted,
            Some(waiting) if node.estimate() < waiting.node.estimate() => Offer::Improved,
            Some(_) => return Offer::Ignored,
        };

        let entry = Entry {
            node,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;

        match offer {
            Offer::Inserted => self.nodes.push(state, entry),
            _ => self.nodes.decrease(&state, entry),
        }
        offer
    }

    pub fn contains(&self, state: &State) -> bool {
        self.nodes.contains(state)
    }

    /// Estimate of the node waiting for `state`, if any
    pub fn estimate_of(&self, state: &State) -> Option<u32> {
        self.nodes.get(state).map(|entry| entry.node.estimate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::node::SearchTree;
    use crate::state::Action;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn states() -> (State, State, State) {
        let a = State::solved();
        let b = a.after(Action::Left).unwrap();
        let c = a.after(Action::Up).unwrap();
        (a, b, c)
    }

    #[test]
    fn starts_with_the_initial_node() {
        let (a, b, _) = states();
        let mut frontier = Frontier::new(Node::root(a, 3));
        assert_eq!(frontier.len(), 1);
        assert!(frontier.contains(&a));
        assert!(!frontier.contains(&b));

        let node = frontier.extract_minimum().unwrap();
        assert_eq!(node.state(), &a);
        assert!(frontier.is_empty());
        assert!(frontier.extract_minimum().is_none());
    }

    #[test]
    fn keeps_only_the_cheapest_node_per_state() {
        let (a, b, _) = states();
        let mut frontier = Frontier::new(Node::root(a, 0));

        assert_eq!(frontier.insert_or_improve(Node::root(b, 9)), Offer::Inserted);
        assert_eq!(frontier.insert_or_improve(Node::root(b, 9)), Offer::Ignored);
        assert_eq!(frontier.insert_or_improve(Node::root(b, 12)), Offer::Ignored);
        assert_eq!(frontier.estimate_of(&b), Some(9));

        let mut tree = SearchTree::new();
        let parent = tree.insert(Node::root(a, 0));
        let improved = Node::child(b, 4, parent, Action::Left);
        assert_eq!(frontier.insert_or_improve(improved), Offer::Improved);
        assert_eq!(frontier.estimate_of(&b), Some(4));
        assert_eq!(frontier.len(), 2);

        frontier.extract_minimum();
        let node = frontier.extract_minimum().unwrap();
        assert_eq!(node.estimate(), 4);
        assert_eq!(node.action(), Some(Action::Left));
    }

    #[test]
    fn extracts_lowest_estimate_then_insertion_order() {
        let (a, b, c) = states();
        let mut frontier = Frontier::new(Node::root(a, 5));
        frontier.insert_or_improve(Node::root(b, 2));
        frontier.insert_or_improve(Node::root(c, 2));

        let order: Vec<State> = std::iter::from_fn(|| frontier.extract_minimum())
            .map(|node| *node.state())
            .collect();
        assert_eq!(order, vec![b, c, a]);
    }

    /// A handful of distinct states near the solved one
    fn pool() -> Vec<State> {
        let mut pool = vec![State::solved()];
        let mut next = 0;
        while pool.len() < 6 {
            for (_, successor) in pool[next].successors() {
                if pool.len() < 6 && !pool.contains(&successor) {
                    pool.push(successor);
                }
            }
            next += 1;
        }
        pool
    }

    proptest! {
        #[test]
        fn holds_cheapest_offer_per_state(
            offers in prop::collection::vec((0usize..6, 0u32..20), 1..120)
        ) {
            let pool = pool();
            // state -> (cheapest estimate, order in which it was stored)
            let mut best: HashMap<State, (u32, u64)> = HashMap::new();
            let mut stored = 0u64;

            let (&(first, estimate), rest) = offers.split_first().unwrap();
            let mut frontier = Frontier::new(Node::root(pool[first], estimate));
            best.insert(pool[first], (estimate, stored));
            stored += 1;

            for &(index, estimate) in rest {
                let state = pool[index];
                let expected = match best.get(&state) {
                    None => Offer::Inserted,
                    Some(&(waiting, _)) if estimate < waiting => Offer::Improved,
                    Some(_) => Offer::Ignored,
                };

                prop_assert_eq!(frontier.insert_or_improve(Node::root(state, estimate)), expected);
                if expected != Offer::Ignored {
                    best.insert(state, (estimate, stored));
                    stored += 1;
                }
            }

            prop_assert_eq!(frontier.len(), best.len());
            for state in &pool {
                prop_assert_eq!(frontier.estimate_of(state), best.get(state).map(|&(e, _)| e));
                prop_assert_eq!(frontier.contains(state), best.contains_key(state));
            }

            let mut expected: Vec<(State, (u32, u64))> = best.into_iter().collect();
            expected.sort_by_key(|&(_, key)| key);
            let expected: Vec<(State, u32)> = expected
                .into_iter()
                .map(|(state, (estimate, _))| (state, estimate))
                .collect();

            let drained: Vec<(State, u32)> = std::iter::from_fn(|| frontier.extract_minimum())
                .map(|node| (*node.state(), node.estimate()))
                .collect();
            prop_assert!(drained.windows(2).all(|pair| pair[0].1 <= pair[1].1));
            prop_assert_eq!(drained, expected);
            prop_assert!(frontier.is_empty());
        }
    }
}
