//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use eight_puzzle::State;

/// Number of arrangements reachable from any state: half of 9!.
pub const REACHABLE_STATES: usize = 181_440;

pub fn state(rows: [[u8; 3]; 3]) -> State {
    State::new(rows).expect("valid test state")
}

/// Exact move distance from `goal` to every state that can reach it,
/// found by breadth-first search. Moves are reversible, so this is also the
/// distance from each state to `goal`.
pub fn distances_to(goal: &State) -> HashMap<State, usize> {
    let mut distances = HashMap::with_capacity(REACHABLE_STATES);
    let mut queue = VecDeque::new();

    distances.insert(*goal, 0);
    queue.push_back(*goal);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[&current] + 1;
        for (_, next) in current.successors() {
            if !distances.contains_key(&next) {
                distances.insert(next, next_distance);
                queue.push_back(next);
            }
        }
    }

    distances
}
