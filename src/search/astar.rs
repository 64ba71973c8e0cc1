//! A* search over puzzle states

use rustc_hash::FxHashSet;
use tracing::{debug, info, trace, warn};

use super::frontier::{Frontier, Offer};
use super::node::{Node, NodeId, SearchTree};
use crate::heuristic::misplaced_tiles;
use crate::state::{Action, State};

/// One entry of a solution: the action taken and the state it produced.
/// The first step carries no action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub action: Option<Action>,
    pub state: State,
}

/// A sequence of states from the initial state to the goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    fn from_path(path: Vec<(Option<Action>, State)>) -> Self {
        Self {
            steps: path
                .into_iter()
                .map(|(action, state)| Step { action, state })
                .collect(),
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of moves, which is one less than the number of steps
    pub fn moves(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn actions(&self) -> Vec<Action> {
        self.steps.iter().filter_map(|step| step.action).collect()
    }

    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.steps.iter().map(|step| &step.state)
    }

    pub fn initial(&self) -> &State {
        &self.steps[0].state
    }

    pub fn goal(&self) -> &State {
        &self.steps[self.steps.len() - 1].state
    }

    /// Whether the first step has no action and every later state follows
    /// from the previous one by its action.
    pub fn is_valid(&self) -> bool {
        let Some((first, rest)) = self.steps.split_first() else {
            return false;
        };
        if first.action.is_some() {
            return false;
        }

        let mut current = first.state;
        for step in rest {
            match step.action.and_then(|action| current.after(action)) {
                Some(next) if next == step.state => current = next,
                _ => return false,
            }
        }
        true
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Solution),
    /// The frontier ran dry: the goal cannot be reached.
    Unsolvable,
    /// The expansion budget ran out before the search finished.
    Exhausted,
}

impl Outcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            Outcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Counters collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded
    pub expanded: usize,
    /// Valid successors of expanded nodes that were not yet explored
    pub generated: usize,
    /// Successors added to the frontier for a new state
    pub inserted: usize,
    /// Successors that replaced a more expensive waiting node
    pub improved: usize,
    /// Largest frontier size observed
    pub peak_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// A* search towards a fixed goal using the misplaced-tile heuristic.
///
/// A successor's estimate is its parent's estimate plus one for the move
/// plus the heuristic value of the successor; the root starts at its own
/// heuristic value. Successors are generated in [`Action::ALL`] order and
/// explored states are never reopened.
#[derive(Debug, Clone)]
pub struct AStar {
    goal: State,
    max_expansions: Option<usize>,
}

impl AStar {
    pub fn new(goal: State) -> Self {
        Self {
            goal,
            max_expansions: None,
        }
    }

    /// Stops the search with [`Outcome::Exhausted`] once `limit` nodes have
    /// been expanded.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn run(&self, initial: &State) -> Report {
        let mut stats = SearchStats::default();
        let mut tree = SearchTree::new();
        let mut explored: FxHashSet<State> = FxHashSet::default();

        let root = Node::root(*initial, misplaced_tiles(initial, &self.goal));
        let mut frontier = Frontier::new(root);
        stats.peak_frontier = frontier.len();

        debug!(estimate = root.estimate(), "starting search");

        while let Some(node) = frontier.extract_minimum() {
            if *node.state() == self.goal {
                let solution = Solution::from_path(tree.path_to(&node));
                info!(
                    moves = solution.moves(),
                    expanded = stats.expanded,
                    generated = stats.generated,
                    "solution found"
                );
                return Report {
                    outcome: Outcome::Solved(solution),
                    stats,
                };
            }

            if self.max_expansions.is_some_and(|limit| stats.expanded >= limit) {
                warn!(expanded = stats.expanded, "expansion budget exhausted");
                return Report {
                    outcome: Outcome::Exhausted,
                    stats,
                };
            }

            explored.insert(*node.state());
            let id = tree.insert(node);
            stats.expanded += 1;

            trace!(
                estimate = node.estimate(),
                frontier = frontier.len(),
                "expanding node"
            );
            self.expand(&node, id, &explored, &mut frontier, &mut stats);
            stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        }

        info!(
            expanded = stats.expanded,
            explored = explored.len(),
            "frontier exhausted without reaching the goal"
        );
        Report {
            outcome: Outcome::Unsolvable,
            stats,
        }
    }

    fn expand(
        &self,
        node: &Node,
        id: NodeId,
        explored: &FxHashSet<State>,
        frontier: &mut Frontier,
        stats: &mut SearchStats,
    ) {
        for (action, successor) in node.state().successors() {
            if explored.contains(&successor) {
                continue;
            }
            stats.generated += 1;

            let estimate = node.estimate() + 1 + misplaced_tiles(&successor, &self.goal);
            match frontier.insert_or_improve(Node::child(successor, estimate, id, action)) {
                Offer::Inserted => stats.inserted += 1,
                Offer::Improved => stats.improved += 1,
                Offer::Ignored => {}
            }
        }
    }
}

/// Searches for a way from `initial` to `goal`, returning `None` when the
/// goal cannot be reached.
pub fn solve(initial: &State, goal: &State) -> Option<Solution> {
    AStar::new(*goal).run(initial).outcome.into_solution()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(rows: [[u8; 3]; 3]) -> State {
        State::new(rows).unwrap()
    }

    #[test]
    fn solved_input_yields_single_step() {
        let goal = State::solved();
        let solution = solve(&goal, &goal).unwrap();
        assert_eq!(
            solution.steps(),
            &[Step {
                action: None,
                state: goal
            }]
        );
        assert_eq!(solution.moves(), 0);
    }

    #[test]
    fn one_move_away() {
        let goal = State::solved();
        let initial = state([[1, 2, 3], [4, 5, 6], [7, 0, 8]]);

        let report = AStar::new(goal).run(&initial);
        let solution = report.outcome.solution().unwrap();
        assert_eq!(solution.actions(), vec![Action::Right]);
        assert_eq!(solution.goal(), &goal);
        assert_eq!(report.stats.expanded, 1);
    }

    #[test]
    fn budget_stops_the_search() {
        let goal = State::solved();
        let initial = state([[8, 6, 7], [2, 5, 4], [3, 0, 1]]);

        let report = AStar::new(goal).with_max_expansions(10).run(&initial);
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.stats.expanded, 10);
    }

    #[test]
    fn is_valid_rejects_broken_chains() {
        let goal = State::solved();
        let before = goal.after(Action::Left).unwrap();
        let solution = Solution::from_path(vec![(None, before), (Some(Action::Right), goal)]);
        assert!(solution.is_valid());

        let wrong_action = Solution::from_path(vec![(None, before), (Some(Action::Up), goal)]);
        assert!(!wrong_action.is_valid());

        let leading_action = Solution::from_path(vec![(Some(Action::Up), goal)]);
        assert!(!leading_action.is_valid());

        assert!(!Solution::from_path(Vec::new()).is_valid());
    }
}
