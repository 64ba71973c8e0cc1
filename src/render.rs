//! Console output of states and solutions

use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::search::{Outcome, Solution};
use crate::state::{symbol, State, TILES_DELIMITER};

/// Writes puzzle output, optionally styled for a terminal.
///
/// With colour enabled, headings are bold and the tile moved by each step
/// is highlighted. Without it the output is plain text, each state printed
/// exactly as its `Display` form.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn heading<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.color {
            writeln!(out, "{}", text.bold())
        } else {
            writeln!(out, "{}", text)
        }
    }

    /// Writes `state`, highlighting the tile at `highlight` when colour is on.
    pub fn write_state<W: Write>(
        &self,
        out: &mut W,
        state: &State,
        highlight: Option<(usize, usize)>,
    ) -> io::Result<()> {
        if !self.color {
            return writeln!(out, "{}", state);
        }

        for (i, row) in state.tiles().iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if j > 0 {
                    write!(out, "{}", TILES_DELIMITER.dark_grey())?;
                }
                let cell = symbol(value);
                if highlight == Some((i, j)) {
                    write!(out, "{}", cell.bold().green())?;
                } else {
                    write!(out, "{}", cell)?;
                }
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn write_puzzle<W: Write>(&self, out: &mut W, initial: &State, goal: &State) -> io::Result<()> {
        self.heading(out, "Initial state:")?;
        self.write_state(out, initial, None)?;
        self.heading(out, "Goal state:")?;
        self.write_state(out, goal, None)
    }

    pub fn write_solution<W: Write>(&self, out: &mut W, solution: &Solution) -> io::Result<()> {
        self.heading(out, "Solution:")?;
        self.heading(out, "Initial state:")?;
        self.write_state(out, solution.initial(), None)?;

        for (previous, step) in solution.states().zip(&solution.steps()[1..]) {
            let Some(action) = step.action else {
                continue;
            };

            writeln!(out)?;
            self.heading(out, &format!("Action: move {}", action))?;
            self.heading(out, "New state:")?;
            self.write_state(out, &step.state, Some(previous.blank_position()))?;
        }

        writeln!(out)?;
        writeln!(out, "Moves: {}", solution.moves())
    }

    pub fn write_outcome<W: Write>(&self, out: &mut W, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Solved(solution) => self.write_solution(out, solution),
            Outcome::Unsolvable => writeln!(out, "No solution"),
            Outcome::Exhausted => writeln!(out, "No solution found within the expansion budget"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::solve;

    fn render(f: impl FnOnce(&Renderer, &mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&Renderer::plain(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_puzzle_lists_both_states() {
        let goal = State::solved();
        let initial = goal.after(crate::state::Action::Left).unwrap();
        let text = render(|r, out| r.write_puzzle(out, &initial, &goal));
        assert_eq!(
            text,
            "Initial state:\n1|2|3\n4|5|6\n7| |8\nGoal state:\n1|2|3\n4|5|6\n7|8| \n"
        );
    }

    #[test]
    fn plain_solution_names_each_move() {
        let goal = State::solved();
        let initial = State::new([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap();
        let solution = solve(&initial, &goal).unwrap();

        let text = render(|r, out| r.write_solution(out, &solution));
        assert!(text.starts_with("Solution:\nInitial state:\n1|2|3\n4|5|6\n7| |8\n"));
        assert!(text.contains("\nAction: move right\nNew state:\n1|2|3\n4|5|6\n7|8| \n"));
        assert!(text.ends_with("Moves: 1\n"));
    }

    #[test]
    fn each_step_is_printed_in_order() {
        let goal = State::solved();
        let initial = State::new([[1, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap();
        let solution = solve(&initial, &goal).unwrap();

        let text = render(|r, out| r.write_solution(out, &solution));
        let printed: Vec<&str> = text
            .lines()
            .filter_map(|line| line.strip_prefix("Action: move "))
            .collect();
        let expected: Vec<String> = solution.actions().iter().map(ToString::to_string).collect();
        assert_eq!(printed, expected);
        assert_eq!(printed, vec!["right", "down"]);
    }

    #[test]
    fn unsolvable_outcome_is_reported() {
        let text = render(|r, out| r.write_outcome(out, &Outcome::Unsolvable));
        assert_eq!(text, "No solution\n");
    }

    #[test]
    fn coloured_state_keeps_symbols() {
        let mut out = Vec::new();
        Renderer::new(true)
            .write_state(&mut out, &State::solved(), Some((0, 0)))
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        for digit in '1'..='8' {
            assert!(text.contains(digit));
        }
    }
}
