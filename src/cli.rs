//! Command line interface and run orchestration

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};

use crate::render::Renderer;
use crate::search::{AStar, Report};
use crate::state::State;

/// Solve the 8-puzzle with A* and the misplaced-tile heuristic.
///
/// Without arguments a random initial state is solved towards the ordered
/// goal. Otherwise both states are read from CSV files of three rows of
/// three cells, using a space for the blank.
#[derive(Parser, Debug)]
#[command(name = "eight-puzzle")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file holding the initial state
    #[arg(requires = "goal")]
    pub initial: Option<PathBuf>,

    /// CSV file holding the goal state
    pub goal: Option<PathBuf>,

    /// Seed for the random initial state
    #[arg(long, conflicts_with = "initial")]
    pub seed: Option<u64>,

    /// Only draw random initial states that can reach the goal
    #[arg(long, conflicts_with = "initial")]
    pub reachable: bool,

    /// Give up after expanding this many nodes
    #[arg(long, value_name = "N")]
    pub max_expansions: Option<usize>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Where the initial and goal states come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleSource {
    Files { initial: PathBuf, goal: PathBuf },
    Random { seed: Option<u64>, reachable_only: bool },
}

/// Settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source: PuzzleSource,
    pub max_expansions: Option<usize>,
    pub color: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: PuzzleSource::Random {
                seed: None,
                reachable_only: false,
            },
            max_expansions: None,
            color: false,
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        let source = match (cli.initial, cli.goal) {
            (Some(initial), Some(goal)) => PuzzleSource::Files { initial, goal },
            _ => PuzzleSource::Random {
                seed: cli.seed,
                reachable_only: cli.reachable,
            },
        };

        Self {
            source,
            max_expansions: cli.max_expansions,
            color: !cli.no_color && io::stdout().is_tty(),
        }
    }
}

impl RunConfig {
    /// Resolves the initial and goal states.
    pub fn load_states(&self) -> Result<(State, State)> {
        match &self.source {
            PuzzleSource::Files { initial, goal } => {
                let initial_state = State::from_csv(initial)
                    .with_context(|| format!("failed to load initial state from {}", initial.display()))?;
                let goal_state = State::from_csv(goal)
                    .with_context(|| format!("failed to load goal state from {}", goal.display()))?;
                Ok((initial_state, goal_state))
            }
            PuzzleSource::Random {
                seed,
                reachable_only,
            } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                let goal = State::solved();
                let initial = if *reachable_only {
                    State::random_reachable(&mut rng, &goal)
                } else {
                    State::random(&mut rng)
                };
                Ok((initial, goal))
            }
        }
    }

    fn search(&self, goal: State) -> AStar {
        let search = AStar::new(goal);
        match self.max_expansions {
            Some(limit) => search.with_max_expansions(limit),
            None => search,
        }
    }
}

/// Loads the puzzle, prints it, solves it and prints the outcome to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<Report> {
    let (initial, goal) = config.load_states()?;
    let renderer = Renderer::new(config.color);

    renderer
        .write_puzzle(out, &initial, &goal)
        .context("failed to write puzzle")?;

    if !initial.same_parity_as(&goal) {
        warn!("initial and goal states have different parity; the goal is unreachable");
    }

    let report = config.search(goal).run(&initial);
    info!(
        expanded = report.stats.expanded,
        generated = report.stats.generated,
        improved = report.stats.improved,
        peak_frontier = report.stats.peak_frontier,
        "search finished"
    );

    renderer
        .write_outcome(out, &report.outcome)
        .context("failed to write outcome")?;
    out.flush().context("failed to flush output")?;

    Ok(report)
}
