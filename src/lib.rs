//! Solving the 8-puzzle with A* search
//!
//! This crate provides:
//! - Immutable puzzle states with move generation and parity checks
//! - The misplaced-tile heuristic
//! - An A* engine built on a decrease-key binary heap
//! - CSV loading and saving of states
//! - Console rendering and the command line front end

pub mod cli;
pub mod error;
pub mod heuristic;
pub mod loader;
pub mod render;
pub mod search;
pub mod state;

pub use error::{Error, Result};
pub use heuristic::misplaced_tiles;
pub use search::{solve, AStar, Outcome, Report, SearchStats, Solution, Step};
pub use state::{Action, State};
