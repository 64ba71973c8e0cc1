//! A* search engine: node arena, frontier and the search loop

pub mod astar;
pub mod frontier;
pub mod heap;
pub mod node;

pub use astar::{solve, AStar, Outcome, Report, SearchStats, Solution, Step};
pub use frontier::{Frontier, Offer};
pub use heap::IndexedMinHeap;
pub use node::{Node, NodeId, SearchTree};
