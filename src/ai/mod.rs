//! Move selection: the [`Strategy`] trait, the alpha-beta minimax engine and
//! its evaluator, a random baseline, and console input for human players.

mod heuristic;
mod human;
pub mod minimax;
mod random;
mod strategy;

pub use heuristic::{Heuristic, ThreatHeuristic, THREAT_SCORE};
pub use human::{HumanStrategy, LineSource};
pub use minimax::{Minimax, MinimaxStrategy, SearchResult, DEFAULT_DEPTH, MAX_DEPTH};
pub use random::RandomStrategy;
pub use strategy::Strategy;
