//! # Connect Four
//!
//! A gravity board game engine with pluggable move strategies. The strongest
//! built-in player is a depth-limited minimax search with alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player tokens, game state
//! - [`ai`] — Strategy trait, minimax engine and evaluator, random and human players
//! - [`driver`] — Turn loop pitting two strategies against each other
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
