//! Rules engine and opponent AI for Decree, a two-player trick-taking
//! card game played with a 33-card deck across three aspects.
//!
//! The crate is split the same way the game is:
//! - [`domain`] — pure game logic: cards, dealing, trick legality and
//!   resolution, abilities, scoring, and match flow. No I/O, no global
//!   state; every entry point takes the [`domain::state::GameState`] it
//!   operates on.
//! - [`ai`] — opponent decision strategies at three difficulty tiers,
//!   built on a pure card evaluator.
//! - [`errors`] — the domain error type shared by both.

pub mod ai;
pub mod domain;
pub mod errors;
