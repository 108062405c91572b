//! AI player module - handles automated game decisions.
//!
//! This module provides:
//! - AI trait for different AI implementations
//! - RandomPlayer: makes random legal moves (seedable for tests)
//! - HeuristicPlayer: deterministic evaluation-driven play
//! - Tactician: band-aware play that targets scoring brackets
//! - A static registry mapping stable names to factories

pub mod evaluator;
mod heuristic;
mod random;
pub mod registry;
mod tactician;
mod trait_def;

use std::str::FromStr;

pub use evaluator::{determine_target_band, determine_target_band_adaptive, TargetBand};
pub use heuristic::HeuristicPlayer;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use tactician::Tactician;
pub use trait_def::{AiError, AiPlayer};

/// Difficulty tiers exposed to callers that do not care about concrete
/// AI names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Uniform random legal play
    Easy,
    /// Evaluation-driven deterministic play
    Medium,
    /// Band-aware tactical play
    Hard,
}

impl Difficulty {
    /// Construct the AI implementation for this tier.
    ///
    /// `seed` only affects the Easy tier; the other tiers are fully
    /// deterministic.
    pub fn create(self, seed: Option<u64>) -> Box<dyn AiPlayer + Send + Sync> {
        match self {
            Difficulty::Easy => Box::new(RandomPlayer::new(seed)),
            Difficulty::Medium => Box::new(HeuristicPlayer::new()),
            Difficulty::Hard => Box::new(Tactician::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {other}")),
        }
    }
}
