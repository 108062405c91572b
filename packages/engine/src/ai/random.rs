//! Random AI player - makes random legal moves.
//!
//! This module provides [`RandomPlayer`], the reference implementation of the
//! [`AiPlayer`](super::AiPlayer) trait. It chooses uniformly at random from
//! the legal options in every phase, using a `Mutex<StdRng>` for interior
//! mutability and an optional seed for deterministic behavior.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{require_hand, require_legal_moves, AiError, AiPlayer};
use crate::domain::state::{GameState, PlayerId};
use crate::domain::Card;

/// AI that makes random legal moves.
///
/// Baseline opponent and the template for custom AIs: thread-safe interior
/// mutability, optional seeding, no panics, legal-move helpers only.
pub struct RandomPlayer {
    /// Thread-safe random number generator.
    ///
    /// Wrapped in `Mutex` since `AiPlayer` trait methods take `&self` but
    /// the RNG needs mutable access.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn name() -> &'static str {
        Self::NAME
    }

    pub const fn version() -> &'static str {
        Self::VERSION
    }

    /// Create a new `RandomPlayer`.
    ///
    /// `Some(seed)` gives reproducible behavior for testing; `None` seeds
    /// from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn pick(&self, options: &[Card]) -> Result<Card, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        options
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_play(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        // Legal plays handle the follow-lead rule automatically; never
        // choose from the raw hand.
        let legal = require_legal_moves(state, seat)?;
        self.pick(&legal)
    }

    fn choose_exchange(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let hand = require_hand(state, seat)?;
        self.pick(hand)
    }

    fn choose_discard(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let hand = require_hand(state, seat)?;
        self.pick(hand)
    }
}
