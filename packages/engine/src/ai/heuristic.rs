//! Heuristic — a stronger, deterministic baseline AI.
//!
//! Goals:
//! - Stay 100% legal using the engine's legal-move helper.
//! - Be deterministic (no RNG), but materially stronger than random play.
//!
//! Play strategy:
//! - Pick a target band from the current trick counts (chase the high
//!   bracket or duck into the low one).
//! - Score every legal card with the shared evaluator and play the best.
//!
//! Ability choices:
//! - Exchange and discard both shed the card the evaluator rates worst
//!   for the current band.
//!
//! Determinism:
//! - No randomness used. Ties in evaluation keep the earliest card in
//!   sorted hand order.

use super::evaluator::{best_by_evaluation, determine_target_band, worst_by_evaluation};
use super::trait_def::{require_hand, require_legal_moves, AiError, AiPlayer};
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{other_player, GameState, PlayerId};
use crate::domain::tricks::current_trick_no;
use crate::domain::Card;

#[derive(Clone, Default)]
pub struct HeuristicPlayer;

impl HeuristicPlayer {
    pub const NAME: &'static str = "Heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn band_for(state: &GameState, seat: PlayerId) -> super::evaluator::TargetBand {
        let my = state.round.tricks_won[seat as usize];
        let opp = state.round.tricks_won[other_player(seat) as usize];
        let remaining = TRICKS_PER_ROUND + 1 - current_trick_no(state);
        determine_target_band(my, remaining, opp)
    }
}

impl AiPlayer for HeuristicPlayer {
    fn choose_play(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let legal = require_legal_moves(state, seat)?;
        let band = Self::band_for(state, seat);
        let tricks_won = state.round.tricks_won[seat as usize];
        best_by_evaluation(&legal, state, tricks_won, band)
            .ok_or_else(|| AiError::Internal("Evaluation produced no card".into()))
    }

    fn choose_exchange(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let hand = require_hand(state, seat)?;
        let band = Self::band_for(state, seat);
        let tricks_won = state.round.tricks_won[seat as usize];
        worst_by_evaluation(hand, state, tricks_won, band)
            .ok_or_else(|| AiError::Internal("Evaluation produced no card".into()))
    }

    fn choose_discard(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let hand = require_hand(state, seat)?;
        let band = Self::band_for(state, seat);
        let tricks_won = state.round.tricks_won[seat as usize];
        worst_by_evaluation(hand, state, tricks_won, band)
            .ok_or_else(|| AiError::Internal("Evaluation produced no card".into()))
    }
}
