//! AI player trait definition.

use thiserror::Error;
use tracing::error;

use crate::domain::state::{GameState, PlayerId};
use crate::domain::tricks::legal_moves;
use crate::domain::Card;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI encountered an internal error
    #[error("AI internal error: {0}")]
    Internal(String),
    /// AI was asked for a move it cannot produce
    #[error("AI invalid move: {0}")]
    InvalidMove(String),
}

/// Trait for AI players.
///
/// Implementations receive the full game state and their seat and must
/// return a card they legally hold. They are responsible for querying
/// [`legal_moves`] for trick plays; exchange and discard choices may
/// name any hand card.
pub trait AiPlayer: Send + Sync {
    /// Choose a card to play into the current trick.
    fn choose_play(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError>;

    /// Choose the hand card to exchange with the decree (Envoy).
    fn choose_exchange(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError>;

    /// Choose the hand card to return to the stock (Forager).
    fn choose_discard(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError>;
}

/// Legal plays for the seat, treating an empty result for a non-empty
/// hand as the invariant failure it is: a hand always contains at least
/// one legal card, so an empty filter means the engine state is broken.
/// Logged as a bug and surfaced as an error, never played through.
pub(crate) fn require_legal_moves(
    state: &GameState,
    seat: PlayerId,
) -> Result<Vec<Card>, AiError> {
    let legal = legal_moves(state, seat);
    if legal.is_empty() {
        if !state.hands[seat as usize].is_empty() {
            error!(seat, "legal-card filter returned empty for a non-empty hand");
        }
        return Err(AiError::InvalidMove("No legal plays available".into()));
    }
    Ok(legal)
}

/// The seat's hand, required non-empty for ability choices.
pub(crate) fn require_hand(state: &GameState, seat: PlayerId) -> Result<&[Card], AiError> {
    let hand = &state.hands[seat as usize];
    if hand.is_empty() {
        return Err(AiError::InvalidMove("Hand is empty".into()));
    }
    Ok(hand)
}
