//! Choice-driven ability resolution: Envoy (exchange with the decree)
//! and Forager (return a card to the stock).
//!
//! Both are staged decisions: [`play_card`](crate::domain::tricks::play_card)
//! parks the game in an `Exchange`/`Discard` phase and the trick (if
//! already full) resolves only after the choice lands here.

use tracing::debug;

use crate::domain::state::{other_player, require_decree, GameState, Phase, PlayerId};
use crate::domain::tricks::{continue_after_play, current_trick_no, PlayCardResult};
use crate::domain::Card;
use crate::errors::{DomainError, ValidationKind};

/// Resolve a pending Envoy exchange: `card` leaves the hand and becomes
/// the new decree, the old decree joins the hand. The dominant aspect
/// is re-read from the new decree from this point on.
pub fn resolve_exchange(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let Phase::Exchange { player } = state.phase else {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    };
    if player != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    let pos_opt = state.hands[who as usize].iter().position(|&c| c == card);
    let Some(pos) = pos_opt else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };
    let old_decree = require_decree(state, "resolve_exchange")?;

    let given = state.hands[who as usize].remove(pos);
    state.hands[who as usize].push(old_decree);
    state.hands[who as usize].sort();
    state.round.decree = Some(given);

    debug!(player = who, new_decree = %given, old_decree = %old_decree, "decree exchanged");

    finish_choice(state, who)
}

/// Resolve a pending Forager discard: `card` leaves the hand and goes
/// to the bottom of the stock.
pub fn resolve_discard(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    let Phase::Discard { player } = state.phase else {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    };
    if player != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    let pos_opt = state.hands[who as usize].iter().position(|&c| c == card);
    let Some(pos) = pos_opt else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };

    let returned = state.hands[who as usize].remove(pos);
    state.round.stock.push(returned);

    debug!(player = who, returned = %returned, "card returned to stock");

    finish_choice(state, who)
}

/// Hand the turn back and continue the interrupted play (resolving the
/// trick if both cards are already down).
fn finish_choice(state: &mut GameState, who: PlayerId) -> Result<PlayCardResult, DomainError> {
    state.turn = Some(other_player(who));

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        trick_no_after: current_trick_no(state),
        phase_transitioned: None,
        pending_ability: None,
    };
    continue_after_play(state, &mut result)?;
    Ok(result)
}
