//! Match lifecycle: round setup, round turnover, match winner.

use tracing::debug;

use crate::domain::dealing::deal_round;
use crate::domain::rules::{MATCH_TARGET, PLAYERS};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{GameState, Phase, PlayerId, RoundState};
use crate::errors::{DomainError, ValidationKind};

/// Deal the next round and enter trick play.
///
/// Valid from Init (first round) or Complete (subsequent rounds). The
/// deal is seeded from `derive_dealing_seed(match_seed, round_no)`, so
/// a match seed reproduces every deal. The first lead alternates
/// between seats across rounds.
pub fn start_round(state: &mut GameState, match_seed: u64) -> Result<(), DomainError> {
    match state.phase {
        Phase::Init | Phase::Complete => {}
        _ => {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Phase mismatch",
            ));
        }
    }

    state.round_no += 1;
    let deal = deal_round(derive_dealing_seed(match_seed, state.round_no));

    state.round = RoundState::empty();
    state.round.decree = Some(deal.decree);
    state.round.stock = deal.stock;
    state.hands = deal.hands;

    let first_leader: PlayerId = ((state.round_no - 1) % PLAYERS as u8) as PlayerId;
    state.leader = Some(first_leader);
    state.turn = Some(first_leader);
    state.phase = Phase::Trick { trick_no: 1 };

    debug!(
        round_no = state.round_no,
        decree = %deal.decree,
        first_leader,
        "round dealt"
    );
    Ok(())
}

/// First player at or past the match target, or None. Player 0 is
/// checked first; the order is observable when both sides cross the
/// target in the same round.
pub fn check_match_winner(state: &GameState) -> Option<PlayerId> {
    state
        .scores_total
        .iter()
        .position(|&s| s >= MATCH_TARGET)
        .map(|p| p as PlayerId)
}

/// After scoring: either the match is over or the next round is dealt.
pub fn advance_after_scoring(state: &mut GameState, match_seed: u64) -> Result<(), DomainError> {
    if state.phase != Phase::Complete {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    }
    if let Some(winner) = check_match_winner(state) {
        debug!(winner, scores = ?state.scores_total, "match over");
        state.phase = Phase::GameOver;
        state.turn = None;
        state.leader = None;
        return Ok(());
    }
    start_round(state, match_seed)
}
