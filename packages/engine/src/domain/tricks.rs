//! Trick legality, card play, and trick resolution.

use tracing::debug;

use crate::domain::cards_logic::{hand_has_aspect, resolve_trick, TrickWinner};
use crate::domain::cards_types::{Ability, Card, Rank};
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{
    other_player, require_decree, require_turn, GameState, Phase, PlayerId, RoundState,
};
use crate::errors::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (2 cards played and no ability
    /// choice pending).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<PlayerId>,
    /// Trick number after this play (incremented if a trick completed).
    pub trick_no_after: u8,
    /// Phase transitioned to, if any (None means still in Trick phase).
    pub phase_transitioned: Option<Phase>,
    /// Ability awaiting a choice from its player, if the played card
    /// triggered one.
    pub pending_ability: Option<Ability>,
}

/// 1-based number of the trick currently being played, derived from the
/// tricks already won.
pub fn current_trick_no(state: &GameState) -> u8 {
    state.round.tricks_won[0] + state.round.tricks_won[1] + 1
}

/// Compute legal cards the player may play, independent of turn
/// enforcement: with an empty trick the whole hand is legal; otherwise
/// lead-aspect cards if the hand holds any, else the whole hand.
pub fn legal_moves(state: &GameState, who: PlayerId) -> Vec<Card> {
    let Phase::Trick { .. } = state.phase else {
        return Vec::new();
    };

    let hand = &state.hands[who as usize];
    if hand.is_empty() {
        return Vec::new();
    }

    if let Some(lead) = state.round.trick_lead {
        if hand_has_aspect(hand, lead) {
            let mut v: Vec<Card> = hand.iter().copied().filter(|c| c.aspect == lead).collect();
            v.sort();
            return v;
        }
    }

    let mut any = hand.clone();
    any.sort();
    any
}

/// Play a card into the current trick, enforcing turn, lead-following,
/// and phase. Validation happens before any mutation; a rejected play
/// leaves the state untouched.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    // Phase check
    let Phase::Trick { trick_no } = state.phase else {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    };

    // Invariant: the phase payload tracks the derived trick number.
    if trick_no != current_trick_no(state) {
        return Err(DomainError::validation_other(
            "Invariant violated: Phase::Trick.trick_no must match tricks won",
        ));
    }

    // Turn check
    let turn = require_turn(state, "play_card")?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }

    // Card in hand
    let pos_opt = state.hands[who as usize].iter().position(|&c| c == card);
    let Some(pos) = pos_opt else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            "Card not in hand",
        ));
    };

    // Lead-following check using an immutable borrow only
    let legal = legal_moves(state, who);
    if !legal.contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::MustFollowLead,
            "Must follow lead aspect",
        ));
    }

    // On first play, fix lead + leader
    if state.round.trick_plays.is_empty() {
        state.round.trick_lead = Some(card.aspect);
        state.leader = Some(who);
    }

    let removed = state.hands[who as usize].remove(pos);
    state.round.trick_plays.push((who, removed));
    state.turn = Some(other_player(who));

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        trick_no_after: trick_no,
        phase_transitioned: None,
        pending_ability: None,
    };

    // Choice-driven abilities interrupt play; trick resolution (if the
    // trick is full) waits until the choice is resolved.
    match card.rank.ability() {
        Some(Ability::Envoy) if !state.hands[who as usize].is_empty() => {
            state.phase = Phase::Exchange { player: who };
            state.turn = Some(who);
            result.phase_transitioned = Some(state.phase);
            result.pending_ability = Some(Ability::Envoy);
            return Ok(result);
        }
        Some(Ability::Forager) if !state.round.stock.is_empty() => {
            let drawn = state.round.stock.remove(0);
            state.hands[who as usize].push(drawn);
            state.hands[who as usize].sort();
            state.phase = Phase::Discard { player: who };
            state.turn = Some(who);
            result.phase_transitioned = Some(state.phase);
            result.pending_ability = Some(Ability::Forager);
            return Ok(result);
        }
        _ => {}
    }

    continue_after_play(state, &mut result)?;
    Ok(result)
}

/// Resolve the current trick winner if complete. Pure over the round
/// state; `None` while the trick still awaits a card or the decree is
/// unset.
pub fn resolve_current_trick(round: &RoundState) -> Option<PlayerId> {
    if round.trick_plays.len() < 2 {
        return None;
    }
    let lead = round.trick_lead?;
    let dominant = round.decree?.aspect;

    let (first_player, first_card) = round.trick_plays[0];
    let (second_player, second_card) = round.trick_plays[1];
    match resolve_trick(first_card, second_card, lead, dominant) {
        TrickWinner::First => Some(first_player),
        TrickWinner::Second => Some(second_player),
    }
}

/// Finish the turn after a play (or after its ability choice resolved):
/// resolve the trick when full and advance the trick/round counters.
pub(crate) fn continue_after_play(
    state: &mut GameState,
    result: &mut PlayCardResult,
) -> Result<(), DomainError> {
    state.phase = Phase::Trick {
        trick_no: result.trick_no_after,
    };

    if state.round.trick_plays.len() < 2 {
        return Ok(());
    }

    require_decree(state, "continue_after_play")?;
    let Some(winner) = resolve_current_trick(&state.round) else {
        return Err(DomainError::validation(
            ValidationKind::IncompleteTrick,
            "Trick cannot resolve without two cards and a lead",
        ));
    };

    state.round.tricks_won[winner as usize] += 1;

    // Tribute: every rank 7 in the trick pays the winner one bonus point.
    let tributes = state
        .round
        .trick_plays
        .iter()
        .filter(|(_, c)| c.rank == Rank::Seven)
        .count() as u8;
    state.round.bonus[winner as usize] += tributes;

    // Winner leads next, unless the loser played a Pilgrim.
    let mut next_leader = winner;
    for &(player, card) in &state.round.trick_plays {
        if player != winner && card.rank == Rank::One {
            next_leader = player;
        }
    }

    debug!(
        trick_no = result.trick_no_after,
        winner,
        tributes,
        next_leader,
        "trick resolved"
    );

    result.trick_completed = true;
    result.trick_winner = Some(winner);

    state.round.last_trick = Some(std::mem::take(&mut state.round.trick_plays));
    state.round.trick_lead = None;

    let next_trick_no = result.trick_no_after.saturating_add(1);
    result.trick_no_after = next_trick_no;

    if next_trick_no > TRICKS_PER_ROUND {
        state.phase = Phase::Scoring;
        state.turn = None;
        state.leader = None;
        result.phase_transitioned = Some(Phase::Scoring);
        return Ok(());
    }

    state.phase = Phase::Trick {
        trick_no: next_trick_no,
    };
    state.leader = Some(next_leader);
    state.turn = Some(next_leader);
    Ok(())
}
