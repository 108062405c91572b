//! Card desirability evaluation — pure scoring shared by the Medium
//! and Hard tiers.
//!
//! The scoring model is hand-tuned, not searched:
//! - 0.3 × rank base (inverted when hunting the low band)
//! - +0.2 when the card carries the dominant aspect
//! - +0.3 × per-rank ability value (contextual, see [`ability_value`])
//! - +0.2 when the card follows the current trick's lead
//!
//! Everything here is deterministic and side-effect free; identical
//! inputs always produce identical scores.

use crate::domain::cards_logic::{resolve_trick, TrickWinner};
use crate::domain::cards_types::{Ability, Card, Rank};
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::GameState;
use crate::domain::tricks::current_trick_no;

/// The trick-count bracket the AI is steering toward: `Low` for the
/// 0..=3 bracket, `High` for 7..=9.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TargetBand {
    Low,
    High,
}

/// Contextual worth of a card's ability, in [0, 1].
///
/// Constants are tuned per rank: the Changeling's flexibility rates
/// highest throughout; the Pilgrim matters early while lead control is
/// still worth shaping; the Tribute pays best while the 4..=8 trick
/// range keeps both scoring outcomes open; the Sovereign is a
/// late-round closer; Envoy and Forager reshape the hand, most useful
/// mid-round.
pub fn ability_value(card: Card, state: &GameState, tricks_won: u8) -> f32 {
    let trick_no = current_trick_no(state);
    match card.rank.ability() {
        None => 0.0,
        Some(Ability::Changeling) => 0.9,
        Some(Ability::Pilgrim) => {
            if trick_no <= 4 {
                0.7
            } else {
                0.3
            }
        }
        Some(Ability::Tribute) => {
            if (4..=8).contains(&tricks_won) {
                0.8
            } else {
                0.4
            }
        }
        Some(Ability::Sovereign) => {
            if trick_no >= 10 {
                0.8
            } else {
                0.4
            }
        }
        Some(Ability::Envoy) | Some(Ability::Forager) => {
            if (5..=9).contains(&trick_no) {
                0.6
            } else {
                0.3
            }
        }
    }
}

/// Desirability of playing `card` now, clamped to [0, 1].
pub fn evaluate(card: Card, state: &GameState, tricks_won: u8, band: TargetBand) -> f32 {
    let raw_base = card.rank.value() as f32 / 11.0;
    let base = match band {
        TargetBand::Low => 1.0 - raw_base,
        TargetBand::High => raw_base,
    };

    let mut score = 0.3 * base;
    if state.dominant() == Some(card.aspect) {
        score += 0.2;
    }
    score += 0.3 * ability_value(card, state, tricks_won);
    if state.round.trick_lead == Some(card.aspect) {
        score += 0.2;
    }
    score.clamp(0.0, 1.0)
}

/// Would `card` take the trick if played right now?
///
/// Following an existing lead this reuses the exact resolution ladder.
/// Leading, it falls back to a simple assumption: a dominant-aspect
/// card of rank 7 or higher wins.
pub fn will_win_trick(card: Card, state: &GameState) -> bool {
    let Some(dominant) = state.dominant() else {
        return false;
    };
    match (state.round.trick_plays.first(), state.round.trick_lead) {
        (Some(&(_, lead_card)), Some(lead)) => {
            resolve_trick(lead_card, card, lead, dominant) == TrickWinner::Second
        }
        _ => card.aspect == dominant && card.rank >= Rank::Seven,
    }
}

/// Choose the band still worth steering toward.
///
/// Trick counters never decrease and the round always totals 13
/// tricks, so high-band reachability is a plain count comparison.
/// The counters alone can never force a band exit downward — the
/// opponent can always absorb every remaining trick — so dropping out
/// of a bracket only happens by winning past it.
pub fn determine_target_band(
    my_tricks: u8,
    tricks_remaining: u8,
    opponent_tricks: u8,
) -> TargetBand {
    debug_assert!(my_tricks + opponent_tricks + tricks_remaining == TRICKS_PER_ROUND);
    match my_tricks {
        // Damage control; the round is spoiled.
        10.. => TargetBand::Low,
        7..=9 => TargetBand::High,
        4..=6 => {
            // 0..=3 is gone for good; aim for 7..=9 while it is still
            // reachable, otherwise stop feeding the trick count.
            if my_tricks + tricks_remaining >= 7 {
                TargetBand::High
            } else {
                TargetBand::Low
            }
        }
        _ => TargetBand::Low,
    }
}

/// Hard-tier banding: as [`determine_target_band`], but once its own
/// low bracket is out of reach it will band high purely to shove an
/// opponent sitting at 7..=9 past the 9-trick cliff.
pub fn determine_target_band_adaptive(
    my_tricks: u8,
    tricks_remaining: u8,
    opponent_tricks: u8,
) -> TargetBand {
    let base = determine_target_band(my_tricks, tricks_remaining, opponent_tricks);
    if base == TargetBand::Low && my_tricks >= 4 && (7..=9).contains(&opponent_tricks) {
        return TargetBand::High;
    }
    base
}

/// Highest-evaluated card among `cards`, or None if empty. Ties keep
/// the earliest candidate, so sorted input gives deterministic output.
pub fn best_by_evaluation(
    cards: &[Card],
    state: &GameState,
    tricks_won: u8,
    band: TargetBand,
) -> Option<Card> {
    let mut best: Option<(f32, Card)> = None;
    for &card in cards {
        let score = evaluate(card, state, tricks_won, band);
        match best {
            None => best = Some((score, card)),
            Some((bs, _)) if score > bs => best = Some((score, card)),
            _ => {}
        }
    }
    best.map(|(_, c)| c)
}

/// Lowest-evaluated card among `cards`, or None if empty.
pub fn worst_by_evaluation(
    cards: &[Card],
    state: &GameState,
    tricks_won: u8,
    band: TargetBand,
) -> Option<Card> {
    let mut worst: Option<(f32, Card)> = None;
    for &card in cards {
        let score = evaluate(card, state, tricks_won, band);
        match worst {
            None => worst = Some((score, card)),
            Some((ws, _)) if score < ws => worst = Some((score, card)),
            _ => {}
        }
    }
    worst.map(|(_, c)| c)
}
