//! Round scoring: the fixed non-monotonic table plus Tribute bonuses.

use tracing::debug;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Phase};

/// Points for a round's trick count. The table is intentionally
/// non-monotonic — winning very few tricks or landing in the 7..=9 band
/// scores best, and near-total domination scores nothing. Preserve it
/// literally; do not "fix" it into a monotone curve.
pub fn round_score(tricks_won: u8) -> u8 {
    match tricks_won {
        0..=3 => 6,
        4 => 1,
        5 => 2,
        6 => 3,
        7..=9 => 6,
        _ => 0,
    }
}

/// Apply per-round scoring and transition to Complete.
///
/// Each player's round score is `round_score(tricks_won) + bonus`; the
/// Tribute bonus channel is additive and not gated by the table.
pub fn apply_round_scoring(state: &mut GameState) {
    if state.phase != Phase::Scoring {
        return;
    }
    for pid in 0..PLAYERS {
        let tricks = state.round.tricks_won[pid];
        let bonus = state.round.bonus[pid];
        let gained = round_score(tricks) as u16 + bonus as u16;
        state.scores_total[pid] += gained;
        debug!(player = pid, tricks, bonus, gained, "round scored");
    }
    state.phase = Phase::Complete;
}
