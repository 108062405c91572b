//! Public snapshot API for observing game state without exposing
//! internals. The snapshot is plain key-value data (serde) sufficient
//! to resynchronize a remote peer: round/trick counters, both score
//! sets, the decree and dominant aspect, the active player, and cards
//! identified by (aspect, rank) tokens only.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::legal_moves;
use crate::domain::{Aspect, Card};

/// Shared public round facts (no private hands, only hand sizes).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub round_no: u8,
    pub decree: Card,
    pub dominant: Aspect,
    pub hand_sizes: [u8; PLAYERS],
    pub stock_size: u8,
    pub tricks_won: [u8; PLAYERS],
    pub bonus: [u8; PLAYERS],
}

/// Trick-playing phase snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub round: RoundPublic,
    pub trick_no: u8,
    pub leader: Option<PlayerId>,
    pub current_trick: Vec<(PlayerId, Card)>,
    pub to_act: Option<PlayerId>,
    /// Legal cards for the seat to act, for enabling/disabling plays.
    pub playable: Vec<Card>,
    /// Last completed trick for display purposes.
    pub last_trick: Option<Vec<(PlayerId, Card)>>,
}

/// Ability-choice phase snapshot (Envoy exchange or Forager discard).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSnapshot {
    pub round: RoundPublic,
    pub to_act: PlayerId,
}

/// Scoring phase snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringSnapshot {
    pub round: RoundPublic,
    pub round_scores: [u16; PLAYERS],
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data")]
pub enum PhaseSnapshot {
    Init,
    Trick(TrickSnapshot),
    Exchange(ChoiceSnapshot),
    Discard(ChoiceSnapshot),
    Scoring(ScoringSnapshot),
    Complete(ScoringSnapshot),
    GameOver,
}

/// Top-level snapshot combining match header and phase data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub scores_total: [u16; PLAYERS],
    pub phase: PhaseSnapshot,
}

/// Entry point: produce a snapshot of the current game state.
/// Never panics; phases without a dealt round fold to `Init`.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let phase = match state.phase {
        Phase::Init => PhaseSnapshot::Init,
        Phase::Trick { trick_no } => match build_round_public(state) {
            Some(round) => snapshot_trick(state, round, trick_no),
            None => PhaseSnapshot::Init,
        },
        Phase::Exchange { player } => match build_round_public(state) {
            Some(round) => PhaseSnapshot::Exchange(ChoiceSnapshot {
                round,
                to_act: player,
            }),
            None => PhaseSnapshot::Init,
        },
        Phase::Discard { player } => match build_round_public(state) {
            Some(round) => PhaseSnapshot::Discard(ChoiceSnapshot {
                round,
                to_act: player,
            }),
            None => PhaseSnapshot::Init,
        },
        Phase::Scoring => match build_round_public(state) {
            Some(round) => {
                let round_scores = compute_round_scores(state);
                PhaseSnapshot::Scoring(ScoringSnapshot {
                    round,
                    round_scores,
                })
            }
            None => PhaseSnapshot::Init,
        },
        Phase::Complete => match build_round_public(state) {
            Some(round) => {
                let round_scores = compute_round_scores(state);
                PhaseSnapshot::Complete(ScoringSnapshot {
                    round,
                    round_scores,
                })
            }
            None => PhaseSnapshot::Init,
        },
        Phase::GameOver => PhaseSnapshot::GameOver,
    };

    GameSnapshot {
        scores_total: state.scores_total,
        phase,
    }
}

fn build_round_public(state: &GameState) -> Option<RoundPublic> {
    let decree = state.round.decree?;
    Some(RoundPublic {
        round_no: state.round_no,
        decree,
        dominant: decree.aspect,
        hand_sizes: [state.hands[0].len() as u8, state.hands[1].len() as u8],
        stock_size: state.round.stock.len() as u8,
        tricks_won: state.round.tricks_won,
        bonus: state.round.bonus,
    })
}

fn snapshot_trick(state: &GameState, round: RoundPublic, trick_no: u8) -> PhaseSnapshot {
    let playable = match state.turn {
        Some(seat) => legal_moves(state, seat),
        None => Vec::new(),
    };
    PhaseSnapshot::Trick(TrickSnapshot {
        round,
        trick_no,
        leader: state.leader,
        current_trick: state.round.trick_plays.clone(),
        to_act: state.turn,
        playable,
        last_trick: state.round.last_trick.clone(),
    })
}

/// Per-round scoring deltas without mutating state.
fn compute_round_scores(state: &GameState) -> [u16; PLAYERS] {
    let mut scores = [0u16; PLAYERS];
    for (pid, score) in scores.iter_mut().enumerate() {
        let tricks = state.round.tricks_won[pid];
        let bonus = state.round.bonus[pid];
        *score = crate::domain::scoring::round_score(tricks) as u16 + bonus as u16;
    }
    scores
}
