//! Tactician AI - a tactical, band-aware approach.
//!
//! The Tactician aims squarely at the scoring table's sweet spots. Key
//! principles:
//!
//! - **Banding**: Uses the adaptive band, abandoning a spoiled low
//!   bracket to deny the opponent their high one.
//! - **Leading**: Shapes the trick before the opponent responds, with
//!   different card profiles per band.
//! - **Following**: Partitions legal cards into winners and losers
//!   against the known lead card, then wins or ducks to order.

use super::evaluator::{
    determine_target_band_adaptive, will_win_trick, worst_by_evaluation, TargetBand,
};
use super::trait_def::{require_hand, require_legal_moves, AiError, AiPlayer};
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{other_player, GameState, PlayerId};
use crate::domain::tricks::current_trick_no;
use crate::domain::{Card, Rank};

/// Plays to land in a scoring bracket through tactical decision-making.
///
/// When leading in the low band it throws small off-dominant cards to
/// drain the hand cheaply; in the high band it leads from strength.
/// When following it knows exactly which cards win and uses the
/// cheapest one that does the job, or the most expendable loser.
#[derive(Clone, Default)]
pub struct Tactician;

impl Tactician {
    pub const NAME: &'static str = "Tactician";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn band_for(state: &GameState, seat: PlayerId) -> TargetBand {
        let my = state.round.tricks_won[seat as usize];
        let opp = state.round.tricks_won[other_player(seat) as usize];
        let remaining = TRICKS_PER_ROUND + 1 - current_trick_no(state);
        determine_target_band_adaptive(my, remaining, opp)
    }

    /// Card to lead when no play is on the table yet.
    fn lead(legal: &[Card], state: &GameState, band: TargetBand) -> Option<Card> {
        let dominant = state.dominant();
        match band {
            TargetBand::Low => {
                // Lowest card outside the dominant aspect sheds strength
                // without accidentally claiming the trick.
                legal
                    .iter()
                    .filter(|c| Some(c.aspect) != dominant)
                    .min_by_key(|c| c.rank)
                    .or_else(|| legal.iter().min_by_key(|c| c.rank))
                    .copied()
            }
            TargetBand::High => {
                // Strong dominant cards first, otherwise raw rank.
                legal
                    .iter()
                    .filter(|c| Some(c.aspect) == dominant && c.rank >= Rank::Seven)
                    .max_by_key(|c| c.rank)
                    .or_else(|| legal.iter().max_by_key(|c| c.rank))
                    .copied()
            }
        }
    }

    /// Card to answer an opponent's lead.
    fn follow(legal: &[Card], state: &GameState, band: TargetBand) -> Option<Card> {
        let (winners, losers): (Vec<Card>, Vec<Card>) = legal
            .iter()
            .copied()
            .partition(|&c| will_win_trick(c, state));
        match band {
            TargetBand::Low => {
                // Throw the biggest loser; forced to win, spend as
                // little as possible doing it.
                losers
                    .iter()
                    .max_by_key(|c| c.rank)
                    .or_else(|| winners.iter().min_by_key(|c| c.rank))
                    .copied()
            }
            TargetBand::High => {
                // Win cheaply; if no card wins, dump the smallest.
                winners
                    .iter()
                    .min_by_key(|c| c.rank)
                    .or_else(|| losers.iter().min_by_key(|c| c.rank))
                    .copied()
            }
        }
    }

    /// Hand card worth giving away: the one the evaluator rates worst
    /// for the current band. In the low band that is the high card, not
    /// the low one.
    fn most_expendable(hand: &[Card], state: &GameState, seat: PlayerId) -> Option<Card> {
        let band = Self::band_for(state, seat);
        let tricks_won = state.round.tricks_won[seat as usize];
        worst_by_evaluation(hand, state, tricks_won, band)
    }
}

impl AiPlayer for Tactician {
    fn choose_play(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let legal = require_legal_moves(state, seat)?;
        let band = Self::band_for(state, seat);
        let choice = if state.round.trick_plays.is_empty() {
            Self::lead(&legal, state, band)
        } else {
            Self::follow(&legal, state, band)
        };
        choice.ok_or_else(|| AiError::Internal("Tactical selection produced no card".into()))
    }

    fn choose_exchange(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let hand = require_hand(state, seat)?;
        Self::most_expendable(hand, state, seat)
            .ok_or_else(|| AiError::Internal("Tactical selection produced no card".into()))
    }

    fn choose_discard(&self, state: &GameState, seat: PlayerId) -> Result<Card, AiError> {
        let hand = require_hand(state, seat)?;
        Self::most_expendable(hand, state, seat)
            .ok_or_else(|| AiError::Internal("Tactical selection produced no card".into()))
    }
}
