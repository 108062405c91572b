//! Session state: hands, trick-in-progress, counters, scores.

use crate::domain::rules::PLAYERS;
use crate::domain::{Aspect, Card};
use crate::errors::DomainError;

pub type PlayerId = u8; // 0..=1

/// Game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Match created but no round dealt yet.
    Init,
    /// Playing tricks within the round; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// An Envoy (rank 3) was played; its player must choose the hand
    /// card to exchange with the decree.
    Exchange { player: PlayerId },
    /// A Forager (rank 5) was played and the top stock card drawn; its
    /// player must choose the card to return to the stock.
    Discard { player: PlayerId },
    /// Tally round points.
    Scoring,
    /// Round complete.
    Complete,
    /// A player reached the match target.
    GameOver,
}

/// Per-round state relevant during trick play.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(PlayerId, Card)>,
    /// Lead aspect for the current trick, fixed by its first card.
    pub trick_lead: Option<Aspect>,
    /// Tricks won per player this round.
    pub tricks_won: [u8; PLAYERS],
    /// Tribute bonus points accrued per player this round.
    pub bonus: [u8; PLAYERS],
    /// The face-up decree card; its aspect is the dominant aspect.
    pub decree: Option<Card>,
    /// Undealt cards; Forager draws from the front and returns to the back.
    pub stock: Vec<Card>,
    /// Last completed trick for display purposes.
    pub last_trick: Option<Vec<(PlayerId, Card)>>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            trick_plays: Vec::with_capacity(PLAYERS),
            trick_lead: None,
            tricks_won: [0; PLAYERS],
            bonus: [0; PLAYERS],
            decree: None,
            stock: Vec::new(),
            last_trick: None,
        }
    }
}

/// Entire match container, sufficient for all pure domain operations.
/// Exclusively owns both hands, the trick, the decree, and the stock.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// Round number, 1-based; 0 before the first deal.
    pub round_no: u8,
    /// Players' hands.
    pub hands: [Vec<Card>; PLAYERS],
    /// Player expected to act.
    /// - Some(seat) when someone must play or resolve an ability choice
    /// - None when nobody can act (Init, Scoring, Complete, GameOver)
    pub turn: Option<PlayerId>,
    /// Player who leads the current trick (Trick phase only).
    pub leader: Option<PlayerId>,
    /// Cumulative scores across rounds. Monotonically non-decreasing.
    pub scores_total: [u16; PLAYERS],
    /// Per-round container.
    pub round: RoundState,
}

impl GameState {
    /// Fresh match with nothing dealt.
    pub fn new() -> Self {
        Self {
            phase: Phase::Init,
            round_no: 0,
            hands: [Vec::new(), Vec::new()],
            turn: None,
            leader: None,
            scores_total: [0; PLAYERS],
            round: RoundState::empty(),
        }
    }

    /// Dominant aspect for the round, read from the decree card.
    pub fn dominant(&self) -> Option<Aspect> {
        self.round.decree.map(|c| c.aspect)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The other seat (two fixed seats: 0 and 1).
#[inline]
pub fn other_player(p: PlayerId) -> PlayerId {
    1 - p
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state.turn.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: turn must be set ({ctx})"))
    })
}

pub fn require_leader(state: &GameState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state.leader.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: leader must be set ({ctx})"))
    })
}

pub fn require_decree(state: &GameState, ctx: &'static str) -> Result<Card, DomainError> {
    state.round.decree.ok_or_else(|| {
        DomainError::validation_other(format!("Invariant violated: decree must be set ({ctx})"))
    })
}
