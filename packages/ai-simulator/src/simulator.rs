//! In-memory match simulator for AI evaluation.
//!
//! Runs matches entirely in memory against the pure engine, with no
//! persistence or transport overhead, so AI tiers can be compared over
//! thousands of matches quickly.

use decree_engine::ai::{AiError, AiPlayer};
use decree_engine::domain::abilities::{resolve_discard, resolve_exchange};
use decree_engine::domain::game_flow::{advance_after_scoring, check_match_winner, start_round};
use decree_engine::domain::scoring::apply_round_scoring;
use decree_engine::domain::state::{GameState, Phase, PlayerId};
use decree_engine::domain::tricks::play_card;

const PLAYERS: usize = 2;

/// Hard ceiling on rounds per match. The scoring table guarantees the
/// target falls within a handful of rounds; hitting this ceiling means
/// the engine or an AI is broken.
const MAX_ROUNDS: u8 = 50;

/// Per-round record kept for metrics.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    pub round_no: u8,
    /// Decree card at the end of the round, as its display token.
    pub decree: String,
    pub tricks_won: [u8; PLAYERS],
    pub bonus: [u8; PLAYERS],
    /// Cumulative scores after this round.
    pub scores: [u16; PLAYERS],
}

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Final cumulative scores per seat
    pub final_scores: [u16; PLAYERS],
    /// Seat that reached the target
    pub winner: PlayerId,
    /// Number of rounds played
    pub rounds_played: u8,
    /// Per-round outcomes in play order
    pub rounds: Vec<RoundOutcome>,
}

/// In-memory match simulator driving the engine's phase machine.
pub struct Simulator {
    state: GameState,
    rounds: Vec<RoundOutcome>,
    match_seed: u64,
}

impl Simulator {
    pub fn new(match_seed: u64) -> Self {
        Self {
            state: GameState::new(),
            rounds: Vec::new(),
            match_seed,
        }
    }

    /// Simulate a complete match with the given AI players.
    pub fn simulate_match(
        mut self,
        ais: &[Box<dyn AiPlayer + Send + Sync>; PLAYERS],
    ) -> Result<MatchResult, SimulatorError> {
        start_round(&mut self.state, self.match_seed)
            .map_err(|e| SimulatorError::DomainError(format!("Deal failed: {e}")))?;

        for _ in 0..MAX_ROUNDS {
            self.play_round_phases(ais)?;
            apply_round_scoring(&mut self.state);
            self.record_round();

            advance_after_scoring(&mut self.state, self.match_seed)
                .map_err(|e| SimulatorError::DomainError(format!("Round turnover failed: {e}")))?;

            if self.state.phase == Phase::GameOver {
                let winner = check_match_winner(&self.state)
                    .ok_or_else(|| SimulatorError::InvalidState("GameOver without winner".into()))?;
                return Ok(MatchResult {
                    final_scores: self.state.scores_total,
                    winner,
                    rounds_played: self.state.round_no,
                    rounds: self.rounds,
                });
            }
        }

        Err(SimulatorError::InvalidState(format!(
            "match exceeded {MAX_ROUNDS} rounds"
        )))
    }

    /// Drive trick play and ability choices until the round scores.
    fn play_round_phases(
        &mut self,
        ais: &[Box<dyn AiPlayer + Send + Sync>; PLAYERS],
    ) -> Result<(), SimulatorError> {
        loop {
            match self.state.phase {
                Phase::Trick { .. } => {
                    let seat = self
                        .state
                        .turn
                        .ok_or_else(|| SimulatorError::InvalidState("no turn in Trick".into()))?;
                    let card = ais[seat as usize]
                        .choose_play(&self.state, seat)
                        .map_err(|e| SimulatorError::AiError(seat, "play", e))?;
                    play_card(&mut self.state, seat, card)
                        .map_err(|e| SimulatorError::DomainError(format!("Play failed: {e}")))?;
                }
                Phase::Exchange { player } => {
                    let card = ais[player as usize]
                        .choose_exchange(&self.state, player)
                        .map_err(|e| SimulatorError::AiError(player, "exchange", e))?;
                    resolve_exchange(&mut self.state, player, card).map_err(|e| {
                        SimulatorError::DomainError(format!("Exchange failed: {e}"))
                    })?;
                }
                Phase::Discard { player } => {
                    let card = ais[player as usize]
                        .choose_discard(&self.state, player)
                        .map_err(|e| SimulatorError::AiError(player, "discard", e))?;
                    resolve_discard(&mut self.state, player, card).map_err(|e| {
                        SimulatorError::DomainError(format!("Discard failed: {e}"))
                    })?;
                }
                Phase::Scoring => return Ok(()),
                other => {
                    return Err(SimulatorError::InvalidState(format!(
                        "unexpected phase during round: {other:?}"
                    )));
                }
            }
        }
    }

    /// Record the just-scored round. The round container stays intact
    /// until the next deal, so counters are still readable here.
    fn record_round(&mut self) {
        let decree = self
            .state
            .round
            .decree
            .map(|c| c.to_string())
            .unwrap_or_default();
        self.rounds.push(RoundOutcome {
            round_no: self.state.round_no,
            decree,
            tricks_won: self.state.round.tricks_won,
            bonus: self.state.round.bonus,
            scores: self.state.scores_total,
        });
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// AI returned an error
    AiError(PlayerId, &'static str, AiError),
    /// Domain logic rejected a move
    DomainError(String),
    /// The simulator reached a state it cannot drive
    InvalidState(String),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::AiError(seat, action, err) => {
                write!(f, "AI error (seat {seat}, {action}): {err}")
            }
            SimulatorError::DomainError(msg) => write!(f, "Domain error: {msg}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
