//! Metrics collection and output for AI simulation results.

use serde::Serialize;

use crate::simulator::{MatchResult, RoundOutcome};

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub config: MatchConfig,
    pub result: MatchResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchConfig {
    pub ai_types: [String; 2],
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub final_scores: [u16; 2],
    pub winner: u8,
    pub rounds_played: u8,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u8,
    pub decree: String,
    pub tricks_won: [u8; 2],
    pub bonus: [u8; 2],
    pub cumulative_scores: [u16; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub total_score: u16,
    pub total_bonus: u32,
    pub avg_tricks_per_round: f64,
    /// Rounds finished in each bracket: low (0..=3), middle (4..=6),
    /// high (7..=9), overshoot (10..=13).
    pub bracket_counts: BracketCounts,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BracketCounts {
    pub low: u32,
    pub middle: u32,
    pub high: u32,
    pub overshoot: u32,
}

impl BracketCounts {
    fn count(&mut self, tricks: u8) {
        match tricks {
            0..=3 => self.low += 1,
            4..=6 => self.middle += 1,
            7..=9 => self.high += 1,
            _ => self.overshoot += 1,
        }
    }
}

/// Build metrics from a finished match.
pub fn build_match_metrics(
    match_id: u32,
    seed: u64,
    ai_types: [String; 2],
    total_matches: u32,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    let rounds: Vec<RoundMetrics> = result.rounds.iter().map(build_round_metrics).collect();

    let player_metrics = (0..2)
        .map(|seat| build_player_metrics(seat as u8, &ai_types[seat], result))
        .collect();

    MatchMetrics {
        match_id,
        seed,
        config: MatchConfig {
            ai_types,
            total_matches,
        },
        result: MatchResultMetrics {
            final_scores: result.final_scores,
            winner: result.winner,
            rounds_played: result.rounds_played,
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundOutcome) -> RoundMetrics {
    RoundMetrics {
        round_no: round.round_no,
        decree: round.decree.clone(),
        tricks_won: round.tricks_won,
        bonus: round.bonus,
        cumulative_scores: round.scores,
    }
}

fn build_player_metrics(seat: u8, ai_type: &str, result: &MatchResult) -> PlayerMetrics {
    let mut brackets = BracketCounts::default();
    let mut total_tricks = 0u32;
    let mut total_bonus = 0u32;
    for round in &result.rounds {
        let tricks = round.tricks_won[seat as usize];
        brackets.count(tricks);
        total_tricks += tricks as u32;
        total_bonus += round.bonus[seat as usize] as u32;
    }

    let avg_tricks = if result.rounds.is_empty() {
        0.0
    } else {
        total_tricks as f64 / result.rounds.len() as f64
    };

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        total_score: result.final_scores[seat as usize],
        total_bonus,
        avg_tricks_per_round: avg_tricks,
        bracket_counts: brackets,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winner: u8,
    pub rounds_played: u8,
    pub seat0_score: u16,
    pub seat1_score: u16,
    pub seat0_ai: String,
    pub seat1_ai: String,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        CsvSummaryRow {
            match_id: metrics.match_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            rounds_played: metrics.result.rounds_played,
            seat0_score: metrics.result.final_scores[0],
            seat1_score: metrics.result.final_scores[1],
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
        }
    }
}
