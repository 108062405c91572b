//! Tests for the round scoring table and score application.

use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::scoring::{apply_round_scoring, round_score};
use crate::domain::state::{GameState, Phase};

#[test]
fn scoring_table_matches_fixed_values() {
    assert_eq!(round_score(0), 6);
    assert_eq!(round_score(1), 6);
    assert_eq!(round_score(2), 6);
    assert_eq!(round_score(3), 6);
    assert_eq!(round_score(4), 1);
    assert_eq!(round_score(5), 2);
    assert_eq!(round_score(6), 3);
    assert_eq!(round_score(7), 6);
    assert_eq!(round_score(8), 6);
    assert_eq!(round_score(9), 6);
    assert_eq!(round_score(10), 0);
    assert_eq!(round_score(11), 0);
    assert_eq!(round_score(12), 0);
    assert_eq!(round_score(13), 0);
}

#[test]
fn table_is_non_monotonic_by_design() {
    // Ducking low and landing the 7..=9 band both beat the middle.
    assert!(round_score(3) > round_score(4));
    assert!(round_score(7) > round_score(6));
    assert!(round_score(9) > round_score(10));
}

fn scored_state(tricks_won: [u8; 2], bonus: [u8; 2]) -> GameState {
    let mut state = GameState::new();
    state.phase = Phase::Scoring;
    state.round.tricks_won = tricks_won;
    state.round.bonus = bonus;
    state
}

#[test]
fn apply_scoring_adds_table_and_bonus() {
    let mut state = scored_state([7, 6], [2, 0]);
    apply_round_scoring(&mut state);

    // 7 tricks score 6 plus 2 bonus; 6 tricks score 3.
    assert_eq!(state.scores_total, [8, 3]);
    assert_eq!(state.phase, Phase::Complete);
}

#[test]
fn bonus_applies_even_in_zero_bracket() {
    let mut state = scored_state([10, 3], [3, 0]);
    apply_round_scoring(&mut state);
    assert_eq!(state.scores_total, [3, 6]);
}

#[test]
fn scores_accumulate_across_rounds() {
    let mut state = scored_state([4, 9], [0, 1]);
    apply_round_scoring(&mut state);
    assert_eq!(state.scores_total, [1, 7]);

    state.phase = Phase::Scoring;
    state.round.tricks_won = [2, 11];
    state.round.bonus = [1, 0];
    apply_round_scoring(&mut state);
    assert_eq!(state.scores_total, [8, 7]);
}

#[test]
fn scoring_outside_scoring_phase_is_a_no_op() {
    let mut state = scored_state([7, 6], [0, 0]);
    state.phase = Phase::Trick { trick_no: 3 };
    apply_round_scoring(&mut state);
    assert_eq!(state.scores_total, [0, 0]);
    assert_eq!(state.phase, Phase::Trick { trick_no: 3 });
}

#[test]
fn every_trick_split_produces_a_defined_score() {
    for my in 0..=TRICKS_PER_ROUND {
        let opp = TRICKS_PER_ROUND - my;
        let mut state = scored_state([my, opp], [0, 0]);
        apply_round_scoring(&mut state);
        assert_eq!(state.phase, Phase::Complete);
        // Per-round gain is bounded by the table's maximum.
        assert!(state.scores_total[0] <= 6 && state.scores_total[1] <= 6);
    }
}
