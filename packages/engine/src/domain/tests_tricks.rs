//! Unit tests for trick play: legality enforcement, resolution,
//! ability interrupts, and turn/leader bookkeeping.

use crate::domain::abilities::{resolve_discard, resolve_exchange};
use crate::domain::state::{GameState, Phase, PlayerId};
use crate::domain::tricks::{legal_moves, play_card};
use crate::domain::{try_parse_cards, Ability, Aspect, Card};
use crate::errors::ValidationKind;

fn c(token: &str) -> Card {
    token.parse().unwrap()
}

fn hand(tokens: &[&str]) -> Vec<Card> {
    let mut cards = try_parse_cards(tokens.iter().copied()).unwrap();
    cards.sort();
    cards
}

/// Mid-round fixture: both hands fixed, a decree, and player 0 to lead
/// trick 1.
fn fixture(h0: &[&str], h1: &[&str], decree: &str) -> GameState {
    let mut state = GameState::new();
    state.round_no = 1;
    state.phase = Phase::Trick { trick_no: 1 };
    state.turn = Some(0);
    state.leader = Some(0);
    state.hands[0] = hand(h0);
    state.hands[1] = hand(h1);
    state.round.decree = Some(c(decree));
    state
}

#[test]
fn out_of_turn_play_is_rejected() {
    let mut state = fixture(&["4B"], &["6C"], "2V");
    let err = play_card(&mut state, 1, c("6C")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::OutOfTurn);
    assert_eq!(state.hands[1], hand(&["6C"]));
}

#[test]
fn play_outside_trick_phase_is_rejected() {
    let mut state = fixture(&["4B"], &["6C"], "2V");
    state.phase = Phase::Scoring;
    let err = play_card(&mut state, 0, c("4B")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::PhaseMismatch);
}

#[test]
fn card_not_in_hand_is_rejected() {
    let mut state = fixture(&["4B"], &["6C"], "2V");
    let err = play_card(&mut state, 0, c("8V")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::CardNotInHand);
}

#[test]
fn must_follow_lead_when_holding_it() {
    let mut state = fixture(&["10B"], &["4B", "6C"], "2V");
    play_card(&mut state, 0, c("10B")).unwrap();

    let err = play_card(&mut state, 1, c("6C")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::MustFollowLead);
    // Rejected play left the trick untouched.
    assert_eq!(state.round.trick_plays.len(), 1);

    play_card(&mut state, 1, c("4B")).unwrap();
}

#[test]
fn legal_moves_filter_to_lead_and_sort() {
    let mut state = fixture(&["10B"], &["6C", "4B", "2B"], "2V");
    play_card(&mut state, 0, c("10B")).unwrap();

    assert_eq!(legal_moves(&state, 1), hand(&["2B", "4B"]));
}

#[test]
fn void_hand_may_play_any_aspect() {
    let mut state = fixture(&["10B"], &["6C", "8V"], "2V");
    play_card(&mut state, 0, c("10B")).unwrap();

    assert_eq!(legal_moves(&state, 1), hand(&["6C", "8V"]));
    play_card(&mut state, 1, c("6C")).unwrap();
}

#[test]
fn winner_takes_trick_and_leads_next() {
    let mut state = fixture(&["10B", "2C"], &["4B", "6C"], "2V");
    play_card(&mut state, 0, c("10B")).unwrap();
    let result = play_card(&mut state, 1, c("4B")).unwrap();

    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(0));
    assert_eq!(result.trick_no_after, 2);
    assert_eq!(state.round.tricks_won, [1, 0]);
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
    assert_eq!(state.leader, Some(0));
    assert_eq!(state.turn, Some(0));
    assert!(state.round.trick_plays.is_empty());
    assert!(state.round.trick_lead.is_none());
    assert_eq!(
        state.round.last_trick,
        Some(vec![(0 as PlayerId, c("10B")), (1 as PlayerId, c("4B"))])
    );
}

#[test]
fn pilgrim_loser_leads_next_trick() {
    let mut state = fixture(&["10B", "2C"], &["1B", "6C"], "2V");
    play_card(&mut state, 0, c("10B")).unwrap();
    let result = play_card(&mut state, 1, c("1B")).unwrap();

    assert_eq!(result.trick_winner, Some(0));
    assert_eq!(state.round.tricks_won, [1, 0]);
    // The losing Pilgrim redirects the lead.
    assert_eq!(state.leader, Some(1));
    assert_eq!(state.turn, Some(1));
}

#[test]
fn winning_pilgrim_keeps_the_lead() {
    let mut state = fixture(&["1V", "2C"], &["4B", "6C"], "2V");
    play_card(&mut state, 0, c("1V")).unwrap();
    let result = play_card(&mut state, 1, c("4B")).unwrap();

    // Dominant Veils: the Pilgrim wins outright and leads as winner.
    assert_eq!(result.trick_winner, Some(0));
    assert_eq!(state.leader, Some(0));
}

#[test]
fn tribute_pays_winner_one_point_per_seven() {
    let mut state = fixture(&["7B", "2C"], &["4B", "6C"], "2V");
    play_card(&mut state, 0, c("7B")).unwrap();
    play_card(&mut state, 1, c("4B")).unwrap();
    assert_eq!(state.round.bonus, [1, 0]);

    let mut state = fixture(&["7B", "2C"], &["7C", "6C"], "2V");
    play_card(&mut state, 0, c("7B")).unwrap();
    play_card(&mut state, 1, c("7C")).unwrap();
    // Both sevens pay the single winner.
    assert_eq!(state.round.bonus, [2, 0]);
}

#[test]
fn envoy_interrupts_for_an_exchange() {
    let mut state = fixture(&["3B", "4C"], &["6C", "8V"], "2V");
    let result = play_card(&mut state, 0, c("3B")).unwrap();

    assert!(!result.trick_completed);
    assert_eq!(result.pending_ability, Some(Ability::Envoy));
    assert_eq!(state.phase, Phase::Exchange { player: 0 });
    assert_eq!(state.turn, Some(0));

    let result = resolve_exchange(&mut state, 0, c("4C")).unwrap();
    assert_eq!(state.round.decree, Some(c("4C")));
    assert_eq!(state.dominant(), Some(Aspect::Chalices));
    assert_eq!(state.hands[0], hand(&["2V"]));
    assert!(!result.trick_completed);
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.turn, Some(1));
}

#[test]
fn exchange_validates_phase_actor_and_card() {
    let mut state = fixture(&["3B", "4C"], &["6C", "8V"], "2V");
    assert_eq!(
        resolve_exchange(&mut state, 0, c("4C")).unwrap_err().kind(),
        ValidationKind::PhaseMismatch
    );

    play_card(&mut state, 0, c("3B")).unwrap();
    assert_eq!(
        resolve_exchange(&mut state, 1, c("6C")).unwrap_err().kind(),
        ValidationKind::OutOfTurn
    );
    assert_eq!(
        resolve_exchange(&mut state, 0, c("8V")).unwrap_err().kind(),
        ValidationKind::CardNotInHand
    );
}

#[test]
fn envoy_on_last_card_skips_the_exchange() {
    let mut state = fixture(&["3B"], &["6C", "8V"], "2V");
    let result = play_card(&mut state, 0, c("3B")).unwrap();

    assert!(result.pending_ability.is_none());
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.turn, Some(1));
}

#[test]
fn envoy_as_second_card_defers_trick_resolution() {
    let mut state = fixture(&["10B", "2C"], &["3B", "6C"], "2V");
    play_card(&mut state, 0, c("10B")).unwrap();
    let result = play_card(&mut state, 1, c("3B")).unwrap();

    // Trick is full but resolution waits for the exchange.
    assert!(!result.trick_completed);
    assert_eq!(state.round.tricks_won, [0, 0]);
    assert_eq!(state.phase, Phase::Exchange { player: 1 });

    let result = resolve_exchange(&mut state, 1, c("6C")).unwrap();
    assert!(result.trick_completed);
    assert_eq!(result.trick_winner, Some(0));
    assert_eq!(state.round.tricks_won, [1, 0]);
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
}

#[test]
fn forager_draws_then_returns_a_card() {
    let mut state = fixture(&["5B", "2C"], &["6C", "8V"], "2V");
    state.round.stock = hand(&["6V", "9C"]);
    let stock_front = state.round.stock[0];
    let stock_back = state.round.stock[1];

    let result = play_card(&mut state, 0, c("5B")).unwrap();
    assert_eq!(result.pending_ability, Some(Ability::Forager));
    assert_eq!(state.phase, Phase::Discard { player: 0 });
    assert!(state.hands[0].contains(&stock_front));
    assert_eq!(state.hands[0].len(), 2);
    assert_eq!(state.round.stock, vec![stock_back]);

    resolve_discard(&mut state, 0, c("2C")).unwrap();
    // Returned card goes to the bottom of the stock.
    assert_eq!(state.round.stock, vec![stock_back, c("2C")]);
    assert_eq!(state.hands[0].len(), 1);
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.turn, Some(1));
}

#[test]
fn forager_with_empty_stock_plays_through() {
    let mut state = fixture(&["5B", "2C"], &["6C", "8V"], "2V");
    assert!(state.round.stock.is_empty());

    let result = play_card(&mut state, 0, c("5B")).unwrap();
    assert!(result.pending_ability.is_none());
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    assert_eq!(state.hands[0], hand(&["2C"]));
    assert_eq!(state.turn, Some(1));
}

#[test]
fn drawn_stock_card_may_be_returned_immediately() {
    let mut state = fixture(&["5B", "2C"], &["6C", "8V"], "2V");
    state.round.stock = vec![c("6V")];

    play_card(&mut state, 0, c("5B")).unwrap();
    resolve_discard(&mut state, 0, c("6V")).unwrap();

    assert_eq!(state.hands[0], hand(&["2C"]));
    assert_eq!(state.round.stock, vec![c("6V")]);
}

#[test]
fn thirteenth_trick_moves_to_scoring() {
    let mut state = fixture(&["10B"], &["4B"], "2V");
    state.round.tricks_won = [6, 6];
    state.phase = Phase::Trick { trick_no: 13 };

    play_card(&mut state, 0, c("10B")).unwrap();
    let result = play_card(&mut state, 1, c("4B")).unwrap();

    assert!(result.trick_completed);
    assert_eq!(result.phase_transitioned, Some(Phase::Scoring));
    assert_eq!(state.phase, Phase::Scoring);
    assert_eq!(state.round.tricks_won, [7, 6]);
    assert!(state.turn.is_none());
    assert!(state.leader.is_none());
}

#[test]
fn phase_trick_number_invariant_is_enforced() {
    let mut state = fixture(&["10B"], &["4B"], "2V");
    state.phase = Phase::Trick { trick_no: 5 };

    let err = play_card(&mut state, 0, c("10B")).unwrap_err();
    assert_eq!(err.kind(), ValidationKind::Other);
}
