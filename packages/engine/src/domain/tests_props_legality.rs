//! Property-based tests for follow-lead legality rules.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::state::{GameState, Phase};
use crate::domain::test_gens;
use crate::domain::tricks::legal_moves;
use crate::domain::{Aspect, Card};

/// Trick-phase state with the given hand for player 0 and an optional
/// fixed lead already on the table.
fn trick_state(hand: Vec<Card>, lead: Option<Aspect>) -> GameState {
    let mut state = GameState::new();
    state.phase = Phase::Trick { trick_no: 1 };
    state.turn = Some(0);
    state.leader = Some(0);
    state.hands[0] = hand;
    state.round.trick_lead = lead;
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// If a hand contains cards of the lead aspect, every legal play
    /// must be of that aspect and every such card must be legal.
    #[test]
    fn prop_follow_lead_legality(
        lead in test_gens::aspect(),
        lead_rank in test_gens::rank(),
        other_cards in test_gens::unique_cards_up_to(12),
    ) {
        // Hand guaranteed to hold at least one lead-aspect card.
        let anchor = Card { aspect: lead, rank: lead_rank };
        let mut hand = vec![anchor];
        for card in other_cards {
            if card != anchor {
                hand.push(card);
            }
        }

        let lead_count = hand.iter().filter(|c| c.aspect == lead).count();
        let state = trick_state(hand, Some(lead));
        let legal = legal_moves(&state, 0);

        for card in &legal {
            prop_assert_eq!(card.aspect, lead,
                "Legal play {} must follow lead aspect {:?}", card, lead);
        }
        prop_assert_eq!(legal.len(), lead_count,
            "Every lead-aspect card in hand must be legal");
    }

    /// A hand void in the lead aspect may play anything.
    #[test]
    fn prop_void_hand_plays_anything(
        (lead, hand) in test_gens::aspect().prop_flat_map(|a| {
            (Just(a), test_gens::hand_without_aspect(a))
        }),
    ) {
        let mut expected = hand.clone();
        expected.sort();

        let state = trick_state(hand, Some(lead));
        let legal = legal_moves(&state, 0);
        prop_assert_eq!(legal, expected,
            "When void in the lead aspect, the whole hand is legal");
    }

    /// Legal plays are always a duplicate-free subset of the hand.
    #[test]
    fn prop_legal_plays_subset(
        hand in test_gens::hand(),
        lead in proptest::option::of(test_gens::aspect()),
    ) {
        let state = trick_state(hand.clone(), lead);
        let legal = legal_moves(&state, 0);

        let legal_set: HashSet<Card> = legal.iter().copied().collect();
        prop_assert_eq!(legal_set.len(), legal.len(),
            "Legal plays must have no duplicates");

        for card in &legal {
            prop_assert!(hand.contains(card),
                "Legal play {} must be in hand", card);
        }
    }

    /// With no lead on the table the leader may play the whole hand.
    #[test]
    fn prop_leading_offers_whole_hand(hand in test_gens::hand()) {
        let mut expected = hand.clone();
        expected.sort();

        let state = trick_state(hand, None);
        let legal = legal_moves(&state, 0);
        prop_assert_eq!(legal, expected);
    }
}
