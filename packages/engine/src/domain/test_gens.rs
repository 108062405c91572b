// Proptest generators for domain types.
// These generators ensure unique cards and valid inputs for property-based testing.

use proptest::prelude::*;

use crate::domain::{full_deck, Aspect, Card, Rank};

/// Generate a random Aspect
pub fn aspect() -> impl Strategy<Value = Aspect> {
    prop_oneof![
        Just(Aspect::Blades),
        Just(Aspect::Chalices),
        Just(Aspect::Veils),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop_oneof![
        Just(Rank::One),
        Just(Rank::Two),
        Just(Rank::Three),
        Just(Rank::Four),
        Just(Rank::Five),
        Just(Rank::Six),
        Just(Rank::Seven),
        Just(Rank::Eight),
        Just(Rank::Nine),
        Just(Rank::Ten),
        Just(Rank::Eleven),
    ]
}

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    // Generate by shuffling the full deck and taking a prefix
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = full_deck();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a vector of 1 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Generate a hand (vector of 1-13 unique cards)
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_up_to(13)
}

/// Generate a hand containing NO cards of the given aspect
pub fn hand_without_aspect(excluded: Aspect) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut cards: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| c.aspect != excluded)
            .collect();

        let count = rng.random_range(1..=13.min(cards.len()));
        for i in 0..count {
            let j = rng.random_range(i..cards.len());
            cards.swap(i, j);
        }
        cards.truncate(count);
        cards
    })
}

/// Generate two distinct cards
pub fn two_distinct_cards() -> impl Strategy<Value = (Card, Card)> {
    unique_cards(2).prop_map(|cards| (cards[0], cards[1]))
}
