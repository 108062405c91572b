//! Deterministic deck construction and dealing.

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, PLAYERS, STOCK_SIZE};
use crate::domain::{Aspect, Card, Rank};
use crate::errors::{DomainError, ValidationKind};

/// Generate the full 33-card deck in standard order: 11 ranks per
/// aspect, no duplicates.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for aspect in Aspect::ALL {
        for rank in Rank::ALL {
            deck.push(Card { aspect, rank });
        }
    }
    deck
}

/// Simple deterministic RNG for shuffling.
///
/// SplitMix64-style generator: good statistical properties, fast, and
/// stable across crate upgrades so stored match seeds keep replaying
/// the same deals.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Largest multiple of m that fits in u64; values at or above it
        // are rejected to avoid modulo bias.
        let limit = u64::MAX - (u64::MAX % m);

        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Fisher-Yates shuffle using the deterministic RNG.
pub fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = SplitMix64::new(seed);
    for i in (1..deck.len()).rev() {
        let j = rng.next_range(i + 1);
        deck.swap(i, j);
    }
}

/// Result of dealing one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// One 13-card hand per player, sorted for display.
    pub hands: [Vec<Card>; PLAYERS],
    /// The 27th card, held face up; fixes the round's dominant aspect.
    pub decree: Card,
    /// The remaining 6 cards, top of the stock first.
    pub stock: Vec<Card>,
}

/// Deal two hands, the decree card, and the stock from a shuffled deck.
///
/// The split is deterministic: the first 26 cards alternate into
/// hand0/hand1, card 27 is the decree, the rest form the stock in
/// order. Fails if the deck is not exactly 33 cards.
pub fn deal(deck: &[Card]) -> Result<Deal, DomainError> {
    if deck.len() != DECK_SIZE {
        return Err(DomainError::validation(
            ValidationKind::DeckSize,
            format!("Deck must hold {DECK_SIZE} cards, got {}", deck.len()),
        ));
    }

    let mut hands: [Vec<Card>; PLAYERS] = [
        Vec::with_capacity(HAND_SIZE),
        Vec::with_capacity(HAND_SIZE),
    ];
    for (i, card) in deck[..PLAYERS * HAND_SIZE].iter().enumerate() {
        hands[i % PLAYERS].push(*card);
    }
    for hand in &mut hands {
        hand.sort();
    }

    let decree = deck[PLAYERS * HAND_SIZE];
    let stock = deck[PLAYERS * HAND_SIZE + 1..].to_vec();
    debug_assert_eq!(stock.len(), STOCK_SIZE);

    Ok(Deal {
        hands,
        decree,
        stock,
    })
}

/// Convenience for round setup: fresh deck, seeded shuffle, deal.
pub fn deal_round(seed: u64) -> Deal {
    let mut deck = full_deck();
    shuffle_with_seed(&mut deck, seed);
    // full_deck always produces 33 cards.
    deal(&deck).unwrap_or_else(|_| unreachable!("full deck has the fixed size"))
}
