//! Card game logic: checking aspects in hands, trick winner resolution.

use super::cards_types::{Aspect, Card, Rank};

pub fn hand_has_aspect(hand: &[Card], aspect: Aspect) -> bool {
    hand.iter().any(|c| c.aspect == aspect)
}

/// Which of the two played cards takes the trick.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TrickWinner {
    First,
    Second,
}

/// Aspect a card counts as for dominance. A lone nine counts as the
/// dominant aspect; when both cards in the trick are nines, neither is
/// overridden.
fn effective_aspect(card: Card, other: Card, dominant: Aspect) -> Aspect {
    if card.rank == Rank::Nine && other.rank != Rank::Nine {
        dominant
    } else {
        card.aspect
    }
}

/// Resolve a trick of two cards under the full precedence ladder:
///
/// 1. Exactly one card dominant (after the lone-nine override) — it wins.
/// 2. Exactly one card follows the lead aspect (original aspect, never
///    the overridden one) — it wins.
/// 3. Higher rank wins. The deck holds no duplicate (aspect, rank)
///    pairs, so within a single aspect ranks never tie; across aspects
///    a rank tie can only reach here via two nines, where the lead
///    comparison above already decided.
///
/// Pure and total: no side effects, always exactly one winner.
pub fn resolve_trick(first: Card, second: Card, lead: Aspect, dominant: Aspect) -> TrickWinner {
    let first_dominant = effective_aspect(first, second, dominant) == dominant;
    let second_dominant = effective_aspect(second, first, dominant) == dominant;
    if first_dominant != second_dominant {
        return if first_dominant {
            TrickWinner::First
        } else {
            TrickWinner::Second
        };
    }

    let first_follows = first.aspect == lead;
    let second_follows = second.aspect == lead;
    if first_follows != second_follows {
        return if first_follows {
            TrickWinner::First
        } else {
            TrickWinner::Second
        };
    }

    if first.rank.value() >= second.rank.value() {
        TrickWinner::First
    } else {
        TrickWinner::Second
    }
}
