//! Core card-related types: Card, Rank, Aspect, Ability

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Aspect {
    Blades,
    Chalices,
    Veils,
}

impl Aspect {
    pub const ALL: [Aspect; 3] = [Aspect::Blades, Aspect::Chalices, Aspect::Veils];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
}

impl Rank {
    pub const ALL: [Rank; 11] = [
        Rank::One,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Eleven,
    ];

    /// Numeric value 1..=11.
    pub fn value(self) -> u8 {
        match self {
            Rank::One => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Eleven => 11,
        }
    }

    /// Ability carried by this rank. Odd ranks only; the match is
    /// exhaustive so adding a rank forces a decision here.
    pub fn ability(self) -> Option<Ability> {
        match self {
            Rank::One => Some(Ability::Pilgrim),
            Rank::Three => Some(Ability::Envoy),
            Rank::Five => Some(Ability::Forager),
            Rank::Seven => Some(Ability::Tribute),
            Rank::Nine => Some(Ability::Changeling),
            Rank::Eleven => Some(Ability::Sovereign),
            Rank::Two | Rank::Four | Rank::Six | Rank::Eight | Rank::Ten => None,
        }
    }

    pub fn has_ability(self) -> bool {
        self.ability().is_some()
    }
}

/// Rank-triggered special abilities, keyed by odd rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Ability {
    /// Rank 1: if this card's player loses the trick, they lead next.
    Pilgrim,
    /// Rank 3: exchange one hand card with the decree card.
    Envoy,
    /// Rank 5: draw the top stock card, then return one card to the
    /// bottom of the stock.
    Forager,
    /// Rank 7: the trick's winner gains one bonus point per rank-7 card
    /// in the trick.
    Tribute,
    /// Rank 9: treated as the dominant aspect when it is the sole
    /// rank-9 card in the trick.
    Changeling,
    /// Rank 11: no mechanical effect; weighted by the evaluator.
    Sovereign,
}

impl Ability {
    /// Presentation text for the ability, keyed by rank.
    pub fn description(self) -> &'static str {
        match self {
            Ability::Pilgrim => "Lose the trick with this card and you lead the next trick",
            Ability::Envoy => "After playing, exchange one hand card with the decree card",
            Ability::Forager => {
                "After playing, draw the top stock card, then return one card to the stock"
            }
            Ability::Tribute => "The winner of this trick gains one bonus point",
            Ability::Changeling => {
                "Counts as the dominant aspect while it is the only nine in the trick"
            }
            Ability::Sovereign => "The highest rank of its aspect",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub aspect: Aspect,
    pub rank: Rank,
}

impl Card {
    pub const fn new(aspect: Aspect, rank: Rank) -> Self {
        Self { aspect, rank }
    }
}

// Note: Ord/Eq on Card is only for stable sorting: aspect order B<C<V then
// rank ascending. Do not use for trick resolution or comparisons involving
// the dominant aspect or lead.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.aspect.cmp(&other.aspect) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
