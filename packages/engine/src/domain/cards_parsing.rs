//! Card parsing and display for compact tokens (e.g., "7B", "11V").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Aspect, Card, Rank};
use crate::errors::{DomainError, ValidationKind};

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl fmt::Display for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Aspect::Blades => 'B',
            Aspect::Chalices => 'C',
            Aspect::Veils => 'V',
        };
        write!(f, "{c}")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.value(), self.aspect)
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Token is 1-2 rank digits followed by one aspect letter.
        if !(2..=3).contains(&s.len()) {
            return Err(parse_err(s));
        }
        let (rank_part, aspect_part) = s.split_at(s.len() - 1);

        let value: u8 = rank_part.parse().map_err(|_| parse_err(s))?;
        if !(1..=11).contains(&value) {
            return Err(parse_err(s));
        }
        let rank = Rank::ALL[(value - 1) as usize];

        let aspect = match aspect_part {
            "B" => Aspect::Blades,
            "C" => Aspect::Chalices,
            "V" => Aspect::Veils,
            _ => return Err(parse_err(s)),
        };

        Ok(Card { aspect, rank })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
/// Fails on the first invalid token.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
