//! Domain layer: pure game logic types and helpers.

pub mod abilities;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod game_flow;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use cards_logic::{hand_has_aspect, resolve_trick, TrickWinner};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Ability, Aspect, Card, Rank};
pub use dealing::{deal, deal_round, full_deck, shuffle_with_seed, Deal};
pub use game_flow::check_match_winner;
pub use seed_derivation::derive_dealing_seed;
