//! Fixed game constants.

pub const PLAYERS: usize = 2;

/// Cards in the full deck: 11 ranks across 3 aspects.
pub const DECK_SIZE: usize = 33;

/// Cards dealt to each player at round start.
pub const HAND_SIZE: usize = 13;

/// Tricks per round; equals the starting hand size.
pub const TRICKS_PER_ROUND: u8 = 13;

/// Undealt cards forming the stock after both hands and the decree.
pub const STOCK_SIZE: usize = 6;

/// Cumulative score at which a player wins the match.
pub const MATCH_TARGET: u16 = 21;
