//! RNG seed derivation for deterministic dealing.
//!
//! Each round of a match deals from its own seed derived from the match
//! seed, so replaying a match seed reproduces every deal while distinct
//! rounds still shuffle differently.

/// Derive the dealing seed for a round.
///
/// Same (match seed, round) always yields the same seed; different
/// rounds of the same match yield different seeds.
pub fn derive_dealing_seed(match_seed: u64, round_no: u8) -> u64 {
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}
