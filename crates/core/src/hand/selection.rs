//! Random hand selection.
//!
//! A plain uniform pick. No matchmaking, no weighting.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::HandRecord;

/// Picks one hand uniformly at random using the thread-local generator.
///
/// Returns `None` when `hands` is empty.
pub fn choose_hand(hands: &[HandRecord]) -> Option<&HandRecord> {
    choose_hand_with(&mut rand::rng(), hands)
}

/// Picks one hand uniformly at random using the given generator.
pub fn choose_hand_with<'a, R: Rng + ?Sized>(
    rng: &mut R,
    hands: &'a [HandRecord],
) -> Option<&'a HandRecord> {
    hands.choose(rng)
}
