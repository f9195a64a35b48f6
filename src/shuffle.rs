use rand::Rng;

use crate::card::Card;

/// Number of full passes made over the cards.
const PASSES: usize = 10;

/// Pseudo shuffle: every pass swaps each position with a random position
/// anywhere in the slice.
///
/// The result is not a uniform permutation, which is fine for casual play.
pub fn pseudo_shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    let len = cards.len();
    if len < 2 {
        return;
    }

    for _ in 0..PASSES {
        for j in 0..len {
            let p = rng.random_range(0..len);
            cards.swap(j, p);
        }
    }
}
