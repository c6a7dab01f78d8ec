use rand::seq::SliceRandom;
use rand::Rng;

/// In-place Fisher–Yates shuffle driven by the caller's `rng`. Every
/// permutation is equally likely given a uniform source.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
