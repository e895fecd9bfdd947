use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::types::TrackList;

/// Returns a uniformly random permutation of `tracks`.
///
/// Fisher-Yates: each step draws one of the still unplaced tracks and swaps
/// it into the next output slot. The input is left untouched.
pub fn shuffle<R: Rng + ?Sized>(tracks: &[String], rng: &mut R) -> TrackList {
    let mut shuffled = tracks.to_vec();
    let len = shuffled.len();

    for placed in 0..len {
        let pick = rng.random_range(placed..len);
        shuffled.swap(placed, pick);
    }

    shuffled
}

/// Seeded generator for a reproducible order, OS-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
