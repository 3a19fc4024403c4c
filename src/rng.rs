use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG for a given (seed, game_id, round) triple.
///
/// Derives a per-decision 64-bit seed as `seed ^ game_id ^ round` and feeds
/// it to PCG64, so identical inputs replay identical games.
#[inline]
#[must_use]
pub fn rng_for_state(seed: u64, game_id: u64, round: u32) -> impl Rng {
    let derived: u64 = seed ^ game_id ^ u64::from(round);
    Pcg64::seed_from_u64(derived)
}
