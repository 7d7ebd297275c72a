use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

const DETERMINISTIC_SEED: u64 = 0x5EED_C0FF_EE00_0004;

pub fn random_pick<'a, T, R: Rng>(choices: &'a [T], rng: &mut R) -> Option<&'a T> {
    choices.choose(rng)
}

pub fn get_rng() -> XorShiftRng {
    XorShiftRng::from_entropy()
}

pub fn get_rng_seeded(seed: u64) -> XorShiftRng {
    XorShiftRng::seed_from_u64(seed)
}

/// Seeded from the given value if any, else from entropy.
pub fn get_rng_from(seed: Option<u64>) -> XorShiftRng {
    seed.map_or_else(get_rng, get_rng_seeded)
}

pub fn get_rng_deterministic() -> XorShiftRng {
    get_rng_seeded(DETERMINISTIC_SEED)
}
