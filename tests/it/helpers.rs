use chainseq::Sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Collects the sequence's values front to back.
pub fn values<T: Clone>(seq: &Sequence<T>) -> Vec<T> {
    seq.iter().cloned().collect()
}

/// Deterministic generator for randomized checks.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A vector of `len` small integers, so duplicates are common.
pub fn random_values(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-5..5)).collect()
}
