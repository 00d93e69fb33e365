//! Candidate pin selection under the minimum-gap rule

use rand::Rng;
use rand::seq::index;

/// Shortest distance between two pin slots on a ring of `num_pins`
///
/// Both slots are 0-based and must be below `num_pins`.
pub const fn cyclic_distance(a: usize, b: usize, num_pins: usize) -> usize {
    let forward = a.abs_diff(b);
    let backward = num_pins.saturating_sub(forward);
    if forward < backward { forward } else { backward }
}

/// All pins a thread from `current` may run to, in ascending slot order
///
/// Excludes `current` itself and every pin closer than `min_gap` around the ring.
pub fn candidate_pins(current: usize, num_pins: usize, min_gap: usize) -> Vec<usize> {
    (0..num_pins)
        .filter(|&pin| pin != current && cyclic_distance(current, pin, num_pins) >= min_gap)
        .collect()
}

/// Thin the candidate list to at most `cap` entries, uniformly without replacement
///
/// Lists already within the cap are returned untouched and consume no
/// randomness. Sampled lists keep the order the sampler produced.
pub fn sample_candidates<R: Rng + ?Sized>(
    candidates: Vec<usize>,
    cap: usize,
    rng: &mut R,
) -> Vec<usize> {
    if candidates.len() <= cap {
        return candidates;
    }

    index::sample(rng, candidates.len(), cap)
        .into_iter()
        .filter_map(|i| candidates.get(i).copied())
        .collect()
}
