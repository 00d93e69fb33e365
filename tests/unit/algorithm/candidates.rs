//! Tests for cyclic pin distance, minimum-gap filtering and candidate sampling

#[cfg(test)]
mod tests {
    use greedythread::algorithm::candidates::{candidate_pins, cyclic_distance, sample_candidates};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    // Tests distance wraps around the ring
    // Verified by returning the forward distance only
    #[test]
    fn test_cyclic_distance() {
        assert_eq!(cyclic_distance(0, 7, 8), 1);
        assert_eq!(cyclic_distance(7, 0, 8), 1);
        assert_eq!(cyclic_distance(1, 5, 8), 4);
        assert_eq!(cyclic_distance(3, 3, 8), 0);
    }

    // Tests pins closer than the gap and the current pin are excluded
    // Verified by using a strict gap comparison
    #[test]
    fn test_candidate_pins_gap() {
        assert_eq!(candidate_pins(0, 8, 2), vec![2, 3, 4, 5, 6]);
        assert_eq!(candidate_pins(6, 8, 3), vec![1, 2, 3]);
    }

    // Tests a zero gap still excludes the current pin
    // Verified by removing the self-exclusion
    #[test]
    fn test_candidate_pins_zero_gap() {
        assert_eq!(candidate_pins(2, 5, 0), vec![0, 1, 3, 4]);
    }

    // Tests an unsatisfiable gap leaves no candidates
    // Verified by falling back to all pins when empty
    #[test]
    fn test_candidate_pins_empty() {
        assert!(candidate_pins(0, 8, 5).is_empty());
        assert!(candidate_pins(0, 2, 2).is_empty());
    }

    // Tests lists within the cap pass through untouched
    // Verified by always sampling
    #[test]
    fn test_sample_within_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidates = vec![4, 1, 9];
        assert_eq!(sample_candidates(candidates.clone(), 3, &mut rng), candidates);
    }

    // Tests sampling returns distinct members of the original list
    // Verified by sampling with replacement
    #[test]
    fn test_sample_over_cap() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates: Vec<usize> = (100..300).collect();
        let sampled = sample_candidates(candidates, 50, &mut rng);

        assert_eq!(sampled.len(), 50);
        let unique: HashSet<usize> = sampled.iter().copied().collect();
        assert_eq!(unique.len(), 50);
        assert!(sampled.iter().all(|pin| (100..300).contains(pin)));
    }

    // Tests equal seeds give equal samples
    // Verified by drawing from thread_rng
    #[test]
    fn test_sample_deterministic() {
        let candidates: Vec<usize> = (0..500).collect();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);

        assert_eq!(
            sample_candidates(candidates.clone(), 20, &mut a),
            sample_candidates(candidates, 20, &mut b)
        );
    }
}
