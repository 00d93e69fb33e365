//! Tests for darkening factors, line improvement and best-candidate selection

#[cfg(test)]
mod tests {
    use greedythread::algorithm::scoring::{
        ScoredCandidate, darkening_factor, line_improvement, select_best,
    };

    // Tests the factor is clamped into [0, 1]
    // Verified by removing the clamp
    #[test]
    fn test_darkening_factor() {
        assert!((darkening_factor(0.08) - 0.92).abs() < 1e-12);
        assert!(darkening_factor(1.5).abs() < f64::EPSILON);
        assert!((darkening_factor(-0.5) - 1.0).abs() < f64::EPSILON);
    }

    // Tests improvement against a black target
    // Verified by swapping before and after terms
    #[test]
    fn test_improvement_black_target() {
        let current = vec![1.0; 4];
        let target = vec![0.0; 4];
        let improvement = line_improvement(&current, &target, &[0, 1, 2], 0.5);
        assert!((improvement - 2.25).abs() < 1e-12);
    }

    // Tests repeated pixels count once per occurrence
    // Verified by deduplicating pixels before scoring
    #[test]
    fn test_improvement_repeated_pixels() {
        let current = vec![1.0; 2];
        let target = vec![0.0; 2];
        let once = line_improvement(&current, &target, &[0], 0.5);
        let twice = line_improvement(&current, &target, &[0, 0], 0.5);
        assert!((twice - 2.0 * once).abs() < 1e-12);
    }

    // Tests a white target never rewards a line
    // Verified by returning the absolute value
    #[test]
    fn test_improvement_white_target_negative() {
        let current = vec![1.0; 3];
        let target = vec![1.0; 3];
        let improvement = line_improvement(&current, &target, &[0, 1, 2], 0.92);
        assert!(improvement < 0.0);
    }

    // Tests out-of-range pixels count as blank on both sides
    // Verified by treating missing pixels as black
    #[test]
    fn test_improvement_missing_pixels() {
        let improvement = line_improvement(&[0.5], &[0.5], &[10], 0.5);
        assert!((improvement + 0.25).abs() < 1e-12);
    }

    // Tests the highest improvement wins
    // Verified by selecting the minimum
    #[test]
    fn test_select_best_maximum() {
        let best = select_best([
            ScoredCandidate { pin: 3, improvement: 1.0 },
            ScoredCandidate { pin: 5, improvement: 4.0 },
            ScoredCandidate { pin: 7, improvement: -2.0 },
        ]);
        assert_eq!(best.map(|c| c.pin), Some(5));
    }

    // Tests ties keep the earliest candidate
    // Verified by using >= in the comparison
    #[test]
    fn test_select_best_tie_keeps_first() {
        let best = select_best([
            ScoredCandidate { pin: 2, improvement: 1.5 },
            ScoredCandidate { pin: 6, improvement: 1.5 },
        ]);
        assert_eq!(best.map(|c| c.pin), Some(2));
    }

    // Tests negative-only candidates still produce a winner and empty input none
    // Verified by filtering non-positive scores
    #[test]
    fn test_select_best_negative_and_empty() {
        let best = select_best([
            ScoredCandidate { pin: 1, improvement: -3.0 },
            ScoredCandidate { pin: 4, improvement: -1.0 },
        ]);
        assert_eq!(best.map(|c| c.pin), Some(4));
        assert!(select_best(Vec::<ScoredCandidate>::new()).is_none());
    }
}
