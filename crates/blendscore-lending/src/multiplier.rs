//! Credit multiplier: piecewise-linear in the total score
//!
//! ```text
//! score >= 850        1.3
//! [700, 850)          1.0 → 1.3
//! [550, 700)          0.9 → 1.0
//! [400, 550)          0.8 → 0.9
//! below 400           0.7 + (score − 300) × 0.001   (0.4 at score 0)
//! ```
//!
//! Continuous at every breakpoint and always positive.

/// Scalar applied to base pool parameters before grade caps
pub fn credit_multiplier(total_score: u16) -> f64 {
    let score = total_score as f64;
    if score >= 850.0 {
        1.3
    } else if score >= 700.0 {
        1.0 + (score - 700.0) * 0.3 / 150.0
    } else if score >= 550.0 {
        0.9 + (score - 550.0) * 0.1 / 150.0
    } else if score >= 400.0 {
        0.8 + (score - 400.0) * 0.1 / 150.0
    } else {
        0.7 + (score - 300.0) * 0.1 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_breakpoint_values() {
        assert!((credit_multiplier(0) - 0.4).abs() < 1e-12);
        assert!((credit_multiplier(300) - 0.7).abs() < 1e-12);
        assert!((credit_multiplier(400) - 0.8).abs() < 1e-12);
        assert!((credit_multiplier(550) - 0.9).abs() < 1e-12);
        assert!((credit_multiplier(700) - 1.0).abs() < 1e-12);
        assert!((credit_multiplier(850) - 1.3).abs() < 1e-12);
        assert!((credit_multiplier(1000) - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_continuous_at_breakpoints() {
        // Left-hand formula evaluated at the breakpoint equals the right-hand value
        let left_700 = 0.9 + (700.0 - 550.0) * 0.1 / 150.0;
        let left_550 = 0.8 + (550.0 - 400.0) * 0.1 / 150.0;
        let left_400 = 0.7 + (400.0 - 300.0) * 0.1 / 100.0;
        let left_850 = 1.0 + (850.0 - 700.0) * 0.3 / 150.0;
        assert!((left_700 - credit_multiplier(700)).abs() < 1e-12);
        assert!((left_550 - credit_multiplier(550)).abs() < 1e-12);
        assert!((left_400 - credit_multiplier(400)).abs() < 1e-12);
        assert!((left_850 - credit_multiplier(850)).abs() < 1e-12);
    }

    #[test]
    fn test_interpolation() {
        assert!((credit_multiplier(784) - 1.168).abs() < 1e-12);
        // 0.7 − 170 × 0.001
        assert!((credit_multiplier(130) - 0.53).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_over_full_range() {
        let mut previous = credit_multiplier(0);
        for score in 1..=1000u16 {
            let current = credit_multiplier(score);
            assert!(current >= previous - 1e-12, "drop at score {}", score);
            previous = current;
        }
    }

    proptest! {
        #[test]
        fn multiplier_always_positive(score in 0u16..=1000) {
            prop_assert!(credit_multiplier(score) > 0.0);
        }
    }
}
