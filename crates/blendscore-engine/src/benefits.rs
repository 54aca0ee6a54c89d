//! Benefits derivation: score → LTV, discount, borrow ceiling, buffer

use blendscore_common::{
    CreditBenefits, BORROW_PER_SCORE_POINT, MAX_CREDIT_SCORE, PRIORITY_ACCESS_THRESHOLD,
};

/// Base LTV granted to every wallet (percent)
pub const BASE_LTV_PERCENT: f64 = 50.0;

/// LTV earned across the full score range (percent)
pub const LTV_RANGE_PERCENT: f64 = 40.0;

/// Hard LTV ceiling (percent)
pub const MAX_LTV_PERCENT: f64 = 90.0;

/// Interest discount at a perfect score (percent)
pub const MAX_RATE_DISCOUNT_PERCENT: f64 = 3.0;

/// Liquidation buffer granted to every wallet (percent)
pub const BASE_LIQUIDATION_BUFFER_PERCENT: f64 = 10.0;

/// Derive benefits from a rounded total score
///
/// Every field is monotonically non-decreasing in the score.
pub fn derive_benefits(total_score: u16) -> CreditBenefits {
    let total_score = total_score.min(MAX_CREDIT_SCORE);
    let score_ratio = total_score as f64 / MAX_CREDIT_SCORE as f64;

    CreditBenefits {
        max_ltv: (BASE_LTV_PERCENT + score_ratio * LTV_RANGE_PERCENT).min(MAX_LTV_PERCENT),
        interest_rate_discount: score_ratio * MAX_RATE_DISCOUNT_PERCENT,
        max_borrow_amount: total_score as f64 * BORROW_PER_SCORE_POINT,
        priority_access: total_score >= PRIORITY_ACCESS_THRESHOLD,
        liquidation_buffer: BASE_LIQUIDATION_BUFFER_PERCENT
            + score_ratio * BASE_LIQUIDATION_BUFFER_PERCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_benefits() {
        let benefits = derive_benefits(0);
        assert_eq!(benefits.max_ltv, 50.0);
        assert_eq!(benefits.interest_rate_discount, 0.0);
        assert_eq!(benefits.max_borrow_amount, 0.0);
        assert!(!benefits.priority_access);
        assert_eq!(benefits.liquidation_buffer, 10.0);
    }

    #[test]
    fn test_perfect_score_benefits() {
        let benefits = derive_benefits(1000);
        assert_eq!(benefits.max_ltv, 90.0);
        assert_eq!(benefits.interest_rate_discount, 3.0);
        assert_eq!(benefits.max_borrow_amount, 100_000.0);
        assert!(benefits.priority_access);
        assert_eq!(benefits.liquidation_buffer, 20.0);
    }

    #[test]
    fn test_priority_access_threshold() {
        assert!(!derive_benefits(699).priority_access);
        assert!(derive_benefits(700).priority_access);
    }

    #[test]
    fn test_mid_score_benefits() {
        let benefits = derive_benefits(784);
        assert!((benefits.max_ltv - 81.36).abs() < 1e-9);
        assert!((benefits.interest_rate_discount - 2.352).abs() < 1e-9);
        assert_eq!(benefits.max_borrow_amount, 78_400.0);
        assert!((benefits.liquidation_buffer - 17.84).abs() < 1e-9);
    }

    #[test]
    fn test_benefits_monotonic() {
        let mut previous = derive_benefits(0);
        for score in 1..=1000u16 {
            let current = derive_benefits(score);
            assert!(current.max_ltv >= previous.max_ltv);
            assert!(current.interest_rate_discount >= previous.interest_rate_discount);
            assert!(current.max_borrow_amount >= previous.max_borrow_amount);
            assert!(current.liquidation_buffer >= previous.liquidation_buffer);
            assert!(current.priority_access >= previous.priority_access);
            previous = current;
        }
    }
}
