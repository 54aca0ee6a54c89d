//! Liquidation history factor

use blendscore_common::{CreditFactor, FactorDetail, FactorId, LiquidationHistory};

/// Points per liquidation of any age
pub const LIQUIDATION_PENALTY: f64 = 20.0;

/// Additional points per liquidation in the last 6 months
pub const RECENT_LIQUIDATION_PENALTY: f64 = 40.0;

/// Additional points per liquidation above 10,000
pub const LARGE_LIQUIDATION_PENALTY: f64 = 30.0;

/// Starts at 100 and deducts per liquidation, floored at zero
pub fn liquidation_history(history: &LiquidationHistory) -> CreditFactor {
    let id = FactorId::LiquidationHistory;

    let score = id.max_score()
        - history.total_liquidations as f64 * LIQUIDATION_PENALTY
        - history.recent_liquidations as f64 * RECENT_LIQUIDATION_PENALTY
        - history.large_liquidation_events as f64 * LARGE_LIQUIDATION_PENALTY;

    let mut improvements = Vec::new();
    if history.total_liquidations > 0 {
        improvements.push("Avoid liquidations by maintaining adequate collateral".to_string());
    }
    if history.recent_liquidations > 0 {
        improvements.push("Recent liquidations significantly impact your score".to_string());
    }

    CreditFactor::new(
        id,
        score.max(0.0),
        FactorDetail::Liquidation {
            total: history.total_liquidations,
            recent: history.recent_liquidations,
            large_events: history.large_liquidation_events,
        },
        improvements,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_history() {
        let factor = liquidation_history(&LiquidationHistory::default());
        assert_eq!(factor.score, 100.0);
        assert!(factor.improvements.is_empty());
    }

    #[test]
    fn test_single_old_liquidation() {
        let factor = liquidation_history(&LiquidationHistory {
            total_liquidations: 1,
            recent_liquidations: 0,
            large_liquidation_events: 0,
        });
        assert_eq!(factor.score, 80.0);
        assert_eq!(factor.improvements.len(), 1);
    }

    #[test]
    fn test_recent_large_liquidation() {
        // 100 − 20 − 40 − 30
        let factor = liquidation_history(&LiquidationHistory {
            total_liquidations: 1,
            recent_liquidations: 1,
            large_liquidation_events: 1,
        });
        assert_eq!(factor.score, 10.0);
        assert_eq!(factor.improvements.len(), 2);
    }

    #[test]
    fn test_floor_at_zero() {
        let factor = liquidation_history(&LiquidationHistory {
            total_liquidations: 6,
            recent_liquidations: 2,
            large_liquidation_events: 3,
        });
        assert_eq!(factor.score, 0.0);
    }
}
