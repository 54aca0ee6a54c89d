//! Repayment history factor (200 points, the heaviest)

use blendscore_common::{CreditFactor, FactorDetail, FactorId, RepaymentHistory};

/// Points deducted per unit of late-payment rate
pub const LATE_PENALTY: f64 = 30.0;

/// Points deducted per unit of missed-payment rate
pub const MISSED_PENALTY: f64 = 80.0;

/// `onTimeRate × 200 − lateRate × 30 − missedRate × 80`, floored at zero
///
/// A wallet with no loans scores zero, and its status follows the ratio like
/// every other factor (VERY_POOR, not a fixed POOR). Rates are capped at 1 when a
/// producer reports more outcomes than loans.
pub fn repayment_history(history: &RepaymentHistory) -> CreditFactor {
    let id = FactorId::RepaymentHistory;

    if history.total_loans == 0 {
        return CreditFactor::new(
            id,
            0.0,
            FactorDetail::Repayment {
                total_loans: 0,
                on_time_rate: 0.0,
                late_rate: 0.0,
                missed_rate: 0.0,
            },
            vec!["Start using Blend protocol to build repayment history".to_string()],
        );
    }

    let total = history.total_loans as f64;
    let on_time_rate = (history.on_time_payments as f64 / total).min(1.0);
    let late_rate = (history.late_payments as f64 / total).min(1.0);
    let missed_rate = (history.missed_payments as f64 / total).min(1.0);

    let score = (on_time_rate * id.max_score() - late_rate * LATE_PENALTY
        - missed_rate * MISSED_PENALTY)
        .max(0.0);

    let mut improvements = Vec::new();
    if on_time_rate < 0.9 {
        improvements.push("Improve on-time payment rate".to_string());
    }
    if history.late_payments > 0 {
        improvements.push("Avoid late payments".to_string());
    }
    if history.missed_payments > 0 {
        improvements.push("Never miss loan payments".to_string());
    }

    CreditFactor::new(
        id,
        score,
        FactorDetail::Repayment {
            total_loans: history.total_loans,
            on_time_rate,
            late_rate,
            missed_rate,
        },
        improvements,
    )
}
