//! Ranked improvement recommendations
//!
//! One recommendation per factor sitting below 80% of its max, ordered by
//! the points it could realistically recover.

use blendscore_common::{CreditFactor, CreditScoreReport, FactorId};
use serde::{Deserialize, Serialize};

/// Factors at or above this percentage of max get no recommendation
pub const RECOMMENDATION_CUTOFF_PERCENT: f64 = 80.0;

/// Share of a factor's max that one recommendation can claim to recover
pub const MAX_IMPACT_FRACTION: f64 = 0.3;

/// Urgency of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// HIGH below 40%, MEDIUM below 70%, LOW otherwise
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 40.0 {
            Priority::High
        } else if percentage < 70.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// How hard a factor is to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub fn for_factor(id: FactorId) -> Self {
        match id {
            FactorId::WalletAge | FactorId::LiquidationHistory => Effort::High,
            FactorId::RepaymentHistory | FactorId::Collateralization => Effort::Low,
            FactorId::TransactionHistory | FactorId::AssetDiversity | FactorId::LoanActivity => {
                Effort::Medium
            }
        }
    }
}

/// Advice for one under-performing factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// `<factor>_recommendation`
    pub id: String,
    /// Factor display name
    pub factor: String,
    pub priority: Priority,
    /// Estimated recoverable points
    pub impact: u32,
    pub effort: Effort,
    pub timeframe: String,
    pub description: String,
    pub action_items: Vec<String>,
}

impl Recommendation {
    /// Build the recommendation for a factor at `percentage` of its max
    pub fn for_factor(factor: &CreditFactor, percentage: f64) -> Self {
        let (description, action_items) = guidance(factor.id);
        Self {
            id: format!("{}_recommendation", factor.id),
            factor: factor.name.clone(),
            priority: Priority::from_percentage(percentage),
            impact: impact(factor),
            effort: Effort::for_factor(factor.id),
            timeframe: timeframe(factor.id).to_string(),
            description: description.to_string(),
            action_items: action_items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Recommendations for every factor below the cutoff, highest impact first
///
/// Ties keep factor order.
pub fn recommendations(report: &CreditScoreReport) -> Vec<Recommendation> {
    let mut recs: Vec<Recommendation> = report
        .factors
        .iter()
        .filter_map(|factor| {
            let percentage = factor.ratio() * 100.0;
            (percentage < RECOMMENDATION_CUTOFF_PERCENT)
                .then(|| Recommendation::for_factor(factor, percentage))
        })
        .collect();

    recs.sort_by(|a, b| b.impact.cmp(&a.impact));
    recs
}

/// `round(min(max − score, 0.3 × max))`
fn impact(factor: &CreditFactor) -> u32 {
    let gain = (factor.max_score - factor.score).min(factor.max_score * MAX_IMPACT_FRACTION);
    gain.max(0.0).round() as u32
}

fn timeframe(id: FactorId) -> &'static str {
    match id {
        FactorId::WalletAge => "6-12 months",
        FactorId::TransactionHistory => "2-3 months",
        FactorId::RepaymentHistory => "1-2 months",
        FactorId::Collateralization => "1 month",
        FactorId::LiquidationHistory => "6+ months",
        FactorId::AssetDiversity => "2-4 weeks",
        FactorId::LoanActivity => "2-3 months",
    }
}

fn guidance(id: FactorId) -> (&'static str, &'static [&'static str]) {
    match id {
        FactorId::WalletAge => (
            "Wallet age builds with time. Keep using the same wallet to grow this factor.",
            &[
                "Keep the wallet active with regular transactions",
                "Avoid moving to fresh wallets",
            ],
        ),
        FactorId::TransactionHistory => (
            "More on-chain activity raises the transaction history score.",
            &[
                "Transact on DeFi protocols regularly",
                "Use a range of protocols and features",
                "Keep activity steady month to month",
            ],
        ),
        FactorId::RepaymentHistory => (
            "Repayment history carries the most weight. Repay every loan on time.",
            &[
                "Set repayment reminders",
                "Never miss a loan payment",
                "Repay early when possible",
                "Enable automatic repayment where offered",
            ],
        ),
        FactorId::Collateralization => (
            "Higher and steadier collateralization ratios raise this score.",
            &[
                "Keep collateral ratios above 150%",
                "Top up collateral before ratios fall",
                "Check positions daily",
                "Configure liquidation alerts",
            ],
        ),
        FactorId::LiquidationHistory => (
            "Liquidations weigh heavily on the score and take months to recover from.",
            &[
                "Watch collateral ratios closely",
                "Add collateral when ratios drop",
                "Use stop-loss strategies",
                "Hold an emergency reserve",
            ],
        ),
        FactorId::AssetDiversity => (
            "Spreading holdings across assets and protocols lowers concentration risk.",
            &[
                "Hold 5 or more assets",
                "Use 3 or more protocols",
                "Cut single-asset concentration",
                "Try new DeFi venues",
            ],
        ),
        FactorId::LoanActivity => (
            "Regular borrowing with sensible loan sizes raises this score.",
            &[
                "Take 1-2 loans per month",
                "Grow loan sizes gradually",
                "Keep a consistent borrowing rhythm",
                "Put borrowed funds to productive use",
            ],
        ),
    }
}
