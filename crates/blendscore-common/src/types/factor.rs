//! Credit factors - the seven weighted components of a credit score
//!
//! Max scores sum to 900; display weights sum to 90.

use serde::{Deserialize, Serialize};

use super::grade::FactorStatus;

/// Fixed factor identifiers, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorId {
    WalletAge,
    TransactionHistory,
    RepaymentHistory,
    Collateralization,
    LiquidationHistory,
    AssetDiversity,
    LoanActivity,
}

impl FactorId {
    /// All factors in evaluation order
    pub const ALL: [FactorId; 7] = [
        FactorId::WalletAge,
        FactorId::TransactionHistory,
        FactorId::RepaymentHistory,
        FactorId::Collateralization,
        FactorId::LiquidationHistory,
        FactorId::AssetDiversity,
        FactorId::LoanActivity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorId::WalletAge => "wallet_age",
            FactorId::TransactionHistory => "transaction_history",
            FactorId::RepaymentHistory => "repayment_history",
            FactorId::Collateralization => "collateralization",
            FactorId::LiquidationHistory => "liquidation_history",
            FactorId::AssetDiversity => "asset_diversity",
            FactorId::LoanActivity => "loan_activity",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            FactorId::WalletAge => "Wallet Age",
            FactorId::TransactionHistory => "Transaction History",
            FactorId::RepaymentHistory => "Repayment History",
            FactorId::Collateralization => "Collateralization Management",
            FactorId::LiquidationHistory => "Liquidation History",
            FactorId::AssetDiversity => "Asset Diversity",
            FactorId::LoanActivity => "Loan Activity Pattern",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FactorId::WalletAge => "Length of time since your first on-chain transaction",
            FactorId::TransactionHistory => {
                "Total number of on-chain transactions with logarithmic scaling"
            }
            FactorId::RepaymentHistory => "Track record of loan repayments in Blend protocol",
            FactorId::Collateralization => {
                "Time-weighted average collateralization ratios and consistency"
            }
            FactorId::LiquidationHistory => {
                "History of liquidation events with severe penalties for recent occurrences"
            }
            FactorId::AssetDiversity => "Diversity of assets and protocols used",
            FactorId::LoanActivity => "Loan size and frequency patterns with logarithmic scaling",
        }
    }

    /// Maximum points this factor can contribute
    pub fn max_score(&self) -> f64 {
        match self {
            FactorId::WalletAge => 120.0,
            FactorId::TransactionHistory => 150.0,
            FactorId::RepaymentHistory => 200.0,
            FactorId::Collateralization => 150.0,
            FactorId::LiquidationHistory => 100.0,
            FactorId::AssetDiversity => 100.0,
            FactorId::LoanActivity => 80.0,
        }
    }

    /// Display weight in percent
    pub fn display_weight(&self) -> u8 {
        match self {
            FactorId::WalletAge => 12,
            FactorId::TransactionHistory => 15,
            FactorId::RepaymentHistory => 20,
            FactorId::Collateralization => 15,
            FactorId::LiquidationHistory => 10,
            FactorId::AssetDiversity => 10,
            FactorId::LoanActivity => 8,
        }
    }
}

impl std::fmt::Display for FactorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs that drove a factor's score, one shape per factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum FactorDetail {
    WalletAge {
        months: u32,
    },
    TransactionHistory {
        total_transactions: u64,
    },
    Repayment {
        total_loans: u32,
        on_time_rate: f64,
        late_rate: f64,
        missed_rate: f64,
    },
    Collateralization {
        time_weighted_average_ratio: f64,
        coefficient_of_variation: f64,
        risk_event_count: u32,
    },
    Liquidation {
        total: u32,
        recent: u32,
        large_events: u32,
    },
    AssetDiversity {
        unique_assets: u32,
        unique_protocols: u32,
        concentration_risk: f64,
    },
    LoanActivity {
        total_loans: u32,
        average_loan_size: f64,
        monthly_loan_frequency: f64,
    },
}

/// One scored factor of a credit report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditFactor {
    pub id: FactorId,
    pub name: String,
    pub description: String,
    /// 0 <= score <= max_score
    pub score: f64,
    pub max_score: f64,
    /// Display weight in percent
    pub weight: u8,
    pub status: FactorStatus,
    pub detail: FactorDetail,
    /// Suggestions, empty when the factor is strong
    pub improvements: Vec<String>,
}

impl CreditFactor {
    /// Build a factor, clamping the score into [0, max] and deriving status
    pub fn new(id: FactorId, score: f64, detail: FactorDetail, improvements: Vec<String>) -> Self {
        let max_score = id.max_score();
        let score = if score.is_finite() {
            score.clamp(0.0, max_score)
        } else {
            0.0
        };
        Self {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            score,
            max_score,
            weight: id.display_weight(),
            status: FactorStatus::from_ratio(score, max_score),
            detail,
            improvements,
        }
    }

    /// Share of the maximum achieved (0.0 - 1.0)
    #[inline]
    pub fn ratio(&self) -> f64 {
        if self.max_score > 0.0 {
            self.score / self.max_score
        } else {
            0.0
        }
    }
}
