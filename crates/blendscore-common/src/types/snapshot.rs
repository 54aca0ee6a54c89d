//! OnChainActivitySnapshot - Per-wallet activity consumed by the scoring engine
//!
//! Snapshots are produced by an external data collector (Horizon/RPC indexer)
//! once per request and never mutated. The engine clamps rather than rejects
//! malformed values; [`OnChainActivitySnapshot::validate`] is available to
//! producers that want to catch inconsistencies before scoring.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Liquidations above this amount (currency units) count as large events
pub const LARGE_LIQUIDATION_AMOUNT: f64 = 10_000.0;

/// Blend repayment record counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentHistory {
    pub total_loans: u32,
    pub on_time_payments: u32,
    pub late_payments: u32,
    pub missed_payments: u32,
}

impl RepaymentHistory {
    /// Sum of all recorded repayment outcomes
    pub fn recorded(&self) -> u64 {
        self.on_time_payments as u64 + self.late_payments as u64 + self.missed_payments as u64
    }
}

/// One month of collateralization history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRatio {
    /// Month label (e.g. "2024-03"), informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    /// Average collateralization ratio for the month
    pub ratio: f64,
}

impl MonthlyRatio {
    pub fn new(ratio: f64) -> Self {
        Self { month: None, ratio }
    }
}

/// Collateralization ratios over the wallet's borrowing lifetime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollateralizationHistory {
    /// Time-weighted average collateral/debt ratio (2.0 = 200%)
    pub time_weighted_average_ratio: f64,
    /// Ordered monthly averages, oldest first
    #[serde(default)]
    pub monthly_series: Vec<MonthlyRatio>,
    /// Near-liquidation, margin call, or forced liquidation events
    #[serde(default)]
    pub risk_event_count: u32,
}

/// Liquidation counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationHistory {
    pub total_liquidations: u32,
    /// Liquidations in the last 6 months
    pub recent_liquidations: u32,
    /// Events with amount above [`LARGE_LIQUIDATION_AMOUNT`]
    pub large_liquidation_events: u32,
}

impl LiquidationHistory {
    /// Build from raw liquidation amounts, counting the large ones
    pub fn from_amounts(total: u32, recent: u32, amounts: &[f64]) -> Self {
        let large = amounts
            .iter()
            .filter(|amount| **amount > LARGE_LIQUIDATION_AMOUNT)
            .count();
        Self {
            total_liquidations: total,
            recent_liquidations: recent,
            large_liquidation_events: large.min(u32::MAX as usize) as u32,
        }
    }
}

/// Asset and protocol spread
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDiversity {
    pub unique_asset_count: u32,
    pub unique_protocol_count: u32,
    /// Share held in the dominant position (0.0 - 1.0)
    pub concentration_risk: f64,
}

/// Borrowing pattern
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanActivity {
    pub total_loans: u32,
    /// Average loan size in currency units
    pub average_loan_size: f64,
    /// Loans per month
    pub monthly_loan_frequency: f64,
}

/// Complete on-chain activity snapshot for one wallet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnChainActivitySnapshot {
    /// Opaque wallet identifier (Stellar G... address)
    pub wallet_address: String,
    /// Months since first observed activity
    pub wallet_age_months: u32,
    pub total_transaction_count: u64,
    pub repayment: RepaymentHistory,
    pub collateralization: CollateralizationHistory,
    pub liquidation: LiquidationHistory,
    pub asset_diversity: AssetDiversity,
    pub loan_activity: LoanActivity,
}

impl OnChainActivitySnapshot {
    /// Create an empty snapshot for a wallet with no recorded activity
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            ..Default::default()
        }
    }

    /// Check the snapshot for values the engine would have to clamp
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.wallet_address.trim().is_empty() {
            return Err(SnapshotError::EmptyWalletAddress);
        }

        let recorded = self.repayment.recorded();
        if recorded > self.repayment.total_loans as u64 {
            return Err(SnapshotError::RepaymentCountsExceedLoans {
                recorded,
                total_loans: self.repayment.total_loans,
            });
        }

        if self.liquidation.recent_liquidations > self.liquidation.total_liquidations {
            return Err(SnapshotError::RecentLiquidationsExceedTotal {
                recent: self.liquidation.recent_liquidations,
                total: self.liquidation.total_liquidations,
            });
        }

        non_negative(
            "collateralization.timeWeightedAverageRatio",
            self.collateralization.time_weighted_average_ratio,
        )?;
        for month in &self.collateralization.monthly_series {
            non_negative("collateralization.monthlySeries.ratio", month.ratio)?;
        }
        non_negative("loanActivity.averageLoanSize", self.loan_activity.average_loan_size)?;
        non_negative(
            "loanActivity.monthlyLoanFrequency",
            self.loan_activity.monthly_loan_frequency,
        )?;

        let concentration = self.asset_diversity.concentration_risk;
        if !concentration.is_finite() {
            return Err(SnapshotError::NonFinite {
                field: "assetDiversity.concentrationRisk",
            });
        }
        if !(0.0..=1.0).contains(&concentration) {
            return Err(SnapshotError::OutOfRange {
                field: "assetDiversity.concentrationRisk",
                value: concentration,
                min: 0.0,
                max: 1.0,
            });
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if !value.is_finite() {
        return Err(SnapshotError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(SnapshotError::Negative { field, value });
    }
    Ok(())
}
