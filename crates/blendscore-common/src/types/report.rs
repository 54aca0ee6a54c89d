//! CreditScoreReport - Output of the scoring engine
//!
//! A report is recomputed from scratch per request. Everything in it is a
//! pure function of the input snapshot except `last_updated`, which is
//! ignored by equality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::factor::{CreditFactor, FactorId};
use super::grade::{CreditGrade, RiskLevel};
use crate::MAX_CREDIT_SCORE;

/// Lending benefits derived from the total score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditBenefits {
    /// Maximum loan-to-value in percent (50 - 90)
    #[serde(rename = "maxLTV")]
    pub max_ltv: f64,
    /// Interest rate discount in percent (0 - 3)
    pub interest_rate_discount: f64,
    /// Borrow ceiling in currency units
    pub max_borrow_amount: f64,
    /// Early access to new lending opportunities
    pub priority_access: bool,
    /// Extra margin before liquidation in percent (10 - 20)
    pub liquidation_buffer: f64,
}

/// Complete credit score report for one wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditScoreReport {
    pub wallet_address: String,
    /// Rounded sum of factor scores (0 - 1000)
    pub total_score: u16,
    pub grade: CreditGrade,
    /// Seven factors in evaluation order
    pub factors: Vec<CreditFactor>,
    pub benefits: CreditBenefits,
    pub risk_level: RiskLevel,
    /// Every factor's improvements, flattened in factor order
    pub recommendations: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

impl CreditScoreReport {
    /// Look up a factor by id
    pub fn factor(&self, id: FactorId) -> Option<&CreditFactor> {
        self.factors.iter().find(|f| f.id == id)
    }

    /// Unrounded sum of factor scores
    pub fn raw_total(&self) -> f64 {
        self.factors.iter().map(|f| f.score).sum()
    }

    /// Normalized score (0.0 - 1.0)
    #[inline]
    pub fn score_ratio(&self) -> f64 {
        self.total_score as f64 / MAX_CREDIT_SCORE as f64
    }
}

impl PartialEq for CreditScoreReport {
    fn eq(&self, other: &Self) -> bool {
        self.wallet_address == other.wallet_address
            && self.total_score == other.total_score
            && self.grade == other.grade
            && self.factors == other.factors
            && self.benefits == other.benefits
            && self.risk_level == other.risk_level
            && self.recommendations == other.recommendations
    }
}

impl std::fmt::Display for CreditScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CreditScore({}/1000, {}, maxLTV={:.1}%, discount={:.2}%)",
            self.total_score, self.grade, self.benefits.max_ltv, self.benefits.interest_rate_discount
        )
    }
}
