//! Personalized lending terms produced by the terms adjuster

use serde::{Deserialize, Serialize};

use super::grade::CreditGrade;

/// Reserve terms adjusted for one borrower's credit report
///
/// Ratios are fractions (0.8 = 80%), not percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedLendingTerms {
    #[serde(rename = "maxLTV")]
    pub max_ltv: f64,
    pub interest_rate: f64,
    pub liquidation_threshold: f64,
    pub max_borrow_amount: f64,
    /// Scalar applied to base parameters before grade caps
    pub credit_multiplier: f64,
}

/// Terms plus the report flags a UI shows next to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingTermsSummary {
    #[serde(flatten)]
    pub terms: PersonalizedLendingTerms,
    pub priority_access: bool,
    pub credit_grade: CreditGrade,
}
