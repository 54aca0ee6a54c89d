//! ScoringEngine - snapshot in, credit report out

use blendscore_common::{
    CreditFactor, CreditGrade, CreditScoreReport, OnChainActivitySnapshot, RiskLevel,
    MAX_CREDIT_SCORE,
};
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use crate::benefits::derive_benefits;
use crate::factors;

/// Stateless multi-factor credit scorer
///
/// Holds no cross-call state, so one engine can score any number of
/// wallets from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score a snapshot
    ///
    /// Never fails: inconsistent inputs are clamped and logged.
    #[instrument(skip(self, snapshot), fields(wallet = %snapshot.wallet_address))]
    pub fn compute_score(&self, snapshot: &OnChainActivitySnapshot) -> CreditScoreReport {
        if let Err(issue) = snapshot.validate() {
            warn!(%issue, "Scoring inconsistent snapshot with clamped inputs");
        }

        let factors = self.score_factors(snapshot);
        let raw_total: f64 = factors.iter().map(|f| f.score).sum();
        let total_score = round_total(raw_total);

        let grade = CreditGrade::from_score(total_score);
        let risk_level = RiskLevel::from_score(total_score);
        let benefits = derive_benefits(total_score);
        let recommendations = factors
            .iter()
            .flat_map(|f| f.improvements.iter().cloned())
            .collect();

        info!(total_score, %grade, raw_total, "Computed credit score");

        CreditScoreReport {
            wallet_address: snapshot.wallet_address.clone(),
            total_score,
            grade,
            factors,
            benefits,
            risk_level,
            recommendations,
            last_updated: Utc::now(),
        }
    }

    /// Evaluate the seven factors in fixed order
    pub fn score_factors(&self, snapshot: &OnChainActivitySnapshot) -> Vec<CreditFactor> {
        let factors = vec![
            factors::wallet_age(snapshot.wallet_age_months),
            factors::transaction_history(snapshot.total_transaction_count),
            factors::repayment_history(&snapshot.repayment),
            factors::collateralization(&snapshot.collateralization),
            factors::liquidation_history(&snapshot.liquidation),
            factors::asset_diversity(&snapshot.asset_diversity),
            factors::loan_activity(&snapshot.loan_activity),
        ];

        for factor in &factors {
            debug!(
                factor = %factor.id,
                score = factor.score,
                max = factor.max_score,
                status = ?factor.status,
                "Scored factor"
            );
        }

        factors
    }
}

/// Round to the nearest point and clamp into [0, 1000]
fn round_total(raw_total: f64) -> u16 {
    if !raw_total.is_finite() {
        return 0;
    }
    raw_total.round().clamp(0.0, MAX_CREDIT_SCORE as f64) as u16
}
