//! Integration Tests for BlendScore
//!
//! End-to-end flows across the workspace:
//! - Snapshot JSON → ScoringEngine → CreditScoreReport
//! - Report → LendingTermsAdjuster → personalized terms
//! - Report → Advisor

use blendscore::advisor::{Advice, Priority};
use blendscore::common::{
    AssetDiversity, CollateralizationHistory, CreditGrade, FactorId, FactorStatus,
    LiquidationHistory, LoanActivity, OnChainActivitySnapshot, RepaymentHistory, RiskLevel,
};
use blendscore::{LendingTermsAdjuster, PoolReserve, ScoringEngine};

fn strong_snapshot() -> OnChainActivitySnapshot {
    OnChainActivitySnapshot {
        wallet_address: "GSTRONG".to_string(),
        wallet_age_months: 36,
        total_transaction_count: 500,
        repayment: RepaymentHistory {
            total_loans: 20,
            on_time_payments: 20,
            late_payments: 0,
            missed_payments: 0,
        },
        collateralization: CollateralizationHistory {
            time_weighted_average_ratio: 2.5,
            monthly_series: vec![],
            risk_event_count: 0,
        },
        liquidation: LiquidationHistory::default(),
        asset_diversity: AssetDiversity {
            unique_asset_count: 10,
            unique_protocol_count: 5,
            concentration_risk: 0.0,
        },
        loan_activity: LoanActivity {
            total_loans: 20,
            average_loan_size: 10_000.0,
            monthly_loan_frequency: 1.5,
        },
    }
}

fn best_snapshot() -> OnChainActivitySnapshot {
    let mut snapshot = strong_snapshot();
    snapshot.wallet_address = "GBEST".to_string();
    snapshot.wallet_age_months = 60;
    snapshot.total_transaction_count = 9999;
    snapshot.loan_activity.average_loan_size = 99_999.0;
    snapshot
}

#[cfg(test)]
mod scoring_tests {
    use super::*;

    /// Snapshot producers send camelCase JSON
    #[test]
    fn test_score_from_json_snapshot() {
        let json = r#"{
            "walletAddress": "GSTRONG",
            "walletAgeMonths": 36,
            "totalTransactionCount": 500,
            "repayment": {
                "totalLoans": 20, "onTimePayments": 20, "latePayments": 0, "missedPayments": 0
            },
            "collateralization": { "timeWeightedAverageRatio": 2.5 },
            "liquidation": {
                "totalLiquidations": 0, "recentLiquidations": 0, "largeLiquidationEvents": 0
            },
            "assetDiversity": {
                "uniqueAssetCount": 10, "uniqueProtocolCount": 5, "concentrationRisk": 0.0
            },
            "loanActivity": {
                "totalLoans": 20, "averageLoanSize": 10000.0, "monthlyLoanFrequency": 1.5
            }
        }"#;

        let snapshot: OnChainActivitySnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot, strong_snapshot());

        let report = ScoringEngine::new().compute_score(&snapshot);
        assert_eq!(report.total_score, 784);
        assert_eq!(report.grade, CreditGrade::Good);
    }

    #[test]
    fn test_report_json_shape() {
        let report = ScoringEngine::new().compute_score(&strong_snapshot());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["walletAddress"], "GSTRONG");
        assert_eq!(json["grade"], "GOOD");
        assert_eq!(json["riskLevel"], "LOW");
        assert_eq!(json["factors"][0]["id"], "wallet_age");
        assert_eq!(json["factors"][2]["status"], "EXCELLENT");
        assert!(json["benefits"]["maxLTV"].is_number());
        assert!(json["lastUpdated"].is_string());

        let parsed: blendscore::CreditScoreReport = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_best_achievable_score() {
        let report = ScoringEngine::new().compute_score(&best_snapshot());

        // Diversity tops out at 90, so 890 is the ceiling
        assert_eq!(report.total_score, 890);
        assert_eq!(report.grade, CreditGrade::Excellent);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!((report.benefits.max_ltv - 85.6).abs() < 1e-9);
        assert!((report.factor(FactorId::AssetDiversity).unwrap().score - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_wallet() {
        let report = ScoringEngine::new().compute_score(&OnChainActivitySnapshot::new("GEMPTY"));

        // Collateral consistency bonus (30) plus clean liquidation history (100)
        assert_eq!(report.total_score, 130);
        assert_eq!(report.grade, CreditGrade::VeryPoor);
        assert_eq!(report.risk_level, RiskLevel::High);
        assert!(!report.benefits.priority_access);
        assert!((report.benefits.max_ltv - 55.2).abs() < 1e-9);
        assert_eq!(
            report.factor(FactorId::RepaymentHistory).unwrap().status,
            FactorStatus::VeryPoor
        );
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let engine = ScoringEngine::new();
        let snapshot = strong_snapshot();
        let first = engine.compute_score(&snapshot);
        let second = engine.compute_score(&snapshot);
        // Equality ignores lastUpdated
        assert_eq!(first, second);
    }

    #[test]
    fn test_inconsistent_snapshot_is_clamped() {
        let mut snapshot = strong_snapshot();
        snapshot.repayment.on_time_payments = 40;
        snapshot.collateralization.time_weighted_average_ratio = f64::NAN;
        snapshot.asset_diversity.concentration_risk = 4.0;
        assert!(snapshot.validate().is_err());

        let report = ScoringEngine::new().compute_score(&snapshot);
        assert!(report.total_score <= 1000);
        for factor in &report.factors {
            assert!(factor.score.is_finite());
            assert!(factor.score >= 0.0 && factor.score <= factor.max_score);
        }
    }
}

#[cfg(test)]
mod lending_tests {
    use super::*;

    #[test]
    fn test_good_borrower_terms() {
        let report = ScoringEngine::new().compute_score(&strong_snapshot());
        let adjuster = LendingTermsAdjuster::new(&report);

        let summary = adjuster.lending_terms_summary(Some(&PoolReserve::default()), 50_000.0);
        assert!((summary.terms.max_ltv - 0.85).abs() < 1e-12);
        assert!((summary.terms.interest_rate - 0.0765184).abs() < 1e-12);
        assert!((summary.terms.liquidation_threshold - 0.7225).abs() < 1e-12);
        assert!((summary.terms.max_borrow_amount - 42_500.0).abs() < 1e-6);
        assert!(summary.priority_access);
        assert_eq!(summary.credit_grade, CreditGrade::Good);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["creditGrade"], "GOOD");
        assert!(json["maxLTV"].is_number());
    }

    #[test]
    fn test_empty_wallet_pays_premium() {
        let report = ScoringEngine::new().compute_score(&OnChainActivitySnapshot::new("GEMPTY"));
        let adjuster = LendingTermsAdjuster::new(&report);

        assert!((adjuster.credit_multiplier() - 0.53).abs() < 1e-12);
        assert!((adjuster.personalized_max_ltv(0.8) - 0.3604).abs() < 1e-12);
        assert!((adjuster.personalized_interest_rate(0.08) - 0.082).abs() < 1e-12);
        assert!((adjuster.personalized_liquidation_threshold(0.85) - 0.90).abs() < 1e-12);
        assert!(!adjuster.check_under_collateralized_lending(1_000.0, 0.0).qualifies);
    }

    #[test]
    fn test_better_score_better_terms() {
        let engine = ScoringEngine::new();
        let reports = [
            engine.compute_score(&OnChainActivitySnapshot::new("GEMPTY")),
            engine.compute_score(&strong_snapshot()),
            engine.compute_score(&best_snapshot()),
        ];
        let reserve = PoolReserve::default();
        let terms: Vec<_> = reports
            .iter()
            .map(|r| LendingTermsAdjuster::new(r).personalized_lending_terms(&reserve, 1_000_000.0))
            .collect();

        for pair in terms.windows(2) {
            assert!(pair[1].max_ltv > pair[0].max_ltv);
            assert!(pair[1].interest_rate < pair[0].interest_rate);
            assert!(pair[1].liquidation_threshold < pair[0].liquidation_threshold);
            assert!(pair[1].max_borrow_amount > pair[0].max_borrow_amount);
        }
    }
}

#[cfg(test)]
mod advisor_tests {
    use super::*;

    #[test]
    fn test_strong_wallet_advice() {
        let report = ScoringEngine::new().compute_score(&strong_snapshot());
        let advice = Advice::for_report(&report);

        // Wallet age (60%) and transaction history (67.5%) fall below 80%
        let ids: Vec<&str> = advice.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["transaction_history_recommendation", "wallet_age_recommendation"]
        );
        assert!(advice
            .recommendations
            .iter()
            .all(|r| r.priority == Priority::Medium));
        assert!(advice.simulations.is_empty());
        assert!(advice.explanation.contains("784"));
    }

    #[test]
    fn test_empty_wallet_advice() {
        let report = ScoringEngine::new().compute_score(&OnChainActivitySnapshot::new("GEMPTY"));
        let advice = Advice::for_report(&report);

        assert_eq!(advice.recommendations.len(), 6);
        assert_eq!(advice.simulations.len(), 4);
        assert!(advice
            .simulations
            .iter()
            .all(|s| s.projected_score == report.total_score + s.score_delta));
    }
}
