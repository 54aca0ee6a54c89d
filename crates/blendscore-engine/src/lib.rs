//! # ScoringEngine
//!
//! Deterministic multi-factor credit scoring for Blend Protocol borrowers.
//!
//! ## Score Formula
//!
//! ```text
//! total = round(Σ factor.score)        clamped to [0, 1000]
//! ```
//!
//! | factor              | max | weight |
//! |---------------------|-----|--------|
//! | wallet_age          | 120 | 12%    |
//! | transaction_history | 150 | 15%    |
//! | repayment_history   | 200 | 20%    |
//! | collateralization   | 150 | 15%    |
//! | liquidation_history | 100 | 10%    |
//! | asset_diversity     | 100 | 10%    |
//! | loan_activity       |  80 |  8%    |
//!
//! ## Grades
//!
//! 850+ EXCELLENT, 700+ GOOD, 550+ FAIR, 400+ POOR, else VERY_POOR.

pub mod benefits;
pub mod engine;
pub mod factors;

pub use benefits::derive_benefits;
pub use engine::ScoringEngine;

#[cfg(test)]
mod properties {
    use super::*;
    use blendscore_common::{
        AssetDiversity, CollateralizationHistory, CreditGrade, LiquidationHistory, LoanActivity,
        MonthlyRatio, OnChainActivitySnapshot, RepaymentHistory, MAX_CREDIT_SCORE,
    };
    use proptest::prelude::*;

    prop_compose! {
        fn arb_repayment()(
            total_loans in 0u32..200,
            on_time in 0u32..200,
            late in 0u32..50,
            missed in 0u32..50,
        ) -> RepaymentHistory {
            RepaymentHistory {
                total_loans,
                on_time_payments: on_time,
                late_payments: late,
                missed_payments: missed,
            }
        }
    }

    prop_compose! {
        fn arb_collateralization()(
            ratio in 0.0f64..6.0,
            series in prop::collection::vec(0.0f64..6.0, 0..24),
            risk_events in 0u32..15,
        ) -> CollateralizationHistory {
            CollateralizationHistory {
                time_weighted_average_ratio: ratio,
                monthly_series: series.into_iter().map(MonthlyRatio::new).collect(),
                risk_event_count: risk_events,
            }
        }
    }

    prop_compose! {
        fn arb_liquidation()(
            total in 0u32..10,
            recent in 0u32..10,
            large in 0u32..10,
        ) -> LiquidationHistory {
            LiquidationHistory {
                total_liquidations: total,
                recent_liquidations: recent,
                large_liquidation_events: large,
            }
        }
    }

    prop_compose! {
        fn arb_diversity()(
            assets in 0u32..30,
            protocols in 0u32..12,
            concentration in 0.0f64..=1.0,
        ) -> AssetDiversity {
            AssetDiversity {
                unique_asset_count: assets,
                unique_protocol_count: protocols,
                concentration_risk: concentration,
            }
        }
    }

    prop_compose! {
        fn arb_loan_activity()(
            loans in 0u32..200,
            size in 0.0f64..1_000_000.0,
            frequency in 0.0f64..6.0,
        ) -> LoanActivity {
            LoanActivity {
                total_loans: loans,
                average_loan_size: size,
                monthly_loan_frequency: frequency,
            }
        }
    }

    prop_compose! {
        fn arb_snapshot()(
            age in 0u32..400,
            tx in 0u64..2_000_000,
            repayment in arb_repayment(),
            collateralization in arb_collateralization(),
            liquidation in arb_liquidation(),
            asset_diversity in arb_diversity(),
            loan_activity in arb_loan_activity(),
        ) -> OnChainActivitySnapshot {
            OnChainActivitySnapshot {
                wallet_address: "GPROP".to_string(),
                wallet_age_months: age,
                total_transaction_count: tx,
                repayment,
                collateralization,
                liquidation,
                asset_diversity,
                loan_activity,
            }
        }
    }

    proptest! {
        #[test]
        fn total_is_bounded_rounded_sum(snapshot in arb_snapshot()) {
            let report = ScoringEngine::new().compute_score(&snapshot);
            prop_assert!(report.total_score <= MAX_CREDIT_SCORE);
            prop_assert_eq!(report.total_score as f64, report.raw_total().round());
            prop_assert_eq!(report.factors.len(), 7);
            for factor in &report.factors {
                prop_assert!(factor.score >= 0.0);
                prop_assert!(factor.score <= factor.max_score);
            }
        }

        #[test]
        fn grade_and_benefits_follow_total(snapshot in arb_snapshot()) {
            let report = ScoringEngine::new().compute_score(&snapshot);
            prop_assert_eq!(report.grade, CreditGrade::from_score(report.total_score));
            prop_assert_eq!(report.benefits.clone(), derive_benefits(report.total_score));
            prop_assert!(report.benefits.max_ltv >= 50.0 && report.benefits.max_ltv <= 90.0);
            prop_assert!(report.benefits.liquidation_buffer >= 10.0);
            prop_assert!(report.benefits.liquidation_buffer <= 20.0);
        }

        #[test]
        fn recommendations_flatten_improvements(snapshot in arb_snapshot()) {
            let report = ScoringEngine::new().compute_score(&snapshot);
            let expected: Vec<String> = report
                .factors
                .iter()
                .flat_map(|f| f.improvements.clone())
                .collect();
            prop_assert_eq!(report.recommendations, expected);
        }
    }
}
