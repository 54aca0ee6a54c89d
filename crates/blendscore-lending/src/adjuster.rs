//! LendingTermsAdjuster - personalizes reserve terms from a credit report

use blendscore_common::{
    CreditGrade, CreditScoreReport, LendingTermsSummary, PersonalizedLendingTerms,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::multiplier::credit_multiplier;
use crate::policy::GradePolicy;
use crate::reserve::PoolReserve;

/// Base LTV assumed for borrow limits and qualification checks
pub const STANDARD_BASE_LTV: f64 = 0.8;

/// Base borrow rate quoted in qualification checks
pub const STANDARD_BASE_RATE: f64 = 0.08;

/// Base liquidation threshold quoted in qualification checks
pub const STANDARD_LIQUIDATION_THRESHOLD: f64 = 0.85;

/// Utilization above which EXCELLENT borrowers get a scarcity discount
pub const HIGH_UTILIZATION: f64 = 0.9;

/// Scarcity discount for EXCELLENT borrowers in a high-utilization pool
pub const HIGH_UTILIZATION_DISCOUNT: f64 = 0.01;

/// FAIR borrowers need more than this score to borrow under-collateralized
pub const FAIR_UNDERCOLLATERALIZED_MIN_SCORE: u16 = 600;

/// Terms quoted with an under-collateralized lending check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotedTerms {
    pub interest_rate: f64,
    #[serde(rename = "maxLTV")]
    pub max_ltv: f64,
    pub liquidation_threshold: f64,
}

/// Result of an under-collateralized lending check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderCollateralizedAssessment {
    pub qualifies: bool,
    /// Collateral needed at the personalized LTV
    pub required_collateral: f64,
    /// The report's credit-based borrow ceiling
    pub credit_based_limit: f64,
    pub terms: QuotedTerms,
}

/// Applies grade-based adjustments to pool reserve parameters
///
/// Read-only view over a report; every method is a pure function of the
/// report and its arguments.
#[derive(Debug, Clone, Copy)]
pub struct LendingTermsAdjuster<'a> {
    report: &'a CreditScoreReport,
}

impl<'a> LendingTermsAdjuster<'a> {
    pub fn new(report: &'a CreditScoreReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &CreditScoreReport {
        self.report
    }

    fn policy(&self) -> &'static GradePolicy {
        GradePolicy::for_grade(self.report.grade)
    }

    /// Credit multiplier for the report's total score
    #[inline]
    pub fn credit_multiplier(&self) -> f64 {
        credit_multiplier(self.report.total_score)
    }

    /// `base × multiplier`, then the grade's scale and cap
    pub fn personalized_max_ltv(&self, base_ltv: f64) -> f64 {
        self.policy().cap_ltv(base_ltv * self.credit_multiplier())
    }

    /// Grade-specific discount (good grades) or premium (poor grades)
    pub fn personalized_interest_rate(&self, base_rate: f64) -> f64 {
        let discount = self.report.benefits.interest_rate_discount / 100.0;
        self.policy().rate.apply(base_rate, discount)
    }

    /// Lower threshold for good grades (more headroom), higher for poor grades
    pub fn personalized_liquidation_threshold(&self, base_threshold: f64) -> f64 {
        let buffer = self.report.benefits.liquidation_buffer / 100.0;
        self.policy().liquidation.apply(base_threshold, buffer)
    }

    /// Lesser of the collateral-based and credit-based ceilings
    pub fn personalized_max_borrow(&self, base_max_borrow: f64, collateral_value: f64) -> f64 {
        let collateral_based = collateral_value * self.personalized_max_ltv(STANDARD_BASE_LTV);
        let credit_based = self
            .report
            .benefits
            .max_borrow_amount
            .min(base_max_borrow * self.credit_multiplier());
        collateral_based.min(credit_based)
    }

    pub fn has_priority_access(&self) -> bool {
        self.report.benefits.priority_access
    }

    /// All four adjusted terms for one reserve
    pub fn personalized_lending_terms(
        &self,
        reserve: &PoolReserve,
        collateral_value: f64,
    ) -> PersonalizedLendingTerms {
        let terms = PersonalizedLendingTerms {
            max_ltv: self.personalized_max_ltv(reserve.base_ltv),
            interest_rate: self.personalized_interest_rate(reserve.base_interest_rate),
            liquidation_threshold: self
                .personalized_liquidation_threshold(reserve.base_liquidation_threshold),
            max_borrow_amount: self.personalized_max_borrow(reserve.base_max_borrow, collateral_value),
            credit_multiplier: self.credit_multiplier(),
        };

        debug!(
            grade = %self.report.grade,
            max_ltv = terms.max_ltv,
            interest_rate = terms.interest_rate,
            liquidation_threshold = terms.liquidation_threshold,
            max_borrow = terms.max_borrow_amount,
            "Personalized reserve terms"
        );

        terms
    }

    /// Terms plus display flags; standard bases when no reserve is given
    pub fn lending_terms_summary(
        &self,
        reserve: Option<&PoolReserve>,
        collateral_value: f64,
    ) -> LendingTermsSummary {
        let standard = PoolReserve::default();
        let reserve = reserve.unwrap_or(&standard);

        LendingTermsSummary {
            terms: self.personalized_lending_terms(reserve, collateral_value),
            priority_access: self.has_priority_access(),
            credit_grade: self.report.grade,
        }
    }

    /// Personalized rate with a scarcity discount for EXCELLENT borrowers
    ///
    /// Above 90% utilization EXCELLENT borrowers get 1 point off, never
    /// more than 5% of the personalized rate.
    pub fn dynamic_interest_rate(&self, utilization: f64, base_rate: f64) -> f64 {
        let personalized = self.personalized_interest_rate(base_rate);
        if utilization > HIGH_UTILIZATION {
            let discount = if self.report.grade == CreditGrade::Excellent {
                HIGH_UTILIZATION_DISCOUNT
            } else {
                0.0
            };
            return (personalized - discount).max(personalized * 0.95);
        }
        personalized
    }

    /// Whether the borrower may borrow beyond standard collateral requirements
    ///
    /// EXCELLENT and GOOD always qualify, FAIR only above 600, POOR and
    /// VERY_POOR never.
    #[instrument(skip(self), fields(grade = %self.report.grade, score = self.report.total_score))]
    pub fn check_under_collateralized_lending(
        &self,
        requested_amount: f64,
        collateral_value: f64,
    ) -> UnderCollateralizedAssessment {
        let max_ltv = self.personalized_max_ltv(STANDARD_BASE_LTV);
        let required_collateral = requested_amount / max_ltv;

        let qualifies = match self.report.grade {
            CreditGrade::Excellent | CreditGrade::Good => true,
            CreditGrade::Fair => self.report.total_score > FAIR_UNDERCOLLATERALIZED_MIN_SCORE,
            CreditGrade::Poor | CreditGrade::VeryPoor => false,
        };

        debug!(
            qualifies,
            required_collateral,
            collateral_shortfall = (required_collateral - collateral_value).max(0.0),
            "Under-collateralized lending check"
        );

        UnderCollateralizedAssessment {
            qualifies,
            required_collateral,
            credit_based_limit: self.report.benefits.max_borrow_amount,
            terms: QuotedTerms {
                interest_rate: self.personalized_interest_rate(STANDARD_BASE_RATE),
                max_ltv,
                liquidation_threshold: self
                    .personalized_liquidation_threshold(STANDARD_LIQUIDATION_THRESHOLD),
            },
        }
    }
}
