//! # BlendScore Common
//!
//! Shared data model, grades, and errors for BlendScore.
//!
//! ## Core Types
//!
//! - [`OnChainActivitySnapshot`]: Per-wallet on-chain activity, produced externally
//! - [`CreditFactor`]: One of seven weighted score components
//! - [`CreditScoreReport`]: 0-1000 score, grade, factors, benefits, risk level
//! - [`CreditGrade`]: EXCELLENT > GOOD > FAIR > POOR > VERY_POOR
//! - [`PersonalizedLendingTerms`]: Reserve terms adjusted for a borrower

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BlendScoreError, ReserveError, Result, SnapshotError};
pub use types::{
    factor::{CreditFactor, FactorDetail, FactorId},
    grade::{CreditGrade, FactorStatus, RiskLevel},
    report::{CreditBenefits, CreditScoreReport},
    snapshot::{
        AssetDiversity, CollateralizationHistory, LiquidationHistory, LoanActivity, MonthlyRatio,
        OnChainActivitySnapshot, RepaymentHistory,
    },
    terms::{LendingTermsSummary, PersonalizedLendingTerms},
};

/// BlendScore version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum credit score value
pub const MAX_CREDIT_SCORE: u16 = 1000;

/// Minimum credit score value
pub const MIN_CREDIT_SCORE: u16 = 0;

/// Sum of all factor max scores
pub const MAX_FACTOR_TOTAL: f64 = 900.0;

/// Total score required for priority access
pub const PRIORITY_ACCESS_THRESHOLD: u16 = 700;

/// Borrow ceiling per score point (currency units)
pub const BORROW_PER_SCORE_POINT: f64 = 100.0;
