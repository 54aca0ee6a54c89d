//! # BlendScore
//!
//! On-chain credit scoring for Blend Protocol borrowers, and the
//! credit-adjusted lending terms that follow from a score.
//!
//! ## Crates
//!
//! - [`common`]: snapshot, factor, report, and terms types
//! - [`engine`]: the seven-factor [`ScoringEngine`]
//! - [`lending`]: the [`LendingTermsAdjuster`]
//! - [`advisor`]: recommendations, simulations, explanations
//!
//! ## Example
//!
//! ```
//! use blendscore::{LendingTermsAdjuster, OnChainActivitySnapshot, ScoringEngine};
//!
//! let report = ScoringEngine::new().compute_score(&OnChainActivitySnapshot::new("GWALLET"));
//! let terms = LendingTermsAdjuster::new(&report).lending_terms_summary(None, 10_000.0);
//! assert_eq!(terms.credit_grade, report.grade);
//! ```

pub use blendscore_advisor as advisor;
pub use blendscore_common as common;
pub use blendscore_engine as engine;
pub use blendscore_lending as lending;

pub use blendscore_advisor::Advice;
pub use blendscore_common::{
    BlendScoreError, CreditGrade, CreditScoreReport, OnChainActivitySnapshot, Result,
};
pub use blendscore_engine::ScoringEngine;
pub use blendscore_lending::{LendingTermsAdjuster, PoolReserve};
