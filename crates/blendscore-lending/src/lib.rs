//! # Lending Terms
//!
//! Turns a [`CreditScoreReport`](blendscore_common::CreditScoreReport) into
//! personalized terms for a Blend pool reserve.
//!
//! ## Pipeline
//!
//! ```text
//! base × credit_multiplier(total) ──► grade scale ──► grade cap     (LTV)
//! base × (1 − discount − extra)   ──► grade floors                  (rate)
//! base − buffer − extra           ──► grade floor                   (threshold)
//! ```
//!
//! POOR and VERY_POOR invert the direction: a rate premium and a tighter
//! liquidation threshold.

pub mod adjuster;
pub mod multiplier;
pub mod policy;
pub mod reserve;

pub use adjuster::{LendingTermsAdjuster, QuotedTerms, UnderCollateralizedAssessment};
pub use multiplier::credit_multiplier;
pub use policy::{GradePolicy, RatePolicy, ThresholdPolicy};
pub use reserve::PoolReserve;
