//! Factor calculators
//!
//! Each calculator maps one slice of the snapshot to a [`CreditFactor`].
//! Float inputs that are negative or non-finite are treated as zero.

pub mod activity;
pub mod collateral;
pub mod diversity;
pub mod liquidation;
pub mod repayment;

pub use activity::{loan_activity, transaction_history, wallet_age};
pub use collateral::{coefficient_of_variation, collateralization};
pub use diversity::asset_diversity;
pub use liquidation::liquidation_history;
pub use repayment::repayment_history;

/// Clamp a float input to its non-negative domain
#[inline]
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Clamp a float input into [0, 1]
#[inline]
pub(crate) fn unit_interval(value: f64) -> f64 {
    non_negative(value).min(1.0)
}
