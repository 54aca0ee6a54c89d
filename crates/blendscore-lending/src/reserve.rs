//! Pool reserve base parameters supplied by the lending-protocol client

use blendscore_common::ReserveError;
use serde::{Deserialize, Serialize};

/// Scale of Blend reserve config fixed-point values (7 decimals)
pub const FIXED_POINT_SCALE: f64 = 1e7;

/// Base borrow ceiling when the pool does not supply one
pub const DEFAULT_BASE_MAX_BORROW: f64 = 1_000_000.0;

/// Base parameters of one lending-pool reserve
///
/// Ratios are fractions in [0, 1]; the borrow rate is an APR fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolReserve {
    #[serde(rename = "baseLTV")]
    pub base_ltv: f64,
    pub base_interest_rate: f64,
    pub base_liquidation_threshold: f64,
    pub base_max_borrow: f64,
}

impl PoolReserve {
    /// Validate and build reserve parameters
    pub fn new(
        base_ltv: f64,
        base_interest_rate: f64,
        base_liquidation_threshold: f64,
        base_max_borrow: f64,
    ) -> Result<Self, ReserveError> {
        ratio("base_ltv", base_ltv)?;
        non_negative("base_interest_rate", base_interest_rate)?;
        ratio("base_liquidation_threshold", base_liquidation_threshold)?;
        non_negative("base_max_borrow", base_max_borrow)?;

        Ok(Self {
            base_ltv,
            base_interest_rate,
            base_liquidation_threshold,
            base_max_borrow,
        })
    }

    /// Build from on-chain reserve config
    ///
    /// `max_util` stands in for the base LTV and `l_factor` for the
    /// liquidation threshold, both 7-decimal fixed point.
    pub fn from_fixed_point(
        max_util: i64,
        l_factor: i64,
        borrow_apr: f64,
    ) -> Result<Self, ReserveError> {
        Self::new(
            max_util as f64 / FIXED_POINT_SCALE,
            borrow_apr,
            l_factor as f64 / FIXED_POINT_SCALE,
            DEFAULT_BASE_MAX_BORROW,
        )
    }

    /// Override the base borrow ceiling
    pub fn with_max_borrow(mut self, base_max_borrow: f64) -> Result<Self, ReserveError> {
        non_negative("base_max_borrow", base_max_borrow)?;
        self.base_max_borrow = base_max_borrow;
        Ok(self)
    }
}

/// Standard terms used when no reserve is supplied
impl Default for PoolReserve {
    fn default() -> Self {
        Self {
            base_ltv: 0.8,
            base_interest_rate: 0.08,
            base_liquidation_threshold: 0.85,
            base_max_borrow: DEFAULT_BASE_MAX_BORROW,
        }
    }
}

fn ratio(field: &'static str, value: f64) -> Result<(), ReserveError> {
    if !value.is_finite() {
        return Err(ReserveError::NonFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ReserveError::RatioOutOfRange { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ReserveError> {
    if !value.is_finite() {
        return Err(ReserveError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ReserveError::Negative { field, value });
    }
    Ok(())
}
