//! Grade policy table
//!
//! One row of adjustment parameters per [`CreditGrade`]. Better grades scale
//! LTV up and discount rates; POOR and VERY_POOR pay a premium and lose
//! liquidation headroom.

use blendscore_common::CreditGrade;
use serde::{Deserialize, Serialize};

/// How a grade adjusts the base borrow rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatePolicy {
    /// `max(base × (1 − discount − extra), base × min_fraction, floor)`
    Discounted {
        extra_discount: f64,
        min_fraction: f64,
        floor: f64,
    },
    /// `max(base × (1 + premium), floor)`
    Premium { premium: f64, floor: f64 },
}

impl RatePolicy {
    /// Apply to a base rate; `discount` is the report's discount as a fraction
    pub fn apply(&self, base_rate: f64, discount: f64) -> f64 {
        match *self {
            RatePolicy::Discounted {
                extra_discount,
                min_fraction,
                floor,
            } => (base_rate * (1.0 - discount - extra_discount))
                .max(base_rate * min_fraction)
                .max(floor),
            RatePolicy::Premium { premium, floor } => (base_rate * (1.0 + premium)).max(floor),
        }
    }
}

/// How a grade adjusts the base liquidation threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// `max(base − buffer − extra_buffer, base × min_fraction)`
    Buffered {
        extra_buffer: f64,
        min_fraction: f64,
    },
    /// `base + offset`
    Tightened { offset: f64 },
}

impl ThresholdPolicy {
    /// Apply to a base threshold; `buffer` is the report's buffer as a fraction
    pub fn apply(&self, base_threshold: f64, buffer: f64) -> f64 {
        match *self {
            ThresholdPolicy::Buffered {
                extra_buffer,
                min_fraction,
            } => (base_threshold - buffer - extra_buffer).max(base_threshold * min_fraction),
            ThresholdPolicy::Tightened { offset } => base_threshold + offset,
        }
    }
}

/// Adjustment parameters for one grade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradePolicy {
    /// Multiplier on the credit-adjusted LTV
    pub ltv_scale: f64,
    /// Hard LTV cap
    pub ltv_cap: f64,
    pub rate: RatePolicy,
    pub liquidation: ThresholdPolicy,
}

impl GradePolicy {
    /// `min(adjusted_ltv × scale, cap)`
    #[inline]
    pub fn cap_ltv(&self, adjusted_ltv: f64) -> f64 {
        (adjusted_ltv * self.ltv_scale).min(self.ltv_cap)
    }

    /// The policy row for a grade
    pub fn for_grade(grade: CreditGrade) -> &'static GradePolicy {
        match grade {
            CreditGrade::Excellent => &EXCELLENT,
            CreditGrade::Good => &GOOD,
            CreditGrade::Fair => &FAIR,
            CreditGrade::Poor => &POOR,
            CreditGrade::VeryPoor => &VERY_POOR,
        }
    }
}

const EXCELLENT: GradePolicy = GradePolicy {
    ltv_scale: 1.25,
    ltv_cap: 0.95,
    rate: RatePolicy::Discounted {
        extra_discount: 0.03,
        min_fraction: 0.7,
        floor: 0.01,
    },
    liquidation: ThresholdPolicy::Buffered {
        extra_buffer: 0.05,
        min_fraction: 0.8,
    },
};

const GOOD: GradePolicy = GradePolicy {
    ltv_scale: 1.15,
    ltv_cap: 0.85,
    rate: RatePolicy::Discounted {
        extra_discount: 0.02,
        min_fraction: 0.8,
        floor: 0.015,
    },
    liquidation: ThresholdPolicy::Buffered {
        extra_buffer: 0.03,
        min_fraction: 0.85,
    },
};

const FAIR: GradePolicy = GradePolicy {
    ltv_scale: 1.05,
    ltv_cap: 0.75,
    rate: RatePolicy::Discounted {
        extra_discount: 0.01,
        min_fraction: 0.9,
        floor: 0.02,
    },
    liquidation: ThresholdPolicy::Buffered {
        extra_buffer: 0.01,
        min_fraction: 0.9,
    },
};

const POOR: GradePolicy = GradePolicy {
    ltv_scale: 0.95,
    ltv_cap: 0.65,
    rate: RatePolicy::Premium {
        premium: 0.01,
        floor: 0.04,
    },
    liquidation: ThresholdPolicy::Tightened { offset: 0.02 },
};

const VERY_POOR: GradePolicy = GradePolicy {
    ltv_scale: 0.85,
    ltv_cap: 0.55,
    rate: RatePolicy::Premium {
        premium: 0.025,
        floor: 0.08,
    },
    liquidation: ThresholdPolicy::Tightened { offset: 0.05 },
};
