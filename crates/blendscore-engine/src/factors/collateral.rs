//! Collateralization management factor

use blendscore_common::{CollateralizationHistory, CreditFactor, FactorDetail, FactorId};

use super::non_negative;

/// Ratio treated as fully collateralized (200%)
pub const IDEAL_COLLATERAL_RATIO: f64 = 2.0;

/// Cap on the normalized ratio, rewarding over-collateralization up to 300%
pub const MAX_RATIO_CREDIT: f64 = 1.5;

/// Penalty per risk event, as a fraction of the factor
pub const RISK_EVENT_PENALTY: f64 = 0.1;

/// Population standard deviation divided by the mean
///
/// Zero when fewer than two points are given or the mean is not positive.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if mean <= 0.0 || !mean.is_finite() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() / mean
}

/// Ratio level (80%) plus consistency bonus (20%) minus risk events, × 150
pub fn collateralization(history: &CollateralizationHistory) -> CreditFactor {
    let id = FactorId::Collateralization;
    let average_ratio = non_negative(history.time_weighted_average_ratio);
    let series: Vec<f64> = history
        .monthly_series
        .iter()
        .map(|m| non_negative(m.ratio))
        .collect();

    let ratio_score = (average_ratio / IDEAL_COLLATERAL_RATIO).min(MAX_RATIO_CREDIT) * 0.8;
    let variation = coefficient_of_variation(&series);
    let consistency_bonus = (1.0 - variation) * 0.2;
    let risk_penalty = history.risk_event_count as f64 * RISK_EVENT_PENALTY;

    let score = (ratio_score + consistency_bonus - risk_penalty) * id.max_score();

    let mut improvements = Vec::new();
    if average_ratio < 1.5 {
        improvements.push("Maintain higher collateralization ratios".to_string());
    }
    if variation > 0.3 {
        improvements.push("Reduce volatility in collateral management".to_string());
    }
    if history.risk_event_count > 0 {
        improvements.push("Avoid near-liquidation events".to_string());
    }

    CreditFactor::new(
        id,
        score,
        FactorDetail::Collateralization {
            time_weighted_average_ratio: average_ratio,
            coefficient_of_variation: variation,
            risk_event_count: history.risk_event_count,
        },
        improvements,
    )
}
