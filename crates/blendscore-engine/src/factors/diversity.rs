//! Asset diversity factor

use blendscore_common::{AssetDiversity, CreditFactor, FactorDetail, FactorId};

use super::unit_interval;

/// Unique assets that earn the full asset component
pub const FULL_CREDIT_ASSETS: f64 = 10.0;

/// Unique protocols that earn the full protocol component
pub const FULL_CREDIT_PROTOCOLS: f64 = 5.0;

/// Assets (60%) plus protocols (30%) minus concentration (10%), × 100
///
/// The best achievable score is 90: concentration can only subtract.
pub fn asset_diversity(diversity: &AssetDiversity) -> CreditFactor {
    let id = FactorId::AssetDiversity;
    let concentration = unit_interval(diversity.concentration_risk);

    let asset_score = (diversity.unique_asset_count as f64 / FULL_CREDIT_ASSETS).min(1.0) * 0.6;
    let protocol_score =
        (diversity.unique_protocol_count as f64 / FULL_CREDIT_PROTOCOLS).min(1.0) * 0.3;
    let score = (asset_score + protocol_score - concentration * 0.1) * id.max_score();

    let mut improvements = Vec::new();
    if diversity.unique_asset_count < 5 {
        improvements.push("Diversify across more assets".to_string());
    }
    if diversity.unique_protocol_count < 3 {
        improvements.push("Use multiple DeFi protocols".to_string());
    }
    if concentration > 0.5 {
        improvements.push("Reduce concentration risk".to_string());
    }

    CreditFactor::new(
        id,
        score,
        FactorDetail::AssetDiversity {
            unique_assets: diversity.unique_asset_count,
            unique_protocols: diversity.unique_protocol_count,
            concentration_risk: concentration,
        },
        improvements,
    )
}
