//! BlendScore CLI
//!
//! Scores one wallet snapshot and prints the report, personalized terms,
//! and advice as JSON.
//!
//! ```text
//! blendscore [SNAPSHOT.json | -] [REQUESTED_AMOUNT]
//! ```
//!
//! Reads the snapshot from stdin when no path (or `-`) is given.

mod config;

use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blendscore_advisor::Advice;
use blendscore_common::{
    CreditScoreReport, LendingTermsSummary, OnChainActivitySnapshot, VERSION,
};
use blendscore_engine::ScoringEngine;
use blendscore_lending::{LendingTermsAdjuster, UnderCollateralizedAssessment};

use crate::config::CliConfig;

/// Everything printed for one snapshot
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoreOutput {
    report: CreditScoreReport,
    lending_terms: LendingTermsSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    under_collateralized: Option<UnderCollateralizedAssessment>,
    advice: Advice,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting BlendScore v{}", VERSION);

    let config = CliConfig::load()?;
    let validation = config.network.validate();
    if !validation.is_valid() {
        for key in &validation.missing {
            warn!(%key, "Required network setting missing, using testnet default");
        }
    }
    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    info!(
        rpc = config.network.rpc_url(),
        horizon = config.network.horizon_url(),
        passphrase = config.network.passphrase(),
        pool = config.network.pool_contract(),
        blocked_pools = config.network.blocked_pools().len(),
        "Network configuration loaded"
    );

    let reserve = config
        .terms
        .reserve()
        .context("invalid BLENDSCORE_BASE_* terms")?;

    let mut args = std::env::args().skip(1);
    let snapshot = read_snapshot(args.next())?;
    let requested_amount = args
        .next()
        .map(|raw| raw.parse::<f64>())
        .transpose()
        .context("REQUESTED_AMOUNT must be a number")?;

    let report = ScoringEngine::new().compute_score(&snapshot);
    let adjuster = LendingTermsAdjuster::new(&report);

    let output = ScoreOutput {
        lending_terms: adjuster.lending_terms_summary(Some(&reserve), config.terms.collateral_value),
        under_collateralized: requested_amount.map(|amount| {
            adjuster.check_under_collateralized_lending(amount, config.terms.collateral_value)
        }),
        advice: Advice::for_report(&report),
        report: report.clone(),
    };

    info!("Scored {}", report);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn read_snapshot(path: Option<String>) -> Result<OnChainActivitySnapshot> {
    let raw = match path.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read snapshot from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot file {}", path))?,
    };

    serde_json::from_str(&raw).context("snapshot is not valid JSON")
}
