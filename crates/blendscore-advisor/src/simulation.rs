//! What-if score simulations
//!
//! Fixed scenarios, each offered only while its factor is below a trigger
//! ratio. Deltas are estimates, not re-scored snapshots.

use blendscore_common::{CreditScoreReport, FactorId, MAX_CREDIT_SCORE};
use serde::{Deserialize, Serialize};

/// Target behavior a scenario assumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum SimulationParameters {
    Repayment { on_time_rate: f64, months: u32 },
    Collateral { target_ratio: f64, consistency: f64 },
    Diversification { target_assets: u32, target_protocols: u32 },
    LoanActivity { target_frequency: f64, target_size: f64 },
}

/// One projected improvement scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSimulation {
    pub scenario: String,
    pub description: String,
    pub parameters: SimulationParameters,
    /// Current total plus delta, capped at 1000
    pub projected_score: u16,
    pub score_delta: u16,
    pub timeframe: String,
    pub requirements: Vec<String>,
}

struct Scenario {
    factor: FactorId,
    /// Offered while the factor ratio is below this
    trigger_ratio: f64,
    name: &'static str,
    description: &'static str,
    parameters: SimulationParameters,
    delta: u16,
    timeframe: &'static str,
    requirements: &'static [&'static str],
}

const SCENARIOS: [Scenario; 4] = [
    Scenario {
        factor: FactorId::RepaymentHistory,
        trigger_ratio: 0.9,
        name: "Perfect Repayment Record",
        description: "Repay every loan on time for the next 6 months",
        parameters: SimulationParameters::Repayment {
            on_time_rate: 1.0,
            months: 6,
        },
        delta: 50,
        timeframe: "6 months",
        requirements: &["Repay every loan on time", "Enable automatic repayment where offered"],
    },
    Scenario {
        factor: FactorId::Collateralization,
        trigger_ratio: 0.8,
        name: "Improved Collateral Management",
        description: "Hold a steady collateralization ratio of 200% or more",
        parameters: SimulationParameters::Collateral {
            target_ratio: 2.0,
            consistency: 0.1,
        },
        delta: 35,
        timeframe: "3 months",
        requirements: &[
            "Deposit more collateral",
            "Check positions daily",
            "Configure alerts for ratio drops",
        ],
    },
    Scenario {
        factor: FactorId::AssetDiversity,
        trigger_ratio: 0.7,
        name: "Asset Diversification",
        description: "Spread activity over 5+ assets and 3+ protocols",
        parameters: SimulationParameters::Diversification {
            target_assets: 5,
            target_protocols: 3,
        },
        delta: 25,
        timeframe: "2 months",
        requirements: &[
            "Use additional DeFi protocols",
            "Spread holdings over more assets",
            "Cut concentration risk",
        ],
    },
    Scenario {
        factor: FactorId::LoanActivity,
        trigger_ratio: 0.6,
        name: "Optimal Loan Activity",
        description: "Borrow steadily with larger average loan sizes",
        parameters: SimulationParameters::LoanActivity {
            target_frequency: 1.5,
            target_size: 10_000.0,
        },
        delta: 20,
        timeframe: "4 months",
        requirements: &[
            "Take 1-2 loans per month",
            "Grow loan sizes gradually",
            "Keep activity consistent",
        ],
    },
];

/// Scenarios applicable to the report, in fixed order
pub fn simulations(report: &CreditScoreReport) -> Vec<CreditSimulation> {
    SCENARIOS
        .iter()
        .filter(|scenario| {
            report
                .factor(scenario.factor)
                .is_some_and(|f| f.ratio() < scenario.trigger_ratio)
        })
        .map(|scenario| CreditSimulation {
            scenario: scenario.name.to_string(),
            description: scenario.description.to_string(),
            parameters: scenario.parameters,
            projected_score: report
                .total_score
                .saturating_add(scenario.delta)
                .min(MAX_CREDIT_SCORE),
            score_delta: scenario.delta,
            timeframe: scenario.timeframe.to_string(),
            requirements: scenario.requirements.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}
