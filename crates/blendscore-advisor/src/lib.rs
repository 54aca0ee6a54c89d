//! # Advisor
//!
//! Turns a credit report into guidance a borrower can act on.
//!
//! - [`recommendations`]: per-factor advice ranked by recoverable points
//! - [`simulations`]: what-if projections for common improvements
//! - [`explain`]: a short narrative of strengths and weaknesses
//!
//! Everything here is a pure function of the report.

pub mod explanation;
pub mod recommendation;
pub mod simulation;

pub use explanation::explain;
pub use recommendation::{recommendations, Effort, Priority, Recommendation};
pub use simulation::{simulations, CreditSimulation, SimulationParameters};

use blendscore_common::CreditScoreReport;
use serde::{Deserialize, Serialize};

/// All advisor output for one report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advice {
    pub explanation: String,
    pub recommendations: Vec<Recommendation>,
    pub simulations: Vec<CreditSimulation>,
}

impl Advice {
    pub fn for_report(report: &CreditScoreReport) -> Self {
        Self {
            explanation: explain(report),
            recommendations: recommendations(report),
            simulations: simulations(report),
        }
    }
}
