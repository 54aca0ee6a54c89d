//! Credit grades, factor statuses and risk levels
//!
//! All three are ordinal tiers derived from a score by fixed thresholds.

use serde::{Deserialize, Serialize};

/// Five ordinal credit-quality tiers derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditGrade {
    /// Below 400
    VeryPoor,
    /// 400 - 549
    Poor,
    /// 550 - 699
    Fair,
    /// 700 - 849
    Good,
    /// 850 and above
    Excellent,
}

impl CreditGrade {
    /// All grades, best first
    pub const ALL: [CreditGrade; 5] = [
        CreditGrade::Excellent,
        CreditGrade::Good,
        CreditGrade::Fair,
        CreditGrade::Poor,
        CreditGrade::VeryPoor,
    ];

    /// Map a total score (0-1000) to its grade
    pub fn from_score(total_score: u16) -> Self {
        match total_score {
            850..=u16::MAX => CreditGrade::Excellent,
            700..=849 => CreditGrade::Good,
            550..=699 => CreditGrade::Fair,
            400..=549 => CreditGrade::Poor,
            _ => CreditGrade::VeryPoor,
        }
    }

    /// Lowest total score that earns this grade
    pub fn min_score(&self) -> u16 {
        match self {
            CreditGrade::Excellent => 850,
            CreditGrade::Good => 700,
            CreditGrade::Fair => 550,
            CreditGrade::Poor => 400,
            CreditGrade::VeryPoor => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CreditGrade::Excellent => "EXCELLENT",
            CreditGrade::Good => "GOOD",
            CreditGrade::Fair => "FAIR",
            CreditGrade::Poor => "POOR",
            CreditGrade::VeryPoor => "VERY_POOR",
        }
    }
}

impl std::fmt::Display for CreditGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor status from the factor's share of its maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorStatus {
    VeryPoor,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl FactorStatus {
    /// Status for `score` out of `max_score`
    ///
    /// Percentage thresholds: 90 / 75 / 60 / 40.
    pub fn from_ratio(score: f64, max_score: f64) -> Self {
        if max_score <= 0.0 {
            return FactorStatus::VeryPoor;
        }
        let percentage = score / max_score * 100.0;
        if percentage >= 90.0 {
            FactorStatus::Excellent
        } else if percentage >= 75.0 {
            FactorStatus::Good
        } else if percentage >= 60.0 {
            FactorStatus::Fair
        } else if percentage >= 40.0 {
            FactorStatus::Poor
        } else {
            FactorStatus::VeryPoor
        }
    }
}

/// Borrower risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// 700+ is low risk, 550+ medium, anything else high
    pub fn from_score(total_score: u16) -> Self {
        if total_score >= 700 {
            RiskLevel::Low
        } else if total_score >= 550 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(CreditGrade::from_score(1000), CreditGrade::Excellent);
        assert_eq!(CreditGrade::from_score(850), CreditGrade::Excellent);
        assert_eq!(CreditGrade::from_score(849), CreditGrade::Good);
        assert_eq!(CreditGrade::from_score(700), CreditGrade::Good);
        assert_eq!(CreditGrade::from_score(699), CreditGrade::Fair);
        assert_eq!(CreditGrade::from_score(550), CreditGrade::Fair);
        assert_eq!(CreditGrade::from_score(549), CreditGrade::Poor);
        assert_eq!(CreditGrade::from_score(400), CreditGrade::Poor);
        assert_eq!(CreditGrade::from_score(399), CreditGrade::VeryPoor);
        assert_eq!(CreditGrade::from_score(0), CreditGrade::VeryPoor);
    }

    #[test]
    fn test_grade_partition_matches_min_score() {
        for score in 0..=1000u16 {
            let grade = CreditGrade::from_score(score);
            assert!(score >= grade.min_score());
            let better = CreditGrade::ALL
                .iter()
                .filter(|g| **g > grade)
                .all(|g| score < g.min_score());
            assert!(better, "score {} also qualifies for a better grade", score);
        }
    }

    #[test]
    fn test_grade_ordering() {
        assert!(CreditGrade::Excellent > CreditGrade::Good);
        assert!(CreditGrade::Poor > CreditGrade::VeryPoor);
    }

    #[test]
    fn test_status_from_ratio() {
        assert_eq!(FactorStatus::from_ratio(110.0, 120.0), FactorStatus::Excellent);
        assert_eq!(FactorStatus::from_ratio(90.0, 120.0), FactorStatus::Good);
        assert_eq!(FactorStatus::from_ratio(65.0, 100.0), FactorStatus::Fair);
        assert_eq!(FactorStatus::from_ratio(45.0, 100.0), FactorStatus::Poor);
        assert_eq!(FactorStatus::from_ratio(0.0, 200.0), FactorStatus::VeryPoor);
        assert_eq!(FactorStatus::from_ratio(5.0, 0.0), FactorStatus::VeryPoor);
    }

    #[test]
    fn test_risk_level() {
        assert_eq!(RiskLevel::from_score(700), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(699), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(550), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(549), RiskLevel::High);
    }

    #[test]
    fn test_grade_serde_names() {
        let json = serde_json::to_string(&CreditGrade::VeryPoor).unwrap();
        assert_eq!(json, "\"VERY_POOR\"");
        let grade: CreditGrade = serde_json::from_str("\"EXCELLENT\"").unwrap();
        assert_eq!(grade, CreditGrade::Excellent);
    }
}
