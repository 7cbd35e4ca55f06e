//! Reactive (incident-history) summary types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Pillar, Recommendation};
use crate::constants::reactive::{SERVICE_HIGH_RISK_CASES, SERVICE_MEDIUM_RISK_CASES};

/// Coarse risk rating derived from incident history
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCount {
    pub pattern: String,
    pub count: usize,
}

impl RiskLevel {
    /// Per-service rating from the number of cases naming it
    pub fn for_service_cases(case_count: usize) -> Self {
        if case_count >= SERVICE_HIGH_RISK_CASES {
            RiskLevel::High
        } else if case_count >= SERVICE_MEDIUM_RISK_CASES {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceImpact {
    pub service: String,
    pub case_count: usize,
    #[serde(default)]
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarRisk {
    pub pillar: Pillar,
    /// 0-100, higher is worse
    pub score: f64,
}

/// Numeric risk breakdown of an incident history
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Mean of the pillar risks (0-100)
    pub overall_risk_score: f64,
    pub pillar_risks: Vec<PillarRisk>,
    pub risk_factors: Vec<String>,
}

impl RiskAssessment {
    pub fn pillar_risk(&self, pillar: Pillar) -> Option<f64> {
        self.pillar_risks
            .iter()
            .find(|r| r.pillar == pillar)
            .map(|r| r.score)
    }
}

/// Aggregated view of historical support cases.
///
/// `pattern_counts` keeps the order in which patterns were first seen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReactiveSummary {
    pub total_cases: usize,
    pub pattern_counts: Vec<PatternCount>,
    pub violated_pillars: BTreeSet<Pillar>,
    pub risk_level: RiskLevel,
    #[serde(default)]
    pub high_severity_cases: usize,
    #[serde(default)]
    pub affected_services: Vec<ServiceImpact>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub risk_assessment: RiskAssessment,
}

impl ReactiveSummary {
    /// Number of cases matching `pattern`, 0 when never seen
    pub fn count_for(&self, pattern: &str) -> usize {
        self.pattern_counts
            .iter()
            .find(|p| p.pattern == pattern)
            .map(|p| p.count)
            .unwrap_or(0)
    }

    pub fn is_violated(&self, pillar: Pillar) -> bool {
        self.violated_pillars.contains(&pillar)
    }

    pub fn is_empty(&self) -> bool {
        self.total_cases == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary_is_low_risk() {
        let summary = ReactiveSummary::default();
        assert!(summary.is_empty());
        assert_eq!(summary.risk_level, RiskLevel::Low);
        assert_eq!(summary.count_for("throttling"), 0);
    }

    #[test]
    fn test_count_for_and_violation() {
        let summary = ReactiveSummary {
            total_cases: 4,
            pattern_counts: vec![PatternCount {
                pattern: "throttling".to_string(),
                count: 3,
            }],
            violated_pillars: [Pillar::PerformanceEfficiency].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(summary.count_for("throttling"), 3);
        assert!(summary.is_violated(Pillar::PerformanceEfficiency));
        assert!(!summary.is_violated(Pillar::Security));
    }
}
