//! Pillar and per-pillar result types

use serde::{Deserialize, Serialize};

use super::Recommendation;
use super::utils::{clamp_score, round1};

/// One of the five review dimensions.
///
/// Declaration order is the fixed pillar order used for progress reporting
/// and as the recommendation tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pillar {
    #[serde(rename = "Reliability")]
    Reliability,
    #[serde(rename = "Security")]
    Security,
    #[serde(rename = "Cost Optimization")]
    CostOptimization,
    #[serde(rename = "Operational Excellence")]
    OperationalExcellence,
    #[serde(rename = "Performance Efficiency")]
    PerformanceEfficiency,
}

impl Pillar {
    pub const ALL: [Pillar; 5] = [
        Pillar::Reliability,
        Pillar::Security,
        Pillar::CostOptimization,
        Pillar::OperationalExcellence,
        Pillar::PerformanceEfficiency,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pillar::Reliability => "Reliability",
            Pillar::Security => "Security",
            Pillar::CostOptimization => "Cost Optimization",
            Pillar::OperationalExcellence => "Operational Excellence",
            Pillar::PerformanceEfficiency => "Performance Efficiency",
        }
    }

    /// Short identifier used in logs and config keys
    pub fn slug(&self) -> &'static str {
        match self {
            Pillar::Reliability => "reliability",
            Pillar::Security => "security",
            Pillar::CostOptimization => "cost_optimization",
            Pillar::OperationalExcellence => "operational_excellence",
            Pillar::PerformanceEfficiency => "performance_efficiency",
        }
    }

    /// Position in [`Pillar::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match normalized.as_str() {
            "reliability" => Ok(Pillar::Reliability),
            "security" => Ok(Pillar::Security),
            "costoptimization" | "cost" => Ok(Pillar::CostOptimization),
            "operationalexcellence" | "operations" => Ok(Pillar::OperationalExcellence),
            "performanceefficiency" | "performance" => Ok(Pillar::PerformanceEfficiency),
            _ => Err(format!(
                "Unknown pillar: {}. Valid values: reliability, security, cost optimization, \
                 operational excellence, performance efficiency",
                s
            )),
        }
    }
}

/// Which path produced a pillar result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisSource {
    #[serde(rename = "LLM")]
    Llm,
    Emulated,
}

impl std::fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisSource::Llm => write!(f, "LLM"),
            AnalysisSource::Emulated => write!(f, "Emulated"),
        }
    }
}

/// Score for one named facet of a pillar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategoryScore {
    pub name: String,
    pub score: f64,
    pub percentage: u8,
}

impl SubCategoryScore {
    /// Clamps `score` into [0, 100] and derives the rounded percentage
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        let score = clamp_score(score);
        Self {
            name: name.into(),
            score,
            percentage: score.round() as u8,
        }
    }
}

/// Output of one pillar agent invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarResult {
    pub pillar: Pillar,
    pub overall_score: f64,
    pub sub_categories: Vec<SubCategoryScore>,
    pub recommendations: Vec<Recommendation>,
    pub source: AnalysisSource,
    /// Length of the raw model response, 0 on the emulated path
    pub raw_response_length: usize,
}

impl PillarResult {
    /// Builds a result whose overall score is the one-decimal mean of its
    /// sub-category scores.
    pub fn new(
        pillar: Pillar,
        sub_categories: Vec<SubCategoryScore>,
        recommendations: Vec<Recommendation>,
        source: AnalysisSource,
        raw_response_length: usize,
    ) -> Self {
        let overall_score = if sub_categories.is_empty() {
            0.0
        } else {
            let sum: f64 = sub_categories.iter().map(|s| s.score).sum();
            round1(clamp_score(sum / sub_categories.len() as f64))
        };

        Self {
            pillar,
            overall_score,
            sub_categories,
            recommendations,
            source,
            raw_response_length,
        }
    }

    pub fn sub_category(&self, name: &str) -> Option<&SubCategoryScore> {
        self.sub_categories.iter().find(|s| s.name == name)
    }
}
