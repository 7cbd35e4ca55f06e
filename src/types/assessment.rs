//! Assessment inputs, run state and the final scorecard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{Result, ScopeError};
use super::{PillarResult, ReactiveSummary, Recommendation, RiskLevel};
use crate::types::Pillar;

// =============================================================================
// Inputs
// =============================================================================

/// Everything a pillar agent looks at. Shared read-only across agents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub architecture_text: String,
    /// Services recognised in architecture diagrams, first occurrence order
    #[serde(default)]
    pub detected_services: Vec<String>,
    #[serde(default)]
    pub reactive_summary: Option<ReactiveSummary>,
}

impl AnalysisRequest {
    pub fn new(architecture_text: impl Into<String>) -> Self {
        Self {
            architecture_text: architecture_text.into(),
            ..Default::default()
        }
    }

    /// Adds detected services, skipping blanks and case-insensitive duplicates
    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for service in services {
            let service = service.into().trim().to_string();
            if service.is_empty() {
                continue;
            }
            if !self
                .detected_services
                .iter()
                .any(|s| s.eq_ignore_ascii_case(&service))
            {
                self.detected_services.push(service);
            }
        }
        self
    }

    pub fn with_reactive(mut self, summary: ReactiveSummary) -> Self {
        self.reactive_summary = Some(summary);
        self
    }

    /// Rejects input the engine refuses to start on
    pub fn validate(&self, max_input_bytes: usize) -> Result<()> {
        if self.architecture_text.len() > max_input_bytes {
            return Err(ScopeError::Validation(format!(
                "architecture text is {} bytes, limit is {}",
                self.architecture_text.len(),
                max_input_bytes
            )));
        }
        if self.architecture_text.contains('\0') {
            return Err(ScopeError::Validation(
                "architecture text contains NUL bytes".to_string(),
            ));
        }
        Ok(())
    }
}

/// Raw per-assessment material as handed over by the upload layer
#[derive(Debug, Clone, Default)]
pub struct AssessmentBundle {
    pub architecture_text: String,
    pub detected_services: Vec<String>,
    /// Incident export in CSV form
    pub reactive_csv: Option<String>,
}

// =============================================================================
// Run State
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pending,
    Analyzing,
    Completed,
    Failed,
}

impl RunStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Pending => write!(f, "pending"),
            RunStatus::Analyzing => write!(f, "analyzing"),
            RunStatus::Completed => write!(f, "completed"),
            RunStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Snapshot of one assessment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub assessment_id: String,
    pub status: RunStatus,
    /// 0-100, never decreases while analyzing
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl RunState {
    pub fn pending(assessment_id: impl Into<String>) -> Self {
        Self {
            assessment_id: assessment_id.into(),
            status: RunStatus::Pending,
            progress: 0,
            message: None,
            updated_at: Utc::now(),
        }
    }
}

// =============================================================================
// Scorecard
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollaborationMetrics {
    pub agents_run: usize,
    pub agents_on_llm_path: usize,
    pub agents_on_emulated_path: usize,
}

impl CollaborationMetrics {
    /// Share of agents that produced their result from a model response
    pub fn llm_coverage(&self) -> f64 {
        if self.agents_run == 0 {
            0.0
        } else {
            self.agents_on_llm_path as f64 / self.agents_run as f64
        }
    }
}

/// Two pillars whose recommendations pull against each other
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarConflict {
    pub id: String,
    pub kind: String,
    pub pillars: [Pillar; 2],
    pub description: String,
    pub severity: RiskLevel,
}

/// Final merged output of one assessment run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub overall_percentage: f64,
    pub pillar_scores: Vec<PillarResult>,
    pub recommendations: Vec<Recommendation>,
    pub collaboration_metrics: CollaborationMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactive: Option<ReactiveSummary>,
    #[serde(default)]
    pub referenced_services: Vec<String>,
    #[serde(default)]
    pub conflicts: Vec<PillarConflict>,
    pub generated_at: DateTime<Utc>,
}

impl Scorecard {
    pub fn pillar(&self, pillar: Pillar) -> Option<&PillarResult> {
        self.pillar_scores.iter().find(|r| r.pillar == pillar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_services_dedups_case_insensitively() {
        let request = AnalysisRequest::new("web tier")
            .with_services(["Azure Front Door", "azure front door", "  ", "Key Vault"]);
        assert_eq!(
            request.detected_services,
            vec!["Azure Front Door".to_string(), "Key Vault".to_string()]
        );
    }

    #[test]
    fn test_validate_limits() {
        let request = AnalysisRequest::new("x".repeat(32));
        assert!(request.validate(64).is_ok());
        assert!(matches!(
            request.validate(16),
            Err(ScopeError::Validation(_))
        ));
        assert!(AnalysisRequest::new("a\0b").validate(64).is_err());
    }

    #[test]
    fn test_run_status_terminal() {
        assert!(!RunStatus::Pending.is_terminal());
        assert!(!RunStatus::Analyzing.is_terminal());
        assert!(RunStatus::Completed.is_terminal());
        assert!(RunStatus::Failed.is_terminal());
        assert_eq!(RunStatus::Analyzing.to_string(), "analyzing");
    }

    #[test]
    fn test_llm_coverage() {
        let metrics = CollaborationMetrics {
            agents_run: 5,
            agents_on_llm_path: 2,
            agents_on_emulated_path: 3,
        };
        assert!((metrics.llm_coverage() - 0.4).abs() < f64::EPSILON);
        assert_eq!(CollaborationMetrics::default().llm_coverage(), 0.0);
    }
}
