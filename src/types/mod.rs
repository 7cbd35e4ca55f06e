pub mod assessment;
pub mod error;
pub mod pillar;
pub mod reactive;
pub mod recommendation;
pub mod utils;

pub use assessment::{
    AnalysisRequest, AssessmentBundle, CollaborationMetrics, PillarConflict, RunState, RunStatus,
    Scorecard,
};
pub use error::{ErrorCategory, ErrorClassifier, LlmError, Result, ScopeError};
pub use pillar::{AnalysisSource, Pillar, PillarResult, SubCategoryScore};
pub use reactive::{
    PatternCount, PillarRisk, ReactiveSummary, RiskAssessment, RiskLevel, ServiceImpact,
};
pub use recommendation::{Effort, Priority, Recommendation};
pub use utils::{ParseWithDefault, capitalize_first, clamp_score, round1, truncate_chars};
