//! Architecture Review Engine
//!
//! Five pillar agents score an architecture description, a reactive analyzer
//! mines incident exports, and the synthesizer folds everything into one
//! scorecard. The orchestrator runs the whole thing per assessment.

pub mod agents;
pub mod impact;
pub mod orchestrator;
pub mod parser;
pub mod patterns;
pub mod reactive;
pub mod services;
pub mod synthesis;

pub use agents::{AgentConfig, PillarAgent};
pub use orchestrator::Orchestrator;
pub use parser::{ParsedResponse, ScoreOrigin};
pub use patterns::PatternExtractor;
pub use reactive::{CaseRecord, ReactiveAnalyzer, parse_case_csv};
pub use synthesis::Synthesizer;
