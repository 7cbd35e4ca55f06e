//! pillarscope - Five-Pillar Architecture Assessment Engine
//!
//! Scores an architecture description against the five well-architected
//! pillars (reliability, security, cost optimization, operational excellence,
//! performance efficiency) and merges the results into one scorecard.
//!
//! ## Core Features
//!
//! - **Pillar Agents**: one LLM call per pillar with a deterministic heuristic
//!   fallback, so every run completes
//! - **Response Parser**: layered extraction of sub-scores and recommendations
//!   from free-form model output
//! - **Reactive Analysis**: incident CSV exports mined for recurring patterns
//! - **Orchestrator**: concurrent runs with pollable state and progress
//!
//! ## Quick Start
//!
//! ```ignore
//! use pillarscope::{AgentConfig, AnalysisRequest, Orchestrator};
//!
//! let orchestrator = Orchestrator::new(AgentConfig::emulated());
//! orchestrator.start("assessment-1", AnalysisRequest::new(text))?;
//! orchestrator.wait("assessment-1", Duration::from_secs(120)).await?;
//! let scorecard = orchestrator.get_scorecard("assessment-1")?;
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: LLM provider abstraction and timeouts
//! - [`review`]: agents, parser, reactive analyzer, synthesis, orchestration
//! - [`config`]: layered configuration
//! - [`types`]: shared data model and errors

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod review;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader, PillarWeights};

pub use types::{
    AnalysisRequest, AnalysisSource, AssessmentBundle, ErrorCategory, Pillar, PillarResult,
    ReactiveSummary, Recommendation, Result, RunState, RunStatus, Scorecard, ScopeError,
};

// =============================================================================
// Engine Re-exports
// =============================================================================

pub use review::{AgentConfig, Orchestrator, PillarAgent, ReactiveAnalyzer, Synthesizer};

pub use ai::{LlmProvider, LlmResponse, SharedProvider, with_timeout};
