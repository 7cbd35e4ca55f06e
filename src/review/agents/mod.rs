//! Pillar Agents
//!
//! One generic agent, parameterised by a [`PillarProfile`], scores one
//! pillar. It makes at most one model call and never fails outward: any
//! timeout, provider error or unusable response drops to the deterministic
//! emulated path.

pub mod emulated;
pub mod profiles;
pub mod prompt;

use std::time::Duration;

use tracing::{debug, warn};

use crate::ai::{ProviderConfig, SharedProvider, create_provider, with_timeout};
use crate::config::{Config, PillarWeights};
use crate::constants::{input, network, orchestrator, parser as parser_constants};
use crate::review::parser;
use crate::types::{
    AnalysisRequest, AnalysisSource, ErrorClassifier, Pillar, PillarResult, Result, ScopeError,
};

use profiles::PillarProfile;

// =============================================================================
// Agent Configuration
// =============================================================================

/// Everything the agents and the orchestrator need to run, fixed at
/// construction and shared read-only across runs
#[derive(Clone)]
pub struct AgentConfig {
    pub provider: Option<SharedProvider>,
    pub llm_enabled: bool,
    /// Bound on the single model call per agent
    pub llm_timeout: Duration,
    pub max_architecture_chars: usize,
    pub min_response_chars: usize,
    /// Optional pause before emulated scoring
    pub emulation_delay: Duration,
    pub weights: PillarWeights,
    /// Scorecard recommendation cap (0 = unlimited)
    pub max_recommendations: usize,
    pub max_input_bytes: usize,
    pub max_case_records: usize,
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("provider", &self.provider.as_ref().map(|p| p.name().to_string()))
            .field("llm_enabled", &self.llm_enabled)
            .field("llm_timeout", &self.llm_timeout)
            .field("max_architecture_chars", &self.max_architecture_chars)
            .field("min_response_chars", &self.min_response_chars)
            .field("emulation_delay", &self.emulation_delay)
            .field("weights", &self.weights)
            .field("max_recommendations", &self.max_recommendations)
            .field("max_input_bytes", &self.max_input_bytes)
            .field("max_case_records", &self.max_case_records)
            .finish()
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::emulated()
    }
}

impl AgentConfig {
    /// No provider; every agent takes the emulated path
    pub fn emulated() -> Self {
        Self {
            provider: None,
            llm_enabled: false,
            llm_timeout: Duration::from_secs(network::DEFAULT_LLM_TIMEOUT_SECS),
            max_architecture_chars: input::MAX_ARCHITECTURE_CHARS,
            min_response_chars: parser_constants::MIN_RESPONSE_CHARS,
            emulation_delay: Duration::ZERO,
            weights: PillarWeights::default(),
            max_recommendations: orchestrator::DEFAULT_MAX_RECOMMENDATIONS,
            max_input_bytes: input::MAX_INPUT_BYTES,
            max_case_records: input::MAX_CASE_RECORDS,
        }
    }

    /// Build from loaded configuration. A provider is created only when the
    /// LLM section is enabled; a provider that cannot be built is logged and
    /// the engine runs emulated.
    pub fn from_config(config: &Config) -> Self {
        let analysis = &config.analysis;
        let mut agent_config = Self {
            provider: None,
            llm_enabled: config.llm.enabled,
            llm_timeout: Duration::from_secs(config.llm.timeout_secs),
            max_architecture_chars: analysis.max_architecture_chars,
            min_response_chars: analysis.min_response_chars,
            emulation_delay: Duration::from_millis(analysis.emulation_delay_ms),
            weights: analysis.weights,
            max_recommendations: analysis.max_recommendations,
            max_input_bytes: analysis.max_input_bytes,
            max_case_records: analysis.max_case_records,
        };

        if config.llm.enabled {
            match create_provider(&ProviderConfig::from(&config.llm)) {
                Ok(provider) => {
                    debug!(
                        "Using {} provider with model {}",
                        provider.name(),
                        provider.model()
                    );
                    agent_config.provider = Some(provider);
                }
                Err(e) => {
                    warn!("LLM provider unavailable, running emulated: {}", e);
                    agent_config.llm_enabled = false;
                }
            }
        }

        agent_config
    }

    /// Attach a provider and enable the LLM path
    pub fn with_provider(mut self, provider: SharedProvider) -> Self {
        self.provider = Some(provider);
        self.llm_enabled = true;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.llm_timeout = timeout;
        self
    }

    /// Provider to call, if the LLM path is switched on
    pub fn active_provider(&self) -> Option<&SharedProvider> {
        self.provider.as_ref().filter(|_| self.llm_enabled)
    }

    /// Check the provider once before a run. An unreachable provider turns
    /// the LLM path off so agents go straight to emulated scoring instead of
    /// each waiting out its own timeout.
    pub async fn preflight(mut self) -> Self {
        let Some(provider) = self.active_provider().cloned() else {
            return self;
        };

        let healthy = with_timeout(self.llm_timeout, provider.health_check(), "health check").await;
        match healthy {
            Ok(true) => debug!("{} provider is reachable", provider.name()),
            Ok(false) => {
                warn!(
                    "{} provider failed its health check, running emulated",
                    provider.name()
                );
                self.llm_enabled = false;
            }
            Err(e) => {
                let classified = ErrorClassifier::classify_error(&e, provider.name());
                warn!(
                    category = %classified.category,
                    "{} provider health check errored, running emulated: {}",
                    provider.name(),
                    classified.message
                );
                self.llm_enabled = false;
            }
        }
        self
    }
}

// =============================================================================
// Pillar Agent
// =============================================================================

/// Scores one pillar from an [`AnalysisRequest`]
#[derive(Debug, Clone, Copy)]
pub struct PillarAgent {
    profile: &'static PillarProfile,
}

impl PillarAgent {
    pub fn new(pillar: Pillar) -> Self {
        Self {
            profile: profiles::profile(pillar),
        }
    }

    pub fn pillar(&self) -> Pillar {
        self.profile.pillar
    }

    /// All five agents in pillar order
    pub fn all() -> [PillarAgent; 5] {
        Pillar::ALL.map(PillarAgent::new)
    }

    pub async fn analyze(&self, request: &AnalysisRequest, config: &AgentConfig) -> PillarResult {
        let pillar = self.pillar();

        if let Some(provider) = config.active_provider() {
            match self.analyze_with_llm(provider, request, config).await {
                Ok(result) => {
                    debug!(
                        "{}: LLM analysis scored {:.1} ({} chars)",
                        pillar, result.overall_score, result.raw_response_length
                    );
                    return result;
                }
                Err(e) => {
                    let classified = ErrorClassifier::classify_error(&e, provider.name());
                    if classified.category.is_external() {
                        warn!(
                            pillar = pillar.slug(),
                            category = %classified.category,
                            "LLM call failed, falling back to emulated scoring: {}",
                            classified.message
                        );
                    } else {
                        debug!(
                            pillar = pillar.slug(),
                            category = %classified.category,
                            "LLM response unusable, falling back to emulated scoring: {}",
                            classified.message
                        );
                    }
                }
            }
        }

        if !config.emulation_delay.is_zero() {
            tokio::time::sleep(config.emulation_delay).await;
        }

        let result = emulated::emulate(self.profile, request);
        debug!("{}: emulated score {:.1}", pillar, result.overall_score);
        result
    }

    async fn analyze_with_llm(
        &self,
        provider: &SharedProvider,
        request: &AnalysisRequest,
        config: &AgentConfig,
    ) -> Result<PillarResult> {
        let completion = prompt::pillar_prompt(self.profile, request, config.max_architecture_chars);
        let operation = format!("{} analysis", self.pillar().slug());

        let response = with_timeout(config.llm_timeout, provider.complete(&completion), &operation)
            .await?;

        if response.content.trim().is_empty() {
            return Err(ScopeError::unusable_response("empty completion"));
        }

        let parsed = parser::parse(&response.content, self.profile, config.min_response_chars)
            .ok_or_else(|| {
                ScopeError::unusable_response(format!(
                    "no usable scores in {} chars of output",
                    response.content.len()
                ))
            })?;

        Ok(PillarResult::new(
            self.pillar(),
            parsed.sub_scores,
            parsed.recommendations,
            AnalysisSource::Llm,
            response.content.len(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::provider::stub::{StubBehavior, StubProvider};
    use std::sync::Arc;

    const SECURITY_RESPONSE: &str = "\
Identity & Access Management: 62/100
Data Protection: 48/100
Network Security: 71/100
Security Monitoring: 55/100
Compliance: 80/100

Recommendations
1. Move secrets into Key Vault: Connection strings sit in app settings in plain text. Priority: High. Effort: Low.";

    #[tokio::test]
    async fn test_llm_path_tags_source() {
        let config = AgentConfig::emulated()
            .with_provider(StubProvider::shared(StubBehavior::Canned(SECURITY_RESPONSE.into())));
        let agent = PillarAgent::new(Pillar::Security);
        let result = agent.analyze(&AnalysisRequest::new("web app"), &config).await;

        assert_eq!(result.source, AnalysisSource::Llm);
        assert_eq!(result.raw_response_length, SECURITY_RESPONSE.len());
        assert_eq!(result.sub_category("Data Protection").unwrap().score, 48.0);
        assert_eq!(result.overall_score, 63.2);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].azure_service, "Azure Key Vault");
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let request = AnalysisRequest::new("Two VMs and a SQL database");
        let config = AgentConfig::emulated()
            .with_provider(StubProvider::shared(StubBehavior::Fail("503 Service Unavailable".into())));
        let agent = PillarAgent::new(Pillar::Reliability);

        let result = agent.analyze(&request, &config).await;
        assert_eq!(result.source, AnalysisSource::Emulated);
        assert_eq!(
            result,
            emulated::emulate(profiles::profile(Pillar::Reliability), &request)
        );
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let config = AgentConfig::emulated()
            .with_provider(StubProvider::shared(StubBehavior::Slow(
                Duration::from_secs(30),
                SECURITY_RESPONSE.into(),
            )))
            .with_timeout(Duration::from_millis(50));
        let result = PillarAgent::new(Pillar::Security)
            .analyze(&AnalysisRequest::new(""), &config)
            .await;
        assert_eq!(result.source, AnalysisSource::Emulated);
    }

    #[tokio::test]
    async fn test_unusable_response_falls_back() {
        let config = AgentConfig::emulated()
            .with_provider(StubProvider::shared(StubBehavior::Canned("I cannot help.".into())));
        let result = PillarAgent::new(Pillar::CostOptimization)
            .analyze(&AnalysisRequest::new("batch jobs"), &config)
            .await;
        assert_eq!(result.source, AnalysisSource::Emulated);
    }

    #[tokio::test]
    async fn test_disabled_llm_never_calls_provider() {
        let stub = Arc::new(StubProvider::new(StubBehavior::Canned(SECURITY_RESPONSE.into())));
        let mut config = AgentConfig::emulated().with_provider(stub.clone());
        config.llm_enabled = false;

        let result = PillarAgent::new(Pillar::Security)
            .analyze(&AnalysisRequest::new("web app"), &config)
            .await;
        assert_eq!(result.source, AnalysisSource::Emulated);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_single_attempt_per_analysis() {
        let stub = Arc::new(StubProvider::new(StubBehavior::Fail("connection refused".into())));
        let config = AgentConfig::emulated().with_provider(stub.clone());
        PillarAgent::new(Pillar::OperationalExcellence)
            .analyze(&AnalysisRequest::new("pipeline"), &config)
            .await;
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_preflight_disables_unhealthy_provider() {
        let stub = Arc::new(StubProvider::new(StubBehavior::Fail("connection refused".into())));
        let config = AgentConfig::emulated().with_provider(stub.clone()).preflight().await;
        assert!(!config.llm_enabled);
        assert!(config.active_provider().is_none());

        let result = PillarAgent::new(Pillar::Security)
            .analyze(&AnalysisRequest::new("web app"), &config)
            .await;
        assert_eq!(result.source, AnalysisSource::Emulated);
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_preflight_keeps_healthy_provider() {
        let config = AgentConfig::emulated()
            .with_provider(StubProvider::shared(StubBehavior::Canned(SECURITY_RESPONSE.into())))
            .preflight()
            .await;
        assert!(config.llm_enabled);
        assert!(config.active_provider().is_some());

        let untouched = AgentConfig::emulated().preflight().await;
        assert!(untouched.active_provider().is_none());
    }

    #[test]
    fn test_from_config_without_llm() {
        let config = AgentConfig::from_config(&Config::default());
        assert!(config.active_provider().is_none());
        assert_eq!(config.min_response_chars, parser_constants::MIN_RESPONSE_CHARS);
    }

    #[test]
    fn test_all_agents_in_pillar_order() {
        let pillars: Vec<Pillar> = PillarAgent::all().iter().map(|a| a.pillar()).collect();
        assert_eq!(pillars, Pillar::ALL.to_vec());
    }
}
