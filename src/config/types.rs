//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/pillarscope/) and project (.pillarscope/) level configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{input, llm, network, orchestrator, parser};
use crate::types::{Pillar, Result, ScopeError};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Scoring and orchestration settings
    pub analysis: AnalysisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            llm: LlmConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `ScopeError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ScopeError::Config(format!(
                "LLM temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(ScopeError::Config(
                "LLM timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(ScopeError::Config(
                "LLM max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.analysis.min_response_chars == 0 {
            return Err(ScopeError::Config(
                "analysis.min_response_chars must be greater than 0".to_string(),
            ));
        }

        if self.analysis.max_architecture_chars == 0 {
            return Err(ScopeError::Config(
                "analysis.max_architecture_chars must be greater than 0".to_string(),
            ));
        }

        for pillar in Pillar::ALL {
            let weight = self.analysis.weights.get(pillar);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ScopeError::Config(format!(
                    "Weight for {} must be a non-negative number, got {}",
                    pillar, weight
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

/// Note: the API key is never serialized and is redacted in debug output.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Use the LLM path at all
    pub enabled: bool,

    /// Provider name: "openai" or "ollama"
    pub provider: String,

    /// Model name (provider default when unset)
    pub model: Option<String>,

    /// Per-agent request timeout in seconds
    pub timeout_secs: u64,

    pub temperature: f32,

    /// Completion token budget per pillar
    pub max_tokens: usize,

    /// Custom endpoint
    pub api_base: Option<String>,

    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("enabled", &self.enabled)
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: "openai".to_string(),
            model: None,
            timeout_secs: network::DEFAULT_LLM_TIMEOUT_SECS,
            temperature: llm::DEFAULT_TEMPERATURE,
            max_tokens: llm::DEFAULT_MAX_TOKENS,
            api_base: None,
            api_key: None,
        }
    }
}

// =============================================================================
// Analysis Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Architecture text embedded in prompts (characters)
    pub max_architecture_chars: usize,

    /// Shortest model response worth parsing (characters)
    pub min_response_chars: usize,

    /// Cosmetic pacing for the emulated path (milliseconds)
    pub emulation_delay_ms: u64,

    /// Recommendations kept in a scorecard (0 = unlimited)
    pub max_recommendations: usize,

    /// Largest architecture text accepted (bytes)
    pub max_input_bytes: usize,

    /// Largest incident export accepted (rows)
    pub max_case_records: usize,

    pub weights: PillarWeights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_architecture_chars: input::MAX_ARCHITECTURE_CHARS,
            min_response_chars: parser::MIN_RESPONSE_CHARS,
            emulation_delay_ms: 0,
            max_recommendations: orchestrator::DEFAULT_MAX_RECOMMENDATIONS,
            max_input_bytes: input::MAX_INPUT_BYTES,
            max_case_records: input::MAX_CASE_RECORDS,
            weights: PillarWeights::default(),
        }
    }
}

// =============================================================================
// Pillar Weights
// =============================================================================

/// Weight of each pillar in the overall percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillarWeights {
    pub reliability: f64,
    pub security: f64,
    pub cost_optimization: f64,
    pub operational_excellence: f64,
    pub performance_efficiency: f64,
}

impl Default for PillarWeights {
    fn default() -> Self {
        Self::uniform()
    }
}

impl PillarWeights {
    pub fn uniform() -> Self {
        Self {
            reliability: 0.2,
            security: 0.2,
            cost_optimization: 0.2,
            operational_excellence: 0.2,
            performance_efficiency: 0.2,
        }
    }

    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Reliability => self.reliability,
            Pillar::Security => self.security,
            Pillar::CostOptimization => self.cost_optimization,
            Pillar::OperationalExcellence => self.operational_excellence,
            Pillar::PerformanceEfficiency => self.performance_efficiency,
        }
    }

    fn as_array(&self) -> [f64; 5] {
        Pillar::ALL.map(|p| self.get(p))
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= 1e-9
    }

    /// Weights indexed by [`Pillar::index`], summing to 1.0.
    ///
    /// Unbalanced vectors are scaled; negative or non-finite entries count as
    /// zero; a vector with nothing left falls back to uniform.
    pub fn normalized(&self) -> [f64; 5] {
        let raw = self
            .as_array()
            .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        let sum: f64 = raw.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return [0.2; 5];
        }
        raw.map(|w| w / sum)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, "1.0");
        assert!(!config.llm.enabled);
        assert_eq!(config.llm.max_tokens, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.llm.temperature = 3.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.llm.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.analysis.weights.security = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_redacted_and_not_serialized() {
        let mut config = LlmConfig::default();
        config.api_key = Some("sk-secret".to_string());

        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("[REDACTED]"));

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }

    #[test]
    fn test_uniform_weights_are_normalized() {
        let weights = PillarWeights::default();
        assert!(weights.is_normalized());
        assert_eq!(weights.normalized(), [0.2; 5]);
    }

    #[test]
    fn test_unbalanced_weights_are_scaled() {
        let weights = PillarWeights {
            reliability: 2.0,
            security: 2.0,
            cost_optimization: 1.0,
            operational_excellence: 0.0,
            performance_efficiency: 0.0,
        };
        assert!(!weights.is_normalized());
        let normalized = weights.normalized();
        assert!((normalized.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!((normalized[0] - 0.4).abs() < 1e-12);
        assert!((normalized[2] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weights_fall_back_to_uniform() {
        let weights = PillarWeights {
            reliability: 0.0,
            security: 0.0,
            cost_optimization: 0.0,
            operational_excellence: 0.0,
            performance_efficiency: 0.0,
        };
        assert_eq!(weights.normalized(), [0.2; 5]);
    }
}
