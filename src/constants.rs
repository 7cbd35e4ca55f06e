//! Global Constants
//!
//! Centralized constants for scoring, parsing and orchestration.
//! All magic numbers should be defined here with documentation.

/// Network constants
pub mod network {
    /// Per-agent LLM timeout (seconds)
    pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 45;

    /// HTTP connect timeout for provider clients (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;
}

/// LLM request constants
pub mod llm {
    /// Completion token budget per pillar
    pub const DEFAULT_MAX_TOKENS: usize = 1500;

    /// Sampling temperature; low keeps sub-score formatting stable
    pub const DEFAULT_TEMPERATURE: f32 = 0.3;
}

/// Input limits
pub mod input {
    /// Architecture text embedded into a prompt (characters)
    pub const MAX_ARCHITECTURE_CHARS: usize = 6000;

    /// Largest architecture text accepted at all (bytes)
    pub const MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

    /// Largest incident export accepted (rows)
    pub const MAX_CASE_RECORDS: usize = 50_000;
}

/// Scoring constants shared by the emulated path and the response parser
pub mod scoring {
    pub const MIN_SCORE: f64 = 0.0;
    pub const MAX_SCORE: f64 = 100.0;

    /// Half-width of the hash-seeded jitter applied to emulated scores
    pub const EMULATED_JITTER: f64 = 3.0;

    /// Bonus when a detected diagram service supports a sub-category
    pub const SERVICE_BONUS: f64 = 5.0;

    /// Penalty applied to every sub-category of a pillar implicated by incidents
    pub const REACTIVE_PENALTY: f64 = 10.0;

    /// Sub-categories scoring below this produce emulated recommendations
    pub const RECOMMENDATION_THRESHOLD: f64 = 80.0;

    /// Emulated recommendations per pillar
    pub const MAX_EMULATED_RECOMMENDATIONS: usize = 3;

    /// Sentiment scale
    pub mod sentiment {
        pub const BASE: f64 = 65.0;
        pub const POSITIVE_WEIGHT: f64 = 5.0;
        pub const NEGATIVE_WEIGHT: f64 = 8.0;
        pub const KEYWORD_WEIGHT: f64 = 3.0;
        pub const FLOOR: f64 = 40.0;
        pub const CEILING: f64 = 95.0;
    }

    /// Priority bands for emulated recommendations (score upper bounds)
    pub mod priority_band {
        pub const CRITICAL_BELOW: f64 = 50.0;
        pub const HIGH_BELOW: f64 = 65.0;
        pub const MEDIUM_BELOW: f64 = 80.0;
    }
}

/// LLM response parsing constants
pub mod parser {
    /// Responses shorter than this (trimmed, characters) are rejected
    pub const MIN_RESPONSE_CHARS: usize = 100;

    /// Recommendations kept per response
    pub const MAX_RECOMMENDATIONS: usize = 3;

    /// Fallback detail sentences must be longer than this
    pub const MIN_FALLBACK_SENTENCE_CHARS: usize = 30;

    /// Longest detail string kept (characters)
    pub const MAX_DETAILS_CHARS: usize = 400;

    /// Title length bounds for list-item recommendations
    pub const MIN_TITLE_CHARS: usize = 5;
    pub const MAX_TITLE_CHARS: usize = 120;
}

/// Reactive case analysis constants
pub mod reactive {
    /// Distinct patterns at or above which the pattern-diversity criterion trips
    pub const DISTINCT_PATTERN_THRESHOLD: usize = 3;

    /// Case volume at or above which the volume criterion trips
    pub const CASE_VOLUME_THRESHOLD: usize = 20;

    /// Cases a pattern needs before it yields a recommendation
    pub const MIN_CASES_FOR_RECOMMENDATION: usize = 2;

    /// Case count from which severe patterns are rated high effort
    pub const HIGH_EFFORT_CASE_COUNT: usize = 5;

    /// Example cases quoted in recommendation details
    pub const MAX_CASE_EXAMPLES: usize = 3;

    /// Services reported in the affected-services ranking
    pub const MAX_AFFECTED_SERVICES: usize = 10;

    /// Cases naming a service at which it is rated high risk
    pub const SERVICE_HIGH_RISK_CASES: usize = 3;

    /// Cases naming a service at which it is rated medium risk
    pub const SERVICE_MEDIUM_RISK_CASES: usize = 2;

    /// Reliability risk added per high-severity pattern seen
    pub const RELIABILITY_RISK_PER_PATTERN: f64 = 20.0;

    /// Security risk added per security pattern seen
    pub const SECURITY_RISK_PER_PATTERN: f64 = 25.0;

    /// Operational risk added per case
    pub const OPERATIONAL_RISK_PER_CASE: f64 = 5.0;
}

/// Orchestration constants
pub mod orchestrator {
    /// Progress added per completed pillar agent
    pub const PROGRESS_BAND: u8 = 20;

    /// Recommendations kept in a scorecard (0 = unlimited)
    pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 20;

    /// Poll interval used by blocking waits (milliseconds)
    pub const POLL_INTERVAL_MS: u64 = 100;
}
