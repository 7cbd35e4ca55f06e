//! Recommendation records and their ordinal scales

use serde::{Deserialize, Serialize};

use super::Pillar;
use super::utils::ParseWithDefault;
use crate::constants::scoring::priority_band;

/// Recommendation priority. Ordering is `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Urgency implied by a sub-category score
    pub fn for_score(score: f64) -> Self {
        if score < priority_band::CRITICAL_BELOW {
            Priority::Critical
        } else if score < priority_band::HIGH_BELOW {
            Priority::High
        } else if score < priority_band::MEDIUM_BELOW {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// One level more urgent, saturating at Critical
    pub fn raised(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High | Priority::Critical => Priority::Critical,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

impl ParseWithDefault for Priority {
    fn type_name() -> &'static str {
        "Priority"
    }

    fn default_value() -> Self {
        Priority::Medium
    }

    fn try_parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" | "moderate" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            "critical" | "urgent" => Some(Priority::Critical),
            _ => None,
        }
    }
}

/// Implementation effort estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Effort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effort::Low => write!(f, "Low"),
            Effort::Medium => write!(f, "Medium"),
            Effort::High => write!(f, "High"),
        }
    }
}

impl ParseWithDefault for Effort {
    fn type_name() -> &'static str {
        "Effort"
    }

    fn default_value() -> Self {
        Effort::Medium
    }

    fn try_parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "small" => Some(Effort::Low),
            "medium" | "moderate" => Some(Effort::Medium),
            "high" | "large" => Some(Effort::High),
            _ => None,
        }
    }
}

/// A single actionable finding.
///
/// Produced whole by an agent or the reactive analyzer; later stages replace
/// recommendations rather than editing their fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact: String,
    pub effort: Effort,
    pub priority: Priority,
    /// Referenced external service
    pub azure_service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
    pub pillar: Pillar,
    pub category: String,
    /// Evidence specific to this recommendation, unique within a scorecard
    pub details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_priority_bands() {
        assert_eq!(Priority::for_score(45.0), Priority::Critical);
        assert_eq!(Priority::for_score(60.0), Priority::High);
        assert_eq!(Priority::for_score(79.9), Priority::Medium);
        assert_eq!(Priority::for_score(85.0), Priority::Low);
    }

    #[test]
    fn test_priority_raised_saturates() {
        assert_eq!(Priority::Low.raised(), Priority::Medium);
        assert_eq!(Priority::High.raised(), Priority::Critical);
        assert_eq!(Priority::Critical.raised(), Priority::Critical);
    }

    #[test]
    fn test_parse_with_default() {
        assert_eq!(Priority::parse_or_default("Critical"), Priority::Critical);
        assert_eq!(Priority::parse_or_default("whenever"), Priority::Medium);
        assert_eq!(Effort::parse_or_default(" low "), Effort::Low);
        assert_eq!(Effort::parse_or_default("???"), Effort::Medium);
    }
}
