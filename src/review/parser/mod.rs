//! LLM Response Parser
//!
//! Turns untrusted free text from a model into sub-scores and
//! recommendations for one pillar. Pure and total: malformed input yields
//! `None`, never a panic.
//!
//! ## Layers
//! 1. Structured markers ("Name: 72/100" lines, list items under a
//!    recommendations heading)
//! 2. Keyword windows (sentences around sub-category keywords)
//! 3. Sentiment scale when no number was found anywhere

mod recommendations;
mod scores;

use crate::review::agents::profiles::PillarProfile;
use crate::types::{Recommendation, SubCategoryScore};

pub use recommendations::extract_recommendations;
pub use scores::extract_scores;

/// Which layer produced the numeric scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrigin {
    Markers,
    KeywordWindow,
    Sentiment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// One entry per profile sub-category, in profile order
    pub sub_scores: Vec<SubCategoryScore>,
    pub recommendations: Vec<Recommendation>,
    pub origin: ScoreOrigin,
}

/// Parse a model response for `profile`.
///
/// `None` when the trimmed text is shorter than `min_chars`, mentions nothing
/// the pillar cares about, or carries no scoring signal at all.
pub fn parse(raw: &str, profile: &PillarProfile, min_chars: usize) -> Option<ParsedResponse> {
    let text = raw.trim();
    if text.is_empty() || text.chars().count() < min_chars {
        return None;
    }
    if !profile.relevance_matcher().contains_any(text) {
        return None;
    }

    let (sub_scores, origin) = extract_scores(text, profile)?;
    let recommendations = extract_recommendations(text, profile, &sub_scores);

    Some(ParsedResponse {
        sub_scores,
        recommendations,
        origin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::parser::MIN_RESPONSE_CHARS;
    use crate::review::agents::profiles::profile;
    use crate::types::{Pillar, Priority};

    const RELIABILITY_RESPONSE: &str = "\
High Availability: 58/100
Disaster Recovery: 42/100
Fault Tolerance: 70/100
Backup Strategy: 66/100
Reliability Monitoring: 75/100

The web tier runs in a single region with no failover target.

Recommendations
1. Deploy across availability zones: The checkout service has one instance per tier. Priority: High. Effort: Medium.
2. Define RTO and RPO targets: Recovery objectives are undocumented and replication is not configured. Priority: Critical. Effort: Low.";

    #[test]
    fn test_parse_structured_response() {
        let parsed = parse(
            RELIABILITY_RESPONSE,
            profile(Pillar::Reliability),
            MIN_RESPONSE_CHARS,
        )
        .unwrap();
        assert_eq!(parsed.origin, ScoreOrigin::Markers);
        assert_eq!(parsed.sub_scores.len(), 5);
        assert_eq!(parsed.sub_scores[1].name, "Disaster Recovery");
        assert_eq!(parsed.sub_scores[1].score, 42.0);
        assert_eq!(parsed.sub_scores[1].percentage, 42);

        assert_eq!(parsed.recommendations.len(), 2);
        assert_eq!(parsed.recommendations[1].priority, Priority::Critical);
        assert_eq!(parsed.recommendations[1].category, "Disaster Recovery");
        assert_ne!(
            parsed.recommendations[0].details,
            parsed.recommendations[1].details
        );
    }

    #[test]
    fn test_empty_and_short_input() {
        let reliability = profile(Pillar::Reliability);
        assert!(parse("", reliability, MIN_RESPONSE_CHARS).is_none());
        assert!(parse("   \n\t ", reliability, MIN_RESPONSE_CHARS).is_none());
        assert!(parse("High Availability: 90", reliability, MIN_RESPONSE_CHARS).is_none());
    }

    #[test]
    fn test_irrelevant_text_rejected() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                    tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam.";
        for pillar in Pillar::ALL {
            assert!(parse(text, profile(pillar), MIN_RESPONSE_CHARS).is_none());
        }
    }

    #[test]
    fn test_sentiment_only_response() {
        let text = "Cost controls are weak across the estate. Spend is not tracked per team and \
                    the billing data is reviewed only when invoices arrive, which is inadequate.";
        let parsed = parse(text, profile(Pillar::CostOptimization), MIN_RESPONSE_CHARS).unwrap();
        assert_eq!(parsed.origin, ScoreOrigin::Sentiment);
        for sub in &parsed.sub_scores {
            assert!((40.0..=95.0).contains(&sub.score));
            assert!(sub.score < 65.0);
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics_and_scores_in_range(raw in "\\PC{0,600}") {
                for pillar in Pillar::ALL {
                    if let Some(parsed) = parse(&raw, profile(pillar), 10) {
                        prop_assert_eq!(parsed.sub_scores.len(), 5);
                        for sub in &parsed.sub_scores {
                            prop_assert!((0.0..=100.0).contains(&sub.score));
                            prop_assert_eq!(sub.percentage as f64, sub.score.round());
                        }
                    }
                }
            }
        }
    }
}
