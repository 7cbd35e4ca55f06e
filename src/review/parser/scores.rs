//! Sub-score extraction
//!
//! Two numeric layers (labelled lines, then keyword sentences) with a
//! sentiment scale as the last resort.

use std::sync::LazyLock;

use regex::Regex;

use super::ScoreOrigin;
use crate::constants::scoring::sentiment;
use crate::review::agents::profiles::{PillarProfile, SubCategoryDef};
use crate::review::patterns::{PatternExtractor, Sentence, sentence_containing, split_sentences};
use crate::types::{SubCategoryScore, round1};

/// Number right after a sub-category label, allowing bullets, bold markers,
/// colons and an optional "score"/"rating" word in between
static MARKER_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^0-9a-z\n]{0,12}?(?:(?:score|rating|rated)[^0-9a-z\n]{0,6})?(\d{1,3}(?:\.\d+)?)")
        .expect("valid regex")
});

/// Number carrying an explicit 100-point unit somewhere in a sentence
static WINDOW_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,3}(?:\.\d+)?)\s*(?:/\s*100\b|%|out of 100\b|points\b)")
        .expect("valid regex")
});

const POSITIVE_WORDS: &[&str] = &[
    "excellent", "good", "strong", "robust", "well", "properly", "secure", "optimized",
];

const NEGATIVE_WORDS: &[&str] = &[
    "poor",
    "weak",
    "lacking",
    "missing",
    "inadequate",
    "vulnerable",
    "inefficient",
];

/// Scores for every sub-category of the profile, in profile order.
///
/// Returns `None` when neither layer finds a number and the text carries no
/// sentiment words and no sub-category keywords, since that result would be
/// all defaults.
pub fn extract_scores(
    text: &str,
    profile: &PillarProfile,
) -> Option<(Vec<SubCategoryScore>, ScoreOrigin)> {
    let subs = profile.sub_categories;
    let mut found: Vec<Option<f64>> = subs.iter().map(|def| marker_score(text, def)).collect();
    let mut origin = ScoreOrigin::Markers;

    if found.iter().all(Option::is_none) {
        origin = ScoreOrigin::KeywordWindow;
    }

    let sentences = split_sentences(text);
    for (slot, def) in found.iter_mut().zip(subs) {
        if slot.is_none() {
            *slot = window_score(text, &sentences, def);
        }
    }

    let sentiment = Sentiment::measure(text);
    if found.iter().all(Option::is_none) {
        let keyword_hits: usize = subs.iter().map(|d| d.keyword_matcher().count(text)).sum();
        if sentiment.positive + sentiment.negative == 0 && keyword_hits == 0 {
            return None;
        }
        origin = ScoreOrigin::Sentiment;
    }

    let scores = subs
        .iter()
        .zip(found)
        .map(|(def, score)| {
            let score = score.unwrap_or_else(|| sentiment.score_for(text, def));
            SubCategoryScore::new(def.name, round1(score))
        })
        .collect();

    Some((scores, origin))
}

/// Layer 1: a line naming the sub-category followed closely by a number
fn marker_score(text: &str, def: &SubCategoryDef) -> Option<f64> {
    let labels = PatternExtractor::new(def.labels());

    text.lines().find_map(|line| {
        let lower = line.to_ascii_lowercase();
        labels.find_all(&lower).into_iter().find_map(|hit| {
            let caps = MARKER_SCORE.captures(&lower[hit.end..])?;
            in_range(&caps[1])
        })
    })
}

/// Layer 2: the first sentence holding a label or keyword of the
/// sub-category that also holds a 100-point number
fn window_score(
    text: &str,
    sentences: &[Sentence<'_>],
    def: &SubCategoryDef,
) -> Option<f64> {
    let matcher = PatternExtractor::new(def.labels().chain(def.keywords.iter().copied()));
    matcher.find_all(text).into_iter().find_map(|hit| {
        let sentence = sentence_containing(sentences, hit.start)?;
        WINDOW_SCORE
            .captures_iter(sentence.text)
            .find_map(|caps| in_range(&caps[1]))
    })
}

fn in_range(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && (0.0..=100.0).contains(v))
}

// =============================================================================
// Sentiment
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Sentiment {
    positive: usize,
    negative: usize,
}

impl Sentiment {
    fn measure(text: &str) -> Self {
        Self {
            positive: PatternExtractor::new(POSITIVE_WORDS).count(text),
            negative: PatternExtractor::new(NEGATIVE_WORDS).count(text),
        }
    }

    fn score_for(&self, text: &str, def: &SubCategoryDef) -> f64 {
        let keyword_hits = def.keyword_matcher().count(text);
        let raw = sentiment::BASE + sentiment::POSITIVE_WEIGHT * self.positive as f64
            - sentiment::NEGATIVE_WEIGHT * self.negative as f64
            + sentiment::KEYWORD_WEIGHT * keyword_hits as f64;
        raw.clamp(sentiment::FLOOR, sentiment::CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::agents::profiles::profile;
    use crate::types::Pillar;

    fn score_of(scores: &[SubCategoryScore], name: &str) -> f64 {
        scores.iter().find(|s| s.name == name).unwrap().score
    }

    #[test]
    fn test_marker_formats() {
        let text = "\
**High Availability**: 72/100
- Disaster Recovery - Score: 55
Fault Tolerance (rating 81.5)
Backup Strategy: 64
Reliability Monitoring: 90";
        let (scores, origin) = extract_scores(text, profile(Pillar::Reliability)).unwrap();
        assert_eq!(origin, ScoreOrigin::Markers);
        assert_eq!(score_of(&scores, "High Availability"), 72.0);
        assert_eq!(score_of(&scores, "Disaster Recovery"), 55.0);
        assert_eq!(score_of(&scores, "Fault Tolerance"), 81.5);
        assert_eq!(score_of(&scores, "Backup Strategy"), 64.0);
        assert_eq!(score_of(&scores, "Reliability Monitoring"), 90.0);
    }

    #[test]
    fn test_marker_rejects_out_of_range_and_prose() {
        let reliability = profile(Pillar::Reliability);
        let def = &reliability.sub_categories[1];
        assert_eq!(marker_score("Disaster Recovery: 250", def), None);
        assert_eq!(marker_score("Disaster Recovery: no plan in 2 regions", def), None);
    }

    #[test]
    fn test_alias_label_accepted() {
        let text = "Scalability: 77/100";
        let (scores, _) = extract_scores(text, profile(Pillar::PerformanceEfficiency)).unwrap();
        assert_eq!(score_of(&scores, "Scalability & Elasticity"), 77.0);
    }

    #[test]
    fn test_keyword_window_layer() {
        let text = "The team relies on nightly backup jobs, which we rate 58/100. \
                    Other areas look fine.";
        let (scores, origin) = extract_scores(text, profile(Pillar::Reliability)).unwrap();
        assert_eq!(origin, ScoreOrigin::KeywordWindow);
        assert_eq!(score_of(&scores, "Backup Strategy"), 58.0);
    }

    #[test]
    fn test_missing_categories_filled_from_sentiment() {
        let text = "High Availability: 70\nThe design is robust.";
        let (scores, origin) = extract_scores(text, profile(Pillar::Reliability)).unwrap();
        assert_eq!(origin, ScoreOrigin::Markers);
        assert_eq!(score_of(&scores, "High Availability"), 70.0);
        assert_eq!(score_of(&scores, "Disaster Recovery"), 70.0);
    }

    #[test]
    fn test_sentiment_scale_is_clamped() {
        let text = "poor weak lacking missing inadequate vulnerable inefficient poor";
        let (scores, origin) = extract_scores(text, profile(Pillar::Security)).unwrap();
        assert_eq!(origin, ScoreOrigin::Sentiment);
        for sub in scores {
            assert_eq!(sub.score, sentiment::FLOOR);
        }
    }

    #[test]
    fn test_no_signal_returns_none() {
        let text = "The quick brown fox jumps over the lazy dog.";
        assert!(extract_scores(text, profile(Pillar::CostOptimization)).is_none());
    }
}
