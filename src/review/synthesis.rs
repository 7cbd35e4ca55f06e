//! Scorecard Synthesis
//!
//! Merges the five pillar results and any incident-driven recommendations
//! into one [`Scorecard`].
//!
//! ## Recommendation pipeline
//! 1. Concatenate pillar lists (pillar order), then reactive ones
//! 2. Deduplicate on (pillar, title), later entry wins
//! 3. Stable sort by priority, highest first, pillar order breaking ties
//! 4. Make every `details` string unique and non-generic
//! 5. Truncate to the configured cap
//!
//! Pillar pairs known to trade off against each other are flagged as
//! conflicts when both sides came back with recommendations.

use std::collections::HashSet;

use chrono::Utc;

use crate::config::PillarWeights;
use crate::review::impact;
use crate::types::{
    AnalysisSource, CollaborationMetrics, Pillar, PillarConflict, PillarResult, ReactiveSummary,
    Recommendation, RiskLevel, Scorecard, clamp_score,
};

/// (id, kind, pillars, description, severity)
const CONFLICT_RULES: &[(&str, &str, [Pillar; 2], &str, RiskLevel)] = &[
    (
        "cost_vs_performance",
        "resource_allocation",
        [Pillar::CostOptimization, Pillar::PerformanceEfficiency],
        "Cost optimization may conflict with performance requirements",
        RiskLevel::Medium,
    ),
    (
        "security_vs_performance",
        "control_overhead",
        [Pillar::Security, Pillar::PerformanceEfficiency],
        "Security controls may impact performance",
        RiskLevel::Low,
    ),
];

#[derive(Debug, Clone, Copy)]
pub struct Synthesizer {
    weights: [f64; 5],
    max_recommendations: usize,
}

impl Synthesizer {
    /// `max_recommendations` of 0 keeps everything
    pub fn new(weights: &PillarWeights, max_recommendations: usize) -> Self {
        Self {
            weights: weights.normalized(),
            max_recommendations,
        }
    }

    pub fn synthesize(
        &self,
        mut results: Vec<PillarResult>,
        reactive: Option<ReactiveSummary>,
    ) -> Scorecard {
        results.sort_by_key(|r| r.pillar.index());

        let overall_percentage = self.overall(&results);

        let llm = results
            .iter()
            .filter(|r| r.source == AnalysisSource::Llm)
            .count();
        let collaboration_metrics = CollaborationMetrics {
            agents_run: results.len(),
            agents_on_llm_path: llm,
            agents_on_emulated_path: results.len() - llm,
        };

        let conflicts = detect_conflicts(&results);

        let mut recommendations: Vec<Recommendation> = results
            .iter()
            .flat_map(|r| r.recommendations.iter().cloned())
            .chain(
                reactive
                    .iter()
                    .flat_map(|s| s.recommendations.iter().cloned()),
            )
            .collect();

        dedup_last_wins(&mut recommendations);
        recommendations.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.pillar.index().cmp(&b.pillar.index()))
        });
        ensure_unique_details(&mut recommendations);
        if self.max_recommendations > 0 {
            recommendations.truncate(self.max_recommendations);
        }

        let mut referenced_services: Vec<String> = Vec::new();
        for rec in &recommendations {
            if !rec.azure_service.is_empty() && !referenced_services.contains(&rec.azure_service) {
                referenced_services.push(rec.azure_service.clone());
            }
        }

        Scorecard {
            overall_percentage,
            pillar_scores: results,
            recommendations,
            collaboration_metrics,
            reactive,
            referenced_services,
            conflicts,
            generated_at: Utc::now(),
        }
    }

    /// Weighted mean over the pillars present, weights rescaled to them
    fn overall(&self, results: &[PillarResult]) -> f64 {
        let (sum, weight) = results.iter().fold((0.0, 0.0), |(sum, weight), r| {
            let w = self.weights[r.pillar.index()];
            (sum + r.overall_score * w, weight + w)
        });
        if weight <= 0.0 {
            return 0.0;
        }
        clamp_score(sum / weight)
    }
}

fn detect_conflicts(results: &[PillarResult]) -> Vec<PillarConflict> {
    let recommends = |pillar: Pillar| {
        results
            .iter()
            .any(|r| r.pillar == pillar && !r.recommendations.is_empty())
    };

    CONFLICT_RULES
        .iter()
        .filter(|(_, _, pillars, _, _)| pillars.iter().all(|p| recommends(*p)))
        .map(|&(id, kind, pillars, description, severity)| PillarConflict {
            id: id.to_string(),
            kind: kind.to_string(),
            pillars,
            description: description.to_string(),
            severity,
        })
        .collect()
}

/// Keep the last occurrence of each (pillar, title), preserving the relative
/// order of the survivors
fn dedup_last_wins(recommendations: &mut Vec<Recommendation>) {
    let mut seen = HashSet::new();
    let mut keep = vec![false; recommendations.len()];
    for (i, rec) in recommendations.iter().enumerate().rev() {
        keep[i] = seen.insert((rec.pillar, rec.title.clone()));
    }
    let mut flags = keep.into_iter();
    recommendations.retain(|_| flags.next().unwrap_or(false));
}

/// Disambiguate generic or repeated details with the recommendation's pillar
/// and title
fn ensure_unique_details(recommendations: &mut [Recommendation]) {
    fn key(details: &str) -> String {
        details.trim().to_lowercase()
    }

    let mut seen: HashSet<String> = HashSet::new();

    for rec in recommendations.iter_mut() {
        if impact::is_generic_details(&rec.details) || seen.contains(&key(&rec.details)) {
            let base = rec.details.trim();
            let tagged = if base.is_empty() {
                format!("{}: {}", rec.pillar, rec.title)
            } else {
                format!("{} ({}: {})", base, rec.pillar, rec.title)
            };

            let mut candidate = tagged.clone();
            let mut n = 2;
            while seen.contains(&key(&candidate)) {
                candidate = format!("{} #{}", tagged, n);
                n += 1;
            }
            rec.details = candidate;
        }
        seen.insert(key(&rec.details));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Effort, Pillar, Priority, SubCategoryScore};

    fn rec(pillar: Pillar, title: &str, priority: Priority, details: &str) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            description: format!("{} description", title),
            impact: String::new(),
            effort: Effort::Medium,
            priority,
            azure_service: format!("{} service", pillar.slug()),
            reference_url: None,
            pillar,
            category: "General".to_string(),
            details: details.to_string(),
        }
    }

    fn result(pillar: Pillar, score: f64, recs: Vec<Recommendation>) -> PillarResult {
        PillarResult::new(
            pillar,
            vec![SubCategoryScore::new("Only", score)],
            recs,
            AnalysisSource::Emulated,
            0,
        )
    }

    fn uniform_results(score: f64) -> Vec<PillarResult> {
        Pillar::ALL
            .iter()
            .map(|p| result(*p, score, Vec::new()))
            .collect()
    }

    #[test]
    fn test_uniform_weights_give_mean() {
        let results: Vec<PillarResult> = Pillar::ALL
            .iter()
            .zip([60.0, 70.0, 80.0, 90.0, 100.0])
            .map(|(p, s)| result(*p, s, Vec::new()))
            .collect();
        let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results, None);
        assert!((card.overall_percentage - 80.0).abs() < 1e-9);
        assert_eq!(card.collaboration_metrics.agents_run, 5);
        assert_eq!(card.collaboration_metrics.agents_on_llm_path, 0);
    }

    #[test]
    fn test_results_sorted_into_pillar_order() {
        let mut results = uniform_results(70.0);
        results.reverse();
        let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results, None);
        let order: Vec<Pillar> = card.pillar_scores.iter().map(|r| r.pillar).collect();
        assert_eq!(order, Pillar::ALL.to_vec());
    }

    #[test]
    fn test_dedup_keeps_later_entry() {
        let mut results = uniform_results(70.0);
        results[1].recommendations = vec![
            rec(Pillar::Security, "Enable MFA", Priority::Low, "first"),
            rec(Pillar::Security, "Enable MFA", Priority::High, "second"),
        ];
        let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results, None);
        assert_eq!(card.recommendations.len(), 1);
        assert_eq!(card.recommendations[0].details, "second");
    }

    #[test]
    fn test_sort_by_priority_then_pillar() {
        let mut results = uniform_results(70.0);
        results[4].recommendations = vec![rec(
            Pillar::PerformanceEfficiency,
            "Cache",
            Priority::Critical,
            "a",
        )];
        results[0].recommendations = vec![
            rec(Pillar::Reliability, "Zones", Priority::High, "b"),
            rec(Pillar::Reliability, "Backups", Priority::Critical, "c"),
        ];
        results[2].recommendations = vec![rec(
            Pillar::CostOptimization,
            "Budgets",
            Priority::High,
            "d",
        )];

        let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results, None);
        let titles: Vec<&str> = card.recommendations.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Backups", "Cache", "Zones", "Budgets"]);
    }

    #[test]
    fn test_reactive_recommendations_appended_and_echoed() {
        let summary = ReactiveSummary {
            total_cases: 3,
            recommendations: vec![rec(
                Pillar::Security,
                "Address Authentication Failure Pattern",
                Priority::High,
                "Authentication Failure observed in 3 support cases.",
            )],
            ..ReactiveSummary::default()
        };
        let card = Synthesizer::new(&PillarWeights::uniform(), 0)
            .synthesize(uniform_results(70.0), Some(summary));
        assert_eq!(card.recommendations.len(), 1);
        assert_eq!(card.reactive.as_ref().unwrap().total_cases, 3);
        assert_eq!(card.referenced_services, vec!["security service".to_string()]);
    }

    #[test]
    fn test_generic_and_duplicate_details_disambiguated() {
        let mut results = uniform_results(70.0);
        results[0].recommendations = vec![
            rec(Pillar::Reliability, "Zones", Priority::High, "Same evidence."),
            rec(
                Pillar::Reliability,
                "Backups",
                Priority::High,
                "AI-powered recommendation based on comprehensive reliability analysis of your architecture.",
            ),
        ];
        results[1].recommendations =
            vec![rec(Pillar::Security, "MFA", Priority::High, "Same evidence.")];

        let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results, None);
        let details: HashSet<&str> = card.recommendations.iter().map(|r| r.details.as_str()).collect();
        assert_eq!(details.len(), 3);
        assert!(card.recommendations[1].details.ends_with("(Reliability: Backups)"));
        assert_eq!(card.recommendations[2].details, "Same evidence. (Security: MFA)");
    }

    #[test]
    fn test_truncation_cap() {
        let mut results = uniform_results(70.0);
        results[0].recommendations = (0..8)
            .map(|i| rec(Pillar::Reliability, &format!("R{i}"), Priority::Medium, &format!("d{i}")))
            .collect();
        let card = Synthesizer::new(&PillarWeights::uniform(), 5).synthesize(results, None);
        assert_eq!(card.recommendations.len(), 5);
    }

    #[test]
    fn test_conflicts_need_recommendations_on_both_sides() {
        let card = Synthesizer::new(&PillarWeights::uniform(), 0)
            .synthesize(uniform_results(70.0), None);
        assert!(card.conflicts.is_empty());

        let mut results = uniform_results(70.0);
        results[2].recommendations =
            vec![rec(Pillar::CostOptimization, "Reservations", Priority::Medium, "a")];
        results[4].recommendations =
            vec![rec(Pillar::PerformanceEfficiency, "Scale out", Priority::High, "b")];
        let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results.clone(), None);
        assert_eq!(card.conflicts.len(), 1);
        assert_eq!(card.conflicts[0].id, "cost_vs_performance");
        assert_eq!(card.conflicts[0].kind, "resource_allocation");
        assert_eq!(card.conflicts[0].severity, RiskLevel::Medium);

        results[1].recommendations = vec![rec(Pillar::Security, "WAF", Priority::High, "c")];
        let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results, None);
        let ids: Vec<&str> = card.conflicts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cost_vs_performance", "security_vs_performance"]);
        assert_eq!(
            card.conflicts[1].pillars,
            [Pillar::Security, Pillar::PerformanceEfficiency]
        );
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn priority() -> impl Strategy<Value = Priority> {
            prop_oneof![
                Just(Priority::Low),
                Just(Priority::Medium),
                Just(Priority::High),
                Just(Priority::Critical),
            ]
        }

        proptest! {
            #[test]
            fn overall_is_weighted_mean(
                scores in prop::array::uniform5(0.0f64..=100.0),
                raw in prop::array::uniform5(0.0f64..10.0),
            ) {
                let weights = PillarWeights {
                    reliability: raw[0],
                    security: raw[1],
                    cost_optimization: raw[2],
                    operational_excellence: raw[3],
                    performance_efficiency: raw[4],
                };
                let results: Vec<PillarResult> = Pillar::ALL
                    .iter()
                    .zip(scores)
                    .map(|(p, s)| result(*p, s, Vec::new()))
                    .collect();
                let expected: f64 = results
                    .iter()
                    .zip(weights.normalized())
                    .map(|(r, w)| r.overall_score * w)
                    .sum();

                let card = Synthesizer::new(&weights, 0).synthesize(results, None);
                prop_assert!((card.overall_percentage - expected).abs() < 1e-6);
                prop_assert!((0.0..=100.0).contains(&card.overall_percentage));
            }

            #[test]
            fn recommendations_unique_and_sorted(
                entries in prop::collection::vec((0usize..5, 0usize..4, priority(), 0usize..3), 0..30),
            ) {
                let mut results = uniform_results(50.0);
                for (pillar, title, priority, details) in entries {
                    let p = Pillar::ALL[pillar];
                    results[pillar].recommendations.push(rec(
                        p,
                        &format!("T{title}"),
                        priority,
                        &format!("shared detail {details}"),
                    ));
                }

                let card = Synthesizer::new(&PillarWeights::uniform(), 0).synthesize(results, None);
                let keys: HashSet<(Pillar, &str)> = card
                    .recommendations
                    .iter()
                    .map(|r| (r.pillar, r.title.as_str()))
                    .collect();
                prop_assert_eq!(keys.len(), card.recommendations.len());

                let details: HashSet<&str> = card.recommendations.iter().map(|r| r.details.as_str()).collect();
                prop_assert_eq!(details.len(), card.recommendations.len());

                for pair in card.recommendations.windows(2) {
                    prop_assert!(pair[0].priority >= pair[1].priority);
                }
            }
        }
    }
}
