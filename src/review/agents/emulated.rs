//! Emulated Analysis
//!
//! Deterministic stand-in for the model. Scores every sub-category from its
//! profile: base score, keyword bonus, gap penalties, diagram services and
//! incident history, plus a small jitter seeded from a SHA-256 of the input
//! so identical requests always produce identical results.

use sha2::{Digest, Sha256};

use super::profiles::{PillarProfile, SubCategoryDef};
use crate::constants::scoring::{
    EMULATED_JITTER, MAX_EMULATED_RECOMMENDATIONS, REACTIVE_PENALTY, RECOMMENDATION_THRESHOLD,
    SERVICE_BONUS,
};
use crate::review::{impact, services};
use crate::types::{
    AnalysisRequest, AnalysisSource, Pillar, PillarResult, Priority, Recommendation,
    SubCategoryScore, round1,
};

/// Evidence gathered for one sub-category
struct Assessment<'p> {
    def: &'p SubCategoryDef,
    score: f64,
    found: Vec<String>,
    gaps: Vec<String>,
    service_hit: bool,
}

/// Score a request without a model
pub fn emulate(profile: &PillarProfile, request: &AnalysisRequest) -> PillarResult {
    let violated = request
        .reactive_summary
        .as_ref()
        .is_some_and(|s| s.is_violated(profile.pillar));

    let assessments: Vec<Assessment<'_>> = profile
        .sub_categories
        .iter()
        .map(|def| assess(profile.pillar, def, request, violated))
        .collect();

    let recommendations = recommend(profile, &assessments, request, violated);

    let sub_categories = assessments
        .iter()
        .map(|a| SubCategoryScore::new(a.def.name, a.score))
        .collect();

    PillarResult::new(
        profile.pillar,
        sub_categories,
        recommendations,
        AnalysisSource::Emulated,
        0,
    )
}

fn assess<'p>(
    pillar: Pillar,
    def: &'p SubCategoryDef,
    request: &AnalysisRequest,
    violated: bool,
) -> Assessment<'p> {
    let text = &request.architecture_text;
    let found: Vec<String> = def
        .keyword_matcher()
        .found_terms(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    let gaps: Vec<String> = def
        .gap_matcher()
        .found_terms(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    let service_hit = request
        .detected_services
        .iter()
        .any(|detected| supports(def, detected));

    let mut score = def.base_score;
    if !found.is_empty() {
        score += def.bonus;
    }
    score -= def.penalty * gaps.len() as f64;
    if service_hit {
        score += SERVICE_BONUS;
    }
    if violated {
        score -= REACTIVE_PENALTY;
    }
    score += jitter(pillar, def.name, text);

    Assessment {
        def,
        score: round1(score.clamp(0.0, 100.0)),
        found,
        gaps,
        service_hit,
    }
}

/// Whether a diagram-detected service backs this sub-category
fn supports(def: &SubCategoryDef, detected: &str) -> bool {
    let resolved = services::lookup(detected).or_else(|| services::find_service(detected));
    def.services.iter().any(|name| {
        name.eq_ignore_ascii_case(detected.trim()) || resolved.is_some_and(|s| s.name == *name)
    })
}

/// Offset in [-EMULATED_JITTER, +EMULATED_JITTER] derived from the input
fn jitter(pillar: Pillar, category: &str, text: &str) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(pillar.slug().as_bytes());
    hasher.update([0u8]);
    hasher.update(category.as_bytes());
    hasher.update([0u8]);
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    let value = u64::from_be_bytes(prefix);

    let steps = (EMULATED_JITTER * 200.0) as u64 + 1;
    (value % steps) as f64 / 100.0 - EMULATED_JITTER
}

/// Lowest-scoring sub-categories under the threshold, or the single weakest
/// one when everything scores well
fn recommend(
    profile: &PillarProfile,
    assessments: &[Assessment<'_>],
    request: &AnalysisRequest,
    violated: bool,
) -> Vec<Recommendation> {
    let mut ranked: Vec<&Assessment<'_>> = assessments.iter().collect();
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));

    let below: Vec<&Assessment<'_>> = ranked
        .iter()
        .copied()
        .filter(|a| a.score < RECOMMENDATION_THRESHOLD)
        .take(MAX_EMULATED_RECOMMENDATIONS)
        .collect();
    let chosen = if below.is_empty() {
        ranked.into_iter().take(1).collect()
    } else {
        below
    };

    chosen
        .into_iter()
        .filter_map(|a| {
            let template = profile.template_for(a.def.name)?;
            let mut priority = Priority::for_score(a.score);
            if violated {
                priority = priority.raised();
            }

            Some(Recommendation {
                title: template.title.to_string(),
                description: template.description.to_string(),
                impact: impact::impact_statement(template.title, profile.pillar),
                effort: template.effort,
                priority,
                azure_service: template.service.to_string(),
                reference_url: Some(services::reference_url(template.service).to_string()),
                pillar: profile.pillar,
                category: a.def.name.to_string(),
                details: details(profile.pillar, a, request, violated),
            })
        })
        .collect()
}

fn details(
    pillar: Pillar,
    assessment: &Assessment<'_>,
    request: &AnalysisRequest,
    violated: bool,
) -> String {
    let mut out = format!(
        "{} / {} scored {:.1} out of 100. ",
        pillar, assessment.def.name, assessment.score
    );

    if assessment.found.is_empty() {
        let wanted: Vec<&str> = assessment.def.keywords.iter().take(3).copied().collect();
        out.push_str(&format!(
            "No mention of {} in the architecture description.",
            wanted.join(" or ")
        ));
    } else {
        out.push_str(&format!(
            "Evidence found: {}.",
            assessment.found.join(", ")
        ));
    }

    if !assessment.gaps.is_empty() {
        out.push_str(&format!(" Risk signals: {}.", assessment.gaps.join(", ")));
    }

    if assessment.service_hit {
        out.push_str(" Supported by services detected in the diagram.");
    }

    if violated && let Some(summary) = &request.reactive_summary {
        out.push_str(&format!(
            " Incident history ({} cases, {} risk) implicates this pillar.",
            summary.total_cases, summary.risk_level
        ));
    }

    out
}
