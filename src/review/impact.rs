//! Impact statements and placeholder detail strings

use crate::types::Pillar;

/// Boilerplate detail strings that never count as evidence.
///
/// Matched case-insensitively after trimming; `{pillar}` stands for any
/// lowercase pillar name.
const GENERIC_DETAIL_TEMPLATES: &[&str] = &[
    "AI-powered recommendation based on comprehensive {pillar} analysis of your architecture.",
    "AI-generated recommendation from comprehensive analysis of your {pillar} architecture.",
    "Recommendation based on architecture analysis.",
    "See recommendation description.",
    "No additional details.",
];

/// Whether `details` is empty or one of the generic placeholders
pub fn is_generic_details(details: &str) -> bool {
    let trimmed = details.trim();
    if trimmed.is_empty() {
        return true;
    }
    GENERIC_DETAIL_TEMPLATES.iter().any(|template| {
        if template.contains("{pillar}") {
            Pillar::ALL.iter().any(|p| {
                template
                    .replace("{pillar}", &p.name().to_lowercase())
                    .eq_ignore_ascii_case(trimmed)
            })
        } else {
            template.eq_ignore_ascii_case(trimmed)
        }
    })
}

/// Theme-based impact statement for a recommendation title
pub fn impact_statement(title: &str, pillar: Pillar) -> String {
    let lower = title.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["multi-region", "availability", "redundan", "failover"]) {
        "Reduces downtime exposure and adds regional disaster recovery capability".to_string()
    } else if has(&["security", "encryption", "identity", "access", "threat"]) {
        "Strengthens security posture and supports compliance obligations".to_string()
    } else if has(&["monitoring", "alert", "observability", "telemetry"]) {
        "Shortens mean time to detect and resolve incidents".to_string()
    } else if has(&["cost", "spend", "reserved", "right-siz", "waste"]) {
        "Lowers operating cost through better resource management".to_string()
    } else if has(&["performance", "scaling", "latency", "cache", "caching"]) {
        "Improves response times and absorbs traffic spikes".to_string()
    } else if has(&["backup", "recovery", "restore"]) {
        "Protects data with verified recovery paths".to_string()
    } else if has(&["automation", "deploy", "pipeline", "infrastructure as code"]) {
        "Reduces manual change risk through repeatable automation".to_string()
    } else {
        format!(
            "Improves the {} quality of the architecture",
            pillar.name().to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_details_detection() {
        assert!(is_generic_details(""));
        assert!(is_generic_details("   "));
        assert!(is_generic_details(
            "AI-powered recommendation based on comprehensive security analysis of your architecture."
        ));
        assert!(!is_generic_details(
            "The API tier has no rate limiting in front of the order service."
        ));
    }

    #[test]
    fn test_impact_themes() {
        assert!(impact_statement("Deploy multi-region failover", Pillar::Reliability)
            .contains("downtime"));
        assert!(impact_statement("Enable Redis caching", Pillar::PerformanceEfficiency)
            .contains("response times"));
        assert!(impact_statement("Purchase reserved capacity", Pillar::CostOptimization)
            .contains("cost"));
    }

    #[test]
    fn test_impact_pillar_fallback() {
        let impact = impact_statement("Tidy up naming", Pillar::OperationalExcellence);
        assert_eq!(
            impact,
            "Improves the operational excellence quality of the architecture"
        );
    }
}
