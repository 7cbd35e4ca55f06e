//! Pillar Profiles
//!
//! Static configuration records that drive the generic pillar agent: the
//! sub-categories a pillar is scored on, what evidence moves each score,
//! recommendation templates and the vocabulary that marks a model response
//! as relevant to the pillar.

mod cost;
mod operations;
mod performance;
mod reliability;
mod security;

use crate::review::patterns::PatternExtractor;
use crate::types::{Effort, Pillar};

/// One scored facet of a pillar
#[derive(Debug)]
pub struct SubCategoryDef {
    /// Display name, also the label models are asked to score
    pub name: &'static str,
    /// Alternative labels accepted in model output
    pub aliases: &'static [&'static str],
    /// Emulated starting score
    pub base_score: f64,
    /// Architecture phrases that earn `bonus`
    pub keywords: &'static [&'static str],
    pub bonus: f64,
    /// Phrases describing a gap, each present one costs `penalty`
    pub gap_terms: &'static [&'static str],
    pub penalty: f64,
    /// Catalogue services that support this facet when detected in a diagram
    pub services: &'static [&'static str],
}

impl SubCategoryDef {
    pub fn keyword_matcher(&self) -> PatternExtractor {
        PatternExtractor::new(self.keywords)
    }

    pub fn gap_matcher(&self) -> PatternExtractor {
        PatternExtractor::new(self.gap_terms)
    }

    /// Name plus aliases
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Canned recommendation for a sub-category
#[derive(Debug)]
pub struct RecommendationTemplate {
    /// Sub-category this template addresses
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Phrases that tie a response sentence to this template
    pub keywords: &'static [&'static str],
    pub service: &'static str,
    pub effort: Effort,
}

#[derive(Debug)]
pub struct PillarProfile {
    pub pillar: Pillar,
    /// System framing for the model
    pub expertise: &'static str,
    /// Review focus areas listed in the prompt
    pub focus: &'static [&'static str],
    pub sub_categories: &'static [SubCategoryDef],
    pub templates: &'static [RecommendationTemplate],
    /// Terms that make free text relevant to this pillar
    pub vocabulary: &'static [&'static str],
    pub default_service: &'static str,
}

impl PillarProfile {
    pub fn template_for(&self, category: &str) -> Option<&'static RecommendationTemplate> {
        self.templates.iter().find(|t| t.category == category)
    }

    pub fn vocabulary_matcher(&self) -> PatternExtractor {
        PatternExtractor::new(self.vocabulary)
    }

    /// Vocabulary, sub-category labels and keywords combined
    pub fn relevance_matcher(&self) -> PatternExtractor {
        let terms = self
            .vocabulary
            .iter()
            .copied()
            .chain(self.sub_categories.iter().flat_map(|s| s.labels()))
            .chain(self.sub_categories.iter().flat_map(|s| s.keywords.iter().copied()));
        PatternExtractor::new(terms)
    }
}

/// Profile for a pillar
pub fn profile(pillar: Pillar) -> &'static PillarProfile {
    match pillar {
        Pillar::Reliability => &reliability::PROFILE,
        Pillar::Security => &security::PROFILE,
        Pillar::CostOptimization => &cost::PROFILE,
        Pillar::OperationalExcellence => &operations::PROFILE,
        Pillar::PerformanceEfficiency => &performance::PROFILE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::services;

    #[test]
    fn test_every_pillar_has_five_sub_categories() {
        for pillar in Pillar::ALL {
            let profile = profile(pillar);
            assert_eq!(profile.pillar, pillar);
            assert_eq!(profile.sub_categories.len(), 5, "{}", pillar);
        }
    }

    #[test]
    fn test_every_sub_category_has_a_template() {
        for pillar in Pillar::ALL {
            let profile = profile(pillar);
            for sub in profile.sub_categories {
                assert!(
                    profile.template_for(sub.name).is_some(),
                    "{} / {} has no template",
                    pillar,
                    sub.name
                );
            }
        }
    }

    #[test]
    fn test_referenced_services_exist_in_catalogue() {
        for pillar in Pillar::ALL {
            let profile = profile(pillar);
            assert!(services::lookup(profile.default_service).is_some());
            for template in profile.templates {
                assert!(
                    services::lookup(template.service).is_some(),
                    "{}",
                    template.service
                );
            }
            for sub in profile.sub_categories {
                for service in sub.services {
                    assert!(services::lookup(service).is_some(), "{}", service);
                }
            }
        }
    }

    #[test]
    fn test_base_scores_in_range() {
        for pillar in Pillar::ALL {
            for sub in profile(pillar).sub_categories {
                assert!((0.0..=100.0).contains(&sub.base_score));
                assert!(sub.base_score + sub.bonus <= 100.0);
            }
        }
    }
}
