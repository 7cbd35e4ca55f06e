//! Prompt Construction
//!
//! Section-based builder for pillar review prompts. The output format the
//! model is asked for ("Name: score/100" lines and a numbered recommendations
//! list) is what the response parser looks for first, but nothing depends on
//! the model following it.

use super::profiles::PillarProfile;
use crate::ai::CompletionRequest;
use crate::types::{AnalysisRequest, truncate_chars};

#[derive(Debug, Clone)]
enum PromptSection {
    Objectives(Vec<String>),
    Text {
        header: Option<String>,
        content: String,
    },
    Focus {
        target: String,
        restrictions: Vec<String>,
    },
}

/// Prompt builder for consistent prompt construction
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    sections: Vec<PromptSection>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objectives<I, S>(mut self, objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sections.push(PromptSection::Objectives(
            objectives.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn text(mut self, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: None,
            content: content.to_string(),
        });
        self
    }

    /// Text section with header
    pub fn section(mut self, header: &str, content: &str) -> Self {
        self.sections.push(PromptSection::Text {
            header: Some(header.to_string()),
            content: content.to_string(),
        });
        self
    }

    pub fn focus(mut self, target: &str, restrictions: Vec<&str>) -> Self {
        self.sections.push(PromptSection::Focus {
            target: target.to_string(),
            restrictions: restrictions.into_iter().map(String::from).collect(),
        });
        self
    }

    pub fn build(self) -> String {
        let mut prompt = String::new();

        for section in self.sections {
            match section {
                PromptSection::Objectives(objectives) => {
                    prompt.push_str("<OBJECTIVES>\n");
                    for (i, obj) in objectives.iter().enumerate() {
                        prompt.push_str(&format!("{}. {}\n", i + 1, obj));
                    }
                    prompt.push_str("</OBJECTIVES>\n\n");
                }
                PromptSection::Text { header, content } => {
                    if let Some(h) = header {
                        prompt.push_str(&format!("# {}\n\n", h));
                    }
                    prompt.push_str(&content);
                    prompt.push_str("\n\n");
                }
                PromptSection::Focus {
                    target,
                    restrictions,
                } => {
                    prompt.push_str("<FOCUS>\n");
                    prompt.push_str(&format!("IMPORTANT: Focus EXCLUSIVELY on: {}\n", target));
                    for restriction in restrictions {
                        prompt.push_str(&format!("- {}\n", restriction));
                    }
                    prompt.push_str("</FOCUS>\n\n");
                }
            }
        }

        prompt.trim_end().to_string()
    }
}

/// Full completion request for one pillar agent
pub fn pillar_prompt(
    profile: &PillarProfile,
    request: &AnalysisRequest,
    max_architecture_chars: usize,
) -> CompletionRequest {
    let pillar = profile.pillar.name();

    let architecture = if request.architecture_text.trim().is_empty() {
        "(no architecture description was provided)".to_string()
    } else {
        let truncated = truncate_chars(&request.architecture_text, max_architecture_chars);
        if truncated.len() < request.architecture_text.len() {
            format!("{}\n[... description truncated]", truncated)
        } else {
            truncated.to_string()
        }
    };

    let score_lines = profile
        .sub_categories
        .iter()
        .map(|s| format!("{}: <score>/100", s.name))
        .collect::<Vec<_>>()
        .join("\n");

    let mut builder = PromptBuilder::new()
        .objectives(
            profile
                .focus
                .iter()
                .map(|f| format!("Assess {}", f)),
        )
        .focus(
            &format!("the {} pillar", pillar),
            vec![
                "Do NOT review other pillars",
                "ONLY cite components that appear in the description",
            ],
        )
        .section("Architecture", &architecture);

    if !request.detected_services.is_empty() {
        builder = builder.section(
            "Services detected in diagrams",
            &request.detected_services.join(", "),
        );
    }

    if let Some(summary) = request.reactive_summary.as_ref().filter(|s| !s.is_empty()) {
        let patterns = summary
            .pattern_counts
            .iter()
            .map(|p| format!("- {}: {} cases", p.pattern, p.count))
            .collect::<Vec<_>>()
            .join("\n");
        builder = builder.section(
            "Incident history",
            &format!(
                "{} support cases, risk level {}.\n{}",
                summary.total_cases, summary.risk_level, patterns
            ),
        );
    }

    let prompt = builder
        .section(
            "Response format",
            &format!(
                "Score each sub-category from 0 to 100, one per line:\n{}\n\n\
                 Then write a \"Recommendations\" heading followed by up to 3 numbered items:\n\
                 1. <title>: <one or two sentences naming the affected component>. \
                 Priority: <Critical|High|Medium|Low>. Effort: <High|Medium|Low>.",
                score_lines
            ),
        )
        .build();

    CompletionRequest {
        system: profile.expertise.to_string(),
        prompt,
    }
}
