//! Scorecard Rendering
//!
//! Plain-text and JSON views of a [`Scorecard`] and of a standalone
//! [`ReactiveSummary`].

use std::fmt::Write as _;
use std::str::FromStr;

use console::style;

use crate::types::{AnalysisSource, Pillar, Priority, ReactiveSummary, Result, Scorecard};

/// Recommendations shown in the text view
const TEXT_RECOMMENDATIONS: usize = 10;

/// Pillar floors under which a business-impact finding is raised
const FINDING_FLOORS: &[(Pillar, f64, &str)] = &[
    (
        Pillar::Reliability,
        70.0,
        "Business continuity risk: reliability concerns could impact customer experience and revenue",
    ),
    (
        Pillar::Security,
        70.0,
        "Security exposure: security gaps present compliance and data protection risks",
    ),
    (
        Pillar::CostOptimization,
        60.0,
        "Cost inefficiency: significant opportunity to reduce infrastructure spending",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format '{}'. Valid values: text, json", s)),
        }
    }
}

pub fn render_scorecard(card: &Scorecard, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(card)?),
        OutputFormat::Text => Ok(scorecard_text(card)),
    }
}

pub fn render_reactive(summary: &ReactiveSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => Ok(reactive_text(summary)),
    }
}

/// Business-level headline for the overall score plus one line per weak pillar
pub fn executive_findings(card: &Scorecard) -> Vec<String> {
    let headline = if card.overall_percentage >= 80.0 {
        "Strong architecture foundation: the architecture follows well-architected practice closely"
    } else if card.overall_percentage >= 60.0 {
        "Good foundation with improvement opportunities: solid overall, with strategic areas to enhance"
    } else {
        "Significant improvement required: several areas need immediate attention"
    };

    let mut findings = vec![headline.to_string()];
    for &(pillar, floor, finding) in FINDING_FLOORS {
        if card.pillar(pillar).is_some_and(|r| r.overall_score < floor) {
            findings.push(finding.to_string());
        }
    }
    findings
}

// =============================================================================
// Text Views
// =============================================================================

// Writes into a String cannot fail, so the fmt::Result values are dropped.

fn scorecard_text(card: &Scorecard) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        style("Overall score:").bold(),
        style(format!("{:.1}%", card.overall_percentage)).bold().cyan()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", style("Key findings").bold().underlined());
    for finding in executive_findings(card) {
        let _ = writeln!(out, "  - {}", finding);
    }
    let _ = writeln!(out);

    for result in &card.pillar_scores {
        let tag = match result.source {
            AnalysisSource::Llm => style("llm").green(),
            AnalysisSource::Emulated => style("emulated").yellow(),
        };
        let _ = writeln!(
            out,
            "{:<26} {:>5.1}  [{}]",
            style(result.pillar.name()).bold(),
            result.overall_score,
            tag
        );
        for sub in &result.sub_categories {
            let _ = writeln!(out, "    {:<32} {:>3}%", sub.name, sub.percentage);
        }
    }

    if !card.recommendations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Top recommendations").bold().underlined());
        for (i, rec) in card
            .recommendations
            .iter()
            .take(TEXT_RECOMMENDATIONS)
            .enumerate()
        {
            let _ = writeln!(
                out,
                "{:>2}. [{}] {} ({}, {})",
                i + 1,
                priority_label(rec.priority),
                rec.title,
                rec.pillar.name(),
                rec.azure_service
            );
        }
        if card.recommendations.len() > TEXT_RECOMMENDATIONS {
            let _ = writeln!(
                out,
                "    ... {} more",
                card.recommendations.len() - TEXT_RECOMMENDATIONS
            );
        }
    }

    if !card.conflicts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Trade-offs").bold().underlined());
        for conflict in &card.conflicts {
            let _ = writeln!(
                out,
                "  [{}] {} vs {}: {}",
                conflict.severity,
                conflict.pillars[0].name(),
                conflict.pillars[1].name(),
                conflict.description
            );
        }
    }

    if let Some(reactive) = &card.reactive {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Incident history: {} cases, risk {} (score {:.1})",
            reactive.total_cases,
            reactive.risk_level,
            reactive.risk_assessment.overall_risk_score
        );
    }

    let metrics = &card.collaboration_metrics;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "LLM coverage: {}/{} agents ({:.0}%)",
        metrics.agents_on_llm_path,
        metrics.agents_run,
        metrics.llm_coverage() * 100.0
    );

    out
}

fn reactive_text(summary: &ReactiveSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {} ({} high severity)",
        style("Cases analyzed:").bold(),
        summary.total_cases,
        summary.high_severity_cases
    );
    let _ = writeln!(out, "{} {}", style("Risk level:").bold(), summary.risk_level);

    let risk = &summary.risk_assessment;
    if !risk.pillar_risks.is_empty() {
        let _ = writeln!(out, "{} {:.1}", style("Risk score:").bold(), risk.overall_risk_score);
        for pillar_risk in &risk.pillar_risks {
            let _ = writeln!(
                out,
                "  {:<28} {:>5.1}",
                pillar_risk.pillar.name(),
                pillar_risk.score
            );
        }
        for factor in &risk.risk_factors {
            let _ = writeln!(out, "  - {}", factor);
        }
    }

    if !summary.pattern_counts.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Patterns").bold().underlined());
        for pattern in &summary.pattern_counts {
            let _ = writeln!(out, "  {:<28} {:>5}", pattern.pattern, pattern.count);
        }
    }

    if !summary.violated_pillars.is_empty() {
        let pillars: Vec<&str> = summary.violated_pillars.iter().map(|p| p.name()).collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "Pillars implicated: {}", pillars.join(", "));
    }

    if !summary.affected_services.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", style("Most affected services").bold().underlined());
        for impact in &summary.affected_services {
            let _ = writeln!(
                out,
                "  {:<36} {:>5}  {}",
                impact.service, impact.case_count, impact.risk_level
            );
        }
    }

    for rec in &summary.recommendations {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {}", priority_label(rec.priority), rec.title);
        let _ = writeln!(out, "    {}", rec.details);
    }

    out
}

fn priority_label(priority: Priority) -> console::StyledObject<String> {
    let label = priority.to_string();
    match priority {
        Priority::Critical => style(label).red().bold(),
        Priority::High => style(label).red(),
        Priority::Medium => style(label).yellow(),
        Priority::Low => style(label).dim(),
    }
}
