//! Recommendation extraction
//!
//! Layer 1 reads list items under a recommendations heading. Layer 2 falls
//! back to the pillar's templates when the response names their keywords but
//! has no usable list. Either way each recommendation's `details` is a
//! sentence taken from the response itself, and no sentence is used twice.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::parser::{
    MAX_DETAILS_CHARS, MAX_RECOMMENDATIONS, MIN_FALLBACK_SENTENCE_CHARS, MAX_TITLE_CHARS,
    MIN_TITLE_CHARS,
};
use crate::review::agents::profiles::{PillarProfile, RecommendationTemplate};
use crate::review::patterns::{PatternExtractor, Sentence, sentence_containing, split_sentences};
use crate::review::{impact, services};
use crate::types::{
    Effort, ParseWithDefault, Priority, Recommendation, SubCategoryScore, truncate_chars,
};

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+[.)]|[-*•])\s+(.+)$").expect("valid regex")
});

static PRIORITY_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bpriority\s*[:=]\s*\**\s*(critical|urgent|high|medium|moderate|low)\b")
        .expect("valid regex")
});

static EFFORT_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\beffort\s*[:=]\s*\**\s*(high|large|medium|moderate|low|small)\b")
        .expect("valid regex")
});

/// Inline field clauses stripped from descriptions
static FIELD_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[(\[]?\s*\b(?:priority|effort)\s*[:=]\s*\**\s*[a-z]+\**\s*[)\]]?[.,;]?")
        .expect("valid regex")
});

/// One list item under the recommendations heading
#[derive(Debug)]
struct ListItem {
    text: String,
    /// Byte offset of the item's first line in the response
    offset: usize,
}

/// Recommendations found in a response, at most `MAX_RECOMMENDATIONS`
pub fn extract_recommendations(
    text: &str,
    profile: &PillarProfile,
    scores: &[SubCategoryScore],
) -> Vec<Recommendation> {
    let sentences = split_sentences(text);
    let mut consumed: HashSet<usize> = HashSet::new();

    let items = list_items(text);
    if items.is_empty() {
        from_templates(text, &sentences, profile, scores, &mut consumed)
    } else {
        items
            .iter()
            .filter_map(|item| from_item(item, text, &sentences, profile, scores, &mut consumed))
            .take(MAX_RECOMMENDATIONS)
            .collect()
    }
}

// =============================================================================
// Layer 1: list items
// =============================================================================

fn is_heading(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('#')
        || (trimmed.ends_with(':') && !LIST_ITEM.is_match(line))
        || (trimmed.starts_with("**") && trimmed.ends_with("**"))
}

/// Items listed after the first heading mentioning recommendations, up to the
/// next heading. Indented continuation lines join the item above.
fn list_items(text: &str) -> Vec<ListItem> {
    let mut items: Vec<ListItem> = Vec::new();
    let mut in_section = false;
    let mut offset = 0;

    for raw in text.split_inclusive('\n') {
        let line_start = offset;
        offset += raw.len();
        let line = raw.trim_end_matches(['\n', '\r']);
        let lower = line.to_ascii_lowercase();
        if !in_section {
            if lower.contains("recommend") && !LIST_ITEM.is_match(line) {
                in_section = true;
            }
            continue;
        }

        if let Some(caps) = LIST_ITEM.captures(line) {
            items.push(ListItem {
                text: caps[1].replace("**", "").trim().to_string(),
                offset: line_start,
            });
        } else if line.trim().is_empty() {
            continue;
        } else if is_heading(line) {
            break;
        } else if line.starts_with([' ', '\t'])
            && let Some(last) = items.last_mut()
        {
            last.text.push(' ');
            last.text.push_str(line.trim());
        }
    }

    items
}

fn from_item(
    item: &ListItem,
    text: &str,
    sentences: &[Sentence<'_>],
    profile: &PillarProfile,
    scores: &[SubCategoryScore],
    consumed: &mut HashSet<usize>,
) -> Option<Recommendation> {
    let (title, body) = split_title(&item.text)?;
    let template = best_template(&item.text, profile, scores);

    let priority = PRIORITY_FIELD
        .captures(&item.text)
        .map(|c| Priority::parse_or_default(&c[1]))
        .unwrap_or_else(|| priority_cue(&item.text));
    let effort = EFFORT_FIELD
        .captures(&item.text)
        .map(|c| Effort::parse_or_default(&c[1]))
        .unwrap_or_else(|| effort_cue(&item.text));

    let description = clean_description(body);
    let description = if description.is_empty() {
        title.clone()
    } else {
        description
    };

    let keywords = PatternExtractor::new(
        template.keywords.iter().copied().chain(
            title
                .split(|c: char| !c.is_alphanumeric() && c != '-')
                .filter(|w| w.len() > 4),
        ),
    );
    let details = details_for(&keywords, item.offset, text, sentences, profile, consumed)?;

    let service = services::find_service(&item.text)
        .map(|s| s.name)
        .unwrap_or(template.service);

    Some(Recommendation {
        impact: impact::impact_statement(&title, profile.pillar),
        title,
        description,
        effort,
        priority,
        azure_service: service.to_string(),
        reference_url: Some(services::reference_url(service).to_string()),
        pillar: profile.pillar,
        category: template.category.to_string(),
        details,
    })
}

/// Title before the first colon or dash separator, else the first sentence
fn split_title(item: &str) -> Option<(String, &str)> {
    let separator = [": ", " - ", " – "]
        .iter()
        .filter_map(|sep| item.find(sep).map(|at| (at, sep.len())))
        .min_by_key(|(at, _)| *at);

    if let Some((at, len)) = separator {
        let head = item[..at].trim();
        if (MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&head.chars().count())
            && !head.to_ascii_lowercase().starts_with("priority")
        {
            return Some((head.to_string(), item[at + len..].trim()));
        }
    }

    let first = split_sentences(item).into_iter().next()?;
    let head = first.text.trim_end_matches(['.', '!', '?']);
    if head.chars().count() < MIN_TITLE_CHARS {
        return None;
    }
    Some((
        truncate_chars(head, MAX_TITLE_CHARS).trim_end().to_string(),
        item[first.end..].trim(),
    ))
}

fn clean_description(body: &str) -> String {
    let stripped = FIELD_CLAUSE.replace_all(body, "");
    stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches([',', ';', ' '])
        .to_string()
}

fn priority_cue(text: &str) -> Priority {
    let lower = text.to_ascii_lowercase();
    if lower.contains("critical") {
        Priority::Critical
    } else if lower.contains("high priority") || lower.contains("urgent") {
        Priority::High
    } else if lower.contains("low priority") {
        Priority::Low
    } else {
        Priority::Medium
    }
}

fn effort_cue(text: &str) -> Effort {
    let lower = text.to_ascii_lowercase();
    if lower.contains("high effort") || lower.contains("complex") {
        Effort::High
    } else if lower.contains("low effort") || lower.contains("simple") || lower.contains("quick win")
    {
        Effort::Low
    } else {
        Effort::Medium
    }
}

/// Template whose sub-category the item talks about most; ties and misses go
/// to the weakest-scoring sub-category
fn best_template(
    item: &str,
    profile: &PillarProfile,
    scores: &[SubCategoryScore],
) -> &'static RecommendationTemplate {
    let weakest = scores
        .iter()
        .min_by(|a, b| a.score.total_cmp(&b.score))
        .and_then(|s| profile.template_for(&s.name));

    let mut best: Option<(&'static RecommendationTemplate, usize)> = None;
    for template in profile.templates {
        let sub_terms = profile
            .sub_categories
            .iter()
            .find(|s| s.name == template.category)
            .map(|s| s.labels().chain(s.keywords.iter().copied()).collect::<Vec<_>>())
            .unwrap_or_default();
        let hits = PatternExtractor::new(template.keywords.iter().copied().chain(sub_terms))
            .count(item);
        if hits > 0 && best.is_none_or(|(_, n)| hits > n) {
            best = Some((template, hits));
        }
    }

    best.map(|(t, _)| t)
        .or(weakest)
        .unwrap_or(&profile.templates[0])
}

// =============================================================================
// Layer 2: templates
// =============================================================================

fn from_templates(
    text: &str,
    sentences: &[Sentence<'_>],
    profile: &PillarProfile,
    scores: &[SubCategoryScore],
    consumed: &mut HashSet<usize>,
) -> Vec<Recommendation> {
    let score_of = |category: &str| scores.iter().find(|s| s.name == category).map(|s| s.score);

    let mut candidates: Vec<&'static RecommendationTemplate> = profile
        .templates
        .iter()
        .filter(|t| PatternExtractor::new(t.keywords).contains_any(text))
        .collect();
    candidates.sort_by(|a, b| {
        let a = score_of(a.category).unwrap_or(f64::MAX);
        let b = score_of(b.category).unwrap_or(f64::MAX);
        a.total_cmp(&b)
    });

    let mut out = Vec::new();
    for template in candidates {
        if out.len() == MAX_RECOMMENDATIONS {
            break;
        }
        let keywords = PatternExtractor::new(template.keywords);
        let Some(details) = details_for(&keywords, 0, text, sentences, profile, consumed) else {
            continue;
        };
        let priority = score_of(template.category).map_or(Priority::Medium, Priority::for_score);

        out.push(Recommendation {
            title: template.title.to_string(),
            description: template.description.to_string(),
            impact: impact::impact_statement(template.title, profile.pillar),
            effort: template.effort,
            priority,
            azure_service: template.service.to_string(),
            reference_url: Some(services::reference_url(template.service).to_string()),
            pillar: profile.pillar,
            category: template.category.to_string(),
            details,
        });
    }
    out
}

// =============================================================================
// Details
// =============================================================================

/// Sentence around the unconsumed keyword hit nearest to `anchor`, else the
/// first long unconsumed sentence with any pillar term
fn details_for(
    keywords: &PatternExtractor,
    anchor: usize,
    text: &str,
    sentences: &[Sentence<'_>],
    profile: &PillarProfile,
    consumed: &mut HashSet<usize>,
) -> Option<String> {
    let mut hits = keywords.find_all(text);
    hits.sort_by_key(|hit| hit.start.abs_diff(anchor));
    let by_keyword = hits.into_iter().find_map(|hit| {
        sentence_containing(sentences, hit.start).filter(|s| usable(s, consumed))
    });

    let chosen = by_keyword.or_else(|| {
        let vocabulary = profile.vocabulary_matcher();
        sentences
            .iter()
            .find(|s| {
                s.text.chars().count() > MIN_FALLBACK_SENTENCE_CHARS
                    && vocabulary.contains_any(s.text)
                    && usable(s, consumed)
            })
            .cloned()
    })?;

    consumed.insert(chosen.start);
    let cleaned = chosen.text.replace("**", "");
    Some(truncate_chars(cleaned.trim(), MAX_DETAILS_CHARS).to_string())
}

/// Unconsumed, not boilerplate, and more than a bare `Priority:` clause
fn usable(sentence: &Sentence<'_>, consumed: &HashSet<usize>) -> bool {
    !consumed.contains(&sentence.start)
        && clean_description(sentence.text).chars().count() >= MIN_TITLE_CHARS
        && !impact::is_generic_details(sentence.text)
}
