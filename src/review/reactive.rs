//! Reactive Case Analyzer
//!
//! Classifies historical support cases into issue patterns and derives the
//! pillars they implicate, an overall risk level, the most affected services
//! and follow-up recommendations.
//!
//! ## Input
//! CSV exports with a header row. Column names are matched case-insensitively
//! against a small alias table, so both CRM exports (`msdfm_productname`,
//! `ticketnumber`, ...) and hand-made sheets (`product`, `ticket`, ...) work.
//! Bad rows are skipped; a file without any text column yields no cases.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use tracing::{debug, info, warn};

use super::patterns::PatternExtractor;
use super::services;
use crate::constants::reactive::{
    CASE_VOLUME_THRESHOLD, DISTINCT_PATTERN_THRESHOLD, HIGH_EFFORT_CASE_COUNT,
    MAX_AFFECTED_SERVICES, MAX_CASE_EXAMPLES, MIN_CASES_FOR_RECOMMENDATION,
    OPERATIONAL_RISK_PER_CASE, RELIABILITY_RISK_PER_PATTERN, SECURITY_RISK_PER_PATTERN,
};
use crate::types::{
    Effort, PatternCount, Pillar, PillarRisk, Priority, ReactiveSummary, Recommendation, Result,
    RiskAssessment, RiskLevel, ServiceImpact, round1, truncate_chars,
};

// =============================================================================
// Case Records
// =============================================================================

/// One support case, normalized from a CSV row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseRecord {
    pub ticket: String,
    pub title: String,
    /// Root cause, customer statement and resolution text joined together
    pub description: String,
    pub product: String,
    pub severity: String,
    pub created_on: String,
}

impl CaseRecord {
    fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    fn is_high_severity(&self) -> bool {
        let severity = self.severity.to_lowercase();
        severity.contains("critical") || severity.contains("high")
    }
}

const TITLE_COLUMNS: &[&str] = &["title", "subject", "summary"];
const DESCRIPTION_COLUMNS: &[&str] = &[
    "description",
    "msdfm_rootcausedescription",
    "msdfm_customerstatement",
    "msdfm_resolution",
    "root_cause",
    "customer_statement",
    "resolution",
];
const TICKET_COLUMNS: &[&str] = &["ticketnumber", "ticket", "id", "case_id"];
const PRODUCT_COLUMNS: &[&str] = &["msdfm_productname", "product", "service", "category"];
const SEVERITY_COLUMNS: &[&str] = &["severity", "priority"];
const CREATED_COLUMNS: &[&str] = &["createdon", "created_on", "created"];

/// Column positions resolved from a header row
struct ColumnMap {
    title: Option<usize>,
    description: Vec<usize>,
    ticket: Option<usize>,
    product: Option<usize>,
    severity: Option<usize>,
    created_on: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_lowercase())
            .collect();
        let first = |aliases: &[&str]| {
            aliases
                .iter()
                .find_map(|alias| names.iter().position(|n| n == alias))
        };

        Self {
            title: first(TITLE_COLUMNS),
            description: DESCRIPTION_COLUMNS
                .iter()
                .filter_map(|alias| names.iter().position(|n| n == alias))
                .collect(),
            ticket: first(TICKET_COLUMNS),
            product: first(PRODUCT_COLUMNS),
            severity: first(SEVERITY_COLUMNS),
            created_on: first(CREATED_COLUMNS),
        }
    }

    fn has_text(&self) -> bool {
        self.title.is_some() || !self.description.is_empty()
    }

    fn record(&self, row: &csv::StringRecord) -> CaseRecord {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .unwrap_or_default()
                .to_string()
        };

        let description = self
            .description
            .iter()
            .filter_map(|&i| row.get(i))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        CaseRecord {
            ticket: cell(self.ticket),
            title: cell(self.title),
            description,
            product: cell(self.product),
            severity: cell(self.severity),
            created_on: cell(self.created_on),
        }
    }
}

/// Parse a CSV export into case records.
///
/// Empty input and files without a title or description column give an empty
/// list; malformed rows are skipped and rows past `max_records` are dropped.
pub fn parse_case_csv(text: &str, max_records: usize) -> Result<Vec<CaseRecord>> {
    if text.trim().is_empty() {
        debug!("Case CSV is empty");
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns = ColumnMap::from_headers(reader.headers()?);
    if !columns.has_text() {
        warn!("Case CSV has no title or description column, ignoring file");
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut dropped = 0usize;

    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!("Skipping malformed case row {}: {}", line + 2, e);
                skipped += 1;
                continue;
            }
        };

        if row.iter().all(str::is_empty) {
            continue;
        }

        if records.len() >= max_records {
            dropped += 1;
            continue;
        }

        let record = columns.record(&row);
        if record.title.is_empty() && record.description.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(record);
    }

    if skipped > 0 {
        warn!("Skipped {} unusable case rows", skipped);
    }
    if dropped > 0 {
        warn!(
            "Case export over the {} record limit, dropped {} rows",
            max_records, dropped
        );
    }

    Ok(records)
}

// =============================================================================
// Pattern Registry
// =============================================================================

/// Issue signature
struct PatternDef {
    name: &'static str,
    /// Lowercase phrases matched against title and description
    keywords: &'static [&'static str],
    /// First entry is the primary pillar
    pillars: &'static [Pillar],
    severity: Priority,
    service: &'static str,
    /// `{count}` is replaced by the number of matching cases
    impact: &'static str,
}

static PATTERN_REGISTRY: &[PatternDef] = &[
    PatternDef {
        name: "authentication failure",
        keywords: &[
            "authentication",
            "auth failure",
            "auth",
            "login",
            "sign-in",
            "access denied",
            "forbidden",
            "unauthorized",
            "401",
            "403",
            "consent",
        ],
        pillars: &[Pillar::Security],
        severity: Priority::High,
        service: "Azure Active Directory",
        impact: "Resolve {count} authentication failures affecting user access and system security",
    },
    PatternDef {
        name: "throttling",
        keywords: &[
            "throttling",
            "throttled",
            "rate limit",
            "429",
            "too many requests",
            "quota exceeded",
        ],
        pillars: &[Pillar::PerformanceEfficiency, Pillar::Reliability],
        severity: Priority::Medium,
        service: "Azure API Management",
        impact: "Remove request throttling observed in {count} support cases",
    },
    PatternDef {
        name: "cost overrun",
        keywords: &[
            "billing",
            "cost",
            "expensive",
            "budget",
            "charges",
            "overspend",
            "invoice",
        ],
        pillars: &[Pillar::CostOptimization],
        severity: Priority::Medium,
        service: "Azure Cost Management",
        impact: "Optimize costs and prevent budget overruns affecting {count} services",
    },
    PatternDef {
        name: "availability incident",
        keywords: &[
            "outage",
            "downtime",
            "unavailable",
            "service interruption",
            "crash",
            "503",
        ],
        pillars: &[Pillar::Reliability],
        severity: Priority::Critical,
        service: "Azure Traffic Manager",
        impact: "Address availability problems impacting {count} critical systems",
    },
    PatternDef {
        name: "performance degradation",
        keywords: &[
            "slow",
            "timeout",
            "latency",
            "response time",
            "performance",
            "degraded",
        ],
        pillars: &[Pillar::PerformanceEfficiency],
        severity: Priority::Medium,
        service: "Azure Cache for Redis",
        impact: "Improve system performance issues affecting {count} workloads",
    },
    PatternDef {
        name: "data loss",
        keywords: &[
            "data loss",
            "corruption",
            "corrupted",
            "restore",
            "backup failure",
            "deleted data",
        ],
        pillars: &[Pillar::Reliability],
        severity: Priority::Critical,
        service: "Azure Backup",
        impact: "Prevent data loss scenarios identified in {count} support cases",
    },
    PatternDef {
        name: "security incident",
        keywords: &[
            "breach",
            "vulnerability",
            "malware",
            "attack",
            "exploit",
            "ddos",
            "intrusion",
        ],
        pillars: &[Pillar::Security],
        severity: Priority::Critical,
        service: "Microsoft Defender for Cloud",
        impact: "Strengthen security posture based on {count} reported incidents",
    },
    PatternDef {
        name: "operational complexity",
        keywords: &[
            "manual",
            "complex",
            "difficult",
            "maintenance",
            "deployment failure",
            "misconfiguration",
            "configuration drift",
        ],
        pillars: &[Pillar::OperationalExcellence],
        severity: Priority::Medium,
        service: "Azure DevOps",
        impact: "Simplify operations and reduce complexity in {count} areas",
    },
    PatternDef {
        name: "replication churn",
        keywords: &[
            "high churn",
            "replication",
            "data churn",
            "recovery point",
            "rpo",
        ],
        pillars: &[Pillar::Reliability],
        severity: Priority::High,
        service: "Azure Site Recovery",
        impact: "Stabilize replication for {count} protected workloads",
    },
];

static PATTERN_MATCHERS: LazyLock<Vec<PatternExtractor>> = LazyLock::new(|| {
    PATTERN_REGISTRY
        .iter()
        .map(|p| PatternExtractor::new(p.keywords))
        .collect()
});

/// Names of every known pattern, in registry order
pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    PATTERN_REGISTRY.iter().map(|p| p.name)
}

// =============================================================================
// Analyzer
// =============================================================================

/// Matches accumulated for one pattern
struct PatternHits<'a> {
    def: &'static PatternDef,
    cases: Vec<&'a CaseRecord>,
}

/// Turns case records into a [`ReactiveSummary`]
pub struct ReactiveAnalyzer;

impl ReactiveAnalyzer {
    /// Parse and analyze a CSV export in one step
    pub fn analyze_csv(text: &str, max_records: usize) -> Result<ReactiveSummary> {
        let records = parse_case_csv(text, max_records)?;
        Ok(Self::analyze(&records))
    }

    pub fn analyze(records: &[CaseRecord]) -> ReactiveSummary {
        if records.is_empty() {
            return ReactiveSummary::default();
        }

        // discovery order: first record to hit a pattern fixes its position
        let mut hits: Vec<PatternHits<'_>> = Vec::new();
        for record in records {
            let text = record.searchable_text();
            for (def, matcher) in PATTERN_REGISTRY.iter().zip(PATTERN_MATCHERS.iter()) {
                if !matcher.contains_any(&text) {
                    continue;
                }
                match hits.iter_mut().find(|h| h.def.name == def.name) {
                    Some(entry) => entry.cases.push(record),
                    None => hits.push(PatternHits {
                        def,
                        cases: vec![record],
                    }),
                }
            }
        }

        let violated_pillars: BTreeSet<Pillar> = hits
            .iter()
            .flat_map(|h| h.def.pillars.iter().copied())
            .collect();

        let high_severity_cases = records.iter().filter(|r| r.is_high_severity()).count();
        let risk_level = risk_level(hits.len(), records.len(), high_severity_cases > 0);

        let recommendations = hits
            .iter()
            .filter(|h| h.cases.len() >= MIN_CASES_FOR_RECOMMENDATION)
            .map(recommendation_for)
            .collect::<Vec<_>>();

        let affected_services = affected_services(records);
        let risk_assessment = risk_assessment(&hits, records.len(), affected_services.len());

        let summary = ReactiveSummary {
            total_cases: records.len(),
            pattern_counts: hits
                .iter()
                .map(|h| PatternCount {
                    pattern: h.def.name.to_string(),
                    count: h.cases.len(),
                })
                .collect(),
            violated_pillars,
            risk_level,
            high_severity_cases,
            affected_services,
            recommendations,
            risk_assessment,
        };

        info!(
            "Reactive analysis: {} cases, {} patterns, risk {}",
            summary.total_cases,
            summary.pattern_counts.len(),
            summary.risk_level
        );

        summary
    }
}

/// High when two or more criteria trip, Medium for one, Low otherwise
fn risk_level(distinct_patterns: usize, total_cases: usize, any_high_severity: bool) -> RiskLevel {
    let tripped = [
        distinct_patterns >= DISTINCT_PATTERN_THRESHOLD,
        total_cases >= CASE_VOLUME_THRESHOLD,
        any_high_severity,
    ]
    .into_iter()
    .filter(|&t| t)
    .count();

    match tripped {
        0 => RiskLevel::Low,
        1 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

/// Per-pillar risk scores (0-100) from pattern severity, security exposure
/// and raw case volume
fn risk_assessment(
    hits: &[PatternHits<'_>],
    total_cases: usize,
    services: usize,
) -> RiskAssessment {
    let severe_patterns = hits
        .iter()
        .filter(|h| h.def.severity >= Priority::High)
        .count();
    let security_patterns = hits
        .iter()
        .filter(|h| h.def.pillars[0] == Pillar::Security)
        .count();

    let capped = |value: f64| value.min(100.0);
    let pillar_risks = vec![
        PillarRisk {
            pillar: Pillar::Reliability,
            score: capped(severe_patterns as f64 * RELIABILITY_RISK_PER_PATTERN),
        },
        PillarRisk {
            pillar: Pillar::Security,
            score: capped(security_patterns as f64 * SECURITY_RISK_PER_PATTERN),
        },
        PillarRisk {
            pillar: Pillar::OperationalExcellence,
            score: capped(total_cases as f64 * OPERATIONAL_RISK_PER_CASE),
        },
    ];
    let overall_risk_score =
        round1(pillar_risks.iter().map(|r| r.score).sum::<f64>() / pillar_risks.len() as f64);

    let mut risk_factors = vec![
        format!("{} total support cases analyzed", total_cases),
        format!("{} high-severity patterns identified", severe_patterns),
    ];
    if services > 0 {
        risk_factors.push(format!("{} services affected", services));
    }

    RiskAssessment {
        overall_risk_score,
        pillar_risks,
        risk_factors,
    }
}

fn recommendation_for(hits: &PatternHits<'_>) -> Recommendation {
    let def = hits.def;
    let count = hits.cases.len();

    let priority = if def.severity == Priority::Critical {
        Priority::Critical
    } else {
        Priority::High
    };
    let effort = if def.severity >= Priority::High && count >= HIGH_EFFORT_CASE_COUNT {
        Effort::High
    } else {
        Effort::Medium
    };

    Recommendation {
        title: format!("Address {} Pattern", title_case(def.name)),
        description: format!(
            "Multiple cases ({}) indicate systemic {} issues requiring immediate attention",
            count, def.name
        ),
        impact: def.impact.replace("{count}", &count.to_string()),
        effort,
        priority,
        azure_service: def.service.to_string(),
        reference_url: Some(services::reference_url(def.service).to_string()),
        pillar: def.pillars[0],
        category: "Reactive Improvement".to_string(),
        details: case_details(def.name, &hits.cases),
    }
}

/// "{pattern} in N cases. Case 1: ...; Case 2: ...; ... and K additional similar cases"
fn case_details(pattern: &str, cases: &[&CaseRecord]) -> String {
    let mut parts: Vec<String> = cases
        .iter()
        .take(MAX_CASE_EXAMPLES)
        .enumerate()
        .map(|(i, case)| {
            let title = if case.title.is_empty() {
                "Untitled case"
            } else {
                case.title.as_str()
            };
            let mut part = format!("Case {}", i + 1);
            if !case.ticket.is_empty() {
                part.push_str(&format!(" [{}]", case.ticket));
            }
            part.push_str(&format!(": {}", title));
            if !case.product.is_empty() {
                part.push_str(&format!(" (Service: {})", case.product));
            }
            if !case.description.is_empty() {
                let issue = truncate_chars(&case.description, 100);
                let ellipsis = if issue.len() < case.description.len() { "..." } else { "" };
                part.push_str(&format!(" - Issue: {}{}", issue, ellipsis));
            }
            part
        })
        .collect();

    if cases.len() > MAX_CASE_EXAMPLES {
        parts.push(format!(
            "... and {} additional similar cases",
            cases.len() - MAX_CASE_EXAMPLES
        ));
    }

    format!(
        "{} observed in {} support cases. {}",
        crate::types::capitalize_first(pattern),
        cases.len(),
        parts.join("; ")
    )
}

/// Catalogue services named in case titles or products, most cited first
fn affected_services(records: &[CaseRecord]) -> Vec<ServiceImpact> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for record in records {
        let text = format!("{} {}", record.title, record.product);
        for service in services::services_in(&text) {
            *counts.entry(service.name).or_default() += 1;
        }
    }

    let mut ranked: Vec<ServiceImpact> = counts
        .into_iter()
        .map(|(service, case_count)| ServiceImpact {
            service: service.to_string(),
            case_count,
            risk_level: RiskLevel::for_service_cases(case_count),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.case_count
            .cmp(&a.case_count)
            .then_with(|| a.service.cmp(&b.service))
    });
    ranked.truncate(MAX_AFFECTED_SERVICES);
    ranked
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(crate::types::capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(title: &str) -> CaseRecord {
        CaseRecord {
            title: title.to_string(),
            ..CaseRecord::default()
        }
    }

    /// 21 rows: 3 authentication failures, 2 cost overruns, 16 neutral
    fn scenario_csv() -> String {
        let mut csv = String::from("TicketNumber,Title,msdfm_ProductName,Severity\n");
        for i in 0..3 {
            csv.push_str(&format!(
                "T-A{i},Users hit access denied on portal,Azure Kubernetes Service,Sev B\n"
            ));
        }
        for i in 0..2 {
            csv.push_str(&format!(
                "T-C{i},Unexpected billing spike last month,Azure SQL Database,Sev C\n"
            ));
        }
        for i in 0..16 {
            csv.push_str(&format!("T-N{i},Question about documentation wording,Portal,Sev C\n"));
        }
        csv
    }

    #[test]
    fn test_zero_records_is_low_and_empty() {
        let summary = ReactiveAnalyzer::analyze(&[]);
        assert_eq!(summary.total_cases, 0);
        assert!(summary.pattern_counts.is_empty());
        assert!(summary.violated_pillars.is_empty());
        assert_eq!(summary.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_scenario_counts_and_pillars() {
        let summary = ReactiveAnalyzer::analyze_csv(&scenario_csv(), 1000).unwrap();

        assert_eq!(summary.total_cases, 21);
        assert_eq!(summary.count_for("authentication failure"), 3);
        assert_eq!(summary.count_for("cost overrun"), 2);
        assert_eq!(summary.pattern_counts.len(), 2);
        assert!(summary.is_violated(Pillar::Security));
        assert!(summary.is_violated(Pillar::CostOptimization));
        // volume criterion only
        assert_eq!(summary.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_pattern_counts_keep_discovery_order() {
        let records = vec![
            case("Invoice disputed"),
            case("Login fails after password reset"),
            case("Another invoice problem"),
        ];
        let summary = ReactiveAnalyzer::analyze(&records);
        let names: Vec<&str> = summary
            .pattern_counts
            .iter()
            .map(|p| p.pattern.as_str())
            .collect();
        assert_eq!(names, vec!["cost overrun", "authentication failure"]);
    }

    #[test]
    fn test_record_matching_two_patterns_counts_both() {
        let records = vec![case("Outage caused by login failures")];
        let summary = ReactiveAnalyzer::analyze(&records);
        assert_eq!(summary.count_for("availability incident"), 1);
        assert_eq!(summary.count_for("authentication failure"), 1);
    }

    #[test]
    fn test_risk_level_criteria() {
        assert_eq!(risk_level(0, 5, false), RiskLevel::Low);
        assert_eq!(risk_level(3, 5, false), RiskLevel::Medium);
        assert_eq!(risk_level(1, 5, true), RiskLevel::Medium);
        assert_eq!(risk_level(3, 20, false), RiskLevel::High);
        assert_eq!(risk_level(4, 25, true), RiskLevel::High);
    }

    #[test]
    fn test_high_severity_trips_risk() {
        let mut critical = case("Outage in west europe");
        critical.severity = "Critical".to_string();
        let summary = ReactiveAnalyzer::analyze(&[critical]);
        assert_eq!(summary.high_severity_cases, 1);
        assert_eq!(summary.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_reactive_recommendations() {
        let mut records: Vec<CaseRecord> = (0..5)
            .map(|i| CaseRecord {
                ticket: format!("T{i}"),
                title: format!("Outage number {i}"),
                product: "Azure App Service".to_string(),
                ..CaseRecord::default()
            })
            .collect();
        records.push(case("Slow dashboard"));

        let summary = ReactiveAnalyzer::analyze(&records);
        assert_eq!(summary.recommendations.len(), 1);

        let rec = &summary.recommendations[0];
        assert_eq!(rec.title, "Address Availability Incident Pattern");
        assert_eq!(rec.priority, Priority::Critical);
        assert_eq!(rec.effort, Effort::High);
        assert_eq!(rec.pillar, Pillar::Reliability);
        assert_eq!(rec.azure_service, "Azure Traffic Manager");
        assert!(rec.details.contains("Case 1 [T0]: Outage number 0 (Service: Azure App Service)"));
        assert!(rec.details.contains("... and 2 additional similar cases"));
        assert!(!rec.details.contains("Case 4"));
    }

    #[test]
    fn test_medium_pattern_is_high_priority_medium_effort() {
        let records: Vec<CaseRecord> = (0..6).map(|i| case(&format!("Billing query {i}"))).collect();
        let summary = ReactiveAnalyzer::analyze(&records);
        let rec = &summary.recommendations[0];
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.effort, Effort::Medium);
    }

    #[test]
    fn test_affected_services_ranked() {
        let records = vec![
            CaseRecord {
                title: "Pod restarts".to_string(),
                product: "Azure Kubernetes Service".to_string(),
                ..CaseRecord::default()
            },
            CaseRecord {
                title: "AKS node pool stuck".to_string(),
                ..CaseRecord::default()
            },
            CaseRecord {
                title: "Key Vault throttled".to_string(),
                ..CaseRecord::default()
            },
        ];
        let summary = ReactiveAnalyzer::analyze(&records);
        assert_eq!(summary.affected_services[0].service, "Azure Kubernetes Service");
        assert_eq!(summary.affected_services[0].case_count, 2);
        assert_eq!(summary.affected_services[1].service, "Azure Key Vault");
        assert_eq!(summary.affected_services[0].risk_level, RiskLevel::Medium);
        assert_eq!(summary.affected_services[1].risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_scenario_risk_assessment() {
        let summary = ReactiveAnalyzer::analyze_csv(&scenario_csv(), 1000).unwrap();
        let risk = &summary.risk_assessment;

        // one severe pattern (authentication), one security pattern, 21 cases
        assert_eq!(risk.pillar_risk(Pillar::Reliability), Some(20.0));
        assert_eq!(risk.pillar_risk(Pillar::Security), Some(25.0));
        assert_eq!(risk.pillar_risk(Pillar::OperationalExcellence), Some(100.0));
        assert_eq!(risk.pillar_risk(Pillar::CostOptimization), None);
        assert!((risk.overall_risk_score - 48.3).abs() < 1e-9);
        assert_eq!(risk.risk_factors[0], "21 total support cases analyzed");
        assert_eq!(risk.risk_factors[1], "1 high-severity patterns identified");
    }

    #[test]
    fn test_empty_history_has_no_risk_assessment() {
        let summary = ReactiveAnalyzer::analyze(&[]);
        assert_eq!(summary.risk_assessment, RiskAssessment::default());
    }

    #[test]
    fn test_parse_csv_aliases_and_description_join() {
        let csv = "ticketnumber,title,msdfm_rootcausedescription,msdfm_resolution,msdfm_productname\n\
                   1001,VM issue,High churn on disks,Raised limits,Azure Site Recovery\n";
        let records = parse_case_csv(csv, 10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticket, "1001");
        assert_eq!(records[0].description, "High churn on disks Raised limits");
        assert_eq!(records[0].product, "Azure Site Recovery");
    }

    #[test]
    fn test_parse_csv_degrades_gracefully() {
        assert!(parse_case_csv("", 10).unwrap().is_empty());
        assert!(parse_case_csv("ticket,owner\n1,bob\n", 10).unwrap().is_empty());

        // short and blank rows are tolerated
        let csv = "title,severity\nLogin broken,High\n\nOnly title\n,\n";
        let records = parse_case_csv(csv, 10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].severity, "");
    }

    #[test]
    fn test_parse_csv_drops_rows_past_limit() {
        let mut csv = String::from("title\n");
        for i in 0..5 {
            csv.push_str(&format!("case {i}\n"));
        }
        let records = parse_case_csv(&csv, 4).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[3].title, "case 3");
    }

    #[test]
    fn test_pattern_registry_has_nine_signatures() {
        assert_eq!(pattern_names().count(), 9);
    }
}
