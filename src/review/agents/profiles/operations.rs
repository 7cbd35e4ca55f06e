use super::{PillarProfile, RecommendationTemplate, SubCategoryDef};
use crate::types::{Effort, Pillar};

pub(super) static PROFILE: PillarProfile = PillarProfile {
    pillar: Pillar::OperationalExcellence,
    expertise: "You are a site reliability and DevOps lead. You review system designs for how \
                safely they are deployed, observed and operated.",
    focus: &[
        "deployment pipelines and release safety",
        "monitoring, logging and tracing",
        "infrastructure as code and automation",
        "incident response process",
        "feedback loops and continuous improvement",
    ],
    sub_categories: &[
        SubCategoryDef {
            name: "DevOps & Deployment",
            aliases: &["DevOps and Deployment", "DevOps", "CI/CD"],
            base_score: 75.0,
            keywords: &[
                "ci/cd",
                "pipeline",
                "azure devops",
                "github actions",
                "blue-green",
                "canary",
                "deployment slot",
            ],
            bonus: 15.0,
            gap_terms: &["manual deployment", "manual release"],
            penalty: 10.0,
            services: &["Azure DevOps", "Azure App Service"],
        },
        SubCategoryDef {
            name: "Monitoring & Observability",
            aliases: &["Monitoring and Observability", "Observability"],
            base_score: 80.0,
            keywords: &[
                "monitoring",
                "application insights",
                "log analytics",
                "tracing",
                "dashboard",
                "observability",
            ],
            bonus: 15.0,
            gap_terms: &["no monitoring", "no logging"],
            penalty: 10.0,
            services: &["Azure Monitor"],
        },
        SubCategoryDef {
            name: "Automation & Infrastructure as Code",
            aliases: &[
                "Automation and Infrastructure as Code",
                "Infrastructure as Code",
                "IaC",
            ],
            base_score: 70.0,
            keywords: &[
                "infrastructure as code",
                "terraform",
                "bicep",
                "arm template",
                "automation",
                "ansible",
            ],
            bonus: 15.0,
            gap_terms: &["manual configuration", "click-ops"],
            penalty: 10.0,
            services: &["Azure Resource Manager", "Azure DevOps"],
        },
        SubCategoryDef {
            name: "Incident Response & Management",
            aliases: &[
                "Incident Response and Management",
                "Incident Response",
                "Incident Management",
            ],
            base_score: 65.0,
            keywords: &["incident", "runbook", "on-call", "playbook", "postmortem", "escalation"],
            bonus: 15.0,
            gap_terms: &["no runbook", "no on-call"],
            penalty: 10.0,
            services: &["Azure Monitor"],
        },
        SubCategoryDef {
            name: "Continuous Improvement",
            aliases: &["Improvement"],
            base_score: 72.0,
            keywords: &[
                "retrospective",
                "post-incident review",
                "chaos",
                "load test",
                "feedback loop",
            ],
            bonus: 15.0,
            gap_terms: &[],
            penalty: 0.0,
            services: &["Azure DevOps"],
        },
    ],
    templates: &[
        RecommendationTemplate {
            category: "DevOps & Deployment",
            title: "Automated Release Pipeline",
            description: "Build, test and deploy every change through a pipeline with staged \
                          rollout and automatic rollback.",
            keywords: &["pipeline", "deployment", "release", "ci/cd", "rollback"],
            service: "Azure DevOps",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Monitoring & Observability",
            title: "Unified Observability Stack",
            description: "Collect logs, metrics and distributed traces into one workspace with \
                          dashboards per service.",
            keywords: &["observability", "logging", "tracing", "monitoring", "dashboard"],
            service: "Azure Monitor",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Automation & Infrastructure as Code",
            title: "Infrastructure as Code Adoption",
            description: "Describe every environment in version-controlled templates and apply \
                          changes only through automation.",
            keywords: &["infrastructure as code", "terraform", "bicep", "template", "automation"],
            service: "Azure Resource Manager",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Incident Response & Management",
            title: "Incident Runbooks and On-Call Rotation",
            description: "Write runbooks for the top failure modes and wire alerts to an on-call \
                          rotation with clear escalation.",
            keywords: &["incident", "runbook", "on-call", "escalation", "response"],
            service: "Azure Monitor",
            effort: Effort::Low,
        },
        RecommendationTemplate {
            category: "Continuous Improvement",
            title: "Regular Operational Reviews",
            description: "Hold blameless post-incident reviews and track the follow-up actions \
                          in the backlog.",
            keywords: &["review", "retrospective", "improvement", "postmortem", "feedback"],
            service: "Azure DevOps",
            effort: Effort::Low,
        },
    ],
    vocabulary: &[
        "operations",
        "operational",
        "deployment",
        "pipeline",
        "automation",
        "monitoring",
        "observability",
        "logging",
        "incident",
        "devops",
        "runbook",
        "infrastructure as code",
        "release",
    ],
    default_service: "Azure Monitor",
};
