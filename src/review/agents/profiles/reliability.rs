use super::{PillarProfile, RecommendationTemplate, SubCategoryDef};
use crate::types::{Effort, Pillar};

pub(super) static PROFILE: PillarProfile = PillarProfile {
    pillar: Pillar::Reliability,
    expertise: "You are a senior cloud reliability architect. You review system designs for \
                resilience to zone, region and dependency failures.",
    focus: &[
        "redundancy across availability zones and regions",
        "disaster recovery objectives (RTO/RPO) and failover",
        "fault handling between dependent components",
        "backup coverage and restore testing",
        "health monitoring and alerting",
    ],
    sub_categories: &[
        SubCategoryDef {
            name: "High Availability",
            aliases: &["Availability", "HA"],
            base_score: 65.0,
            keywords: &[
                "availability zone",
                "multi-region",
                "load balancer",
                "active-active",
                "redundancy",
            ],
            bonus: 15.0,
            gap_terms: &["single region", "single instance", "single point of failure"],
            penalty: 10.0,
            services: &[
                "Azure Load Balancer",
                "Azure Traffic Manager",
                "Azure Front Door",
            ],
        },
        SubCategoryDef {
            name: "Disaster Recovery",
            aliases: &["DR", "Recovery"],
            base_score: 60.0,
            keywords: &["backup", "recovery", "replication", "failover", "geo-redundant"],
            bonus: 15.0,
            gap_terms: &["no disaster recovery", "no dr plan"],
            penalty: 10.0,
            services: &["Azure Site Recovery"],
        },
        SubCategoryDef {
            name: "Fault Tolerance",
            aliases: &["Resilience", "Resiliency"],
            base_score: 70.0,
            keywords: &["circuit breaker", "retry", "timeout", "bulkhead", "health probe"],
            bonus: 15.0,
            gap_terms: &["tightly coupled", "cascading failure"],
            penalty: 10.0,
            services: &["Azure Kubernetes Service", "Azure API Management"],
        },
        SubCategoryDef {
            name: "Backup Strategy",
            aliases: &["Backup", "Backups"],
            base_score: 65.0,
            keywords: &["backup"],
            bonus: 15.0,
            gap_terms: &["no backup", "without backup"],
            penalty: 10.0,
            services: &["Azure Backup", "Azure Storage"],
        },
        SubCategoryDef {
            name: "Reliability Monitoring",
            aliases: &["Monitoring", "Health Monitoring"],
            base_score: 55.0,
            keywords: &["monitoring", "alerts", "health check"],
            bonus: 20.0,
            gap_terms: &["no monitoring", "no alerting"],
            penalty: 10.0,
            services: &["Azure Monitor"],
        },
    ],
    templates: &[
        RecommendationTemplate {
            category: "High Availability",
            title: "Multi-Region Deployment Strategy",
            description: "Deploy the workload across availability zones or paired regions with \
                          traffic routing so that losing one zone or region does not take the \
                          service down.",
            keywords: &["multi-region", "availability zone", "region", "redundancy", "failover"],
            service: "Azure Traffic Manager",
            effort: Effort::High,
        },
        RecommendationTemplate {
            category: "Disaster Recovery",
            title: "Disaster Recovery Runbook and Replication",
            description: "Define recovery time and recovery point objectives, replicate critical \
                          state to a secondary region and rehearse failover.",
            keywords: &["disaster recovery", "recovery", "rto", "rpo", "replication"],
            service: "Azure Site Recovery",
            effort: Effort::High,
        },
        RecommendationTemplate {
            category: "Fault Tolerance",
            title: "Resilient Dependency Calls",
            description: "Wrap calls to downstream services with bounded retries, timeouts and \
                          circuit breakers so one failing dependency cannot exhaust the caller.",
            keywords: &["retry", "circuit breaker", "timeout", "transient", "dependency"],
            service: "Azure API Management",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Backup Strategy",
            title: "Automated Backup Policy",
            description: "Apply scheduled backups with defined retention to every stateful \
                          component and verify restores on a regular cadence.",
            keywords: &["backup", "retention", "restore", "snapshot"],
            service: "Azure Backup",
            effort: Effort::Low,
        },
        RecommendationTemplate {
            category: "Reliability Monitoring",
            title: "Health Monitoring and Alerting",
            description: "Add health probes and availability alerts for each tier, routed to an \
                          on-call channel.",
            keywords: &["monitoring", "alert", "health check", "health probe"],
            service: "Azure Monitor",
            effort: Effort::Low,
        },
    ],
    vocabulary: &[
        "reliability",
        "availability",
        "redundancy",
        "failover",
        "backup",
        "recovery",
        "resilience",
        "resilient",
        "outage",
        "downtime",
        "replication",
        "fault",
        "disaster",
        "health",
        "retry",
        "region",
        "zone",
        "sla",
    ],
    default_service: "Azure Site Recovery",
};
