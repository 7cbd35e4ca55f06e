use super::{PillarProfile, RecommendationTemplate, SubCategoryDef};
use crate::types::{Effort, Pillar};

pub(super) static PROFILE: PillarProfile = PillarProfile {
    pillar: Pillar::CostOptimization,
    expertise: "You are a cloud FinOps specialist. You review system designs for wasted spend \
                and missed pricing opportunities.",
    focus: &[
        "resource sizing against real utilization",
        "reserved capacity and savings plans for steady load",
        "budgets, cost alerts and cost allocation",
        "demand-driven scaling",
        "idle and orphaned resources",
    ],
    sub_categories: &[
        SubCategoryDef {
            name: "Resource Right-sizing",
            aliases: &["Right-sizing", "Rightsizing", "Resource Sizing"],
            base_score: 55.0,
            keywords: &["right-size", "right-sizing", "rightsizing", "vm size", "utilization"],
            bonus: 15.0,
            gap_terms: &["overprovisioned", "over-provisioned", "oversized"],
            penalty: 10.0,
            services: &["Azure Virtual Machines", "Azure Cost Management"],
        },
        SubCategoryDef {
            name: "Reserved Capacity",
            aliases: &["Reservations", "Reserved Instances"],
            base_score: 50.0,
            keywords: &["reserved instance", "reservation", "savings plan", "commitment"],
            bonus: 15.0,
            gap_terms: &["pay-as-you-go only"],
            penalty: 10.0,
            services: &["Azure Reservations"],
        },
        SubCategoryDef {
            name: "Cost Monitoring & Governance",
            aliases: &["Cost Monitoring and Governance", "Cost Monitoring", "Cost Governance"],
            base_score: 60.0,
            keywords: &[
                "budget",
                "cost management",
                "cost alert",
                "tagging",
                "chargeback",
                "cost analysis",
            ],
            bonus: 15.0,
            gap_terms: &["no budget", "untagged"],
            penalty: 10.0,
            services: &["Azure Cost Management", "Azure Policy"],
        },
        SubCategoryDef {
            name: "Automation & Scaling",
            aliases: &["Automation and Scaling", "Auto-scaling", "Scaling"],
            base_score: 65.0,
            keywords: &[
                "autoscale",
                "autoscaling",
                "auto-scaling",
                "scale set",
                "serverless",
                "scale to zero",
            ],
            bonus: 15.0,
            gap_terms: &["fixed capacity", "always on"],
            penalty: 10.0,
            services: &[
                "Azure Autoscale",
                "Azure Functions",
                "Azure Kubernetes Service",
            ],
        },
        SubCategoryDef {
            name: "Waste Elimination",
            aliases: &["Waste Reduction"],
            base_score: 58.0,
            keywords: &[
                "lifecycle policy",
                "auto-shutdown",
                "shutdown schedule",
                "cleanup",
                "spot",
            ],
            bonus: 15.0,
            gap_terms: &["idle", "orphaned", "unused"],
            penalty: 10.0,
            services: &["Azure Storage", "Azure Cost Management"],
        },
    ],
    templates: &[
        RecommendationTemplate {
            category: "Resource Right-sizing",
            title: "Right-size Compute Resources",
            description: "Compare provisioned SKUs against observed utilization and downsize \
                          instances that stay underused.",
            keywords: &["right-size", "utilization", "sku", "oversized", "underused"],
            service: "Azure Virtual Machines",
            effort: Effort::Low,
        },
        RecommendationTemplate {
            category: "Reserved Capacity",
            title: "Reserved Capacity for Steady Workloads",
            description: "Commit baseline capacity through reservations or savings plans and \
                          keep pay-as-you-go for bursts only.",
            keywords: &["reserved", "reservation", "savings plan", "commitment"],
            service: "Azure Reservations",
            effort: Effort::Low,
        },
        RecommendationTemplate {
            category: "Cost Monitoring & Governance",
            title: "Budget Alerts and Cost Allocation",
            description: "Set budgets with alert thresholds per environment and enforce cost \
                          allocation tags on every resource group.",
            keywords: &["budget", "cost alert", "tag", "tagging", "cost management"],
            service: "Azure Cost Management",
            effort: Effort::Low,
        },
        RecommendationTemplate {
            category: "Automation & Scaling",
            title: "Demand-Based Autoscaling",
            description: "Scale compute with load, including scale-in during quiet hours, \
                          instead of provisioning for peak.",
            keywords: &["autoscale", "autoscaling", "scale", "peak", "demand"],
            service: "Azure Autoscale",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Waste Elimination",
            title: "Idle Resource Cleanup",
            description: "Schedule shutdown of non-production environments and remove orphaned \
                          disks, IPs and snapshots.",
            keywords: &["idle", "orphaned", "unused", "shutdown", "cleanup"],
            service: "Azure Cost Management",
            effort: Effort::Low,
        },
    ],
    vocabulary: &[
        "cost",
        "spend",
        "budget",
        "billing",
        "pricing",
        "reserved",
        "savings",
        "right-size",
        "utilization",
        "autoscale",
        "efficiency",
        "waste",
        "idle",
        "sku",
    ],
    default_service: "Azure Cost Management",
};
