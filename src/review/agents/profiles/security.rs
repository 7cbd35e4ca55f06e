use super::{PillarProfile, RecommendationTemplate, SubCategoryDef};
use crate::types::{Effort, Pillar};

pub(super) static PROFILE: PillarProfile = PillarProfile {
    pillar: Pillar::Security,
    expertise: "You are a cloud security architect. You review system designs for identity, \
                data protection and network exposure risks.",
    focus: &[
        "identity, authentication and least-privilege access",
        "encryption and secret management",
        "network segmentation and perimeter protection",
        "threat detection and security logging",
        "regulatory compliance and policy enforcement",
    ],
    sub_categories: &[
        SubCategoryDef {
            name: "Identity & Access Management",
            aliases: &["Identity and Access Management", "IAM", "Identity"],
            base_score: 70.0,
            keywords: &[
                "active directory",
                "azure ad",
                "rbac",
                "mfa",
                "multi-factor",
                "conditional access",
                "managed identity",
                "single sign-on",
            ],
            bonus: 15.0,
            gap_terms: &["shared account", "hardcoded credential", "hard-coded password"],
            penalty: 10.0,
            services: &["Azure Active Directory"],
        },
        SubCategoryDef {
            name: "Data Protection",
            aliases: &["Data Security", "Encryption"],
            base_score: 65.0,
            keywords: &["encryption", "encrypted", "key vault", "tls", "at rest", "in transit"],
            bonus: 15.0,
            gap_terms: &["plaintext", "unencrypted"],
            penalty: 10.0,
            services: &["Azure Key Vault"],
        },
        SubCategoryDef {
            name: "Network Security",
            aliases: &["Network Protection", "Perimeter Security"],
            base_score: 75.0,
            keywords: &[
                "firewall",
                "nsg",
                "network security group",
                "private endpoint",
                "vnet",
                "waf",
                "ddos protection",
            ],
            bonus: 15.0,
            gap_terms: &["public endpoint", "open to the internet", "publicly exposed"],
            penalty: 10.0,
            services: &[
                "Azure Firewall",
                "Azure Application Gateway",
                "Azure Front Door",
            ],
        },
        SubCategoryDef {
            name: "Security Monitoring",
            aliases: &["Threat Detection", "Security Operations"],
            base_score: 60.0,
            keywords: &[
                "defender",
                "sentinel",
                "siem",
                "threat detection",
                "audit log",
                "security monitoring",
            ],
            bonus: 15.0,
            gap_terms: &["no audit", "no security logging"],
            penalty: 10.0,
            services: &["Microsoft Defender for Cloud", "Azure Monitor"],
        },
        SubCategoryDef {
            name: "Compliance",
            aliases: &["Governance", "Regulatory Compliance"],
            base_score: 68.0,
            keywords: &["compliance", "azure policy", "gdpr", "hipaa", "iso 27001", "soc 2", "pci"],
            bonus: 15.0,
            gap_terms: &["non-compliant"],
            penalty: 10.0,
            services: &["Azure Policy"],
        },
    ],
    templates: &[
        RecommendationTemplate {
            category: "Identity & Access Management",
            title: "Zero Trust Identity Controls",
            description: "Centralize identities, enforce multi-factor authentication and \
                          conditional access, and replace stored credentials with managed \
                          identities.",
            keywords: &["identity", "mfa", "multi-factor", "rbac", "access", "authentication"],
            service: "Azure Active Directory",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Data Protection",
            title: "Centralized Secret and Key Management",
            description: "Move secrets, keys and certificates into a managed vault and enforce \
                          encryption for data at rest and in transit.",
            keywords: &["encryption", "secret", "key vault", "tls", "certificate"],
            service: "Azure Key Vault",
            effort: Effort::Low,
        },
        RecommendationTemplate {
            category: "Network Security",
            title: "Network Segmentation and Perimeter Protection",
            description: "Place workloads behind private endpoints and a web application \
                          firewall, restricting east-west traffic with network security groups.",
            keywords: &["network", "firewall", "private endpoint", "segmentation", "waf"],
            service: "Azure Firewall",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Security Monitoring",
            title: "Continuous Threat Detection",
            description: "Enable threat protection across subscriptions and forward security \
                          logs to a SIEM with alert rules for suspicious activity.",
            keywords: &["threat", "detection", "siem", "logging", "defender", "audit"],
            service: "Microsoft Defender for Cloud",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Compliance",
            title: "Policy-Driven Compliance Guardrails",
            description: "Codify regulatory requirements as policy assignments and track \
                          compliance drift continuously.",
            keywords: &["compliance", "policy", "regulatory", "governance", "audit"],
            service: "Azure Policy",
            effort: Effort::Medium,
        },
    ],
    vocabulary: &[
        "security",
        "secure",
        "identity",
        "access",
        "authentication",
        "authorization",
        "encryption",
        "firewall",
        "vulnerability",
        "threat",
        "compliance",
        "secret",
        "key vault",
        "audit",
        "rbac",
        "mfa",
        "zero trust",
    ],
    default_service: "Microsoft Defender for Cloud",
};
