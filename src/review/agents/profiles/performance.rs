use super::{PillarProfile, RecommendationTemplate, SubCategoryDef};
use crate::types::{Effort, Pillar};

pub(super) static PROFILE: PillarProfile = PillarProfile {
    pillar: Pillar::PerformanceEfficiency,
    expertise: "You are a performance engineering architect. You review system designs for \
                scalability limits, latency and throughput bottlenecks.",
    focus: &[
        "horizontal scaling and elasticity",
        "compute efficiency and load testing",
        "caching and content delivery",
        "database query and storage performance",
        "network latency between components",
    ],
    sub_categories: &[
        SubCategoryDef {
            name: "Scalability & Elasticity",
            aliases: &["Scalability and Elasticity", "Scalability", "Elasticity"],
            base_score: 70.0,
            keywords: &[
                "autoscale",
                "autoscaling",
                "scale out",
                "horizontal scaling",
                "scale set",
                "elastic",
            ],
            bonus: 15.0,
            gap_terms: &["single instance", "vertical scaling only"],
            penalty: 10.0,
            services: &[
                "Azure Autoscale",
                "Azure Kubernetes Service",
                "Azure App Service",
            ],
        },
        SubCategoryDef {
            name: "Resource Optimization",
            aliases: &["Resource Efficiency"],
            base_score: 65.0,
            keywords: &["profiling", "performance testing", "load test", "benchmark"],
            bonus: 15.0,
            gap_terms: &["bottleneck", "cpu saturation"],
            penalty: 10.0,
            services: &["Azure Monitor"],
        },
        SubCategoryDef {
            name: "Caching & Content Delivery",
            aliases: &["Caching and Content Delivery", "Caching", "Content Delivery"],
            base_score: 60.0,
            keywords: &["cache", "caching", "redis", "cdn", "front door"],
            bonus: 15.0,
            gap_terms: &["no caching", "no cache"],
            penalty: 10.0,
            services: &["Azure Cache for Redis", "Azure CDN", "Azure Front Door"],
        },
        SubCategoryDef {
            name: "Database Performance",
            aliases: &["Database", "Data Tier Performance"],
            base_score: 73.0,
            keywords: &[
                "index",
                "indexing",
                "read replica",
                "partitioning",
                "sharding",
                "connection pooling",
            ],
            bonus: 15.0,
            gap_terms: &["full table scan", "slow query"],
            penalty: 10.0,
            services: &["Azure SQL Database", "Azure Cosmos DB"],
        },
        SubCategoryDef {
            name: "Network Optimization",
            aliases: &["Network Performance", "Networking"],
            base_score: 68.0,
            keywords: &[
                "private link",
                "accelerated networking",
                "compression",
                "http/2",
                "proximity placement",
            ],
            bonus: 15.0,
            gap_terms: &["cross-region calls", "chatty"],
            penalty: 10.0,
            services: &["Azure Front Door", "Azure CDN"],
        },
    ],
    templates: &[
        RecommendationTemplate {
            category: "Scalability & Elasticity",
            title: "Horizontal Autoscaling Rules",
            description: "Scale stateless tiers out on CPU, queue length or request rate \
                          rather than sizing for peak.",
            keywords: &["autoscale", "scale out", "horizontal", "elastic", "scaling"],
            service: "Azure Autoscale",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Resource Optimization",
            title: "Load Testing and Profiling",
            description: "Run load tests against production-like data and profile hot paths \
                          before each major release.",
            keywords: &["load test", "profiling", "benchmark", "bottleneck", "throughput"],
            service: "Azure Monitor",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Caching & Content Delivery",
            title: "Multi-level Caching Strategy",
            description: "Cache hot reads in a distributed cache and serve static content from \
                          the edge.",
            keywords: &["cache", "caching", "redis", "cdn", "static content"],
            service: "Azure Cache for Redis",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Database Performance",
            title: "Database Indexing and Read Replicas",
            description: "Index the most frequent query predicates and offload reporting reads \
                          to replicas.",
            keywords: &["database", "index", "query", "replica", "partition"],
            service: "Azure SQL Database",
            effort: Effort::Medium,
        },
        RecommendationTemplate {
            category: "Network Optimization",
            title: "Edge Delivery and Network Tuning",
            description: "Terminate user traffic close to users and keep chatty service calls \
                          inside one region.",
            keywords: &["network", "latency", "edge", "region", "bandwidth"],
            service: "Azure CDN",
            effort: Effort::Low,
        },
    ],
    vocabulary: &[
        "performance",
        "latency",
        "throughput",
        "response time",
        "scalability",
        "scaling",
        "cache",
        "caching",
        "cdn",
        "database",
        "query",
        "bottleneck",
        "load",
        "optimization",
    ],
    default_service: "Azure CDN",
};
