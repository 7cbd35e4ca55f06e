//! Service Catalogue
//!
//! Static keyword table mapping free text onto named cloud services and their
//! documentation pages. Used to fill `azure_service` / `reference_url` on
//! recommendations and to credit diagram-detected services during scoring.

use std::sync::LazyLock;

use super::patterns::PatternExtractor;

/// Fallback documentation root
pub const DOCS_ROOT: &str = "https://docs.microsoft.com/en-us/azure/";

/// Catalogue entry
pub struct ServiceDef {
    pub name: &'static str,
    /// Lowercase phrases identifying the service in prose
    pub keywords: &'static [&'static str],
    pub url: &'static str,
}

pub const SERVICE_CATALOGUE: &[ServiceDef] = &[
    ServiceDef {
        name: "Azure Traffic Manager",
        keywords: &["traffic manager", "dns failover", "multi-region routing"],
        url: "https://docs.microsoft.com/en-us/azure/traffic-manager/",
    },
    ServiceDef {
        name: "Azure Front Door",
        keywords: &["front door"],
        url: "https://docs.microsoft.com/en-us/azure/frontdoor/",
    },
    ServiceDef {
        name: "Azure Load Balancer",
        keywords: &["load balancer", "load balancing"],
        url: "https://docs.microsoft.com/en-us/azure/load-balancer/",
    },
    ServiceDef {
        name: "Azure Application Gateway",
        keywords: &["application gateway", "app gateway", "waf", "web application firewall"],
        url: "https://docs.microsoft.com/en-us/azure/application-gateway/",
    },
    ServiceDef {
        name: "Azure Site Recovery",
        keywords: &["site recovery", "disaster recovery", "failover", "asr"],
        url: "https://docs.microsoft.com/en-us/azure/site-recovery/",
    },
    ServiceDef {
        name: "Azure Backup",
        keywords: &["azure backup", "backup vault", "recovery services vault", "backup"],
        url: "https://docs.microsoft.com/en-us/azure/backup/",
    },
    ServiceDef {
        name: "Azure Monitor",
        keywords: &[
            "azure monitor",
            "application insights",
            "log analytics",
            "monitoring",
            "alerting",
        ],
        url: "https://docs.microsoft.com/en-us/azure/azure-monitor/",
    },
    ServiceDef {
        name: "Azure Key Vault",
        keywords: &["key vault", "secrets management", "certificate management"],
        url: "https://docs.microsoft.com/en-us/azure/key-vault/",
    },
    ServiceDef {
        name: "Azure Active Directory",
        keywords: &[
            "active directory",
            "azure ad",
            "entra",
            "conditional access",
            "single sign-on",
            "mfa",
            "multi-factor",
        ],
        url: "https://docs.microsoft.com/en-us/azure/active-directory/",
    },
    ServiceDef {
        name: "Azure Firewall",
        keywords: &["azure firewall", "firewall", "network security group", "nsg"],
        url: "https://docs.microsoft.com/en-us/azure/firewall/",
    },
    ServiceDef {
        name: "Azure Cache for Redis",
        keywords: &["redis", "cache for redis", "caching layer", "cache"],
        url: "https://docs.microsoft.com/en-us/azure/azure-cache-for-redis/",
    },
    ServiceDef {
        name: "Azure CDN",
        keywords: &["cdn", "content delivery"],
        url: "https://docs.microsoft.com/en-us/azure/cdn/",
    },
    ServiceDef {
        name: "Azure Autoscale",
        keywords: &["autoscale", "autoscaling", "auto-scaling", "scale set"],
        url: "https://docs.microsoft.com/en-us/azure/azure-monitor/autoscale/",
    },
    ServiceDef {
        name: "Azure SQL Database",
        keywords: &["azure sql", "sql database", "sql server", "sql"],
        url: "https://docs.microsoft.com/en-us/azure/azure-sql/",
    },
    ServiceDef {
        name: "Azure Cosmos DB",
        keywords: &["cosmos db", "cosmosdb"],
        url: "https://docs.microsoft.com/en-us/azure/cosmos-db/",
    },
    ServiceDef {
        name: "Azure Storage",
        keywords: &["blob storage", "storage account", "azure storage", "geo-redundant storage"],
        url: "https://docs.microsoft.com/en-us/azure/storage/",
    },
    ServiceDef {
        name: "Azure Kubernetes Service",
        keywords: &["kubernetes", "aks"],
        url: "https://docs.microsoft.com/en-us/azure/aks/",
    },
    ServiceDef {
        name: "Azure App Service",
        keywords: &["app service", "web app"],
        url: "https://docs.microsoft.com/en-us/azure/app-service/",
    },
    ServiceDef {
        name: "Azure Functions",
        keywords: &["azure functions", "function app", "serverless"],
        url: "https://docs.microsoft.com/en-us/azure/azure-functions/",
    },
    ServiceDef {
        name: "Azure API Management",
        keywords: &["api management", "apim", "api gateway", "rate limiting"],
        url: "https://docs.microsoft.com/en-us/azure/api-management/",
    },
    ServiceDef {
        name: "Microsoft Defender for Cloud",
        keywords: &["defender", "security center", "threat protection"],
        url: "https://docs.microsoft.com/en-us/azure/defender-for-cloud/",
    },
    ServiceDef {
        name: "Azure Cost Management",
        keywords: &["cost management", "budget alert", "cost analysis", "billing"],
        url: "https://docs.microsoft.com/en-us/azure/cost-management-billing/",
    },
    ServiceDef {
        name: "Azure Reservations",
        keywords: &["reserved instance", "reservation", "savings plan"],
        url: "https://docs.microsoft.com/en-us/azure/cost-management-billing/reservations/",
    },
    ServiceDef {
        name: "Azure DevOps",
        keywords: &["azure devops", "pipeline", "ci/cd", "continuous deployment"],
        url: "https://docs.microsoft.com/en-us/azure/devops/",
    },
    ServiceDef {
        name: "Azure Resource Manager",
        keywords: &["arm template", "bicep", "terraform", "infrastructure as code"],
        url: "https://docs.microsoft.com/en-us/azure/azure-resource-manager/",
    },
    ServiceDef {
        name: "Azure Policy",
        keywords: &["azure policy", "policy", "governance"],
        url: "https://docs.microsoft.com/en-us/azure/governance/policy/",
    },
    ServiceDef {
        name: "Azure Virtual Machines",
        keywords: &["virtual machine", "vm size", "vms"],
        url: "https://docs.microsoft.com/en-us/azure/virtual-machines/",
    },
];

/// One matcher per catalogue entry, same order
static MATCHERS: LazyLock<Vec<PatternExtractor>> = LazyLock::new(|| {
    SERVICE_CATALOGUE
        .iter()
        .map(|s| PatternExtractor::new(s.keywords.iter().chain(std::iter::once(&s.name))))
        .collect()
});

/// Service mentioned earliest in `text`; ties go to catalogue order
pub fn find_service(text: &str) -> Option<&'static ServiceDef> {
    SERVICE_CATALOGUE
        .iter()
        .zip(MATCHERS.iter())
        .filter_map(|(def, matcher)| matcher.first_match(text).map(|m| (m.start, def)))
        .min_by_key(|(start, _)| *start)
        .map(|(_, def)| def)
}

/// Every catalogue service mentioned in `text`, in catalogue order
pub fn services_in(text: &str) -> Vec<&'static ServiceDef> {
    SERVICE_CATALOGUE
        .iter()
        .zip(MATCHERS.iter())
        .filter(|(_, matcher)| matcher.contains_any(text))
        .map(|(def, _)| def)
        .collect()
}

/// Exact (case-insensitive) lookup by display name
pub fn lookup(name: &str) -> Option<&'static ServiceDef> {
    let name = name.trim();
    SERVICE_CATALOGUE
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Documentation URL for a service name, falling back to the docs root
pub fn reference_url(name: &str) -> &'static str {
    lookup(name).map(|s| s.url).unwrap_or(DOCS_ROOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_service_prefers_earliest_mention() {
        let text = "Put Azure Front Door ahead of the app, then add Redis caching.";
        assert_eq!(find_service(text).unwrap().name, "Azure Front Door");

        let text = "Add Redis caching, then Front Door.";
        assert_eq!(find_service(text).unwrap().name, "Azure Cache for Redis");
    }

    #[test]
    fn test_find_service_none_for_unrelated_text() {
        assert!(find_service("Nothing relevant here at all").is_none());
    }

    #[test]
    fn test_services_in_lists_all() {
        let names: Vec<&str> = services_in("AKS behind an Application Gateway with Key Vault")
            .iter()
            .map(|s| s.name)
            .collect();
        assert!(names.contains(&"Azure Application Gateway"));
        assert!(names.contains(&"Azure Key Vault"));
        assert!(names.contains(&"Azure Kubernetes Service"));
    }

    #[test]
    fn test_reference_url_lookup_and_fallback() {
        assert_eq!(
            reference_url("azure backup"),
            "https://docs.microsoft.com/en-us/azure/backup/"
        );
        assert_eq!(reference_url("Unknown Service"), DOCS_ROOT);
    }

    #[test]
    fn test_catalogue_names_are_unique() {
        let mut names: Vec<&str> = SERVICE_CATALOGUE.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SERVICE_CATALOGUE.len());
    }
}
