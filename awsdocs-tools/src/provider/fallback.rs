//! Deterministic data returned when a live lookup fails or finds nothing.

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;

use super::config::ProviderConfig;
use super::types::{PricingDetail, PricingInfo, SearchResult, ServiceInfo, ServiceOverview};

/// Region reported by fallback pricing when the caller gave none.
pub const DEFAULT_REGION: &str = "us-east-1";

const GENERAL_SERVICE: &str = "general";

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("Invalid whitespace regex");
}

/// (name, display name, description, category)
const SERVICE_CATALOG: [(&str, &str, &str, &str); 8] = [
    ("ec2", "Amazon EC2", "Virtual servers in the cloud", "compute"),
    ("s3", "Amazon S3", "Object storage service", "storage"),
    ("lambda", "AWS Lambda", "Serverless compute service", "compute"),
    ("rds", "Amazon RDS", "Managed relational database service", "database"),
    ("dynamodb", "Amazon DynamoDB", "NoSQL database service", "database"),
    ("cloudfront", "Amazon CloudFront", "Content delivery network", "networking"),
    ("vpc", "Amazon VPC", "Virtual private cloud", "networking"),
    ("iam", "AWS IAM", "Identity and access management", "security"),
];

/// (model, price, unit, description)
type PriceRow = (&'static str, &'static str, &'static str, &'static str);

const EC2_PRICING: &[PriceRow] = &[
    ("t3.micro", "$0.0104", "per hour", "1 vCPU, 1 GB RAM"),
    ("t3.small", "$0.0208", "per hour", "2 vCPU, 2 GB RAM"),
];

const S3_PRICING: &[PriceRow] = &[
    ("Standard Storage", "$0.023", "per GB per month", "First 50 TB"),
    ("Standard-IA Storage", "$0.0125", "per GB per month", "Infrequent access"),
];

const LAMBDA_PRICING: &[PriceRow] = &[
    ("Compute", "$0.0000166667", "per GB-second", "First 1M requests per month"),
    ("Requests", "$0.20", "per 1M requests", "After first 1M requests"),
];

const UNKNOWN_PRICING: &[PriceRow] = &[(
    "Basic",
    "Contact AWS",
    "pricing",
    "Contact AWS for pricing information",
)];

const KEY_FEATURES: [&str; 4] = [
    "Scalable and reliable infrastructure",
    "Pay-as-you-go pricing model",
    "Global availability",
    "Enterprise-grade security",
];

const COMMON_USE_CASES: [&str; 4] = [
    "Web application hosting",
    "Data processing and analytics",
    "Content delivery and storage",
    "Machine learning and AI workloads",
];

/// Treat an empty argument the same as a missing one.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Lowercase `query` and replace each whitespace run with `-`.
pub(crate) fn slugify(query: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&query.to_lowercase(), "-")
        .into_owned()
}

/// Case-insensitive substring match on the service category.
pub(crate) fn filter_by_category(
    services: Vec<ServiceInfo>,
    category: Option<&str>,
) -> Vec<ServiceInfo> {
    match present(category) {
        Some(category) => {
            let needle = category.to_lowercase();
            services
                .into_iter()
                .filter(|s| s.category.to_lowercase().contains(&needle))
                .collect()
        }
        None => services,
    }
}

/// Three templated results for `query`, truncated to `max_results`.
pub fn search_results(
    config: &ProviderConfig,
    query: &str,
    service: Option<&str>,
    max_results: usize,
) -> Vec<SearchResult> {
    let service = present(service).unwrap_or(GENERAL_SERVICE);
    let guide = config.developer_guide_url(service);

    let templates = [
        (
            format!("{} - AWS Documentation", query),
            format!("{}{}.html", guide, slugify(query)),
            format!(
                "Learn about {q} in AWS. This comprehensive guide covers all aspects of {q} including setup, configuration, and best practices.",
                q = query
            ),
            95.0,
        ),
        (
            format!("Getting Started with {}", query),
            format!("{}getting-started.html", guide),
            format!(
                "Quick start guide for {q}. Follow these steps to get up and running with {q} in minutes.",
                q = query
            ),
            90.0,
        ),
        (
            format!("{} Best Practices", query),
            format!("{}best-practices.html", guide),
            format!(
                "Best practices and recommendations for implementing {} in your AWS environment.",
                query
            ),
            85.0,
        ),
    ];

    templates
        .into_iter()
        .take(max_results)
        .map(|(title, url, snippet, score)| SearchResult {
            title,
            url,
            snippet,
            service: Some(service.to_string()),
            relevance_score: Some(score),
        })
        .collect()
}

/// Canned overview for any service name.
pub fn service_overview(config: &ProviderConfig, service_name: &str) -> ServiceOverview {
    ServiceOverview {
        service: service_name.to_string(),
        overview: format!(
            "AWS {} is a comprehensive cloud service that provides...",
            service_name.to_uppercase()
        ),
        key_features: KEY_FEATURES.iter().map(|s| s.to_string()).collect(),
        common_use_cases: COMMON_USE_CASES.iter().map(|s| s.to_string()).collect(),
        documentation_url: config.developer_guide_url(service_name),
        api_reference_url: config.api_reference_url(service_name),
        last_updated: Utc::now(),
    }
}

/// The fixed eight-service catalog, filtered by `category`.
pub fn services(config: &ProviderConfig, category: Option<&str>) -> Vec<ServiceInfo> {
    let all: Vec<ServiceInfo> = SERVICE_CATALOG
        .iter()
        .map(|(name, display_name, description, group)| ServiceInfo {
            name: name.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            category: group.to_string(),
            documentation_url: config.developer_guide_url(name),
        })
        .collect();

    filter_by_category(all, category)
}

/// Pricing table entry for `service_name`, or the "Contact AWS" row.
pub fn pricing_info(service_name: &str, region: Option<&str>) -> PricingInfo {
    let rows = match service_name {
        "ec2" => EC2_PRICING,
        "s3" => S3_PRICING,
        "lambda" => LAMBDA_PRICING,
        _ => UNKNOWN_PRICING,
    };

    PricingInfo {
        service: service_name.to_string(),
        region: Some(present(region).unwrap_or(DEFAULT_REGION).to_string()),
        pricing_details: rows
            .iter()
            .map(|(model, price, unit, description)| PricingDetail {
                model: model.to_string(),
                price: price.to_string(),
                unit: unit.to_string(),
                description: Some(description.to_string()),
            })
            .collect(),
        last_updated: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("EC2 pricing"), "ec2-pricing");
        assert_eq!(slugify("S3   Bucket\tPolicy"), "s3-bucket-policy");
        assert_eq!(slugify(" lead"), "-lead");
    }

    #[test]
    fn test_search_results_templates() {
        let config = ProviderConfig::default();
        let results = search_results(&config, "EC2 pricing", Some("ec2"), 10);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "EC2 pricing - AWS Documentation");
        assert_eq!(
            results[0].url,
            "https://docs.aws.amazon.com/ec2/latest/developerguide/ec2-pricing.html"
        );
        assert_eq!(results[1].title, "Getting Started with EC2 pricing");
        assert_eq!(results[2].title, "EC2 pricing Best Practices");
        let scores: Vec<f64> = results.iter().filter_map(|r| r.relevance_score).collect();
        assert_eq!(scores, vec![95.0, 90.0, 85.0]);
    }

    #[test]
    fn test_search_results_default_service_is_general() {
        let config = ProviderConfig::default();
        let results = search_results(&config, "iam roles", None, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].service.as_deref(), Some("general"));
        assert!(results[0]
            .url
            .starts_with("https://docs.aws.amazon.com/general/latest/developerguide/"));
    }

    #[test]
    fn test_empty_service_and_region_use_defaults() {
        let config = ProviderConfig::default();
        let results = search_results(&config, "x", Some(""), 1);
        assert_eq!(results[0].service.as_deref(), Some("general"));
        assert_eq!(
            results[0].url,
            "https://docs.aws.amazon.com/general/latest/developerguide/x.html"
        );

        let pricing = pricing_info("s3", Some(""));
        assert_eq!(pricing.region.as_deref(), Some(DEFAULT_REGION));
    }

    #[test]
    fn test_search_results_zero_max() {
        let config = ProviderConfig::default();
        assert!(search_results(&config, "x", None, 0).is_empty());
    }

    #[test]
    fn test_service_overview_uppercases_name() {
        let overview = service_overview(&ProviderConfig::default(), "dynamodb");
        assert_eq!(
            overview.overview,
            "AWS DYNAMODB is a comprehensive cloud service that provides..."
        );
        assert_eq!(overview.key_features.len(), 4);
        assert_eq!(overview.common_use_cases.len(), 4);
        assert_eq!(
            overview.api_reference_url,
            "https://docs.aws.amazon.com/dynamodb/latest/APIReference/"
        );
    }

    #[test]
    fn test_services_catalog_has_eight_entries() {
        let all = services(&ProviderConfig::default(), None);
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ec2", "s3", "lambda", "rds", "dynamodb", "cloudfront", "vpc", "iam"]
        );
    }

    #[test]
    fn test_services_filter_is_case_insensitive_substring() {
        let config = ProviderConfig::default();
        let compute = services(&config, Some("COMP"));
        assert_eq!(compute.len(), 2);
        assert!(compute.iter().all(|s| s.category == "compute"));

        assert!(services(&config, Some("quantum")).is_empty());
    }

    #[test]
    fn test_pricing_info_known_and_unknown() {
        let lambda = pricing_info("lambda", Some("eu-west-1"));
        assert_eq!(lambda.region.as_deref(), Some("eu-west-1"));
        assert_eq!(lambda.pricing_details[1].price, "$0.20");

        let unknown = pricing_info("unknownsvc", None);
        assert_eq!(unknown.region.as_deref(), Some(DEFAULT_REGION));
        assert_eq!(unknown.pricing_details.len(), 1);
        assert_eq!(unknown.pricing_details[0].model, "Basic");
        assert_eq!(unknown.pricing_details[0].price, "Contact AWS");
        assert_eq!(unknown.pricing_details[0].unit, "pricing");
    }
}
