use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// A single documentation search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// Uncalibrated score in `0..=100`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_score"
    )]
    pub relevance_score: Option<f64>,
}

/// Whole-number scores are written as integers (`95`, not `95.0`).
fn serialize_score<S: Serializer>(score: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match score {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(*value as i64)
        }
        Some(value) => serializer.serialize_f64(*value),
        None => serializer.serialize_none(),
    }
}

/// An AWS service as listed on the services page or in the fallback catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Lowercase slug, e.g. `s3`
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub category: String,
    pub documentation_url: String,
}

/// One pricing row. Prices are free text (`"$0.023"`, `"Contact AWS"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingDetail {
    pub model: String,
    pub price: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfo {
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub pricing_details: Vec<PricingDetail>,
    pub last_updated: DateTime<Utc>,
}

/// Text scraped from a topic page of a service's developer guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicDocumentation {
    pub service: String,
    pub topic: String,
    pub url: String,
    pub content: String,
    pub last_updated: DateTime<Utc>,
}

/// Canned overview of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOverview {
    pub service: String,
    pub overview: String,
    pub key_features: Vec<String>,
    pub common_use_cases: Vec<String>,
    pub documentation_url: String,
    pub api_reference_url: String,
    pub last_updated: DateTime<Utc>,
}

/// Result of a service documentation lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceDocumentation {
    Topic(TopicDocumentation),
    Overview(ServiceOverview),
}

impl ServiceDocumentation {
    pub fn is_overview(&self) -> bool {
        matches!(self, Self::Overview(_))
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        match self {
            Self::Topic(t) => t.last_updated,
            Self::Overview(o) => o.last_updated,
        }
    }
}
