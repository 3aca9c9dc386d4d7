//! Live AWS documentation lookups with deterministic fallback.
//!
//! Every operation on [`DocumentationProvider`] follows the same policy:
//!
//! 1. fetch one page through the [`PageFetcher`]
//! 2. pull records out of it with the [`MarkupExtractor`]
//! 3. if the fetch failed, or (for most operations) nothing was extracted,
//!    answer with the data in [`fallback`] instead
//!
//! Nothing is ever returned as an error. Fetch failures are logged and the
//! caller receives fallback data. Live and fallback records are never mixed
//! within one answer.
//!
//! # Example
//!
//! ```no_run
//! use awsdocs_tools::provider::{DocumentationProvider, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = DocumentationProvider::new(ProviderConfig::default())?;
//!     let results = provider.search_documentation("bucket policy", Some("s3"), 5).await;
//!     for result in results {
//!         println!("{} -> {}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod config;
mod extract;
pub mod fallback;
mod fetcher;
mod types;

pub use config::{
    ConfigError, ProviderConfig, ProviderConfigBuilder, DEFAULT_DOCS_BASE_URL,
    DEFAULT_FETCH_TIMEOUT, DEFAULT_PRICING_URL, DEFAULT_SERVICES_URL,
};
pub use extract::{MarkupExtractor, PricingRow, SearchHit, SelectorExtractor, ServiceEntry};
pub use fetcher::{FetchError, HttpFetcher, PageFetcher};
pub use types::{
    PricingDetail, PricingInfo, SearchResult, ServiceDocumentation, ServiceInfo, ServiceOverview,
    TopicDocumentation,
};

use chrono::Utc;
use std::sync::Arc;

/// Default number of search results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Maximum number of characters of topic text returned.
pub const TOPIC_CONTENT_LIMIT: usize = 2000;

const NO_DESCRIPTION: &str = "No description available";
const DEFAULT_SERVICE_DESCRIPTION: &str = "AWS service";
const DEFAULT_CATEGORY: &str = "general";
const DEFAULT_PRICING_UNIT: &str = "per hour";

/// Answers documentation, service-listing and pricing questions.
///
/// Holds no mutable state; share it behind an `Arc` across concurrent calls.
#[derive(Clone)]
pub struct DocumentationProvider {
    config: ProviderConfig,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn MarkupExtractor>,
}

impl DocumentationProvider {
    /// Provider that fetches over HTTP with `config.timeout` and extracts with CSS selectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        let fetcher = HttpFetcher::new(config.timeout)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Provider using a custom fetch boundary.
    pub fn with_fetcher(config: ProviderConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            config,
            fetcher,
            extractor: Arc::new(SelectorExtractor::new()),
        }
    }

    /// Replace the markup extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn MarkupExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Search the developer guides, scoped to `service` when given.
    pub async fn search_documentation(
        &self,
        query: &str,
        service: Option<&str>,
        max_results: usize,
    ) -> Vec<SearchResult> {
        let service = fallback::present(service);
        let url = match service {
            Some(service) => self.config.developer_guide_url(service),
            None => self.config.docs_base_url.clone(),
        };

        let html = match self.fetcher.fetch(&url, &[("q", query)]).await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Error searching AWS documentation: {}", e);
                return fallback::search_results(&self.config, query, service, max_results);
            }
        };

        let results: Vec<SearchResult> = self
            .extractor
            .search_hits(&html, max_results)
            .into_iter()
            .map(|hit| SearchResult {
                title: hit.title,
                url: self.config.absolute_docs_url(&hit.href),
                snippet: hit.snippet.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                service: service.map(str::to_string),
                relevance_score: Some(rand::random::<f64>() * 100.0),
            })
            .collect();

        if results.is_empty() {
            log::debug!("No search results scraped from {}, using fallback", url);
            return fallback::search_results(&self.config, query, service, max_results);
        }

        results
    }

    /// Documentation for a service, or for one topic of it.
    ///
    /// Without a topic, or with an empty one, no fetch happens and the canned
    /// overview is returned.
    pub async fn get_service_documentation(
        &self,
        service_name: &str,
        topic: Option<&str>,
    ) -> ServiceDocumentation {
        let Some(topic) = fallback::present(topic) else {
            return ServiceDocumentation::Overview(fallback::service_overview(
                &self.config,
                service_name,
            ));
        };

        let url = self.config.topic_url(service_name, topic);
        match self.fetcher.fetch(&url, &[]).await {
            Ok(html) => {
                let content = self
                    .extractor
                    .topic_text(&html)
                    .chars()
                    .take(TOPIC_CONTENT_LIMIT)
                    .collect();
                ServiceDocumentation::Topic(TopicDocumentation {
                    service: service_name.to_string(),
                    topic: topic.to_string(),
                    url,
                    content,
                    last_updated: Utc::now(),
                })
            }
            Err(e) => {
                log::warn!("Error getting documentation for {}: {}", service_name, e);
                ServiceDocumentation::Overview(fallback::service_overview(
                    &self.config,
                    service_name,
                ))
            }
        }
    }

    /// Every AWS service, optionally filtered by category.
    pub async fn list_services(&self, category: Option<&str>) -> Vec<ServiceInfo> {
        let html = match self.fetcher.fetch(&self.config.services_url, &[]).await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Error listing AWS services: {}", e);
                return fallback::services(&self.config, category);
            }
        };

        let services: Vec<ServiceInfo> = self
            .extractor
            .service_entries(&html)
            .into_iter()
            .map(|entry| {
                let name = entry.display_name.to_lowercase();
                ServiceInfo {
                    documentation_url: self.config.developer_guide_url(&name),
                    name,
                    display_name: entry.display_name,
                    description: entry
                        .description
                        .unwrap_or_else(|| DEFAULT_SERVICE_DESCRIPTION.to_string()),
                    category: entry
                        .category
                        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                }
            })
            .collect();

        if services.is_empty() {
            log::debug!("No services scraped from {}, using fallback", self.config.services_url);
            return fallback::services(&self.config, category);
        }

        fallback::filter_by_category(services, category)
    }

    /// Pricing for a service.
    ///
    /// A page that loads but yields no rows is returned with empty
    /// `pricing_details` unless `fallback_on_empty_pricing` is set.
    pub async fn get_pricing_info(&self, service_name: &str, region: Option<&str>) -> PricingInfo {
        let region = fallback::present(region);
        let url = self.config.pricing_page_url(service_name);

        let html = match self.fetcher.fetch(&url, &[]).await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Error getting pricing for {}: {}", service_name, e);
                return fallback::pricing_info(service_name, region);
            }
        };

        let pricing_details: Vec<PricingDetail> = self
            .extractor
            .pricing_rows(&html)
            .into_iter()
            .map(|row| PricingDetail {
                model: row.model,
                price: row.price,
                unit: row.unit.unwrap_or_else(|| DEFAULT_PRICING_UNIT.to_string()),
                description: Some(row.description),
            })
            .collect();

        if pricing_details.is_empty() && self.config.fallback_on_empty_pricing {
            log::debug!("No pricing rows scraped from {}, using fallback", url);
            return fallback::pricing_info(service_name, region);
        }

        PricingInfo {
            service: service_name.to_string(),
            region: region.map(str::to_string),
            pricing_details,
            last_updated: Utc::now(),
        }
    }
}

impl std::fmt::Debug for DocumentationProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentationProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
