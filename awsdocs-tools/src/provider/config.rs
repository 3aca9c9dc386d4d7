use std::time::Duration;
use url::Url;

/// Host of the AWS developer guides.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://docs.aws.amazon.com";
/// Page listing every AWS service.
pub const DEFAULT_SERVICES_URL: &str = "https://aws.amazon.com/services";
/// Root of the per-service pricing pages.
pub const DEFAULT_PRICING_URL: &str = "https://aws.amazon.com/pricing";
/// Upper bound for a single live fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while building a provider.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {field} '{value}': {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{field} must use http or https, got '{value}'")]
    UnsupportedScheme { field: &'static str, value: String },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Where the provider fetches from and how long it waits.
///
/// Base URLs are stored without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub docs_base_url: String,
    pub services_url: String,
    pub pricing_url: String,
    pub timeout: Duration,
    /// Use the fallback pricing table when a pricing page parses to zero rows.
    pub fallback_on_empty_pricing: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            services_url: DEFAULT_SERVICES_URL.to_string(),
            pricing_url: DEFAULT_PRICING_URL.to_string(),
            timeout: DEFAULT_FETCH_TIMEOUT,
            fallback_on_empty_pricing: false,
        }
    }
}

impl ProviderConfig {
    pub fn builder() -> ProviderConfigBuilder {
        ProviderConfigBuilder::default()
    }

    /// Developer guide root for a service, e.g. `https://docs.aws.amazon.com/s3/latest/developerguide/`.
    pub fn developer_guide_url(&self, service: &str) -> String {
        format!("{}/{}/latest/developerguide/", self.docs_base_url, service)
    }

    pub fn api_reference_url(&self, service: &str) -> String {
        format!("{}/{}/latest/APIReference/", self.docs_base_url, service)
    }

    pub fn topic_url(&self, service: &str, topic: &str) -> String {
        format!("{}{}.html", self.developer_guide_url(service), topic)
    }

    pub fn pricing_page_url(&self, service: &str) -> String {
        format!("{}/{}", self.pricing_url, service)
    }

    /// Turn a scraped href into an absolute URL on the docs host.
    pub fn absolute_docs_url(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.docs_base_url, href)
        }
    }
}

/// Builder for [`ProviderConfig`].
///
/// ```
/// use awsdocs_tools::provider::ProviderConfig;
/// use std::time::Duration;
///
/// let config = ProviderConfig::builder()
///     .docs_base_url("http://127.0.0.1:8080/")
///     .timeout(Duration::from_secs(2))
///     .build()
///     .unwrap();
/// assert_eq!(config.docs_base_url, "http://127.0.0.1:8080");
/// ```
#[derive(Debug, Default)]
pub struct ProviderConfigBuilder {
    docs_base_url: Option<String>,
    services_url: Option<String>,
    pricing_url: Option<String>,
    timeout: Option<Duration>,
    fallback_on_empty_pricing: bool,
}

impl ProviderConfigBuilder {
    pub fn docs_base_url(mut self, url: impl Into<String>) -> Self {
        self.docs_base_url = Some(url.into());
        self
    }

    pub fn services_url(mut self, url: impl Into<String>) -> Self {
        self.services_url = Some(url.into());
        self
    }

    pub fn pricing_url(mut self, url: impl Into<String>) -> Self {
        self.pricing_url = Some(url.into());
        self
    }

    /// Set the per-fetch timeout (default: 10 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn fallback_on_empty_pricing(mut self, enabled: bool) -> Self {
        self.fallback_on_empty_pricing = enabled;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a URL does not parse, is not http(s), or the
    /// timeout is zero.
    pub fn build(self) -> Result<ProviderConfig, ConfigError> {
        let timeout = self.timeout.unwrap_or(DEFAULT_FETCH_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(ProviderConfig {
            docs_base_url: normalize_url(
                "docs base URL",
                self.docs_base_url.as_deref().unwrap_or(DEFAULT_DOCS_BASE_URL),
            )?,
            services_url: normalize_url(
                "services URL",
                self.services_url.as_deref().unwrap_or(DEFAULT_SERVICES_URL),
            )?,
            pricing_url: normalize_url(
                "pricing URL",
                self.pricing_url.as_deref().unwrap_or(DEFAULT_PRICING_URL),
            )?,
            timeout,
            fallback_on_empty_pricing: self.fallback_on_empty_pricing,
        })
    }
}

fn normalize_url(field: &'static str, value: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            field,
            value: value.to_string(),
        });
    }

    Ok(value.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_aws() {
        let config = ProviderConfig::default();
        assert_eq!(config.docs_base_url, "https://docs.aws.amazon.com");
        assert_eq!(config.services_url, "https://aws.amazon.com/services");
        assert_eq!(config.pricing_url, "https://aws.amazon.com/pricing");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.fallback_on_empty_pricing);
    }

    #[test]
    fn test_builder_without_overrides_matches_default() {
        let built = ProviderConfig::builder().build().unwrap();
        assert_eq!(built, ProviderConfig::default());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = ProviderConfig::builder()
            .pricing_url("http://localhost:9000/pricing/")
            .build()
            .unwrap();
        assert_eq!(config.pricing_url, "http://localhost:9000/pricing");
        assert_eq!(
            config.pricing_page_url("s3"),
            "http://localhost:9000/pricing/s3"
        );
    }

    #[test]
    fn test_builder_rejects_garbage_url() {
        let err = ProviderConfig::builder()
            .services_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { field: "services URL", .. }));
    }

    #[test]
    fn test_builder_rejects_non_http_scheme() {
        let err = ProviderConfig::builder()
            .docs_base_url("file:///tmp/docs")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let err = ProviderConfig::builder()
            .timeout(Duration::ZERO)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_url_helpers() {
        let config = ProviderConfig::default();
        assert_eq!(
            config.developer_guide_url("lambda"),
            "https://docs.aws.amazon.com/lambda/latest/developerguide/"
        );
        assert_eq!(
            config.api_reference_url("lambda"),
            "https://docs.aws.amazon.com/lambda/latest/APIReference/"
        );
        assert_eq!(
            config.topic_url("ec2", "instances"),
            "https://docs.aws.amazon.com/ec2/latest/developerguide/instances.html"
        );
    }

    #[test]
    fn test_absolute_docs_url() {
        let config = ProviderConfig::default();
        assert_eq!(
            config.absolute_docs_url("/s3/latest/intro.html"),
            "https://docs.aws.amazon.com/s3/latest/intro.html"
        );
        assert_eq!(
            config.absolute_docs_url("https://example.com/x"),
            "https://example.com/x"
        );
    }
}
