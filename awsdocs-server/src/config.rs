//! Command-line and environment configuration.

use awsdocs_tools::provider::{
    ConfigError, ProviderConfig, DEFAULT_DOCS_BASE_URL, DEFAULT_PRICING_URL, DEFAULT_SERVICES_URL,
};
use clap::Parser;
use std::time::Duration;

/// Serve AWS documentation, service listing and pricing lookups over MCP stdio.
#[derive(Debug, Parser)]
#[command(name = "aws-docs-mcp", version, about)]
pub struct Args {
    /// Base URL of the AWS developer guides
    #[arg(long, env = "AWS_DOCS_BASE_URL", default_value = DEFAULT_DOCS_BASE_URL)]
    pub docs_base_url: String,

    /// Page listing all AWS services
    #[arg(long, env = "AWS_SERVICES_URL", default_value = DEFAULT_SERVICES_URL)]
    pub services_url: String,

    /// Root of the per-service pricing pages
    #[arg(long, env = "AWS_PRICING_URL", default_value = DEFAULT_PRICING_URL)]
    pub pricing_url: String,

    /// Timeout for each live fetch, in seconds
    #[arg(long, env = "AWS_DOCS_TIMEOUT_SECS", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Use fallback pricing when a pricing page yields no rows
    #[arg(long, env = "AWS_DOCS_FALLBACK_ON_EMPTY_PRICING")]
    pub fallback_on_empty_pricing: bool,
}

impl Args {
    /// Validate into a [`ProviderConfig`].
    pub fn into_provider_config(self) -> Result<ProviderConfig, ConfigError> {
        ProviderConfig::builder()
            .docs_base_url(self.docs_base_url)
            .services_url(self.services_url)
            .pricing_url(self.pricing_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .fallback_on_empty_pricing(self.fallback_on_empty_pricing)
            .build()
    }
}
