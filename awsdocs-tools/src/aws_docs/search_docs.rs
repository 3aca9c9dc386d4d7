use crate::prelude::*;
use crate::provider::{DocumentationProvider, DEFAULT_MAX_RESULTS};
use std::sync::Arc;

/// Input for searching AWS documentation
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchAwsDocsInput {
    /// Search query for AWS documentation
    pub query: String,

    /// Optional AWS service name to limit search scope
    #[serde(default)]
    pub service: Option<String>,

    /// Maximum number of results to return (default: 10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

/// Tool for searching the AWS developer guides
pub struct SearchAwsDocsTool {
    provider: Arc<DocumentationProvider>,
}

impl SearchAwsDocsTool {
    pub fn new(provider: Arc<DocumentationProvider>) -> Self {
        Self { provider }
    }
}

impl Tool for SearchAwsDocsTool {
    type Input = SearchAwsDocsInput;

    fn name(&self) -> &str {
        "search_aws_docs"
    }

    fn description(&self) -> &str {
        "Search AWS documentation for specific topics or services"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        let results = self
            .provider
            .search_documentation(&input.query, input.service.as_deref(), input.max_results)
            .await;
        Ok(ToolResult::json(results)?)
    }
}
