use crate::prelude::*;
use crate::provider::DocumentationProvider;
use std::sync::Arc;

/// Input for listing AWS services
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAwsServicesInput {
    /// Optional category to filter services (e.g., compute, storage, database)
    #[serde(default)]
    pub category: Option<String>,
}

/// Tool listing AWS services
pub struct ListAwsServicesTool {
    provider: Arc<DocumentationProvider>,
}

impl ListAwsServicesTool {
    pub fn new(provider: Arc<DocumentationProvider>) -> Self {
        Self { provider }
    }
}

impl Tool for ListAwsServicesTool {
    type Input = ListAwsServicesInput;

    fn name(&self) -> &str {
        "list_aws_services"
    }

    fn description(&self) -> &str {
        "List all available AWS services with their descriptions"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        let services = self.provider.list_services(input.category.as_deref()).await;
        Ok(ToolResult::json(services)?)
    }
}
