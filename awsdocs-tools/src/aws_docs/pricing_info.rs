use crate::prelude::*;
use crate::provider::DocumentationProvider;
use std::sync::Arc;

/// Input for looking up AWS pricing
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAwsPricingInfoInput {
    /// Name of the AWS service
    pub service_name: String,

    /// AWS region (e.g., us-east-1, eu-west-1)
    #[serde(default)]
    pub region: Option<String>,
}

/// Tool returning pricing rows for an AWS service
pub struct GetAwsPricingInfoTool {
    provider: Arc<DocumentationProvider>,
}

impl GetAwsPricingInfoTool {
    pub fn new(provider: Arc<DocumentationProvider>) -> Self {
        Self { provider }
    }
}

impl Tool for GetAwsPricingInfoTool {
    type Input = GetAwsPricingInfoInput;

    fn name(&self) -> &str {
        "get_aws_pricing_info"
    }

    fn description(&self) -> &str {
        "Get pricing information for AWS services"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        let pricing = self
            .provider
            .get_pricing_info(&input.service_name, input.region.as_deref())
            .await;
        Ok(ToolResult::json(pricing)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_region_is_optional() {
        let input: GetAwsPricingInfoInput =
            serde_json::from_value(serde_json::json!({"serviceName": "s3"})).unwrap();
        assert_eq!(input.service_name, "s3");
        assert!(input.region.is_none());
    }

    #[test]
    fn test_input_rejects_wrong_type() {
        let result = serde_json::from_value::<GetAwsPricingInfoInput>(
            serde_json::json!({"serviceName": 42}),
        );
        assert!(result.is_err());
    }
}
