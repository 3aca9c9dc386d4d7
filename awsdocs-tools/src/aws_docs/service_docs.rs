use crate::prelude::*;
use crate::provider::DocumentationProvider;
use std::sync::Arc;

/// Input for fetching documentation of one AWS service
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetAwsServiceDocsInput {
    /// Name of the AWS service (e.g., ec2, s3, lambda)
    pub service_name: String,

    /// Optional specific topic within the service documentation
    #[serde(default)]
    pub topic: Option<String>,
}

/// Tool returning a service overview, or one topic page when a topic is given
pub struct GetAwsServiceDocsTool {
    provider: Arc<DocumentationProvider>,
}

impl GetAwsServiceDocsTool {
    pub fn new(provider: Arc<DocumentationProvider>) -> Self {
        Self { provider }
    }
}

impl Tool for GetAwsServiceDocsTool {
    type Input = GetAwsServiceDocsInput;

    fn name(&self) -> &str {
        "get_aws_service_docs"
    }

    fn description(&self) -> &str {
        "Get detailed documentation for a specific AWS service"
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ToolError> {
        let docs = self
            .provider
            .get_service_documentation(&input.service_name, input.topic.as_deref())
            .await;
        Ok(ToolResult::json(docs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderConfig;

    #[test]
    fn test_input_requires_service_name() {
        let err = serde_json::from_value::<GetAwsServiceDocsInput>(serde_json::json!({
            "topic": "instances"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("serviceName"));
    }

    #[tokio::test]
    async fn test_execute_without_topic_is_overview() {
        // No topic means no fetch, so the default HTTP provider is safe here.
        let provider = DocumentationProvider::new(ProviderConfig::default()).unwrap();
        let tool = GetAwsServiceDocsTool::new(Arc::new(provider));

        let result = tool
            .execute(GetAwsServiceDocsInput {
                service_name: "lambda".into(),
                topic: None,
            })
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&result.as_text()).unwrap();
        assert_eq!(value["service"], "lambda");
        assert_eq!(
            value["overview"],
            "AWS LAMBDA is a comprehensive cloud service that provides..."
        );
        assert_eq!(value["keyFeatures"].as_array().unwrap().len(), 4);
        assert_eq!(
            value["apiReferenceUrl"],
            "https://docs.aws.amazon.com/lambda/latest/APIReference/"
        );
        assert!(value.get("lastUpdated").is_some());
    }
}
