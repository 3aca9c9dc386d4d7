//! Tool catalog and dispatch.
//!
//! The [`ToolFacade`] owns a fixed, ordered set of tools. It answers two
//! questions: which tools exist ([`ToolFacade::list_tools`]) and what a given
//! call produces ([`ToolFacade::call_tool`]). A call never fails from the
//! caller's point of view; dispatch errors are collapsed into a text payload
//! of the form `Error executing tool <name>: <message>`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tool::{DynTool, ToolError, ToolResult};

/// Static metadata advertised for a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// One text entry of a [`ToolCallResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResponseContent {
    Text { text: String },
}

impl ResponseContent {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// The only shape returned to callers, whether the tool succeeded or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResponse {
    pub content: Vec<ResponseContent>,
}

impl ToolCallResponse {
    /// A response holding a single text entry.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ResponseContent::text(text)],
        }
    }

    /// Concatenated text of all entries.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(ResponseContent::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Why a dispatch did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Holds the tool catalog and routes calls by exact name.
pub struct ToolFacade {
    tools: Vec<Box<dyn DynTool>>,
}

impl ToolFacade {
    /// Build a facade over `tools`. Catalog order is the order given here.
    pub fn new(tools: Vec<Box<dyn DynTool>>) -> Self {
        let mut seen = std::collections::HashSet::new();
        for tool in &tools {
            if !seen.insert(tool.name().to_string()) {
                log::warn!(
                    "Tool '{}' is registered more than once; only the first is reachable",
                    tool.name()
                );
            }
        }
        Self { tools }
    }

    /// Descriptors for every tool, in catalog order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.tools
            .iter()
            .map(|t| ToolDescriptor {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    /// Run the named tool, keeping failures as an explicit error.
    ///
    /// `args` of `null` is treated as an empty argument object.
    pub async fn dispatch(&self, name: &str, args: Value) -> Result<ToolResult, DispatchError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| DispatchError::UnknownTool(name.to_string()))?;

        let args = match args {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other,
        };

        Ok(tool.execute_raw(args).await?)
    }

    /// Run the named tool and collapse the outcome into a text response.
    pub async fn call_tool(&self, name: &str, args: Value) -> ToolCallResponse {
        match self.dispatch(name, args).await {
            Ok(result) => ToolCallResponse::text(result.as_text()),
            Err(e) => {
                log::error!("Tool '{}' failed: {}", name, e);
                ToolCallResponse::text(format!("Error executing tool {}: {}", name, e))
            }
        }
    }
}

#[cfg(test)]
#[path = "facade_tests.rs"]
mod tests;
