//! # awsdocs-core
//!
//! Tool abstraction and dispatch for the AWS documentation MCP server.
//!
//! Tools implement [`Tool`] with a typed input whose JSON schema is derived
//! from the Rust type. A [`ToolFacade`] holds the fixed catalog, lists it, and
//! routes calls by name, always answering with a [`ToolCallResponse`].
//!
//! ```rust
//! use awsdocs_core::{box_tools, Tool, ToolError, ToolFacade, ToolResult};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct PingInput {}
//!
//! struct Ping;
//!
//! impl Tool for Ping {
//!     type Input = PingInput;
//!     fn name(&self) -> &str { "ping" }
//!     fn description(&self) -> &str { "Reply with pong" }
//!     async fn execute(&self, _input: Self::Input) -> Result<ToolResult, ToolError> {
//!         Ok("pong".into())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let facade = ToolFacade::new(box_tools![Ping]);
//! let response = facade.call_tool("ping", serde_json::json!({})).await;
//! assert_eq!(response.joined_text(), "pong");
//! # });
//! ```

pub mod facade;
pub mod tool;

pub use facade::{DispatchError, ResponseContent, ToolCallResponse, ToolDescriptor, ToolFacade};
pub use tool::{box_tool, DynTool, Tool, ToolError, ToolResult};
