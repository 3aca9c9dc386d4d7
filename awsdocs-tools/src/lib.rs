//! # awsdocs-tools
//!
//! AWS documentation lookups exposed as [`awsdocs_core::Tool`]s.
//!
//! The [`provider`] module does the work: one live fetch per call, selector
//! based extraction, and deterministic fallback data whenever the live path
//! fails or finds nothing. The [`aws_docs`] module wraps each provider
//! operation as a tool.
//!
//! ```no_run
//! use awsdocs_tools::aws_docs;
//! use awsdocs_tools::provider::{DocumentationProvider, ProviderConfig};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(DocumentationProvider::new(ProviderConfig::default())?);
//! let facade = aws_docs::facade(provider);
//!
//! let response = facade
//!     .call_tool("list_aws_services", serde_json::json!({"category": "storage"}))
//!     .await;
//! println!("{}", response.joined_text());
//! # Ok(())
//! # }
//! ```

pub mod aws_docs;
pub mod provider;

// Re-export catalog constructors at crate root for convenience
pub use aws_docs::{all_tools, facade};
pub use provider::{DocumentationProvider, ProviderConfig};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use awsdocs_core::{Tool, ToolError, ToolResult};
    pub use schemars::JsonSchema;
    pub use serde::{Deserialize, Serialize};
}
