//! MCP stdio server for AWS documentation lookups.
//!
//! The server advertises the four AWS documentation tools and answers
//! `tools/list` and `tools/call` from a [`ToolFacade`](awsdocs_core::ToolFacade).
//! Tool failures never surface as protocol errors; they come back as a
//! successful result whose text starts with `Error executing tool`.
//!
//! # Example
//!
//! ```rust,no_run
//! use awsdocs_server::AwsDocsServer;
//! use awsdocs_tools::provider::ProviderConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let server = AwsDocsServer::new(ProviderConfig::default())?;
//! server.serve_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod server;

pub use config::Args;
pub use server::{AwsDocsServer, SERVER_NAME};
