//! The four AWS documentation tools.
//!
//! | Tool | Description |
//! |------|-------------|
//! | [`SearchAwsDocsTool`] | Search the developer guides |
//! | [`GetAwsServiceDocsTool`] | Service overview or a single topic page |
//! | [`ListAwsServicesTool`] | Service listing, optionally by category |
//! | [`GetAwsPricingInfoTool`] | Pricing rows for a service |
//!
//! Every tool shares one [`DocumentationProvider`] and answers with
//! pretty-printed JSON.

mod list_services;
mod pricing_info;
mod search_docs;
mod service_docs;

pub use list_services::{ListAwsServicesInput, ListAwsServicesTool};
pub use pricing_info::{GetAwsPricingInfoInput, GetAwsPricingInfoTool};
pub use search_docs::{SearchAwsDocsInput, SearchAwsDocsTool};
pub use service_docs::{GetAwsServiceDocsInput, GetAwsServiceDocsTool};

use crate::provider::DocumentationProvider;
use awsdocs_core::tool::{box_tool, DynTool};
use awsdocs_core::ToolFacade;
use std::sync::Arc;

/// Returns all AWS documentation tools in catalog order.
pub fn all_tools(provider: Arc<DocumentationProvider>) -> Vec<Box<dyn DynTool>> {
    vec![
        box_tool(SearchAwsDocsTool::new(provider.clone())),
        box_tool(GetAwsServiceDocsTool::new(provider.clone())),
        box_tool(ListAwsServicesTool::new(provider.clone())),
        box_tool(GetAwsPricingInfoTool::new(provider)),
    ]
}

/// A [`ToolFacade`] over [`all_tools`].
pub fn facade(provider: Arc<DocumentationProvider>) -> ToolFacade {
    ToolFacade::new(all_tools(provider))
}
