//! Tool definitions organized by category.
//!
//! Each submodule defines tools for a specific category and provides
//! a registration function that appends them to the registry. Registration
//! order is the advertised order.

mod meeting_history;
mod meetings;
mod users;

use super::registry::ToolMetadata;

/// Shared schema for the `page_size` parameter
fn page_size_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "number",
        "description": "Number of records per page (max 300)",
        "default": DEFAULT_PAGE_SIZE
    })
}

const DEFAULT_PAGE_SIZE: u32 = 30;

/// Register all tools from all categories into the registry.
pub fn register_all_tools(registry: &mut Vec<ToolMetadata>) {
    meetings::register(registry);
    users::register(registry);
    meeting_history::register(registry);
}

#[cfg(test)]
fn build(name: super::registry::ToolName, args: serde_json::Value) -> crate::zoom::ZoomRequest {
    let map = args.as_object().cloned().unwrap_or_default();
    let tool = super::REGISTRY.get(name).unwrap();
    (tool.build_request)(&super::Arguments::new(&map)).unwrap()
}
