//! Zoom tool catalogue.
//!
//! Tools are declared once in the registry; `tools/list` and `tools/call`
//! both read from it.

mod arguments;
pub mod registry;
mod tool_defs;

pub use arguments::Arguments;
pub use registry::{McpToolDefinition, REGISTRY, ToolRegistry};
