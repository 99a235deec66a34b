//! Tool registry shared by `tools/list` and `tools/call`.
//!
//! Each tool is one [`ToolMetadata`] entry carrying its schema, the function
//! that turns arguments into a [`ZoomRequest`], and how the response is
//! reported. Listing and dispatch read the same table, so an advertised tool
//! can never be missing a handler.

use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;
use serde_json::Value;
use strum::{Display, EnumString};

use super::Arguments;
use crate::error::ZoomError;
use crate::zoom::ZoomRequest;

/// All tool names as an exhaustive enum.
///
/// Variant order is the order tools are advertised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    // Meetings
    ListMeetings,
    GetMeeting,
    CreateMeeting,
    UpdateMeeting,
    DeleteMeeting,

    // Users
    ListUsers,
    GetUser,

    // Past meetings and recordings
    GetMeetingParticipants,
    GetMeetingRecordings,
}

/// How a successful upstream response is reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The upstream body as pretty-printed JSON
    PrettyJson,
    /// `Meeting <id> <verb> successfully`, ignoring the upstream body
    MeetingConfirmation { verb: &'static str },
}

impl ResponseFormat {
    pub fn render(&self, arguments: &Arguments<'_>, body: &Value) -> Result<String, ZoomError> {
        match self {
            ResponseFormat::PrettyJson => {
                Ok(serde_json::to_string_pretty(body).unwrap_or_default())
            }
            ResponseFormat::MeetingConfirmation { verb } => {
                let meeting_id = arguments.required_id("meeting_id")?;
                Ok(format!("Meeting {} {} successfully", meeting_id, verb))
            }
        }
    }
}

/// Metadata for a tool definition.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    /// Tool identifier - string representation derived via strum Display
    pub name: ToolName,

    /// Tool category for organizational purposes (e.g., "meetings", "users")
    pub category: &'static str,

    pub description: &'static str,

    /// JSON Schema for tool parameters (called lazily to avoid static initialization issues)
    pub parameters: fn() -> Value,

    /// Builds the upstream request, applying argument defaults
    pub build_request: fn(&Arguments<'_>) -> Result<ZoomRequest, ZoomError>,

    pub response: ResponseFormat,
}

impl ToolMetadata {
    pub fn mcp_definition(&self) -> McpToolDefinition {
        McpToolDefinition {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: (self.parameters)(),
        }
    }
}

/// Central registry of all tools, in advertised order.
pub struct ToolRegistry {
    tools: Vec<ToolMetadata>,
}

impl ToolRegistry {
    /// Build the registry from all registered tool definitions
    pub fn new() -> Self {
        let mut tools = Vec::new();

        super::tool_defs::register_all_tools(&mut tools);

        Self { tools }
    }

    /// Get all tools as MCP tool definitions
    pub fn mcp_definitions(&self) -> Vec<McpToolDefinition> {
        self.iter().map(ToolMetadata::mcp_definition).collect()
    }

    /// Get metadata by enum variant
    pub fn get(&self, name: ToolName) -> Option<&ToolMetadata> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Get metadata by string name
    pub fn get_by_str(&self, name: &str) -> Option<&ToolMetadata> {
        ToolName::from_str(name).ok().and_then(|n| self.get(n))
    }

    /// Iterator over all registered tools
    pub fn iter(&self) -> impl Iterator<Item = &ToolMetadata> {
        self.tools.iter()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global singleton registry instance
pub static REGISTRY: LazyLock<ToolRegistry> = LazyLock::new(ToolRegistry::new);

/// MCP tool definition structure (for output generation)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McpToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}
