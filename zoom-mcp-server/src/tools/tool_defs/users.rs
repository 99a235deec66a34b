//! User tool definitions.

use serde_json::json;

use super::{DEFAULT_PAGE_SIZE, page_size_schema};
use crate::tools::registry::{ResponseFormat, ToolMetadata, ToolName};
use crate::zoom::ZoomRequest;

pub fn register(registry: &mut Vec<ToolMetadata>) {
    registry.extend([list_users(), get_user()]);
}

fn list_users() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::ListUsers,
        category: "users",
        description: "List users in your Zoom account",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "enum": ["active", "inactive", "pending"],
                        "description": "User status filter",
                        "default": "active"
                    },
                    "page_size": page_size_schema()
                }
            })
        },
        build_request: |args| {
            Ok(ZoomRequest::get(&["users"])
                .query("status", args.scalar_or("status", "active"))
                .query("page_size", args.scalar_or("page_size", DEFAULT_PAGE_SIZE)))
        },
        response: ResponseFormat::PrettyJson,
    }
}

fn get_user() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::GetUser,
        category: "users",
        description: "Get information about a specific user",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "user_id": {
                        "type": "string",
                        "description": "User ID or email address"
                    }
                },
                "required": ["user_id"]
            })
        },
        build_request: |args| {
            let user_id = args.required_id("user_id")?;
            Ok(ZoomRequest::get(&["users", user_id.as_str()]))
        },
        response: ResponseFormat::PrettyJson,
    }
}
