//! Past meeting participant and cloud recording tool definitions.

use serde_json::json;

use super::{DEFAULT_PAGE_SIZE, page_size_schema};
use crate::tools::registry::{ResponseFormat, ToolMetadata, ToolName};
use crate::zoom::ZoomRequest;

pub fn register(registry: &mut Vec<ToolMetadata>) {
    registry.extend([get_meeting_participants(), get_meeting_recordings()]);
}

fn get_meeting_participants() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::GetMeetingParticipants,
        category: "meeting_history",
        description: "Get list of participants for a past meeting",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "meeting_id": {
                        "type": "string",
                        "description": "The meeting ID or UUID"
                    },
                    "page_size": page_size_schema()
                },
                "required": ["meeting_id"]
            })
        },
        build_request: |args| {
            let meeting_id = args.required_id("meeting_id")?;
            Ok(
                ZoomRequest::get(&["past_meetings", meeting_id.as_str(), "participants"])
                    .query("page_size", args.scalar_or("page_size", DEFAULT_PAGE_SIZE)),
            )
        },
        response: ResponseFormat::PrettyJson,
    }
}

fn get_meeting_recordings() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::GetMeetingRecordings,
        category: "meeting_history",
        description: "Get cloud recordings for a meeting",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "meeting_id": {
                        "type": "string",
                        "description": "The meeting ID or UUID"
                    }
                },
                "required": ["meeting_id"]
            })
        },
        build_request: |args| {
            let meeting_id = args.required_id("meeting_id")?;
            Ok(ZoomRequest::get(&["meetings", meeting_id.as_str(), "recordings"]))
        },
        response: ResponseFormat::PrettyJson,
    }
}
