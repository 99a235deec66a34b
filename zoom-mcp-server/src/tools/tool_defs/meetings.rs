//! Meeting management tool definitions.

use serde_json::{Map, Value, json};

use super::{DEFAULT_PAGE_SIZE, page_size_schema};
use crate::error::ZoomError;
use crate::tools::{
    Arguments,
    registry::{ResponseFormat, ToolMetadata, ToolName},
};
use crate::zoom::ZoomRequest;

/// Zoom's "scheduled meeting" type
const DEFAULT_MEETING_TYPE: u8 = 2;

/// Optional `create_meeting` fields copied into the body only when supplied
const CREATE_OPTIONAL_FIELDS: [&str; 5] =
    ["start_time", "duration", "timezone", "agenda", "password"];

pub fn register(registry: &mut Vec<ToolMetadata>) {
    registry.extend([
        list_meetings(),
        get_meeting(),
        create_meeting(),
        update_meeting(),
        delete_meeting(),
    ]);
}

fn list_meetings() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::ListMeetings,
        category: "meetings",
        description: "List all scheduled meetings for the authenticated user. Returns upcoming, live, and previous meetings.",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "type": {
                        "type": "string",
                        "enum": ["scheduled", "live", "upcoming", "upcoming_meetings", "previous_meetings"],
                        "description": "The meeting types: scheduled, live, upcoming, upcoming_meetings, or previous_meetings",
                        "default": "upcoming"
                    },
                    "page_size": page_size_schema()
                }
            })
        },
        build_request: |args| {
            Ok(ZoomRequest::get(&["users", "me", "meetings"])
                .query("type", args.scalar_or("type", "upcoming"))
                .query("page_size", args.scalar_or("page_size", DEFAULT_PAGE_SIZE)))
        },
        response: ResponseFormat::PrettyJson,
    }
}

fn get_meeting() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::GetMeeting,
        category: "meetings",
        description: "Get detailed information about a specific meeting by meeting ID",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "meeting_id": {
                        "type": "string",
                        "description": "The meeting ID or meeting UUID"
                    }
                },
                "required": ["meeting_id"]
            })
        },
        build_request: |args| {
            let meeting_id = args.required_id("meeting_id")?;
            Ok(ZoomRequest::get(&["meetings", meeting_id.as_str()]))
        },
        response: ResponseFormat::PrettyJson,
    }
}

fn create_meeting() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::CreateMeeting,
        category: "meetings",
        description: "Create a new Zoom meeting with specified settings",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "topic": {
                        "type": "string",
                        "description": "Meeting topic/title"
                    },
                    "type": {
                        "type": "number",
                        "description": "Meeting type: 1 (instant), 2 (scheduled), 3 (recurring no fixed time), 8 (recurring fixed time)",
                        "default": DEFAULT_MEETING_TYPE
                    },
                    "start_time": {
                        "type": "string",
                        "description": "Meeting start time in ISO 8601 format (e.g., 2023-03-22T07:32:55Z)"
                    },
                    "duration": {
                        "type": "number",
                        "description": "Meeting duration in minutes"
                    },
                    "timezone": {
                        "type": "string",
                        "description": "Timezone for the meeting (e.g., America/New_York)"
                    },
                    "agenda": {
                        "type": "string",
                        "description": "Meeting description/agenda"
                    },
                    "password": {
                        "type": "string",
                        "description": "Meeting password"
                    },
                    "settings": {
                        "type": "object",
                        "description": "Additional meeting settings",
                        "properties": {
                            "host_video": {
                                "type": "boolean",
                                "description": "Start video when host joins"
                            },
                            "participant_video": {
                                "type": "boolean",
                                "description": "Start video when participants join"
                            },
                            "join_before_host": {
                                "type": "boolean",
                                "description": "Allow participants to join before host"
                            },
                            "mute_upon_entry": {
                                "type": "boolean",
                                "description": "Mute participants upon entry"
                            },
                            "waiting_room": {
                                "type": "boolean",
                                "description": "Enable waiting room"
                            },
                            "audio": {
                                "type": "string",
                                "enum": ["both", "telephony", "voip"],
                                "description": "Audio options"
                            }
                        }
                    }
                },
                "required": ["topic"]
            })
        },
        build_request: create_meeting_request,
        response: ResponseFormat::PrettyJson,
    }
}

fn create_meeting_request(args: &Arguments<'_>) -> Result<ZoomRequest, ZoomError> {
    let topic = args
        .get("topic")
        .cloned()
        .ok_or_else(|| ZoomError::missing_argument("topic"))?;

    let mut body = Map::new();
    body.insert("topic".to_string(), topic);
    body.insert(
        "type".to_string(),
        args.value_or("type", json!(DEFAULT_MEETING_TYPE)),
    );
    for field in CREATE_OPTIONAL_FIELDS {
        if let Some(value) = args.get(field) {
            body.insert(field.to_string(), value.clone());
        }
    }
    body.insert("settings".to_string(), args.value_or("settings", json!({})));

    Ok(ZoomRequest::post(&["users", "me", "meetings"]).body(Value::Object(body)))
}

fn update_meeting() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::UpdateMeeting,
        category: "meetings",
        description: "Update an existing meeting's settings",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "meeting_id": {
                        "type": "string",
                        "description": "The meeting ID to update"
                    },
                    "topic": {
                        "type": "string",
                        "description": "Updated meeting topic"
                    },
                    "start_time": {
                        "type": "string",
                        "description": "Updated start time in ISO 8601 format"
                    },
                    "duration": {
                        "type": "number",
                        "description": "Updated duration in minutes"
                    },
                    "agenda": {
                        "type": "string",
                        "description": "Updated meeting agenda"
                    },
                    "settings": {
                        "type": "object",
                        "description": "Updated meeting settings"
                    }
                },
                "required": ["meeting_id"]
            })
        },
        build_request: |args| {
            let meeting_id = args.required_id("meeting_id")?;
            Ok(ZoomRequest::patch(&["meetings", meeting_id.as_str()])
                .body(Value::Object(args.without("meeting_id"))))
        },
        response: ResponseFormat::MeetingConfirmation { verb: "updated" },
    }
}

fn delete_meeting() -> ToolMetadata {
    ToolMetadata {
        name: ToolName::DeleteMeeting,
        category: "meetings",
        description: "Delete a scheduled meeting",
        parameters: || {
            json!({
                "type": "object",
                "properties": {
                    "meeting_id": {
                        "type": "string",
                        "description": "The meeting ID to delete"
                    },
                    "occurrence_id": {
                        "type": "string",
                        "description": "The meeting occurrence ID for recurring meetings"
                    }
                },
                "required": ["meeting_id"]
            })
        },
        build_request: |args| {
            let meeting_id = args.required_id("meeting_id")?;
            let request = ZoomRequest::delete(&["meetings", meeting_id.as_str()]);
            Ok(match args.optional_id("occurrence_id") {
                Some(occurrence_id) => request.query("occurrence_id", occurrence_id),
                None => request,
            })
        },
        response: ResponseFormat::MeetingConfirmation { verb: "deleted" },
    }
}

#[cfg(test)]
mod tests {
    use super::super::build;
    use super::*;
    use crate::zoom::HttpMethod;

    #[test]
    fn test_list_meetings_defaults() {
        let request = build(ToolName::ListMeetings, json!({}));
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.path_and_query(),
            "/users/me/meetings?type=upcoming&page_size=30"
        );
    }

    #[test]
    fn test_list_meetings_explicit_arguments() {
        let request = build(
            ToolName::ListMeetings,
            json!({"type": "previous_meetings", "page_size": 100}),
        );
        assert_eq!(
            request.path_and_query(),
            "/users/me/meetings?type=previous_meetings&page_size=100"
        );
    }

    #[test]
    fn test_get_meeting_path() {
        let request = build(ToolName::GetMeeting, json!({"meeting_id": 85746065432u64}));
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path_and_query(), "/meetings/85746065432");
        assert!(request.json_body().is_none());
    }

    #[test]
    fn test_create_meeting_with_topic_only() {
        let request = build(ToolName::CreateMeeting, json!({"topic": "Standup"}));
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path(), "/users/me/meetings");
        assert_eq!(
            request.json_body(),
            Some(&json!({"topic": "Standup", "type": 2, "settings": {}}))
        );
    }

    #[test]
    fn test_create_meeting_copies_supplied_fields() {
        let request = build(
            ToolName::CreateMeeting,
            json!({
                "topic": "Planning",
                "type": 8,
                "start_time": "2024-03-22T07:32:55Z",
                "duration": 45,
                "timezone": "America/New_York",
                "agenda": null,
                "settings": {"waiting_room": true, "audio": "voip"},
                "unrelated": "dropped"
            }),
        );
        assert_eq!(
            request.json_body(),
            Some(&json!({
                "topic": "Planning",
                "type": 8,
                "start_time": "2024-03-22T07:32:55Z",
                "duration": 45,
                "timezone": "America/New_York",
                "settings": {"waiting_room": true, "audio": "voip"}
            }))
        );
    }

    #[test]
    fn test_create_meeting_requires_topic() {
        let tool = crate::tools::REGISTRY.get(ToolName::CreateMeeting).unwrap();
        let args = Map::new();
        let err = (tool.build_request)(&Arguments::new(&args)).unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument: topic");
    }

    #[test]
    fn test_update_meeting_body_excludes_meeting_id() {
        let request = build(
            ToolName::UpdateMeeting,
            json!({"meeting_id": "123", "topic": "Renamed", "duration": 30}),
        );
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(request.path(), "/meetings/123");
        assert_eq!(
            request.json_body(),
            Some(&json!({"topic": "Renamed", "duration": 30}))
        );
    }

    #[test]
    fn test_delete_meeting_without_occurrence() {
        let request = build(ToolName::DeleteMeeting, json!({"meeting_id": "123"}));
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path_and_query(), "/meetings/123");
    }

    #[test]
    fn test_delete_meeting_with_occurrence() {
        let request = build(
            ToolName::DeleteMeeting,
            json!({"meeting_id": "123", "occurrence_id": "1648194360000"}),
        );
        assert_eq!(
            request.path_and_query(),
            "/meetings/123?occurrence_id=1648194360000"
        );
    }
}
