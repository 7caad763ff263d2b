// ABOUTME: Line-delimited JSON request and response shapes for the stdio server
// ABOUTME: Each request line yields exactly one response line echoing its id

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::tools::ToolInfo;

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: JsonValue,
    #[serde(default)]
    pub tool: Option<String>,
    #[serde(default)]
    pub arguments: JsonValue,
    #[serde(default)]
    pub list_tools: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub id: JsonValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn text(id: JsonValue, text: String) -> Self {
        Self {
            id,
            text: Some(text),
            tools: None,
            error: None,
        }
    }

    pub fn tools(id: JsonValue, tools: Vec<ToolInfo>) -> Self {
        Self {
            id,
            text: None,
            tools: Some(tools),
            error: None,
        }
    }

    pub fn error(id: JsonValue, message: impl Into<String>) -> Self {
        Self {
            id,
            text: None,
            tools: None,
            error: Some(message.into()),
        }
    }
}

/// Parse one request line. On failure the id is still recovered when the
/// line is a JSON object carrying one.
pub fn parse_request(line: &str) -> std::result::Result<Request, (JsonValue, String)> {
    let value: JsonValue =
        serde_json::from_str(line).map_err(|e| (JsonValue::Null, format!("Invalid JSON: {}", e)))?;
    let id = value.get("id").cloned().unwrap_or(JsonValue::Null);

    serde_json::from_value(value).map_err(|e| (id, format!("Invalid request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tool_request() {
        let request = parse_request(
            r#"{"id": 7, "tool": "generate-login-page-object", "arguments": {"skin": "generic"}}"#,
        )
        .unwrap();
        assert_eq!(request.id, json!(7));
        assert_eq!(request.tool.as_deref(), Some("generate-login-page-object"));
        assert_eq!(request.arguments, json!({"skin": "generic"}));
        assert!(!request.list_tools);
    }

    #[test]
    fn test_invalid_json_has_null_id() {
        let (id, message) = parse_request("{not json").unwrap_err();
        assert_eq!(id, JsonValue::Null);
        assert!(message.starts_with("Invalid JSON"));
    }

    #[test]
    fn test_bad_shape_keeps_id() {
        let (id, message) = parse_request(r#"{"id": "abc", "tool": 5}"#).unwrap_err();
        assert_eq!(id, json!("abc"));
        assert!(message.starts_with("Invalid request"));
    }

    #[test]
    fn test_response_omits_empty_fields() {
        let encoded = serde_json::to_string(&Response::text(json!(1), "ok".to_string())).unwrap();
        assert_eq!(encoded, r#"{"id":1,"text":"ok"}"#);

        let encoded = serde_json::to_string(&Response::error(json!(null), "bad")).unwrap();
        assert_eq!(encoded, r#"{"id":null,"error":"bad"}"#);
    }
}
