use serde::{Deserialize, Serialize};

/// Body of `POST /api/gemini`. Both fields are optional here so that a
/// missing `text` is reported by the relay as a 400 with a readable message.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(rename = "type", default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: Some(result.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn success_omits_error_field() {
        let value = serde_json::to_value(GenerateResponse::ok("Pay rent every month.")).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "result": "Pay rent every month."})
        );
    }

    #[test]
    fn failure_omits_result_field() {
        let value = serde_json::to_value(GenerateResponse::failed("Text is required")).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Text is required"}));
    }

    #[test]
    fn request_fields_are_optional() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.task_type.is_none());
        assert!(request.text.is_none());

        let request: GenerateRequest =
            serde_json::from_str(r#"{"type": "summary", "text": "Clause 4"}"#).unwrap();
        assert_eq!(request.task_type.as_deref(), Some("summary"));
        assert_eq!(request.text.as_deref(), Some("Clause 4"));
    }
}
