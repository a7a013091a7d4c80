use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope: `{"message": ..., "data": ...}`, `message` omitted when unset
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

/// Error envelope: `{"error": ...}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data,
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_serializes_as_array() {
        let body = serde_json::to_string(&ApiResponse::success(Vec::<u8>::new())).unwrap();
        assert_eq!(body, r#"{"data":[]}"#);
    }

    #[test]
    fn test_message_is_included_when_set() {
        let body = serde_json::to_value(ApiResponse::with_message(1, "done")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "done", "data": 1}));
    }
}
