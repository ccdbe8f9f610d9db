use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Reply to `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Reply to `POST /logout`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Reply to `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Decode a reply body.
///
/// The server reports application errors as JSON with 4xx/5xx statuses, so a
/// body that decodes wins over the status. Only an undecodable body is a
/// transport error.
pub fn decode_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, TransportError> {
    match serde_json::from_str(body) {
        Ok(decoded) => Ok(decoded),
        Err(e) if (200..300).contains(&status) => Err(TransportError::Decode(e.to_string())),
        Err(_) => Err(TransportError::Status {
            status,
            body: body.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chat_request_body() {
        let body = serde_json::to_string(&ChatRequest {
            message: "payroll for March".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"payroll for March"}"#);
    }

    #[test]
    fn test_chat_response_without_message() {
        let response: ChatResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(
            response,
            ChatResponse {
                success: false,
                message: None
            }
        );
    }

    #[test]
    fn test_chat_response_ignores_extra_fields() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"success":true,"message":"ok","data":[1,2]}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_decode_error_status_with_json_body() {
        let response: ChatResponse =
            decode_response(401, r#"{"success":false,"message":"Not authenticated"}"#).unwrap();
        assert_eq!(response.message.as_deref(), Some("Not authenticated"));
    }

    #[test]
    fn test_decode_error_status_with_html_body() {
        let err = decode_response::<ChatResponse>(502, "<html>").unwrap_err();
        assert_eq!(
            err,
            TransportError::Status {
                status: 502,
                body: "<html>".to_string()
            }
        );
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response::<LogoutResponse>(200, "").unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
