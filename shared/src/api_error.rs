use thiserror::Error;

/// Uniform failure type for every request a page controller makes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx response whose body was not the JSON we asked for
    #[error("Unexpected response format: {0}")]
    UnexpectedContentType(String),

    /// JSON that does not match the declared record type
    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a `Status` error from a failed response.
    ///
    /// The backend reports errors either as `{"error": "..."}` or as a plain
    /// text body. When neither carries a message the status line is used.
    pub fn from_error_body(status: u16, status_text: &str, body: &str) -> Self {
        let body = body.trim();

        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .or_else(|| value.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });

        let message = match from_json {
            Some(message) if !message.trim().is_empty() => message,
            _ if !body.is_empty() && !body.starts_with('{') => body.to_string(),
            _ => format!("Request failed with status {} {}", status, status_text)
                .trim_end()
                .to_string(),
        };

        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins() {
        let err = ApiError::from_error_body(400, "Bad Request", r#"{"error":"Report is finalized"}"#);
        assert_eq!(err.to_string(), "Report is finalized");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_message_field_used_when_no_error_field() {
        let err = ApiError::from_error_body(500, "Internal Server Error", r#"{"message":"boom"}"#);
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_plain_text_body() {
        let err = ApiError::from_error_body(400, "Bad Request", "Card holder name is required");
        assert_eq!(err.to_string(), "Card holder name is required");
    }

    #[test]
    fn test_empty_body_falls_back_to_status_line() {
        let err = ApiError::from_error_body(404, "Not Found", "");
        assert_eq!(err.to_string(), "Request failed with status 404 Not Found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_json_without_message_falls_back_to_status_line() {
        let err = ApiError::from_error_body(500, "", r#"{"timestamp":"2024-01-01"}"#);
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: ApiError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.status().is_none());
    }
}
